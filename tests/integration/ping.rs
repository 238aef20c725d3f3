// tests/integration/ping.rs
use star_template::ping;

#[test]
fn ping_is_always_pong() {
    for _ in 0..100 {
        assert_eq!(ping(), "pong");
    }
}

#[test]
fn ping_does_not_touch_the_version() {
    let before = star_template::version();
    let _ = ping();
    assert_eq!(star_template::version(), before);
}
