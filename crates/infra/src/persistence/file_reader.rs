// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }

    /// Read the whole file as UTF-8, mapping a missing file to `None`.
    pub fn read_optional_string(path: &Path) -> io::Result<Option<String>> {
        let mut reader = match Self::open_buffered(path) {
            Ok(reader) => reader,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(Some(buf))
    }
}
