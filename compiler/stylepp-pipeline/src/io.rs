use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stylepp_util::SourceBuffer;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf, source: io::Error },

    #[error("read file failed: {}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("{} is empty, nothing to process", .path.display())]
    Empty { path: PathBuf },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("could not create {}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("could not write all {expected} bytes to {}", .path.display())]
    ShortWrite {
        path: PathBuf,
        expected: usize,
        source: io::Error,
    },

    #[error("could not write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Reads the whole file into a terminator-backed buffer. An empty file is an error: there
/// is nothing to process.
pub fn read_source(path: &Path) -> Result<SourceBuffer, SourceError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if bytes.is_empty() {
        return Err(SourceError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(SourceBuffer::new(bytes))
}

/// Writes exactly `bytes` to `path`, replacing whatever was there.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), OutputError> {
    let mut file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|source| match source.kind() {
            io::ErrorKind::WriteZero => OutputError::ShortWrite {
                path: path.to_path_buf(),
                expected: bytes.len(),
                source,
            },
            _ => OutputError::Write {
                path: path.to_path_buf(),
                source,
            },
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("absent.tcss")).unwrap_err();

        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.tcss");
        std::fs::write(&path, b"").unwrap();

        assert!(matches!(read_source(&path), Err(SourceError::Empty { .. })));
    }

    #[test]
    fn directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            read_source(dir.path()),
            Err(SourceError::Unreadable { .. })
        ));
    }

    #[test]
    fn reads_with_terminator() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.tcss");
        std::fs::write(&path, b"a{}").unwrap();

        let source = read_source(&path).unwrap();
        assert_eq!(source.as_bytes(), b"a{}\0");
    }

    #[test]
    fn write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.css");
        std::fs::write(&path, b"a much longer previous file").unwrap();

        write_output(&path, b"short").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("style.css");

        assert!(matches!(
            write_output(&path, b"x"),
            Err(OutputError::Create { .. })
        ));
    }
}
