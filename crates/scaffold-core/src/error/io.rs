use super::Error;
use std::path::PathBuf;

/// A filesystem operation failed.
#[derive(Debug)]
pub(super) struct IoError {
    path: PathBuf,
    pub(super) source: std::io::Error,
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

impl Error {
    /// Creates an error from a failed filesystem operation on `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Error::from(super::ErrorKind::Io(IoError {
            path: path.into(),
            source,
        }))
    }

    /// Returns `true` if this error is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Io(_))
    }
}
