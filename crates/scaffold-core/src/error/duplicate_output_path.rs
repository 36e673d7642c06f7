use super::Error;
use std::path::PathBuf;

/// Two scaffolded files share a path.
#[derive(Debug)]
pub(super) struct DuplicateOutputPath {
    path: PathBuf,
}

impl std::error::Error for DuplicateOutputPath {}

impl core::fmt::Display for DuplicateOutputPath {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "more than one scaffolded file would be written to '{}'",
            self.path.display()
        )
    }
}

impl Error {
    /// Creates an error for a path produced twice by a generator.
    pub fn duplicate_output_path(path: impl Into<PathBuf>) -> Error {
        Error::from(super::ErrorKind::DuplicateOutputPath(DuplicateOutputPath {
            path: path.into(),
        }))
    }

    /// Returns `true` if this error is a duplicate output path error.
    pub fn is_duplicate_output_path(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateOutputPath(_))
    }
}
