use super::Error;
use std::path::PathBuf;

/// Output files already exist and overwriting was not requested.
#[derive(Debug)]
pub(super) struct ExistingFiles {
    pub(super) dir: PathBuf,
    pub(super) files: Vec<PathBuf>,
}

impl std::error::Error for ExistingFiles {}

impl core::fmt::Display for ExistingFiles {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "The following file(s) already exist in directory '{}': {}. \
             Use the force flag to overwrite these files.",
            self.dir.display(),
            super::join_paths(&self.files)
        )
    }
}

impl Error {
    /// Creates an error listing every output file that already exists.
    pub fn existing_files(dir: impl Into<PathBuf>, files: Vec<PathBuf>) -> Error {
        Error::from(super::ErrorKind::ExistingFiles(ExistingFiles {
            dir: dir.into(),
            files,
        }))
    }

    /// Returns `true` if this error is an existing files error.
    pub fn is_existing_files(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExistingFiles(_))
    }
}
