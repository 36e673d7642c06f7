use super::Error;
use std::path::PathBuf;

/// Output files exist but cannot be overwritten.
#[derive(Debug)]
pub(super) struct ReadOnlyFiles {
    pub(super) dir: PathBuf,
    pub(super) files: Vec<PathBuf>,
}

impl std::error::Error for ReadOnlyFiles {}

impl core::fmt::Display for ReadOnlyFiles {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "No files were generated in directory '{}'. The following file(s) already \
             exist(s) and must be made writeable to continue: {}.",
            self.dir.display(),
            super::join_paths(&self.files)
        )
    }
}

impl Error {
    /// Creates an error listing every read-only output file.
    pub fn read_only_files(dir: impl Into<PathBuf>, files: Vec<PathBuf>) -> Error {
        Error::from(super::ErrorKind::ReadOnlyFiles(ReadOnlyFiles {
            dir: dir.into(),
            files,
        }))
    }

    /// Returns `true` if this error is a read-only files error.
    pub fn is_read_only_files(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ReadOnlyFiles(_))
    }
}
