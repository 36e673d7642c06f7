mod adhoc;
mod duplicate_output_path;
mod existing_files;
mod invalid_database_model;
mod invalid_identifier;
mod io;
mod read_only_files;
mod template;
mod unknown_language;

use adhoc::AdhocError;
use duplicate_output_path::DuplicateOutputPath;
use existing_files::ExistingFiles;
use invalid_database_model::InvalidDatabaseModel;
use invalid_identifier::InvalidIdentifier;
use io::IoError;
use read_only_files::ReadOnlyFiles;
use std::path::PathBuf;
use std::sync::Arc;
use template::TemplateError;
use unknown_language::UnknownLanguage;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while scaffolding.
///
/// Only caller-facing problems surface as an `Error`: an illegal context
/// name, an unregistered output language, conflicting output files or a
/// malformed database model. Schema oddities that should not abort a run are
/// recorded as notes on the scaffolded model instead.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed first, followed by the original error.
    pub fn context(self, consequent: Error) -> Error {
        let kind = match Arc::try_unwrap(consequent.inner) {
            Ok(inner) => inner.kind,
            Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
        };

        Error {
            inner: Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            }),
        }
    }

    /// Paths named by an [`existing_files`](Error::existing_files) or
    /// [`read_only_files`](Error::read_only_files) error.
    pub fn conflicting_files(&self) -> Option<&[PathBuf]> {
        match self.kind() {
            ErrorKind::ExistingFiles(err) => Some(&err.files),
            ErrorKind::ReadOnlyFiles(err) => Some(&err.files),
            _ => None,
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::Io(err) => Some(&err.source),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Io(IoError),
    InvalidIdentifier(InvalidIdentifier),
    UnknownLanguage(UnknownLanguage),
    ExistingFiles(ExistingFiles),
    ReadOnlyFiles(ReadOnlyFiles),
    InvalidDatabaseModel(InvalidDatabaseModel),
    DuplicateOutputPath(DuplicateOutputPath),
    Template(TemplateError),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Io(err) => core::fmt::Display::fmt(err, f),
            InvalidIdentifier(err) => core::fmt::Display::fmt(err, f),
            UnknownLanguage(err) => core::fmt::Display::fmt(err, f),
            ExistingFiles(err) => core::fmt::Display::fmt(err, f),
            ReadOnlyFiles(err) => core::fmt::Display::fmt(err, f),
            InvalidDatabaseModel(err) => core::fmt::Display::fmt(err, f),
            DuplicateOutputPath(err) => core::fmt::Display::fmt(err, f),
            Template(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Joins paths the way conflict messages list them.
fn join_paths(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        assert_eq!(core::mem::size_of::<usize>(), core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let err = Error::invalid_identifier("1Context")
            .context(err!("validating options"))
            .context(err!("scaffolding"));

        assert_eq!(
            err.to_string(),
            "scaffolding: validating options: The context class name '1Context' is not a valid C# identifier."
        );
    }

    #[test]
    fn anyhow_bridge() {
        let our_err: Error = anyhow::anyhow!("something failed").into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn existing_files_lists_every_path() {
        let err = Error::existing_files(
            "out",
            vec![PathBuf::from("Blog.cs"), PathBuf::from("Post.cs")],
        );

        assert!(err.is_existing_files());
        assert_eq!(
            err.to_string(),
            "The following file(s) already exist in directory 'out': Blog.cs, Post.cs. \
             Use the force flag to overwrite these files."
        );
        assert_eq!(
            err.conflicting_files().unwrap(),
            &[PathBuf::from("Blog.cs"), PathBuf::from("Post.cs")]
        );
    }

    #[test]
    fn read_only_files_lists_every_path() {
        let err = Error::read_only_files("out", vec![PathBuf::from("Blog.cs")]);

        assert!(err.is_read_only_files());
        assert!(!err.is_existing_files());
        assert_eq!(
            err.to_string(),
            "No files were generated in directory 'out'. The following file(s) already \
             exist(s) and must be made writeable to continue: Blog.cs."
        );
    }

    #[test]
    fn unknown_language() {
        let err = Error::unknown_language("F#");
        assert!(err.is_unknown_language());
        assert_eq!(
            err.to_string(),
            "No model code generator is registered for language 'F#'."
        );
    }
}
