use super::Error;

/// No registered model code generator handles the requested language.
#[derive(Debug)]
pub(super) struct UnknownLanguage {
    language: Box<str>,
}

impl std::error::Error for UnknownLanguage {}

impl core::fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "No model code generator is registered for language '{}'.",
            self.language
        )
    }
}

impl Error {
    /// Creates an error for a language with no registered generator.
    pub fn unknown_language(language: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownLanguage(UnknownLanguage {
            language: language.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown language error.
    pub fn is_unknown_language(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownLanguage(_))
    }
}
