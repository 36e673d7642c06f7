use super::Error;

/// The requested context class name cannot be used as a C# identifier.
#[derive(Debug)]
pub(super) struct InvalidIdentifier {
    name: Box<str>,
}

impl std::error::Error for InvalidIdentifier {}

impl core::fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "The context class name '{}' is not a valid C# identifier.",
            self.name
        )
    }
}

impl Error {
    /// Creates an error for a context name that is not a legal identifier.
    pub fn invalid_identifier(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidIdentifier(InvalidIdentifier {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid identifier error.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidIdentifier(_))
    }
}
