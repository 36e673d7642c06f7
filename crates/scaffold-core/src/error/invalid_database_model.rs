use super::Error;

/// The introspected database model is internally inconsistent.
///
/// Raised for broken back-references (a column pointing at the wrong table,
/// a foreign key naming a column that does not exist) and for duplicate
/// table names.
#[derive(Debug)]
pub(super) struct InvalidDatabaseModel {
    message: Box<str>,
}

impl std::error::Error for InvalidDatabaseModel {}

impl core::fmt::Display for InvalidDatabaseModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("invalid database model: ")?;
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an invalid database model error.
    pub fn invalid_database_model(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDatabaseModel(InvalidDatabaseModel {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid database model error.
    pub fn is_invalid_database_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDatabaseModel(_))
    }
}
