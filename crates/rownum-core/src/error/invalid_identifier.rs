use super::Error;

/// Error when an identifier exceeds the maximum name length of the database.
#[derive(Debug)]
pub(super) struct InvalidIdentifier {
    name: Box<str>,
    max_length: usize,
}

impl std::error::Error for InvalidIdentifier {}

impl core::fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid identifier: the identifier '{}' is too long. Maximum length is {}",
            self.name, self.max_length
        )
    }
}

impl Error {
    /// Creates an invalid identifier error for `name`, which is longer than
    /// `max_length`.
    pub fn invalid_identifier(name: impl Into<String>, max_length: usize) -> Error {
        Error::from(super::ErrorKind::InvalidIdentifier(InvalidIdentifier {
            name: name.into().into(),
            max_length,
        }))
    }

    /// Returns `true` if this error is an invalid identifier error.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidIdentifier(_))
    }
}
