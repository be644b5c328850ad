use super::Error;

/// Error when the target database cannot express a requested feature.
///
/// This occurs when:
/// - A combination of query modifiers has no equivalent in the dialect
///   (row locking together with ROWNUM pagination on Oracle)
/// - A modifier is not available at all (`FOR UPDATE` on SQLite)
///
/// Callers can match on [`Error::is_unsupported_feature`] to detect dialect
/// capability gaps.
#[derive(Debug)]
pub(super) struct UnsupportedFeature {
    message: Box<str>,
}

impl std::error::Error for UnsupportedFeature {}

impl core::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported feature: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported feature error.
    pub fn unsupported_feature(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFeature(UnsupportedFeature {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported feature error.
    pub fn is_unsupported_feature(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedFeature(_))
    }
}
