use super::Error;

/// Error when a code path that should be unreachable is taken.
///
/// This points at a defect in how the serializer was integrated, not at the
/// query being serialized.
#[derive(Debug)]
pub(super) struct InvariantViolation {
    message: Box<str>,
}

impl std::error::Error for InvariantViolation {}

impl core::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invariant violation: {}", self.message)
    }
}

impl Error {
    /// Creates an invariant violation error.
    pub fn invariant_violation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvariantViolation(InvariantViolation {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invariant violation.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvariantViolation(_))
    }
}
