mod adhoc;
mod invalid_identifier;
mod invalid_statement;
mod invariant_violation;
mod unsupported_feature;

use adhoc::AdhocError;
use invalid_identifier::InvalidIdentifier;
use invalid_statement::InvalidStatement;
use invariant_violation::InvariantViolation;
use std::sync::Arc;
use unsupported_feature::UnsupportedFeature;

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while building or serializing a query.
///
/// None of these errors are transient. Retrying the same call with the same
/// input always produces the same error.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        // A shared or already chained consequent is flattened into a message
        // so another error's chain is never rewritten.
        let chained = matches!(err.inner.as_ref(), Some(inner) if inner.cause.is_some());
        if chained || err.inner.as_mut().and_then(Arc::get_mut).is_none() {
            err = Error::from_args(format_args!("{err}"));
        }

        if let Some(inner) = err.inner.as_mut().and_then(Arc::get_mut) {
            inner.cause = Some(self);
        }
        err
    }

    /// Creates an ad-hoc error from pre-formatted arguments.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args)))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    #[cfg(test)]
    fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
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
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    UnsupportedFeature(UnsupportedFeature),
    InvalidIdentifier(InvalidIdentifier),
    InvalidStatement(InvalidStatement),
    InvariantViolation(InvariantViolation),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            UnsupportedFeature(err) => core::fmt::Display::fmt(err, f),
            InvalidIdentifier(err) => core::fmt::Display::fmt(err, f),
            InvalidStatement(err) => core::fmt::Display::fmt(err, f),
            InvariantViolation(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown rownum error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<core::fmt::Error> for Error {
    fn from(err: core::fmt::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_size() {
        // Error stays one word wide
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn context_keeps_root_kind() {
        let err = Error::unsupported_feature("SELECT FOR UPDATE with offset/limit")
            .context(err!("serializing query"));

        assert!(!err.is_unsupported_feature());
        assert!(err.root().is_unsupported_feature());
        assert_eq!(
            err.to_string(),
            "serializing query: unsupported feature: SELECT FOR UPDATE with offset/limit"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
        assert!(std::error::Error::source(&our_err).is_some());
    }

    #[test]
    fn unsupported_feature_error() {
        let err = Error::unsupported_feature("SELECT FOR UPDATE not supported");
        assert!(err.is_unsupported_feature());
        assert!(!err.is_invalid_identifier());
        assert_eq!(
            err.to_string(),
            "unsupported feature: SELECT FOR UPDATE not supported"
        );
    }

    #[test]
    fn invalid_identifier_error() {
        let err = Error::invalid_identifier("a_very_long_column_name", 10);
        assert!(err.is_invalid_identifier());
        assert_eq!(
            err.to_string(),
            "invalid identifier: the identifier 'a_very_long_column_name' is too long. Maximum length is 10"
        );
    }

    #[test]
    fn invalid_statement_error() {
        let err = Error::invalid_statement("IN list is empty");
        assert!(err.is_invalid_statement());
        assert_eq!(err.to_string(), "invalid statement: IN list is empty");
    }

    #[test]
    fn invariant_violation_error() {
        let err = Error::invariant_violation("never happens");
        assert!(err.is_invariant_violation());
        assert!(!err.is_unsupported_feature());
        assert_eq!(err.to_string(), "invariant violation: never happens");
    }
}
