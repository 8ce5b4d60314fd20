use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Any failure that cannot be confidently attributed to any other error
    /// category in this enum.
    ///
    /// Use of Internal is never a guarantee that the error was not caused
    /// by the user, only that the code cannot tell.
    Internal,

    /// The user provided invalid input or asked for something that cannot
    /// be done.
    User,
}

/// Fine-grained condition flags for consumers that want to branch on error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No BEGIN/END envelope could be located in the input.
    ArmoringInvalid,
    /// The armored body is not valid Radix-64.
    ArmoringDecode,
    /// A packet field does not fit its length encoding.
    PacketTooLarge,
    /// The payload provider failed to produce a payload.
    PayloadProvider,
    /// Unexpected state reached within keyinject logic.
    InternalInvariant,
    /// Interaction with the filesystem, stdin/stdout, or other I/O failed.
    Io,
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct InjectError {
    /// Broad error category, always provided.
    pub category: ErrorCategory,
    /// Optional specific condition tag. Code consuming errors MUST handle
    /// the absence of a defined kind.
    pub kind: Option<ErrorKind>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl InjectError {
    /// Creates a new error with a required category and display message.
    pub fn new(category: ErrorCategory, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: None,
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that also tags the failure with a kind.
    pub fn with_kind(category: ErrorCategory, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that carries both a kind tag and the originating source error.
    pub fn with_kind_and_source(
        category: ErrorCategory,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// The user-facing message carried by the error.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Wraps the current error with a higher-level message while preserving the original as source.
    ///
    /// Category and kind carry over, so callers can still branch on the
    /// innermost condition.
    pub fn with_context(self, msg: impl Into<String>) -> Self {
        let category = self.category;
        let kind = self.kind;
        Self {
            category,
            kind,
            source: Some(Box::new(self)),
            msg: msg.into(),
        }
    }

    /// Renders the message followed by every source in the chain, separated by `: `.
    pub fn chain_message(&self) -> String {
        let mut out = self.msg.clone();
        let mut next = StdError::source(self);
        while let Some(err) = next {
            out.push_str(": ");
            out.push_str(&err.to_string());
            next = err.source();
        }
        out
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, InjectError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_context_keeps_kind_and_category() {
        let err = InjectError::with_kind(
            ErrorCategory::User,
            ErrorKind::ArmoringInvalid,
            "no envelope",
        )
        .with_context("failed to unarmor input");

        assert_eq!(err.kind, Some(ErrorKind::ArmoringInvalid));
        assert_eq!(err.category, ErrorCategory::User);
        assert_eq!(err.message(), "failed to unarmor input");
    }

    #[test]
    fn test_chain_message() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = InjectError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::Io,
            "failed to read from key.asc",
            io_err,
        )
        .with_context("injection failed");

        assert_eq!(
            err.chain_message(),
            "injection failed: failed to read from key.asc: gone"
        );
    }

    #[test]
    fn test_new_has_no_kind() {
        let err = InjectError::new(ErrorCategory::Internal, "boom");
        assert_eq!(err.kind, None);
        assert_eq!(err.to_string(), "boom");
    }
}
