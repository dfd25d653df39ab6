use alloc::{
    format,
    string::{String, ToString},
};
use core::fmt;

use thiserror::Error;

/// Raised when a value is extracted from the variant that does not hold it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnwrapError {
    /// Extraction from an empty `Optional`; there is no payload to render.
    #[error("{message}")]
    Empty { message: String },
    /// Extraction from the other variant of a `Result`.
    #[error("{message}: {payload}")]
    WrongVariant { message: String, payload: String },
}

impl UnwrapError {
    pub fn empty(message: impl Into<String>) -> Self {
        UnwrapError::Empty {
            message: message.into(),
        }
    }

    /// Renders `payload` with its `Debug` impl.
    pub fn wrong_variant(message: impl Into<String>, payload: &dyn fmt::Debug) -> Self {
        UnwrapError::WrongVariant {
            message: message.into(),
            payload: format!("{payload:?}"),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            UnwrapError::Empty { message } | UnwrapError::WrongVariant { message, .. } => message,
        }
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            UnwrapError::Empty { .. } => None,
            UnwrapError::WrongVariant { payload, .. } => Some(payload),
        }
    }
}

/// A type-erased payload was not the nested container an operation expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("`{operation}` expected a payload of type `{expected}`")]
pub struct InvalidNestingError {
    pub operation: &'static str,
    pub expected: &'static str,
}

impl InvalidNestingError {
    pub(crate) fn new<Expected: ?Sized>(operation: &'static str) -> Self {
        Self {
            operation,
            expected: core::any::type_name::<Expected>(),
        }
    }
}

/// There is no implicit default-value protocol for arbitrary payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("`{operation}` is not supported, use `{alternative}` instead")]
pub struct UnsupportedOperationError {
    pub operation: &'static str,
    pub alternative: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Unwrap(#[from] UnwrapError),
    #[error(transparent)]
    InvalidNesting(#[from] InvalidNestingError),
    #[error(transparent)]
    UnsupportedOperation(#[from] UnsupportedOperationError),
}

/// Logs a misuse error and panics with its rendered text.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn raise(err: impl Into<Error>) -> ! {
    let err = err.into();
    let rendered = err.to_string();
    tracing::error!(error = %rendered, "container misuse");
    panic!("{rendered}")
}
