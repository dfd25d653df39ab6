use core::fmt;

use crate::{
    error::{raise, UnsupportedOperationError, UnwrapError},
    iter::IntoIter,
    optional::Optional,
};

/// The outcome of an operation: success with a `T` (`Ok`) or failure with an `E` (`Err`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Result<T, E> {
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Result::Ok(_))
    }

    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Result::Err(_))
    }

    pub fn is_ok_and(self, pred: impl FnOnce(T) -> bool) -> bool {
        match self {
            Result::Ok(val) => pred(val),
            Result::Err(_) => false,
        }
    }

    pub fn is_err_and(self, pred: impl FnOnce(E) -> bool) -> bool {
        match self {
            Result::Ok(_) => false,
            Result::Err(err) => pred(err),
        }
    }

    /// Discards the error, yielding `Some` only for `Ok`.
    pub fn ok(self) -> Optional<T> {
        match self {
            Result::Ok(val) => Optional::Some(val),
            Result::Err(_) => Optional::None,
        }
    }

    /// Discards the value, yielding `Some` only for `Err`.
    pub fn err(self) -> Optional<E> {
        match self {
            Result::Ok(_) => Optional::None,
            Result::Err(err) => Optional::Some(err),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Result::Ok(val) => val,
            Result::Err(_) => default,
        }
    }

    /// Returns the contained value or computes one from the error.
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Result::Ok(val) => val,
            Result::Err(err) => f(err),
        }
    }

    /// Always panics: payloads have no implicit default value.
    ///
    /// # Panics
    ///
    /// Unconditionally, with an [`UnsupportedOperationError`].
    #[track_caller]
    pub fn unwrap_or_default(self) -> T {
        raise(UnsupportedOperationError {
            operation: "Result::unwrap_or_default",
            alternative: "Result::unwrap_or",
        })
    }

    /// Maps `Result<T, E>` to `Result<U, E>`, leaving an error untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Result<U, E> {
        match self {
            Result::Ok(val) => Result::Ok(f(val)),
            Result::Err(err) => Result::Err(err),
        }
    }

    /// Maps `Result<T, E>` to `Result<T, G>`, leaving a value untouched.
    pub fn map_err<G, F: FnOnce(E) -> G>(self, f: F) -> Result<T, G> {
        match self {
            Result::Ok(val) => Result::Ok(val),
            Result::Err(err) => Result::Err(f(err)),
        }
    }

    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Result::Ok(val) => f(val),
            Result::Err(_) => default,
        }
    }

    /// Collapses to a plain value: `f` for `Ok`, `default` (given the error) for `Err`.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Result::Ok(val) => f(val),
            Result::Err(err) => default(err),
        }
    }

    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Result::Ok(val) = &self {
            f(val);
        }
        self
    }

    pub fn inspect_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Result::Err(err) = &self {
            f(err);
        }
        self
    }

    /// Returns `other` if self is `Ok`, otherwise propagates the error.
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Result::Ok(_) => other,
            Result::Err(err) => Result::Err(err),
        }
    }

    /// Returns self if it is `Ok`, otherwise `other`.
    pub fn or<G>(self, other: Result<T, G>) -> Result<T, G> {
        match self {
            Result::Ok(val) => Result::Ok(val),
            Result::Err(_) => other,
        }
    }

    pub fn and_then<U, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<U, E> {
        match self {
            Result::Ok(val) => f(val),
            Result::Err(err) => Result::Err(err),
        }
    }

    pub fn or_else<G, F: FnOnce(E) -> Result<T, G>>(self, f: F) -> Result<T, G> {
        match self {
            Result::Ok(val) => Result::Ok(val),
            Result::Err(err) => f(err),
        }
    }
}

impl<T, E: fmt::Debug> Result<T, E> {
    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapError`] carrying `msg` and the rendered error if
    /// the value is `Err`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.try_expect(msg) {
            Ok(val) => val,
            Err(err) => raise(err),
        }
    }

    /// Like [`Result::expect`], but hands the error back instead of panicking.
    pub fn try_expect(self, msg: &str) -> core::result::Result<T, UnwrapError> {
        match self {
            Result::Ok(val) => Ok(val),
            Result::Err(err) => Err(UnwrapError::wrong_variant(msg, &err)),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapError`] carrying the rendered error if the value
    /// is `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(val) => val,
            Err(err) => raise(err),
        }
    }

    /// Like [`Result::unwrap`], but hands the error back instead of panicking.
    pub fn try_unwrap(self) -> core::result::Result<T, UnwrapError> {
        match self {
            Result::Ok(val) => Ok(val),
            Result::Err(err) => Err(UnwrapError::wrong_variant(
                "called `Result::unwrap()` on an `Err` value",
                &err,
            )),
        }
    }
}

impl<T: fmt::Debug, E> Result<T, E> {
    /// Returns the contained error.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapError`] carrying `msg` and the rendered value if
    /// the value is `Ok`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self.try_expect_err(msg) {
            Ok(err) => err,
            Err(unwrap_err) => raise(unwrap_err),
        }
    }

    /// Like [`Result::expect_err`], but hands the error back instead of panicking.
    pub fn try_expect_err(self, msg: &str) -> core::result::Result<E, UnwrapError> {
        match self {
            Result::Ok(val) => Err(UnwrapError::wrong_variant(msg, &val)),
            Result::Err(err) => Ok(err),
        }
    }

    /// Returns the contained error.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapError`] carrying the rendered value if the value
    /// is `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(err) => err,
            Err(unwrap_err) => raise(unwrap_err),
        }
    }

    /// Like [`Result::unwrap_err`], but hands the error back instead of panicking.
    pub fn try_unwrap_err(self) -> core::result::Result<E, UnwrapError> {
        match self {
            Result::Ok(val) => Err(UnwrapError::wrong_variant(
                "called `Result::unwrap_err()` on an `Ok` value",
                &val,
            )),
            Result::Err(err) => Ok(err),
        }
    }
}

impl<T, E> Result<Optional<T>, E> {
    /// Turns a `Result` of an `Optional` into an `Optional` of a `Result`.
    ///
    /// `Err(e)` becomes `Some(Err(e))`; `Ok(None)` becomes `None`;
    /// `Ok(Some(v))` becomes `Some(Ok(v))`.
    pub fn transpose(self) -> Optional<Result<T, E>> {
        match self {
            Result::Ok(Optional::Some(val)) => Optional::Some(Result::Ok(val)),
            Result::Ok(Optional::None) => Optional::None,
            Result::Err(err) => Optional::Some(Result::Err(err)),
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Result<T, E> {
        match self {
            Result::Ok(inner) => inner,
            Result::Err(err) => Result::Err(err),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(res: core::result::Result<T, E>) -> Self {
        match res {
            Ok(val) => Result::Ok(val),
            Err(err) => Result::Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Result::Ok(val) => Ok(val),
            Result::Err(err) => Err(err),
        }
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.ok())
    }
}
