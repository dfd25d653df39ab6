use crate::{
    error::{raise, UnsupportedOperationError, UnwrapError},
    iter::IntoIter,
    result::Result,
};

/// A value that is either present (`Some`) or absent (`None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "an `Optional` may be `None`, which should be handled"]
pub enum Optional<T> {
    None,
    Some(T),
}

impl<T> Optional<T> {
    /// Returns true if the value is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Returns true if the value is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Optional::None)
    }

    /// Returns true if the value is `Some` and it matches `pred`.
    pub fn is_some_and(self, pred: impl FnOnce(T) -> bool) -> bool {
        match self {
            Optional::Some(val) => pred(val),
            Optional::None => false,
        }
    }

    /// Returns true if the value is `None` or it matches `pred`.
    pub fn is_none_or(self, pred: impl FnOnce(T) -> bool) -> bool {
        match self {
            Optional::Some(val) => pred(val),
            Optional::None => true,
        }
    }

    /// Converts into the standard library's `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Some(val) => Some(val),
            Optional::None => None,
        }
    }

    pub(crate) const fn variant(&self) -> &'static str {
        match self {
            Optional::Some(_) => "Some",
            Optional::None => "None",
        }
    }

    // ——— Extraction ——————————————————————————————————————

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapError`] carrying `msg` if the value is `None`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.try_expect(msg) {
            Ok(val) => val,
            Err(err) => raise(err),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapError`] if the value is `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(val) => val,
            Err(err) => raise(err),
        }
    }

    /// Like [`Optional::expect`], but hands the error back instead of panicking.
    pub fn try_expect(self, msg: &str) -> core::result::Result<T, UnwrapError> {
        match self {
            Optional::Some(val) => Ok(val),
            Optional::None => Err(UnwrapError::empty(msg)),
        }
    }

    /// Like [`Optional::unwrap`], but hands the error back instead of panicking.
    pub fn try_unwrap(self) -> core::result::Result<T, UnwrapError> {
        match self {
            Optional::Some(val) => Ok(val),
            Optional::None => Err(UnwrapError::empty(
                "called `Optional::unwrap()` on a `None` value",
            )),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Optional::Some(val) => val,
            Optional::None => default,
        }
    }

    /// Returns the contained value or computes one from `f`.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Optional::Some(val) => val,
            Optional::None => f(),
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
            operation: "Optional::unwrap_or_default",
            alternative: "Optional::unwrap_or",
        })
    }

    // ——— Conversion to Result ————————————————————————————

    /// Maps `Some(v)` to `Ok(v)` and `None` to `Err(err)`.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Optional::Some(val) => Result::Ok(val),
            Optional::None => Result::Err(err),
        }
    }

    /// Maps `Some(v)` to `Ok(v)` and `None` to `Err(f())`.
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, f: F) -> Result<T, E> {
        match self {
            Optional::Some(val) => Result::Ok(val),
            Optional::None => Result::Err(f()),
        }
    }

    // ——— Transformation ——————————————————————————————————

    /// Keeps the value only if `pred` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, pred: P) -> Self {
        match self {
            Optional::Some(val) if pred(&val) => Optional::Some(val),
            _ => Optional::None,
        }
    }

    /// Maps `Optional<T>` to `Optional<U>` by applying `f` to the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Optional::Some(val) => Optional::Some(f(val)),
            Optional::None => Optional::None,
        }
    }

    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Optional::Some(val) => f(val),
            Optional::None => default,
        }
    }

    /// Applies `f` to the contained value, or computes a fallback with `default`.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Some(val) => f(val),
            Optional::None => default(),
        }
    }

    /// Calls `f` with a reference to the contained value, if any.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Optional::Some(val) = &self {
            f(val);
        }
        self
    }

    /// Pairs both values if both are `Some`.
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Combines both values with `f` if both are `Some`.
    pub fn zip_with<U, R, F>(self, other: Optional<U>, f: F) -> Optional<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Optional::Some(a), Optional::Some(b)) => Optional::Some(f(a, b)),
            _ => Optional::None,
        }
    }

    // ——— Boolean combinators ————————————————————————————

    /// Returns `None` if self is `None`, otherwise `other`.
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Optional::Some(_) => other,
            Optional::None => Optional::None,
        }
    }

    /// Returns self if it is `Some`, otherwise `other`.
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Some(_) => self,
            Optional::None => other,
        }
    }

    /// Returns whichever side is `Some` when exactly one of them is.
    pub fn xor(self, other: Optional<T>) -> Optional<T> {
        match (self, other) {
            (Optional::Some(a), Optional::None) => Optional::Some(a),
            (Optional::None, Optional::Some(b)) => Optional::Some(b),
            _ => Optional::None,
        }
    }

    /// Calls `f` with the contained value and returns its result; `None` short-circuits.
    pub fn and_then<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        match self {
            Optional::Some(val) => f(val),
            Optional::None => Optional::None,
        }
    }

    /// Returns self if it is `Some`, otherwise calls `f`.
    pub fn or_else<F: FnOnce() -> Optional<T>>(self, f: F) -> Optional<T> {
        match self {
            Optional::Some(_) => self,
            Optional::None => f(),
        }
    }

    // ——— In-place mutation ——————————————————————————————

    /// Stores `value`, dropping any previous one, and returns a reference to it.
    pub fn insert(&mut self, value: T) -> &mut T {
        tracing::trace!(from = self.variant(), to = "Some", "optional insert");
        *self = Optional::Some(value);
        match self {
            Optional::Some(val) => val,
            Optional::None => unreachable!("populated above"),
        }
    }

    /// Stores `value` only if empty, then returns a reference to the contained value.
    pub fn get_or_insert(&mut self, value: T) -> &mut T {
        self.get_or_insert_with(|| value)
    }

    /// Stores `f()` only if empty, then returns a reference to the contained value.
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        if let Optional::None = self {
            tracing::trace!(from = "None", to = "Some", "optional get_or_insert");
            *self = Optional::Some(f());
        }
        match self {
            Optional::Some(val) => val,
            Optional::None => unreachable!("populated above"),
        }
    }

    /// Always panics: payloads have no implicit default value.
    ///
    /// # Panics
    ///
    /// Unconditionally, with an [`UnsupportedOperationError`]. The container
    /// is left untouched.
    #[track_caller]
    pub fn get_or_insert_default(&mut self) -> &mut T {
        raise(UnsupportedOperationError {
            operation: "Optional::get_or_insert_default",
            alternative: "Optional::get_or_insert_with",
        })
    }

    /// Leaves `None` in place and returns the previous container.
    pub fn take(&mut self) -> Optional<T> {
        tracing::trace!(from = self.variant(), to = "None", "optional take");
        core::mem::replace(self, Optional::None)
    }

    /// Stores `value` and returns the previous container.
    pub fn replace(&mut self, value: T) -> Optional<T> {
        tracing::trace!(from = self.variant(), to = "Some", "optional replace");
        core::mem::replace(self, Optional::Some(value))
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Optional<T> {
        match self {
            Optional::Some(inner) => inner,
            Optional::None => Optional::None,
        }
    }
}

impl<T, E> Optional<Result<T, E>> {
    /// Turns an `Optional` of a `Result` into a `Result` of an `Optional`.
    ///
    /// `None` becomes `Ok(None)`; `Some(Ok(v))` becomes `Ok(Some(v))`;
    /// `Some(Err(e))` becomes `Err(e)`.
    pub fn transpose(self) -> Result<Optional<T>, E> {
        match self {
            Optional::Some(Result::Ok(val)) => Result::Ok(Optional::Some(val)),
            Optional::Some(Result::Err(err)) => Result::Err(err),
            Optional::None => Result::Ok(Optional::None),
        }
    }
}

impl<T, U> Optional<(T, U)> {
    pub fn unzip(self) -> (Optional<T>, Optional<U>) {
        match self {
            Optional::Some((a, b)) => (Optional::Some(a), Optional::Some(b)),
            Optional::None => (Optional::None, Optional::None),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(val) => Optional::Some(val),
            None => Optional::None,
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(val: T) -> Self {
        Optional::Some(val)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(opt: Optional<T>) -> Self {
        opt.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}
