//! Nesting operations over type-erased payloads.
//!
//! `flatten` and `transpose` on the statically nested instantiations cannot
//! fail. These variants serve payloads held as `Box<dyn Any>`, where the
//! nested container type has to be confirmed at runtime.

use alloc::boxed::Box;
use core::any::Any;

use crate::{error::InvalidNestingError, optional::Optional, result::Result};

impl Optional<Box<dyn Any>> {
    /// Removes one level of nesting if the payload is an `Optional<T>`.
    pub fn try_flatten<T: 'static>(self) -> core::result::Result<Optional<T>, InvalidNestingError> {
        match self {
            Optional::Some(payload) => payload
                .downcast::<Optional<T>>()
                .map(|inner| *inner)
                .map_err(|_| InvalidNestingError::new::<Optional<T>>("Optional::try_flatten")),
            Optional::None => Ok(Optional::None),
        }
    }

    /// Transposes if the payload is a `Result<T, E>`.
    pub fn try_transpose<T: 'static, E: 'static>(
        self,
    ) -> core::result::Result<Result<Optional<T>, E>, InvalidNestingError> {
        match self {
            Optional::Some(payload) => payload
                .downcast::<Result<T, E>>()
                .map(|inner| Optional::Some(*inner).transpose())
                .map_err(|_| InvalidNestingError::new::<Result<T, E>>("Optional::try_transpose")),
            Optional::None => Ok(Result::Ok(Optional::None)),
        }
    }
}

impl<E> Result<Box<dyn Any>, E> {
    /// Transposes if the `Ok` payload is an `Optional<T>`; an `Err` is never inspected.
    pub fn try_transpose<T: 'static>(
        self,
    ) -> core::result::Result<Optional<Result<T, E>>, InvalidNestingError> {
        match self {
            Result::Ok(payload) => {
                let inner = payload
                    .downcast::<Optional<T>>()
                    .map_err(|_| InvalidNestingError::new::<Optional<T>>("Result::try_transpose"))?;
                Ok(Result::<Optional<T>, E>::Ok(*inner).transpose())
            }
            Result::Err(err) => Ok(Optional::Some(Result::Err(err))),
        }
    }
}
