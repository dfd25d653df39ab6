//! `Optional` and `Result` containers.
//!
//! Absence and failure are represented by the `None` and `Err` variants and
//! handled through combinators. Extracting from the wrong variant is a
//! programming error and panics with an [`UnwrapError`]; every panicking
//! extractor has a `try_` twin that returns the error instead.
//!
//! ```
//! use optres::{Optional, Result};
//!
//! let port: Result<u16, &str> = Optional::Some("8080")
//!     .ok_or("missing port")
//!     .and_then(|raw| raw.parse::<u16>().map_err(|_| "bad port").into());
//! assert_eq!(port, Result::Ok(8080));
//! ```
#![no_std]

extern crate alloc;

pub mod error;
pub use error::{Error, InvalidNestingError, UnsupportedOperationError, UnwrapError};

pub mod iter;
pub use iter::IntoIter;

// Optional module
pub mod optional;
pub use optional::Optional;

pub mod result;
pub use result::Result;

mod erased;
