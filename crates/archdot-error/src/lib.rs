//! # archdot-error
//!
//! Unified error handling for archdot.
//!
//! - **ErrorKind**: what went wrong (e.g. ConfigMissing, DeserializationFailed)
//! - **Error Context**: key/value pairs pointing at the cause
//! - **Error Source**: the wrapped lower-level error, if any
//!
//! ## Usage
//!
//! ```rust
//! use archdot_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::DeserializationFailed, "missing field `name`")
//!         .with_operation("config::load_architecture")
//!         .with_context("path", "arch.toml"))
//! }
//! ```
//!
//! The rendering core never fails; only configuration resolution and
//! loading produce errors, and none of them are retried.

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using archdot Error
pub type Result<T> = std::result::Result<T, Error>;
