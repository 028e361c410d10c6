//! Shared error types for Waymark.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with context
//! - [`ErrorKind`] - Categorized error kinds for matching
//! - [`Result`] - Convenience alias used by the upper layers
//!
//! Player input never produces an [`Error`]: malformed commands are reported
//! as values by the phrase compiler. These types cover configuration and I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;

pub use error::{Error, ErrorContext, ErrorKind, Result};
