//! REPL and CLI for the Waymark command front end.
//!
//! This crate provides:
//! - [`Session`] - interpreter, alias overlay and verb synonyms for one run
//! - [`Repl`] - interactive loop echoing how each line parses
//! - [`run_batch`] - the same rendering over any reader, for scripts and tests

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use config::{OutputFormat, SessionConfig};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{Repl, Step, run_batch};
pub use session::{Session, format_tokens};
