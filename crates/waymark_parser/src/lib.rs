//! Public command surface for Waymark.
//!
//! This crate wraps the phrase compiler from `waymark_language` in the value
//! types the rest of a game runtime dispatches on.
//!
//! # Modules
//!
//! - [`command`] - [`Command`] and [`ParseError`]
//! - [`interpreter`] - Raw input to [`Command`], with the session's alias overlay
//! - [`aliases`] - YAML alias configuration loader
//! - [`synonyms`] - Verb canonicalization for help display

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aliases;
pub mod command;
pub mod interpreter;
pub mod synonyms;

// Re-export main types for convenience
pub use aliases::AliasLoader;
pub use command::{Command, ParseError};
pub use interpreter::Interpreter;
pub use synonyms::VerbSynonyms;
pub use waymark_language::{Action, KeywordOverlay, TokenKind};
