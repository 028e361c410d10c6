//! Command language front end for Waymark.
//!
//! This crate turns one line of raw player text into a [`CommandNode`]:
//!
//! ```text
//! "put the gem in box"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ KEYWORD TABLE   │  built-in words + per-game overlay
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SCANNER         │  → [PUT] [the] [gem] [IN] [box] [EOL]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PHRASE COMPILER │  → Verb { Put, target: "the gem", in, object: "box" }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`token`] - Token model
//! - [`keywords`] - Built-in keyword table and overlays
//! - [`lexer`] - Scanner
//! - [`node`] - Actions, phrases, and command nodes
//! - [`compiler`] - Per-verb grammar rules

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compiler;
pub mod keywords;
pub mod lexer;
pub mod node;
pub mod span;
pub mod token;


pub use compiler::{Compiler, compile_tokens};
pub use keywords::{KeywordOverlay, KeywordTable};
pub use lexer::Scanner;
pub use node::{Action, CommandNode, CommandPhrase};
pub use span::Span;
pub use token::{Token, TokenKind};
