//! Waymark - Command language front end for text adventures
//!
//! This crate re-exports all layers of the Waymark system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: waymark_runtime    - REPL, CLI, session configuration
//! Layer 2: waymark_parser     - Command values, interpreter, alias loading
//! Layer 1: waymark_language   - Tokens, keyword table, scanner, phrase compiler
//! Layer 0: waymark_foundation - Error types
//! ```

pub use waymark_foundation as foundation;
pub use waymark_language as language;
pub use waymark_parser as parser;
pub use waymark_runtime as runtime;
