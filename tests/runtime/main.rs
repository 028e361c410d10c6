//! Integration tests for Layer 3: Runtime
//!
//! Tests for session rendering, batch mode and the REPL loop.

mod repl;
mod session;
