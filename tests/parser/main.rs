//! Integration tests for the waymark_parser crate.
//!
//! Tests for the public command surface:
//! - Interpreter adapter
//! - Alias configuration loading
//! - Verb synonym table

mod alias_tests;
