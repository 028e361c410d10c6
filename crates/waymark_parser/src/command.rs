//! Public command values.
//!
//! [`Command`] is the contract surface the action-dispatch layer reads.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use waymark_language::Action;

/// A malformed phrase: a recognized verb whose arguments broke its grammar.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} (column {column})")]
pub struct ParseError {
    /// Human-readable description.
    pub message: String,
    /// 0-based column of the offending token.
    pub column: usize,
    /// The raw input that was parsed.
    pub input: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>, column: usize, input: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            column,
            input: input.into(),
        }
    }

    /// A marker line with `^` under the offending column, for echoing
    /// beneath the input.
    #[must_use]
    pub fn caret_line(&self) -> String {
        format!("{}^", " ".repeat(self.column))
    }
}

/// A parsed player command.
///
/// `error` is set exactly when the input was recognized but malformed; in
/// that case the action is [`Action::Unknown`] and every text field is
/// empty. An unknown command has the same shape without the error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// The canonical action.
    pub action: Action,
    /// All argument text as typed.
    pub argument: String,
    /// The thing acted upon.
    pub target: String,
    /// Splitting preposition, lower-cased.
    pub preposition: Option<String>,
    /// The thing after the preposition.
    pub object: Option<String>,
    /// Diagnostic for malformed input.
    pub error: Option<ParseError>,
}

impl Command {
    /// A command for input that was not understood at all.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            action: Action::Unknown,
            argument: String::new(),
            target: String::new(),
            preposition: None,
            object: None,
            error: None,
        }
    }

    /// A command for input that was understood but malformed.
    #[must_use]
    pub fn error(error: ParseError) -> Self {
        Self {
            error: Some(error),
            ..Self::unknown()
        }
    }

    /// Returns true if nothing was understood.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.action == Action::Unknown && self.error.is_none()
    }

    /// Returns true if the input was malformed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(err) = &self.error {
            return write!(f, "error: {err}");
        }
        write!(f, "{}", self.action)?;
        if !self.target.is_empty() {
            write!(f, " target={:?}", self.target)?;
        }
        if let (Some(prep), Some(object)) = (&self.preposition, &self.object) {
            write!(f, " {prep} object={object:?}")?;
        }
        Ok(())
    }
}
