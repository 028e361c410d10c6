//! Interpreter adapter.
//!
//! Wraps the phrase compiler and converts its [`CommandNode`] output into the
//! public [`Command`] value. The interpreter also owns the alias overlay
//! installed for the session.

use tracing::info;
use waymark_language::{CommandNode, Compiler, KeywordOverlay, Token};

use crate::command::{Command, ParseError};

/// Turns raw player input into [`Command`]s.
///
/// Replacing the overlay takes `&mut self`, so it cannot race an in-flight
/// [`Interpreter::interpret`] on the same instance. Separate instances share
/// nothing and may be used from different threads.
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    overlay: KeywordOverlay,
    compiler: Compiler,
}

impl Interpreter {
    /// Creates an interpreter with the built-in vocabulary only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter with `overlay` installed.
    #[must_use]
    pub fn with_extra_keywords(overlay: KeywordOverlay) -> Self {
        let mut interpreter = Self::new();
        interpreter.set_extra_keywords(overlay);
        interpreter
    }

    /// Replaces the alias overlay used by later calls.
    pub fn set_extra_keywords(&mut self, overlay: KeywordOverlay) {
        info!(aliases = overlay.len(), "installing keyword overlay");
        self.compiler = Compiler::with_overlay(&overlay);
        self.overlay = overlay;
    }

    /// The installed alias overlay.
    #[must_use]
    pub fn extra_keywords(&self) -> &KeywordOverlay {
        &self.overlay
    }

    /// The compiler backing this interpreter.
    #[must_use]
    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }

    /// Scans `input` with the installed vocabulary.
    #[must_use]
    pub fn tokens(&self, input: &str) -> Vec<Token> {
        self.compiler.scan(input)
    }

    /// Parses one line of input.
    #[must_use]
    pub fn interpret(&self, input: &str) -> Command {
        Self::interpret_node(Some(self.compiler.compile(input)))
    }

    /// Converts a compiled node. A missing node is an unknown command.
    #[must_use]
    pub fn interpret_node(node: Option<CommandNode>) -> Command {
        match node {
            Some(CommandNode::Verb { action, phrase }) => Command {
                action,
                argument: phrase.raw,
                target: phrase.target,
                preposition: phrase.preposition,
                object: phrase.object,
                error: None,
            },
            Some(CommandNode::Error {
                message,
                column,
                input,
            }) => Command::error(ParseError::new(message, column, input)),
            Some(CommandNode::Unknown) | None => Command::unknown(),
        }
    }
}

impl From<CommandNode> for Command {
    fn from(node: CommandNode) -> Self {
        Interpreter::interpret_node(Some(node))
    }
}
