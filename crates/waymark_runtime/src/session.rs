//! Session state for the REPL.
//!
//! A session owns the interpreter with its alias overlay, the verb synonym
//! table used for help, and the configuration it was started with. The
//! overlay is loaded once at session start and read-only afterwards.

use std::fmt::Write as _;

use tracing::info;
use waymark_foundation::{Error, Result};
use waymark_language::{Token, TokenKind};
use waymark_parser::{AliasLoader, Command, Interpreter, KeywordOverlay, VerbSynonyms};

use crate::config::{OutputFormat, SessionConfig};

/// Session state for an interactive or batch run.
#[derive(Debug)]
pub struct Session {
    interpreter: Interpreter,
    synonyms: VerbSynonyms,
    config: SessionConfig,
}

impl Session {
    /// Creates a session with the built-in vocabulary only.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(SessionConfig::default())
    }

    /// Creates a session, loading the configured alias file if any.
    ///
    /// A missing or broken alias file leaves the session on the built-in
    /// vocabulary.
    #[must_use]
    pub fn from_config(config: SessionConfig) -> Self {
        let overlay = config
            .alias_file
            .as_deref()
            .map(AliasLoader::load)
            .unwrap_or_default();
        Self::with_overlay(config, overlay)
    }

    /// Creates a session with an already-loaded overlay.
    #[must_use]
    pub fn with_overlay(config: SessionConfig, overlay: KeywordOverlay) -> Self {
        let mut synonyms = VerbSynonyms::builtin();
        synonyms.extend_from_overlay(&overlay);
        if !overlay.is_empty() {
            info!(aliases = overlay.len(), "session vocabulary extended");
        }
        Self {
            interpreter: Interpreter::with_extra_keywords(overlay),
            synonyms,
            config,
        }
    }

    /// The session's interpreter.
    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// The verb synonym table.
    #[must_use]
    pub const fn synonyms(&self) -> &VerbSynonyms {
        &self.synonyms
    }

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Mutable access to the configuration (for REPL toggles).
    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    /// Parses one line of input.
    #[must_use]
    pub fn parse(&self, line: &str) -> Command {
        self.interpreter.interpret(line)
    }

    /// Parses one line and renders the output the REPL prints for it.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn render(&self, line: &str) -> Result<String> {
        self.render_command(line, &self.parse(line))
    }

    /// Renders an already-parsed command for `line`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn render_command(&self, line: &str, command: &Command) -> Result<String> {
        let mut out = String::new();

        if self.config.show_tokens {
            out.push_str(&format_tokens(&self.interpreter.tokens(line)));
            out.push('\n');
        }

        match self.config.format {
            OutputFormat::Json => {
                let json = serde_json::to_string(command)
                    .map_err(|e| Error::internal(format!("json encoding failed: {e}")))?;
                out.push_str(&json);
            }
            OutputFormat::Text => match &command.error {
                Some(err) => {
                    let _ = writeln!(out, "{}", err.input);
                    let _ = writeln!(out, "{}", err.caret_line());
                    out.push_str(&err.message);
                }
                None if command.is_unknown() => out.push_str("I don't understand that."),
                None => out.push_str(&command.to_string()),
            },
        }

        Ok(out)
    }

    /// Help text listing every documented verb and its aliases, then the
    /// direction words.
    #[must_use]
    pub fn help_text(&self) -> String {
        let mut out = String::new();
        for verb in self.synonyms.canonicals() {
            if let Some(accepts) = self.synonyms.also_accepts(verb) {
                let _ = writeln!(out, "  {verb:<10} {accepts}");
            }
        }

        let keywords = self.interpreter.compiler().keywords();
        let directions: Vec<String> = TokenKind::ALL
            .iter()
            .filter(|kind| kind.is_direction())
            .map(|&kind| keywords.words_for(kind).join("/").to_lowercase())
            .filter(|words| !words.is_empty())
            .collect();
        let _ = writeln!(out, "  {:<10} {}", "directions", directions.join(", "));
        out
    }

    /// The session's aliases, one `ALIAS -> KIND` per line.
    #[must_use]
    pub fn alias_listing(&self) -> String {
        let overlay = self.interpreter.extra_keywords();
        if overlay.is_empty() {
            return "  (no aliases loaded)\n".to_string();
        }
        let mut out = String::new();
        for (alias, kind) in overlay.iter() {
            let _ = writeln!(out, "  {alias} -> {kind}");
        }
        out
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a token stream as `KIND(lexeme)@column` entries.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| {
            if t.is_eol() {
                format!("{}@{}", t.kind, t.column())
            } else {
                format!("{}({})@{}", t.kind, t.lexeme, t.column())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
