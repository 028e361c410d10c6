//! Configuration for an interactive session.

use std::path::{Path, PathBuf};

/// How parsed commands are echoed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable summary line per command.
    #[default]
    Text,
    /// One JSON object per command.
    Json,
}

/// Configuration for a session.
///
/// Controls vocabulary loading and how the REPL echoes commands.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Alias file to load at session start.
    pub alias_file: Option<PathBuf>,

    /// Primary prompt.
    pub prompt: String,

    /// Whether to show the welcome banner.
    pub show_banner: bool,

    /// Also print the token stream for each line.
    pub show_tokens: bool,

    /// Output format for parsed commands.
    pub format: OutputFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            alias_file: None,
            prompt: "> ".to_string(),
            show_banner: true,
            show_tokens: false,
            format: OutputFormat::Text,
        }
    }
}

impl SessionConfig {
    /// Builder method to set the alias file.
    #[must_use]
    pub fn with_alias_file(mut self, path: impl AsRef<Path>) -> Self {
        self.alias_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builder method to toggle the banner.
    #[must_use]
    pub const fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to toggle token dumps.
    #[must_use]
    pub const fn with_tokens(mut self, show: bool) -> Self {
        self.show_tokens = show;
        self
    }

    /// Builder method to set the output format.
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
