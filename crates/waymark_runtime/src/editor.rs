//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`] so tests can drive it with scripted
//! input while the binary uses rustyline.

use crate::highlight::CommandHighlighter;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};
use std::borrow::Cow;
use waymark_foundation::{Error, Result};
use waymark_language::KeywordTable;

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);

    /// Replace the vocabulary used for completion and highlighting.
    fn set_keywords(&mut self, keywords: &KeywordTable);
}

#[derive(Helper, Completer, Hinter, Validator)]
struct CommandHelper {
    #[rustyline(Completer)]
    completer: WordCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    highlighter: CommandHighlighter,
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes the word under the cursor from the keyword table.
struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    fn new(keywords: &KeywordTable) -> Self {
        Self {
            words: completion_words(keywords),
        }
    }

    /// Completion start and candidates for the word ending at `pos`.
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let start = word_start(line, pos);

        // No completion inside a quoted string
        if line[..pos].chars().filter(|&c| c == '"').count() % 2 == 1 {
            return (start, Vec::new());
        }

        let word = line[start..pos].to_lowercase();
        let candidates = self
            .words
            .iter()
            .filter(|w| w.starts_with(&word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w.clone(),
            })
            .collect();

        (start, candidates)
    }
}

/// Lower-cased keyword words plus the REPL meta commands, sorted.
fn completion_words(keywords: &KeywordTable) -> Vec<String> {
    let mut words: Vec<String> = keywords
        .words()
        .map(|(word, _)| word.to_lowercase())
        .chain(crate::repl::META_COMMANDS.iter().map(|m| (*m).to_string()))
        .collect();
    words.sort();
    words.dedup();
    words
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

/// Byte offset where the word ending at `pos` begins.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor for the given vocabulary.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new(keywords: &KeywordTable) -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::internal(e.to_string()))?
            .build();

        let helper = CommandHelper {
            completer: WordCompleter::new(keywords),
            hinter: HistoryHinter::new(),
            highlighter: CommandHighlighter::new(keywords.clone()),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn set_keywords(&mut self, keywords: &KeywordTable) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.completer.words = completion_words(keywords);
            helper.highlighter.set_keywords(keywords.clone());
        }
    }
}
