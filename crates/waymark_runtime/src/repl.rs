//! The main REPL implementation.

use crate::config::OutputFormat;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;
use waymark_foundation::{Error, Result};
use waymark_parser::Action;

/// Meta commands understood by the REPL itself.
pub const META_COMMANDS: &[&str] = &[":help", ":aliases", ":tokens", ":json", ":quit"];

/// What the REPL does after one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Print the text and keep reading.
    Continue(String),
    /// Print the text and stop.
    Quit(String),
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL over `session` with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new(session.interpreter().compiler().keywords())?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_keywords(session.interpreter().compiler().keywords());
        Self { editor, session }
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the REPL loop until EOF or a quit.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.session.config().show_banner {
            print_banner();
        }

        loop {
            let prompt = self.session.config().prompt.clone();
            let line = match self.editor.read_line(&prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Step::Continue(text)) => println!("{text}"),
                Ok(Step::Quit(text)) => {
                    if !text.is_empty() {
                        println!("{text}");
                    }
                    break;
                }
                Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering the parsed command fails.
    pub fn eval(&mut self, line: &str) -> Result<Step> {
        let trimmed = line.trim();
        if trimmed.starts_with(':') {
            return Ok(self.meta(trimmed));
        }

        let command = self.session.parse(line);
        let text = self.session.render_command(line, &command)?;
        if command.action == Action::Quit {
            return Ok(Step::Quit(text));
        }
        Ok(Step::Continue(text))
    }

    fn meta(&mut self, command: &str) -> Step {
        debug!(command, "meta command");
        match command {
            ":help" | ":h" => Step::Continue(format!(
                "Meta commands: {}\nVerbs:\n{}",
                META_COMMANDS.join(" "),
                self.session.help_text().trim_end()
            )),
            ":aliases" => Step::Continue(self.session.alias_listing().trim_end().to_string()),
            ":tokens" => {
                let config = self.session.config_mut();
                config.show_tokens = !config.show_tokens;
                Step::Continue(format!("token display {}", on_off(config.show_tokens)))
            }
            ":json" => {
                let config = self.session.config_mut();
                config.format = match config.format {
                    OutputFormat::Text => OutputFormat::Json,
                    OutputFormat::Json => OutputFormat::Text,
                };
                Step::Continue(format!(
                    "json output {}",
                    on_off(config.format == OutputFormat::Json)
                ))
            }
            ":quit" | ":q" => Step::Quit(String::new()),
            other => Step::Continue(format!("Unknown meta command {other}; try :help")),
        }
    }
}

const fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Parses every non-blank line from `reader`, writing one rendering per line.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_batch<R: BufRead, W: Write>(session: &Session, reader: R, mut writer: W) -> Result<()> {
    let stream = Path::new("<stream>");
    for line in reader.lines() {
        let line = line.map_err(|e| Error::io(stream, &e))?;
        if line.trim().is_empty() {
            continue;
        }
        let text = session.render(&line)?;
        writeln!(writer, "{text}").map_err(|e| Error::io(stream, &e))?;
    }
    writer.flush().map_err(|e| Error::io(stream, &e))
}

fn print_banner() {
    println!("\x1b[1;36mWaymark\x1b[0m command parser v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a command to see how it parses. :help lists meta commands, Ctrl+D exits.\n");
    let _ = io::stdout().flush();
}
