//! Syntax highlighting for the REPL.

use std::borrow::Cow;

use waymark_language::{KeywordTable, Scanner, TokenKind};

/// Highlighter for player commands.
///
/// Colors come from the same scanner the parser uses, so alias words are
/// highlighted like the built-in words they stand for.
pub struct CommandHighlighter {
    keywords: KeywordTable,
}

impl CommandHighlighter {
    /// Creates a highlighter for the given keyword table.
    #[must_use]
    pub fn new(keywords: KeywordTable) -> Self {
        Self { keywords }
    }

    /// Replaces the keyword table.
    pub fn set_keywords(&mut self, keywords: KeywordTable) {
        self.keywords = keywords;
    }

    /// Highlight a line of input.
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let tokens = Scanner::scan(line, &self.keywords);
        if tokens.len() <= 1 {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut cursor = 0;
        for (index, token) in tokens.iter().enumerate() {
            if token.is_eol() {
                break;
            }
            let span = token.span;
            result.push_str(&line[cursor..span.start]);
            let color = color_for(token.kind, index == 0);
            if color.is_empty() {
                result.push_str(span.text(line));
            } else {
                result.push_str(color);
                result.push_str(span.text(line));
                result.push_str("\x1b[0m");
            }
            cursor = span.end;
        }
        result.push_str(&line[cursor..]);

        Cow::Owned(result)
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new(KeywordTable::builtin().clone())
    }
}

/// ANSI color for a token kind. Only the leading word is colored as a verb.
fn color_for(kind: TokenKind, leading: bool) -> &'static str {
    match kind {
        TokenKind::String => "\x1b[33m", // yellow
        k if k.is_direction() => "\x1b[36m", // cyan
        k if k.is_splitting_preposition() => "\x1b[34m", // blue
        TokenKind::To | TokenKind::Away => "\x1b[34m",
        TokenKind::Identifier | TokenKind::Eol => "",
        _ if leading => "\x1b[1;32m", // bold green
        _ => "",
    }
}
