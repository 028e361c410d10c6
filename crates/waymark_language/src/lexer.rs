//! Scanner for player commands.
//!
//! The scanner converts one line of raw player text into a stream of tokens,
//! resolving words against a [`KeywordTable`]. It never fails: characters it
//! does not understand are skipped, and the stream always ends with exactly
//! one [`TokenKind::Eol`].

use crate::keywords::KeywordTable;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Scanner for player input.
pub struct Scanner<'src, 'kw> {
    /// Remaining source text.
    rest: &'src str,
    /// Keywords used to classify words.
    keywords: &'kw KeywordTable,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (0-based, in characters).
    column: usize,
    /// Set once the end marker has been produced.
    finished: bool,
}

impl<'src, 'kw> Scanner<'src, 'kw> {
    /// Creates a new scanner over `source`.
    #[must_use]
    pub fn new(source: &'src str, keywords: &'kw KeywordTable) -> Self {
        Self {
            rest: source,
            keywords,
            position: 0,
            line: 1,
            column: 0,
            finished: false,
        }
    }

    /// Scans all of `source` and returns the token stream, ending in EOL.
    #[must_use]
    pub fn scan(source: &str, keywords: &KeywordTable) -> Vec<Token> {
        Scanner::new(source, keywords).collect()
    }

    /// Returns the next token. Once the input is exhausted this returns the
    /// end marker on every call.
    pub fn next_token(&mut self) -> Token {
        self.skip_ignored();

        let start = self.position;
        let line = self.line;
        let column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::eol(Span::point(start, line, column));
        };

        let (kind, lexeme) = match c {
            '@' => {
                self.advance();
                (TokenKind::Talk, "@".to_string())
            }
            '?' => {
                self.advance();
                (TokenKind::Help, "?".to_string())
            }
            '"' => (TokenKind::String, self.scan_string()),
            _ => self.scan_word(),
        };

        Token::new(kind, lexeme, Span::new(start, self.position, line, column))
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    /// Skips whitespace, the punctuation players sprinkle into commands, and
    /// any character that cannot start a token.
    fn skip_ignored(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '@' || c == '?' || c == '"' || is_word_char(c) {
                break;
            }
            self.advance();
        }
    }

    /// Scans a string literal. An unterminated string runs to end of input.
    fn scan_string(&mut self) -> String {
        self.advance(); // consume opening '"'
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            self.advance();
            if c == '"' {
                break;
            }
            text.push(c);
        }
        text
    }

    /// Scans a word and classifies it through the keyword table.
    fn scan_word(&mut self) -> (TokenKind, String) {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if !is_word_char(c) {
                break;
            }
            text.push(c);
            self.advance();
        }
        let kind = self
            .keywords
            .lookup(&text.to_uppercase())
            .unwrap_or(TokenKind::Identifier);
        (kind, text)
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eol() {
            self.finished = true;
        }
        Some(token)
    }
}

/// Returns true if `c` can be part of a word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}
