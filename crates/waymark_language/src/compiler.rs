//! Phrase compiler.
//!
//! Turns a token stream into a [`CommandNode`]. The leading token picks a
//! grammar rule; each rule is a straight-line check over the remaining
//! argument tokens. There is no backtracking beyond the single scan for a
//! splitting preposition.
//!
//! ```text
//! "use key on door"
//!        │
//!        ▼
//!   [USE] [IDENT key] [ON] [IDENT door] [EOL]
//!        │
//!        ▼  USE → generic rule → preposition split
//!   Verb { Use, target: "key", preposition: "on", object: "door" }
//! ```

use tracing::debug;

use crate::keywords::{KeywordOverlay, KeywordTable};
use crate::lexer::Scanner;
use crate::node::{Action, CommandNode, CommandPhrase};
use crate::token::{Token, TokenKind};

/// A grammar violation found while applying a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SyntaxError {
    message: String,
    column: usize,
}

impl SyntaxError {
    fn new(message: impl Into<String>, column: usize) -> Self {
        Self {
            message: message.into(),
            column,
        }
    }
}

type RuleResult = Result<(Action, CommandPhrase), SyntaxError>;

/// Compiles player input into command nodes.
///
/// A compiler owns its merged keyword table, so compiling is a pure function
/// of the input and the overlay the compiler was built with.
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    keywords: KeywordTable,
}

impl Compiler {
    /// Creates a compiler using only the built-in keywords.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compiler with `overlay` merged over the built-in keywords.
    #[must_use]
    pub fn with_overlay(overlay: &KeywordOverlay) -> Self {
        Self {
            keywords: KeywordTable::merged(overlay),
        }
    }

    /// The merged keyword table in use.
    #[must_use]
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Scans `input` with this compiler's keywords.
    #[must_use]
    pub fn scan(&self, input: &str) -> Vec<Token> {
        Scanner::scan(input, &self.keywords)
    }

    /// Compiles one line of input.
    #[must_use]
    pub fn compile(&self, input: &str) -> CommandNode {
        let tokens = self.scan(input);
        let node = compile_tokens(input, &tokens);
        match &node {
            CommandNode::Verb { action, phrase } => {
                debug!(%action, target = %phrase.target, "compiled command");
            }
            CommandNode::Error {
                message, column, ..
            } => debug!(%message, column, "rejected command"),
            CommandNode::Unknown => debug!(input, "unrecognized command"),
        }
        node
    }
}

/// Compiles an already-scanned token stream.
#[must_use]
pub fn compile_tokens(input: &str, tokens: &[Token]) -> CommandNode {
    let Some(first) = tokens.first().filter(|t| !t.is_eol()) else {
        return CommandNode::Unknown;
    };

    if first.kind.is_direction() {
        return CommandNode::Verb {
            action: Action::Go,
            phrase: CommandPhrase::target(first.lexeme.clone()),
        };
    }

    let Some(action) = Action::for_kind(first.kind) else {
        return CommandNode::Unknown;
    };

    let args = argument_tokens(&tokens[1..]);
    let result = match action {
        a if a.takes_no_argument() => no_argument(action, first, args),
        Action::Flee => flee(first, args),
        Action::Go => movement(first, args),
        Action::Look => look(args),
        Action::Talk => talk(first, args),
        _ => split_phrase(args).map(|phrase| (action, phrase)),
    };

    match result {
        Ok((action, phrase)) => CommandNode::Verb { action, phrase },
        Err(err) => CommandNode::Error {
            message: err.message,
            column: err.column,
            input: input.to_string(),
        },
    }
}

/// Tokens after the verb, up to (not including) the end marker.
fn argument_tokens(tokens: &[Token]) -> &[Token] {
    let end = tokens.iter().position(Token::is_eol).unwrap_or(tokens.len());
    &tokens[..end]
}

/// Joins token lexemes with single spaces.
fn join(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips leading tokens of `kind`. Returns the remainder and the last
/// stripped token.
fn skip_leading(tokens: &[Token], kind: TokenKind) -> (&[Token], Option<&Token>) {
    let count = tokens.iter().take_while(|t| t.kind == kind).count();
    let last = count.checked_sub(1).map(|i| &tokens[i]);
    (&tokens[count..], last)
}

fn no_argument(action: Action, verb: &Token, args: &[Token]) -> RuleResult {
    if let Some(extra) = args.first() {
        return Err(SyntaxError::new(
            format!(
                "Unexpected input after '{}'",
                verb.lexeme.to_lowercase()
            ),
            extra.column(),
        ));
    }
    Ok((action, CommandPhrase::default()))
}

fn flee(verb: &Token, args: &[Token]) -> RuleResult {
    if let Some(extra) = args.iter().find(|t| t.kind != TokenKind::Away) {
        return Err(SyntaxError::new(
            format!(
                "Unexpected input after '{}'",
                verb.lexeme.to_lowercase()
            ),
            extra.column(),
        ));
    }
    Ok((
        Action::Flee,
        CommandPhrase {
            raw: join(args),
            ..CommandPhrase::default()
        },
    ))
}

fn movement(verb: &Token, args: &[Token]) -> RuleResult {
    // "run" alone or "run away" means flee; any other word after "run",
    // including a direction, keeps it a movement.
    if verb.lexeme.eq_ignore_ascii_case("run") && args.iter().all(|t| t.kind == TokenKind::Away)
    {
        return flee(verb, args);
    }

    let (rest, last_to) = skip_leading(args, TokenKind::To);
    if let (true, Some(to)) = (rest.is_empty(), last_to) {
        return Err(SyntaxError::new(
            format!(
                "Expected destination after '{}'",
                to.lexeme.to_lowercase()
            ),
            to.column(),
        ));
    }

    let mut phrase = split_phrase(rest)?;
    phrase.raw = join(args);
    if let Some(direction) = args.iter().find(|t| t.kind.is_direction()) {
        phrase.target.clone_from(&direction.lexeme);
    }
    if phrase.target.trim().is_empty() {
        return Err(SyntaxError::new("Go where?", verb.column()));
    }
    Ok((Action::Go, phrase))
}

fn look(args: &[Token]) -> RuleResult {
    let phrase = split_phrase(args)?;

    // "look around ..." is plain LOOK whatever follows
    if let Some(first) = args.first() {
        let word = first.lexeme.to_lowercase();
        if first.kind == TokenKind::Identifier && (word == "around" || word == "arround") {
            return Ok((Action::Look, CommandPhrase::default()));
        }
    }

    Ok((Action::Look, phrase))
}

fn talk(verb: &Token, args: &[Token]) -> RuleResult {
    let (rest, _) = skip_leading(args, TokenKind::To);
    let mut phrase = split_phrase(rest)?;
    phrase.raw = join(args);
    if phrase.target.trim().is_empty() {
        return Err(SyntaxError::new("Talk to whom?", verb.column()));
    }
    Ok((Action::Talk, phrase))
}

/// Splits an argument run around its first splitting preposition.
fn split_phrase(args: &[Token]) -> Result<CommandPhrase, SyntaxError> {
    let raw = join(args);
    let Some(index) = args
        .iter()
        .position(|t| t.kind.is_splitting_preposition())
    else {
        return Ok(CommandPhrase {
            target: raw.clone(),
            raw,
            preposition: None,
            object: None,
        });
    };

    let prep = &args[index];
    let word = prep.lexeme.to_lowercase();
    if index == 0 {
        return Err(SyntaxError::new(
            format!("Expected target before '{word}'"),
            prep.column(),
        ));
    }
    if index == args.len() - 1 {
        return Err(SyntaxError::new(
            format!("Expected object after '{word}'"),
            prep.column(),
        ));
    }

    Ok(CommandPhrase {
        raw,
        target: join(&args[..index]),
        preposition: Some(word),
        object: Some(join(&args[index + 1..])),
    })
}
