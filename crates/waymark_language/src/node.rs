//! Compiler output types.
//!
//! A [`CommandNode`] is the single result of compiling one line of input.

use std::fmt;

use crate::token::TokenKind;

/// Canonical actions the runtime dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Move to another place.
    Go,
    /// Look at the surroundings or at something.
    Look,
    /// Pick something up.
    Take,
    /// Put something down.
    Drop,
    /// Open something.
    Open,
    /// Use something, optionally on something else.
    Use,
    /// Attack something.
    Attack,
    /// Put something somewhere.
    Put,
    /// Craft an item.
    Craft,
    /// Ask how to do something.
    How,
    /// Inspect something closely.
    Inspect,
    /// Explore the area.
    Explore,
    /// Roll dice.
    Dice,
    /// Run from danger.
    Flee,
    /// Talk to someone.
    Talk,
    /// Show help.
    Help,
    /// Listen to the surroundings.
    Listen,
    /// Show the inventory.
    Inventory,
    /// Leave the game.
    Quit,
    /// Nothing was understood.
    Unknown,
}

impl Action {
    /// Maps a leading token kind to the action its grammar rule produces.
    ///
    /// Directions are not listed: a bare direction is shorthand for
    /// [`Action::Go`] and is handled before this table is consulted.
    #[must_use]
    pub const fn for_kind(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Move => Self::Go,
            TokenKind::Look => Self::Look,
            TokenKind::Take => Self::Take,
            TokenKind::Drop => Self::Drop,
            TokenKind::Open => Self::Open,
            TokenKind::Use => Self::Use,
            TokenKind::Strike => Self::Attack,
            TokenKind::Put => Self::Put,
            TokenKind::Craft => Self::Craft,
            TokenKind::How => Self::How,
            TokenKind::Inspect => Self::Inspect,
            TokenKind::Explore => Self::Explore,
            TokenKind::Dice => Self::Dice,
            TokenKind::Flee => Self::Flee,
            TokenKind::Talk => Self::Talk,
            TokenKind::Help => Self::Help,
            TokenKind::Listen => Self::Listen,
            TokenKind::Inventory => Self::Inventory,
            TokenKind::Quit => Self::Quit,
            _ => return None,
        })
    }

    /// Lower-case verb name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Look => "look",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Open => "open",
            Self::Use => "use",
            Self::Attack => "attack",
            Self::Put => "put",
            Self::Craft => "craft",
            Self::How => "how",
            Self::Inspect => "inspect",
            Self::Explore => "explore",
            Self::Dice => "dice",
            Self::Flee => "flee",
            Self::Talk => "talk",
            Self::Help => "help",
            Self::Listen => "listen",
            Self::Inventory => "inventory",
            Self::Quit => "quit",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true for verbs that take no argument at all.
    #[must_use]
    pub const fn takes_no_argument(self) -> bool {
        matches!(
            self,
            Self::Help | Self::Listen | Self::Inventory | Self::Quit
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The decomposed argument portion of a command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandPhrase {
    /// All argument tokens joined with single spaces, before any rule
    /// rewrote them.
    pub raw: String,
    /// The thing acted upon. Empty when absent.
    pub target: String,
    /// Lower-cased splitting preposition, if one was present.
    pub preposition: Option<String>,
    /// The thing after the preposition, if one was present.
    pub object: Option<String>,
}

impl CommandPhrase {
    /// Creates a phrase with only a target.
    #[must_use]
    pub fn target(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            raw: target.clone(),
            target,
            preposition: None,
            object: None,
        }
    }

    /// Returns true if nothing at all was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty() && self.target.is_empty() && self.object.is_none()
    }
}

/// Result of compiling one line of input. Exactly one variant applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandNode {
    /// A recognized verb with its phrase.
    Verb {
        /// The canonical action. Never [`Action::Unknown`].
        action: Action,
        /// The decomposed arguments.
        phrase: CommandPhrase,
    },
    /// A recognized verb whose arguments broke its grammar.
    Error {
        /// Human-readable description.
        message: String,
        /// 0-based column of the offending token.
        column: usize,
        /// The raw input that was compiled.
        input: String,
    },
    /// Nothing was understood.
    Unknown,
}

impl CommandNode {
    /// Returns the action for verb nodes.
    #[must_use]
    pub const fn action(&self) -> Option<Action> {
        match self {
            Self::Verb { action, .. } => Some(*action),
            Self::Error { .. } | Self::Unknown => None,
        }
    }

    /// Returns true for error nodes.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
