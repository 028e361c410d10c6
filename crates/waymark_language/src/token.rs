//! Token types for player commands.
//!
//! Tokens are the output of the scanner and input to the phrase compiler.

use std::fmt;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The lexical category of this token.
    pub kind: TokenKind,
    /// The literal source text. For strings this is the content between the
    /// quotes; for the end marker it is empty.
    pub lexeme: String,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Creates the end-of-line marker at the given position.
    #[must_use]
    pub fn eol(span: Span) -> Self {
        Self::new(TokenKind::Eol, String::new(), span)
    }

    /// 0-based character column of the token start.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.span.column
    }

    /// 1-based line of the token start.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.span.line
    }

    /// Returns true if this is the end-of-line marker.
    #[must_use]
    pub const fn is_eol(&self) -> bool {
        matches!(self.kind, TokenKind::Eol)
    }
}

/// Lexical categories for player commands.
///
/// Verb kinds are grammar categories, not actions: several kinds may share a
/// rule and the compiler maps each one to an action through a fixed table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Verbs
    /// Movement (`go`, `walk`, `run`, `climb`, ...)
    Move,
    /// `look`
    Look,
    /// `take`, `get`, `grab`
    Take,
    /// `drop`
    Drop,
    /// `open`
    Open,
    /// `use`
    Use,
    /// `attack`, `strike`, `hit`
    Strike,
    /// `put`, `place`
    Put,
    /// `craft`, `make`
    Craft,
    /// `how`
    How,
    /// `inspect`, `check`
    Inspect,
    /// `explore`, `search`
    Explore,
    /// `dice`, `roll`
    Dice,
    /// `flee`, `escape`
    Flee,
    /// `talk`, `say`, or the `@` mention sigil
    Talk,
    /// `help` or `?`
    Help,
    /// `listen`
    Listen,
    /// `inventory`, `inv`, `i`
    Inventory,
    /// `quit`, `exit`
    Quit,

    // Directions
    /// north
    North,
    /// northeast
    NorthEast,
    /// east
    East,
    /// southeast
    SouthEast,
    /// south
    South,
    /// southwest
    SouthWest,
    /// west
    West,
    /// northwest
    NorthWest,
    /// up
    Up,
    /// down
    Down,

    // Prepositions
    /// `in`
    In,
    /// `into`
    Into,
    /// `on`
    On,
    /// `from`
    From,
    /// `with`
    With,
    /// `using`
    Using,
    /// `to`
    To,

    /// `away`
    Away,

    // Structural
    /// Any word not found in the keyword table
    Identifier,
    /// Quoted string literal
    String,
    /// End of input
    Eol,
}

impl TokenKind {
    /// Every token kind, in declaration order.
    pub const ALL: [Self; 40] = [
        Self::Move,
        Self::Look,
        Self::Take,
        Self::Drop,
        Self::Open,
        Self::Use,
        Self::Strike,
        Self::Put,
        Self::Craft,
        Self::How,
        Self::Inspect,
        Self::Explore,
        Self::Dice,
        Self::Flee,
        Self::Talk,
        Self::Help,
        Self::Listen,
        Self::Inventory,
        Self::Quit,
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::Up,
        Self::Down,
        Self::In,
        Self::Into,
        Self::On,
        Self::From,
        Self::With,
        Self::Using,
        Self::To,
        Self::Away,
        Self::Identifier,
        Self::String,
        Self::Eol,
    ];

    /// Returns true for compass and vertical directions.
    #[must_use]
    pub const fn is_direction(self) -> bool {
        matches!(
            self,
            Self::North
                | Self::NorthEast
                | Self::East
                | Self::SouthEast
                | Self::South
                | Self::SouthWest
                | Self::West
                | Self::NorthWest
                | Self::Up
                | Self::Down
        )
    }

    /// Returns true for the prepositions that split a phrase into target and
    /// object. `to` and `at` are not among them.
    #[must_use]
    pub const fn is_splitting_preposition(self) -> bool {
        matches!(
            self,
            Self::In | Self::Into | Self::On | Self::From | Self::With | Self::Using
        )
    }

    /// Returns true for kinds the scanner produces structurally rather than
    /// through the keyword table.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::Identifier | Self::String | Self::Eol)
    }

    /// The canonical upper-case grammar name, as used in alias files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Move => "MOVE",
            Self::Look => "LOOK",
            Self::Take => "TAKE",
            Self::Drop => "DROP",
            Self::Open => "OPEN",
            Self::Use => "USE",
            Self::Strike => "STRIKE",
            Self::Put => "PUT",
            Self::Craft => "CRAFT",
            Self::How => "HOW",
            Self::Inspect => "INSPECT",
            Self::Explore => "EXPLORE",
            Self::Dice => "DICE",
            Self::Flee => "FLEE",
            Self::Talk => "TALK",
            Self::Help => "HELP",
            Self::Listen => "LISTEN",
            Self::Inventory => "INVENTORY",
            Self::Quit => "QUIT",
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::In => "IN",
            Self::Into => "INTO",
            Self::On => "ON",
            Self::From => "FROM",
            Self::With => "WITH",
            Self::Using => "USING",
            Self::To => "TO",
            Self::Away => "AWAY",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Eol => "EOL",
        }
    }

    /// Looks up a kind by its canonical name. Matching ignores case and
    /// surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
