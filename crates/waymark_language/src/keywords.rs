//! Keyword table for the scanner.
//!
//! The built-in table maps upper-case surface words to token kinds and is
//! process-wide immutable data. Games add vocabulary through a
//! [`KeywordOverlay`], which is merged over the built-in table into a fresh
//! [`KeywordTable`] value. Nothing here is global mutable state.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::token::TokenKind;

/// Surface words recognized without any overlay.
const BUILTIN_WORDS: &[(&str, TokenKind)] = &[
    // Movement
    ("GO", TokenKind::Move),
    ("MOVE", TokenKind::Move),
    ("WALK", TokenKind::Move),
    ("RUN", TokenKind::Move),
    ("CLIMB", TokenKind::Move),
    ("HEAD", TokenKind::Move),
    ("TRAVEL", TokenKind::Move),
    // Perception
    ("LOOK", TokenKind::Look),
    ("L", TokenKind::Look),
    ("INSPECT", TokenKind::Inspect),
    ("CHECK", TokenKind::Inspect),
    ("READ", TokenKind::Inspect),
    ("LISTEN", TokenKind::Listen),
    ("HEAR", TokenKind::Listen),
    ("EXPLORE", TokenKind::Explore),
    ("SEARCH", TokenKind::Explore),
    // Objects
    ("TAKE", TokenKind::Take),
    ("GET", TokenKind::Take),
    ("GRAB", TokenKind::Take),
    ("DROP", TokenKind::Drop),
    ("DISCARD", TokenKind::Drop),
    ("OPEN", TokenKind::Open),
    ("UNLOCK", TokenKind::Open),
    ("USE", TokenKind::Use),
    ("PUT", TokenKind::Put),
    ("PLACE", TokenKind::Put),
    ("INSERT", TokenKind::Put),
    ("CRAFT", TokenKind::Craft),
    ("MAKE", TokenKind::Craft),
    ("BUILD", TokenKind::Craft),
    ("HOW", TokenKind::How),
    ("DICE", TokenKind::Dice),
    ("ROLL", TokenKind::Dice),
    // Combat
    ("ATTACK", TokenKind::Strike),
    ("STRIKE", TokenKind::Strike),
    ("HIT", TokenKind::Strike),
    ("FIGHT", TokenKind::Strike),
    ("KILL", TokenKind::Strike),
    ("FLEE", TokenKind::Flee),
    ("ESCAPE", TokenKind::Flee),
    ("RETREAT", TokenKind::Flee),
    // Conversation
    ("TALK", TokenKind::Talk),
    ("SAY", TokenKind::Talk),
    ("SPEAK", TokenKind::Talk),
    ("ASK", TokenKind::Talk),
    // Meta
    ("HELP", TokenKind::Help),
    ("INVENTORY", TokenKind::Inventory),
    ("INV", TokenKind::Inventory),
    ("I", TokenKind::Inventory),
    ("QUIT", TokenKind::Quit),
    ("EXIT", TokenKind::Quit),
    // Directions
    ("N", TokenKind::North),
    ("NORTH", TokenKind::North),
    ("NE", TokenKind::NorthEast),
    ("NORTHEAST", TokenKind::NorthEast),
    ("E", TokenKind::East),
    ("EAST", TokenKind::East),
    ("SE", TokenKind::SouthEast),
    ("SOUTHEAST", TokenKind::SouthEast),
    ("S", TokenKind::South),
    ("SOUTH", TokenKind::South),
    ("SW", TokenKind::SouthWest),
    ("SOUTHWEST", TokenKind::SouthWest),
    ("W", TokenKind::West),
    ("WEST", TokenKind::West),
    ("NW", TokenKind::NorthWest),
    ("NORTHWEST", TokenKind::NorthWest),
    ("UP", TokenKind::Up),
    ("U", TokenKind::Up),
    ("DOWN", TokenKind::Down),
    ("D", TokenKind::Down),
    // Prepositions
    ("IN", TokenKind::In),
    ("INTO", TokenKind::Into),
    ("ON", TokenKind::On),
    ("FROM", TokenKind::From),
    ("WITH", TokenKind::With),
    ("USING", TokenKind::Using),
    ("TO", TokenKind::To),
    ("AWAY", TokenKind::Away),
];

static BUILTIN: LazyLock<KeywordTable> = LazyLock::new(|| KeywordTable {
    words: BUILTIN_WORDS
        .iter()
        .map(|&(word, kind)| (word.to_string(), kind))
        .collect(),
});

/// Per-game vocabulary layered over the built-in keywords.
///
/// Keys are trimmed and upper-cased on insertion. Structural kinds
/// (identifier, string, end of line) are refused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordOverlay {
    entries: BTreeMap<String, TokenKind>,
}

impl KeywordOverlay {
    /// Creates an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alias. Returns false (and adds nothing) if the alias is blank
    /// or the kind is structural.
    pub fn insert(&mut self, alias: &str, kind: TokenKind) -> bool {
        let key = alias.trim().to_uppercase();
        if key.is_empty() || kind.is_structural() {
            return false;
        }
        self.entries.insert(key, kind);
        true
    }

    /// Looks up an alias (case-insensitive).
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<TokenKind> {
        self.entries.get(&alias.trim().to_uppercase()).copied()
    }

    /// Number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the overlay holds no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates aliases in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenKind)> {
        self.entries.iter().map(|(word, kind)| (word.as_str(), *kind))
    }
}

impl<S: AsRef<str>> FromIterator<(S, TokenKind)> for KeywordOverlay {
    fn from_iter<I: IntoIterator<Item = (S, TokenKind)>>(iter: I) -> Self {
        let mut overlay = Self::new();
        for (alias, kind) in iter {
            overlay.insert(alias.as_ref(), kind);
        }
        overlay
    }
}

/// A merged mapping from upper-case surface words to token kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordTable {
    words: HashMap<String, TokenKind>,
}

impl KeywordTable {
    /// The built-in table shared by the whole process.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Builds a table from the built-in words with `overlay` merged on top.
    /// Overlay entries win on collision.
    #[must_use]
    pub fn merged(overlay: &KeywordOverlay) -> Self {
        let mut words = BUILTIN.words.clone();
        for (alias, kind) in overlay.iter() {
            words.insert(alias.to_string(), kind);
        }
        Self { words }
    }

    /// Looks up an upper-case word.
    #[must_use]
    pub fn lookup(&self, upper: &str) -> Option<TokenKind> {
        self.words.get(upper).copied()
    }

    /// All surface words that resolve to `kind`, sorted.
    #[must_use]
    pub fn words_for(&self, kind: TokenKind) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .words
            .iter()
            .filter(|&(_, &k)| k == kind)
            .map(|(word, _)| word.as_str())
            .collect();
        words.sort_unstable();
        words
    }

    /// Iterates every word in the table, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = (&str, TokenKind)> {
        self.words.iter().map(|(word, kind)| (word.as_str(), *kind))
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
