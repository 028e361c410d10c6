//! Free-text verb canonicalization for help display.
//!
//! This table is independent of the grammar: it only maps words a player
//! might type to the verb the help system documents, so help can say
//! "also accepts: grab, get". Keys are lower-case.

use std::collections::{BTreeMap, HashMap};

use waymark_language::{Action, KeywordOverlay};

/// Built-in (alias, canonical verb) pairs.
const BUILTIN_SYNONYMS: &[(&str, &str)] = &[
    ("walk", "go"),
    ("move", "go"),
    ("run", "go"),
    ("climb", "go"),
    ("head", "go"),
    ("travel", "go"),
    ("l", "look"),
    ("get", "take"),
    ("grab", "take"),
    ("discard", "drop"),
    ("unlock", "open"),
    ("place", "put"),
    ("insert", "put"),
    ("strike", "attack"),
    ("hit", "attack"),
    ("fight", "attack"),
    ("kill", "attack"),
    ("make", "craft"),
    ("build", "craft"),
    ("check", "inspect"),
    ("read", "inspect"),
    ("examine", "inspect"),
    ("search", "explore"),
    ("roll", "dice"),
    ("escape", "flee"),
    ("retreat", "flee"),
    ("say", "talk"),
    ("speak", "talk"),
    ("ask", "talk"),
    ("hear", "listen"),
    ("inv", "inventory"),
    ("i", "inventory"),
    ("exit", "quit"),
    ("?", "help"),
];

/// Alias → canonical verb table with its reverse multimap.
#[derive(Clone, Debug, Default)]
pub struct VerbSynonyms {
    canonical: HashMap<String, String>,
    aliases: BTreeMap<String, Vec<String>>,
}

impl VerbSynonyms {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (alias, canonical) in BUILTIN_SYNONYMS {
            table.insert(alias, canonical);
        }
        table
    }

    /// Adds an alias. Both sides are trimmed and lower-cased; blank sides
    /// and self-aliases are ignored. A later insert for the same alias
    /// replaces the earlier one.
    pub fn insert(&mut self, alias: &str, canonical: &str) {
        let alias = alias.trim().to_lowercase();
        let canonical = canonical.trim().to_lowercase();
        if alias.is_empty() || canonical.is_empty() || alias == canonical {
            return;
        }
        if let Some(previous) = self.canonical.insert(alias.clone(), canonical.clone()) {
            if let Some(list) = self.aliases.get_mut(&previous) {
                list.retain(|a| a != &alias);
            }
        }
        let list = self.aliases.entry(canonical).or_default();
        if let Err(pos) = list.binary_search(&alias) {
            list.insert(pos, alias);
        }
    }

    /// Adds every verb alias from a grammar overlay, using the verb name of
    /// the action its token kind maps to. Direction and preposition aliases
    /// are skipped.
    pub fn extend_from_overlay(&mut self, overlay: &KeywordOverlay) {
        for (alias, kind) in overlay.iter() {
            if let Some(action) = Action::for_kind(kind) {
                self.insert(alias, action.as_str());
            }
        }
    }

    /// Canonical verb for `word`. Canonical verbs map to themselves only if
    /// they are known as a canonical.
    #[must_use]
    pub fn canonicalize(&self, word: &str) -> Option<&str> {
        let key = word.trim().to_lowercase();
        if let Some(canonical) = self.canonical.get(&key) {
            return Some(canonical.as_str());
        }
        self.aliases.get_key_value(&key).map(|(k, _)| k.as_str())
    }

    /// Aliases of a canonical verb, sorted.
    #[must_use]
    pub fn aliases_of(&self, canonical: &str) -> &[String] {
        self.aliases
            .get(&canonical.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Help text listing the aliases of `canonical`, if it has any.
    #[must_use]
    pub fn also_accepts(&self, canonical: &str) -> Option<String> {
        let aliases = self.aliases_of(canonical);
        if aliases.is_empty() {
            None
        } else {
            Some(format!("also accepts: {}", aliases.join(", ")))
        }
    }

    /// Canonical verbs with at least one alias, sorted.
    pub fn canonicals(&self) -> impl Iterator<Item = &str> {
        self.aliases
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(canonical, _)| canonical.as_str())
    }

    /// Number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}
