//! Alias configuration loading.
//!
//! Games ship extra vocabulary as YAML. Two shapes are accepted:
//!
//! ```yaml
//! aliases:
//!   - alias: EXAMINE
//!     canonical: INSPECT
//! ```
//!
//! ```yaml
//! aliases: { EXAMINE: INSPECT, SMASH: HIT }
//! ```
//!
//! Both sides are case-insensitive. The canonical side names a grammar token
//! kind (`INSPECT`, `MOVE`, `N`, ...) or, failing that, any built-in word
//! (`GO`, `HIT`, `NORTH`, ...). Entries that do not resolve are dropped one
//! by one; a broken document yields an empty overlay from the lenient entry
//! points so a bad file never stops a session from starting.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;
use tracing::warn;
use waymark_foundation::{Error, ErrorContext, Result};
use waymark_language::{KeywordOverlay, KeywordTable, TokenKind};

/// One entry of the list form.
#[derive(Debug, Deserialize)]
struct AliasEntry {
    alias: Value,
    canonical: Value,
}

/// Loads alias overlays from YAML.
pub struct AliasLoader;

impl AliasLoader {
    /// Parses an alias document, degrading to an empty overlay on any
    /// document-level problem.
    #[must_use]
    pub fn parse(source: &str) -> KeywordOverlay {
        Self::try_parse(source).unwrap_or_else(|err| {
            warn!(error = %err, "ignoring alias configuration");
            KeywordOverlay::new()
        })
    }

    /// Loads an alias file, degrading to an empty overlay if the file is
    /// missing, unreadable, or malformed.
    #[must_use]
    pub fn load(path: &Path) -> KeywordOverlay {
        Self::try_load(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "ignoring alias file");
            KeywordOverlay::new()
        })
    }

    /// Loads an alias file, reporting document-level problems.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid alias
    /// document.
    pub fn try_load(path: &Path) -> Result<KeywordOverlay> {
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, &e))?;
        Self::try_parse(&source).map_err(|mut e| {
            let context = e.context.take().unwrap_or_default();
            e.with_context(context.with_source(path.display().to_string()))
        })
    }

    /// Parses an alias document, reporting document-level problems.
    ///
    /// Individual entries that do not resolve are still dropped with a
    /// warning rather than failing the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not YAML, has no top-level `aliases`
    /// key, or `aliases` is neither a mapping nor a list.
    pub fn try_parse(source: &str) -> Result<KeywordOverlay> {
        let document: Value = serde_yaml::from_str(source).map_err(yaml_error)?;

        let Some(section) = document.get("aliases") else {
            return Err(Error::config("missing top-level 'aliases' key"));
        };

        let mut overlay = KeywordOverlay::new();
        match section {
            Value::Null => {}
            Value::Mapping(map) => {
                for (alias, canonical) in map {
                    add_entry(&mut overlay, alias, canonical);
                }
            }
            Value::Sequence(items) => {
                for item in items {
                    match serde_yaml::from_value::<AliasEntry>(item.clone()) {
                        Ok(entry) => add_entry(&mut overlay, &entry.alias, &entry.canonical),
                        Err(err) => warn!(error = %err, "dropping malformed alias entry"),
                    }
                }
            }
            _ => return Err(Error::config("'aliases' must be a mapping or a list")),
        }
        Ok(overlay)
    }

    /// Resolves a canonical name to a token kind.
    ///
    /// Grammar names win over surface words; structural kinds never resolve.
    #[must_use]
    pub fn resolve_canonical(name: &str) -> Option<TokenKind> {
        let upper = name.trim().to_uppercase();
        if upper.is_empty() {
            return None;
        }
        TokenKind::from_name(&upper)
            .or_else(|| KeywordTable::builtin().lookup(&upper))
            .filter(|kind| !kind.is_structural())
    }
}

fn add_entry(overlay: &mut KeywordOverlay, alias: &Value, canonical: &Value) {
    let (Some(alias), Some(canonical)) = (scalar(alias), scalar(canonical)) else {
        warn!("dropping alias entry with a non-scalar side");
        return;
    };
    let Some(kind) = AliasLoader::resolve_canonical(&canonical) else {
        warn!(%alias, %canonical, "dropping alias with unknown canonical name");
        return;
    };
    if !overlay.insert(&alias, kind) {
        warn!(%canonical, "dropping alias with a blank name");
    }
}

/// Renders a YAML scalar as text.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Converts a YAML syntax error, keeping its position when known.
fn yaml_error(err: serde_yaml::Error) -> Error {
    let location = err.location();
    let error = Error::config(err.to_string());
    match location {
        Some(location) => error
            .with_context(ErrorContext::new().with_position(location.line(), location.column())),
        None => error,
    }
}
