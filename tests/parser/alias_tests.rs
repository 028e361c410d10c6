//! Alias configuration tests.
//!
//! Tests for loading YAML alias files into keyword overlays.

use std::fs;
use std::path::PathBuf;

use waymark_foundation::ErrorKind;
use waymark_parser::{AliasLoader, TokenKind};

/// Writes `contents` to a uniquely named file in the temp directory.
fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("waymark-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn list_form_file() {
    let path = temp_file(
        "list.yaml",
        "aliases:\n  - alias: EXAMINE\n    canonical: INSPECT\n  - alias: yell\n    canonical: talk\n",
    );
    let overlay = AliasLoader::load(&path);
    fs::remove_file(&path).ok();

    assert_eq!(overlay.len(), 2);
    assert_eq!(overlay.get("EXAMINE"), Some(TokenKind::Inspect));
    assert_eq!(overlay.get("YELL"), Some(TokenKind::Talk));
}

#[test]
fn mapping_form_file() {
    let path = temp_file("map.yaml", "aliases:\n  examine: INSPECT\n  Smash: hit\n  upward: U\n");
    let overlay = AliasLoader::try_load(&path).expect("valid alias file");
    fs::remove_file(&path).ok();

    assert_eq!(overlay.get("EXAMINE"), Some(TokenKind::Inspect));
    assert_eq!(overlay.get("SMASH"), Some(TokenKind::Strike));
    assert_eq!(overlay.get("UPWARD"), Some(TokenKind::Up));
}

#[test]
fn canonical_names_use_token_kind_names() {
    assert_eq!(AliasLoader::resolve_canonical("ne"), Some(TokenKind::NorthEast));
    assert_eq!(AliasLoader::resolve_canonical("STRIKE"), Some(TokenKind::Strike));
    assert_eq!(AliasLoader::resolve_canonical(" inspect "), Some(TokenKind::Inspect));
    assert_eq!(AliasLoader::resolve_canonical("string"), None);
}

#[test]
fn unresolvable_entries_are_dropped() {
    let overlay = AliasLoader::parse("aliases: { EXAMINE: INSPECT, ZAP: TELEPORT, '': LOOK }");
    assert_eq!(overlay.len(), 1);
    assert!(overlay.get("ZAP").is_none());
}

#[test]
fn non_string_scalars_are_accepted() {
    let overlay = AliasLoader::parse("aliases: { 7: n, true: look }");
    assert_eq!(overlay.get("7"), Some(TokenKind::North));
    assert_eq!(overlay.get("TRUE"), Some(TokenKind::Look));
}

#[test]
fn broken_documents_degrade_to_empty() {
    for source in ["aliases: [", ": : :", "aliases: hello", "- just\n- a list\n", "{}"] {
        assert!(AliasLoader::parse(source).is_empty(), "source {source:?}");
    }
}

#[test]
fn missing_file_is_an_io_error_when_strict() {
    let path = std::env::temp_dir().join("waymark-does-not-exist.yaml");
    let err = AliasLoader::try_load(&path).expect_err("missing file");
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert!(AliasLoader::load(&path).is_empty());
}

#[test]
fn malformed_file_error_names_the_file() {
    let path = temp_file("broken.yaml", "aliases: [unclosed");
    let err = AliasLoader::try_load(&path).expect_err("malformed file");
    fs::remove_file(&path).ok();

    assert!(matches!(err.kind, ErrorKind::Config { .. }));
    let context = err.context.expect("file context");
    assert!(context.source.is_some_and(|s| s.ends_with("broken.yaml")));
    assert!(context.line.is_some(), "position survives the file context");
}
