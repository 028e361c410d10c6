//! Session tests.

use std::fs;

use waymark_runtime::{OutputFormat, Session, SessionConfig, format_tokens};

fn quiet() -> SessionConfig {
    SessionConfig::default().with_banner(false)
}

#[test]
fn alias_file_from_config_is_loaded() {
    let path = std::env::temp_dir().join(format!("waymark-session-{}.yaml", std::process::id()));
    fs::write(&path, "aliases:\n  peer: look\n").expect("write alias file");
    let session = Session::from_config(quiet().with_alias_file(&path));
    fs::remove_file(&path).ok();

    assert_eq!(session.render("peer moon").unwrap(), "look target=\"moon\"");
    assert!(session.help_text().contains("peer"));
}

#[test]
fn broken_alias_file_still_starts() {
    let path = std::env::temp_dir().join(format!("waymark-broken-{}.yaml", std::process::id()));
    fs::write(&path, "aliases: [").expect("write alias file");
    let session = Session::from_config(quiet().with_alias_file(&path));
    fs::remove_file(&path).ok();

    assert!(session.interpreter().extra_keywords().is_empty());
    assert_eq!(session.render("n").unwrap(), "go target=\"n\"");
}

#[test]
fn json_error_carries_column() {
    let session = Session::from_config(quiet().with_format(OutputFormat::Json));
    let out = session.render("take lamp with").unwrap();
    assert!(out.contains("\"action\":\"Unknown\""));
    assert!(out.contains("\"column\":10"));
    assert!(out.contains("Expected object after 'with'"));
}

#[test]
fn token_dump_shows_kinds_and_columns() {
    let session = Session::from_config(quiet());
    let tokens = session.interpreter().tokens("@bob hi?");
    assert_eq!(format_tokens(&tokens), "TALK(@)@0 IDENTIFIER(bob)@1 IDENTIFIER(hi)@5 HELP(?)@7 EOL@8");
}

#[test]
fn caret_points_at_dangling_to() {
    let session = Session::from_config(quiet());
    let out = session.render("go to").unwrap();
    assert_eq!(out, "go to\n   ^\nExpected destination after 'to'");
}
