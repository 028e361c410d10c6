//! Integration tests for the scanner
//!
//! Tests tokenization of player input against built-in and merged keyword
//! tables.

use waymark_language::{KeywordOverlay, KeywordTable, Scanner, TokenKind};

fn kinds(input: &str) -> Vec<TokenKind> {
    Scanner::scan(input, KeywordTable::builtin())
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn every_scan_ends_with_a_single_eol() {
    for input in ["", "   ", "n", "take \"lamp", "@", "?", "use key on door", "a\nb\nc"] {
        let tokens = Scanner::scan(input, KeywordTable::builtin());
        let eols = tokens.iter().filter(|t| t.is_eol()).count();
        assert_eq!(eols, 1, "input {input:?}");
        assert!(tokens.last().is_some_and(|t| t.is_eol()), "input {input:?}");
    }
}

#[test]
fn eol_has_empty_lexeme() {
    let tokens = Scanner::scan("look", KeywordTable::builtin());
    assert_eq!(tokens[1].lexeme, "");
}

#[test]
fn skippable_only_input_is_just_eol() {
    assert_eq!(kinds(" ,.() \t"), vec![TokenKind::Eol]);
}

// =============================================================================
// Words and keywords
// =============================================================================

#[test]
fn keyword_lookup_is_case_insensitive() {
    assert_eq!(
        kinds("Go NoRtH"),
        vec![TokenKind::Move, TokenKind::North, TokenKind::Eol]
    );
}

#[test]
fn words_include_digits_underscores_and_hyphens() {
    let tokens = Scanner::scan("take rope-2 old_key", KeywordTable::builtin());
    assert_eq!(tokens[1].lexeme, "rope-2");
    assert_eq!(tokens[2].lexeme, "old_key");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn prepositions_are_recognized() {
    assert_eq!(
        kinds("put coin into slot"),
        vec![
            TokenKind::Put,
            TokenKind::Identifier,
            TokenKind::Into,
            TokenKind::Identifier,
            TokenKind::Eol,
        ]
    );
}

#[test]
fn overlay_words_are_keywords() {
    let overlay: KeywordOverlay = [("EXAMINE", TokenKind::Inspect)].into_iter().collect();
    let table = KeywordTable::merged(&overlay);
    let tokens = Scanner::scan("Examine map", &table);
    assert_eq!(tokens[0].kind, TokenKind::Inspect);
    assert_eq!(tokens[0].lexeme, "Examine");
}

#[test]
fn overlay_overrides_builtin_word() {
    let overlay: KeywordOverlay = [("N", TokenKind::Inventory)].into_iter().collect();
    let table = KeywordTable::merged(&overlay);
    assert_eq!(Scanner::scan("n", &table)[0].kind, TokenKind::Inventory);
    assert_eq!(kinds("n")[0], TokenKind::North);
}

// =============================================================================
// Strings and sigils
// =============================================================================

#[test]
fn strings_are_not_keywords() {
    let tokens = Scanner::scan("say \"north\"", KeywordTable::builtin());
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].lexeme, "north");
}

#[test]
fn empty_string_literal() {
    let tokens = Scanner::scan("say \"\"", KeywordTable::builtin());
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].lexeme, "");
}

#[test]
fn mention_sigil_and_help_mark() {
    assert_eq!(
        kinds("@guard ?"),
        vec![
            TokenKind::Talk,
            TokenKind::Identifier,
            TokenKind::Help,
            TokenKind::Eol,
        ]
    );
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn columns_are_zero_based() {
    let tokens = Scanner::scan("use key on door", KeywordTable::builtin());
    let columns: Vec<usize> = tokens.iter().map(|t| t.column()).collect();
    assert_eq!(columns, vec![0, 4, 8, 11, 15]);
}

#[test]
fn string_column_is_the_opening_quote() {
    let tokens = Scanner::scan("take \"lit torch\"", KeywordTable::builtin());
    assert_eq!(tokens[1].column(), 5);
}

#[test]
fn scanner_is_restartable() {
    let first = Scanner::scan("go north", KeywordTable::builtin());
    let second = Scanner::scan("go north", KeywordTable::builtin());
    assert_eq!(first, second);
}
