//! Integration tests for the phrase compiler
//!
//! Each grammar rule end to end, from raw input to `CommandNode`.

use waymark_language::{
    Action, CommandNode, CommandPhrase, Compiler, KeywordOverlay, KeywordTable, Scanner, TokenKind,
    compile_tokens,
};

fn compile(input: &str) -> CommandNode {
    Compiler::new().compile(input)
}

fn verb(input: &str) -> (Action, CommandPhrase) {
    match compile(input) {
        CommandNode::Verb { action, phrase } => (action, phrase),
        other => panic!("expected verb for {input:?}, got {other:?}"),
    }
}

fn error(input: &str) -> (String, usize) {
    match compile(input) {
        CommandNode::Error {
            message,
            column,
            input: original,
        } => {
            assert_eq!(original, input);
            (message, column)
        }
        other => panic!("expected error for {input:?}, got {other:?}"),
    }
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn bare_directions() {
    assert_eq!(verb("n"), (Action::Go, CommandPhrase::target("n")));
    assert_eq!(verb("north"), (Action::Go, CommandPhrase::target("north")));
    assert_eq!(verb("U").1.target, "U");
}

#[test]
fn go_to_strips_leading_to() {
    let (action, phrase) = verb("go to hallway");
    assert_eq!(action, Action::Go);
    assert_eq!(phrase.target, "hallway");
    assert_eq!(phrase.raw, "to hallway");
}

#[test]
fn go_to_to_strips_every_leading_to() {
    assert_eq!(verb("walk to to the door").1.target, "the door");
}

#[test]
fn dangling_to_is_an_error() {
    let (message, column) = error("go to");
    assert_eq!(message, "Expected destination after 'to'");
    assert_eq!(column, 3);
}

#[test]
fn go_alone_asks_where() {
    assert_eq!(error("climb"), ("Go where?".to_string(), 0));
}

#[test]
fn direction_overrides_noun_phrase() {
    let (_, phrase) = verb("climb rope up");
    assert_eq!(phrase.target, "up");
    assert_eq!(phrase.raw, "rope up");
}

#[test]
fn go_into_needs_a_target_first() {
    let (message, column) = error("go into cave");
    assert_eq!(message, "Expected target before 'into'");
    assert_eq!(column, 3);
}

// =============================================================================
// Run / flee disambiguation
// =============================================================================

#[test]
fn run_alone_and_run_away_flee() {
    for input in ["run", "run away", "RUN AWAY", "run away away"] {
        let (action, phrase) = verb(input);
        assert_eq!(action, Action::Flee, "input {input:?}");
        assert_eq!(phrase.target, "", "input {input:?}");
    }
}

#[test]
fn run_with_direction_is_go() {
    assert_eq!(
        verb("run north"),
        (Action::Go, CommandPhrase::target("north"))
    );
    assert_eq!(verb("run away north").0, Action::Go);
}

#[test]
fn walk_away_is_not_flee() {
    let (action, phrase) = verb("walk away");
    assert_eq!(action, Action::Go);
    assert_eq!(phrase.target, "away");
}

#[test]
fn flee_rejects_trailing_words() {
    let (message, column) = error("flee now");
    assert!(message.contains("Unexpected input after"));
    assert_eq!(column, 5);
}

// =============================================================================
// Look
// =============================================================================

#[test]
fn look_variants() {
    assert_eq!(verb("look"), (Action::Look, CommandPhrase::default()));
    for input in [
        "look around",
        "look arround",
        "look around and tell me what I see",
        "l AROUND",
    ] {
        let (action, phrase) = verb(input);
        assert_eq!(action, Action::Look, "input {input:?}");
        assert_eq!(phrase.target, "", "input {input:?}");
    }
}

#[test]
fn look_collects_arguments_verbatim() {
    assert_eq!(verb("look at painting").1.target, "at painting");
    assert_eq!(verb("look painting").1.target, "painting");
    assert_eq!(verb("look at"), (Action::Look, CommandPhrase::target("at")));
}

#[test]
fn look_around_is_checked_after_the_split() {
    assert_eq!(
        verb("look around from the tower"),
        (Action::Look, CommandPhrase::default())
    );
    let (message, column) = error("look around with");
    assert_eq!(message, "Expected object after 'with'");
    assert_eq!(column, 12);
}

#[test]
fn look_does_not_skip_to() {
    assert_eq!(verb("look to sea").1.target, "to sea");
}

// =============================================================================
// Talk
// =============================================================================

#[test]
fn talk_to_person() {
    let (action, phrase) = verb("talk to Elias");
    assert_eq!(action, Action::Talk);
    assert_eq!(phrase.target, "Elias");
}

#[test]
fn mention_sigil_talks() {
    let (action, phrase) = verb("@Elias hello");
    assert_eq!(action, Action::Talk);
    assert_eq!(phrase.target, "Elias hello");
}

#[test]
fn talk_to_nobody() {
    assert_eq!(error("talk to"), ("Talk to whom?".to_string(), 0));
    assert_eq!(error("say"), ("Talk to whom?".to_string(), 0));
}

// =============================================================================
// Preposition split
// =============================================================================

#[test]
fn use_key_on_door() {
    let (action, phrase) = verb("use key on door");
    assert_eq!(action, Action::Use);
    assert_eq!(phrase.target, "key");
    assert_eq!(phrase.preposition.as_deref(), Some("on"));
    assert_eq!(phrase.object.as_deref(), Some("door"));
    assert_eq!(phrase.raw, "key on door");
}

#[test]
fn split_uses_first_preposition() {
    let (_, phrase) = verb("put coin from purse into slot");
    assert_eq!(phrase.target, "coin");
    assert_eq!(phrase.preposition.as_deref(), Some("from"));
    assert_eq!(phrase.object.as_deref(), Some("purse into slot"));
}

#[test]
fn preposition_is_lowercased() {
    assert_eq!(
        verb("attack troll WITH axe").1.preposition.as_deref(),
        Some("with")
    );
}

#[test]
fn preposition_first_is_an_error() {
    let (message, column) = error("use on door");
    assert!(message.contains("Expected target before"));
    assert_eq!(column, 4);
}

#[test]
fn preposition_last_is_an_error() {
    let (message, column) = error("craft rope using");
    assert_eq!(message, "Expected object after 'using'");
    assert_eq!(column, 11);
}

#[test]
fn quoted_target_keeps_spaces() {
    assert_eq!(
        verb("take \"lit torch\""),
        (Action::Take, CommandPhrase::target("lit torch"))
    );
}

#[test]
fn quoted_preposition_does_not_split() {
    let (_, phrase) = verb("read \"notes on magic\"");
    assert_eq!(phrase.target, "notes on magic");
    assert!(phrase.preposition.is_none());
}

// =============================================================================
// No-argument verbs
// =============================================================================

#[test]
fn no_argument_verbs() {
    assert_eq!(verb("help").0, Action::Help);
    assert_eq!(verb("?").0, Action::Help);
    assert_eq!(verb("i").0, Action::Inventory);
    assert_eq!(verb("listen").0, Action::Listen);
    assert_eq!(verb("quit").0, Action::Quit);
}

#[test]
fn no_argument_verb_with_extra_input() {
    let (message, column) = error("help extra");
    assert!(message.contains("Unexpected input after"));
    assert_eq!(column, 5);
}

// =============================================================================
// Unknown
// =============================================================================

#[test]
fn unknown_inputs() {
    for input in ["", "   ", "dance", "\"quoted\" start", "on the table", "to"] {
        assert_eq!(compile(input), CommandNode::Unknown, "input {input:?}");
    }
}

// =============================================================================
// Overlay and purity
// =============================================================================

#[test]
fn overlay_alias_compiles() {
    let overlay: KeywordOverlay = [("EXAMINE", TokenKind::Inspect)].into_iter().collect();
    let compiler = Compiler::with_overlay(&overlay);
    assert_eq!(
        compiler.compile("examine map"),
        CommandNode::Verb {
            action: Action::Inspect,
            phrase: CommandPhrase::target("map"),
        }
    );
    assert_eq!(compile("examine map"), CommandNode::Unknown);
}

#[test]
fn compile_is_idempotent() {
    let overlay: KeywordOverlay = [("PEER", TokenKind::Look)].into_iter().collect();
    let compiler = Compiler::with_overlay(&overlay);
    for input in ["peer at statue", "use on", "go north", "", "xyzzy"] {
        assert_eq!(compiler.compile(input), compiler.compile(input));
    }
}

#[test]
fn compile_tokens_matches_compile() {
    let input = "put gem in chest";
    let tokens = Scanner::scan(input, KeywordTable::builtin());
    assert_eq!(compile_tokens(input, &tokens), compile(input));
}

#[test]
fn compile_tokens_on_empty_slice_is_unknown() {
    assert_eq!(compile_tokens("", &[]), CommandNode::Unknown);
}
