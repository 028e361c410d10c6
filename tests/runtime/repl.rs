//! REPL loop tests driven by a scripted editor.

use std::collections::VecDeque;

use waymark_foundation::Result;
use waymark_language::KeywordTable;
use waymark_runtime::{LineEditor, ReadResult, Repl, Session, SessionConfig, Step};

/// Editor that replays scripted reads.
struct ScriptedEditor {
    reads: VecDeque<ReadResult>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            reads: lines
                .iter()
                .map(|l| ReadResult::Line((*l).to_string()))
                .collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.reads.pop_front().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: &KeywordTable) {}
}

fn session() -> Session {
    Session::from_config(SessionConfig::default().with_banner(false))
}

#[test]
fn interrupted_reads_are_ignored() {
    let mut editor = ScriptedEditor::new(&["look"]);
    editor.reads.push_front(ReadResult::Interrupted);
    let mut repl = Repl::with_editor(editor, session());
    repl.run().expect("repl run");
}

#[test]
fn aliases_meta_lists_overlay() {
    let mut repl = Repl::with_editor(ScriptedEditor::new(&[]), session());
    assert_eq!(
        repl.eval(":aliases").expect("eval"),
        Step::Continue("  (no aliases loaded)".to_string())
    );
}

#[test]
fn malformed_input_does_not_stop_the_loop() {
    let mut repl = Repl::with_editor(ScriptedEditor::new(&[]), session());
    let Step::Continue(text) = repl.eval("help me").expect("eval") else {
        panic!("malformed input should not quit");
    };
    assert!(text.ends_with("Unexpected input after 'help'"));
}
