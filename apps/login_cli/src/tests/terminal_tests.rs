use super::*;

use std::{collections::VecDeque, io::Cursor};

/// Answers prompts from a fixed list of lines, recording which were asked.
#[derive(Default)]
struct ScriptedInput {
    lines: VecDeque<String>,
    asked: Vec<&'static str>,
}

impl ScriptedInput {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn username(&mut self) -> Result<Option<String>> {
        self.asked.push("username");
        Ok(self.lines.pop_front())
    }

    fn password(&mut self) -> Result<Option<String>> {
        self.asked.push("password");
        Ok(self.lines.pop_front())
    }
}

#[test]
fn asks_for_both_inputs_when_nothing_is_prefilled() {
    let mut prefill = Prefill::default();
    let mut source = ScriptedInput::new(&["alice", "  s3cret "]);

    let inputs = read_inputs(&mut prefill, &mut source).expect("read");

    assert_eq!(inputs, Some(("alice".to_string(), "  s3cret ".to_string())));
    assert_eq!(source.asked, vec!["username", "password"]);
}

#[test]
fn prefilled_values_are_used_once() {
    let mut prefill = Prefill {
        username: Some("admin".to_string()),
        password: None,
    };
    let mut source = ScriptedInput::new(&["1234", "bob", "pw"]);

    let first = read_inputs(&mut prefill, &mut source).expect("read");
    assert_eq!(first, Some(("admin".to_string(), "1234".to_string())));
    assert_eq!(source.asked, vec!["password"]);

    let second = read_inputs(&mut prefill, &mut source).expect("read");
    assert_eq!(second, Some(("bob".to_string(), "pw".to_string())));
}

#[test]
fn fully_prefilled_inputs_never_prompt() {
    let mut prefill = Prefill {
        username: Some("admin".to_string()),
        password: Some("1234".to_string()),
    };
    let mut source = ScriptedInput::default();

    let inputs = read_inputs(&mut prefill, &mut source).expect("read");
    assert_eq!(inputs, Some(("admin".to_string(), "1234".to_string())));
    assert!(source.asked.is_empty());
}

#[test]
fn exhausted_input_stops_before_password() {
    let mut prefill = Prefill::default();
    let mut source = ScriptedInput::default();

    let inputs = read_inputs(&mut prefill, &mut source).expect("read");
    assert_eq!(inputs, None);
    assert_eq!(source.asked, vec!["username"]);
}

#[test]
fn prompt_line_strips_line_ending_only() {
    let mut input = Cursor::new("  alice \r\n");
    let mut prompts = Vec::new();

    let line = prompt_line(&mut input, &mut prompts, "Username").expect("read");

    assert_eq!(line.as_deref(), Some("  alice "));
    assert_eq!(String::from_utf8(prompts).expect("utf8"), "Username: ");
}

#[test]
fn prompt_line_passes_blank_lines_through() {
    let mut input = Cursor::new("\n");
    let mut prompts = Vec::new();

    let line = prompt_line(&mut input, &mut prompts, "Username").expect("read");
    assert_eq!(line.as_deref(), Some(""));
}

#[test]
fn prompt_line_reports_end_of_input() {
    let mut input = Cursor::new("");
    let mut prompts = Vec::new();

    let line = prompt_line(&mut input, &mut prompts, "Username").expect("read");
    assert_eq!(line, None);
}

#[tokio::test]
async fn terminal_form_tracks_error_element_state() {
    let form = TerminalForm::new();
    form.set_input("alice".to_string(), "pw".to_string()).await;
    assert_eq!(form.username().await, "alice");
    assert_eq!(form.password().await, "pw");

    form.show_error("Invalid credentials").await;
    assert!(form.state.error().await.visible);

    form.alert("Welcome").await;
    form.hide_error().await;
    let snapshot = form.state.snapshot().await;
    assert!(!snapshot.error.visible);
    assert_eq!(snapshot.alerts, vec!["Welcome"]);
}
