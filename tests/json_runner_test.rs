//! The line-delimited JSON protocol, driven through in-memory buffers.

use serde_json::Value;
use shoe_puzzle::json_runner::run_session;
use shoe_puzzle::Session;

fn run(session: &mut Session, input: &str) -> Vec<String> {
    let mut out = Vec::new();
    run_session(session, input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn parse(line: &str) -> Value {
    serde_json::from_str(line).unwrap()
}

#[test]
fn test_greets_and_reports_initial_state() {
    let lines = run(&mut Session::default(), "");
    assert_eq!(lines[0], "puzzle-start");

    let state = parse(&lines[1]);
    assert_eq!(state["Positions"][0], serde_json::json!({"Row": 0, "Col": 0}));
    assert_eq!(state["Positions"][3], serde_json::json!({"Row": 0, "Col": 2}));
    assert_eq!(state["Solved"], false);
    assert_eq!(state["LegalMoves"], serde_json::json!(["Right", "Down"]));
    assert_eq!(state["MoveCount"], 0);
    assert_eq!(state["Outcome"], Value::Null);
}

#[test]
fn test_move_and_click_replies() {
    let input = concat!(
        r#"{"Command":"Move","Direction":"Right"}"#,
        "\n",
        r#"{"Command":"Move","Direction":"Up"}"#,
        "\n",
        r#"{"Command":"Click","Row":2,"Col":2}"#,
        "\n",
    );
    let lines = run(&mut Session::default(), input);
    assert_eq!(lines.len(), 5);

    let moved = parse(&lines[2]);
    assert_eq!(moved["Outcome"], "Moved");
    assert_eq!(moved["MoveCount"], 1);
    assert_eq!(moved["Positions"][0], serde_json::json!({"Row": 0, "Col": 1}));
    assert_eq!(
        moved["Events"],
        serde_json::json!([{"Event": "PieceMoved", "Piece": "Block", "From": [0, 0], "To": [0, 1]}])
    );

    let rejected = parse(&lines[3]);
    assert_eq!(rejected["Outcome"], "Rejected");
    assert_eq!(rejected["MoveCount"], 1);
    assert_eq!(rejected["Events"], serde_json::json!([]));

    assert_eq!(parse(&lines[4])["Outcome"], "Ignored");
}

#[test]
fn test_bad_lines_get_an_error_reply() {
    let input = "not json\n\n{\"Command\":\"State\"}\n";
    let lines = run(&mut Session::default(), input);
    assert_eq!(lines.len(), 4);

    assert!(parse(&lines[2])["Error"].is_string());
    assert_eq!(parse(&lines[3])["MoveCount"], 0);
}

#[test]
fn test_reset_and_quit() {
    let input = concat!(
        r#"{"Command":"Move","Direction":"Down"}"#,
        "\n",
        r#"{"Command":"Reset"}"#,
        "\n",
        r#"{"Command":"Quit"}"#,
        "\n",
        r#"{"Command":"Move","Direction":"Down"}"#,
        "\n",
    );
    let mut session = Session::default();
    let lines = run(&mut session, input);
    assert_eq!(lines.len(), 4);

    let reset = parse(&lines[3]);
    assert_eq!(reset["MoveCount"], 0);
    assert_eq!(reset["Events"], serde_json::json!([{"Event": "Reset"}]));
    assert_eq!(session.move_count(), 0);
}

#[test]
fn test_click_far_outside_the_board_is_ignored() {
    let input = concat!(
        r#"{"Command":"Move","Direction":"Down"}"#,
        "\n",
        r#"{"Command":"Click","Row":-2147483648,"Col":0}"#,
        "\n",
    );
    let lines = run(&mut Session::default(), input);
    assert_eq!(lines.len(), 4);
    assert_eq!(parse(&lines[3])["Outcome"], "Ignored");
    assert_eq!(parse(&lines[3])["MoveCount"], 1);
}
