//! End-to-end counting sessions driven through `run_with_input`.

use hilo_cli::run_with_input;
use std::io::Cursor;

fn session(args: &[&str], input: &str) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let code = run_with_input(args, &mut out, &mut err, &mut stdin);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn thirty_two_aces_then_a_rejected_thirty_third() {
    let input =
        "A A A A A A A A\nA,A,A,A,A,A,A,A\na a a a a a a a\nA A A A A A A A\nA\nstatus\nquit\n";
    let (code, out, err) = session(&["hilo", "count", "--decks", "8"], input);
    assert_eq!(code, 0);
    assert!(err.contains("would exceed max for A: 32"), "stderr: {}", err);
    assert_eq!(err.matches("Error:").count(), 1);
    assert!(out.contains("A:32"));
    assert!(out.contains("Running Count: -32"));
    assert!(out.contains("Cards Seen: 32/416"));
}

#[test]
fn ten_aliases_in_one_batch() {
    let (code, out, _) = session(&["hilo", "count", "--decks", "8"], "t T 10\nstatus\n");
    assert_eq!(code, 0);
    assert!(out.contains("10:3"));
    assert!(out.contains("Running Count: -3"));
}

#[test]
fn rejected_batch_leaves_status_unchanged() {
    let thirty_aces = vec!["A"; 30].join(" ");
    let input = format!("{}\nstatus\nA A A\nstatus\n", thirty_aces);
    let (_, out, err) = session(&["hilo", "count", "--decks", "8"], &input);
    assert!(err.contains("A would reach 33"));

    // blocks: after the 30 aces, first status, second status
    let statuses: Vec<&str> = out.split("Running Count:").skip(2).collect();
    assert_eq!(statuses.len(), 2);
    let before = statuses[0].split("Ranks:").next().unwrap();
    let after = statuses[1].split("Ranks:").next().unwrap();
    assert_eq!(before, after);
    assert!(before.starts_with(" -30\n"));
}

#[test]
fn sixty_cold_cards_read_player_favorable() {
    // 60 low cards balanced by 60 high cards keep the running count at zero
    let mut lines = Vec::new();
    for rank in ["2", "3", "4", "5", "6"] {
        lines.push(vec![rank; 12].join(" "));
    }
    lines.push(vec!["K"; 30].join(" "));
    lines.push(vec!["Q"; 30].join(" "));
    lines.push("status".to_string());
    let input = lines.join("\n") + "\n";

    let (_, out, _) = session(&["hilo", "count", "--decks", "8"], &input);
    assert!(out.contains("Running Count: 0\nCards Seen: 120/416"));
    let last_status = out.rsplit("Status:").next().unwrap();
    assert!(last_status.starts_with(" Player-favorable"));
}

#[test]
fn eof_ends_session_cleanly() {
    let (code, out, err) = session(&["hilo", "count", "--decks", "1"], "2 3\n");
    assert_eq!(code, 0);
    assert!(err.is_empty());
    assert!(out.ends_with("Bye.\n"));
}
