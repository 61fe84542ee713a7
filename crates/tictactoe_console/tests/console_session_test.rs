//! Console sessions driven through in-memory streams.

use std::io::Cursor;
use tictactoe_console::{ConsoleSession, SessionSummary, Settings};

/// One line per prompt answer.
fn script(lines: &[&str]) -> Cursor<String> {
    let mut text = lines.join("\n");
    text.push('\n');
    Cursor::new(text)
}

fn play(lines: &[&str], settings: &Settings) -> (SessionSummary, String) {
    let mut out = Vec::new();
    let summary = ConsoleSession::new(script(lines), &mut out, settings)
        .run()
        .expect("in-memory streams never fail");
    (summary, String::from_utf8(out).expect("utf-8 output"))
}

/// X: (1,1) (1,3) (3,2) (2,3) (3,1); O: (2,2) (1,2) (2,1) (3,3) -> draw.
const DRAW: [&str; 18] = [
    "1", "1", "2", "2", "1", "3", "1", "2", "3", "2", "2", "1", "2", "3", "3", "3", "3", "1",
];

/// X takes the top row on the fifth move.
const X_TOP_ROW: [&str; 10] = ["1", "1", "2", "2", "1", "2", "3", "3", "1", "3"];

#[test]
fn test_banner_and_first_board() {
    let (_, out) = play(&[], &Settings::default());

    assert!(out.starts_with(
        "=== Tic-Tac-Toe Game ===\n\
         Players take turns placing X and O\n\
         Enter row and column (1-3) to place your mark\n"
    ));
    assert!(out.contains("  1   2   3\n  ---------\n1   |   |  \n"));
    assert!(out.contains("Player X's turn\nEnter row (1-3): "));
    assert!(out.ends_with("\nThanks for playing!\n"));
}

#[test]
fn test_draw_game() {
    let mut lines = DRAW.to_vec();
    lines.push("no");
    let (summary, out) = play(&lines, &Settings::default());

    assert_eq!(
        summary,
        SessionSummary {
            draws: 1,
            ..Default::default()
        }
    );
    assert!(out.contains("🤝 It's a draw! 🤝"));
    assert!(!out.contains("wins!"));
    assert!(out.contains("1 X | O | X\n"));
    assert!(out.contains("3 X | X | O\n"));
}

#[test]
fn test_occupied_cell_reprompts_same_player() {
    let lines = ["2", "2", "2", "2", "1", "1"];
    let (_, out) = play(&lines, &Settings::default());

    let rejection = out
        .find("That position is already taken!")
        .expect("occupied message");
    let after = &out[rejection..];
    assert!(after.starts_with("That position is already taken!\nEnter row (1-3): "));
    // The rejected attempt did not consume O's turn: O's mark lands at (1,1).
    assert!(out.contains("1 O |   |  \n"));
    assert_eq!(out.matches("Player O's turn").count(), 1);
}

#[test]
fn test_out_of_bounds_reprompts() {
    let lines = ["4", "1", "0", "2", "1", "-3", "1", "1"];
    let (_, out) = play(&lines, &Settings::default());

    assert_eq!(
        out.matches("Invalid position! Use 1-3 for row and column.")
            .count(),
        3
    );
    assert!(out.contains("1 X |   |  \n"));
    assert_eq!(out.matches("Player X's turn").count(), 1);
}

#[test]
fn test_play_again_resets_board() {
    let mut lines = X_TOP_ROW.to_vec();
    lines.push("YES");
    lines.extend(DRAW);
    lines.push("nope");
    let (summary, out) = play(&lines, &Settings::default());

    assert_eq!(
        summary,
        SessionSummary {
            x_wins: 1,
            o_wins: 0,
            draws: 1,
        }
    );
    assert_eq!(out.matches("Play again? (yes/no): ").count(), 2);
    // The second game starts from an empty board with X to move.
    let replay = out.find("Play again?").expect("replay prompt");
    assert!(out[replay..].contains("1   |   |  \n"));
    assert!(out[replay..].contains("Player X's turn"));
}

#[test]
fn test_o_can_win() {
    // X: (1,1) (1,2) (3,3); O: (2,1) (2,2) (2,3) -> O takes the middle row.
    let lines = ["1", "1", "2", "1", "1", "2", "2", "2", "3", "3", "2", "3", "no"];
    let (summary, out) = play(&lines, &Settings::default().with_banners(false));

    assert_eq!(summary.o_wins, 1);
    assert!(out.contains("\nPlayer O wins!\n"));
}

#[test]
fn test_end_of_input_mid_game() {
    let lines = ["1", "1", "2"];
    let (summary, out) = play(&lines, &Settings::default());

    assert_eq!(summary.games(), 0);
    assert!(out.ends_with("Enter column (1-3): \nThanks for playing!\n"));
}

#[test]
fn test_garbled_bytes_reprompt_as_non_numeric() {
    let mut out = Vec::new();
    let input = Cursor::new(b"\xff\xfe\n1\n1\n".to_vec());
    let summary = ConsoleSession::new(input, &mut out, &Settings::default())
        .run()
        .expect("garbled input is not an I/O failure");
    let out = String::from_utf8(out).expect("utf-8 output");

    assert_eq!(summary.games(), 0);
    assert!(out.contains(
        "Enter row (1-3): Please enter a number.\nEnter row (1-3): Enter column (1-3): "
    ));
    assert!(out.contains("1 X |   |  \n"));
}

#[test]
fn test_huge_number_is_out_of_bounds() {
    let lines = ["99999999999999999999", "1", "-99999999999999999999", "1", "1", "1"];
    let (_, out) = play(&lines, &Settings::default());

    assert_eq!(
        out.matches("Invalid position! Use 1-3 for row and column.")
            .count(),
        2
    );
    assert!(!out.contains("Please enter a number."));
    assert!(out.contains("1 X |   |  \n"));
}
