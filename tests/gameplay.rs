//! End-to-end games through the public API.

use tic_tac_toe::board::Status;
use tic_tac_toe::game::Game;
use tic_tac_toe::report::format_report;
use tic_tac_toe::types::{OutputFormat, Player, Squares, WinResult};
use tic_tac_toe::winner::{evaluate, LINES};

fn play_all(game: &mut Game, cells: &[usize]) {
    for &cell in cells {
        assert!(game.play(cell), "cell {} should be playable", cell);
    }
}

#[test]
fn x_wins_down_the_left_column() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 3, 4, 6]);

    assert_eq!(
        game.winner(),
        Some(WinResult { winner: Player::X, line: [0, 3, 6] })
    );
    assert_eq!(game.status().to_string(), "Winner: X");

    // The board is frozen once someone has won
    let len = game.history().len();
    assert!(!game.play(2));
    assert_eq!(game.history().len(), len);
}

#[test]
fn full_board_without_line_is_a_draw() {
    // Ends as X X O / O O X / X O X
    let mut game = Game::new();
    play_all(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "Draw: No winner!");
    assert!(game.current_squares().is_full());
}

#[test]
fn occupied_cells_never_grow_history() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0]);
    for cell in [4, 0] {
        assert!(!game.play(cell));
        assert_eq!(game.history().len(), 3);
    }
}

#[test]
fn playing_from_the_past_discards_the_future() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 2, 3, 4]);

    for m in 0..5 {
        let mut branch = game.clone();
        assert!(branch.jump_to(m));
        let free = (0..9)
            .find(|&i| branch.current_squares().get(i).is_some_and(|s| s.is_empty()))
            .unwrap();
        assert!(branch.play(free));
        assert_eq!(branch.history().len(), m + 2);
        assert_eq!(branch.current_move(), m + 1);
    }
}

#[test]
fn record_move_length_property() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 2]);
    game.jump_to(1);

    let before = game.current_move();
    let (next, location) =
        tic_tac_toe::board::handle_click(game.current_squares(), game.x_is_next(), 8).unwrap();
    game.record_move(next, location);

    assert_eq!(game.history().len(), before + 2);
    assert_eq!(game.current_move(), game.history().len() - 1);
}

#[test]
fn history_survives_sort_toggle_and_jumps() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8]);
    let snapshot = game.history().to_vec();

    game.toggle_sort_order();
    game.jump_to(1);
    game.toggle_sort_order();

    assert_eq!(game.history(), snapshot.as_slice());
    assert_eq!(game.current_move(), 1);
    assert_eq!(
        game.moves().iter().map(|m| m.move_index).collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn lines_without_a_winner_are_all_mixed_or_open() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 2, 6, 3]);
    let squares: &Squares = game.current_squares();

    assert_eq!(evaluate(squares), None);
    for line in LINES {
        let players: Vec<_> = line.iter().map(|&i| squares.0[i].player()).collect();
        assert!(players.contains(&None) || players.iter().any(|p| *p != players[0]));
    }
}

#[test]
fn json_report_describes_won_game() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 3, 4, 6]);

    let json = format_report(&game, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["status"]["kind"], "winner");
    assert_eq!(parsed["status"]["player"], "X");
    assert_eq!(parsed["moves"][1]["label"], "Go to move #1 (row: 1, col: 1)");
}
