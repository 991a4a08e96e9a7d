//! Game controller: move history, current position and list order.
//!
//! `Game` is the only owner of mutable state. Turn order is derived from
//! the current move pointer and is never stored on its own.

use serde::Serialize;
use tracing::{debug, info};

use crate::board::{self, Status};
use crate::types::{Location, MoveRecord, SortOrder, Squares, WinResult};
use crate::winner::evaluate;

/// One row of the move list, as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Index into the history.
    pub move_index: usize,
    pub label: String,
    /// The entry for the active position. Rendered as plain text.
    pub is_current: bool,
}

/// A game of tic-tac-toe with a linear, truncate-on-diverge history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<MoveRecord>,
    current_move: usize,
    sort_order: SortOrder,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A fresh game: one empty start record, X to move, ascending list.
    pub fn new() -> Self {
        Game::with_sort_order(SortOrder::Ascending)
    }

    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Game {
            history: vec![MoveRecord::start()],
            current_move: 0,
            sort_order,
        }
    }

    // ------------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------------

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// X moves on even positions, O on odd ones.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    pub fn current_squares(&self) -> &Squares {
        &self.history[self.current_move].squares
    }

    pub fn winner(&self) -> Option<WinResult> {
        evaluate(self.current_squares())
    }

    pub fn status(&self) -> Status {
        board::status(self.current_squares(), self.x_is_next())
    }

    // ------------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------------

    /// Append a move after the current position.
    ///
    /// Everything after the current pointer is discarded first; the new
    /// record becomes the current position.
    pub fn record_move(&mut self, next_squares: Squares, location: Location) {
        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(MoveRecord {
            squares: next_squares,
            location: Some(location),
        });
        self.current_move = self.history.len() - 1;

        if discarded > 0 {
            info!(discarded, "history diverged, dropped later moves");
        }
        debug!(
            move_index = self.current_move,
            row = location.row,
            col = location.col,
            "recorded move"
        );
    }

    /// Click a cell on the current board.
    ///
    /// Returns false, leaving the game untouched, when the click is not a
    /// legal move (cell taken, game won, index off the board).
    pub fn play(&mut self, index: usize) -> bool {
        match board::handle_click(self.current_squares(), self.x_is_next(), index) {
            Some((next_squares, location)) => {
                self.record_move(next_squares, location);
                true
            }
            None => {
                debug!(index, move_index = self.current_move, "ignored click");
                false
            }
        }
    }

    /// Make `move_index` the current position. History is not modified.
    ///
    /// Returns false for an index outside the history, which keeps the
    /// pointer where it was.
    pub fn jump_to(&mut self, move_index: usize) -> bool {
        if move_index >= self.history.len() {
            debug!(move_index, len = self.history.len(), "jump out of range");
            return false;
        }
        self.current_move = move_index;
        debug!(move_index, "jumped");
        true
    }

    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
        debug!(sort_order = ?self.sort_order, "toggled sort order");
    }

    // ------------------------------------------------------------------------
    // Move list
    // ------------------------------------------------------------------------

    /// The move list in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(move_index, record)| {
                let is_current = move_index == self.current_move;
                MoveEntry {
                    move_index,
                    label: move_label(move_index, record.location, is_current),
                    is_current,
                }
            })
            .collect();

        if self.sort_order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Label for the control that flips the list order.
    pub fn sort_toggle_label(&self) -> &'static str {
        match self.sort_order {
            SortOrder::Ascending => "Sort Descending",
            SortOrder::Descending => "Sort Ascending",
        }
    }
}

fn move_label(move_index: usize, location: Option<Location>, is_current: bool) -> String {
    if is_current {
        return format!("You are at move #{}", move_index);
    }
    if move_index == 0 {
        return "Go to game start".to_string();
    }
    match location {
        Some(Location { row, col }) => {
            format!("Go to move #{} (row: {}, col: {})", move_index, row + 1, col + 1)
        }
        // record_move always stores a location past the start record
        None => format!("Go to move #{}", move_index),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};

    fn played(cells: &[usize]) -> Game {
        let mut game = Game::new();
        for &cell in cells {
            assert!(game.play(cell), "cell {} should be playable", cell);
        }
        game
    }

    #[test]
    fn new_game_has_single_start_record() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history()[0], MoveRecord::start());
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.sort_order(), SortOrder::Ascending);
        assert!(game.x_is_next());
    }

    #[test]
    fn turn_alternates_with_pointer() {
        let mut game = Game::new();
        assert!(game.x_is_next());
        game.play(0);
        assert!(!game.x_is_next());
        game.play(1);
        assert!(game.x_is_next());
        game.jump_to(1);
        assert!(!game.x_is_next());
    }

    #[test]
    fn record_move_appends_and_advances() {
        let mut game = played(&[4]);
        let before = game.current_move();
        let next = game.current_squares().with(0, Square::Taken(Player::O));

        game.record_move(next, Location::from_index(0));

        assert_eq!(game.history().len(), before + 2);
        assert_eq!(game.current_move(), game.history().len() - 1);
        assert_eq!(game.current_squares(), &next);
    }

    #[test]
    fn play_on_taken_cell_keeps_history() {
        let mut game = played(&[4]);
        assert!(!game.play(4));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn play_after_jump_truncates_future() {
        let mut game = played(&[0, 1, 2, 3, 4]);
        assert_eq!(game.history().len(), 6);

        assert!(game.jump_to(2));
        assert_eq!(game.history().len(), 6, "jumping never edits history");

        assert!(game.play(8));
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.current_move(), 3);
        assert_eq!(game.history()[3].location, Some(Location { row: 2, col: 2 }));
        // X played at move #3 because the pointer was even
        assert_eq!(game.current_squares().get(8), Some(Square::Taken(Player::X)));
    }

    #[test]
    fn jump_to_start_and_back() {
        let mut game = played(&[0, 4]);
        assert!(game.jump_to(0));
        assert_eq!(game.current_squares(), &Squares::empty());
        assert!(game.jump_to(2));
        assert_eq!(game.current_squares().get(4), Some(Square::Taken(Player::O)));
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut game = played(&[0]);
        assert!(!game.jump_to(2));
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn move_labels_use_one_based_coordinates() {
        let game = played(&[0, 5]);
        let labels: Vec<String> = game.moves().into_iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start".to_string(),
                "Go to move #1 (row: 1, col: 1)".to_string(),
                "You are at move #2".to_string(),
            ]
        );
    }

    #[test]
    fn labels_follow_move_index_not_location() {
        assert_eq!(move_label(0, None, false), "Go to game start");
        assert_eq!(
            move_label(0, Some(Location { row: 0, col: 0 }), false),
            "Go to game start"
        );
        assert_eq!(move_label(3, None, false), "Go to move #3");
        assert_eq!(
            move_label(3, Some(Location { row: 2, col: 0 }), false),
            "Go to move #3 (row: 3, col: 1)"
        );
        assert_eq!(move_label(3, None, true), "You are at move #3");
    }

    #[test]
    fn current_entry_follows_pointer() {
        let mut game = played(&[0, 5]);
        game.jump_to(0);
        let moves = game.moves();
        assert!(moves[0].is_current);
        assert_eq!(moves[0].label, "You are at move #0");
        assert_eq!(moves[2].label, "Go to move #2 (row: 2, col: 3)");
        assert_eq!(moves.iter().filter(|m| m.is_current).count(), 1);
    }

    #[test]
    fn toggle_sort_reverses_display_only() {
        let mut game = played(&[0, 1, 2]);
        let history = game.history().to_vec();
        let ascending = game.moves();

        game.toggle_sort_order();
        let descending = game.moves();

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.current_move(), 3);
        assert_eq!(game.sort_toggle_label(), "Sort Ascending");

        game.toggle_sort_order();
        assert_eq!(game.moves(), ascending);
        assert_eq!(game.sort_toggle_label(), "Sort Descending");
    }

    #[test]
    fn status_follows_current_position() {
        let mut game = played(&[0, 1, 3, 4, 6]);
        assert_eq!(game.status().to_string(), "Winner: X");
        game.jump_to(4);
        assert_eq!(game.status().to_string(), "Next player: X");
    }
}
