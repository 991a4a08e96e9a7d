//! Board logic: click handling, status text and the cell grid.
//!
//! Pure functions over a borrowed board. The owner decides what to do
//! with a produced move; nothing here touches history.

use std::fmt;

use serde::Serialize;

use crate::types::{BOARD_SIZE, Location, Player, Square, Squares};
use crate::winner::evaluate;

/// Decide whether clicking `index` is a move.
///
/// Returns the next board and the move's location, or None when the game
/// is already won, the cell is taken, or the index is off the board.
pub fn handle_click(squares: &Squares, x_is_next: bool, index: usize) -> Option<(Squares, Location)> {
    if evaluate(squares).is_some() {
        return None;
    }
    if !squares.get(index)?.is_empty() {
        return None;
    }

    let next = squares.with(index, Square::Taken(Player::from_turn(x_is_next)));
    Some((next, Location::from_index(index)))
}

// ============================================================================
// STATUS
// ============================================================================

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "player", rename_all = "snake_case")]
pub enum Status {
    Winner(Player),
    Draw,
    NextPlayer(Player),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {}", player),
            Status::Draw => f.write_str("Draw: No winner!"),
            Status::NextPlayer(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// Derive the status for a board: a win beats a full board beats next turn.
pub fn status(squares: &Squares, x_is_next: bool) -> Status {
    if let Some(result) = evaluate(squares) {
        Status::Winner(result.winner)
    } else if squares.is_full() {
        Status::Draw
    } else {
        Status::NextPlayer(Player::from_turn(x_is_next))
    }
}

// ============================================================================
// GRID
// ============================================================================

/// A single rendered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    pub square: Square,
    /// Part of the winning line.
    pub winning: bool,
}

/// Lay the board out as rows of cells, top to bottom, left to right.
pub fn rows(squares: &Squares) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
    let win = evaluate(squares);
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let index = row * BOARD_SIZE + col;
            Cell {
                index,
                square: squares.0[index],
                winning: win.is_some_and(|w| w.contains(index)),
            }
        })
    })
}

// ============================================================================
// TESTS
// ============================================================================
