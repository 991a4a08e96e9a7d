//! Win detection.
//!
//! Pure function: (Squares) → Option<WinResult>. No I/O, no state.

use crate::types::{Squares, WinResult};

/// The eight winning lines, in priority order: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Find the first complete line on the board.
///
/// Lines are checked in [`LINES`] order and the first one holding three
/// equal, non-empty squares is returned. A board with several complete
/// lines reports the earliest.
pub fn evaluate(squares: &Squares) -> Option<WinResult> {
    LINES.iter().find_map(|&[a, b, c]| {
        let player = squares.0[a].player()?;
        (squares.0[b] == squares.0[a] && squares.0[c] == squares.0[a]).then_some(WinResult {
            winner: player,
            line: [a, b, c],
        })
    })
}

// ============================================================================
// TESTS
// ============================================================================
