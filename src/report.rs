//! Report formatting for a game.
//!
//! Pure functions: (Game, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::board::{self, Status};
use crate::error::Result;
use crate::game::{Game, MoveEntry};
use crate::types::{OutputFormat, SortOrder, Square, Squares, WinResult};

/// Serializable snapshot of a game at its current position.
#[derive(Debug, Serialize)]
pub struct GameReport {
    pub squares: Squares,
    pub status: Status,
    pub status_text: String,
    pub winner: Option<WinResult>,
    pub current_move: usize,
    pub history_len: usize,
    pub sort_order: SortOrder,
    pub moves: Vec<MoveEntry>,
}

impl GameReport {
    pub fn from_game(game: &Game) -> Self {
        let status = game.status();
        GameReport {
            squares: *game.current_squares(),
            status,
            status_text: status.to_string(),
            winner: game.winner(),
            current_move: game.current_move(),
            history_len: game.history().len(),
            sort_order: game.sort_order(),
            moves: game.moves(),
        }
    }
}

/// Format a game for output.
pub fn format_report(game: &Game, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(game)),
        OutputFormat::Json => format_json(game),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(game: &Game) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", game.status()));

    for (r, row) in board::rows(game.current_squares()).iter().enumerate() {
        if r > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| {
                let mark = square_char(cell.square);
                if cell.winning {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
    }

    out.push_str(&format!("\n=== Moves ({}) ===\n", game.sort_toggle_label()));
    for entry in game.moves() {
        let marker = if entry.is_current { ">" } else { " " };
        out.push_str(&format!("{} {}. {}\n", marker, entry.move_index, entry.label));
    }

    out
}

fn square_char(square: Square) -> char {
    match square.player() {
        Some(player) => player.as_str().chars().next().unwrap_or(' '),
        None => ' ',
    }
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(game: &Game) -> Result<String> {
    Ok(serde_json::to_string_pretty(&GameReport::from_game(game))?)
}

// ============================================================================
// TESTS
// ============================================================================
