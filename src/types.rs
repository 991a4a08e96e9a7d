//! Domain types for tic-tac-toe.
//!
//! Board values are small `Copy` types: a move never mutates a stored
//! board, it produces a new one.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Width (and height) of the board.
pub const BOARD_SIZE: usize = 3;

// ============================================================================
// PRIMITIVES
// ============================================================================

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player whose turn it is, given the turn flag.
    pub fn from_turn(x_is_next: bool) -> Self {
        if x_is_next { Player::X } else { Player::O }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    #[default]
    Empty,
    Taken(Player),
}

impl Square {
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Taken(player) => Some(player),
        }
    }
}

/// Serialized as `null`, `"X"` or `"O"`.
impl Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.player().serialize(serializer)
    }
}

// ============================================================================
// BOARD STATE
// ============================================================================

/// The nine cells of a board, indexed `row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Squares(pub [Square; CELL_COUNT]);

impl Squares {
    /// An all-empty board.
    pub fn empty() -> Self {
        Squares::default()
    }

    /// Returns the square at `index`, or None outside 0..9.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.0.get(index).copied()
    }

    /// Returns a copy of this board with `index` set to `square`.
    ///
    /// Out-of-range indices leave the copy unchanged.
    pub fn with(&self, index: usize, square: Square) -> Self {
        let mut next = *self;
        if let Some(cell) = next.0.get_mut(index) {
            *cell = square;
        }
        next
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|square| !square.is_empty())
    }
}

/// Zero-based board coordinates of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

impl Location {
    /// Derive coordinates from a cell index.
    pub fn from_index(index: usize) -> Self {
        Location {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

/// A board state plus the move that produced it.
///
/// The start record has no location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub squares: Squares,
    pub location: Option<Location>,
}

impl MoveRecord {
    /// The empty starting board.
    pub fn start() -> Self {
        MoveRecord {
            squares: Squares::empty(),
            location: None,
        }
    }
}

/// A completed line: who won and which three cells did it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinResult {
    pub winner: Player,
    pub line: [usize; 3],
}

impl WinResult {
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

// ============================================================================
// DISPLAY ORDER
// ============================================================================

/// Order in which the move list is displayed. Never affects the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable board and move list.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Initial move-list order.
    pub sort_order: SortOrder,
    /// Where tracing output goes while the terminal is in raw mode.
    pub log_file: PathBuf,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::Ascending,
            log_file: default_log_file(),
        }
    }
}

/// Default log location: the platform cache dir, or the working directory.
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tic-tac-toe")
        .join("tic-tac-toe.log")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_round_trips_through_index() {
        for index in 0..CELL_COUNT {
            assert_eq!(Location::from_index(index).index(), index);
        }
        assert_eq!(Location::from_index(5), Location { row: 1, col: 2 });
    }

    #[test]
    fn with_does_not_mutate_original() {
        let board = Squares::empty();
        let next = board.with(4, Square::Taken(Player::X));
        assert_eq!(board.get(4), Some(Square::Empty));
        assert_eq!(next.get(4), Some(Square::Taken(Player::X)));
    }

    #[test]
    fn with_out_of_range_is_unchanged() {
        let board = Squares::empty();
        assert_eq!(board.with(9, Square::Taken(Player::O)), board);
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn square_serializes_as_null_or_player() {
        let json = serde_json::to_string(&[
            Square::Empty,
            Square::Taken(Player::X),
            Square::Taken(Player::O),
        ])
        .unwrap();
        assert_eq!(json, r#"[null,"X","O"]"#);
    }

    #[test]
    fn sort_order_toggles() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::default().toggled().toggled(), SortOrder::Ascending);
    }

    #[test]
    fn default_log_file_is_named() {
        assert!(default_log_file().ends_with("tic-tac-toe/tic-tac-toe.log"));
    }
}
