//! TUI state algebra: pure types, zero effects.
//!
//! The game itself lives in [`App::game`]. Focus variants carry only
//! per-pane cursor state; everything else is derived from the game
//! during rendering.

use crate::game::Game;
use crate::types::{CELL_COUNT, SortOrder};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The game being played.
    pub game: Game,

    /// Which pane receives navigation keys.
    pub focus: Focus,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// FOCUS
// ============================================================================

/// The pane that currently owns the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Board grid. `cursor` is a cell index 0–8.
    Board { cursor: usize },

    /// Move list. `cursor` is a row in the displayed (possibly reversed) list.
    History { cursor: usize },
}

/// Default focus: board, centre cell.
impl Default for Focus {
    fn default() -> Self {
        Focus::Board { cursor: CELL_COUNT / 2 }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Activate whatever is under the cursor.
    Select,
    /// Play a cell directly by index (digit keys).
    PlayCell(usize),
    /// Switch between board and move list.
    SwitchFocus,
    ToggleSort,
    Restart,
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Pure code describes WHAT should happen; the effects boundary applies
/// it to the game.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Keep the game as is and move focus (may be unchanged).
    Focus(Focus),
    /// Quit the application.
    Quit,
    /// Change the game.
    Effect(Effect),
}

/// Game change requested by a pure transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Click a board cell.
    Play { index: usize },
    /// Jump to a history entry.
    JumpTo { move_index: usize },
    ToggleSort,
    /// Throw the game away and start over.
    Restart,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// A new game with the board focused.
    pub fn new(sort_order: SortOrder) -> Self {
        App {
            game: Game::with_sort_order(sort_order),
            focus: Focus::default(),
            should_quit: false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_starts_on_centre_cell() {
        let app = App::new(SortOrder::Ascending);
        assert_eq!(app.focus, Focus::Board { cursor: 4 });
        assert_eq!(app.game.history().len(), 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn app_keeps_requested_sort_order() {
        let app = App::new(SortOrder::Descending);
        assert_eq!(app.game.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn transition_variants_are_distinguishable() {
        let t1 = Transition::Focus(Focus::default());
        let t2 = Transition::Quit;
        let t3 = Transition::Effect(Effect::Play { index: 0 });

        assert_ne!(t1, t2);
        assert_ne!(t2, t3);
    }
}
