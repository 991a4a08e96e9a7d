//! State transitions: (Focus, Action) → Transition, and effect application.
//!
//! `update` is pure and fully testable without a terminal. Each pane
//! defines which actions it accepts; unhandled actions return the current
//! focus unchanged (no-op). `apply_effect` is the only place the game is
//! mutated.

use tracing::debug;

use crate::game::Game;
use crate::types::{BOARD_SIZE, CELL_COUNT};

use super::state::{Action, App, Effect, Focus, Transition};

/// Pure state transition function.
///
/// Given the current focus, an action, and a read-only view of the game,
/// produces the next transition.
pub fn update(focus: Focus, action: &Action, game: &Game) -> Transition {
    match action {
        Action::Quit => return Transition::Quit,
        Action::ToggleSort => return Transition::Effect(Effect::ToggleSort),
        Action::Restart => return Transition::Effect(Effect::Restart),
        Action::PlayCell(index) => return Transition::Effect(Effect::Play { index: *index }),
        _ => {}
    }

    match focus {
        Focus::Board { cursor } => update_board(cursor, action, game),
        Focus::History { cursor } => update_history(cursor, action, game),
    }
}

// ============================================================================
// PER-PANE HANDLERS
// ============================================================================

/// Board: arrow movement within the grid, select plays the cursor cell.
fn update_board(cursor: usize, action: &Action, game: &Game) -> Transition {
    let row = cursor / BOARD_SIZE;
    let col = cursor % BOARD_SIZE;

    let next = match action {
        Action::MoveUp if row > 0 => cursor - BOARD_SIZE,
        Action::MoveDown if cursor + BOARD_SIZE < CELL_COUNT => cursor + BOARD_SIZE,
        Action::MoveLeft if col > 0 => cursor - 1,
        Action::MoveRight if col + 1 < BOARD_SIZE => cursor + 1,
        Action::Select => return Transition::Effect(Effect::Play { index: cursor }),
        Action::SwitchFocus => {
            return Transition::Focus(Focus::History {
                cursor: current_row(game),
            });
        }
        _ => cursor,
    };

    Transition::Focus(Focus::Board { cursor: next })
}

/// Move list: vertical movement, select jumps unless the row is current.
fn update_history(cursor: usize, action: &Action, game: &Game) -> Transition {
    let moves = game.moves();
    let len = moves.len();

    match action {
        Action::MoveUp => Transition::Focus(Focus::History {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => {
            let new_cursor = if len == 0 { 0 } else { (cursor + 1).min(len - 1) };
            Transition::Focus(Focus::History { cursor: new_cursor })
        }
        Action::Select => match moves.get(cursor) {
            // The current position is plain text, not a control
            Some(entry) if !entry.is_current => Transition::Effect(Effect::JumpTo {
                move_index: entry.move_index,
            }),
            _ => Transition::Focus(Focus::History { cursor }),
        },
        Action::SwitchFocus => Transition::Focus(Focus::default()),
        _ => Transition::Focus(Focus::History { cursor }),
    }
}

/// Row of the current entry in the displayed move list.
fn current_row(game: &Game) -> usize {
    game.moves()
        .iter()
        .position(|entry| entry.is_current)
        .unwrap_or(0)
}

// ============================================================================
// EFFECTS
// ============================================================================

/// Apply a game change and keep the focus consistent with the new list.
///
/// A history cursor stays on the move it pointed at, wherever that move
/// lands in the new list. If the move was discarded, the cursor is clamped.
pub fn apply_effect(app: &mut App, effect: Effect) {
    let anchor = focused_move(app);
    let pointer_before = app.game.current_move();
    let mut kept = anchor;

    match effect {
        Effect::Play { index } => {
            if app.game.play(index) {
                // Everything after the old pointer was truncated
                kept = anchor.filter(|&move_index| move_index <= pointer_before);
            } else {
                debug!(index, "click was not a move");
            }
        }
        Effect::JumpTo { move_index } => {
            app.game.jump_to(move_index);
        }
        Effect::ToggleSort => {
            app.game.toggle_sort_order();
        }
        Effect::Restart => {
            app.game = Game::with_sort_order(app.game.sort_order());
            app.focus = Focus::default();
        }
    }

    if let Focus::History { cursor } = app.focus {
        let moves = app.game.moves();
        let row = kept
            .and_then(|move_index| moves.iter().position(|entry| entry.move_index == move_index))
            .unwrap_or_else(|| cursor.min(moves.len() - 1));
        app.focus = Focus::History { cursor: row };
    }
}

/// History index of the entry under the history cursor, if focused there.
fn focused_move(app: &App) -> Option<usize> {
    match app.focus {
        Focus::History { cursor } => app.game.moves().get(cursor).map(|entry| entry.move_index),
        Focus::Board { .. } => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
