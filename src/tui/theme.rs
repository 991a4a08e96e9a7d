//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer.
//!
//! Color semantics:
//! - Cyan: player X, interactive elements (keybinding hints)
//! - Magenta: player O
//! - Green: the winning line, a win in the status line
//! - Yellow: a draw
//! - Dim: de-emphasized (empty cells, help text)

use ratatui::style::{Color, Modifier, Style};

use crate::types::Player;

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Player X marks.
pub const STYLE_X: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Player O marks.
pub const STYLE_O: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);

/// Winning cells.
pub const STYLE_WINNING: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Green)
    .add_modifier(Modifier::BOLD);

/// Status line after a win.
pub const STYLE_WIN_STATUS: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Status line after a draw.
pub const STYLE_DRAW_STATUS: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Interactive element / keybinding hint.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Cursor cell or row.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Border of the focused pane.
pub const STYLE_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Style for a player's mark.
pub fn player_style(player: Player) -> Style {
    match player {
        Player::X => STYLE_X,
        Player::O => STYLE_O,
    }
}

// ============================================================================
// TESTS
// ============================================================================
