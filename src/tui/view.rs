//! Pure rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::board::{self, Cell, Status};
use crate::game::Game;

use super::state::{App, Focus};
use super::theme;

/// Width of the board pane, borders included.
const BOARD_PANE_WIDTH: u16 = 24;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(), chunks[0]);
    frame.render_widget(render_help(app.focus), chunks[2]);

    let panes = Layout::horizontal([
        Constraint::Length(BOARD_PANE_WIDTH),
        Constraint::Min(0),
    ])
    .split(chunks[1]);

    let board_cursor = match app.focus {
        Focus::Board { cursor } => Some(cursor),
        Focus::History { .. } => None,
    };
    let history_cursor = match app.focus {
        Focus::History { cursor } => Some(cursor),
        Focus::Board { .. } => None,
    };

    render_board(&app.game, board_cursor, frame, panes[0]);
    render_history(&app.game, history_cursor, frame, panes[1]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![Span::styled(
        "tic-tac-toe",
        theme::STYLE_TITLE,
    )]))
}

/// Help line showing available keybindings for the focused pane.
fn render_help(focus: Focus) -> Paragraph<'static> {
    let help_text = match focus {
        Focus::Board { .. } => {
            "[arrows] move  [Enter] play  [1-9] play cell  [Tab] history  [s] sort  [r] restart  [q] quit"
        }
        Focus::History { .. } => {
            "[j/k] move  [Enter] go to move  [Tab] board  [s] sort  [r] restart  [q] quit"
        }
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn pane_block(title: &'static str, focused: bool) -> Block<'static> {
    let border_style = if focused { theme::STYLE_FOCUSED } else { theme::STYLE_DIM };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

// ============================================================================
// PANE: BOARD
// ============================================================================

fn render_board(game: &Game, cursor: Option<usize>, frame: &mut Frame, area: Rect) {
    let status = game.status();

    let mut lines = vec![
        Line::from(Span::styled(format!(" {}", status), status_style(status))),
        Line::from(""),
    ];

    for (r, row) in board::rows(game.current_squares()).iter().enumerate() {
        if r > 0 {
            lines.push(Line::from(Span::styled(" ───┼───┼───", theme::STYLE_DIM)));
        }
        let mut spans = vec![Span::raw(" ")];
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                spans.push(Span::styled("│", theme::STYLE_DIM));
            }
            spans.push(cell_span(cell, cursor == Some(cell.index)));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(pane_block(" Board ", cursor.is_some()));
    frame.render_widget(paragraph, area);
}

fn cell_span(cell: &Cell, is_cursor: bool) -> Span<'static> {
    let (text, mut style) = match cell.square.player() {
        Some(player) => (format!(" {} ", player), theme::player_style(player)),
        None => (" · ".to_string(), theme::STYLE_DIM),
    };
    if cell.winning {
        style = theme::STYLE_WINNING;
    }
    if is_cursor {
        style = style.patch(theme::STYLE_CURSOR);
    }
    Span::styled(text, style)
}

fn status_style(status: Status) -> Style {
    match status {
        Status::Winner(_) => theme::STYLE_WIN_STATUS,
        Status::Draw => theme::STYLE_DRAW_STATUS,
        Status::NextPlayer(player) => theme::player_style(player),
    }
}

// ============================================================================
// PANE: HISTORY
// ============================================================================

fn render_history(game: &Game, cursor: Option<usize>, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(" [s] ", theme::STYLE_INTERACTIVE),
            Span::raw(game.sort_toggle_label()),
        ]),
        Line::from(""),
    ];
    let header_height = lines.len();

    for (row, entry) in game.moves().iter().enumerate() {
        let style = if entry.is_current {
            theme::STYLE_TITLE
        } else {
            theme::STYLE_INTERACTIVE
        };
        let mut line = Line::from(vec![
            Span::raw(format!(" {:>2}. ", row + 1)),
            Span::styled(entry.label.clone(), style),
        ]);
        if cursor == Some(row) {
            line = line.style(theme::STYLE_CURSOR);
        }
        lines.push(line);
    }

    // Keep the cursor row visible: borders take two rows
    let visible_height = (area.height as usize).saturating_sub(2);
    let cursor_line = header_height + cursor.unwrap_or(0);
    let scroll_offset = if cursor_line >= visible_height {
        cursor_line - visible_height + 1
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .block(pane_block(" History ", cursor.is_some()))
        .scroll((scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================
