//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module that touches the terminal. It wires the pure
//! layers (state, update, view) to crossterm and ratatui. Single-threaded:
//! the loop blocks on one key, applies it, and redraws.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::PlayConfig;

use super::state::{Action, App, Transition};
use super::update::{apply_effect, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),

        // Digits 1-9 play cells 0-8, row by row
        KeyCode::Char(c @ '1'..='9') => Some(Action::PlayCell((c as u8 - b'1') as usize)),

        // Game
        KeyCode::Char('s') => Some(Action::ToggleSort),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run an interactive game until the user quits.
pub fn run(config: &PlayConfig) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal().map_err(|e| Error::io("set up terminal", e))?;
    let mut app = App::new(config.sort_order);
    info!(sort_order = ?config.sort_order, "game started");

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal().map_err(|e| Error::io("restore terminal", e))?;
    info!(moves = app.game.history().len() - 1, "game closed");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|frame| render(app, frame))
            .map_err(|e| Error::io("draw frame", e))?;

        if app.should_quit {
            return Ok(());
        }

        // Block on the next terminal event; only key presses matter
        let key = match event::read().map_err(|e| Error::io("read terminal event", e))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        let Some(action) = map_key(key) else {
            continue;
        };
        debug!(?action, "key");

        match update(app.focus, &action, &app.game) {
            Transition::Focus(focus) => app.focus = focus,
            Transition::Quit => app.should_quit = true,
            Transition::Effect(effect) => apply_effect(app, effect),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
