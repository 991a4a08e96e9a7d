//! tic-tac-toe: a terminal game with a move-history navigator.

pub mod board;
pub mod error;
pub mod game;
pub mod logging;
pub mod report;
pub mod tui;
pub mod types;
pub mod winner;
