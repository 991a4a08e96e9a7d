//! TUI module for the interactive terminal game.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Focus, Action, Transition)
//! - `update`: Pure transitions plus effect application on the game
//! - `view`: Pure rendering
//! - `run`: Terminal effects and the event loop

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
