//! tic-tac-toe CLI
//!
//! Play interactively in the terminal, or replay a list of clicks and
//! print the resulting game.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use tic_tac_toe::error::{Error, Result};
use tic_tac_toe::game::Game;
use tic_tac_toe::logging;
use tic_tac_toe::report::format_report;
use tic_tac_toe::tui;
use tic_tac_toe::types::{OutputFormat, PlayConfig, SortOrder};

#[derive(Parser)]
#[command(name = "tic-tac-toe")]
#[command(about = "Tic-tac-toe in the terminal, with a move-history navigator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Log file (default: platform cache directory)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Click the given cells in order and print the resulting game
    Replay {
        /// Cell indices 0-8, row by row
        #[arg(value_parser = clap::value_parser!(u8).range(0..9))]
        cells: Vec<u8>,

        /// Jump to this move after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn sort_order(descending: bool) -> SortOrder {
    if descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_play(PlayConfig::default()),
        Some(Commands::Play { descending, log_file }) => {
            let defaults = PlayConfig::default();
            cmd_play(PlayConfig {
                sort_order: sort_order(descending),
                log_file: log_file.unwrap_or(defaults.log_file),
            })
        }
        Some(Commands::Replay { cells, jump, descending, format }) => {
            cmd_replay(&cells, jump, sort_order(descending), format.into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(config: PlayConfig) -> Result<()> {
    logging::init_file(&config.log_file)?;
    info!(log_file = %config.log_file.display(), "logging to file");

    tui::run::run(&config)
}

fn cmd_replay(
    cells: &[u8],
    jump: Option<usize>,
    sort_order: SortOrder,
    format: OutputFormat,
) -> Result<()> {
    logging::init_stderr()?;

    let mut game = Game::with_sort_order(sort_order);

    for (click, &cell) in cells.iter().enumerate() {
        if !game.play(cell as usize) {
            // Illegal clicks are no-ops in the game; surface them here
            debug!(click = click + 1, cell, "click ignored");
            eprintln!("Note: click #{} on cell {} ignored", click + 1, cell);
        }
    }

    if let Some(move_index) = jump {
        if !game.jump_to(move_index) {
            return Err(Error::MoveOutOfRange {
                requested: move_index,
                len: game.history().len(),
            });
        }
    }

    print!("{}", format_report(&game, format)?);

    Ok(())
}
