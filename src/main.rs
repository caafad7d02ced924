use anyhow::{Context, Result};
use clap::Parser;
use shoe_puzzle::cli::Cli;
use shoe_puzzle::json_runner::run_stdio;
use shoe_puzzle::{PuzzleState, Session};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let starting_state = match cli.layout {
        Some(layout) => {
            let positions: [_; 4] = layout
                .try_into()
                .map_err(|_| anyhow::anyhow!("a layout needs exactly four positions"))?;
            PuzzleState::from_positions(positions).context("invalid starting layout")?
        }
        None => PuzzleState::default(),
    };
    debug!("Starting from {starting_state}");

    let mut session = Session::new(starting_state).with_auto_reset(!cli.no_auto_reset);

    run_stdio(&mut session)
}
