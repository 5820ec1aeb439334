//! Headless autoplay runner (default binary).
//!
//! Deals a board and lets the memory bot clear it. Set `RUST_LOG=debug` to see
//! every turn.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use memory_match::autoplay::{parse_autoplay_args, play_to_completion};
use memory_match::core::BoardController;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_autoplay_args(&args)?;

    let (mut board, seed) = match config.seed {
        Some(seed) => (BoardController::with_seed(config.board, seed), seed),
        None => BoardController::from_entropy(config.board),
    };
    info!(seed, rows = board.rows(), cols = board.cols(), "starting autoplay");

    play_to_completion(&mut board)?;
    Ok(())
}
