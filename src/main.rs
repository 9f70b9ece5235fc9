use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use zuul::Game;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the game transcript.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut game = Game::campus().context("failed to build the campus world")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    game.play(stdin.lock(), &mut stdout)
        .context("terminal I/O failed")?;

    Ok(())
}
