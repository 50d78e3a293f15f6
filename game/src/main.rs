use anyhow::Result;
use clap::Parser;
use tracing::info;

use game::{build_game_app, load_config, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = load_config(args.config.as_deref())?;
    info!(?cfg, "Game config loaded");

    let mut app = build_game_app(args, cfg);
    app.run();
    Ok(())
}
