use std::path::PathBuf;

use bevy::prelude::Resource;
use clap::Parser;

#[derive(Parser, Debug, Resource, Clone, Default)]
#[command(name = "stealth-game")]
#[command(about = "3D stealth prototype", long_about = None)]
pub struct Args {
    /// TOML file with movement/HUD/ending/level tuning
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Run without window/rendering
    #[arg(long, default_value_t = false)]
    pub headless: bool,
}
