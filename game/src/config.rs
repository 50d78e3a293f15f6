use std::path::Path;

use anyhow::{Context, Result};
use bevy::prelude::Resource;
use gameplay::GameConfig;

/// Validated configuration for the whole run.
#[derive(Resource, Debug, Clone, Default)]
pub struct Settings(pub GameConfig);

pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let cfg = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            parse_config(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    cfg.validate().context("validating config")?;
    Ok(cfg)
}

pub fn parse_config(text: &str) -> Result<GameConfig> {
    Ok(toml::from_str(text)?)
}
