//! Command implementations

mod handle;
mod owners;
mod preview;

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use sigowners::config::BotConfig;

pub use handle::handle;
pub use owners::owners;
pub use preview::preview;

/// Load the bot config, or the defaults when no file is given
fn load_config(path: Option<&Path>) -> anyhow::Result<BotConfig> {
    match path {
        Some(path) => Ok(BotConfig::load(path)?),
        None => Ok(BotConfig::default()),
    }
}

/// Read a JSON event payload
fn read_event<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read event {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid event {}", path.display()))
}
