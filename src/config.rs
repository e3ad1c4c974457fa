use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::query::StatusFilter;

pub const CONFIG_DIR: &str = ".cybertasks";
const CONFIG_FILE: &str = "config.json";

/// User settings. Task data is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seed_demo_tasks: bool,
    pub tick_rate_ms: u64,
    pub default_filter: StatusFilter,
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_demo_tasks: true,
            tick_rate_ms: 250,
            default_filter: StatusFilter::All,
            log_file: None,
        }
    }
}

/// `.cybertasks/` under `root`
pub fn config_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    config_dir(root).join(CONFIG_FILE)
}

/// Load the config under `root`, falling back to defaults when no file exists
pub fn load_config(root: &Path) -> Result<Config> {
    let path = config_path(root);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)?;
    let config = serde_json::from_str(&content).map_err(|source| Error::Config { path: path.clone(), source })?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn save_config(root: &Path, config: &Config) -> Result<()> {
    fs::create_dir_all(config_dir(root))?;
    let content = serde_json::to_string_pretty(config).map_err(Error::ConfigWrite)?;
    fs::write(config_path(root), content)?;
    Ok(())
}

/// Create `.cybertasks/` with a default config. Fails if it already exists.
pub fn init_project(root: &Path) -> Result<PathBuf> {
    let dir = config_dir(root);
    if dir.exists() {
        return Err(Error::AlreadyInitialized(dir));
    }
    save_config(root, &Config::default())?;
    Ok(config_path(root))
}
