//! Application configuration
//!
//! Loaded from an explicit path, `.tasklist.yml`, or
//! `~/.config/tasklist/tasklist.yml`, falling back to defaults.

use crate::filter::FilterState;
use crate::seed::{SeedTask, load_seed};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const PROJECT_CONFIG: &str = ".tasklist.yml";

/// Startup settings for a task list session
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Filter shown when the session starts.
    #[serde(rename = "initial-filter")]
    pub initial_filter: FilterState,

    /// Tasks seeded inline.
    #[serde(rename = "initial-tasks")]
    pub initial_tasks: Vec<SeedTask>,

    /// Seed file appended after the inline tasks.
    #[serde(rename = "seed-file")]
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .tasklist.yml in current directory
    /// 3. ~/.config/tasklist/tasklist.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_config = PathBuf::from(PROJECT_CONFIG);
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    info!("Loaded config from {}", PROJECT_CONFIG);
                    return Ok(config);
                }
                Err(e) => warn!("Failed to load {}: {:#}", PROJECT_CONFIG, e),
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tasklist").join("tasklist.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => warn!("Failed to load {}: {:#}", user_config.display(), e),
                }
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Full initial task list: inline tasks followed by the seed file's
    pub fn seed_tasks(&self) -> Result<Vec<SeedTask>> {
        let mut seed = self.initial_tasks.clone();
        if let Some(path) = &self.seed_file {
            let from_file = load_seed(path).context(format!("Failed to load seed file {}", path.display()))?;
            seed.extend(from_file);
        }
        Ok(seed)
    }
}
