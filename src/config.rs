use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use log::LevelFilter;

use crate::error::ConfigError;

/// Dashboard configuration, loadable from TOML
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root URL of the grid-world service
    pub base_url: String,
    /// Grid size preselected on startup
    pub grid_size: usize,
    pub min_grid_size: usize,
    pub max_grid_size: usize,
    /// Episode count preselected on startup
    pub episodes: u32,
    pub episode_presets: Vec<u32>,
    /// Delay between frames of a path replay
    pub frame_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: String::from("http://127.0.0.1:5000"),
            grid_size: 5,
            min_grid_size: 3,
            max_grid_size: 10,
            episodes: 100,
            episode_presets: vec![10, 50, 100, 200, 500, 1000],
            frame_interval_ms: 200,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.min_grid_size == 0 {
            return Err(ConfigError::Validation(
                "min_grid_size must be > 0".into(),
            ));
        }
        if self.min_grid_size > self.max_grid_size {
            return Err(ConfigError::Validation(
                "min_grid_size must not exceed max_grid_size".into(),
            ));
        }
        if !(self.min_grid_size..=self.max_grid_size).contains(&self.grid_size) {
            return Err(ConfigError::Validation(format!(
                "grid_size must be in [{}, {}]",
                self.min_grid_size, self.max_grid_size
            )));
        }
        if self.episode_presets.is_empty() || self.episode_presets.contains(&0) {
            return Err(ConfigError::Validation(
                "episode_presets must be non-empty and positive".into(),
            ));
        }
        if !self.episode_presets.contains(&self.episodes) {
            return Err(ConfigError::Validation(format!(
                "episodes ({}) must be one of episode_presets",
                self.episodes
            )));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "frame_interval_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Command line of the `gridworld-viz` binary
#[derive(Parser, Debug)]
#[command(
    name = "gridworld-viz",
    version,
    about = "Terminal dashboard for a grid-world Q-learning service"
)]
pub struct Cli {
    /// Base URL of the grid-world service.
    #[arg(long, env = "GRIDWORLD_URL")]
    pub base_url: Option<String>,

    /// TOML file with dashboard settings; flags override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid size preselected on startup.
    #[arg(long)]
    pub grid_size: Option<usize>,

    /// Episode count preselected on startup.
    #[arg(long)]
    pub episodes: Option<u32>,

    /// Milliseconds between frames of an evaluation replay.
    #[arg(long)]
    pub frame_ms: Option<u64>,

    /// Most verbose level captured in the log tab.
    #[arg(long, default_value = "debug")]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Layer flags over the config file (or defaults) and validate the result
    pub fn resolve(&self) -> Result<ClientConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(episodes) = self.episodes {
            config.episodes = episodes;
            if !config.episode_presets.contains(&episodes) {
                config.episode_presets.push(episodes);
                config.episode_presets.sort_unstable();
            }
        }
        if let Some(frame_ms) = self.frame_ms {
            config.frame_interval_ms = frame_ms;
        }

        config.validate()?;
        Ok(config)
    }
}
