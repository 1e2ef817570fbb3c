//! Runtime configuration, read from a JSON file.

use crate::constants::{BIRD_SPRITE_HEIGHT, BIRD_SPRITE_WIDTH, FRAME_INTERVAL_MS};
use crate::game::SpriteSize;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The config file is not valid JSON for [`GameConfig`].
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Time between frames. Every frame advances the simulation one tick.
    pub frame_interval_ms: u64,
    pub bird_width: f64,
    pub bird_height: f64,
    /// Fixed seed for the pipe generator (None = random).
    pub seed: Option<u64>,
    /// Where to write the log (None = platform data dir).
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: FRAME_INTERVAL_MS,
            bird_width: BIRD_SPRITE_WIDTH,
            bird_height: BIRD_SPRITE_HEIGHT,
            seed: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Load from an explicit path, or from the default location.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "frame_interval_ms must be at least 1".to_string(),
            ));
        }
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !(positive(self.bird_width) && positive(self.bird_height)) {
            return Err(ConfigError::Invalid(format!(
                "bird size must be positive, got {}x{}",
                self.bird_width, self.bird_height
            )));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn bird_size(&self) -> SpriteSize {
        SpriteSize {
            width: self.bird_width,
            height: self.bird_height,
        }
    }
}

pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "flappy")
}

/// `<config dir>/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}
