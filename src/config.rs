//! User configuration.
//!
//! Read from `<config dir>/calcpro/config.toml`. Every key is optional and the
//! file only seeds the initial calculator settings; nothing is written back.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::calculator::{AngleMode, CalculatorState, NumberFormat};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scientific_mode: bool,
    pub angle_mode: AngleMode,
    pub number_format: NumberFormat,
    /// Thousands separators in the decimal display.
    pub group_digits: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scientific_mode: false,
            angle_mode: AngleMode::default(),
            number_format: NumberFormat::default(),
            group_digits: true,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcpro").join("config.toml"))
    }

    /// Load the config from `path`, or from [`Config::default_path`].
    ///
    /// A missing file yields the defaults. So does an unreadable or malformed
    /// one, after logging a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => return Self::default(),
        };
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring config at {:?}: {:#}", path, err);
                Self::default()
            }
        }
    }

    /// Read and parse a config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// The state a new session starts from.
    pub fn initial_state(&self) -> CalculatorState {
        CalculatorState::new()
            .with_scientific_mode(self.scientific_mode)
            .with_angle_mode(self.angle_mode)
            .with_number_format(self.number_format)
    }
}
