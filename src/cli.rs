//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::calculator::{AngleMode, NumberFormat};
use crate::config::Config;

/// Keypad-driven scientific calculator.
///
/// Pass key labels as arguments to evaluate them once, or run without keys
/// to type them line by line.
#[derive(Parser, Debug, Clone)]
#[command(name = "calcpro")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <config dir>/calcpro/config.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Start in scientific mode.
    #[arg(long)]
    pub scientific: bool,

    /// Angle mode for trigonometric functions (DEG, RAD, GRAD).
    #[arg(long)]
    pub angle: Option<AngleMode>,

    /// Number base (DEC, HEX, BIN, OCT).
    #[arg(long)]
    pub format: Option<NumberFormat>,

    /// Disable thousands separators.
    #[arg(long)]
    pub no_grouping: bool,

    /// Print the full state as JSON instead of the display.
    #[arg(long)]
    pub json: bool,

    /// Key labels to apply in order, e.g. `5 + 3 =`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Overlay command-line flags on the loaded config.
    pub fn apply_to(&self, mut config: Config) -> Config {
        if self.scientific {
            config.scientific_mode = true;
        }
        if let Some(angle) = self.angle {
            config.angle_mode = angle;
        }
        if let Some(format) = self.format {
            config.number_format = format;
        }
        if self.no_grouping {
            config.group_digits = false;
        }
        config
    }
}
