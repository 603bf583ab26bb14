//! Runtime configuration from environment variables and command-line flags.

use std::path::PathBuf;

use dice_core::{GridMetrics, LayoutError};
use thiserror::Error;

pub const BUTTON_WIDTH_VAR: &str = "DUNGEON_DICE_BUTTON_WIDTH";
pub const PADDING_VAR: &str = "DUNGEON_DICE_PADDING";
pub const SPACING_VAR: &str = "DUNGEON_DICE_SPACING";
pub const LOG_DIR_VAR: &str = "DUNGEON_DICE_LOG_DIR";

/// Terminal defaults, in cells.
const DEFAULT_PADDING: f64 = 1.0;
const DEFAULT_BUTTON_WIDTH: f64 = 12.0;
const DEFAULT_SPACING: f64 = 1.0;
const DEFAULT_HEADLESS_WIDTH: f64 = 80.0;

/// Error type for configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: String, value: String },
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
    #[error("Invalid grid metrics: {0}")]
    InvalidMetrics(#[from] LayoutError),
}

/// Which front end to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Tui,
    Headless,
    Help,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub metrics: GridMetrics,
    /// Initial available width for headless mode.
    pub width: f64,
    /// Seed for reproducible rolls.
    pub seed: Option<u64>,
    pub log_dir: PathBuf,
}

impl Config {
    /// Build the configuration from the process environment and arguments.
    pub fn from_env(args: &[String]) -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok(), args)
    }

    /// Build the configuration from an environment lookup and arguments.
    ///
    /// `args` includes the program name, as `std::env::args` does. A help
    /// flag anywhere wins over every other argument and variable.
    pub fn from_lookup<F>(lookup: F, args: &[String]) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if args.iter().skip(1).any(|arg| arg == "-h" || arg == "--help") {
            return Ok(Config {
                mode: Mode::Help,
                metrics: GridMetrics::default(),
                width: DEFAULT_HEADLESS_WIDTH,
                seed: None,
                log_dir: std::env::temp_dir(),
            });
        }

        let padding = number_var(&lookup, PADDING_VAR, DEFAULT_PADDING)?;
        let button_width = number_var(&lookup, BUTTON_WIDTH_VAR, DEFAULT_BUTTON_WIDTH)?;
        let spacing = number_var(&lookup, SPACING_VAR, DEFAULT_SPACING)?;
        let metrics = GridMetrics::new(padding, button_width, spacing)?;

        let log_dir = lookup(LOG_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);

        let mut config = Config {
            mode: Mode::Tui,
            metrics,
            width: DEFAULT_HEADLESS_WIDTH,
            seed: None,
            log_dir,
        };

        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--headless" => config.mode = Mode::Headless,
                "--width" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.width = parse_number(arg, value)?;
                }
                "--seed" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.seed = Some(value.parse().map_err(|_| ConfigError::InvalidNumber {
                        var: arg.clone(),
                        value: value.clone(),
                    })?);
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        Ok(config)
    }
}

fn number_var<F>(lookup: &F, var: &str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => parse_number(var, &value),
        _ => Ok(default),
    }
}

fn parse_number(var: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var: var.to_string(),
            value: value.to_string(),
        })
}
