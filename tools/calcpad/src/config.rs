//! Configuration loading
//!
//! Priority (highest to lowest):
//! 1. Environment variables prefixed `CALCPAD_` (`__` separates sections,
//!    e.g. `CALCPAD_SOLVER__MODEL`)
//! 2. YAML file given with `--config`, or `calcpad.yaml` when present
//! 3. Default values
//!
//! `API_KEY` is read as a last resort when no solver key is configured.

use anyhow::{bail, Context, Result};
use calcpad_solver::SolverConfig;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "calcpad.yaml";
const ENV_PREFIX: &str = "CALCPAD_";
const FALLBACK_API_KEY_VAR: &str = "API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalcpadConfig {
    #[serde(default)]
    pub solver: SolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color: bool,

    /// Show the pending equation above the display
    #[serde(default = "default_true")]
    pub show_equation: bool,

    /// Rows printed by `:history` when no count is given
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

fn default_history_limit() -> usize {
    calcpad_engine::HISTORY_CAPACITY
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_equation: true,
            history_limit: default_history_limit(),
        }
    }
}

/// Load configuration from defaults, file and environment
pub fn load(path: Option<&Path>) -> Result<CalcpadConfig> {
    let mut figment = Figment::from(Serialized::defaults(CalcpadConfig::default()));

    figment = match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            figment.merge(Yaml::file(path))
        },
        // Missing default file is fine
        None => figment.merge(Yaml::file(DEFAULT_CONFIG_FILE)),
    };

    let mut config: CalcpadConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .context("Failed to load configuration")?;

    if config.solver.api_key().is_none() {
        if let Ok(key) = std::env::var(FALLBACK_API_KEY_VAR) {
            config.solver.api_key = Some(key);
        }
    }

    debug!(?config, "configuration loaded");
    Ok(config)
}
