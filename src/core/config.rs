//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.internship-console/config.toml`. If missing on first
//! run, a commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::resolve_base;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub username: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_LOG_FILE: &str = "internship-console.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Env vars consulted for the base address, first match wins.
pub const API_BASE_ENV_VARS: [&str; 2] = ["CONSOLE_API_BASE", "CONSOLE_API_URL"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Normalized: no trailing slash, may be empty.
    pub api_base: String,
    pub username: Option<String>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.internship-console/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".internship-console").join("config.toml"))
}

/// Load config from `explicit`, or from the default location.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<ConsoleConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ConsoleConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ConsoleConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<ConsoleConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ConsoleConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Internship Console Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:5000"   # Or set CONSOLE_API_BASE / CONSOLE_API_URL

# [general]
# username = "admin"                    # Prefills the login form
# log_file = "internship-console.log"
# log_level = "debug"                   # "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ConsoleConfig, cli_api_base: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_api_base, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable env lookup.
pub fn resolve_with_env<F>(config: &ConsoleConfig, cli_api_base: Option<&str>, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |s: &String| !s.trim().is_empty();

    // API base: CLI → env → config → default
    let api_base = cli_api_base
        .map(str::to_string)
        .filter(non_blank)
        .or_else(|| API_BASE_ENV_VARS.iter().find_map(|key| env(key).filter(non_blank)))
        .or_else(|| config.api.base_url.clone().filter(non_blank))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    let log_level = match config.general.log_level.as_deref() {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using {}", raw, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        api_base: resolve_base(Some(&api_base)),
        username: config.general.username.clone().filter(non_blank),
        log_file: config
            .general
            .log_file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        log_level,
    }
}
