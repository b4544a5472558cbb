//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.wordfinder/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WordfinderConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub word_list: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NotifyConfig {
    pub webhook_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_LOG_FILE: &str = "wordfinder.log";

pub const ENV_WORD_LIST: &str = "WORDFINDER_WORD_LIST";
pub const ENV_WEBHOOK_URL: &str = "WORDFINDER_WEBHOOK_URL";

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// None when no layer named a word list; the caller treats that as fatal.
    pub word_list: Option<PathBuf>,
    /// None (or blank) disables notifications.
    pub webhook_url: Option<String>,
    pub notify_timeout: Duration,
    pub log_file: PathBuf,
}

/// Values supplied on the command line (None = flag not given).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub word_list: Option<PathBuf>,
    pub webhook_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

/// Values read from the environment (None = variable unset).
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub word_list: Option<PathBuf>,
    pub webhook_url: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            word_list: std::env::var_os(ENV_WORD_LIST).map(PathBuf::from),
            webhook_url: std::env::var(ENV_WEBHOOK_URL).ok(),
        }
    }
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

/// Returns the path to `~/.wordfinder/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".wordfinder").join("config.toml"))
}

/// Load config from `~/.wordfinder/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WordfinderConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WordfinderConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WordfinderConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] but for an explicit path.
pub fn load_config_from(path: &Path) -> Result<WordfinderConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(WordfinderConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WordfinderConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Wordfinder Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# word_list = "/home/me/words.txt"   # Or pass the path as the first argument
# log_file = "wordfinder.log"

# [notify]
# webhook_url = "https://example.com/hook"   # Or set WORDFINDER_WEBHOOK_URL
# timeout_secs = 5
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WordfinderConfig, env: EnvOverrides, cli: CliOverrides) -> ResolvedConfig {
    // Word list: CLI → env → config
    let word_list = cli
        .word_list
        .or(env.word_list)
        .or_else(|| config.general.word_list.clone());

    // Webhook: CLI → env → config; blank means "off" at whichever layer set it
    let webhook_url = cli
        .webhook_url
        .or(env.webhook_url)
        .or_else(|| config.notify.webhook_url.clone())
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty());

    let log_file = cli
        .log_file
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        word_list,
        webhook_url,
        notify_timeout: Duration::from_secs(
            config
                .notify
                .timeout_secs
                .unwrap_or(DEFAULT_NOTIFY_TIMEOUT_SECS),
        ),
        log_file,
    }
}
