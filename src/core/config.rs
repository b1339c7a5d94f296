//! # Configuration
//!
//! Settings with a clear override hierarchy: defaults → config file → CLI flags.
//!
//! The config file is optional and read-only. It is taken from `--config` when
//! given, else from `~/.termform/config.toml` if that file exists.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TermformConfig {
    #[serde(default)]
    pub checklist: ChecklistConfig,
    #[serde(default)]
    pub notice: NoticeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChecklistConfig {
    pub debounce_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NoticeConfig {
    pub row: Option<u16>,
    pub col: Option<u16>,
    pub error_header: Option<String>,
    pub success_message: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_NOTICE_ROW: u16 = 11;
pub const DEFAULT_NOTICE_COL: u16 = 10;
pub const DEFAULT_ERROR_HEADER: &str = "Validation Errors:";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where and how the window reports validation results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeSettings {
    pub row: u16,
    pub col: u16,
    pub error_header: String,
    pub success_message: String,
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self {
            row: DEFAULT_NOTICE_ROW,
            col: DEFAULT_NOTICE_COL,
            error_header: DEFAULT_ERROR_HEADER.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub debounce: Duration,
    pub notice: NoticeSettings,
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

/// Returns the path to `~/.termform/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".termform").join("config.toml"))
}

/// Load config from `explicit`, or from the default path if it exists.
///
/// A missing default file yields `TermformConfig::default()`. An explicit
/// path that cannot be read is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<TermformConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            Some(_) => {
                debug!("No config file found, using defaults");
                return Ok(TermformConfig::default());
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(TermformConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<TermformConfig, ConfigError> {
    let config: TermformConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config: defaults → config file → CLI.
///
/// `cli_log_level` is from the `--log-level` flag (None = not specified).
pub fn resolve(config: &TermformConfig, cli_log_level: Option<LevelFilter>) -> ResolvedConfig {
    let defaults = NoticeSettings::default();
    let notice = NoticeSettings {
        row: config.notice.row.unwrap_or(defaults.row),
        col: config.notice.col.unwrap_or(defaults.col),
        error_header: config
            .notice
            .error_header
            .clone()
            .unwrap_or(defaults.error_header),
        success_message: config
            .notice
            .success_message
            .clone()
            .unwrap_or(defaults.success_message),
    };

    // Log level: CLI → config → default
    let log_level = cli_log_level
        .or_else(|| config.log.level.as_deref().and_then(parse_level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        debounce: Duration::from_millis(
            config.checklist.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
        ),
        notice,
        log_level,
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{raw}' in config, ignoring");
            None
        }
    }
}
