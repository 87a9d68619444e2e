//! Configuration file loading with precedence handling.

use crate::model::view_mode::UnknownViewMode;
use crate::model::{parse_hex_color, Breakpoints, Theme, ViewMode};
use crate::state::ZoomConfig;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "PATTERNKIT_CONFIG";
/// Environment override for the collection page size.
pub const ENV_PAGE_SIZE: &str = "PATTERNKIT_PAGE_SIZE";
/// Environment override for the collection view mode.
pub const ENV_VIEW_MODE: &str = "PATTERNKIT_VIEW_MODE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range or malformed.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Dotted field name, or the env var that carried it.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, built-in defaults are used.
/// Corresponds to `~/.config/patternkit/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Collection page size. `0` disables pagination.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Initial collection view mode.
    #[serde(default)]
    pub default_view_mode: Option<ViewMode>,

    /// Items per infinite-feed batch.
    #[serde(default)]
    pub feed_batch_size: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Lightbox zoom bounds.
    #[serde(default)]
    pub zoom: Option<ZoomSection>,

    /// Design tokens.
    #[serde(default)]
    pub theme: Option<ThemeSection>,
}

/// `[zoom]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ZoomSection {
    /// Smallest zoom level.
    #[serde(default)]
    pub min: Option<f32>,
    /// Largest zoom level.
    #[serde(default)]
    pub max: Option<f32>,
    /// Zoom increment.
    #[serde(default)]
    pub step: Option<f32>,
    /// Zoom level on open.
    #[serde(default)]
    pub initial: Option<f32>,
}

/// `[theme]` section.
///
/// ```toml
/// [theme]
/// spacing_unit = 8
///
/// [theme.breakpoints]
/// md = 960
///
/// [theme.palette]
/// primary = "#1976d2"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ThemeSection {
    /// Base spacing in pixels.
    #[serde(default)]
    pub spacing_unit: Option<u32>,
    /// Breakpoint minimum widths.
    #[serde(default)]
    pub breakpoints: Option<BreakpointsSection>,
    /// Palette entries, merged over the default palette.
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
}

/// `[theme.breakpoints]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BreakpointsSection {
    /// Extra-small minimum width.
    #[serde(default)]
    pub xs: Option<u32>,
    /// Small minimum width.
    #[serde(default)]
    pub sm: Option<u32>,
    /// Medium minimum width.
    #[serde(default)]
    pub md: Option<u32>,
    /// Large minimum width.
    #[serde(default)]
    pub lg: Option<u32>,
    /// Extra-large minimum width.
    #[serde(default)]
    pub xl: Option<u32>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Collection page size.
    pub page_size: usize,
    /// Initial collection view mode.
    pub default_view_mode: ViewMode,
    /// Items per feed batch.
    pub feed_batch_size: usize,
    /// Lightbox zoom bounds.
    pub zoom: ZoomConfig,
    /// Design tokens.
    pub theme: Theme,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: 8,
            default_view_mode: ViewMode::Grid,
            feed_batch_size: 6,
            zoom: ZoomConfig::default(),
            theme: Theme::default(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Reject values the state machines cannot work with.
    ///
    /// Zoom `initial` is clamped into bounds rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        self.zoom = self
            .zoom
            .validated()
            .map_err(|e| ConfigError::InvalidValue {
                field: "zoom".to_string(),
                reason: e.to_string(),
            })?;

        if self.feed_batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "feed_batch_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if !self.theme.breakpoints.is_ascending() {
            return Err(ConfigError::InvalidValue {
                field: "theme.breakpoints".to_string(),
                reason: "widths must be non-decreasing from xs to xl".to_string(),
            });
        }

        if let Some((name, value)) = self
            .theme
            .palette
            .iter()
            .find(|(_, value)| parse_hex_color(value).is_none())
        {
            return Err(ConfigError::InvalidValue {
                field: format!("theme.palette.{name}"),
                reason: format!("'{value}' is not a #rrggbb or #rgb color"),
            });
        }

        Ok(self)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/patternkit/patternkit.log` on Unix-like systems,
/// or the platform state directory elsewhere. Falls back to the current
/// directory when no state directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("patternkit").join("patternkit.log")
    } else {
        PathBuf::from("patternkit.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/patternkit/config.toml` on Unix, the platform config
/// directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("patternkit").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PATTERNKIT_CONFIG` environment variable
/// 3. Default path `~/.config/patternkit/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{ENV_CONFIG} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `PATTERNKIT_PAGE_SIZE` and `PATTERNKIT_VIEW_MODE`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` when a variable is set but does not
/// parse.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(ENV_PAGE_SIZE) {
        config.page_size = raw
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                field: ENV_PAGE_SIZE.to_string(),
                reason: e.to_string(),
            })?;
    }

    if let Ok(raw) = std::env::var(ENV_VIEW_MODE) {
        config.default_view_mode =
            raw.parse()
                .map_err(|e: UnknownViewMode| ConfigError::InvalidValue {
                    field: ENV_VIEW_MODE.to_string(),
                    reason: e.to_string(),
                })?;
    }

    Ok(config)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default. Palette entries are merged key by key.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let zoom = match config.zoom {
        Some(section) => ZoomConfig {
            min: section.min.unwrap_or(defaults.zoom.min),
            max: section.max.unwrap_or(defaults.zoom.max),
            step: section.step.unwrap_or(defaults.zoom.step),
            initial: section.initial.unwrap_or(defaults.zoom.initial),
        },
        None => defaults.zoom,
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        default_view_mode: config
            .default_view_mode
            .unwrap_or(defaults.default_view_mode),
        feed_batch_size: config.feed_batch_size.unwrap_or(defaults.feed_batch_size),
        zoom,
        theme: merge_theme(defaults.theme, config.theme),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

fn merge_theme(defaults: Theme, section: Option<ThemeSection>) -> Theme {
    let Some(section) = section else {
        return defaults;
    };

    let base = defaults.breakpoints;
    let breakpoints = match section.breakpoints {
        Some(bp) => Breakpoints {
            xs: bp.xs.unwrap_or(base.xs),
            sm: bp.sm.unwrap_or(base.sm),
            md: bp.md.unwrap_or(base.md),
            lg: bp.lg.unwrap_or(base.lg),
            xl: bp.xl.unwrap_or(base.xl),
        },
        None => base,
    };

    let mut palette = defaults.palette;
    palette.extend(section.palette);

    Theme {
        spacing_unit: section.spacing_unit.unwrap_or(defaults.spacing_unit),
        breakpoints,
        palette,
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only flags the user actually passed are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<usize>,
    view_mode_override: Option<ViewMode>,
) -> ResolvedConfig {
    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    if let Some(view_mode) = view_mode_override {
        config.default_view_mode = view_mode;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
