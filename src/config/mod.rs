//! Configuration module.
//!
//! A TOML file, environment variables and CLI flags resolve into one
//! [`ResolvedConfig`]. Key bindings are fixed defaults.

pub mod keybindings;
pub mod loader;

pub use keybindings::{overlay_action_for_key, KeyBindings};
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};
