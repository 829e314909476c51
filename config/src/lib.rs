//! Load Scout settings from the process environment, a project `.env`, and
//! `~/.config/scout/config.toml`, with priority **process env > .env > XDG**.
//!
//! Nothing is written back to the process environment: the merged values are parsed into
//! a [`Settings`] value that callers pass explicitly to whatever needs credentials.

mod dotenv;
mod settings;
mod xdg_toml;

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

pub use settings::{
    Settings, DEFAULT_MAX_ITERATIONS, DEFAULT_MODEL, DEFAULT_SERVE_ADDR,
    DEFAULT_TOOL_TIMEOUT_SECS, KNOWN_KEYS,
};

/// Application name used for the XDG path `~/.config/<app>/config.toml`.
pub const APP_NAME: &str = "scout";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Where to look for configuration.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Directory holding `.env`; `None` means the current directory.
    pub dotenv_dir: Option<PathBuf>,
    /// Explicit TOML file; `None` means `<config_dir>/scout/config.toml`.
    pub config_file: Option<PathBuf>,
    /// Whether process environment variables take part (and win).
    pub process_env: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            dotenv_dir: None,
            config_file: None,
            process_env: true,
        }
    }
}

/// Loads and parses settings.
///
/// Missing files are not errors; unreadable or malformed ones are.
pub fn load_settings(options: &LoadOptions) -> Result<Settings, LoadError> {
    let xdg = match &options.config_file {
        Some(path) => xdg_toml::load_env_file(path)?,
        None => xdg_toml::load_env_map(APP_NAME)?,
    };
    let dotenv =
        dotenv::load_env_map(options.dotenv_dir.as_deref()).map_err(LoadError::DotenvRead)?;

    let merged = if options.process_env {
        merge(|key| std::env::var(key).ok(), &dotenv, &xdg)
    } else {
        merge(|_| None, &dotenv, &xdg)
    };
    Settings::from_vars(&merged)
}

/// Resolves every known key as process > .env > XDG.
fn merge(
    process: impl Fn(&str) -> Option<String>,
    dotenv: &HashMap<String, String>,
    xdg: &HashMap<String, String>,
) -> HashMap<String, String> {
    KNOWN_KEYS
        .iter()
        .filter_map(|&key| {
            process(key)
                .or_else(|| dotenv.get(key).cloned())
                .or_else(|| xdg.get(key).cloned())
                .map(|value| (key.to_string(), value))
        })
        .collect()
}
