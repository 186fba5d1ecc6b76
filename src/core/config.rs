//! Runtime configuration
//!
//! Loaded from JSON. Missing keys fall back to the bundled Sol catalog and the
//! full display theme; CLI flags are layered on top by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::error::{OrreryError, Result, ResultExt};

/// Display decoration for rendered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Emoji headings (default)
    #[default]
    Full,
    /// Plain text only
    Plain,
}

impl Theme {
    /// Parse theme from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full" | "emoji" => Some(Theme::Full),
            "plain" | "text" => Some(Theme::Plain),
            _ => None,
        }
    }
}

/// Configuration file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name given to the root star
    #[serde(default = "default_star_name")]
    pub star_name: String,
    /// Directory holding the catalog files; bundled catalog when absent
    #[serde(default)]
    pub catalog_dir: Option<PathBuf>,
    /// Planet records file name inside `catalog_dir`
    #[serde(default = "default_planets_file")]
    pub planets_file: String,
    /// Moon mapping file name inside `catalog_dir`
    #[serde(default = "default_moons_file")]
    pub moons_file: String,
    #[serde(default)]
    pub theme: Theme,
}

fn default_star_name() -> String {
    "Sol".to_string()
}

fn default_planets_file() -> String {
    "planets.json".to_string()
}

fn default_moons_file() -> String {
    "moons.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            star_name: default_star_name(),
            catalog_dir: None,
            planets_file: default_planets_file(),
            moons_file: default_moons_file(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| OrreryError::invalid_config(e.to_string()))
    }

    /// Load configuration from an explicit file. A missing file is an error.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(OrreryError::invalid_config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| OrreryError::from(e).with_context(path.display().to_string()))?;
        Self::from_json(&content).context(path.display().to_string())
    }

    /// The per-user config file, e.g. `~/.config/orrery/config.json`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("orrery").join("config.json"))
    }

    /// Load from `explicit` if given, else from the user config if it exists,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match Self::user_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn planets_path(&self) -> Option<PathBuf> {
        self.catalog_dir.as_ref().map(|dir| dir.join(&self.planets_file))
    }

    pub fn moons_path(&self) -> Option<PathBuf> {
        self.catalog_dir.as_ref().map(|dir| dir.join(&self.moons_file))
    }
}
