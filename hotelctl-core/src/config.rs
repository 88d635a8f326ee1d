use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HotelError, Result};

/// Environment variable overriding the database path.
pub const DB_ENV_VAR: &str = "HOTELCTL_DB";

/// Configuration loaded from ~/.hotelctl/config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    pub database: DatabaseConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file; `${VAR}` references are expanded from the environment
    pub path: PathBuf,
    /// Load the literal seed rows on `hotelctl init`
    pub seed: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("${HOME}/.hotelctl/hotel.db"),
            seed: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono format string for dates in tables
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl HotelConfig {
    /// Load config from ~/.hotelctl/config.toml, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| HotelError::config(format!("{}: {}", path.display(), e)))
    }

    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get config file path: ~/.hotelctl/config.toml
    pub fn config_path() -> PathBuf {
        Self::home_dir().join(".hotelctl/config.toml")
    }

    fn home_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the database path: explicit flag, then `HOTELCTL_DB`, then
    /// the config file value.
    pub fn resolve_db_path(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        if let Ok(path) = env::var(DB_ENV_VAR) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }
        Self::expand_path(&self.database.path)
    }

    /// Expand ${var} references against the environment.
    ///
    /// `HOME` falls back to the platform home directory; unknown variables
    /// expand to an empty string.
    pub fn expand_path(path: &Path) -> PathBuf {
        PathBuf::from(Self::expand_string(&path.to_string_lossy()))
    }

    fn expand_string(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find('}') {
                Some(end) => {
                    let name = &after[..end];
                    out.push_str(&Self::lookup_var(name));
                    rest = &after[end + 1..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn lookup_var(name: &str) -> String {
        match env::var(name) {
            Ok(value) => value,
            Err(_) if name == "HOME" => Self::home_dir().display().to_string(),
            Err(_) => String::new(),
        }
    }

    /// Render as TOML (for `config show` / `config init`).
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| HotelError::config(e.to_string()))
    }
}
