//! # Mapper Configuration for rowmap
//!
//! This crate holds the settings shared by both mapping directions: how field names
//! are matched against column labels, whether booleans are quoted in generated SQL,
//! and which patterns format date and date-time values.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use mapper_config::MapperConfig;
//!
//! let mut config = MapperConfig::default()
//!     .with_case_sensitive(false)
//!     .with_wrap_booleans_in_quotes(true);
//! config.set_date_format("dd.MM.yyyy")?;
//! # Ok::<(), mapper_config::ConfigError>(())
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! case_sensitive = false
//! wrap_booleans_in_quotes = false
//! date_format = "yyyy-MM-dd"
//! date_time_format = "yyyy-MM-dd HH:mm:ss"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use mapper_config::MapperConfig;
//!
//! // ROWMAP_CONFIG, then ./rowmap.toml, then defaults
//! let config = MapperConfig::load()?;
//!
//! // Or load from custom path
//! let config = MapperConfig::from_file("config/mapper.toml")?;
//! # Ok::<(), mapper_config::ConfigError>(())
//! ```

mod pattern;

pub use pattern::DatePattern;

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./rowmap.toml";
const CONFIG_PATH_VAR: &str = "ROWMAP_CONFIG";

/// Default pattern for date-only values
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd";
/// Default pattern for date-time values
pub const DEFAULT_DATE_TIME_FORMAT: &str = "yyyy-MM-dd HH:mm:ss";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid date pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("Date pattern '{pattern}' requires fields the value does not have")]
    Format { pattern: String },
}

/// Settings shared by serialization and deserialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    case_sensitive: bool,
    wrap_booleans_in_quotes: bool,
    date_format: DatePattern,
    date_time_format: DatePattern,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            wrap_booleans_in_quotes: false,
            date_format: DatePattern::precompiled(DEFAULT_DATE_FORMAT, "%Y-%m-%d"),
            date_time_format: DatePattern::precompiled(
                DEFAULT_DATE_TIME_FORMAT,
                "%Y-%m-%d %H:%M:%S",
            ),
        }
    }
}

impl MapperConfig {
    /// Load configuration from the path in `ROWMAP_CONFIG`, from `./rowmap.toml`,
    /// or fall back to defaults when neither exists
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Whether field names must match column labels exactly
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) -> &mut Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Whether boolean values are emitted as quoted strings
    pub fn is_wrap_booleans_in_quotes(&self) -> bool {
        self.wrap_booleans_in_quotes
    }

    pub fn with_wrap_booleans_in_quotes(mut self, wrap: bool) -> Self {
        self.wrap_booleans_in_quotes = wrap;
        self
    }

    pub fn set_wrap_booleans_in_quotes(&mut self, wrap: bool) -> &mut Self {
        self.wrap_booleans_in_quotes = wrap;
        self
    }

    pub fn date_format(&self) -> &DatePattern {
        &self.date_format
    }

    /// Replace the date pattern; the old one is kept if compilation fails
    pub fn set_date_format(&mut self, pattern: &str) -> Result<&mut Self, ConfigError> {
        self.date_format = DatePattern::compile(pattern)?;
        Ok(self)
    }

    pub fn date_time_format(&self) -> &DatePattern {
        &self.date_time_format
    }

    /// Replace the date-time pattern; the old one is kept if compilation fails
    pub fn set_date_time_format(&mut self, pattern: &str) -> Result<&mut Self, ConfigError> {
        self.date_time_format = DatePattern::compile(pattern)?;
        Ok(self)
    }
}
