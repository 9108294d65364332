//! Query configuration file support.
//!
//! This module reads the column-name table and the observation night
//! convention from a TOML configuration file. Every section and key is
//! optional; missing values keep the archive defaults.
//!
//! ```toml
//! [columns]
//! observation_night = "night_info.night"
//! right_ascension = "target.ra"
//!
//! [night]
//! start_hour = 14
//! utc_offset_hours = 2
//! ```

use chrono::{DateTime, FixedOffset, TimeZone};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::conditions::{ColumnNames, QueryError, QueryResult};
use crate::parsing::DateValue;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "ARCHIVE_QUERY_CONFIG";

/// File name looked up by [`QueryConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "archive-query.toml";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No {} found in standard locations", CONFIG_FILE_NAME)]
    NotFound,
}

/// The local time at which an observation night begins.
///
/// A night is named after the calendar date on which it starts, and runs
/// from `start_hour` on that date to `start_hour` on the following date, in
/// the observatory's fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NightConvention {
    pub start_hour: u32,
    pub utc_offset_hours: i32,
}

impl Default for NightConvention {
    fn default() -> Self {
        Self {
            start_hour: 14,
            utc_offset_hours: 2,
        }
    }
}

impl NightConvention {
    fn offset(&self) -> QueryResult<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or_else(|| {
            QueryError::InvalidNightConvention(format!(
                "utc_offset_hours out of range: {}",
                self.utc_offset_hours
            ))
        })
    }

    /// The instant the night named `date` begins.
    pub fn start_of(&self, date: DateValue) -> QueryResult<DateTime<FixedOffset>> {
        let offset = self.offset()?;
        let local = date.date().and_hms_opt(self.start_hour, 0, 0).ok_or_else(|| {
            QueryError::InvalidNightConvention(format!(
                "start_hour out of range: {}",
                self.start_hour
            ))
        })?;
        offset
            .from_local_datetime(&local)
            .single()
            .ok_or(QueryError::DateOutOfRange { date })
    }

    /// The instant the night named `date` ends, i.e. the start of the next night.
    pub fn end_of(&self, date: DateValue) -> QueryResult<DateTime<FixedOffset>> {
        let next = date.next_day().ok_or(QueryError::DateOutOfRange { date })?;
        self.start_of(next)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.start_hour > 23 {
            return Err(ConfigError::Invalid(format!(
                "night.start_hour must be between 0 and 23, got {}",
                self.start_hour
            )));
        }
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(ConfigError::Invalid(format!(
                "night.utc_offset_hours must be between -12 and 14, got {}",
                self.utc_offset_hours
            )));
        }
        Ok(())
    }
}

/// Configuration of the condition builders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub columns: ColumnNames,
    pub night: NightConvention,
}

impl QueryConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: QueryConfig = toml::from_str(content)?;
        config.night.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded query configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `archive-query.toml` in:
    /// 1. Current directory
    /// 2. `archive_query/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("archive_query").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Resolve the configuration used by the command-line tool: the file named
    /// by `ARCHIVE_QUERY_CONFIG`, else the default location, else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Self::from_file(path);
        }
        match Self::from_default_location() {
            Err(ConfigError::NotFound) => {
                debug!("No {} found, using default configuration", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
            other => other,
        }
    }
}
