// Rust guideline compliant 2026-10-19

//! Configuration management for Commit Awards.

use crate::models::{FilterType, SortBy, SortOrder, ViewOptions};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Parses a format name, ignoring case.
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "table" => Some(Self::Table),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }
}

/// Configuration for Commit Awards behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Filter applied when `list` is run without `--filter`.
    #[serde(default)]
    pub default_filter: FilterType,

    /// Sort key applied when `list` is run without `--sort`.
    #[serde(default)]
    pub default_sort_by: SortBy,

    /// Sort direction applied when `list` is run without `--order`.
    #[serde(default)]
    pub default_sort_order: SortOrder,

    /// Number of entries in each top award list.
    #[serde(default = "default_awards_limit")]
    pub awards_limit: usize,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Default length of the top award lists.
fn default_awards_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_filter: FilterType::default(),
            default_sort_by: SortBy::default(),
            default_sort_order: SortOrder::default(),
            awards_limit: default_awards_limit(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.awards/config.toml`
    /// 3. Environment variables with `AWARDS_` prefix
    ///
    /// # Arguments
    ///
    /// * `awards_dir` - Path to the `.awards` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(awards_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = awards_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `AWARDS_DEFAULT_FILTER` - all/funny/serious
    /// - `AWARDS_DEFAULT_SORT_BY` - probability/date/votes
    /// - `AWARDS_DEFAULT_SORT_ORDER` - asc/desc
    /// - `AWARDS_AWARDS_LIMIT` - positive number
    /// - `AWARDS_OUTPUT_FORMAT` - json/table/plain
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("AWARDS_DEFAULT_FILTER") {
            self.default_filter = FilterType::from_name(&val).ok_or_else(|| {
                Error::Config("AWARDS_DEFAULT_FILTER must be all, funny, or serious".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("AWARDS_DEFAULT_SORT_BY") {
            self.default_sort_by = SortBy::from_name(&val).ok_or_else(|| {
                Error::Config(
                    "AWARDS_DEFAULT_SORT_BY must be probability, date, or votes".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("AWARDS_DEFAULT_SORT_ORDER") {
            self.default_sort_order = SortOrder::from_name(&val).ok_or_else(|| {
                Error::Config("AWARDS_DEFAULT_SORT_ORDER must be asc or desc".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("AWARDS_AWARDS_LIMIT") {
            self.awards_limit = val.parse().map_err(|_| {
                Error::Config("AWARDS_AWARDS_LIMIT must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("AWARDS_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::from_name(&val).ok_or_else(|| {
                Error::Config("AWARDS_OUTPUT_FORMAT must be json, table, or plain".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `awards_limit` is zero.
    fn validate(&self) -> Result<()> {
        if self.awards_limit == 0 {
            return Err(Error::Config(
                "awards_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the view options the configuration starts a listing with.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            filter_type: self.default_filter,
            search_term: String::new(),
            sort_by: self.default_sort_by,
            sort_order: self.default_sort_order,
        }
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `awards_dir` - Path to the `.awards` directory
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, awards_dir: &Path) -> Result<()> {
        let config_path = awards_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
