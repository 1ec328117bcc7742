use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{MatchOptions, SearchOptions};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_match_percentage")]
    pub min_match_percentage: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_match_percentage: default_min_match_percentage(),
        }
    }
}

fn default_min_match_percentage() -> f64 { 30.0 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Skill matching thresholds and weights
///
/// Values pass through to the matcher untouched; no range validation is
/// applied.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    #[serde(default = "default_exact_weight")]
    pub exact_match_weight: f64,
    #[serde(default = "default_abbreviation_weight")]
    pub abbreviation_match_weight: f64,
    #[serde(default = "default_partial_weight")]
    pub partial_match_weight: f64,
    #[serde(default = "default_fuzzy_weight")]
    pub fuzzy_match_weight: f64,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            exact_match_weight: default_exact_weight(),
            abbreviation_match_weight: default_abbreviation_weight(),
            partial_match_weight: default_partial_weight(),
            fuzzy_match_weight: default_fuzzy_weight(),
        }
    }
}

impl From<OptionsConfig> for MatchOptions {
    fn from(config: OptionsConfig) -> Self {
        Self {
            fuzzy_threshold: config.fuzzy_threshold,
            exact_match_weight: config.exact_match_weight,
            abbreviation_match_weight: config.abbreviation_match_weight,
            partial_match_weight: config.partial_match_weight,
            fuzzy_match_weight: config.fuzzy_match_weight,
        }
    }
}

fn default_fuzzy_threshold() -> f64 { 0.85 }
fn default_exact_weight() -> f64 { 1.0 }
fn default_abbreviation_weight() -> f64 { 0.98 }
fn default_partial_weight() -> f64 { 0.85 }
fn default_fuzzy_weight() -> f64 { 0.6 }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_search_threshold")]
    pub fuzzy_threshold: f64,
    #[serde(default = "default_true")]
    pub enable_fuzzy_search: bool,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_search_threshold(),
            enable_fuzzy_search: true,
            case_sensitive: false,
        }
    }
}

impl From<SearchSettings> for SearchOptions {
    fn from(config: SearchSettings) -> Self {
        Self {
            fuzzy_threshold: config.fuzzy_threshold,
            enable_fuzzy_search: config.enable_fuzzy_search,
            case_sensitive: config.case_sensitive,
        }
    }
}

fn default_search_threshold() -> f64 { 0.6 }
fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with TALENTLINK_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with TALENTLINK_)
            // e.g., TALENTLINK_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("TALENTLINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TALENTLINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
