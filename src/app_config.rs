use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::dialogue_writer::Separator;
use crate::file_utils::FileManager;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Separator between index, source and target in output records
    #[serde(default)]
    pub separator: Separator,

    /// Extension of the subtitle files to pick up
    #[serde(default = "default_input_extension")]
    pub input_extension: String,

    /// Extension given to the extracted text files
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_input_extension() -> String {
    "ass".to_string()
}

fn default_output_extension() -> String {
    "txt".to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load the configuration file if there is one, otherwise use defaults
    ///
    /// Nothing is written to disk when the file is missing.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if FileManager::file_exists(path) {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let input = self.input_extension.trim_start_matches('.');
        let output = self.output_extension.trim_start_matches('.');

        if input.is_empty() {
            return Err(anyhow!("Input extension must not be empty"));
        }

        if output.is_empty() {
            return Err(anyhow!("Output extension must not be empty"));
        }

        // Output lands next to the input, so equal extensions would overwrite subtitles
        if input.eq_ignore_ascii_case(output) {
            return Err(anyhow!(
                "Input and output extensions must differ (both are '{}')",
                input
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            separator: Separator::default(),
            input_extension: default_input_extension(),
            output_extension: default_output_extension(),
            recursive: false,
            log_level: LogLevel::default(),
        }
    }
}
