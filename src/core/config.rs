//! Configuration types and management for bandplan-rs.
//!
//! Defaults reproduce the fixed behaviour of the firmware table generator:
//! entries below 16 MHz or above 1.3 GHz are dropped and modes collapse onto
//! the three demodulators the radio supports.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::errors::{BandplanError, Result};

/// Band plan read when no input path is given.
pub const DEFAULT_INPUT: &str = "BandPlan.xml";

/// Main configuration for the band plan converter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandplanConfig {
    /// Band plan XML document to convert
    pub input: PathBuf,

    /// Frequency window an entry must fall inside
    pub bounds: BoundsConfig,

    /// Limits of the generated firmware table
    pub table: TableConfig,

    /// Mapping from XML `mode` tags to firmware `MODE_*` suffixes
    pub mode_labels: IndexMap<String, String>,
}

impl Default for BandplanConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            bounds: BoundsConfig::default(),
            table: TableConfig::default(),
            mode_labels: Self::default_mode_labels(),
        }
    }
}

impl BandplanConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BandplanError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(|e| {
            BandplanError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Mode table of the UV-K5 spectrum firmware
    fn default_mode_labels() -> IndexMap<String, String> {
        [
            ("NFM", "FM"),
            ("WFM", "FM"),
            ("AM", "AM"),
            ("USB", "USB"),
            ("SSB", "USB"),
        ]
        .into_iter()
        .map(|(tag, label)| (tag.to_string(), label.to_string()))
        .collect()
    }

    /// Look up the firmware label for a mode tag. Unknown tags have no label.
    pub fn mode_label(&self, tag: &str) -> Option<&str> {
        self.mode_labels.get(tag).map(String::as_str)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        self.table.validate()?;

        for (tag, label) in &self.mode_labels {
            if tag.is_empty() {
                return Err(BandplanError::config_field(
                    "mode tag must not be empty",
                    "mode_labels",
                ));
            }
            if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(BandplanError::config_field(
                    format!("mode label '{label}' is not a valid C identifier suffix"),
                    format!("mode_labels.{tag}"),
                ));
            }
        }

        Ok(())
    }
}

/// Frequency window, in Hz, applied to every entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    /// Entries whose lower edge is below this are skipped
    pub min_frequency_hz: i64,

    /// Entries whose upper edge is above this are skipped
    pub max_frequency_hz: i64,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            min_frequency_hz: 16_000_000,
            max_frequency_hz: 1_300_000_000,
        }
    }
}

impl BoundsConfig {
    /// Validate the frequency window
    pub fn validate(&self) -> Result<()> {
        if self.min_frequency_hz < 0 {
            return Err(BandplanError::config_field(
                format!(
                    "min_frequency_hz must not be negative, got {}",
                    self.min_frequency_hz
                ),
                "bounds.min_frequency_hz",
            ));
        }
        if self.max_frequency_hz < self.min_frequency_hz {
            return Err(BandplanError::config_field(
                format!(
                    "max_frequency_hz ({}) must not be below min_frequency_hz ({})",
                    self.max_frequency_hz, self.min_frequency_hz
                ),
                "bounds.max_frequency_hz",
            ));
        }
        Ok(())
    }
}

/// Shape of the generated table rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Longest name the firmware preset struct can hold (excluding NUL)
    pub max_name_len: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { max_name_len: 15 }
    }
}

impl TableConfig {
    /// Validate table limits
    pub fn validate(&self) -> Result<()> {
        if self.max_name_len == 0 {
            return Err(BandplanError::config_field(
                "max_name_len must be greater than zero",
                "table.max_name_len",
            ));
        }
        Ok(())
    }
}
