//! Entry classification pipeline.
//!
//! Each [`RangeEntry`] is coerced, filtered and classified into an
//! [`OutputRecord`]. Entries that do not make it are counted per
//! [`SkipReason`]; they are never errors.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::config::BandplanConfig;
use crate::core::entries::{to_firmware_units, OutputRecord, RangeEntry, StepLabel, StepsBucket};

/// Why an entry produced no table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Step missing, non-numeric, zero or negative
    NonPositiveStep,
    /// Element had no text content
    EmptyName,
    /// Lower edge below the configured minimum
    BelowMinimum,
    /// Upper edge above the configured maximum
    AboveMaximum,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NonPositiveStep => "step is not positive",
            Self::EmptyName => "name is empty",
            Self::BelowMinimum => "lower edge below minimum frequency",
            Self::AboveMaximum => "upper edge above maximum frequency",
        };
        f.write_str(text)
    }
}

/// Records produced from one document, plus what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    /// Surviving rows in document order
    pub records: Vec<OutputRecord>,
    /// Dropped entries per reason
    pub skipped: BTreeMap<SkipReason, usize>,
    /// Emitted rows whose name exceeds `table.max_name_len` characters
    pub long_names: usize,
}

impl ConversionSummary {
    /// Total number of dropped entries
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

/// Converts band plan entries into firmware table rows.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: BandplanConfig,
}

impl Converter {
    /// Create a converter using the given configuration
    pub fn new(config: BandplanConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &BandplanConfig {
        &self.config
    }

    /// Classify a single entry.
    pub fn convert_entry(&self, entry: &RangeEntry) -> Result<OutputRecord, SkipReason> {
        let min = entry.min_hz();
        let max = entry.max_hz();
        let step = entry.step_hz();

        if step <= 0 {
            return Err(SkipReason::NonPositiveStep);
        }
        if entry.name.is_empty() {
            return Err(SkipReason::EmptyName);
        }
        if min < self.config.bounds.min_frequency_hz {
            return Err(SkipReason::BelowMinimum);
        }
        if max > self.config.bounds.max_frequency_hz {
            return Err(SkipReason::AboveMaximum);
        }

        let mode = entry
            .mode
            .as_deref()
            .and_then(|tag| self.config.mode_label(tag))
            .unwrap_or_default()
            .to_string();

        Ok(OutputRecord {
            name: entry.name.clone(),
            min: to_firmware_units(min),
            max: to_firmware_units(max),
            steps: StepsBucket::classify(min, max, step),
            step_label: StepLabel::from_hz(step),
            mode,
        })
    }

    /// Classify every entry, keeping document order.
    pub fn convert_all(&self, entries: &[RangeEntry]) -> ConversionSummary {
        let mut summary = ConversionSummary::default();

        for entry in entries {
            match self.convert_entry(entry) {
                Ok(record) => {
                    if record.mode.is_empty() {
                        debug!(
                            name = %record.name,
                            mode = entry.mode.as_deref().unwrap_or(""),
                            "Unknown mode tag, emitting empty mode label"
                        );
                    }
                    if record.name.chars().count() > self.config.table.max_name_len {
                        warn!(
                            name = %record.name,
                            limit = self.config.table.max_name_len,
                            "Band name longer than the firmware name field"
                        );
                        summary.long_names += 1;
                    }
                    summary.records.push(record);
                }
                Err(reason) => {
                    debug!(name = %entry.name, %reason, "Skipping range entry");
                    *summary.skipped.entry(reason).or_insert(0) += 1;
                }
            }
        }

        summary
    }
}
