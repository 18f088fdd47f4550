//! Main conversion engine implementation.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::core::config::BandplanConfig;
use crate::core::entries::RangeEntry;
use crate::core::errors::Result;
use crate::core::pipeline::{ConversionSummary, Converter};
use crate::io::xml::{parse_range_entries, read_range_entries};

/// Outcome of converting one band plan document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Document the entries were read from, if any
    pub input: Option<PathBuf>,
    /// Number of `RangeEntry` elements found
    pub entries_read: usize,
    /// Surviving records and skip counts
    pub summary: ConversionSummary,
}

/// Reads band plan documents and converts them into firmware rows
#[derive(Debug, Clone)]
pub struct BandplanEngine {
    converter: Converter,
}

impl BandplanEngine {
    /// Create a new engine, validating the configuration first
    pub fn new(config: BandplanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            converter: Converter::new(config),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &BandplanConfig {
        self.converter.config()
    }

    /// Convert the band plan at `path`
    pub async fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<ConversionReport> {
        let path = path.as_ref();
        info!("Reading band plan: {}", path.display());

        let entries = read_range_entries(path).await?;
        let mut report = self.convert_entries(&entries);
        report.input = Some(path.to_path_buf());
        Ok(report)
    }

    /// Convert an in-memory band plan document
    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<ConversionReport> {
        let entries = parse_range_entries(bytes)?;
        Ok(self.convert_entries(&entries))
    }

    fn convert_entries(&self, entries: &[RangeEntry]) -> ConversionReport {
        let summary = self.converter.convert_all(entries);

        info!(
            "Conversion completed: {} entries read, {} rows emitted, {} skipped",
            entries.len(),
            summary.records.len(),
            summary.skipped_total()
        );

        ConversionReport {
            input: None,
            entries_read: entries.len(),
            summary,
        }
    }
}
