//! # bandplan-rs: band plan to firmware table converter
//!
//! Reads a band plan XML document (`RangeEntry` elements carrying frequency
//! range, mode and channel step) and turns each usable entry into one row of
//! a C initializer table for radio firmware:
//!
//! ```text
//! {"2m Ham Band", 14400000, 14800000, STEPS_128, S_STEP_25kHz, MODE_FM },
//! ```
//!
//! Entries with a missing or non-positive step, an empty name, or a range
//! outside the configured window are skipped silently.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bandplan_rs::{BandplanConfig, BandplanEngine};
//! use bandplan_rs::io::reports::{render, OutputFormat};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = BandplanEngine::new(BandplanConfig::default())?;
//!     let report = engine.convert_file("BandPlan.xml").await?;
//!     print!("{}", render(&report.summary.records, OutputFormat::C)?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Core data model and conversion
pub mod core {
    //! Configuration, data model and the conversion pipeline.

    pub mod config;
    pub mod entries;
    pub mod errors;
    pub mod pipeline;
}

// Document input and table output
pub mod io {
    //! XML reading and table rendering.

    pub mod reports;
    pub mod xml;
}

// Public API and engine interface
pub mod api {
    //! High-level engine interface.

    pub mod engine;
}

// Re-export primary types for convenience
pub use api::engine::{BandplanEngine, ConversionReport};
pub use core::config::BandplanConfig;
pub use core::entries::{OutputRecord, RangeEntry};
pub use core::errors::{BandplanError, Result};
pub use core::pipeline::{Converter, SkipReason};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
