//! Rendering of converted band plans.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::entries::OutputRecord;
use crate::core::errors::Result;

/// Output format for the generated table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// C initializer rows, one per line
    #[default]
    C,
    /// Pretty-printed JSON array of records
    Json,
}

/// Render records in the requested format.
pub fn render(records: &[OutputRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::C => Ok(render_c(records)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_c(records: &[OutputRecord]) -> String {
    let mut out = String::new();
    for record in records {
        // writing into a String cannot fail
        let _ = writeln!(out, "{record}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entries::{StepLabel, StepsBucket};

    fn records() -> Vec<OutputRecord> {
        vec![
            OutputRecord {
                name: "2m".into(),
                min: 14_400_000,
                max: 14_800_000,
                steps: StepsBucket::Steps128,
                step_label: StepLabel::from_hz(25_000),
                mode: "FM".into(),
            },
            OutputRecord {
                name: "FRS/GMRS 462".into(),
                min: 46_256_250,
                max: 46_272_500,
                steps: StepsBucket::Steps16,
                step_label: StepLabel::from_hz(12_500),
                mode: "FM".into(),
            },
        ]
    }

    #[test]
    fn c_output_has_one_line_per_record() {
        let text = render(&records(), OutputFormat::C).expect("render");
        assert_eq!(
            text,
            "{\"2m\", 14400000, 14800000, STEPS_128, S_STEP_25kHz, MODE_FM },\n\
             {\"FRS/GMRS 462\", 46256250, 46272500, STEPS_16, S_STEP_12_5kHz, MODE_FM },\n"
        );
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render(&[], OutputFormat::C).expect("render"), "");
        assert_eq!(render(&[], OutputFormat::Json).expect("render"), "[]\n");
    }

    #[test]
    fn json_output_is_an_array_of_records() {
        let text = render(&records(), OutputFormat::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        let rows = value.as_array().expect("array");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "2m");
        assert_eq!(rows[0]["steps"], 128);
        assert_eq!(rows[1]["step_label"], "12_5");
        assert_eq!(rows[1]["mode"], "FM");
    }

    #[test]
    fn default_format_is_c() {
        assert_eq!(OutputFormat::default(), OutputFormat::C);
    }
}
