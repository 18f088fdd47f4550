//! Band plan data model.
//!
//! [`RangeEntry`] is the raw record as found in the XML document; attribute
//! values stay strings so that coercion happens in one place. [`OutputRecord`]
//! is the classified row that becomes one line of the firmware table.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// One `RangeEntry` element of a band plan document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry {
    /// Text content of the element
    pub name: String,
    /// Raw `minFrequency` attribute, Hz
    pub min_frequency: Option<String>,
    /// Raw `maxFrequency` attribute, Hz
    pub max_frequency: Option<String>,
    /// Raw `mode` attribute
    pub mode: Option<String>,
    /// Raw `step` attribute, Hz
    pub step: Option<String>,
}

impl RangeEntry {
    /// Build an entry from numeric values, mostly useful in tests and tooling.
    pub fn from_hz(name: impl Into<String>, min: i64, max: i64, step: i64, mode: &str) -> Self {
        Self {
            name: name.into(),
            min_frequency: Some(min.to_string()),
            max_frequency: Some(max.to_string()),
            mode: Some(mode.to_string()),
            step: Some(step.to_string()),
        }
    }

    /// Lower edge in Hz, coerced leniently
    pub fn min_hz(&self) -> i64 {
        lenient_int(self.min_frequency.as_deref())
    }

    /// Upper edge in Hz, coerced leniently
    pub fn max_hz(&self) -> i64 {
        lenient_int(self.max_frequency.as_deref())
    }

    /// Channel step in Hz, coerced leniently
    pub fn step_hz(&self) -> i64 {
        lenient_int(self.step.as_deref())
    }
}

/// Parse the leading integer of an attribute value.
///
/// Leading whitespace and a single sign are accepted, then the longest run of
/// ASCII digits. A single `_` between two digits is skipped, so
/// `144_000_000` reads as 144000000. A missing value, a value without leading
/// digits, or one that overflows `i64` yields 0.
pub fn lenient_int(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else { return 0 };
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let bytes = rest.as_bytes();
    let mut digits = String::with_capacity(bytes.len());
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'0'..=b'9' => digits.push(char::from(b)),
            b'_' if !digits.is_empty()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) => {}
            _ => break,
        }
    }

    match digits.parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}

/// Convert Hz to the firmware's 10 Hz units, rounding halves away from zero.
pub fn to_firmware_units(hz: i64) -> i64 {
    if hz >= 0 {
        hz.saturating_add(5) / 10
    } else {
        hz.saturating_sub(5) / 10
    }
}

/// Number of scan steps the spectrum view uses for a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepsBucket {
    /// 16 steps
    Steps16,
    /// 32 steps
    Steps32,
    /// 64 steps
    Steps64,
    /// 128 steps
    Steps128,
}

impl StepsBucket {
    /// Pick the bucket for a band width and step.
    ///
    /// The band width is truncated to whole kHz first, then divided by the
    /// step in kHz. The result selects 128 above 64 steps, 64 above 32,
    /// 32 above 16 and 16 otherwise. `step_hz` must be positive.
    pub fn classify(min_hz: i64, max_hz: i64, step_hz: i64) -> Self {
        debug_assert!(step_hz > 0);
        let range_khz = i128::from(max_hz.saturating_sub(min_hz)).div_euclid(1000);
        // steps_total > n  <=>  range_khz * 1000 > n * step_hz
        let scaled = range_khz * 1000;
        let step = i128::from(step_hz);

        if scaled > 64 * step {
            Self::Steps128
        } else if scaled > 32 * step {
            Self::Steps64
        } else if scaled > 16 * step {
            Self::Steps32
        } else {
            Self::Steps16
        }
    }

    /// Step count represented by the bucket
    pub const fn count(self) -> u16 {
        match self {
            Self::Steps16 => 16,
            Self::Steps32 => 32,
            Self::Steps64 => 64,
            Self::Steps128 => 128,
        }
    }
}

impl fmt::Display for StepsBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "STEPS_{}", self.count())
    }
}

impl Serialize for StepsBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.count())
    }
}

/// Step size in kHz with `_` in place of the decimal point, e.g. `12_5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StepLabel(String);

impl StepLabel {
    /// Format a step given in Hz
    pub fn from_hz(step_hz: i64) -> Self {
        let sign = if step_hz < 0 { "-" } else { "" };
        let magnitude = step_hz.unsigned_abs();
        let whole = magnitude / 1000;
        let frac = magnitude % 1000;

        if frac == 0 {
            return Self(format!("{sign}{whole}"));
        }

        let frac = format!("{frac:03}");
        Self(format!("{sign}{whole}_{}", frac.trim_end_matches('0')))
    }

    /// Label text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A classified band, ready to be written as one firmware table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    /// Band name
    pub name: String,
    /// Lower edge in 10 Hz units
    pub min: i64,
    /// Upper edge in 10 Hz units
    pub max: i64,
    /// Scan step count bucket
    pub steps: StepsBucket,
    /// Step size label
    pub step_label: StepLabel,
    /// Firmware modulation suffix, empty when the mode tag is unknown
    pub mode: String,
}

impl fmt::Display for OutputRecord {
    /// Renders `{"name", min, max, STEPS_n, S_STEP_xkHz, MODE_m },`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"{}\", {}, {}, {}, S_STEP_{}kHz, MODE_{} }},",
            escape_c_string(&self.name),
            self.min,
            self.max,
            self.steps,
            self.step_label,
            self.mode
        )
    }
}

/// Escape a name for use inside a C string literal.
fn escape_c_string(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped
}
