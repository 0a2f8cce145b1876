//! Number parsing for count slots
//!
//! Slot values arrive as whatever the upstream language model produced.
//! [`parse_number`] reads them as a non-negative count, tolerating noise
//! such as `"room 2b"` or `"3.0"`. [`parse_float`] is the stricter reader
//! used by the late formatting pass.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value_objects::{ParsedNumber, RawSlotValue};

/// First run of ASCII digits anywhere in the text
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("digit run pattern"));

/// Number words and quantity phrases with their values
pub const WORD_NUMBERS: &[(&str, u64)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("just me", 1),
    ("only me", 1),
    ("me", 1),
    ("myself", 1),
    ("solo", 1),
    ("alone", 1),
    ("single", 1),
    ("a couple", 2),
    ("couple", 2),
    ("a pair", 2),
    ("pair", 2),
    ("a few", 3),
    ("a dozen", 12),
    ("dozen", 12),
];

/// Look up an exact phrase in [`WORD_NUMBERS`]
pub fn word_number(text: &str) -> Option<u64> {
    WORD_NUMBERS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|(_, value)| *value)
}

/// Read a slot value as a non-negative count
///
/// JSON numbers are read by value, dropping the sign and any fraction. Text
/// is tried, in order, against the word map, the first run of ASCII digits,
/// then a plain numeric parse truncated toward zero.
pub fn parse_number(raw: &RawSlotValue) -> ParsedNumber {
    if let RawSlotValue::Number(n) = raw {
        return number_value(n);
    }

    let Some(text) = raw.normalized_text() else {
        return ParsedNumber::Absent;
    };

    if let Some(value) = word_number(&text) {
        return ParsedNumber::Value(value);
    }

    if let Some(value) = first_digit_run(&text) {
        return ParsedNumber::Value(value);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => {
            ParsedNumber::Value(value.trunc() as u64)
        }
        _ => ParsedNumber::Unparseable,
    }
}

/// Count carried by a JSON number
///
/// Values past `u64::MAX` saturate so they still read as "too many".
fn number_value(n: &serde_json::Number) -> ParsedNumber {
    if let Some(value) = n.as_u64() {
        return ParsedNumber::Value(value);
    }
    if let Some(value) = n.as_i64() {
        return ParsedNumber::Value(value.unsigned_abs());
    }
    match n.as_f64() {
        Some(value) if value.is_finite() => ParsedNumber::Value(value.abs().trunc() as u64),
        _ => ParsedNumber::Unparseable,
    }
}

/// First contiguous run of ASCII digits in `text`
///
/// Runs too long for `u64` saturate so they still read as "too many".
fn first_digit_run(text: &str) -> Option<u64> {
    let run = DIGIT_RUN.find(text)?;
    Some(run.as_str().parse::<u64>().unwrap_or(u64::MAX))
}

/// Read a slot value as a float, the way the formatting pass does
///
/// Strings are trimmed and parsed; numbers are taken as-is; booleans read
/// as 1 and 0. Anything else, including NaN and infinities, yields `None`.
pub fn parse_float(raw: &RawSlotValue) -> Option<f64> {
    let value = match raw {
        RawSlotValue::Number(n) => n.as_f64()?,
        RawSlotValue::Text(s) => s.trim().parse::<f64>().ok()?,
        RawSlotValue::Other(serde_json::Value::Bool(flag)) => f64::from(u8::from(*flag)),
        RawSlotValue::Absent | RawSlotValue::Other(_) => return None,
    };

    value.is_finite().then_some(value)
}

/// Render a float as an integer string, truncating toward zero
pub fn integer_string(value: f64) -> String {
    let truncated = value.trunc();
    if truncated == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{truncated:.0}")
}
