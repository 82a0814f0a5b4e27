//! Relative-time spec parsing
//!
//! Converts compact duration strings ("30m", "2d") plus a reference instant
//! into an absolute future instant in epoch milliseconds.

use std::sync::LazyLock;

use regex::Regex;

use crate::clock::EpochMillis;
use crate::error::ParseTimeError;

/// Splits a spec into a leading magnitude and a trailing alphabetic unit run.
static SPEC_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^a-zA-Z]*)([a-zA-Z]*)").unwrap());

/// Parse a relative-duration spec into an absolute instant.
///
/// The spec is a magnitude followed by a unit suffix: `ms`, `s`, `m`, `h`,
/// or `d`. A missing or unrecognized suffix is treated as hours. The
/// magnitude is rounded to the nearest integer before use; negative
/// magnitudes are permitted and yield an instant in the past.
///
/// Pure: identical inputs always produce identical outputs.
pub fn parse_relative_time(spec: &str, now: EpochMillis) -> Result<EpochMillis, ParseTimeError> {
    // The pattern matches any input (both groups may be empty), so a failed
    // capture cannot happen; the empty-magnitude case below covers it.
    let (magnitude, unit) = match SPEC_SPLIT.captures(spec) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => ("", ""),
    };

    let magnitude: f64 = magnitude
        .trim()
        .parse()
        .map_err(|_| ParseTimeError {
            spec: spec.to_string(),
        })?;

    // No bounds are enforced on the magnitude; clamp instead of overflowing
    let offset = (magnitude.round() as i64).saturating_mul(unit_multiplier(unit));
    Ok(now.saturating_add(offset))
}

/// Milliseconds per unit suffix. Unknown suffixes fall back to hours.
fn unit_multiplier(unit: &str) -> i64 {
    match unit {
        "ms" => 1,
        "s" => 1_000,
        "m" => 60_000,
        "h" => 3_600_000,
        "d" => 86_400_000,
        _ => 3_600_000,
    }
}
