//! Date-range validation and normalization
//!
//! The GA4 Data API accepts either an absolute `YYYY-MM-DD` start date
//! or a relative form like `30daysAgo`. User input is matched
//! case-insensitively and rewritten to the casing the service expects.

use heyga_core::{Error, Result};

const UNITS: [&str; 4] = ["days", "weeks", "months", "years"];

/// Validate a range expression and rewrite it into canonical form.
///
/// - Relative form (`<int><days|weeks|months|years>Ago`, any casing) is
///   re-emitted with the unit lower-cased and the literal `Ago` suffix.
/// - Absolute form (`YYYY-MM-DD` digit pattern) is returned verbatim.
///   Calendar validity is not checked here; the service rejects
///   impossible dates.
/// - Anything else fails with [`Error::InvalidRange`] carrying the
///   original input.
///
/// Normalization is idempotent: canonical forms pass through unchanged.
pub fn normalize(range: &str) -> Result<String> {
    if is_absolute_date(range) {
        return Ok(range.to_string());
    }

    normalize_relative(range).ok_or_else(|| Error::InvalidRange(range.to_string()))
}

fn is_absolute_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4] == b'-'
        && bytes[5].is_ascii_digit()
        && bytes[6].is_ascii_digit()
        && bytes[7] == b'-'
        && bytes[8].is_ascii_digit()
        && bytes[9].is_ascii_digit()
}

fn normalize_relative(s: &str) -> Option<String> {
    let lower = s.to_ascii_lowercase();
    let rest = lower.strip_suffix("ago")?;
    let unit = UNITS.iter().find(|unit| rest.ends_with(**unit))?;
    let count = rest.strip_suffix(unit)?;

    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(format!("{count}{unit}Ago"))
}
