// src/records/mod.rs
//! # Record transformers
//!
//! Each submodule owns one CSV resource contract and turns the parser's
//! `RawRecord`s into typed records:
//!
//! - `jobs`: two job schemas (`job_data.csv`, `augmented_final_data.csv`).
//!   They disagree on header names *and* on the skill-list separator, so
//!   they stay two named schemas feeding one `JobRecord`.
//! - `sectors`: bar-chart rows (`label, value, color, description`).
//! - `skills`: rows grouped by category, first-seen order.
//! - `timeline`: events whose year is a number or a free-form label.
//! - `risk`: the one place the 30/70 impact thresholds live.
//!
//! ## Coercion rules
//! Numbers go through `parse_int` / `parse_float`, which read the longest
//! numeric prefix ("85%" → 85) and report anything else as not-a-number.
//! Transformers never reject a row: values that feed geometry are `f64`
//! and carry `NaN`, counts are `Option<i64>` and carry `None`. Dropping bad
//! rows is the loader's call, not ours.
//!
//! ## What does **not** live here
//! - Fetching and failure policy (`crate::loader`).
//! - Anything about pixels (`crate::geometry`).
pub mod jobs;
pub mod risk;
pub mod sectors;
pub mod skills;
pub mod timeline;

pub use jobs::{JobRecord, JobSchema, Level};
pub use risk::RiskTier;
pub use sectors::SectorRecord;
pub use skills::{SkillCategoryRecord, SkillValue};
pub use timeline::{TimelineEventRecord, TimelineYear};

/// Truncating base-10 parse: optional whitespace and sign, then the digit
/// prefix. `None` when there are no leading digits; a digit run past the
/// i64 range saturates.
pub fn parse_int(text: &str) -> Option<i64> {
    let t = text.trim_start();
    let (neg, rest) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let end = rest.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let digits = &rest[..end];
    let signed = if neg { format!("-{digits}").parse::<i64>() } else { digits.parse::<i64>() };
    Some(signed.unwrap_or(if neg { i64::MIN } else { i64::MAX }))
}

/// Decimal prefix parse (`"0.75 of time"` → 0.75). `None` without a mantissa digit.
pub fn parse_float(text: &str) -> Option<f64> {
    let t = text.trim_start();
    let b = t.as_bytes();
    let mut i = 0;

    if matches!(b.first(), Some(b'-' | b'+')) {
        i += 1;
    }
    let int_digits = b[i..].iter().take_while(|c| c.is_ascii_digit()).count();
    i += int_digits;

    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        frac_digits = b[i + 1..].iter().take_while(|c| c.is_ascii_digit()).count();
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it.
    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'-' | b'+')) {
            j += 1;
        }
        let exp_digits = b[j.min(b.len())..].iter().take_while(|c| c.is_ascii_digit()).count();
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    t[..i].parse().ok()
}

/// Integer-coerced numeric field, `NaN` when unparseable.
pub fn int_value(text: &str) -> f64 {
    parse_int(text).map(|v| v as f64).unwrap_or(f64::NAN)
}

/// Float-coerced numeric field, `NaN` when unparseable.
pub fn float_value(text: &str) -> f64 {
    parse_float(text).unwrap_or(f64::NAN)
}

/// Split a delimited sub-list on a literal separator; trims items, drops blanks.
pub fn split_list(text: &str, sep: &str) -> Vec<String> {
    text.split(sep)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_reads_prefix() {
        assert_eq!(parse_int("85"), Some(85));
        assert_eq!(parse_int("  42abc"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("12.9"), Some(12));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn parse_int_saturates_long_digit_runs() {
        assert_eq!(parse_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999 jobs"), Some(i64::MIN));
        assert_eq!(parse_int("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn parse_float_reads_prefix() {
        assert_eq!(parse_float("0.75"), Some(0.75));
        assert_eq!(parse_float(".5x"), Some(0.5));
        assert_eq!(parse_float("3."), Some(3.0));
        assert_eq!(parse_float("1e3"), Some(1000.0));
        assert_eq!(parse_float("2e"), Some(2.0));
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("n/a"), None);
    }

    #[test]
    fn numeric_fields_carry_nan() {
        assert!(int_value("oops").is_nan());
        assert!(float_value("").is_nan());
        assert_eq!(int_value("15"), 15.0);
    }

    #[test]
    fn split_list_trims_and_skips_blanks() {
        assert_eq!(split_list("a | b|c", "|"), vec!["a", "b", "c"]);
        assert_eq!(split_list("Empathy, Judgment", ", "), vec!["Empathy", "Judgment"]);
        assert!(split_list("  ", "|").is_empty());
    }
}
