//! Feed value normalization
//!
//! The watchlist feed renders every numeric cell as text in the host
//! page's accounting style: `1,234`, `(3,219.88 B)`, `45.57 B`, `2.00`,
//! or `-` for missing data. This module turns any of those into a
//! canonical `Option<f64>` — total, deterministic, locale-independent.

use crate::constants::{BILLION, MILLION, NULL_PLACEHOLDER};

/// Normalize a raw feed value into a finite number or `None`
///
/// Rules, in order:
/// - trim; empty string or `-` → `None` (missing data, not zero)
/// - matching parentheses mark a negative magnitude; the final sign is
///   forced negative regardless of any embedded sign character
/// - comma thousands separators are stripped
/// - a trailing `B` or `M` suffix (optionally space-separated,
///   uppercase only as the feed renders it) scales by 1e9 / 1e6
/// - anything that still fails to parse as a finite float → `None`
///
/// Never panics and never returns NaN or infinity.
pub fn normalize(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NULL_PLACEHOLDER {
        return None;
    }

    let (negative, inner) = match trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
    {
        Some(inner) => (true, inner),
        None => (false, trimmed),
    };

    let cleaned = inner.replace(',', "");
    let cleaned = cleaned.trim();

    let (number, multiplier) = if let Some(body) = cleaned.strip_suffix('B') {
        (body.trim_end(), BILLION)
    } else if let Some(body) = cleaned.strip_suffix('M') {
        (body.trim_end(), MILLION)
    } else {
        (cleaned, 1.0)
    };

    let value: f64 = number.parse().ok()?;
    // f64::parse accepts "inf" and "NaN"; the record invariant does not
    if !value.is_finite() {
        return None;
    }

    let scaled = value * multiplier;
    Some(if negative { -scaled.abs() } else { scaled })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_and_empty_are_null() {
        assert_eq!(normalize("-"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize(" - "), None);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(normalize("1,234"), Some(1234.0));
        assert_eq!(normalize("2.00"), Some(2.0));
        assert_eq!(normalize("-30.79"), Some(-30.79));
        assert_eq!(normalize("14.31"), Some(14.31));
    }

    #[test]
    fn test_parentheses_force_negative() {
        assert_eq!(normalize("(1,234)"), Some(-1234.0));
        assert_eq!(normalize("(25.24 B)"), Some(-25.24e9));
        // embedded sign cannot flip a parenthesized value back positive
        assert_eq!(normalize("(-5)"), Some(-5.0));
    }

    #[test]
    fn test_unit_suffixes() {
        assert_eq!(normalize("45.57 B"), Some(45_570_000_000.0));
        assert_eq!(normalize("45.57B"), Some(45_570_000_000.0));
        assert_eq!(normalize("2.5 M"), Some(2_500_000.0));
        assert_eq!(normalize("2.5M"), Some(2_500_000.0));
    }

    #[test]
    fn test_parentheses_with_suffix() {
        assert_eq!(normalize("(3,219.88 B)"), Some(-3_219_880_000_000.0));
        assert_eq!(normalize("(871.45 M)"), Some(-871_450_000.0));
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        // the feed only renders uppercase suffixes; lowercase is garbage
        assert_eq!(normalize("45.57 b"), None);
        assert_eq!(normalize("2.5m"), None);
    }

    #[test]
    fn test_garbage_is_null_not_error() {
        assert_eq!(normalize("abc"), None);
        assert_eq!(normalize("--"), None);
        assert_eq!(normalize("()"), None);
        assert_eq!(normalize("("), None);
        assert_eq!(normalize("1.2.3"), None);
        assert_eq!(normalize("loading"), None);
    }

    #[test]
    fn test_non_finite_text_is_null() {
        assert_eq!(normalize("inf"), None);
        assert_eq!(normalize("NaN"), None);
        assert_eq!(normalize("(inf)"), None);
    }

    #[test]
    fn test_deterministic() {
        for raw in ["(3,219.88 B)", "45.57 B", "-", "abc", "1,234"] {
            assert_eq!(normalize(raw), normalize(raw));
        }
    }
}
