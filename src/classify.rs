//! Value classification: missing-value detection and numeric coercion.
//!
//! Every cell a scan looks at falls into exactly one of three buckets:
//! missing, numeric, or opaque. [`is_missing`] decides the first,
//! [`coerce_numeric`] the second; anything else is opaque and contributes to
//! no statistic. Both functions are pure.

use serde_json::Value;

/// Sentinel strings that read as a missing value (compared after trimming
/// and ASCII-lowercasing).
const MISSING_SENTINELS: [&str; 4] = ["null", "none", "na", "n/a"];

/// Returns true iff `value` represents absence of data.
///
/// JSON null is always missing. A string is missing iff, after trimming
/// whitespace, it is empty or its lowercase form is one of `null`, `none`,
/// `na`, `n/a`. Every other type, including numeric zero and booleans, is
/// present.
pub fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.is_empty()
                || MISSING_SENTINELS.contains(&trimmed.to_ascii_lowercase().as_str())
        }
        _ => false,
    }
}

/// Attempts to read `value` as a finite real number.
///
/// - Booleans never coerce, even though they have an obvious 0/1 reading.
/// - Native JSON numbers coerce directly.
/// - Strings are trimmed and thousands-separator commas are stripped before
///   standard decimal parsing, so `"1,234.5"` coerces to `1234.5`.
/// - `NaN` and infinities are rejected wherever they come from.
/// - Nulls, arrays and objects never coerce.
pub fn coerce_numeric(value: &Value) -> Option<f64> {
    let x = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            let normalized = trimmed.replace(',', "");
            normalized.parse::<f64>().ok()?
        }
        _ => return None,
    };
    x.is_finite().then_some(x)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{coerce_numeric, is_missing};

    #[test]
    fn null_and_sentinel_strings_are_missing() {
        assert!(is_missing(&json!(null)));
        for s in ["", "   ", "null", "None", "NA", "n/a", "  N/A  ", "NULL"] {
            assert!(is_missing(&json!(s)), "expected missing: {s:?}");
        }
    }

    #[test]
    fn present_values_are_not_missing() {
        assert!(!is_missing(&json!(0)));
        assert!(!is_missing(&json!(0.0)));
        assert!(!is_missing(&json!(false)));
        assert!(!is_missing(&json!("0")));
        assert!(!is_missing(&json!("nan")));
        assert!(!is_missing(&json!([])));
        assert!(!is_missing(&json!({})));
    }

    #[test]
    fn native_numbers_coerce() {
        assert_eq!(coerce_numeric(&json!(3)), Some(3.0));
        assert_eq!(coerce_numeric(&json!(-2.5)), Some(-2.5));
        assert_eq!(coerce_numeric(&json!(0)), Some(0.0));
    }

    #[test]
    fn booleans_never_coerce() {
        assert_eq!(coerce_numeric(&json!(true)), None);
        assert_eq!(coerce_numeric(&json!(false)), None);
    }

    #[test]
    fn strings_coerce_with_trimming_and_thousands_separators() {
        assert_eq!(coerce_numeric(&json!(" 42 ")), Some(42.0));
        assert_eq!(coerce_numeric(&json!("1,234.5")), Some(1234.5));
        assert_eq!(coerce_numeric(&json!("1,000,000")), Some(1_000_000.0));
        assert_eq!(coerce_numeric(&json!("-1.5e3")), Some(-1500.0));
    }

    #[test]
    fn non_numeric_strings_are_rejected() {
        for s in ["", "  ", "abc", "12abc", "1.2.3"] {
            assert_eq!(coerce_numeric(&json!(s)), None, "input: {s:?}");
        }
    }

    #[test]
    fn non_finite_results_are_rejected() {
        for s in ["nan", "NaN", "inf", "-inf", "Infinity", "1e999"] {
            assert_eq!(coerce_numeric(&json!(s)), None, "input: {s:?}");
        }
    }

    #[test]
    fn containers_and_null_never_coerce() {
        assert_eq!(coerce_numeric(&json!(null)), None);
        assert_eq!(coerce_numeric(&json!([1, 2])), None);
        assert_eq!(coerce_numeric(&json!({"a": 1})), None);
    }
}
