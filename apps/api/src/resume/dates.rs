//! Month tokens (`YYYY-MM`) and their display form (`Mar 2020`).

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;

/// `YYYY-MM` with a two-digit month in `01`..=`12`.
static MONTH_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").expect("month token pattern is valid")
});

pub fn is_month_token(s: &str) -> bool {
    MONTH_TOKEN.is_match(s)
}

/// True only for a JSON string that is a month token.
pub fn is_month_token_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_month_token)
}

/// Renders a month token as abbreviated month + four-digit year.
/// Anything that is not a month token comes back unchanged.
pub fn format_month(s: &str) -> String {
    if !is_month_token(s) {
        return s.to_string();
    }

    // Formatting is display-only: never fail a render over it.
    match NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => s.to_string(),
    }
}

/// Display helper used by the renderer. Total: never fails for any value.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format_month(s),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_month_boundaries() {
        assert!(is_month_token("2020-01"));
        assert!(is_month_token("2020-09"));
        assert!(is_month_token("2020-10"));
        assert!(is_month_token("2020-12"));
    }

    #[test]
    fn test_rejects_out_of_grammar_tokens() {
        for bad in ["2020-00", "2020-13", "20-01", "2020-1", "2020-01-01", " 2020-01", "2020/01", ""] {
            assert!(!is_month_token(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_rejects_trailing_newline() {
        assert!(!is_month_token("2020-01\n"));
    }

    #[test]
    fn test_value_predicate_requires_string() {
        assert!(is_month_token_value(&json!("1999-07")));
        assert!(!is_month_token_value(&json!(202001)));
        assert!(!is_month_token_value(&Value::Null));
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2020-03"), "Mar 2020");
        assert_eq!(format_month("1987-12"), "Dec 1987");
    }

    #[test]
    fn test_format_passes_through_non_tokens() {
        assert_eq!(format_month("not-a-date"), "not-a-date");
        assert_eq!(format_month("2020-13"), "2020-13");
        assert_eq!(format_month(""), "");
    }

    #[test]
    fn test_format_value_non_strings() {
        assert_eq!(format_value(&json!("2021-06")), "Jun 2021");
        assert_eq!(format_value(&json!(40)), "40");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&Value::Null), "");
    }
}
