//! Amount parsing and the local-currency estimate
//!
//! Amounts are typed as decimal text and become `f64` only when the draft is
//! submitted. Text that does not parse to a finite number is rejected rather
//! than coerced.

use crate::error::{LedgerError, LedgerResult};

/// Parse decimal text into a finite number
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the required transaction amount; must be greater than zero
pub fn parse_positive_amount(text: &str) -> Option<f64> {
    parse_amount(text).filter(|v| *v > 0.0)
}

/// Parse an optional non-negative field: empty text means "not provided"
pub fn parse_optional_amount(text: &str, field: &str) -> LedgerResult<Option<f64>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_amount(text)
        .filter(|v| *v >= 0.0)
        .map(Some)
        .ok_or_else(|| LedgerError::validation(format!("Invalid {} amount", field)))
}

/// Estimated display-currency value of the typed amount, as whole units
///
/// Returns `"0"` when nothing parseable has been typed or the product
/// overflows. Halves round away from zero.
pub fn estimate_local(amount_text: &str, exchange_rate: f64) -> String {
    match parse_amount(amount_text).map(|amount| (amount * exchange_rate).round()) {
        // -0 would otherwise print as "-0"
        Some(converted) if converted.is_finite() => format!("{:.0}", converted + 0.0),
        _ => "0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(" 7 "), Some(7.0));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1.2.3"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("0"), None);
        assert_eq!(parse_positive_amount("-4"), None);
        assert_eq!(parse_positive_amount("0.01"), Some(0.01));
    }

    #[test]
    fn test_parse_optional_amount() {
        assert_eq!(parse_optional_amount("", "tax").unwrap(), None);
        assert_eq!(parse_optional_amount("  ", "tax").unwrap(), None);
        assert_eq!(parse_optional_amount("310.40", "tax").unwrap(), Some(310.4));
        assert_eq!(parse_optional_amount("0", "tax").unwrap(), Some(0.0));
        assert!(parse_optional_amount("-5", "tax").is_err());
        let err = parse_optional_amount("1..", "superannuation").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Invalid superannuation amount");
    }

    #[test]
    fn test_estimate_local() {
        assert_eq!(estimate_local("", 21.0), "0");
        assert_eq!(estimate_local("oops", 21.0), "0");
        assert_eq!(estimate_local("10", 21.0), "210");
        assert_eq!(estimate_local("12.34", 20.0), "247");
        assert_eq!(estimate_local("0.5", 5.0), "3");
    }

    #[test]
    fn test_estimate_local_overflow() {
        let huge = format!("1{}", "0".repeat(307));
        assert!(parse_amount(&huge).is_some());
        assert_eq!(estimate_local(&huge, 21.0), "0");
    }
}
