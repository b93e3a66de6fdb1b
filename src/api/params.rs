//! Query parameter parsing
//!
//! Year and threshold arrive as text. A parameter that is missing or empty
//! counts as absent. A present one is read like JavaScript's `parseInt`:
//! leading whitespace and an optional sign, then the leading run of decimal
//! digits. Anything after the digits is ignored (`2024abc` is 2024,
//! `5000000.5` is 5000000). Only a value with no leading digits is invalid.

use crate::api::error::{ApiError, ApiResult};
use crate::query::{ChartType, DEFAULT_YEAR};

/// A parameter's value if it is present and non-empty
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Leading integer of `s`, saturating at the bounds of `i64`
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let magnitude = rest.as_bytes()[..len].iter().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Year as an integer; out-of-range values clamp and then match no year
pub fn parse_year(s: &str) -> Option<i32> {
    leading_integer(s).map(|v| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

pub fn parse_threshold(s: &str) -> Option<i64> {
    leading_integer(s)
}

/// Year (required) and threshold (default 0)
pub fn required_year_and_threshold(
    year: &Option<String>,
    threshold: &Option<String>,
) -> ApiResult<(i32, i64)> {
    let year = present(year)
        .ok_or_else(|| ApiError::InvalidParameter("year parameter is required".to_string()))?;
    let year = parse_year(year)
        .ok_or_else(|| ApiError::InvalidParameter("Invalid year parameter".to_string()))?;

    Ok((year, optional_threshold(threshold)?))
}

/// Year (default [`DEFAULT_YEAR`]) and threshold (default 0)
pub fn defaulted_year_and_threshold(
    year: &Option<String>,
    threshold: &Option<String>,
) -> ApiResult<(i32, i64)> {
    let year = match present(year) {
        Some(s) => parse_year(s)
            .ok_or_else(|| ApiError::InvalidParameter("Invalid year parameter".to_string()))?,
        None => DEFAULT_YEAR,
    };

    Ok((year, optional_threshold(threshold)?))
}

fn optional_threshold(threshold: &Option<String>) -> ApiResult<i64> {
    match present(threshold) {
        Some(s) => parse_threshold(s)
            .ok_or_else(|| ApiError::InvalidParameter("Invalid threshold parameter".to_string())),
        None => Ok(0),
    }
}

/// Chart type, defaulting to bar
pub fn chart_type(value: &Option<String>) -> ApiResult<ChartType> {
    match present(value) {
        Some(s) => Ok(s.parse::<ChartType>()?),
        None => Ok(ChartType::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_present() {
        assert_eq!(present(&some("2024")), Some("2024"));
        assert_eq!(present(&some("")), None);
        assert_eq!(present(&None), None);
    }

    #[test]
    fn test_parse_reads_leading_integer() {
        assert_eq!(parse_year("2024"), Some(2024));
        assert_eq!(parse_year(" 2024 "), Some(2024));
        assert_eq!(parse_year("2024abc"), Some(2024));
        assert_eq!(parse_year("2024.0"), Some(2024));
        assert_eq!(parse_year("+2023"), Some(2023));
        assert_eq!(parse_threshold("-5"), Some(-5));
        assert_eq!(parse_threshold("5000000.5"), Some(5_000_000));
        assert_eq!(parse_threshold("1e6"), Some(1));
    }

    #[test]
    fn test_parse_without_digits_fails() {
        assert_eq!(parse_year("abc"), None);
        assert_eq!(parse_year("   "), None);
        assert_eq!(parse_year("-"), None);
        assert_eq!(parse_threshold(".5"), None);
        assert_eq!(parse_threshold("abc"), None);
    }

    #[test]
    fn test_parse_saturates_large_values() {
        assert_eq!(parse_threshold("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_threshold("-99999999999999999999"), Some(-i64::MAX));
        assert_eq!(parse_year("99999999999"), Some(i32::MAX));
        assert_eq!(parse_year("-99999999999"), Some(i32::MIN));
    }

    #[test]
    fn test_required_year() {
        assert_eq!(
            required_year_and_threshold(&some("2023"), &None).unwrap(),
            (2023, 0)
        );
        assert!(matches!(
            required_year_and_threshold(&None, &some("5")),
            Err(ApiError::InvalidParameter(_))
        ));
        assert!(matches!(
            required_year_and_threshold(&some("2023"), &some("x")),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_defaulted_year() {
        assert_eq!(
            defaulted_year_and_threshold(&None, &None).unwrap(),
            (DEFAULT_YEAR, 0)
        );
        assert_eq!(
            defaulted_year_and_threshold(&some("2022"), &some("100")).unwrap(),
            (2022, 100)
        );
    }

    #[test]
    fn test_chart_type() {
        assert_eq!(chart_type(&None).unwrap(), ChartType::Bar);
        assert_eq!(chart_type(&some("pie")).unwrap(), ChartType::Pie);
        assert!(matches!(
            chart_type(&some("radar")),
            Err(ApiError::InvalidParameter(_))
        ));
    }
}
