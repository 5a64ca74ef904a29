use once_cell::sync::Lazy;

use regex::Regex;

use tracing::trace;

use crate::value::Value;

/// Greatest absolute latitude
pub const MAX_LATITUDE: f64 = 90_f64;
/// Greatest absolute longitude
pub const MAX_LONGITUDE: f64 = 180_f64;

static LEADING_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap());

/// Whitespace, byte order mark included
pub(crate) fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Parses the leading float of a string, ignoring whatever follows it
///
/// Leading whitespace is skipped, `"12.5km"` gives `12.5`, `"km"` gives `None`.
pub fn parse_float(s: &str) -> Option<f64> {
    let m = LEADING_FLOAT.find(s.trim_start_matches(is_blank))?;
    let number = m.as_str();
    match number.strip_suffix("Infinity") {
        Some("-") => Some(f64::NEG_INFINITY),
        Some(_) => Some(f64::INFINITY),
        None => number.parse().ok(),
    }
}

/// Normalizes a single scalar into a float
///
/// Numbers are returned as they are, strings go through [`parse_float`], anything else gives `None`.
/// NaN is never returned. Plain `&str` tokens can go straight to [`parse_float`], or be wrapped with
/// [`Value::from`].
pub fn parse_coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => Some(*n),
        Value::Text(s) => parse_float(s),
        Value::List(_) | Value::Other => None,
    }
    .filter(|n| !n.is_nan());
    if parsed.is_none() {
        trace!("can't parse coordinate from {:?}", value);
    }
    parsed
}

/// Checks that latitude and longitude fall inside geographic bounds
pub fn verify_lat_lng(lat: f64, lng: f64) -> bool {
    (-MAX_LATITUDE..=MAX_LATITUDE).contains(&lat) && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&lng)
}

#[cfg(test)]
mod tests {
    use super::{parse_coordinate, parse_float, verify_lat_lng};
    use crate::value::Value;

    #[test]
    fn leading_float() {
        assert_eq!(parse_float("34.1395597"), Some(34.1395597));
        assert_eq!(parse_float("  -118.3870991"), Some(-118.3870991));
        assert_eq!(parse_float("12.5km"), Some(12.5));
        assert_eq!(parse_float("1e3x"), Some(1000_f64));
        assert_eq!(parse_float("1e"), Some(1_f64));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5_f64));
        assert_eq!(parse_float("+7,8"), Some(7_f64));
        assert_eq!(parse_float("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("- 1"), None);
        assert_eq!(parse_float("NaN"), None);
        assert_eq!(parse_float("\u{FEFF}34.1"), Some(34.1));
        assert_eq!(parse_float("\u{FEFF} \t-118.3"), Some(-118.3));
    }

    #[test]
    fn coordinate() {
        assert_eq!(parse_coordinate(&Value::from("34.1395597")), Some(34.1395597));
        assert_eq!(parse_coordinate(&Value::from("abc")), None);
        assert_eq!(parse_coordinate(&Value::from(-118.25)), Some(-118.25));
        assert_eq!(parse_coordinate(&Value::from(f64::NAN)), None);
        assert_eq!(parse_coordinate(&Value::from(vec![1_f64, 2_f64])), None);
        assert_eq!(parse_coordinate(&Value::Other), None);
    }

    #[test]
    fn bounds() {
        assert!(!verify_lat_lng(91_f64, 0_f64));
        assert!(!verify_lat_lng(-91_f64, 0_f64));
        assert!(!verify_lat_lng(0_f64, 181_f64));
        assert!(!verify_lat_lng(0_f64, -180.5));
        assert!(verify_lat_lng(45_f64, -122_f64));
        assert!(verify_lat_lng(-90_f64, 180_f64));
        assert!(!verify_lat_lng(f64::NAN, 0_f64));
        assert!(!verify_lat_lng(0_f64, f64::INFINITY));
    }
}
