use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    static ref DURATION_REGEX: Regex =
        Regex::new(r"^(?P<value>\d+)(?P<unit>[smh])?$").unwrap();
}

// Converts a duration token like "10s", "5m" or "2h" into seconds. A token
// without a unit suffix is treated as bare seconds. The parser doesn't do
// any range validation: "0" parses fine and gets rejected later by the
// GiveawaySpec constructor.
pub fn parse_duration(token: &str) -> Result<u64> {
    let captures = match DURATION_REGEX.captures(token.trim()) {
        Some(captures) => captures,
        None => {
            let message = "Invalid duration format. Use '10s', '5m', or '2h'.".to_string();
            return Err(Error::InvalidFormat(message));
        }
    };

    let value = captures
        .name("value")
        .unwrap()
        .as_str()
        .parse::<u64>()
        .map_err(|_| {
            let message = "Invalid duration format. The value is too big.".to_string();
            Error::InvalidFormat(message)
        })?;

    let multiplier = match captures.name("unit").map(|unit| unit.as_str()) {
        Some("s") | None => 1,
        Some("m") => 60,
        Some("h") => 3600,
        Some(_) => unreachable!(),
    };

    value.checked_mul(multiplier).ok_or_else(|| {
        let message = "Invalid duration format. The value is too big.".to_string();
        Error::InvalidFormat(message)
    })
}

#[cfg(test)]
mod tests {
    use crate::commands::giveaway::parser::parse_duration;
    use crate::error::Error;

    #[test]
    fn test_parse_duration_in_seconds() {
        assert_eq!(parse_duration("10s").unwrap(), 10);
    }

    #[test]
    fn test_parse_duration_in_minutes() {
        assert_eq!(parse_duration("5m").unwrap(), 300);
    }

    #[test]
    fn test_parse_duration_in_hours() {
        assert_eq!(parse_duration("2h").unwrap(), 7200);
    }

    #[test]
    fn test_parse_duration_without_unit_defaults_to_seconds() {
        assert_eq!(parse_duration("7").unwrap(), 7);
    }

    #[test]
    fn test_parse_duration_with_surrounding_whitespace() {
        assert_eq!(parse_duration(" 30s ").unwrap(), 30);
    }

    #[test]
    fn test_parse_zero_is_not_a_parser_concern() {
        assert_eq!(parse_duration("0").unwrap(), 0);
        assert_eq!(parse_duration("0m").unwrap(), 0);
    }

    #[test]
    fn test_get_error_for_raw_text() {
        let result = parse_duration("abc");

        assert_eq!(result.is_err(), true);
        assert_eq!(
            result.unwrap_err(),
            Error::InvalidFormat("Invalid duration format. Use '10s', '5m', or '2h'.".to_string())
        );
    }

    #[test]
    fn test_get_error_for_unknown_unit() {
        let result = parse_duration("10d");

        assert_eq!(result.is_err(), true);
    }

    #[test]
    fn test_get_error_for_negative_value() {
        let result = parse_duration("-5s");

        assert_eq!(result.is_err(), true);
    }

    #[test]
    fn test_get_error_for_empty_token() {
        let result = parse_duration("");

        assert_eq!(result.is_err(), true);
    }

    #[test]
    fn test_get_error_for_inner_whitespace() {
        let result = parse_duration("5 m");

        assert_eq!(result.is_err(), true);
    }

    #[test]
    fn test_get_error_for_overflowing_value() {
        let result = parse_duration("99999999999999999999s");

        assert_eq!(result.is_err(), true);
        assert_eq!(
            result.unwrap_err(),
            Error::InvalidFormat("Invalid duration format. The value is too big.".to_string())
        );
    }
}
