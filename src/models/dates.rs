//! Date and timestamp formats used in records, CSV files and report names

use chrono::{Local, NaiveDate};

use crate::error::{AssistantError, AssistantResult};

/// Format of finance dates, task due dates and report boundaries
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Format of note timestamps
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Parse a `DD-MM-YYYY` date, rejecting impossible calendar dates
pub fn parse_date(s: &str) -> AssistantResult<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
        AssistantError::Format(format!("Invalid date '{}': expected DD-MM-YYYY", s))
    })
}

/// Today's local date as `DD-MM-YYYY`
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// The current local time as `DD-MM-YYYY HH:MM:SS`
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_date("31-01-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }

    #[test]
    fn test_parse_rejects_invalid_day_of_month() {
        let err = parse_date("31-02-2024").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_parse_rejects_other_layouts() {
        assert!(parse_date("2024-01-31").is_err());
        assert!(parse_date("31/01/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_today_round_trips() {
        assert!(parse_date(&today()).is_ok());
        assert_eq!(now_timestamp().len(), 19);
    }
}
