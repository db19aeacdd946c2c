use chrono::{Local, NaiveDateTime, Timelike};

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[must_use]
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(date: &str) -> Result<NaiveDateTime, DateError> {
    NaiveDateTime::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| DateError::Invalid)
}

/// Current local time truncated to whole seconds, which is the resolution of the textual
/// representation.
#[must_use]
pub fn current_time() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DateError {
    #[error("Date must have the format YYYY-MM-DD HH:MM:SS")]
    Invalid,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(date(2025, 5, 15, 3, 4, 5), "2025-05-15 03:04:05")]
    #[case(date(2025, 12, 31, 23, 59, 59), "2025-12-31 23:59:59")]
    #[case(date(987, 1, 1, 0, 0, 0), "0987-01-01 00:00:00")]
    fn test_format_date(#[case] value: NaiveDateTime, #[case] expected: &str) {
        assert_eq!(format_date(&value), expected);
    }

    #[rstest]
    #[case("2025-05-15 15:30:00", Ok(date(2025, 5, 15, 15, 30, 0)))]
    #[case(" 2025-05-14 10:20:00 ", Ok(date(2025, 5, 14, 10, 20, 0)))]
    #[case("2025-05-14", Err(DateError::Invalid))]
    #[case("2025-02-30 10:20:00", Err(DateError::Invalid))]
    #[case("", Err(DateError::Invalid))]
    fn test_parse_date(#[case] value: &str, #[case] expected: Result<NaiveDateTime, DateError>) {
        assert_eq!(parse_date(value), expected);
    }

    #[test]
    fn test_current_time_has_no_subsecond_part() {
        assert_eq!(current_time().nanosecond(), 0);
        assert_eq!(
            parse_date(&format_date(&current_time()))
                .unwrap()
                .nanosecond(),
            0
        );
    }

    fn date(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }
}
