use anyhow::{Context, Result};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Parses an event date, tolerating a full ISO timestamp by truncating at the
/// time separator. Event dates are calendar dates with no timezone attached.
pub fn parse_event_date(value: &str) -> Result<Date> {
    let date_only = value.split('T').next().unwrap_or(value).trim();
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(date_only, &format)
        .with_context(|| format!("failed to parse event date '{}'", value))
}

/// `YYYY-MM-DD`, suitable for date input fields and storage.
pub fn to_input_string(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Long display form, e.g. "Wednesday, December 31, 2025".
pub fn format_display_date(value: &str) -> Result<String> {
    let date = parse_event_date(value)?;
    Ok(format!(
        "{}, {} {}, {}",
        date.weekday(),
        date.month(),
        date.day(),
        date.year()
    ))
}

/// Short display form, e.g. "Dec 31, 2025".
pub fn format_short_date(value: &str) -> Result<String> {
    let date = parse_event_date(value)?;
    let month = date.month().to_string();
    let abbrev = &month[..3];
    Ok(format!("{} {}, {}", abbrev, date.day(), date.year()))
}

/// Whether the event date is strictly before `today`.
pub fn is_in_past(value: &str, today: Date) -> Result<bool> {
    Ok(parse_event_date(value)? < today)
}

pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_plain_and_timestamped_dates() {
        assert_eq!(parse_event_date("2025-12-31").unwrap(), date!(2025 - 12 - 31));
        assert_eq!(
            parse_event_date("2025-12-31T18:00:00Z").unwrap(),
            date!(2025 - 12 - 31)
        );
        assert!(parse_event_date("next friday").is_err());
    }

    #[test]
    fn input_string_round_trips() {
        let parsed = parse_event_date("2026-01-05").unwrap();
        assert_eq!(to_input_string(parsed), "2026-01-05");
    }

    #[test]
    fn display_formats() {
        assert_eq!(
            format_display_date("2025-12-31").unwrap(),
            "Wednesday, December 31, 2025"
        );
        assert_eq!(format_short_date("2025-12-31").unwrap(), "Dec 31, 2025");
    }

    #[test]
    fn past_check_is_strict() {
        let today = date!(2026 - 08 - 29);
        assert!(is_in_past("2026-08-28", today).unwrap());
        assert!(!is_in_past("2026-08-29", today).unwrap());
        assert!(!is_in_past("2026-08-30", today).unwrap());
    }
}
