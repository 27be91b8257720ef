#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use worknorm::libs::formatter::{format_duration, format_timestamp, parse_duration, FormatError};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(&Duration::minutes(30)), "00:30");
        assert_eq!(format_duration(&Duration::minutes(59)), "00:59");
        assert_eq!(format_duration(&Duration::minutes(1)), "00:01");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&(Duration::hours(1) + Duration::minutes(30))), "01:30");
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(45))), "08:45");
        assert_eq!(format_duration(&Duration::hours(24)), "24:00");
        assert_eq!(format_duration(&Duration::hours(100)), "100:00");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
        assert_eq!(format_duration(&Duration::hours(-5)), "00:00");
    }

    #[test]
    fn test_format_duration_seconds_dropped() {
        assert_eq!(format_duration(&(Duration::minutes(30) + Duration::seconds(59))), "00:30");
        assert_eq!(format_duration(&Duration::seconds(3661)), "01:01");
    }

    #[test]
    fn test_format_timestamp() {
        let timestamp = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(8, 5, 59).unwrap();
        assert_eq!(format_timestamp(&timestamp), "2026-01-01 08:05");
    }

    #[test]
    fn test_parse_duration_clock_form() {
        assert_eq!(parse_duration("02:30").unwrap(), Duration::minutes(150));
        assert_eq!(parse_duration("0:45").unwrap(), Duration::minutes(45));
        assert_eq!(parse_duration("24:00").unwrap(), Duration::hours(24));
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("2h").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration("90m").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("45s").unwrap(), Duration::seconds(45));
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("1H30M").unwrap(), Duration::minutes(90));
    }

    #[test]
    fn test_parse_duration_bare_minutes() {
        assert_eq!(parse_duration("120").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration(" 15 ").unwrap(), Duration::minutes(15));
    }

    #[test]
    fn test_parse_duration_zero_and_negative() {
        assert_eq!(parse_duration("0").unwrap(), Duration::zero());
        assert_eq!(parse_duration("-1h").unwrap(), Duration::hours(-1));
        assert_eq!(parse_duration("-01:30").unwrap(), Duration::minutes(-90));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        for input in ["", " ", "-", "h", "2x", "2h30", "1:60", "a:10", "1:xx", "--2h"] {
            assert_eq!(
                parse_duration(input),
                Err(FormatError::InvalidDuration(input.to_string())),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_duration_overflow() {
        assert!(parse_duration("99999999999999999h").is_err());
    }

    #[test]
    fn test_parse_then_format() {
        assert_eq!(format_duration(&parse_duration("1h5m").unwrap()), "01:05");
    }
}
