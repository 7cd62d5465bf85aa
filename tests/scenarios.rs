use caltime::{parse_offset_date_time, DatePiece, DayOfWeek, LocalDate, LocalTime, ZoneOffset};


#[test]
fn end_of_month_clips_into_a_leap_february() {
    let date = LocalDate::of(2024, 1, 31).unwrap();
    assert_eq!(date.plus_months(1).unwrap().to_string(), "2024-02-29");
}

#[test]
fn clipping_is_not_sticky() {
    let date = LocalDate::of(2024, 1, 31).unwrap();
    assert_eq!(date.plus_months(2).unwrap().to_string(), "2024-03-31");
}

#[test]
fn tenths_of_a_second_emit_three_digits() {
    let time = LocalTime::of(14, 30, 45, 100_000_000).unwrap();
    assert_eq!(time.to_string(), "14:30:45.100");
}

#[test]
fn every_nanosecond_digit() {
    let time = LocalTime::of(14, 30, 45, 123_456_789).unwrap();
    assert_eq!(time.to_string(), "14:30:45.123456789");
}

#[test]
fn same_instant_in_utc() {
    let dt = parse_offset_date_time("2024-03-15T14:30:45+09:00").unwrap();
    let utc = dt.with_offset_same_instant(ZoneOffset::UTC).unwrap();
    assert_eq!(utc.to_string(), "2024-03-15T05:30:45Z");
    assert!(utc.is_equal(&dt));
    assert_ne!(utc, dt);
}

#[test]
fn calendar_queries() {
    let date = LocalDate::of(2024, 3, 15).unwrap();
    assert_eq!(date.day_of_week(), DayOfWeek::Friday);
    assert_eq!(LocalDate::of(1970, 1, 1).unwrap().day_of_week(), DayOfWeek::Thursday);
    assert_eq!(date.day_of_year(), 75);
    assert_eq!(date.epoch_day(), 19797);
}
