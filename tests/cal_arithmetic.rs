use caltime::{LocalDate, LocalDateTime, Error};


#[test]
fn addition() {
    let date = LocalDateTime::of(1970, 1, 1, 2, 46, 40, 0).unwrap();
    assert_eq!(LocalDateTime::of(1970, 1, 1, 2, 46, 41, 0).unwrap(), date.plus_seconds(1).unwrap());
}

#[test]
fn subtraction() {
    let date = LocalDateTime::of(1973, 3, 3, 9, 46, 40, 0).unwrap();
    assert_eq!(LocalDateTime::of(1973, 3, 3, 9, 46, 39, 0).unwrap(), date.minus_seconds(1).unwrap());
}

#[test]
fn end_of_month_clipping() {
    let date = LocalDate::of(2024, 1, 31).unwrap();
    assert_eq!(date.plus_months(1).unwrap(), LocalDate::of(2024, 2, 29).unwrap());
    assert_eq!(date.plus_months(2).unwrap(), LocalDate::of(2024, 3, 31).unwrap());
    assert_eq!(date.plus_months(1).unwrap().plus_months(1).unwrap(), LocalDate::of(2024, 3, 29).unwrap());
    assert_eq!(date.minus_months(2).unwrap(), LocalDate::of(2023, 11, 30).unwrap());
}

#[test]
fn weeks() {
    let date = LocalDate::of(2024, 12, 30).unwrap();
    assert_eq!(date.plus_weeks(1).unwrap(), LocalDate::of(2025, 1, 6).unwrap());
    assert_eq!(date.minus_weeks(52).unwrap(), LocalDate::of(2024, 1, 1).unwrap());
}

#[test]
fn days_across_the_epoch() {
    let date = LocalDate::of(1970, 1, 1).unwrap();
    assert_eq!(date.minus_days(1).unwrap(), LocalDate::of(1969, 12, 31).unwrap());
    assert_eq!(date.plus_days(-719_528).unwrap(), LocalDate::of(0, 1, 1).unwrap());
}

#[test]
fn overflow() {
    assert!(matches!(LocalDate::MAX.plus_months(1), Err(Error::Overflow { .. })));
    assert!(matches!(LocalDate::MIN.minus_years(1), Err(Error::Overflow { .. })));
    assert!(matches!(LocalDate::EPOCH.plus_years(i64::MAX), Err(Error::Overflow { .. })));
    assert!(matches!(LocalDate::EPOCH.minus_months(i64::MIN), Err(Error::Overflow { .. })));
}

#[test]
fn zero_passes_through() {
    let zero = LocalDateTime::default();
    assert_eq!(zero.plus_hours(5).unwrap(), zero);
    assert_eq!(zero.minus_years(5).unwrap(), zero);
}
