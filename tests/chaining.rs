use caltime::{Chain, Error, Field, LocalDate, LocalDateTime, OffsetDateTime, YearMonth, ZoneOffset};


#[test]
fn a_month_and_a_day() {
    let date = LocalDate::of(2024, 1, 31).unwrap()
        .chain()
        .plus_months(1)
        .plus_days(1)
        .get_result();
    assert_eq!(date, Ok(LocalDate::of(2024, 3, 1).unwrap()));
}

#[test]
fn first_error_is_kept() {
    let chain = LocalDateTime::of(2024, 3, 15, 0, 0, 0, 0).unwrap()
        .chain()
        .plus_years(1_000_000_000)
        .with_field(Field::MonthOfYear, 13);

    let error = chain.get_error().unwrap();
    assert_eq!(error.component, "LocalDateTime");
    assert_eq!(error.operation, "plus_years");
    assert!(matches!(error.source, Error::Overflow { .. }));
}

#[test]
fn fallback() {
    let fallback = YearMonth::of(2000, 1).unwrap();
    let ym = YearMonth::of(2024, 3).unwrap().chain().minus_years(i64::MAX).get_or_else(fallback);
    assert_eq!(ym, fallback);
}

#[test]
fn chains_from_values() {
    let chain: Chain<ZoneOffset> = ZoneOffset::UTC.into();
    assert_eq!(chain.with_offset_seconds(3600).must_get(), ZoneOffset::of_hours(1).unwrap());
}

#[test]
fn bad_offsets_latch() {
    let chain = ZoneOffset::UTC.chain().with_offset_seconds(100_000).with_offset_seconds(0);
    assert!(chain.is_err());
    assert_eq!(chain.get_error().unwrap().operation, "with_offset_seconds");
}

#[test]
fn offset_date_times() {
    let dt: OffsetDateTime = "2024-12-31T23:00:00-01:00".parse().unwrap();
    let dt = dt.chain()
        .to_utc()
        .plus_hours(1)
        .must_get();
    assert_eq!(dt.to_string(), "2025-01-01T01:00:00Z");
}

#[test]
#[should_panic(expected = "LocalDate.with_month")]
fn must_get_panics_with_the_error() {
    let _ = LocalDate::EPOCH.chain().with_month(0).must_get();
}
