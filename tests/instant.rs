use caltime::{Instant, LocalDateTime, OffsetDateTime, ZoneOffset};


#[test]
fn seconds() {
    assert_eq!(Instant::at(3), Instant::at_nanos(3, 0).unwrap())
}

#[test]
fn nanoseconds() {
    assert_eq!(Instant::at_nanos(3, 333).unwrap().nanos(), 333)
}

#[test]
fn epoch() {
    assert_eq!(Instant::at_epoch().seconds(), 0)
}

#[test]
fn round_trip_through_an_offset() {
    let instant = Instant::at_nanos(1_234_567_890, 123_000_000).unwrap();
    let offset = ZoneOffset::of_hours(-8).unwrap();
    let dt = OffsetDateTime::of_instant(instant, offset).unwrap();

    assert_eq!(dt.local(), LocalDateTime::of(2009, 2, 13, 15, 31, 30, 123_000_000).unwrap());
    assert_eq!(dt.instant(), instant);
}

#[cfg(feature = "now")]
#[test]
fn sanity() {
    // Test that the system call has worked at all.
    // If this fails then you have gone back in time, or something?
    assert!(Instant::now().seconds() != 0)
}

#[cfg(feature = "now")]
#[test]
fn today() {
    let now = OffsetDateTime::now_utc();
    assert!(now.offset().is_utc());
    assert!(now.date() >= caltime::LocalDate::of(2020, 1, 1).unwrap());
    assert!(!caltime::LocalDate::today_utc().is_zero());
}
