use caltime::{LocalDate, Month, DatePiece, Error, Field};


#[test]
fn the_distant_past() {
    let date = LocalDate::of(7, 4, 1).unwrap();

    assert_eq!(date.year(),  7);
    assert_eq!(date.month(), Month::April);
    assert_eq!(date.day(),   1);
}


#[test]
fn the_distant_present() {
    let date = LocalDate::of(2015, 1, 16).unwrap();

    assert_eq!(date.year(),  2015);
    assert_eq!(date.month(), Month::January);
    assert_eq!(date.day(),   16);
}


#[test]
fn the_distant_future() {
    let date = LocalDate::of(1048576, 10, 13).unwrap();

    assert_eq!(date.year(), 1048576);
    assert_eq!(date.month(), Month::October);
    assert_eq!(date.day(), 13);
}


#[test]
fn the_limits() {
    assert_eq!(LocalDate::of(999_999_999, 12, 31).unwrap(), LocalDate::MAX);
    assert_eq!(LocalDate::of(-999_999_999, 1, 1).unwrap(), LocalDate::MIN);
    assert!(matches!(LocalDate::of(-1_000_000_000, 1, 1),
                     Err(Error::FieldOutOfRange { field: Field::Year, .. })));
}


#[test]
#[should_panic]
fn must_of_panics() {
    let _ = LocalDate::must_of(2023, 2, 29);
}
