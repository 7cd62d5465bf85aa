use caltime::{gregorian, Year};


#[test]
fn year_1600() {
    assert!(Year(1600).is_leap());
}

#[test]
fn year_1900() {
    assert!(Year(1900).is_leap() == false);
}

#[test]
fn year_2000() {
    assert!(Year(2000).is_leap());
}

#[test]
fn year_2038() {
    assert!(Year(2038).is_leap() == false);
}

#[test]
fn year_zero_and_before() {
    assert!(Year(0).is_leap());
    assert!(Year(-4).is_leap());
    assert!(!Year(-1).is_leap());
    assert!(!Year(-100).is_leap());
}

#[test]
fn ninety_seven_in_every_four_hundred() {
    for start in [-2000, -399, 0, 1, 1583, 1970, 2024].iter() {
        let count = (*start .. start + 400).filter(|y| gregorian::is_leap(*y)).count();
        assert_eq!(count, 97, "starting from {}", start);
    }
}

#[test]
fn lengths() {
    assert_eq!(Year(2023).length(), 365);
    assert_eq!(Year(2024).length(), 366);
}
