//! Proleptic Gregorian calendar arithmetic.
//!
//! These are the pure functions every value type is built on: the leap
//! year rule, month lengths, and the conversion between a year-month-day
//! triple and a count of days since the Unix epoch. They don’t validate
//! their input; callers check the month and day first.

use crate::util::{floor_div, floor_mod};


/// The earliest year that can be represented.
pub const MIN_YEAR: i64 = -999_999_999;

/// The latest year that can be represented.
pub const MAX_YEAR: i64 = 999_999_999;

/// Number of days in a complete 400-year cycle of the Gregorian calendar.
pub(crate) const DAYS_PER_CYCLE: i64 = 365 * 400 + 97;

/// Number of days between **1st January, year 0** and **1st January,
/// 1970**: five 400-year cycles take us to the year 2000, and then we
/// come back thirty years, seven of which were leap years.
pub(crate) const DAYS_0000_TO_1970: i64 = DAYS_PER_CYCLE * 5 - (30 * 365 + 7);

/// The epoch day of **1st January** in `MIN_YEAR`.
pub const MIN_EPOCH_DAY: i64 = to_epoch_day(MIN_YEAR, 1, 1);

/// The epoch day of **31st December** in `MAX_YEAR`.
pub const MAX_EPOCH_DAY: i64 = to_epoch_day(MAX_YEAR, 12, 31);

/// Day-of-year of the first day of each month in a common year.
const FIRST_DAY_OF_YEAR: [u16; 12] = [
      1,  32,  60,
     91, 121, 152,
    182, 213, 244,
    274, 305, 335,
];


/// Returns whether the given year is a leap year: divisible by four,
/// except for centuries that aren’t divisible by four hundred.
pub const fn is_leap(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month (1 to 12). Zero is
/// returned for a month outside that range.
pub const fn month_length(month: u8, leap: bool) -> u8 {
    match month {
        2                      => if leap { 29 } else { 28 },
        4 | 6 | 9 | 11         => 30,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _                      => 0,
    }
}

/// Returns the day-of-year (1-based) of the first day of the given month.
/// Months outside 1 to 12 wrap around rather than panic.
pub const fn first_day_of_year(month: u8, leap: bool) -> u16 {
    let day = FIRST_DAY_OF_YEAR[(month as usize + 11) % 12];
    if leap && month > 2 { day + 1 } else { day }
}

/// Returns the number of days in the given year.
pub const fn year_length(year: i64) -> u16 {
    if is_leap(year) { 366 } else { 365 }
}

/// Converts a year, month, and day into the number of days since
/// **1st January, 1970**, which is day zero.
pub const fn to_epoch_day(year: i64, month: u8, day: u8) -> i64 {
    let y = year;
    let m = month as i64;

    let mut total = 365 * y;
    if y >= 0 {
        total += (y + 3) / 4 - (y + 99) / 100 + (y + 399) / 400;
    }
    else {
        total -= (-y) / 4 - (-y) / 100 + (-y) / 400;
    }

    total += (367 * m - 362) / 12;
    total += day as i64 - 1;

    // The month formula above treats February as if it had 30 days.
    if m > 2 {
        total -= 1;
        if !is_leap(y) {
            total -= 1;
        }
    }

    total - DAYS_0000_TO_1970
}

/// Converts a number of days since **1st January, 1970** back into a
/// year, month, and day.
///
/// The calculation works in a calendar whose years start on the 1st of
/// March, so that the leap day falls at the very end of the year and the
/// length of every month before it is fixed.
pub const fn from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    // Days since 0000-03-01.
    let mut zero_day = epoch_day + DAYS_0000_TO_1970 - 60;

    // Shift negative days into the positive range a whole number of
    // 400-year cycles at a time.
    let mut adjust = 0;
    if zero_day < 0 {
        let adjust_cycles = floor_div(zero_day + 1, DAYS_PER_CYCLE) - 1;
        adjust = adjust_cycles * 400;
        zero_day -= adjust_cycles * DAYS_PER_CYCLE;
    }

    let mut year_est = (400 * zero_day + 591) / DAYS_PER_CYCLE;
    let mut doy_est = zero_day - days_before_march_year(year_est);
    if doy_est < 0 {
        year_est -= 1;
        doy_est = zero_day - days_before_march_year(year_est);
    }
    year_est += adjust;

    // March is month zero here, and January and February are months ten
    // and eleven of the previous March-based year.
    let march_month0 = (doy_est * 5 + 2) / 153;
    let month = floor_mod(march_month0 + 2, 12) + 1;
    let day = doy_est - (march_month0 * 306 + 5) / 10 + 1;
    year_est += march_month0 / 10;

    (year_est, month as u8, day as u8)
}

/// Days from 0000-03-01 to the 1st of March of the given (non-negative)
/// March-based year.
const fn days_before_march_year(year: i64) -> i64 {
    365 * year + year / 4 - year / 100 + year / 400
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn epoch_difference() {
        assert_eq!(DAYS_0000_TO_1970, 719_528);
    }

    #[test]
    fn epoch_is_zero() {
        assert_eq!(to_epoch_day(1970, 1, 1), 0);
        assert_eq!(from_epoch_day(0), (1970, 1, 1));
    }

    #[test]
    fn some_epoch_days() {
        assert_eq!(to_epoch_day(2024, 3, 15), 19_797);
        assert_eq!(to_epoch_day(1969, 12, 31), -1);
        assert_eq!(to_epoch_day(2000, 3, 1), 11_017);
        assert_eq!(to_epoch_day(0, 1, 1), -719_528);
    }

    #[test]
    fn year_limits() {
        assert_eq!(MIN_EPOCH_DAY, -365_243_219_162);
        assert_eq!(MAX_EPOCH_DAY, 365_241_780_471);
        assert_eq!(from_epoch_day(MIN_EPOCH_DAY), (MIN_YEAR, 1, 1));
        assert_eq!(from_epoch_day(MAX_EPOCH_DAY), (MAX_YEAR, 12, 31));
    }

    #[test]
    fn negative_years() {
        for &(y, m, d) in [(-1, 12, 31), (-1, 1, 1), (-400, 2, 29), (-753, 12, 1), (-4713, 11, 24)].iter() {
            assert_eq!(from_epoch_day(to_epoch_day(y, m, d)), (y, m, d));
        }
    }

    #[test]
    fn consecutive_days() {
        let mut previous = to_epoch_day(1599, 12, 31);
        for year in 1600 .. 2401 {
            let leap = is_leap(year);
            for month in 1 ..= 12 {
                for day in 1 ..= month_length(month, leap) {
                    let epoch_day = to_epoch_day(year, month, day);
                    assert_eq!(epoch_day, previous + 1);
                    assert_eq!(from_epoch_day(epoch_day), (year, month, day));
                    previous = epoch_day;
                }
            }
        }
    }

    #[test]
    fn leap_rule() {
        assert!(is_leap(2000));
        assert!(is_leap(2024));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
        assert!(is_leap(0));
        assert!(is_leap(-4));
        assert!(!is_leap(-100));
        assert!(is_leap(-400));
    }

    #[test]
    fn first_days() {
        assert_eq!(first_day_of_year(1, true), 1);
        assert_eq!(first_day_of_year(2, true), 32);
        assert_eq!(first_day_of_year(3, false), 60);
        assert_eq!(first_day_of_year(3, true), 61);
        assert_eq!(first_day_of_year(12, true), 336);
    }

    #[test]
    fn month_lengths() {
        let common: u32 = (1 ..= 12).map(|m| month_length(m, false) as u32).sum();
        let leap: u32 = (1 ..= 12).map(|m| month_length(m, true) as u32).sum();
        assert_eq!(common, 365);
        assert_eq!(leap, 366);
        assert_eq!(month_length(13, false), 0);
    }
}
