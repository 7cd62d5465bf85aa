//! ISO-8601 date and time calculations, which use years, months, days,
//! hours, minutes, and seconds.

pub mod gregorian;
pub(crate) mod year;
pub(crate) mod date;
pub(crate) mod time;
pub(crate) mod datetime;
pub(crate) mod offset;
pub(crate) mod fmt;
pub(crate) mod parse;

use self::year::{DayOfWeek, Month};


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
///
/// The zero value has no date. It reports year, day, and day of year as
/// 0, with January and Monday standing in for the month and weekday.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    /// The year before 1 is 0, and the one before that is -1.
    fn year(&self) -> i64;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> u8;

    /// The day of the year, from 1 to 366.
    fn day_of_year(&self) -> u16;

    /// The day of the week.
    fn day_of_week(&self) -> DayOfWeek;
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day, from 0 to 23.
    fn hour(&self) -> u8;

    /// The minute of the hour.
    fn minute(&self) -> u8;

    /// The second of the minute.
    fn second(&self) -> u8;

    /// The nanosecond of the second, from 0 to 999,999,999.
    fn nanosecond(&self) -> u32;
}
