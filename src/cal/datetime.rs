//! Dates and times together, without an offset.

use crate::cal::date::LocalDate;
use crate::cal::offset::{OffsetDateTime, ZoneOffset};
use crate::cal::time::{LocalTime, HOURS_PER_DAY, MINUTES_PER_DAY, NANOS_PER_DAY,
                       NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND, SECONDS_PER_DAY};
use crate::cal::year::{DayOfWeek, Month};
use crate::cal::{DatePiece, TimePiece};
use crate::error::Error;
use crate::field::{unsupported, Field, Temporal, TemporalAccessor, TemporalValue};
use crate::util::{floor_div, floor_mod};


/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
///
/// Either both halves are set, or the whole value is the zero value.
/// Date-times compare by their date first, then their time.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}

impl LocalDateTime {

    /// Creates a new local date time from a local date and a local time.
    /// If either half is the zero value, so is the result.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        if date.is_zero() || time.is_zero() {
            return Self::default();
        }

        Self { date, time }
    }

    /// Creates a date-time from all seven of its components, checking
    /// each of them.
    pub fn of(year: i64, month: i64, day: i64,
              hour: i64, minute: i64, second: i64, nanosecond: i64) -> Result<Self, Error> {
        let date = LocalDate::of(year, month, day)?;
        let time = LocalTime::of(hour, minute, second, nanosecond)?;
        Ok(Self { date, time })
    }

    /// Like `of`, but panics if any component is invalid.
    pub fn must_of(year: i64, month: i64, day: i64,
                   hour: i64, minute: i64, second: i64, nanosecond: i64) -> Self {
        match Self::of(year, month, day, hour, minute, second, nanosecond) {
            Ok(dt)  => dt,
            Err(e)  => panic!("{}", e),
        }
    }

    /// Computes the local date-time seen at the given offset, at the given
    /// number of seconds (and nanoseconds) since **midnight, 1st January,
    /// 1970** UTC.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use caltime::{LocalDateTime, ZoneOffset};
    ///
    /// let offset = ZoneOffset::of_hours(2).unwrap();
    /// let dt = LocalDateTime::of_epoch_second(1_234_567_890, 0, offset).unwrap();
    /// assert_eq!(dt, LocalDateTime::of(2009, 2, 14, 1, 31, 30, 0).unwrap());
    /// ```
    pub fn of_epoch_second(epoch_second: i64, nanosecond: i64, offset: ZoneOffset) -> Result<Self, Error> {
        let nanosecond = Field::NanoOfSecond.check(nanosecond)?;

        let local_second = epoch_second.checked_add(offset.total_seconds() as i64)
                                       .ok_or_else(|| Error::overflow(Self::NAME, "of_epoch_second"))?;

        // Just split the input value into days and seconds, and let
        // LocalDate and LocalTime do all the hard work.
        let epoch_day = floor_div(local_second, SECONDS_PER_DAY);
        let second_of_day = floor_mod(local_second, SECONDS_PER_DAY);

        let date = LocalDate::of_epoch_day(epoch_day)
                             .map_err(|_| Error::overflow(Self::NAME, "of_epoch_second"))?;
        let time = LocalTime::of_nano_of_day(second_of_day * NANOS_PER_SECOND + nanosecond)?;
        Ok(Self { date, time })
    }

    /// Creates a new date-time stamp set to the current time in UTC.
    #[cfg(feature = "now")]
    pub fn now_utc() -> Self {
        let now = crate::instant::Instant::now();
        let epoch_day = floor_div(now.seconds(), SECONDS_PER_DAY);
        let nano_of_day = floor_mod(now.seconds(), SECONDS_PER_DAY) * NANOS_PER_SECOND + now.nanos() as i64;

        match LocalTime::of_nano_of_day(nano_of_day) {
            Ok(time) => Self { date: LocalDate::from_epoch_day_unchecked(epoch_day), time },
            Err(_)   => Self::default(),
        }
    }

    /// Whether this is the zero value.
    pub fn is_zero(&self) -> bool {
        self.date.is_zero()
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// The number of seconds since **midnight, 1st January, 1970** UTC at
    /// which this date-time is seen at the given offset. The zero value
    /// gives zero.
    pub fn to_epoch_second(&self, offset: ZoneOffset) -> i64 {
        if self.is_zero() {
            return 0;
        }

        self.date.epoch_day() * SECONDS_PER_DAY + self.time.to_second_of_day() - offset.total_seconds() as i64
    }

    /// Pairs this date-time with an offset.
    pub fn at_offset(&self, offset: ZoneOffset) -> OffsetDateTime {
        OffsetDateTime::of(*self, offset)
    }

    fn with_date(&self, date: LocalDate) -> Self {
        Self { date, time: self.time }
    }


    // ---- arithmetic on the date ----

    pub fn plus_days(&self, days: i64) -> Result<Self, Error> {
        self.date.plus_days(days).map(|d| self.with_date(d))
    }

    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, Error> {
        self.date.plus_weeks(weeks).map(|d| self.with_date(d))
    }

    pub fn plus_months(&self, months: i64) -> Result<Self, Error> {
        self.date.plus_months(months).map(|d| self.with_date(d))
    }

    pub fn plus_years(&self, years: i64) -> Result<Self, Error> {
        self.date.plus_years(years).map(|d| self.with_date(d))
    }

    pub fn minus_days(&self, days: i64) -> Result<Self, Error> {
        self.date.minus_days(days).map(|d| self.with_date(d))
    }

    pub fn minus_weeks(&self, weeks: i64) -> Result<Self, Error> {
        self.date.minus_weeks(weeks).map(|d| self.with_date(d))
    }

    pub fn minus_months(&self, months: i64) -> Result<Self, Error> {
        self.date.minus_months(months).map(|d| self.with_date(d))
    }

    pub fn minus_years(&self, years: i64) -> Result<Self, Error> {
        self.date.minus_years(years).map(|d| self.with_date(d))
    }


    // ---- arithmetic on the time ----
    //
    // Unlike on a LocalTime, running past midnight moves the date.

    /// Returns the date-time the given number of hours later, moving on to
    /// the next day (or days) as necessary.
    ///
    /// ```rust
    /// use caltime::LocalDateTime;
    ///
    /// let dt = LocalDateTime::of(2023, 12, 31, 22, 0, 0, 0).unwrap();
    /// assert_eq!(dt.plus_hours(3).unwrap(), LocalDateTime::of(2024, 1, 1, 1, 0, 0, 0).unwrap());
    /// ```
    pub fn plus_hours(&self, hours: i64) -> Result<Self, Error> {
        self.plus_with_overflow(hours, 0, 0, 0, 1, "plus_hours")
    }

    pub fn plus_minutes(&self, minutes: i64) -> Result<Self, Error> {
        self.plus_with_overflow(0, minutes, 0, 0, 1, "plus_minutes")
    }

    pub fn plus_seconds(&self, seconds: i64) -> Result<Self, Error> {
        self.plus_with_overflow(0, 0, seconds, 0, 1, "plus_seconds")
    }

    pub fn plus_nanos(&self, nanos: i64) -> Result<Self, Error> {
        self.plus_with_overflow(0, 0, 0, nanos, 1, "plus_nanos")
    }

    pub fn minus_hours(&self, hours: i64) -> Result<Self, Error> {
        self.plus_with_overflow(hours, 0, 0, 0, -1, "minus_hours")
    }

    pub fn minus_minutes(&self, minutes: i64) -> Result<Self, Error> {
        self.plus_with_overflow(0, minutes, 0, 0, -1, "minus_minutes")
    }

    pub fn minus_seconds(&self, seconds: i64) -> Result<Self, Error> {
        self.plus_with_overflow(0, 0, seconds, 0, -1, "minus_seconds")
    }

    pub fn minus_nanos(&self, nanos: i64) -> Result<Self, Error> {
        self.plus_with_overflow(0, 0, 0, nanos, -1, "minus_nanos")
    }

    /// Adds (when `sign` is 1) or subtracts (when it’s -1) the given
    /// amounts of time, carrying whole days over into the date.
    ///
    /// Each amount is split into whole days and a remainder of less than
    /// a day before anything is multiplied, so no step can overflow, even
    /// for `i64::MIN`.
    fn plus_with_overflow(&self, hours: i64, minutes: i64, seconds: i64, nanos: i64,
                          sign: i64, operation: &'static str) -> Result<Self, Error> {
        if (hours | minutes | seconds | nanos) == 0 || self.is_zero() {
            return Ok(*self);
        }

        let mut total_days = nanos / NANOS_PER_DAY
                           + seconds / SECONDS_PER_DAY
                           + minutes / MINUTES_PER_DAY
                           + hours / HOURS_PER_DAY;
        total_days *= sign;

        let mut total_nanos = nanos % NANOS_PER_DAY
                            + (seconds % SECONDS_PER_DAY) * NANOS_PER_SECOND
                            + (minutes % MINUTES_PER_DAY) * NANOS_PER_MINUTE
                            + (hours % HOURS_PER_DAY) * NANOS_PER_HOUR;
        total_nanos = total_nanos * sign + self.time.to_nano_of_day();

        total_days += floor_div(total_nanos, NANOS_PER_DAY);
        let nano_of_day = floor_mod(total_nanos, NANOS_PER_DAY);

        let date = self.date.plus_days(total_days).map_err(|_| Error::overflow(Self::NAME, operation))?;
        let time = LocalTime::of_nano_of_day(nano_of_day)?;
        Ok(Self { date, time })
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.year() }
    fn month(&self) -> Month { self.date.month() }
    fn day(&self) -> u8 { self.date.day() }
    fn day_of_year(&self) -> u16 { self.date.day_of_year() }
    fn day_of_week(&self) -> DayOfWeek { self.date.day_of_week() }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> u8 { self.time.hour() }
    fn minute(&self) -> u8 { self.time.minute() }
    fn second(&self) -> u8 { self.time.second() }
    fn nanosecond(&self) -> u32 { self.time.nanosecond() }
}

impl TemporalAccessor for LocalDateTime {
    const NAME: &'static str = "LocalDateTime";

    fn is_zero(&self) -> bool {
        LocalDateTime::is_zero(self)
    }

    fn is_supported_field(&self, field: Field) -> bool {
        field.is_date_based() || field.is_time_based()
    }

    fn get_field(&self, field: Field) -> TemporalValue {
        if field.is_time_based() {
            self.time.get_field(field)
        }
        else {
            self.date.get_field(field)
        }
    }
}

impl Temporal for LocalDateTime {
    fn with_field(&self, field: Field, value: i64) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(unsupported::<Self>(field));
        }

        if field.is_time_based() {
            let time = self.time.with_field(field, value)?;
            Ok(Self { date: self.date, time })
        }
        else if field.is_date_based() {
            let date = self.date.with_field(field, value)?;
            Ok(Self { date, time: self.time })
        }
        else {
            Err(unsupported::<Self>(field))
        }
    }
}
