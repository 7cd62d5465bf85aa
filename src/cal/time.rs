//! Times of day without a date or an offset.

use crate::cal::date::LocalDate;
use crate::cal::datetime::LocalDateTime;
use crate::cal::TimePiece;
use crate::error::Error;
use crate::field::{unsupported, Field, Temporal, TemporalAccessor, TemporalValue};


pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const MINUTES_PER_HOUR: i64 = 60;
pub(crate) const MINUTES_PER_DAY: i64 = MINUTES_PER_HOUR * HOURS_PER_DAY;
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
pub(crate) const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * HOURS_PER_DAY;
pub(crate) const NANOS_PER_MICRO: i64 = 1_000;
pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MINUTE: i64 = NANOS_PER_SECOND * SECONDS_PER_MINUTE;
pub(crate) const NANOS_PER_HOUR: i64 = NANOS_PER_MINUTE * MINUTES_PER_HOUR;
pub(crate) const NANOS_PER_DAY: i64 = NANOS_PER_HOUR * HOURS_PER_DAY;

/// Set on every real time, so that midnight is distinct from the zero
/// value.
const VALID: u64 = 1 << 63;


/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*, with nanosecond precision.
///
/// Internally this is the number of nanoseconds since midnight, with the
/// top bit set to mark the value as valid. The zero value (what `Default`
/// returns) has that bit clear, so it is distinct from midnight and sorts
/// before every real time.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct LocalTime {
    bits: u64,
}

impl LocalTime {

    /// Midnight, at the start of the day.
    pub const MIDNIGHT: Self = Self::from_nano_of_day_unchecked(0);

    /// Midday.
    pub const NOON: Self = Self::from_nano_of_day_unchecked(12 * NANOS_PER_HOUR);

    /// The earliest time of day, which is midnight.
    pub const MIN: Self = Self::MIDNIGHT;

    /// The last nanosecond of the day, 23:59:59.999999999.
    pub const MAX: Self = Self::from_nano_of_day_unchecked(NANOS_PER_DAY - 1);

    const fn from_nano_of_day_unchecked(nano_of_day: i64) -> Self {
        Self { bits: VALID | nano_of_day as u64 }
    }

    /// Creates a time from an hour, minute, second, and nanosecond, each of
    /// which is checked against its field’s range.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use caltime::{LocalTime, TimePiece};
    ///
    /// let time = LocalTime::of(14, 30, 45, 100_000_000).unwrap();
    /// assert_eq!(time.hour(), 14);
    /// assert_eq!(time.nanosecond(), 100_000_000);
    ///
    /// assert!(LocalTime::of(24, 0, 0, 0).is_err());
    /// ```
    pub fn of(hour: i64, minute: i64, second: i64, nanosecond: i64) -> Result<Self, Error> {
        let hour       = Field::HourOfDay.check(hour)?;
        let minute     = Field::MinuteOfHour.check(minute)?;
        let second     = Field::SecondOfMinute.check(second)?;
        let nanosecond = Field::NanoOfSecond.check(nanosecond)?;

        Ok(Self::from_nano_of_day_unchecked(
            hour * NANOS_PER_HOUR + minute * NANOS_PER_MINUTE + second * NANOS_PER_SECOND + nanosecond))
    }

    /// Like `of`, but panics if any component is out of range.
    pub fn must_of(hour: i64, minute: i64, second: i64, nanosecond: i64) -> Self {
        match Self::of(hour, minute, second, nanosecond) {
            Ok(time) => time,
            Err(e)   => panic!("{}", e),
        }
    }

    /// Creates a time from the number of seconds since midnight.
    pub fn of_second_of_day(second_of_day: i64) -> Result<Self, Error> {
        let second_of_day = Field::SecondOfDay.check(second_of_day)?;
        Ok(Self::from_nano_of_day_unchecked(second_of_day * NANOS_PER_SECOND))
    }

    /// Creates a time from the number of nanoseconds since midnight.
    pub fn of_nano_of_day(nano_of_day: i64) -> Result<Self, Error> {
        let nano_of_day = Field::NanoOfDay.check(nano_of_day)?;
        Ok(Self::from_nano_of_day_unchecked(nano_of_day))
    }

    /// Whether this is the zero value.
    pub fn is_zero(&self) -> bool {
        self.bits & VALID == 0
    }

    /// The number of nanoseconds since midnight.
    pub fn to_nano_of_day(&self) -> i64 {
        (self.bits & !VALID) as i64
    }

    /// The number of whole seconds since midnight.
    pub fn to_second_of_day(&self) -> i64 {
        self.to_nano_of_day() / NANOS_PER_SECOND
    }

    fn minute_of_day(&self) -> i64 {
        self.to_nano_of_day() / NANOS_PER_MINUTE
    }

    /// Combines this time with a date.
    pub fn at_date(&self, date: LocalDate) -> LocalDateTime {
        LocalDateTime::new(date, *self)
    }


    // ---- arithmetic ----
    //
    // All of these wrap around midnight: adding a day’s worth of any unit
    // gives back the same time. The zero value stays the zero value.

    /// Returns the time the given number of hours later, wrapping around
    /// midnight.
    ///
    /// ```rust
    /// use caltime::LocalTime;
    ///
    /// let time = LocalTime::of(22, 0, 0, 0).unwrap();
    /// assert_eq!(time.plus_hours(3), LocalTime::of(1, 0, 0, 0).unwrap());
    /// ```
    pub fn plus_hours(&self, hours: i64) -> Self {
        if hours == 0 || self.is_zero() {
            return *self;
        }

        let hour = self.hour() as i64;
        let new_hour = ((hours % HOURS_PER_DAY) + hour + HOURS_PER_DAY) % HOURS_PER_DAY;
        Self::from_nano_of_day_unchecked(self.to_nano_of_day() + (new_hour - hour) * NANOS_PER_HOUR)
    }

    pub fn plus_minutes(&self, minutes: i64) -> Self {
        if minutes == 0 || self.is_zero() {
            return *self;
        }

        let mofd = self.minute_of_day();
        let new_mofd = ((minutes % MINUTES_PER_DAY) + mofd + MINUTES_PER_DAY) % MINUTES_PER_DAY;
        Self::from_nano_of_day_unchecked(self.to_nano_of_day() + (new_mofd - mofd) * NANOS_PER_MINUTE)
    }

    pub fn plus_seconds(&self, seconds: i64) -> Self {
        if seconds == 0 || self.is_zero() {
            return *self;
        }

        let sofd = self.to_second_of_day();
        let new_sofd = ((seconds % SECONDS_PER_DAY) + sofd + SECONDS_PER_DAY) % SECONDS_PER_DAY;
        Self::from_nano_of_day_unchecked(self.to_nano_of_day() + (new_sofd - sofd) * NANOS_PER_SECOND)
    }

    pub fn plus_nanos(&self, nanos: i64) -> Self {
        if nanos == 0 || self.is_zero() {
            return *self;
        }

        let nofd = self.to_nano_of_day();
        let new_nofd = ((nanos % NANOS_PER_DAY) + nofd + NANOS_PER_DAY) % NANOS_PER_DAY;
        Self::from_nano_of_day_unchecked(new_nofd)
    }

    // Reducing first keeps `i64::MIN` from overflowing when negated.

    pub fn minus_hours(&self, hours: i64) -> Self {
        self.plus_hours(-(hours % HOURS_PER_DAY))
    }

    pub fn minus_minutes(&self, minutes: i64) -> Self {
        self.plus_minutes(-(minutes % MINUTES_PER_DAY))
    }

    pub fn minus_seconds(&self, seconds: i64) -> Self {
        self.plus_seconds(-(seconds % SECONDS_PER_DAY))
    }

    pub fn minus_nanos(&self, nanos: i64) -> Self {
        self.plus_nanos(-(nanos % NANOS_PER_DAY))
    }


    // ---- replacement ----

    fn with_components(&self, hour: i64, minute: i64, second: i64, nanosecond: i64) -> Result<Self, Error> {
        Self::of(hour, minute, second, nanosecond)
    }

    pub fn with_hour(&self, hour: i64) -> Result<Self, Error> {
        self.with_components(hour, self.minute() as i64, self.second() as i64, self.nanosecond() as i64)
    }

    pub fn with_minute(&self, minute: i64) -> Result<Self, Error> {
        self.with_components(self.hour() as i64, minute, self.second() as i64, self.nanosecond() as i64)
    }

    pub fn with_second(&self, second: i64) -> Result<Self, Error> {
        self.with_components(self.hour() as i64, self.minute() as i64, second, self.nanosecond() as i64)
    }

    pub fn with_nano(&self, nanosecond: i64) -> Result<Self, Error> {
        self.with_components(self.hour() as i64, self.minute() as i64, self.second() as i64, nanosecond)
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> u8 {
        (self.to_nano_of_day() / NANOS_PER_HOUR) as u8
    }

    fn minute(&self) -> u8 {
        (self.to_nano_of_day() / NANOS_PER_MINUTE % MINUTES_PER_HOUR) as u8
    }

    fn second(&self) -> u8 {
        (self.to_nano_of_day() / NANOS_PER_SECOND % SECONDS_PER_MINUTE) as u8
    }

    fn nanosecond(&self) -> u32 {
        (self.to_nano_of_day() % NANOS_PER_SECOND) as u32
    }
}

impl TemporalAccessor for LocalTime {
    const NAME: &'static str = "LocalTime";

    fn is_zero(&self) -> bool {
        LocalTime::is_zero(self)
    }

    fn is_supported_field(&self, field: Field) -> bool {
        field.is_time_based()
    }

    fn get_field(&self, field: Field) -> TemporalValue {
        if self.is_zero() || !field.is_time_based() {
            return TemporalValue::Unsupported;
        }

        let nod = self.to_nano_of_day();
        let nano = self.nanosecond() as i64;
        let hour = self.hour() as i64;

        TemporalValue::Valid(match field {
            Field::NanoOfSecond     => nano,
            Field::NanoOfDay        => nod,
            Field::MicroOfSecond    => nano / NANOS_PER_MICRO,
            Field::MicroOfDay       => nod / NANOS_PER_MICRO,
            Field::MilliOfSecond    => nano / NANOS_PER_MILLI,
            Field::MilliOfDay       => nod / NANOS_PER_MILLI,
            Field::SecondOfMinute   => self.second() as i64,
            Field::SecondOfDay      => self.to_second_of_day(),
            Field::MinuteOfHour     => self.minute() as i64,
            Field::MinuteOfDay      => self.minute_of_day(),
            Field::HourOfAmPm       => hour % 12,
            Field::ClockHourOfAmPm  => if hour % 12 == 0 { 12 } else { hour % 12 },
            Field::HourOfDay        => hour,
            Field::ClockHourOfDay   => if hour == 0 { 24 } else { hour },
            Field::AmPmOfDay        => hour / 12,
            _                       => return TemporalValue::Unsupported,
        })
    }
}

impl Temporal for LocalTime {
    fn with_field(&self, field: Field, value: i64) -> Result<Self, Error> {
        if self.is_zero() || !field.is_time_based() {
            return Err(unsupported::<Self>(field));
        }

        let value = field.check(value)?;
        let hour = self.hour() as i64;

        match field {
            Field::NanoOfSecond     => self.with_nano(value),
            Field::NanoOfDay        => Self::of_nano_of_day(value),
            Field::MicroOfSecond    => self.with_nano(value * NANOS_PER_MICRO),
            Field::MicroOfDay       => Self::of_nano_of_day(value * NANOS_PER_MICRO),
            Field::MilliOfSecond    => self.with_nano(value * NANOS_PER_MILLI),
            Field::MilliOfDay       => Self::of_nano_of_day(value * NANOS_PER_MILLI),
            Field::SecondOfMinute   => self.with_second(value),
            Field::SecondOfDay      => Ok(self.plus_seconds(value - self.to_second_of_day())),
            Field::MinuteOfHour     => self.with_minute(value),
            Field::MinuteOfDay      => Ok(self.plus_minutes(value - self.minute_of_day())),
            Field::HourOfAmPm       => Ok(self.plus_hours(value - hour % 12)),
            Field::ClockHourOfAmPm  => {
                let value = if value == 12 { 0 } else { value };
                Ok(self.plus_hours(value - hour % 12))
            },
            Field::HourOfDay        => self.with_hour(value),
            Field::ClockHourOfDay   => self.with_hour(if value == 24 { 0 } else { value }),
            Field::AmPmOfDay        => Ok(self.plus_hours((value - hour / 12) * 12)),
            _ => Err(unsupported::<Self>(field)),
        }
    }
}
