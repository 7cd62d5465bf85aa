//! Named fields, and the protocol for querying them.
//!
//! Every value type in this crate answers the same three questions: is it
//! the zero (unset) value, does it know about a given field, and what is
//! that field’s value. Values that can be rebuilt with one field replaced
//! also implement `Temporal`.

use std::fmt;

use crate::cal::gregorian::{self, MAX_YEAR, MIN_YEAR};
use crate::error::Error;


const NANOS_PER_DAY: i64 = 86_400_000_000_000;


/// One of the thirty named, integer-valued components of a date, time, or
/// offset.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Field {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmPm,
    ClockHourOfAmPm,
    HourOfDay,
    ClockHourOfDay,
    AmPmOfDay,
    DayOfWeek,
    AlignedDayOfWeekInMonth,
    AlignedDayOfWeekInYear,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    AlignedWeekOfMonth,
    AlignedWeekOfYear,
    MonthOfYear,
    ProlepticMonth,
    YearOfEra,
    Year,
    Era,
    InstantSeconds,
    OffsetSeconds,
}

impl Field {

    /// Every field, in declaration order.
    pub const ALL: [Field; 30] = [
        Field::NanoOfSecond, Field::NanoOfDay,
        Field::MicroOfSecond, Field::MicroOfDay,
        Field::MilliOfSecond, Field::MilliOfDay,
        Field::SecondOfMinute, Field::SecondOfDay,
        Field::MinuteOfHour, Field::MinuteOfDay,
        Field::HourOfAmPm, Field::ClockHourOfAmPm,
        Field::HourOfDay, Field::ClockHourOfDay,
        Field::AmPmOfDay,
        Field::DayOfWeek,
        Field::AlignedDayOfWeekInMonth, Field::AlignedDayOfWeekInYear,
        Field::DayOfMonth, Field::DayOfYear,
        Field::EpochDay,
        Field::AlignedWeekOfMonth, Field::AlignedWeekOfYear,
        Field::MonthOfYear, Field::ProlepticMonth,
        Field::YearOfEra, Field::Year, Field::Era,
        Field::InstantSeconds, Field::OffsetSeconds,
    ];

    /// Whether this field is a component of a calendar date.
    pub fn is_date_based(self) -> bool {
        matches!(self,
            Field::DayOfWeek | Field::AlignedDayOfWeekInMonth | Field::AlignedDayOfWeekInYear
            | Field::DayOfMonth | Field::DayOfYear | Field::EpochDay
            | Field::AlignedWeekOfMonth | Field::AlignedWeekOfYear
            | Field::MonthOfYear | Field::ProlepticMonth
            | Field::YearOfEra | Field::Year | Field::Era)
    }

    /// Whether this field is a component of a time of day.
    pub fn is_time_based(self) -> bool {
        matches!(self,
            Field::NanoOfSecond | Field::NanoOfDay
            | Field::MicroOfSecond | Field::MicroOfDay
            | Field::MilliOfSecond | Field::MilliOfDay
            | Field::SecondOfMinute | Field::SecondOfDay
            | Field::MinuteOfHour | Field::MinuteOfDay
            | Field::HourOfAmPm | Field::ClockHourOfAmPm
            | Field::HourOfDay | Field::ClockHourOfDay
            | Field::AmPmOfDay)
    }

    /// The outer range of values this field can ever take, regardless of
    /// which value it is read from.
    pub fn range(self) -> ValueRange {
        match self {
            Field::NanoOfSecond             => ValueRange::new(0, 999_999_999),
            Field::NanoOfDay                => ValueRange::new(0, NANOS_PER_DAY - 1),
            Field::MicroOfSecond            => ValueRange::new(0, 999_999),
            Field::MicroOfDay               => ValueRange::new(0, NANOS_PER_DAY / 1_000 - 1),
            Field::MilliOfSecond            => ValueRange::new(0, 999),
            Field::MilliOfDay               => ValueRange::new(0, NANOS_PER_DAY / 1_000_000 - 1),
            Field::SecondOfMinute           => ValueRange::new(0, 59),
            Field::SecondOfDay              => ValueRange::new(0, 86_399),
            Field::MinuteOfHour             => ValueRange::new(0, 59),
            Field::MinuteOfDay              => ValueRange::new(0, 1_439),
            Field::HourOfAmPm               => ValueRange::new(0, 11),
            Field::ClockHourOfAmPm          => ValueRange::new(1, 12),
            Field::HourOfDay                => ValueRange::new(0, 23),
            Field::ClockHourOfDay           => ValueRange::new(1, 24),
            Field::AmPmOfDay                => ValueRange::new(0, 1),
            Field::DayOfWeek                => ValueRange::new(1, 7),
            Field::AlignedDayOfWeekInMonth  => ValueRange::new(1, 7),
            Field::AlignedDayOfWeekInYear   => ValueRange::new(1, 7),
            Field::DayOfMonth               => ValueRange::new(1, 31),
            Field::DayOfYear                => ValueRange::new(1, 366),
            Field::EpochDay                 => ValueRange::new(gregorian::MIN_EPOCH_DAY, gregorian::MAX_EPOCH_DAY),
            Field::AlignedWeekOfMonth       => ValueRange::new(1, 5),
            Field::AlignedWeekOfYear        => ValueRange::new(1, 53),
            Field::MonthOfYear              => ValueRange::new(1, 12),
            Field::ProlepticMonth           => ValueRange::new(MIN_YEAR * 12, MAX_YEAR * 12 + 11),
            Field::YearOfEra                => ValueRange::new(1, MAX_YEAR + 1),
            Field::Year                     => ValueRange::new(MIN_YEAR, MAX_YEAR),
            Field::Era                      => ValueRange::new(0, 1),
            Field::InstantSeconds           => ValueRange::new(i64::MIN, i64::MAX),
            Field::OffsetSeconds            => ValueRange::new(-64_800, 64_800),
        }
    }

    /// Checks that the value is within this field’s outer range, returning
    /// it unchanged if it is.
    pub fn check(self, value: i64) -> Result<i64, Error> {
        self.range().check(self, value)
    }

    /// The field’s name, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::NanoOfSecond             => "NanoOfSecond",
            Field::NanoOfDay                => "NanoOfDay",
            Field::MicroOfSecond            => "MicroOfSecond",
            Field::MicroOfDay               => "MicroOfDay",
            Field::MilliOfSecond            => "MilliOfSecond",
            Field::MilliOfDay               => "MilliOfDay",
            Field::SecondOfMinute           => "SecondOfMinute",
            Field::SecondOfDay              => "SecondOfDay",
            Field::MinuteOfHour             => "MinuteOfHour",
            Field::MinuteOfDay              => "MinuteOfDay",
            Field::HourOfAmPm               => "HourOfAmPm",
            Field::ClockHourOfAmPm          => "ClockHourOfAmPm",
            Field::HourOfDay                => "HourOfDay",
            Field::ClockHourOfDay           => "ClockHourOfDay",
            Field::AmPmOfDay                => "AmPmOfDay",
            Field::DayOfWeek                => "DayOfWeek",
            Field::AlignedDayOfWeekInMonth  => "AlignedDayOfWeekInMonth",
            Field::AlignedDayOfWeekInYear   => "AlignedDayOfWeekInYear",
            Field::DayOfMonth               => "DayOfMonth",
            Field::DayOfYear                => "DayOfYear",
            Field::EpochDay                 => "EpochDay",
            Field::AlignedWeekOfMonth       => "AlignedWeekOfMonth",
            Field::AlignedWeekOfYear        => "AlignedWeekOfYear",
            Field::MonthOfYear              => "MonthOfYear",
            Field::ProlepticMonth           => "ProlepticMonth",
            Field::YearOfEra                => "YearOfEra",
            Field::Year                     => "Year",
            Field::Era                      => "Era",
            Field::InstantSeconds           => "InstantSeconds",
            Field::OffsetSeconds            => "OffsetSeconds",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// An inclusive range of valid values for a field.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {

    /// Creates a range from its smallest and largest values, both inclusive.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub const fn min(self) -> i64 {
        self.min
    }

    pub const fn max(self) -> i64 {
        self.max
    }

    pub const fn contains(self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns the value if it lies in this range, or a `FieldOutOfRange`
    /// error naming the field if it doesn’t.
    pub fn check(self, field: Field, value: i64) -> Result<i64, Error> {
        if self.contains(value) {
            Ok(value)
        }
        else {
            Err(Error::FieldOutOfRange { field, value, range: self })
        }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}


/// The result of asking a value for one of its fields.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum TemporalValue {

    /// The field is supported, and has this value.
    Valid(i64),

    /// The value does not have this field, or is the zero value.
    Unsupported,

    /// The field is supported but its value cannot be represented in 64
    /// bits.
    Overflow,
}

impl TemporalValue {

    /// Turns the result of a checked calculation into a field value:
    /// `None` means the calculation overflowed.
    pub fn from_checked(value: Option<i64>) -> Self {
        match value {
            Some(v) => TemporalValue::Valid(v),
            None    => TemporalValue::Overflow,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, TemporalValue::Valid(_))
    }

    pub fn is_unsupported(self) -> bool {
        matches!(self, TemporalValue::Unsupported)
    }

    pub fn is_overflow(self) -> bool {
        matches!(self, TemporalValue::Overflow)
    }

    /// The value, if there is one.
    pub fn value(self) -> Option<i64> {
        match self {
            TemporalValue::Valid(v) => Some(v),
            _                       => None,
        }
    }
}

impl From<i64> for TemporalValue {
    fn from(value: i64) -> Self {
        TemporalValue::Valid(value)
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TemporalValue::Valid(v)     => write!(f, "{}", v),
            TemporalValue::Unsupported  => f.write_str("unsupported"),
            TemporalValue::Overflow     => f.write_str("overflow"),
        }
    }
}


/// Read access to the fields of a value.
pub trait TemporalAccessor {

    /// The name of the value type, as used in error messages.
    const NAME: &'static str;

    /// Whether this is the distinguished “unset” value.
    fn is_zero(&self) -> bool;

    /// Whether values of this type have the given field. This does not
    /// depend on whether this particular value is zero.
    fn is_supported_field(&self, field: Field) -> bool;

    /// Reads a field. The zero value reports every field as unsupported.
    fn get_field(&self, field: Field) -> TemporalValue;
}

/// Values that can be rebuilt with one field replaced.
pub trait Temporal: TemporalAccessor + Sized {

    /// Returns a copy of this value with the given field set to the given
    /// value.
    ///
    /// Fails with `FieldOutOfRange` if the value is outside the field’s
    /// range, `UnsupportedField` if this type has no such field (or is
    /// the zero value), and `InvalidDate` or `Overflow` if the replacement
    /// does not produce a real value.
    fn with_field(&self, field: Field, value: i64) -> Result<Self, Error>;
}


pub(crate) fn unsupported<T: TemporalAccessor>(field: Field) -> Error {
    Error::UnsupportedField { field, component: T::NAME }
}
