//! Dates without a time or an offset.

use std::cmp::Ordering;

use crate::cal::datetime::LocalDateTime;
use crate::cal::gregorian::{self, MAX_YEAR};
use crate::cal::time::LocalTime;
use crate::cal::year::{era, year_of_era, DayOfWeek, Month, Year, YearMonth};
use crate::cal::DatePiece;
use crate::error::Error;
use crate::field::{unsupported, Field, Temporal, TemporalAccessor, TemporalValue, ValueRange};
use crate::util::floor_mod;


/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
///
/// The year, month, and day are packed into a single 64-bit word, with the
/// year in the upper 48 bits, then eight bits of month and eight bits of
/// day. Comparing the words compares the dates. The all-zero word is not a
/// real date (there is no month zero), so it serves as the zero value,
/// which is what `Default` returns. It sorts before every real date.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct LocalDate {
    packed: i64,
}

impl LocalDate {

    /// The earliest supported date, **1st January, -999999999**.
    pub const MIN: Self = Self::pack(gregorian::MIN_YEAR, 1, 1);

    /// The latest supported date, **31st December, +999999999**.
    pub const MAX: Self = Self::pack(MAX_YEAR, 12, 31);

    /// The Unix epoch, **1st January, 1970**.
    pub const EPOCH: Self = Self::pack(1970, 1, 1);

    const fn pack(year: i64, month: u8, day: u8) -> Self {
        Self { packed: (year << 16) | ((month as i64) << 8) | day as i64 }
    }

    /// Creates a new local date instance from the given year, month, and
    /// day fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error: each number
    /// outside its field’s range gives `FieldOutOfRange`, and a day past
    /// the end of its month gives `InvalidDate`.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use caltime::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::of(1969, 7, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::of(2100, 2, 29).is_err());
    /// ```
    pub fn of(year: i64, month: i64, day: i64) -> Result<Self, Error> {
        let year  = Field::Year.check(year)?;
        let month = Field::MonthOfYear.check(month)? as u8;
        let day   = Field::DayOfMonth.check(day)? as u8;

        if day > gregorian::month_length(month, gregorian::is_leap(year)) {
            return Err(Error::InvalidDate(format!("{:04}-{:02}-{:02} does not exist", year, month, day)));
        }

        Ok(Self::pack(year, month, day))
    }

    /// Like `of`, but panics if the date is invalid.
    pub fn must_of(year: i64, month: i64, day: i64) -> Self {
        match Self::of(year, month, day) {
            Ok(date) => date,
            Err(e)   => panic!("{}", e),
        }
    }

    /// Creates a new local date instance from the given year and
    /// day-of-year values.
    ///
    /// ### Examples
    ///
    /// Instantiate the 13th of September 2015 based on its year
    /// and day-of-year.
    ///
    /// ```rust
    /// use caltime::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::of_year_day(2015, 0x100).unwrap();
    /// assert_eq!(date.year(), 2015);
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    /// ```
    ///
    /// Remember that on leap years, the number of days in a year changes,
    /// and that day 366 only exists in leap years:
    ///
    /// ```rust
    /// use caltime::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::of_year_day(2016, 0x100).unwrap();
    /// assert_eq!(date.day(), 12);  // not the 13th!
    ///
    /// assert!(LocalDate::of_year_day(2015, 366).is_err());
    /// ```
    pub fn of_year_day(year: i64, day_of_year: i64) -> Result<Self, Error> {
        let year = Field::Year.check(year)?;
        let day_of_year = Field::DayOfYear.check(day_of_year)? as u16;
        let leap = gregorian::is_leap(year);

        if day_of_year == 366 && !leap {
            return Err(Error::InvalidDate(format!("day-of-year 366 does not exist in the common year {}", year)));
        }

        // Scan backwards for the last month starting on or before the day.
        let month = (1 ..= 12u8).rev()
                                .find(|m| gregorian::first_day_of_year(*m, leap) <= day_of_year)
                                .unwrap_or(1);

        let day = day_of_year - gregorian::first_day_of_year(month, leap) + 1;
        Ok(Self::pack(year, month, day as u8))
    }

    /// Creates the date that is the given number of days after **1st
    /// January, 1970**.
    pub fn of_epoch_day(epoch_day: i64) -> Result<Self, Error> {
        let epoch_day = Field::EpochDay.check(epoch_day)?;
        Ok(Self::from_epoch_day_unchecked(epoch_day))
    }

    pub(crate) fn from_epoch_day_unchecked(epoch_day: i64) -> Self {
        let (year, month, day) = gregorian::from_epoch_day(epoch_day);
        Self::pack(year, month, day)
    }

    /// Returns the current date in UTC.
    #[cfg(feature = "now")]
    pub fn today_utc() -> Self {
        LocalDateTime::now_utc().date()
    }

    fn year_value(self) -> i64 {
        self.packed >> 16
    }

    fn month_value(self) -> u8 {
        ((self.packed >> 8) & 0xFF) as u8
    }

    fn day_value(self) -> u8 {
        (self.packed & 0xFF) as u8
    }

    /// Whether this is the zero value.
    pub fn is_zero(&self) -> bool {
        self.packed == 0
    }

    /// The year and month of this date.
    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year:  Year(self.year_value()),
            month: self.month(),
        }
    }

    pub fn is_leap_year(&self) -> bool {
        gregorian::is_leap(self.year_value())
    }

    pub fn length_of_month(&self) -> u8 {
        gregorian::month_length(self.month_value(), self.is_leap_year())
    }

    pub fn length_of_year(&self) -> u16 {
        gregorian::year_length(self.year_value())
    }

    /// The number of days since **1st January, 1970**.
    pub fn epoch_day(&self) -> i64 {
        gregorian::to_epoch_day(self.year_value(), self.month_value(), self.day_value())
    }

    /// The number of months since January of year zero.
    pub fn proleptic_month(&self) -> i64 {
        self.year_value() * 12 + self.month_value() as i64 - 1
    }

    fn aligned_week_of_month_range(&self) -> ValueRange {
        if self.month_value() == 2 && !self.is_leap_year() {
            ValueRange::new(1, 4)
        }
        else {
            ValueRange::new(1, 5)
        }
    }

    /// Returns the range of values a field can take *for this date*, which
    /// can be narrower than the field’s outer range: the day-of-month only
    /// goes up to the length of this month, for example. Returns `None`
    /// for fields a date doesn’t have.
    pub fn range(&self, field: Field) -> Option<ValueRange> {
        if !field.is_date_based() {
            return None;
        }

        Some(match field {
            Field::DayOfMonth          => ValueRange::new(1, self.length_of_month() as i64),
            Field::DayOfYear           => ValueRange::new(1, self.length_of_year() as i64),
            Field::AlignedWeekOfMonth  => self.aligned_week_of_month_range(),
            Field::YearOfEra           => {
                if self.year_value() <= 0 { ValueRange::new(1, MAX_YEAR + 1) }
                                     else { ValueRange::new(1, MAX_YEAR) }
            },
            _ => field.range(),
        })
    }


    // ---- arithmetic ----

    /// Returns the date the given number of days later. Fails with
    /// `Overflow` if that date is outside the supported range.
    ///
    /// The zero value stays the zero value.
    pub fn plus_days(&self, days: i64) -> Result<Self, Error> {
        self.plus_days_named(days, "plus_days")
    }

    fn plus_days_named(&self, days: i64, operation: &'static str) -> Result<Self, Error> {
        if days == 0 || self.is_zero() {
            return Ok(*self);
        }

        self.epoch_day()
            .checked_add(days)
            .filter(|d| Field::EpochDay.range().contains(*d))
            .map(Self::from_epoch_day_unchecked)
            .ok_or_else(|| Error::overflow(Self::NAME, operation))
    }

    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, Error> {
        let days = weeks.checked_mul(7).ok_or_else(|| Error::overflow(Self::NAME, "plus_weeks"))?;
        self.plus_days_named(days, "plus_weeks")
    }

    /// Returns the date the given number of months later.
    ///
    /// If the day-of-month doesn’t exist in the resulting month, it’s
    /// clipped to the last day of that month:
    ///
    /// ```rust
    /// use caltime::LocalDate;
    ///
    /// let date = LocalDate::of(2024, 1, 31).unwrap();
    /// assert_eq!(date.plus_months(1).unwrap(), LocalDate::of(2024, 2, 29).unwrap());
    /// assert_eq!(date.plus_months(2).unwrap(), LocalDate::of(2024, 3, 31).unwrap());
    /// ```
    pub fn plus_months(&self, months: i64) -> Result<Self, Error> {
        self.plus_months_named(months, "plus_months")
    }

    fn plus_months_named(&self, months: i64, operation: &'static str) -> Result<Self, Error> {
        if months == 0 || self.is_zero() {
            return Ok(*self);
        }

        let ym = self.year_month()
                     .plus_months(months)
                     .map_err(|_| Error::overflow(Self::NAME, operation))?;
        Ok(Self::resolve_previous_valid(ym, self.day_value()))
    }

    /// Returns the date the given number of years later, clipping the 29th
    /// of February to the 28th when landing in a common year.
    pub fn plus_years(&self, years: i64) -> Result<Self, Error> {
        let months = years.checked_mul(12).ok_or_else(|| Error::overflow(Self::NAME, "plus_years"))?;
        self.plus_months_named(months, "plus_years")
    }

    pub fn minus_days(&self, days: i64) -> Result<Self, Error> {
        match days.checked_neg() {
            Some(negated) => self.plus_days_named(negated, "minus_days"),
            None          => self.plus_days_named(i64::MAX, "minus_days")?.plus_days_named(1, "minus_days"),
        }
    }

    pub fn minus_weeks(&self, weeks: i64) -> Result<Self, Error> {
        match weeks.checked_neg() {
            Some(negated) => self.plus_weeks(negated),
            None          => self.plus_weeks(i64::MAX)?.plus_weeks(1),
        }
    }

    pub fn minus_months(&self, months: i64) -> Result<Self, Error> {
        match months.checked_neg() {
            Some(negated) => self.plus_months_named(negated, "minus_months"),
            None          => self.plus_months_named(i64::MAX, "minus_months")?.plus_months_named(1, "minus_months"),
        }
    }

    pub fn minus_years(&self, years: i64) -> Result<Self, Error> {
        match years.checked_neg() {
            Some(negated) => self.plus_years(negated),
            None          => self.plus_years(i64::MAX)?.plus_years(1),
        }
    }

    /// Builds a date in the given year-month, moving the day back to the
    /// last day of the month if it doesn’t exist there.
    fn resolve_previous_valid(ym: YearMonth, day: u8) -> Self {
        let day = day.min(ym.length_of_month());
        Self::pack(ym.year.0, ym.month as u8, day)
    }


    // ---- replacement ----

    /// Returns this date in another year, clipping the 29th of February.
    pub fn with_year(&self, year: i64) -> Result<Self, Error> {
        let year = Year::of(year)?;
        Ok(Self::resolve_previous_valid(year.month(Month::from_u8(self.month_value())), self.day_value()))
    }

    /// Returns this date in another month of the same year, clipping the
    /// day to the end of that month.
    pub fn with_month(&self, month: i64) -> Result<Self, Error> {
        let month = Month::from_one(month)?;
        Ok(Self::resolve_previous_valid(Year(self.year_value()).month(month), self.day_value()))
    }

    pub fn with_day_of_month(&self, day: i64) -> Result<Self, Error> {
        Self::of(self.year_value(), self.month_value() as i64, day)
    }

    pub fn with_day_of_year(&self, day_of_year: i64) -> Result<Self, Error> {
        Self::of_year_day(self.year_value(), day_of_year)
    }


    /// Combines this date with a time of day.
    pub fn at_time(&self, time: LocalTime) -> LocalDateTime {
        LocalDateTime::new(*self, time)
    }

    /// Combines this date with midnight.
    pub fn at_start_of_day(&self) -> LocalDateTime {
        LocalDateTime::new(*self, LocalTime::MIDNIGHT)
    }

    fn aligned(value: i64) -> (i64, i64) {
        ((value - 1) / 7 + 1, (value - 1) % 7 + 1)
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (!self.is_zero()).cmp(&!other.is_zero())
            .then(self.packed.cmp(&other.packed))
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.year_value() }
    fn month(&self) -> Month {
        if self.is_zero() {
            return Month::January;
        }
        Month::from_u8(self.month_value())
    }
    fn day(&self) -> u8 { self.day_value() }

    fn day_of_year(&self) -> u16 {
        if self.is_zero() {
            return 0;
        }
        gregorian::first_day_of_year(self.month_value(), self.is_leap_year()) + self.day_value() as u16 - 1
    }

    fn day_of_week(&self) -> DayOfWeek {
        if self.is_zero() {
            return DayOfWeek::Monday;
        }
        DayOfWeek::from_u8(floor_mod(self.epoch_day() + 3, 7) as u8 + 1)
    }
}

impl TemporalAccessor for LocalDate {
    const NAME: &'static str = "LocalDate";

    fn is_zero(&self) -> bool {
        LocalDate::is_zero(self)
    }

    fn is_supported_field(&self, field: Field) -> bool {
        field.is_date_based()
    }

    fn get_field(&self, field: Field) -> TemporalValue {
        if self.is_zero() || !field.is_date_based() {
            return TemporalValue::Unsupported;
        }

        let year = self.year_value();
        let dom = self.day_value() as i64;
        let doy = self.day_of_year() as i64;

        TemporalValue::Valid(match field {
            Field::DayOfWeek                => self.day_of_week() as i64,
            Field::AlignedDayOfWeekInMonth  => Self::aligned(dom).1,
            Field::AlignedDayOfWeekInYear   => Self::aligned(doy).1,
            Field::DayOfMonth               => dom,
            Field::DayOfYear                => doy,
            Field::EpochDay                 => self.epoch_day(),
            Field::AlignedWeekOfMonth       => Self::aligned(dom).0,
            Field::AlignedWeekOfYear        => Self::aligned(doy).0,
            Field::MonthOfYear              => self.month_value() as i64,
            Field::ProlepticMonth           => self.proleptic_month(),
            Field::YearOfEra                => year_of_era(year),
            Field::Year                     => year,
            Field::Era                      => era(year),
            _                               => return TemporalValue::Unsupported,
        })
    }
}

impl Temporal for LocalDate {
    fn with_field(&self, field: Field, value: i64) -> Result<Self, Error> {
        if self.is_zero() || !field.is_date_based() {
            return Err(unsupported::<Self>(field));
        }

        let value = field.check(value)?;
        let year = self.year_value();
        let dom = self.day_value() as i64;
        let doy = self.day_of_year() as i64;

        match field {
            Field::DayOfWeek                => self.plus_days(value - self.day_of_week() as i64),
            Field::AlignedDayOfWeekInMonth  => self.plus_days(value - Self::aligned(dom).1),
            Field::AlignedDayOfWeekInYear   => self.plus_days(value - Self::aligned(doy).1),
            Field::DayOfMonth               => self.with_day_of_month(value),
            Field::DayOfYear                => self.with_day_of_year(value),
            Field::EpochDay                 => Self::of_epoch_day(value),
            Field::AlignedWeekOfMonth       => {
                let value = self.aligned_week_of_month_range().check(field, value)?;
                self.plus_weeks(value - Self::aligned(dom).0)
            },
            Field::AlignedWeekOfYear        => self.plus_weeks(value - Self::aligned(doy).0),
            Field::MonthOfYear              => self.with_month(value),
            Field::ProlepticMonth           => self.plus_months(value - self.proleptic_month()),
            Field::YearOfEra                => self.with_year(if year >= 1 { value } else { 1 - value }),
            Field::Year                     => self.with_year(value),
            Field::Era                      => {
                if era(year) == value { Ok(*self) }
                                 else { self.with_year(1 - year) }
            },
            _ => Err(unsupported::<Self>(field)),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn some_leap_years() {
        for year in [2004, 2008, 2012, 2016].iter() {
            assert!(LocalDate::of(*year, 2, 29).is_ok());
            assert!(LocalDate::of(*year + 1, 2, 29).is_err());
        }
        assert!(LocalDate::of(1600, 2, 29).is_ok());
        assert!(LocalDate::of(1601, 2, 29).is_err());
        assert!(LocalDate::of(1602, 2, 29).is_err());
    }

    #[test]
    fn new() {
        for year in 1 .. 3000 {
            assert!(LocalDate::of(year,  1, 32).is_err()); assert!(LocalDate::of(year,  2, 30).is_err()); assert!(LocalDate::of(year,  3, 32).is_err());
            assert!(LocalDate::of(year,  4, 31).is_err()); assert!(LocalDate::of(year,  5, 32).is_err()); assert!(LocalDate::of(year,  6, 31).is_err());
            assert!(LocalDate::of(year,  7, 32).is_err()); assert!(LocalDate::of(year,  8, 32).is_err()); assert!(LocalDate::of(year,  9, 31).is_err());
            assert!(LocalDate::of(year, 10, 32).is_err()); assert!(LocalDate::of(year, 11, 31).is_err()); assert!(LocalDate::of(year, 12, 32).is_err());
        }
    }

    #[test]
    fn error_kinds() {
        assert!(matches!(LocalDate::of(2023, 2, 29), Err(Error::InvalidDate(_))));
        assert!(matches!(LocalDate::of(2023, 13, 1), Err(Error::FieldOutOfRange { field: Field::MonthOfYear, .. })));
        assert!(matches!(LocalDate::of(2023, 1, 0), Err(Error::FieldOutOfRange { field: Field::DayOfMonth, .. })));
        assert!(matches!(LocalDate::of(1_000_000_000, 1, 1), Err(Error::FieldOutOfRange { field: Field::Year, .. })));
        assert!(matches!(LocalDate::of_year_day(2023, 366), Err(Error::InvalidDate(_))));
    }

    #[test]
    fn to_from_epoch_day() {
        for date in vec![
            LocalDate::of(1970,  1,  1).unwrap(),
            LocalDate::of(   1,  1,  1).unwrap(),
            LocalDate::of(1971,  1,  1).unwrap(),
            LocalDate::of(1973,  1,  1).unwrap(),
            LocalDate::of(1977,  1,  1).unwrap(),
            LocalDate::of(1989, 11, 10).unwrap(),
            LocalDate::of(1990,  7,  8).unwrap(),
            LocalDate::of(2014,  7, 13).unwrap(),
            LocalDate::of(2001,  2,  3).unwrap(),
        ]{
            assert_eq!(date, LocalDate::of_epoch_day(date.epoch_day()).unwrap());
        }
    }

    #[test]
    fn packing_orders_dates() {
        let a = LocalDate::of(-1, 12, 31).unwrap();
        let b = LocalDate::of(0, 1, 1).unwrap();
        let c = LocalDate::of(2024, 2, 29).unwrap();
        let d = LocalDate::of(2024, 3, 1).unwrap();
        assert!(a < b && b < c && c < d);
    }

    #[test]
    fn zero_is_not_a_date() {
        let zero = LocalDate::default();
        assert!(zero.is_zero());
        assert!(!LocalDate::of(0, 1, 1).unwrap().is_zero());
        assert_ne!(zero, LocalDate::of(0, 1, 1).unwrap());
        assert_eq!(zero.get_field(Field::Year), TemporalValue::Unsupported);
        assert_eq!(zero.plus_days(5), Ok(zero));
        assert!(zero < LocalDate::MIN);
    }

    #[test]
    fn zero_pieces_are_placeholders() {
        let zero = LocalDate::default();
        assert_eq!(zero.year(), 0);
        assert_eq!(zero.month(), Month::January);
        assert_eq!(zero.day(), 0);
        assert_eq!(zero.day_of_year(), 0);
        assert_eq!(zero.day_of_week(), DayOfWeek::Monday);
        assert_eq!(zero.year_month(), YearMonth::of(0, 1).unwrap());
    }

    #[test]
    fn limits() {
        assert_eq!(LocalDate::MIN.epoch_day(), gregorian::MIN_EPOCH_DAY);
        assert_eq!(LocalDate::MAX.epoch_day(), gregorian::MAX_EPOCH_DAY);
        assert!(matches!(LocalDate::MAX.plus_days(1), Err(Error::Overflow { .. })));
        assert!(matches!(LocalDate::MIN.minus_days(1), Err(Error::Overflow { .. })));
        assert!(matches!(LocalDate::MIN.minus_days(i64::MIN), Err(Error::Overflow { .. })));
        assert!(matches!(LocalDate::MAX.plus_years(1), Err(Error::Overflow { operation: "plus_years", .. })));
        assert!(matches!(LocalDate::EPOCH.plus_weeks(i64::MAX), Err(Error::Overflow { operation: "plus_weeks", .. })));
    }

    #[test]
    fn clipping() {
        let date = LocalDate::of(2023, 5, 31).unwrap();
        assert_eq!(date.with_month(6).unwrap(), LocalDate::of(2023, 6, 30).unwrap());
        let leap_day = LocalDate::of(2024, 2, 29).unwrap();
        assert_eq!(leap_day.with_year(2023).unwrap(), LocalDate::of(2023, 2, 28).unwrap());
        assert_eq!(leap_day.plus_years(4).unwrap(), LocalDate::of(2028, 2, 29).unwrap());
        assert_eq!(leap_day.minus_years(1).unwrap(), LocalDate::of(2023, 2, 28).unwrap());
    }

    #[test]
    fn refined_ranges() {
        let feb = LocalDate::of(2023, 2, 10).unwrap();
        assert_eq!(feb.range(Field::DayOfMonth), Some(ValueRange::new(1, 28)));
        assert_eq!(feb.range(Field::AlignedWeekOfMonth), Some(ValueRange::new(1, 4)));
        assert_eq!(feb.range(Field::DayOfYear), Some(ValueRange::new(1, 365)));
        assert_eq!(feb.range(Field::HourOfDay), None);
        assert!(feb.with_field(Field::AlignedWeekOfMonth, 5).is_err());
    }
}
