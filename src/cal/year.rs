//! Years, months, days of the week, and year-month pairs.

use std::fmt;
use std::ops::{Deref, Range, RangeFrom, RangeFull, RangeTo};
use std::slice::Iter as SliceIter;

use crate::cal::date::LocalDate;
use crate::cal::gregorian::{self, MAX_YEAR, MIN_YEAR};
use crate::error::Error;
use crate::field::{unsupported, Field, Temporal, TemporalAccessor, TemporalValue};
use crate::util::{floor_div, floor_mod, RangeExt};

use self::DayOfWeek::*;
use self::Month::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
/// Any `i64` can be wrapped, but only years within `MIN_YEAR ..=
/// MAX_YEAR` can be turned into dates.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Creates a year, checking that it lies in the supported range.
    pub fn of(year: i64) -> Result<Self, Error> {
        Field::Year.check(year).map(Year)
    }

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caltime::Year;
    ///
    /// assert_eq!(Year(2000).is_leap(), true);
    /// assert_eq!(Year(1900).is_leap(), false);
    /// ```
    pub fn is_leap(self) -> bool {
        gregorian::is_leap(self.0)
    }

    /// Returns the number of days in this year, 365 or 366.
    pub fn length(self) -> u16 {
        gregorian::year_length(self.0)
    }

    /// Returns an iterator over a continuous span of months in this year,
    /// returning year-month pairs.
    ///
    /// This method takes one argument that can be of four different types,
    /// depending on the months you wish to iterate over:
    ///
    /// - The `RangeFull` type (such as `..`), which iterates over every
    ///   month;
    /// - The `RangeFrom` type (such as `April ..`), which iterates over
    ///   the months starting from the month given;
    /// - The `RangeTo` type (such as `.. June`), which iterates over the
    ///   months stopping at *but not including* the month given;
    /// - The `Range` type (such as `April .. June`), which iterates over
    ///   the months starting from the left one and stopping at *but not
    ///   including* the right one.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caltime::Year;
    /// use caltime::Month::{April, June};
    ///
    /// let year = Year(1999);
    /// assert_eq!(year.months(..).count(), 12);
    /// assert_eq!(year.months(April ..).count(), 9);
    /// assert_eq!(year.months(April .. June).count(), 2);
    /// assert_eq!(year.months(.. June).count(), 5);
    /// ```
    pub fn months<S: MonthSpan>(self, span: S) -> YearMonths {
        YearMonths {
            year: self,
            iter: span.get_slice().iter(),
        }
    }

    /// Returns a year-month, pairing this year with the given month.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caltime::{Year, Month};
    ///
    /// let expiry_date = Year(2017).month(Month::February);
    /// assert_eq!(*expiry_date.year, 2017);
    /// assert_eq!(expiry_date.month, Month::February);
    /// ```
    pub fn month(self, month: Month) -> YearMonth {
        YearMonth {
            year: self,
            month,
        }
    }

    /// Returns a year-month from a month number, checking the month.
    pub fn at_month(self, month: i64) -> Result<YearMonth, Error> {
        YearMonth::of(self.0, month)
    }

    /// Returns the date at the given day-of-year.
    pub fn at_day(self, day_of_year: i64) -> Result<LocalDate, Error> {
        LocalDate::of_year_day(self.0, day_of_year)
    }
}

impl Deref for Year {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TemporalAccessor for Year {
    const NAME: &'static str = "Year";

    fn is_zero(&self) -> bool {
        false
    }

    fn is_supported_field(&self, field: Field) -> bool {
        matches!(field, Field::YearOfEra | Field::Year | Field::Era)
    }

    fn get_field(&self, field: Field) -> TemporalValue {
        if !self.0.is_within(MIN_YEAR ..= MAX_YEAR) {
            return if self.is_supported_field(field) { TemporalValue::Overflow } else { TemporalValue::Unsupported };
        }

        match field {
            Field::YearOfEra  => TemporalValue::Valid(year_of_era(self.0)),
            Field::Year       => TemporalValue::Valid(self.0),
            Field::Era        => TemporalValue::Valid(era(self.0)),
            _                 => TemporalValue::Unsupported,
        }
    }
}

impl Temporal for Year {
    fn with_field(&self, field: Field, value: i64) -> Result<Self, Error> {
        let value = match field {
            Field::YearOfEra | Field::Year | Field::Era => field.check(value)?,
            _ => return Err(unsupported::<Self>(field)),
        };

        match field {
            Field::YearOfEra  => Year::of(if self.0 >= 1 { value } else { 1 - value }),
            Field::Era if era(self.0) == value => Year::of(self.0),
            Field::Era        => {
                let flipped = 1_i64.checked_sub(self.0).ok_or_else(|| Error::overflow(Self::NAME, "with_field"))?;
                Year::of(flipped)
            },
            _                 => Year::of(value),
        }
    }
}

pub(crate) fn year_of_era(year: i64) -> i64 {
    if year >= 1 { year } else { 1 - year }
}

pub(crate) fn era(year: i64) -> i64 {
    if year >= 1 { 1 } else { 0 }
}


/// A span of months, which gets used to construct a `YearMonths` iterator.
///
/// See the `months` method of `Year` for more information.
pub trait MonthSpan {

    /// Returns a static slice of `Month` values contained by this span.
    fn get_slice(&self) -> &'static [Month];
}

static MONTHS: &[Month] = &[
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];

impl MonthSpan for RangeFull {
    fn get_slice(&self) -> &'static [Month] {
        MONTHS
    }
}

impl MonthSpan for RangeFrom<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[self.start.months_from_january() ..]
    }
}

impl MonthSpan for RangeTo<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[.. self.end.months_from_january()]
    }
}

impl MonthSpan for Range<Month> {
    fn get_slice(&self) -> &'static [Month] {
        let start = self.start.months_from_january();
        let end = self.end.months_from_january().max(start);
        &MONTHS[start .. end]
    }
}


/// An iterator over a continuous span of months in a year.
///
/// Use the `months` method on `Year` to create instances of this iterator.
pub struct YearMonths {
    year: Year,
    iter: SliceIter<'static, Month>,
}

impl Iterator for YearMonths {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        self.iter.next().map(|m| YearMonth {
            year: self.year,
            month: *m,
        })
    }
}

impl DoubleEndedIterator for YearMonths {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|m| YearMonth {
            year: self.year,
            month: *m,
        })
    }
}

impl fmt::Debug for YearMonths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YearMonths({}, {:?})", self.year.0, self.iter.as_slice())
    }
}


/// A month-year pair.
///
/// This is the stepping stone for month arithmetic on dates: adding months
/// to a date moves its year-month, then clips the day to fit.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct YearMonth {
    pub year: Year,
    pub month: Month,
}

impl YearMonth {

    /// Creates a year-month, checking both the year and the month number.
    pub fn of(year: i64, month: i64) -> Result<Self, Error> {
        let year = Year::of(year)?;
        let month = Month::from_one(month)?;
        Ok(Self { year, month })
    }

    /// Splits a proleptic month count back into a year-month.
    pub fn of_proleptic_month(proleptic_month: i64) -> Result<Self, Error> {
        let proleptic_month = Field::ProlepticMonth.check(proleptic_month)?;
        Ok(Self::from_proleptic_month_unchecked(proleptic_month))
    }

    pub(crate) fn from_proleptic_month_unchecked(proleptic_month: i64) -> Self {
        let month = floor_mod(proleptic_month, 12) as u8 + 1;
        Self {
            year:  Year(floor_div(proleptic_month, 12)),
            month: Month::from_u8(month),
        }
    }

    /// The number of months since January of year zero.
    ///
    /// Saturates for years far outside the supported range, which can only
    /// be built through the public fields.
    pub fn proleptic_month(&self) -> i64 {
        self.checked_proleptic_month()
            .unwrap_or(if self.year.0 < 0 { i64::MIN } else { i64::MAX })
    }

    fn checked_proleptic_month(&self) -> Option<i64> {
        self.year.0.checked_mul(12)?.checked_add(self.month.months_from_january() as i64)
    }

    /// Returns the number of days in this month. This can be definitely
    /// known, as the paired year determines whether it’s a leap year, so
    /// there’s no chance of being caught out by February.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caltime::Year;
    /// use caltime::Month::February;
    ///
    /// assert_eq!(Year(2000).month(February).length_of_month(), 29);
    /// assert_eq!(Year(1900).month(February).length_of_month(), 28);
    /// ```
    pub fn length_of_month(&self) -> u8 {
        self.month.length(self.year.is_leap())
    }

    pub fn length_of_year(&self) -> u16 {
        self.year.length()
    }

    /// Whether the given day-of-month exists in this month.
    pub fn is_valid_day(&self, day: i64) -> bool {
        day.is_within(1 ..= self.length_of_month() as i64)
    }

    /// Returns an iterator over a continuous span of days in this month,
    /// returning `LocalDate` values.
    ///
    /// ### Examples
    ///
    /// ```
    /// use caltime::Year;
    /// use caltime::Month::September;
    ///
    /// let ym = Year(1999).month(September);
    /// assert_eq!(ym.days(..).count(), 30);
    /// assert_eq!(ym.days(10 ..).count(), 21);
    /// assert_eq!(ym.days(10 .. 20).count(), 10);
    /// assert_eq!(ym.days(.. 20).count(), 19);
    /// ```
    pub fn days<S: DaySpan>(&self, span: S) -> MonthDays {
        MonthDays {
            ym: *self,
            range: span.get_range(self)
        }
    }

    /// Returns a `LocalDate` based on the day of this month.
    ///
    /// This is just a short-cut for the `LocalDate::of` constructor.
    pub fn at_day(&self, day: i64) -> Result<LocalDate, Error> {
        LocalDate::of(self.year.0, self.month as i64, day)
    }

    /// Returns the last day of this month.
    pub fn at_end_of_month(&self) -> Result<LocalDate, Error> {
        self.at_day(self.length_of_month() as i64)
    }

    /// Moves this year-month by a number of months.
    pub fn plus_months(&self, months: i64) -> Result<Self, Error> {
        if months == 0 {
            return Ok(*self);
        }

        self.checked_proleptic_month()
            .and_then(|pm| pm.checked_add(months))
            .filter(|pm| Field::ProlepticMonth.range().contains(*pm))
            .map(Self::from_proleptic_month_unchecked)
            .ok_or_else(|| Error::overflow(Self::NAME, "plus_months"))
    }

    /// Moves this year-month by a number of years.
    pub fn plus_years(&self, years: i64) -> Result<Self, Error> {
        let months = years.checked_mul(12).ok_or_else(|| Error::overflow(Self::NAME, "plus_years"))?;
        self.plus_months(months)
    }

    pub fn minus_months(&self, months: i64) -> Result<Self, Error> {
        match months.checked_neg() {
            Some(negated) => self.plus_months(negated),
            None          => self.plus_months(i64::MAX)?.plus_months(1),
        }
    }

    pub fn minus_years(&self, years: i64) -> Result<Self, Error> {
        match years.checked_neg() {
            Some(negated) => self.plus_years(negated),
            None          => self.plus_years(i64::MAX)?.plus_years(1),
        }
    }
}

impl TemporalAccessor for YearMonth {
    const NAME: &'static str = "YearMonth";

    fn is_zero(&self) -> bool {
        false
    }

    fn is_supported_field(&self, field: Field) -> bool {
        matches!(field, Field::MonthOfYear | Field::ProlepticMonth | Field::YearOfEra | Field::Year | Field::Era)
    }

    fn get_field(&self, field: Field) -> TemporalValue {
        match field {
            Field::MonthOfYear     => TemporalValue::Valid(self.month as i64),
            Field::ProlepticMonth  => TemporalValue::from_checked(self.checked_proleptic_month()),
            _                      => self.year.get_field(field),
        }
    }
}

impl Temporal for YearMonth {
    fn with_field(&self, field: Field, value: i64) -> Result<Self, Error> {
        match field {
            Field::MonthOfYear => {
                let month = Month::from_one(value)?;
                Ok(Self { year: self.year, month })
            },
            Field::ProlepticMonth => {
                let value = field.check(value)?;
                Ok(Self::from_proleptic_month_unchecked(value))
            },
            Field::YearOfEra | Field::Year | Field::Era => {
                let year = self.year.with_field(field, value)?;
                Ok(Self { year, month: self.month })
            },
            _ => Err(unsupported::<Self>(field)),
        }
    }
}


/// A span of days, which gets used to construct a `MonthDays` iterator.
pub trait DaySpan {

    /// Returns a `Range` of the day numbers specified for the given year-month pair.
    fn get_range(&self, ym: &YearMonth) -> Range<i8>;
}

impl DaySpan for RangeFull {
    fn get_range(&self, ym: &YearMonth) -> Range<i8> {
        1 .. ym.length_of_month() as i8 + 1
    }
}

impl DaySpan for RangeFrom<i8> {
    fn get_range(&self, ym: &YearMonth) -> Range<i8> {
        self.start .. ym.length_of_month() as i8 + 1
    }
}

impl DaySpan for RangeTo<i8> {
    fn get_range(&self, _ym: &YearMonth) -> Range<i8> {
        1 .. self.end
    }
}

impl DaySpan for Range<i8> {
    fn get_range(&self, _ym: &YearMonth) -> Range<i8> {
        self.clone()
    }
}


/// An iterator over a continuous span of days in a month.
///
/// Use the `days` method on `YearMonth` to create instances of this
/// iterator. Days that don’t exist in the month are skipped.
#[derive(PartialEq, Debug)]
pub struct MonthDays {
    ym: YearMonth,
    range: Range<i8>,
}

impl Iterator for MonthDays {
    type Item = LocalDate;

    fn next(&mut self) -> Option<Self::Item> {
        let ym = self.ym;
        self.range.by_ref().find_map(|d| ym.at_day(d as i64).ok())
    }
}

impl DoubleEndedIterator for MonthDays {
    fn next_back(&mut self) -> Option<Self::Item> {
        let ym = self.ym;
        self.range.by_ref().rev().find_map(|d| ym.at_day(d as i64).ok())
    }
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i64` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn length(self, leap_year: bool) -> u8 {
        gregorian::month_length(self as u8, leap_year)
    }

    /// The shortest this month can be.
    pub fn min_length(self) -> u8 {
        self.length(false)
    }

    /// The longest this month can be.
    pub fn max_length(self) -> u8 {
        self.length(true)
    }

    /// Returns the day-of-year of the first day of this month.
    pub fn first_day_of_year(self, leap_year: bool) -> u16 {
        gregorian::first_day_of_year(self as u8, leap_year)
    }

    /// The month number, from 1 to 12.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the month that is the given number of months after this
    /// one, wrapping around at the end of the year.
    ///
    /// ```rust
    /// use caltime::Month;
    /// assert_eq!(Month::November.plus(3), Month::February);
    /// assert_eq!(Month::January.plus(-1), Month::December);
    /// ```
    pub fn plus(self, months: i64) -> Self {
        let amount = (months % 12) as i8;
        Self::from_u8(((self as i8 - 1 + amount + 12) % 12 + 1) as u8)
    }

    pub fn minus(self, months: i64) -> Self {
        self.plus(-(months % 12))
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use caltime::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i64) -> Result<Self, Error> {
        Field::MonthOfYear.check(month).map(|m| Self::from_u8(m as u8))
    }

    /// Callers have already checked the range.
    pub(crate) fn from_u8(month: u8) -> Self {
        match month {
             1 => January,   2 => February,   3 => March,
             4 => April,     5 => May,        6 => June,
             7 => July,      8 => August,     9 => September,
            10 => October,  11 => November,  _ => December,
        }
    }
}

impl TemporalAccessor for Month {
    const NAME: &'static str = "Month";

    fn is_zero(&self) -> bool {
        false
    }

    fn is_supported_field(&self, field: Field) -> bool {
        field == Field::MonthOfYear
    }

    fn get_field(&self, field: Field) -> TemporalValue {
        match field {
            Field::MonthOfYear  => TemporalValue::Valid(*self as i64),
            _                   => TemporalValue::Unsupported,
        }
    }
}

impl Temporal for Month {
    fn with_field(&self, field: Field, value: i64) -> Result<Self, Error> {
        match field {
            Field::MonthOfYear  => Month::from_one(value),
            _                   => Err(unsupported::<Self>(field)),
        }
    }
}


/// A named day of the week, from Monday (day 1) to Sunday (day 7), as
/// ISO-8601 numbers them.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum DayOfWeek {
    Monday = 1, Tuesday = 2, Wednesday = 3, Thursday = 4,
    Friday = 5, Saturday = 6, Sunday = 7,
}

impl DayOfWeek {

    /// Return the day of the week based on a number, with Monday as Day 1,
    /// Tuesday as Day 2, and so on.
    ///
    /// ```rust
    /// use caltime::DayOfWeek;
    /// assert_eq!(DayOfWeek::from_one(4), Ok(DayOfWeek::Thursday));
    /// assert!(DayOfWeek::from_one(0).is_err());
    /// ```
    pub fn from_one(day: i64) -> Result<Self, Error> {
        Field::DayOfWeek.check(day).map(|d| Self::from_u8(d as u8))
    }

    pub(crate) fn from_u8(day: u8) -> Self {
        match day {
            1 => Monday,    2 => Tuesday,  3 => Wednesday,
            4 => Thursday,  5 => Friday,   6 => Saturday,
            _ => Sunday,
        }
    }

    /// The day number, from 1 (Monday) to 7 (Sunday).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns the day that is the given number of days after this one.
    pub fn plus(self, days: i64) -> Self {
        let amount = (days % 7) as i8;
        Self::from_u8(((self as i8 - 1 + amount + 7) % 7 + 1) as u8)
    }

    pub fn minus(self, days: i64) -> Self {
        self.plus(-(days % 7))
    }
}

impl TemporalAccessor for DayOfWeek {
    const NAME: &'static str = "DayOfWeek";

    fn is_zero(&self) -> bool {
        false
    }

    fn is_supported_field(&self, field: Field) -> bool {
        field == Field::DayOfWeek
    }

    fn get_field(&self, field: Field) -> TemporalValue {
        match field {
            Field::DayOfWeek  => TemporalValue::Valid(*self as i64),
            _                 => TemporalValue::Unsupported,
        }
    }
}

impl Temporal for DayOfWeek {
    fn with_field(&self, field: Field, value: i64) -> Result<Self, Error> {
        match field {
            Field::DayOfWeek  => DayOfWeek::from_one(value),
            _                 => Err(unsupported::<Self>(field)),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn months_wrap() {
        assert_eq!(December.plus(1), January);
        assert_eq!(March.plus(-14), January);
        assert_eq!(March.minus(i64::MIN), March.plus(8));
    }

    #[test]
    fn days_wrap() {
        assert_eq!(Sunday.plus(1), Monday);
        assert_eq!(Monday.minus(1), Sunday);
        assert_eq!(Wednesday.plus(-15), Tuesday);
    }

    #[test]
    fn proleptic_months() {
        let ym = YearMonth::of(2024, 3).unwrap();
        assert_eq!(ym.proleptic_month(), 2024 * 12 + 2);
        assert_eq!(YearMonth::of_proleptic_month(-1).unwrap(), YearMonth::of(-1, 12).unwrap());
    }

    #[test]
    fn era_flip_stays_in_range() {
        assert_eq!(Year(2024).with_field(Field::Era, 0), Ok(Year(-2023)));
        assert_eq!(Year(-2023).with_field(Field::Era, 0), Ok(Year(-2023)));
        assert!(matches!(Year(MIN_YEAR).with_field(Field::Era, 1), Err(Error::FieldOutOfRange { .. })));
        assert!(matches!(Year(i64::MIN).with_field(Field::Era, 1), Err(Error::Overflow { component: "Year", .. })));
    }

    #[test]
    fn year_months_outside_the_range() {
        let ym = Year(i64::MAX).month(January);
        assert!(matches!(ym.plus_months(1), Err(Error::Overflow { component: "YearMonth", .. })));
        assert!(matches!(ym.minus_years(1), Err(Error::Overflow { component: "YearMonth", .. })));
        assert_eq!(ym.get_field(Field::ProlepticMonth), TemporalValue::Overflow);
        assert_eq!(ym.proleptic_month(), i64::MAX);
        assert_eq!(Year(i64::MIN).month(March).proleptic_month(), i64::MIN);
        assert_eq!(ym.with_field(Field::ProlepticMonth, 24), Ok(YearMonth::of(2, 1).unwrap()));
    }

    #[test]
    fn year_month_arithmetic() {
        let ym = YearMonth::of(2023, 11).unwrap();
        assert_eq!(ym.plus_months(3).unwrap(), YearMonth::of(2024, 2).unwrap());
        assert_eq!(ym.minus_years(2024).unwrap(), YearMonth::of(-1, 11).unwrap());
        assert!(ym.plus_years(i64::MAX).is_err());
        assert!(ym.minus_months(i64::MIN).is_err());
    }

    #[test]
    fn end_of_month() {
        let feb = YearMonth::of(2024, 2).unwrap();
        assert_eq!(feb.at_end_of_month().unwrap(), LocalDate::of(2024, 2, 29).unwrap());
        assert!(feb.at_day(30).is_err());
    }

    #[test]
    fn year_out_of_range() {
        assert!(Year::of(1_000_000_000).is_err());
        assert_eq!(Year(1_000_000_000).get_field(Field::Year), TemporalValue::Overflow);
    }

    #[test]
    fn year_eras() {
        assert_eq!(Year(0).get_field(Field::YearOfEra), TemporalValue::Valid(1));
        assert_eq!(Year(0).get_field(Field::Era), TemporalValue::Valid(0));
        assert_eq!(Year(2024).with_field(Field::Era, 0).unwrap(), Year(-2023));
        assert_eq!(Year(-5).with_field(Field::YearOfEra, 10).unwrap(), Year(-9));
    }

    #[test]
    fn empty_backwards_span() {
        assert_eq!(Year(2000).months(June .. April).count(), 0);
    }
}
