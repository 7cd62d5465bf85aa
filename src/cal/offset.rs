//! Fixed UTC offsets, and datetimes that carry one.

use std::cmp::Ordering;

use crate::cal::date::LocalDate;
use crate::cal::datetime::LocalDateTime;
use crate::cal::time::{LocalTime, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::cal::year::{DayOfWeek, Month};
use crate::cal::{DatePiece, TimePiece};
use crate::error::Error;
use crate::field::{unsupported, Field, Temporal, TemporalAccessor, TemporalValue, ValueRange};
use crate::instant::Instant;


/// An amount of time by which local clocks are ahead of (or, when
/// negative, behind) UTC, between -18:00 and +18:00.
///
/// UTC itself is a real offset of zero seconds. The zero value, which is
/// what `Default` returns, is distinct from it and means “no offset”.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct ZoneOffset {
    offset_seconds: Option<i32>,
}

impl ZoneOffset {

    /// The offset of UTC itself.
    pub const UTC: Self = Self { offset_seconds: Some(0) };

    /// Creates an offset from a total number of seconds.
    pub fn of_seconds(seconds: i64) -> Result<Self, Error> {
        let seconds = Field::OffsetSeconds.check(seconds)?;
        Ok(Self { offset_seconds: Some(seconds as i32) })
    }

    /// Creates an offset from a whole number of hours.
    pub fn of_hours(hours: i64) -> Result<Self, Error> {
        Self::of_hours_minutes_seconds(hours, 0, 0)
    }

    /// Creates an offset from hours, minutes, and seconds, which must all
    /// have the same sign (or be zero).
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use caltime::ZoneOffset;
    ///
    /// let offset = ZoneOffset::of_hours_minutes_seconds(-3, -30, 0).unwrap();
    /// assert_eq!(offset.total_seconds(), -12_600);
    ///
    /// assert!(ZoneOffset::of_hours_minutes_seconds(-3, 30, 0).is_err());
    /// ```
    pub fn of_hours_minutes_seconds(hours: i64, minutes: i64, seconds: i64) -> Result<Self, Error> {
        let hours = ValueRange::new(-18, 18).check(Field::HourOfDay, hours)?;
        let minutes = Self::signed_range(hours).check(Field::MinuteOfHour, minutes)?;

        let sign = if hours != 0 { hours } else { minutes };
        let seconds = Self::signed_range(sign).check(Field::SecondOfMinute, seconds)?;

        Self::of_seconds(hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds)
    }

    /// The range a component can take, given the sign of the component
    /// before it.
    fn signed_range(sign: i64) -> ValueRange {
        match sign.signum() {
            1  => ValueRange::new(0, 59),
            -1 => ValueRange::new(-59, 0),
            _  => ValueRange::new(-59, 59),
        }
    }

    /// Like `of_hours_minutes_seconds`, but panics if the offset is invalid.
    pub fn must_of(hours: i64, minutes: i64, seconds: i64) -> Self {
        match Self::of_hours_minutes_seconds(hours, minutes, seconds) {
            Ok(offset) => offset,
            Err(e)     => panic!("{}", e),
        }
    }

    /// Whether this is the zero value, rather than a real offset.
    pub fn is_zero(&self) -> bool {
        self.offset_seconds.is_none()
    }

    pub fn is_utc(&self) -> bool {
        self.offset_seconds == Some(0)
    }

    /// The total offset in seconds. The zero value counts as UTC here.
    pub fn total_seconds(&self) -> i32 {
        self.offset_seconds.unwrap_or(0)
    }

    pub fn is_negative(&self) -> bool {
        self.total_seconds() < 0
    }

    pub fn hours(&self) -> i8 {
        (self.total_seconds() / 60 / 60) as i8
    }

    pub fn minutes(&self) -> i8 {
        (self.total_seconds() / 60 % 60) as i8
    }

    pub fn seconds(&self) -> i8 {
        (self.total_seconds() % 60) as i8
    }
}

impl TemporalAccessor for ZoneOffset {
    const NAME: &'static str = "ZoneOffset";

    fn is_zero(&self) -> bool {
        ZoneOffset::is_zero(self)
    }

    fn is_supported_field(&self, field: Field) -> bool {
        field == Field::OffsetSeconds
    }

    fn get_field(&self, field: Field) -> TemporalValue {
        match self.offset_seconds {
            Some(s) if field == Field::OffsetSeconds => TemporalValue::Valid(s as i64),
            _                                        => TemporalValue::Unsupported,
        }
    }
}

impl Temporal for ZoneOffset {
    fn with_field(&self, field: Field, value: i64) -> Result<Self, Error> {
        if self.is_zero() || field != Field::OffsetSeconds {
            return Err(unsupported::<Self>(field));
        }

        Self::of_seconds(value)
    }
}


/// A local date-time paired with the offset it was seen at, which together
/// pin down an exact instant.
///
/// If either half is unset, the whole value is the zero value.
///
/// Two values are *equal* only if both their local date-times and their
/// offsets match; use `is_equal` to ask whether they are the same instant.
/// Values are *ordered* by instant, with ties between different offsets
/// broken by the local date-time, and the zero value sorts first.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct OffsetDateTime {
    local: LocalDateTime,
    offset: ZoneOffset,
}

impl OffsetDateTime {

    /// Pairs a local date-time with an offset.
    pub fn of(local: LocalDateTime, offset: ZoneOffset) -> Self {
        if local.is_zero() || offset.is_zero() {
            return Self::default();
        }

        Self { local, offset }
    }

    /// Computes the date-time seen at the given offset at an instant.
    pub fn of_instant(instant: Instant, offset: ZoneOffset) -> Result<Self, Error> {
        let local = LocalDateTime::of_epoch_second(instant.seconds(), instant.nanos() as i64, offset)
                                  .map_err(|_| Error::overflow(Self::NAME, "of_instant"))?;
        Ok(Self::of(local, offset))
    }

    /// Creates a new date-time stamp set to the current time, at UTC.
    #[cfg(feature = "now")]
    pub fn now_utc() -> Self {
        Self::of(LocalDateTime::now_utc(), ZoneOffset::UTC)
    }

    /// Whether this is the zero value.
    pub fn is_zero(&self) -> bool {
        self.local.is_zero()
    }

    pub fn local(&self) -> LocalDateTime {
        self.local
    }

    pub fn offset(&self) -> ZoneOffset {
        self.offset
    }

    pub fn date(&self) -> LocalDate {
        self.local.date()
    }

    pub fn time(&self) -> LocalTime {
        self.local.time()
    }

    /// The number of seconds since **midnight, 1st January, 1970** UTC.
    pub fn to_epoch_second(&self) -> i64 {
        self.local.to_epoch_second(self.offset)
    }

    /// The exact instant this value refers to.
    pub fn instant(&self) -> Instant {
        Instant::from_parts(self.to_epoch_second(), self.local.nanosecond())
    }

    /// Returns the same local date-time at another offset, which is a
    /// different instant.
    pub fn with_offset_same_local(&self, offset: ZoneOffset) -> Self {
        Self::of(self.local, offset)
    }

    /// Returns the same instant as seen at another offset, adjusting the
    /// local date-time by the difference between the offsets.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use caltime::{LocalDateTime, OffsetDateTime, ZoneOffset};
    ///
    /// let tokyo = LocalDateTime::of(2024, 3, 15, 14, 30, 45, 0).unwrap()
    ///                           .at_offset(ZoneOffset::of_hours(9).unwrap());
    /// let utc = tokyo.with_offset_same_instant(ZoneOffset::UTC).unwrap();
    ///
    /// assert_eq!(utc.local(), LocalDateTime::of(2024, 3, 15, 5, 30, 45, 0).unwrap());
    /// assert!(utc.is_equal(&tokyo));
    /// assert_ne!(utc, tokyo);
    /// ```
    pub fn with_offset_same_instant(&self, offset: ZoneOffset) -> Result<Self, Error> {
        if self.is_zero() || offset == self.offset {
            return Ok(Self::of(self.local, offset));
        }

        let difference = offset.total_seconds() as i64 - self.offset.total_seconds() as i64;
        let local = self.local.plus_seconds(difference)
                              .map_err(|_| Error::overflow(Self::NAME, "with_offset_same_instant"))?;
        Ok(Self::of(local, offset))
    }

    /// The same instant, at UTC.
    pub fn to_utc(&self) -> Result<Self, Error> {
        self.with_offset_same_instant(ZoneOffset::UTC)
    }

    fn instant_key(&self) -> (i64, u32) {
        (self.to_epoch_second(), self.local.nanosecond())
    }

    /// Whether both values refer to the same instant, whatever their
    /// offsets.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.instant_key() == other.instant_key()
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self.instant_key() < other.instant_key()
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.instant_key() > other.instant_key()
    }

    fn map_local<F>(&self, operation: F) -> Result<Self, Error>
    where F: FnOnce(&LocalDateTime) -> Result<LocalDateTime, Error>
    {
        operation(&self.local).map(|local| Self::of(local, self.offset))
    }

    pub fn plus_days(&self, days: i64) -> Result<Self, Error> { self.map_local(|l| l.plus_days(days)) }
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, Error> { self.map_local(|l| l.plus_weeks(weeks)) }
    pub fn plus_months(&self, months: i64) -> Result<Self, Error> { self.map_local(|l| l.plus_months(months)) }
    pub fn plus_years(&self, years: i64) -> Result<Self, Error> { self.map_local(|l| l.plus_years(years)) }
    pub fn plus_hours(&self, hours: i64) -> Result<Self, Error> { self.map_local(|l| l.plus_hours(hours)) }
    pub fn plus_minutes(&self, minutes: i64) -> Result<Self, Error> { self.map_local(|l| l.plus_minutes(minutes)) }
    pub fn plus_seconds(&self, seconds: i64) -> Result<Self, Error> { self.map_local(|l| l.plus_seconds(seconds)) }
    pub fn plus_nanos(&self, nanos: i64) -> Result<Self, Error> { self.map_local(|l| l.plus_nanos(nanos)) }

    pub fn minus_days(&self, days: i64) -> Result<Self, Error> { self.map_local(|l| l.minus_days(days)) }
    pub fn minus_weeks(&self, weeks: i64) -> Result<Self, Error> { self.map_local(|l| l.minus_weeks(weeks)) }
    pub fn minus_months(&self, months: i64) -> Result<Self, Error> { self.map_local(|l| l.minus_months(months)) }
    pub fn minus_years(&self, years: i64) -> Result<Self, Error> { self.map_local(|l| l.minus_years(years)) }
    pub fn minus_hours(&self, hours: i64) -> Result<Self, Error> { self.map_local(|l| l.minus_hours(hours)) }
    pub fn minus_minutes(&self, minutes: i64) -> Result<Self, Error> { self.map_local(|l| l.minus_minutes(minutes)) }
    pub fn minus_seconds(&self, seconds: i64) -> Result<Self, Error> { self.map_local(|l| l.minus_seconds(seconds)) }
    pub fn minus_nanos(&self, nanos: i64) -> Result<Self, Error> { self.map_local(|l| l.minus_nanos(nanos)) }
}

impl Ord for OffsetDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true,  true)   => return Ordering::Equal,
            (true,  false)  => return Ordering::Less,
            (false, true)   => return Ordering::Greater,
            (false, false)  => {},
        }

        if self.offset == other.offset {
            return self.local.cmp(&other.local);
        }

        self.instant_key().cmp(&other.instant_key())
            .then_with(|| self.local.cmp(&other.local))
    }
}

impl PartialOrd for OffsetDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DatePiece for OffsetDateTime {
    fn year(&self) -> i64 { self.local.year() }
    fn month(&self) -> Month { self.local.month() }
    fn day(&self) -> u8 { self.local.day() }
    fn day_of_year(&self) -> u16 { self.local.day_of_year() }
    fn day_of_week(&self) -> DayOfWeek { self.local.day_of_week() }
}

impl TimePiece for OffsetDateTime {
    fn hour(&self) -> u8 { self.local.hour() }
    fn minute(&self) -> u8 { self.local.minute() }
    fn second(&self) -> u8 { self.local.second() }
    fn nanosecond(&self) -> u32 { self.local.nanosecond() }
}

impl TemporalAccessor for OffsetDateTime {
    const NAME: &'static str = "OffsetDateTime";

    fn is_zero(&self) -> bool {
        OffsetDateTime::is_zero(self)
    }

    fn is_supported_field(&self, _field: Field) -> bool {
        true
    }

    fn get_field(&self, field: Field) -> TemporalValue {
        if self.is_zero() {
            return TemporalValue::Unsupported;
        }

        match field {
            Field::InstantSeconds  => TemporalValue::Valid(self.to_epoch_second()),
            Field::OffsetSeconds   => self.offset.get_field(field),
            _                      => self.local.get_field(field),
        }
    }
}

impl Temporal for OffsetDateTime {
    fn with_field(&self, field: Field, value: i64) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(unsupported::<Self>(field));
        }

        match field {
            Field::InstantSeconds => {
                let instant = Instant::from_parts(value, self.local.nanosecond());
                Self::of_instant(instant, self.offset)
            },
            Field::OffsetSeconds => {
                let offset = ZoneOffset::of_seconds(value)?;
                Ok(self.with_offset_same_local(offset))
            },
            _ => {
                let local = self.local.with_field(field, value)?;
                Ok(Self::of(local, self.offset))
            },
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fixed_seconds() {
        assert!(ZoneOffset::of_seconds(1234).is_ok());
    }

    #[test]
    fn fixed_seconds_err() {
        assert!(matches!(ZoneOffset::of_seconds(64_801), Err(Error::FieldOutOfRange { field: Field::OffsetSeconds, .. })));
        assert!(ZoneOffset::of_seconds(-64_800).is_ok());
    }

    #[test]
    fn fixed_hm() {
        assert!(ZoneOffset::of_hours_minutes_seconds(5, 30, 0).is_ok());
    }

    #[test]
    fn fixed_hm_negative() {
        assert!(ZoneOffset::of_hours_minutes_seconds(-3, -45, 0).is_ok());
    }

    #[test]
    fn fixed_hm_err() {
        assert!(ZoneOffset::of_hours_minutes_seconds(8, 60, 0).is_err());
        assert!(ZoneOffset::of_hours_minutes_seconds(19, 0, 0).is_err());
        assert!(ZoneOffset::of_hours_minutes_seconds(18, 0, 1).is_err());
    }

    #[test]
    fn fixed_hm_signs() {
        assert!(matches!(ZoneOffset::of_hours_minutes_seconds(-4, 30, 0),
                         Err(Error::FieldOutOfRange { field: Field::MinuteOfHour, .. })));
        assert!(matches!(ZoneOffset::of_hours_minutes_seconds(0, -30, 15),
                         Err(Error::FieldOutOfRange { field: Field::SecondOfMinute, .. })));
    }

    #[test]
    fn fixed_hm_signs_zero() {
        assert!(ZoneOffset::of_hours_minutes_seconds(4, 0, 0).is_ok());
        assert!(ZoneOffset::of_hours_minutes_seconds(0, 0, -5).is_ok());
    }

    #[test]
    fn utc_is_not_zero() {
        assert!(!ZoneOffset::UTC.is_zero());
        assert!(ZoneOffset::default().is_zero());
        assert_eq!(ZoneOffset::UTC.get_field(Field::OffsetSeconds), TemporalValue::Valid(0));
        assert_eq!(ZoneOffset::default().get_field(Field::OffsetSeconds), TemporalValue::Unsupported);
    }

    #[test]
    fn parts() {
        let offset = ZoneOffset::of_seconds(-(25 * 60 + 21)).unwrap();
        assert_eq!((offset.hours(), offset.minutes(), offset.seconds()), (0, -25, -21));
        assert!(offset.is_negative());
    }

    fn odt(h: i64, offset_hours: i64) -> OffsetDateTime {
        LocalDateTime::of(2024, 3, 15, h, 0, 0, 0).unwrap()
                      .at_offset(ZoneOffset::of_hours(offset_hours).unwrap())
    }

    #[test]
    fn same_instant_ordering() {
        let a = odt(12, 2);
        let b = odt(11, 1);
        assert!(a.is_equal(&b));
        assert_ne!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Greater);
        assert!(odt(12, 2).is_before(&odt(12, 1)));
        assert!(odt(12, 2) < odt(12, 1));
    }

    #[test]
    fn instant_seconds() {
        let dt = odt(0, 1);
        assert_eq!(dt.get_field(Field::InstantSeconds), TemporalValue::Valid(dt.to_epoch_second()));
        assert_eq!(dt.to_epoch_second(), 1_710_457_200);
        let moved = dt.with_field(Field::InstantSeconds, 0).unwrap();
        assert_eq!(moved.local(), LocalDateTime::of(1970, 1, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(moved.offset(), dt.offset());
    }

    #[test]
    fn offset_seconds_keep_local() {
        let dt = odt(9, 1);
        let moved = dt.with_field(Field::OffsetSeconds, -3600).unwrap();
        assert_eq!(moved.local(), dt.local());
        assert_eq!(moved.offset().total_seconds(), -3600);
    }

    #[test]
    fn zero_value() {
        let zero = OffsetDateTime::default();
        assert!(zero.is_zero());
        assert!(OffsetDateTime::of(LocalDateTime::default(), ZoneOffset::UTC).is_zero());
        assert!(zero < odt(0, 18));
        assert_eq!(zero.to_utc().unwrap(), zero);
        assert_eq!(zero.get_field(Field::InstantSeconds), TemporalValue::Unsupported);
    }
}
