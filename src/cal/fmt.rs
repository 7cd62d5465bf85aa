//! Writing values out in their ISO-8601 forms.
//!
//! Every value’s `Display` is its ISO form, and its `Debug` is the same
//! text wrapped in the type’s name. The zero value displays as nothing
//! at all.

use std::fmt;
use std::str::FromStr;

use pad::{Alignment, PadStr};

use crate::cal::date::LocalDate;
use crate::cal::datetime::LocalDateTime;
use crate::cal::offset::{OffsetDateTime, ZoneOffset};
use crate::cal::time::LocalTime;
use crate::cal::year::{Year, YearMonth};
use crate::cal::{DatePiece, TimePiece};
use crate::error::Error;
use crate::util::RangeExt;


/// Values with a canonical ISO-8601 text form.
///
/// This is the hook for text-based adapters: the zero value writes as the
/// empty string, and reading the empty string gives the zero value.
pub trait ISO: Sized + Default + FromStr<Err = Error> {

    /// Returns a wrapper that displays this value in ISO-8601 form.
    fn iso(&self) -> ISOString<'_, Self> {
        ISOString(self)
    }

    /// Writes this value in ISO-8601 form, or nothing for the zero value.
    fn iso_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Reads a value back from its ISO-8601 form, treating the empty
    /// string as the zero value.
    fn parse_iso(input: &str) -> Result<Self, Error> {
        if input.is_empty() {
            Ok(Self::default())
        }
        else {
            input.parse()
        }
    }
}

/// A value, ready to be displayed in ISO-8601 form.
#[derive(Debug)]
pub struct ISOString<'a, T: 'a>(&'a T);

impl<'a, T: ISO> fmt::Display for ISOString<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iso_fmt(f)
    }
}


/// Writes a year with at least four digits. Years past 9999 get a leading
/// `+`, as the ISO expanded form requires.
fn write_year(f: &mut fmt::Formatter<'_>, year: i64) -> fmt::Result {
    let digits = year.unsigned_abs().to_string().pad(4, '0', Alignment::Right, false);

    if year < 0 {
        write!(f, "-{}", digits)
    }
    else if year.is_within(0 ..= 9999) {
        f.write_str(&digits)
    }
    else {
        write!(f, "+{}", digits)
    }
}

/// Writes the fraction of a second, if there is one, using as few groups
/// of three digits as it takes: `.100`, `.123400`, `.000000001`.
fn write_fraction(f: &mut fmt::Formatter<'_>, nanos: u32) -> fmt::Result {
    if nanos == 0 {
        return Ok(());
    }

    let digits = nanos.to_string().pad(9, '0', Alignment::Right, false);
    let width = if nanos % 1_000_000 == 0 { 3 }
           else if nanos % 1_000     == 0 { 6 }
           else                           { 9 };

    write!(f, ".{}", &digits[.. width])
}

fn write_date(f: &mut fmt::Formatter<'_>, date: &LocalDate) -> fmt::Result {
    write_year(f, date.year())?;
    write!(f, "-{:02}-{:02}", date.month().value(), date.day())
}

fn write_time(f: &mut fmt::Formatter<'_>, time: &LocalTime) -> fmt::Result {
    write!(f, "{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())?;
    write_fraction(f, time.nanosecond())
}

fn write_offset(f: &mut fmt::Formatter<'_>, offset: &ZoneOffset) -> fmt::Result {
    if offset.is_utc() {
        return f.write_str("Z");
    }

    let sign = if offset.is_negative() { '-' } else { '+' };
    write!(f, "{}{:02}:{:02}", sign, offset.hours().unsigned_abs(), offset.minutes().unsigned_abs())?;

    if offset.seconds() != 0 {
        write!(f, ":{:02}", offset.seconds().unsigned_abs())?;
    }

    Ok(())
}


impl ISO for LocalDate {
    fn iso_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() { return Ok(()) }
        write_date(f, self)
    }
}

impl ISO for LocalTime {
    fn iso_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() { return Ok(()) }
        write_time(f, self)
    }
}

impl ISO for LocalDateTime {
    fn iso_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() { return Ok(()) }
        write_date(f, &self.date())?;
        f.write_str("T")?;
        write_time(f, &self.time())
    }
}

impl ISO for ZoneOffset {
    fn iso_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() { return Ok(()) }
        write_offset(f, self)
    }
}

impl ISO for OffsetDateTime {
    fn iso_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() { return Ok(()) }
        self.local().iso_fmt(f)?;
        write_offset(f, &self.offset())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.year.0)?;
        write!(f, "-{:02}", self.month.value())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.0)
    }
}

impl fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YearMonth({})", self)
    }
}


macro_rules! iso_display {
    ($($type:ident),*) => {
        $(
            impl fmt::Display for $type {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.iso_fmt(f)
                }
            }

            impl fmt::Debug for $type {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    if self.is_zero() {
                        write!(f, "{}(zero)", stringify!($type))
                    }
                    else {
                        write!(f, "{}({})", stringify!($type), self.iso())
                    }
                }
            }
        )*
    };
}

iso_display!(LocalDate, LocalTime, LocalDateTime, ZoneOffset, OffsetDateTime);
