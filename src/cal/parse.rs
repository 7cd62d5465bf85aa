//! Reading values back from their ISO-8601 forms.
//!
//! The grammar is strict: fixed widths everywhere except the year and the
//! fraction of a second, no whitespace, and nothing left over. Text that
//! breaks the grammar fails with `Error::Parse`, which carries the byte
//! offset where things went wrong. Text that fits the grammar but names
//! something impossible, such as the 30th of February, fails with the same
//! error the constructor would have given.

use std::str::FromStr;

use crate::cal::date::LocalDate;
use crate::cal::datetime::LocalDateTime;
use crate::cal::offset::{OffsetDateTime, ZoneOffset};
use crate::cal::time::LocalTime;
use crate::cal::year::YearMonth;
use crate::error::{Error, ParseReason};
use crate::field::TemporalAccessor;
use crate::util::RangeExt;


/// A value read from the front of the input, along with the input that
/// is left after it.
struct Parsed<'i, V> {
    value: V,
    input: &'i [u8],
}

/// Parses pieces out of one piece of text, keeping hold of the whole of it
/// so errors can report where they happened.
struct Parser<'w> {
    whole: &'w str,
    component: &'static str,
}

impl<'w> Parser<'w> {

    fn new<T: TemporalAccessor>(whole: &'w str) -> Result<Self, Error> {
        let parser = Self { whole, component: T::NAME };
        if whole.is_empty() {
            return Err(parser.fail(ParseReason::Empty));
        }
        Ok(parser)
    }

    fn bytes(&self) -> &'w [u8] {
        self.whole.as_bytes()
    }

    /// Where the given remainder starts within the whole input.
    fn offset(&self, input: &[u8]) -> usize {
        input.as_ptr() as usize - self.whole.as_ptr() as usize
    }

    fn fail(&self, reason: ParseReason) -> Error {
        tracing::trace!(component = self.component, input = self.whole, %reason, "rejected input");
        Error::parse(self.whole, reason)
    }

    fn expected(&self, input: &[u8], what: &'static str) -> Error {
        self.fail(ParseReason::Expected { what, offset: self.offset(input) })
    }

    fn finish(&self, input: &[u8]) -> Result<(), Error> {
        if input.is_empty() {
            Ok(())
        }
        else {
            Err(self.fail(ParseReason::TrailingInput { offset: self.offset(input) }))
        }
    }

    /// Consumes the given byte, or fails.
    fn byte<'i>(&self, input: &'i [u8], byte: u8, what: &'static str) -> Result<&'i [u8], Error> {
        match input.split_first() {
            Some((b, rest)) if *b == byte => Ok(rest),
            _                             => Err(self.expected(input, what)),
        }
    }

    /// Consumes exactly `count` decimal digits.
    fn digits<'i>(&self, input: &'i [u8], count: usize, what: &'static str) -> Result<Parsed<'i, i64>, Error> {
        if input.len() < count || !input[.. count].iter().all(is_digit) {
            return Err(self.expected(input, what));
        }

        let (digits, input) = input.split_at(count);
        Ok(Parsed { value: to_number(digits), input })
    }

    /// Counts the run of digits at the front of the input.
    fn digit_run(input: &[u8]) -> usize {
        input.iter().take_while(|b| is_digit(b)).count()
    }

    // Year :::
    //   Digit{4}
    //   Sign Digit{4,9}
    fn year<'i>(&self, input: &'i [u8]) -> Result<Parsed<'i, i64>, Error> {
        let (sign, unsigned) = match input.first() {
            Some(b'+') => (1, &input[1 ..]),
            Some(b'-') => (-1, &input[1 ..]),
            _          => return self.digits(input, 4, "four-digit year"),
        };

        let count = Self::digit_run(unsigned);
        if !count.is_within(4 ..= 9) {
            return Err(self.fail(ParseReason::InvalidNumber { what: "year", offset: self.offset(input) }));
        }

        let Parsed { value, input } = self.digits(unsigned, count, "year digits")?;
        Ok(Parsed { value: sign * value, input })
    }

    // Date ::: Year '-' Digit{2} '-' Digit{2}
    fn date<'i>(&self, input: &'i [u8]) -> Result<Parsed<'i, LocalDate>, Error> {
        let Parsed { value: year, input } = self.year(input)?;
        let input = self.byte(input, b'-', "'-' after the year")?;
        let Parsed { value: month, input } = self.digits(input, 2, "two-digit month")?;
        let input = self.byte(input, b'-', "'-' after the month")?;
        let Parsed { value: day, input } = self.digits(input, 2, "two-digit day")?;

        let value = LocalDate::of(year, month, day)?;
        Ok(Parsed { value, input })
    }

    // Time ::: Digit{2} ':' Digit{2} ':' Digit{2} ( '.' Digit{1,9} )?
    fn time<'i>(&self, input: &'i [u8]) -> Result<Parsed<'i, LocalTime>, Error> {
        let Parsed { value: hour, input } = self.digits(input, 2, "two-digit hour")?;
        let input = self.byte(input, b':', "':' after the hour")?;
        let Parsed { value: minute, input } = self.digits(input, 2, "two-digit minute")?;
        let input = self.byte(input, b':', "':' after the minute")?;
        let Parsed { value: second, input } = self.digits(input, 2, "two-digit second")?;
        let Parsed { value: nanosecond, input } = self.fraction(input)?;

        let value = LocalTime::of(hour, minute, second, nanosecond)?;
        Ok(Parsed { value, input })
    }

    /// An optional fraction of a second, scaled up to nanoseconds, so
    /// `.1` is a hundred million of them.
    fn fraction<'i>(&self, input: &'i [u8]) -> Result<Parsed<'i, i64>, Error> {
        let digits = match input.split_first() {
            Some((b'.', rest)) => rest,
            _                  => return Ok(Parsed { value: 0, input }),
        };

        let count = Self::digit_run(digits);
        if count == 0 {
            return Err(self.expected(digits, "fraction digits"));
        }
        else if count > 9 {
            return Err(self.fail(ParseReason::FractionTooLong { offset: self.offset(digits) }));
        }

        let Parsed { value, input } = self.digits(digits, count, "fraction digits")?;
        Ok(Parsed { value: value * 10_i64.pow(9 - count as u32), input })
    }

    // DateTime ::: Date [Tt ] Time
    fn date_time<'i>(&self, input: &'i [u8]) -> Result<Parsed<'i, LocalDateTime>, Error> {
        let Parsed { value: date, input } = self.date(input)?;
        let input = match input.split_first() {
            Some((b'T', rest)) | Some((b't', rest)) | Some((b' ', rest)) => rest,
            _ => return Err(self.expected(input, "'T' between the date and the time")),
        };
        let Parsed { value: time, input } = self.time(input)?;

        Ok(Parsed { value: LocalDateTime::new(date, time), input })
    }

    // Offset :::
    //   [Zz]
    //   Sign Digit{2} ( ':' Digit{2} ( ':' Digit{2} )? )?
    //   Sign Digit{2} ( Digit{2} ( Digit{2} )? )?
    fn offset_value<'i>(&self, input: &'i [u8]) -> Result<Parsed<'i, ZoneOffset>, Error> {
        let (sign, input) = match input.split_first() {
            Some((b'Z', rest)) | Some((b'z', rest)) => return Ok(Parsed { value: ZoneOffset::UTC, input: rest }),
            Some((b'+', rest))                      => (1, rest),
            Some((b'-', rest))                      => (-1, rest),
            _ => return Err(self.expected(input, "'Z', '+', or '-' to start the offset")),
        };

        let Parsed { value: hours, input } = self.digits(input, 2, "two-digit offset hours")?;
        let colons = input.first() == Some(&b':');
        let Parsed { value: minutes, input } = self.offset_part(input, colons, "two-digit offset minutes")?;
        let Parsed { value: seconds, input } = match minutes {
            Some(_) => self.offset_part(input, colons, "two-digit offset seconds")?,
            None    => Parsed { value: None, input },
        };

        let value = ZoneOffset::of_hours_minutes_seconds(
            sign * hours, sign * minutes.unwrap_or(0), sign * seconds.unwrap_or(0))?;
        Ok(Parsed { value, input })
    }

    /// The optional minutes or seconds of an offset: two digits after a
    /// colon if the offset uses colons, or straight after the previous part
    /// if it doesn’t.
    fn offset_part<'i>(&self, input: &'i [u8], colons: bool, what: &'static str) -> Result<Parsed<'i, Option<i64>>, Error> {
        let digits = if colons {
            match input.split_first() {
                Some((b':', rest)) => rest,
                _                  => return Ok(Parsed { value: None, input }),
            }
        }
        else if input.first().map_or(false, is_digit) {
            input
        }
        else {
            return Ok(Parsed { value: None, input });
        };

        let Parsed { value, input } = self.digits(digits, 2, what)?;
        Ok(Parsed { value: Some(value), input })
    }
}

fn is_digit(b: &u8) -> bool {
    b.is_within(b'0' ..= b'9')
}

fn to_number(digits: &[u8]) -> i64 {
    digits.iter().fold(0, |n, d| n * 10 + (d - b'0') as i64)
}


/// Parses a date in `YYYY-MM-DD` form.
pub fn parse_local_date(input: &str) -> Result<LocalDate, Error> {
    let parser = Parser::new::<LocalDate>(input)?;
    let Parsed { value, input } = parser.date(parser.bytes())?;
    parser.finish(input)?;
    Ok(value)
}

/// Parses a time in `HH:MM:SS` form, with up to nine digits of fraction.
pub fn parse_local_time(input: &str) -> Result<LocalTime, Error> {
    let parser = Parser::new::<LocalTime>(input)?;
    let Parsed { value, input } = parser.time(parser.bytes())?;
    parser.finish(input)?;
    Ok(value)
}

/// Parses a date and a time, separated by `T`, `t`, or a space.
pub fn parse_local_date_time(input: &str) -> Result<LocalDateTime, Error> {
    let parser = Parser::new::<LocalDateTime>(input)?;
    let Parsed { value, input } = parser.date_time(parser.bytes())?;
    parser.finish(input)?;
    Ok(value)
}

/// Parses an offset: `Z`, or a sign followed by hours, and optionally
/// minutes and seconds, with or without colons.
pub fn parse_zone_offset(input: &str) -> Result<ZoneOffset, Error> {
    let parser = Parser::new::<ZoneOffset>(input)?;
    let Parsed { value, input } = parser.offset_value(parser.bytes())?;
    parser.finish(input)?;
    Ok(value)
}

/// Parses a date and time followed immediately by an offset.
///
/// The offset is found by looking backwards from the end of the text for
/// the last `+`, `-`, or `Z`, which has to come after the date.
///
/// ### Examples
///
/// ```rust
/// use caltime::{parse_offset_date_time, ZoneOffset};
///
/// let dt = parse_offset_date_time("2024-03-15T14:30:45+09:00").unwrap();
/// assert_eq!(dt.offset(), ZoneOffset::of_hours(9).unwrap());
/// assert_eq!(dt.to_utc().unwrap().to_string(), "2024-03-15T05:30:45Z");
/// ```
pub fn parse_offset_date_time(input: &str) -> Result<OffsetDateTime, Error> {
    let parser = Parser::new::<OffsetDateTime>(input)?;
    let bytes = parser.bytes();

    let separator = bytes.iter().position(|b| matches!(b, b'T' | b't' | b' '));
    let start = bytes.iter().rposition(|b| matches!(b, b'+' | b'-' | b'Z' | b'z'));

    let split = match (separator, start) {
        (Some(sep), Some(start)) if start > sep  => start,
        (None, _)  => {
            // Let the date-time parser say what’s wrong.
            let _ = parser.date_time(bytes)?;
            return Err(parser.fail(ParseReason::MissingOffset));
        },
        _ => return Err(parser.fail(ParseReason::MissingOffset)),
    };

    let (local_bytes, offset_bytes) = bytes.split_at(split);
    let Parsed { value: local, input } = parser.date_time(local_bytes)?;
    parser.finish(input)?;
    let Parsed { value: offset, input } = parser.offset_value(offset_bytes)?;
    parser.finish(input)?;

    Ok(OffsetDateTime::of(local, offset))
}

/// Parses a year and month in `YYYY-MM` form.
pub fn parse_year_month(input: &str) -> Result<YearMonth, Error> {
    let parser = Parser::new::<YearMonth>(input)?;
    let Parsed { value: year, input } = parser.year(parser.bytes())?;
    let input = parser.byte(input, b'-', "'-' after the year")?;
    let Parsed { value: month, input } = parser.digits(input, 2, "two-digit month")?;
    parser.finish(input)?;
    YearMonth::of(year, month)
}


impl FromStr for LocalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        parse_local_date(input)
    }
}

impl FromStr for LocalTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        parse_local_time(input)
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        parse_local_date_time(input)
    }
}

impl FromStr for ZoneOffset {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        parse_zone_offset(input)
    }
}

impl FromStr for OffsetDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        parse_offset_date_time(input)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        parse_year_month(input)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::field::Field;

    fn reason(result: Result<impl std::fmt::Debug, Error>) -> ParseReason {
        match result {
            Err(Error::Parse { reason, .. }) => reason,
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn date() {
        assert_eq!(parse_local_date("2015-06-26"), Ok(LocalDate::of(2015, 6, 26).unwrap()));
        assert_eq!(parse_local_date("-0753-12-01"), Ok(LocalDate::of(-753, 12, 1).unwrap()));
        assert_eq!(parse_local_date("+10601-01-31"), Ok(LocalDate::of(10601, 1, 31).unwrap()));
    }

    #[test]
    fn date_syntax() {
        assert_eq!(reason(parse_local_date("")), ParseReason::Empty);
        assert_eq!(reason(parse_local_date("2015/06/26")), ParseReason::Expected { what: "'-' after the year", offset: 4 });
        assert_eq!(reason(parse_local_date("2015-6-26")), ParseReason::Expected { what: "two-digit month", offset: 5 });
        assert_eq!(reason(parse_local_date("2015-06-26x")), ParseReason::TrailingInput { offset: 10 });
        assert_eq!(reason(parse_local_date("20150-06-26")), ParseReason::Expected { what: "'-' after the year", offset: 4 });
        assert_eq!(reason(parse_local_date("+123-06-26")), ParseReason::InvalidNumber { what: "year", offset: 0 });
    }

    #[test]
    fn date_semantics() {
        assert!(matches!(parse_local_date("2023-02-29"), Err(Error::InvalidDate(_))));
        assert!(matches!(parse_local_date("2023-13-01"), Err(Error::FieldOutOfRange { field: Field::MonthOfYear, .. })));
    }

    #[test]
    fn time() {
        assert_eq!(parse_local_time("14:30:45"), Ok(LocalTime::of(14, 30, 45, 0).unwrap()));
        assert_eq!(parse_local_time("14:30:45.1"), Ok(LocalTime::of(14, 30, 45, 100_000_000).unwrap()));
        assert_eq!(parse_local_time("14:30:45.000000001"), Ok(LocalTime::of(14, 30, 45, 1).unwrap()));
    }

    #[test]
    fn time_syntax() {
        assert_eq!(reason(parse_local_time("14:30")), ParseReason::Expected { what: "':' after the minute", offset: 5 });
        assert_eq!(reason(parse_local_time("14:30:45.")), ParseReason::Expected { what: "fraction digits", offset: 9 });
        assert_eq!(reason(parse_local_time("14:30:45.1234567890")), ParseReason::FractionTooLong { offset: 9 });
        assert!(matches!(parse_local_time("24:00:00"), Err(Error::FieldOutOfRange { field: Field::HourOfDay, .. })));
    }

    #[test]
    fn date_time_separators() {
        let expected = LocalDateTime::of(2001, 2, 3, 4, 5, 6, 0).unwrap();
        assert_eq!(parse_local_date_time("2001-02-03T04:05:06"), Ok(expected));
        assert_eq!(parse_local_date_time("2001-02-03t04:05:06"), Ok(expected));
        assert_eq!(parse_local_date_time("2001-02-03 04:05:06"), Ok(expected));
        assert_eq!(reason(parse_local_date_time("2001-02-03_04:05:06")),
                   ParseReason::Expected { what: "'T' between the date and the time", offset: 10 });
    }

    #[test]
    fn offsets() {
        let plus_five_thirty = ZoneOffset::of_hours_minutes_seconds(5, 30, 0).unwrap();
        assert_eq!(parse_zone_offset("Z"), Ok(ZoneOffset::UTC));
        assert_eq!(parse_zone_offset("z"), Ok(ZoneOffset::UTC));
        assert_eq!(parse_zone_offset("+05"), Ok(ZoneOffset::of_hours(5).unwrap()));
        assert_eq!(parse_zone_offset("+0530"), Ok(plus_five_thirty));
        assert_eq!(parse_zone_offset("+05:30"), Ok(plus_five_thirty));
        assert_eq!(parse_zone_offset("-00:25:21"), Ok(ZoneOffset::of_seconds(-1521).unwrap()));
        assert_eq!(parse_zone_offset("-002521"), Ok(ZoneOffset::of_seconds(-1521).unwrap()));
    }

    #[test]
    fn offset_syntax() {
        assert_eq!(reason(parse_zone_offset("05:30")), ParseReason::Expected { what: "'Z', '+', or '-' to start the offset", offset: 0 });
        assert_eq!(reason(parse_zone_offset("+05:3")), ParseReason::Expected { what: "two-digit offset minutes", offset: 4 });
        assert_eq!(reason(parse_zone_offset("+05:3000")), ParseReason::TrailingInput { offset: 6 });
        assert_eq!(reason(parse_zone_offset("+0530:00")), ParseReason::TrailingInput { offset: 5 });
        assert!(matches!(parse_zone_offset("+19:00"), Err(Error::FieldOutOfRange { .. })));
    }

    #[test]
    fn offset_date_times() {
        let dt = parse_offset_date_time("2024-03-15T14:30:45.5-03:00").unwrap();
        assert_eq!(dt.local(), LocalDateTime::of(2024, 3, 15, 14, 30, 45, 500_000_000).unwrap());
        assert_eq!(dt.offset(), ZoneOffset::of_hours(-3).unwrap());
        assert_eq!(parse_offset_date_time("2024-03-15T14:30:45z").unwrap().offset(), ZoneOffset::UTC);
    }

    #[test]
    fn missing_offsets() {
        assert_eq!(reason(parse_offset_date_time("2024-03-15T14:30:45")), ParseReason::MissingOffset);
        assert_eq!(reason(parse_offset_date_time("2024-03-15")), ParseReason::Expected { what: "'T' between the date and the time", offset: 10 });
    }

    #[test]
    fn year_months() {
        assert_eq!(parse_year_month("2024-03"), Ok(YearMonth::of(2024, 3).unwrap()));
        assert_eq!(reason(parse_year_month("2024-03-01")), ParseReason::TrailingInput { offset: 7 });
    }
}
