//! Fluent, multi-step changes to a value, with error handling deferred to
//! the end.
//!
//! Each step runs only if every step before it succeeded. The first
//! failure is kept, along with the names of the type and operation that
//! caused it, and every step after it does nothing.
//!
//! ```rust
//! use caltime::LocalDate;
//!
//! let date = LocalDate::of(2024, 1, 31).unwrap()
//!     .chain()
//!     .plus_months(1)
//!     .plus_days(1)
//!     .get_result()
//!     .unwrap();
//! assert_eq!(date.to_string(), "2024-03-01");
//!
//! let error = LocalDate::MAX.chain().plus_days(1).plus_days(-1).get_result().unwrap_err();
//! assert_eq!(error.operation, "plus_days");
//! ```

use thiserror::Error;

use crate::cal::date::LocalDate;
use crate::cal::datetime::LocalDateTime;
use crate::cal::offset::{OffsetDateTime, ZoneOffset};
use crate::cal::time::LocalTime;
use crate::cal::year::YearMonth;
use crate::error::Error;
use crate::field::{Field, Temporal};


/// The first error a chain ran into.
#[derive(PartialEq, Eq, Debug, Clone, Error)]
#[error("{component}.{operation}: {source}")]
pub struct ChainError {

    /// The type the failing operation was called on.
    pub component: &'static str,

    /// The name of the failing operation.
    pub operation: &'static str,

    /// What went wrong.
    pub source: Error,
}


/// A value that is partway through a sequence of changes, or the error
/// that stopped them.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Chain<T> {
    value: T,
    error: Option<ChainError>,
}

impl<T: Temporal + Copy> Chain<T> {

    /// Starts a chain from a value.
    pub fn new(value: T) -> Self {
        Self { value, error: None }
    }

    /// Runs one step, unless an earlier one has already failed.
    pub fn step<F>(self, operation: &'static str, step: F) -> Self
    where F: FnOnce(&T) -> Result<T, Error>
    {
        if self.error.is_some() {
            return self;
        }

        match step(&self.value) {
            Ok(value) => Self { value, error: None },
            Err(source) => {
                tracing::debug!(component = T::NAME, operation, error = %source, "chain stopped");
                let error = ChainError { component: T::NAME, operation, source };
                Self { value: self.value, error: Some(error) }
            },
        }
    }

    /// Replaces one field of the value.
    pub fn with_field(self, field: Field, value: i64) -> Self {
        self.step("with_field", |v| v.with_field(field, value))
    }

    /// Returns the final value, or the first error.
    pub fn get_result(self) -> Result<T, ChainError> {
        match self.error {
            Some(e) => Err(e),
            None    => Ok(self.value),
        }
    }

    /// Returns the final value, panicking if any step failed.
    pub fn must_get(self) -> T {
        match self.error {
            Some(e) => panic!("{}", e),
            None    => self.value,
        }
    }

    /// Returns the final value, or the fallback if any step failed.
    pub fn get_or_else(self, fallback: T) -> T {
        match self.error {
            Some(_) => fallback,
            None    => self.value,
        }
    }

    /// The first error, if any step failed.
    pub fn get_error(&self) -> Option<&ChainError> {
        self.error.as_ref()
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

impl<T: Temporal + Copy> From<T> for Chain<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}


/// Adds a `chain` method to the type, and a chain step for each of its
/// fallible operations that take an `i64`.
macro_rules! chain_steps {
    ($type:ty { $($op:ident),* $(,)? }) => {
        impl $type {
            /// Starts a chain of changes from this value.
            pub fn chain(&self) -> Chain<$type> {
                Chain::new(*self)
            }
        }

        impl Chain<$type> {
            $(
                pub fn $op(self, amount: i64) -> Self {
                    self.step(stringify!($op), |v| v.$op(amount))
                }
            )*
        }
    };
}

chain_steps!(LocalDate {
    plus_days, plus_weeks, plus_months, plus_years,
    minus_days, minus_weeks, minus_months, minus_years,
    with_year, with_month, with_day_of_month, with_day_of_year,
});

chain_steps!(LocalDateTime {
    plus_days, plus_weeks, plus_months, plus_years,
    minus_days, minus_weeks, minus_months, minus_years,
    plus_hours, plus_minutes, plus_seconds, plus_nanos,
    minus_hours, minus_minutes, minus_seconds, minus_nanos,
});

chain_steps!(OffsetDateTime {
    plus_days, plus_weeks, plus_months, plus_years,
    minus_days, minus_weeks, minus_months, minus_years,
    plus_hours, plus_minutes, plus_seconds, plus_nanos,
    minus_hours, minus_minutes, minus_seconds, minus_nanos,
});

chain_steps!(YearMonth {
    plus_months, plus_years, minus_months, minus_years,
});

chain_steps!(LocalTime {
    with_hour, with_minute, with_second, with_nano,
});

// Time arithmetic wraps around midnight, so it can’t fail.
impl Chain<LocalTime> {
    pub fn plus_hours(self, hours: i64) -> Self { self.step("plus_hours", |t| Ok(t.plus_hours(hours))) }
    pub fn plus_minutes(self, minutes: i64) -> Self { self.step("plus_minutes", |t| Ok(t.plus_minutes(minutes))) }
    pub fn plus_seconds(self, seconds: i64) -> Self { self.step("plus_seconds", |t| Ok(t.plus_seconds(seconds))) }
    pub fn plus_nanos(self, nanos: i64) -> Self { self.step("plus_nanos", |t| Ok(t.plus_nanos(nanos))) }
    pub fn minus_hours(self, hours: i64) -> Self { self.step("minus_hours", |t| Ok(t.minus_hours(hours))) }
    pub fn minus_minutes(self, minutes: i64) -> Self { self.step("minus_minutes", |t| Ok(t.minus_minutes(minutes))) }
    pub fn minus_seconds(self, seconds: i64) -> Self { self.step("minus_seconds", |t| Ok(t.minus_seconds(seconds))) }
    pub fn minus_nanos(self, nanos: i64) -> Self { self.step("minus_nanos", |t| Ok(t.minus_nanos(nanos))) }
}

impl Chain<OffsetDateTime> {
    pub fn with_offset_same_instant(self, offset: ZoneOffset) -> Self {
        self.step("with_offset_same_instant", |dt| dt.with_offset_same_instant(offset))
    }

    pub fn with_offset_same_local(self, offset: ZoneOffset) -> Self {
        self.step("with_offset_same_local", |dt| Ok(dt.with_offset_same_local(offset)))
    }

    pub fn to_utc(self) -> Self {
        self.step("to_utc", |dt| dt.to_utc())
    }
}

impl Chain<ZoneOffset> {
    pub fn with_offset_seconds(self, seconds: i64) -> Self {
        self.step("with_offset_seconds", |_| ZoneOffset::of_seconds(seconds))
    }
}

impl ZoneOffset {
    /// Starts a chain of changes from this value.
    pub fn chain(&self) -> Chain<ZoneOffset> {
        Chain::new(*self)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn steps_in_order() {
        let date = LocalDate::of(2023, 1, 31).unwrap()
            .chain()
            .plus_months(1)
            .plus_months(1)
            .must_get();
        assert_eq!(date, LocalDate::of(2023, 3, 28).unwrap());
    }

    #[test]
    fn first_error_wins() {
        let chain = LocalDate::of(2023, 1, 31).unwrap()
            .chain()
            .with_month(13)
            .with_day_of_month(40);

        let error = chain.get_error().unwrap();
        assert_eq!(error.component, "LocalDate");
        assert_eq!(error.operation, "with_month");
        assert!(matches!(error.source, Error::FieldOutOfRange { field: Field::MonthOfYear, .. }));
    }

    #[test]
    fn steps_after_an_error_are_skipped() {
        let start = LocalDate::MAX;
        let chain = start.chain().plus_days(1).minus_days(1);
        assert!(chain.is_err());
        assert_eq!(chain.get_or_else(LocalDate::EPOCH), LocalDate::EPOCH);
    }

    #[test]
    fn error_display() {
        let error = LocalDate::MAX.chain().plus_years(1).get_result().unwrap_err();
        assert_eq!(error.to_string(), "LocalDate.plus_years: LocalDate::plus_years overflowed");
    }

    #[test]
    #[should_panic]
    fn must_get_panics() {
        let _ = LocalTime::NOON.chain().with_hour(25).must_get();
    }

    #[test]
    fn times_wrap() {
        let time = LocalTime::NOON.chain().plus_hours(13).minus_minutes(30).must_get();
        assert_eq!(time, LocalTime::of(0, 30, 0, 0).unwrap());
    }

    #[test]
    fn with_fields() {
        let dt = LocalDateTime::of(2024, 3, 15, 14, 30, 0, 0).unwrap()
            .chain()
            .with_field(Field::DayOfWeek, 1)
            .with_field(Field::AmPmOfDay, 0)
            .must_get();
        assert_eq!(dt, LocalDateTime::of(2024, 3, 11, 2, 30, 0, 0).unwrap());
    }

    #[test]
    fn offsets() {
        let dt = LocalDateTime::of(2024, 3, 15, 14, 30, 45, 0).unwrap()
            .at_offset(ZoneOffset::of_hours(9).unwrap())
            .chain()
            .with_offset_same_instant(ZoneOffset::UTC)
            .plus_minutes(30)
            .must_get();
        assert_eq!(dt.to_string(), "2024-03-15T06:00:45Z");
    }
}
