#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Immutable ISO-8601 calendar dates, times of day, and datetimes with a
//! fixed UTC offset.
//!
//! Every value validates itself on construction, and every change returns
//! a new value. Date arithmetic that runs off either end of the supported
//! range returns an error; time-of-day arithmetic wraps around midnight.
//!
//! # Examples
//!
//! ```
//! use caltime::{LocalDate, LocalTime, ZoneOffset, DatePiece, DayOfWeek};
//!
//! let date: LocalDate = "2024-01-31".parse().unwrap();
//! assert_eq!(date.plus_months(1).unwrap().to_string(), "2024-02-29");
//! assert_eq!(date.day_of_week(), DayOfWeek::Wednesday);
//!
//! let time = LocalTime::of(14, 30, 45, 100_000_000).unwrap();
//! assert_eq!(time.to_string(), "14:30:45.100");
//!
//! let dt = date.at_time(time).at_offset(ZoneOffset::of_hours(9).unwrap());
//! assert_eq!(dt.to_utc().unwrap().to_string(), "2024-01-31T05:30:45.100Z");
//! ```
//!
//! Every value type also has a *zero value*, which is what `Default`
//! returns. It stands for “not set”, is distinct from every real value
//! (including midnight and UTC), displays as an empty string, and passes
//! through arithmetic unchanged.

mod cal;
mod chain;
mod error;
mod field;
mod instant;
mod util;

#[cfg(feature = "now")]
mod system;

#[cfg(feature = "serde")]
mod serde;

pub use crate::cal::gregorian;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::date::LocalDate;
pub use crate::cal::time::LocalTime;
pub use crate::cal::datetime::LocalDateTime;
pub use crate::cal::offset::{OffsetDateTime, ZoneOffset};
pub use crate::cal::year::{DayOfWeek, DaySpan, Month, MonthDays, MonthSpan, Year, YearMonth, YearMonths};
pub use crate::cal::fmt::{ISO, ISOString};
pub use crate::cal::parse::{parse_local_date, parse_local_date_time, parse_local_time,
                            parse_offset_date_time, parse_year_month, parse_zone_offset};
pub use crate::cal::gregorian::{MAX_YEAR, MIN_YEAR};

pub use crate::chain::{Chain, ChainError};
pub use crate::error::{Error, ParseReason};
pub use crate::field::{Field, Temporal, TemporalAccessor, TemporalValue, ValueRange};
pub use crate::instant::Instant;
pub use crate::util::{floor_div, floor_mod};
