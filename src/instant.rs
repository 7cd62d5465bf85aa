//! Exact points on a timeline.

use std::fmt;

use crate::error::Error;
use crate::field::Field;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with nanosecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since the
/// Unix epoch, and a 32-bit integer of nanoseconds into that second, which
/// is always between 0 and 999,999,999. An instant just before the epoch is
/// therefore `-1` seconds plus some positive number of nanoseconds.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct Instant {
    seconds: i64,
    nanos: u32,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub fn at(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, along with the number of nanoseconds so far this
    /// second.
    pub fn at_nanos(seconds: i64, nanos: i64) -> Result<Self, Error> {
        let nanos = Field::NanoOfSecond.check(nanos)?;
        Ok(Self { seconds, nanos: nanos as u32 })
    }

    pub(crate) fn from_parts(seconds: i64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Creates a new Instant set to the computer’s current time.
    #[cfg(feature = "now")]
    pub fn now() -> Self {
        let (seconds, nanos) = crate::system::sys_time();
        Self { seconds, nanos }
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of nanoseconds into the second at this instant.
    pub fn nanos(&self) -> u32 {
        self.nanos
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({}s/{}ns)", self.seconds, self.nanos)
    }
}
