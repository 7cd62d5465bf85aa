//! Misc stuff.

use std::ops::RangeInclusive;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given inclusive range
    /// of values.
    fn is_within(&self, range: RangeInclusive<Self>) -> bool where Self: Sized;
}

// Define RangeExt on *anything* that can be compared, though it’s only
// really ever used for numeric ranges...

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: RangeInclusive<Self>) -> bool {
        range.contains(self)
    }
}


/// Division that rounds towards negative infinity, rather than towards
/// zero like the `/` operator does.
///
/// Every calendar calculation that can see a negative day count (dates
/// before 1970, weekdays, day overflow out of a time of day) needs this
/// instead of plain division.
pub const fn floor_div(x: i64, y: i64) -> i64 {
    let q = x / y;
    if (x % y != 0) && ((x < 0) != (y < 0)) { q - 1 } else { q }
}

/// The remainder that goes with `floor_div`: it always has the same sign
/// as the divisor.
pub const fn floor_mod(x: i64, y: i64) -> i64 {
    x - floor_div(x, y) * y
}
