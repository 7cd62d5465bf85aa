//! Serde support, as ISO-8601 strings.
//!
//! A set value serializes as its ISO text, and the zero value as `null`.
//! Both `null` and the empty string deserialize to the zero value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cal::fmt::ISO;
use crate::{LocalDate, LocalDateTime, LocalTime, OffsetDateTime, YearMonth, ZoneOffset};


macro_rules! iso_serde {
    ($($type:ident),*) => {
        $(
            impl Serialize for $type {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    if self.is_zero() {
                        serializer.serialize_none()
                    }
                    else {
                        serializer.serialize_str(&self.to_string())
                    }
                }
            }

            impl<'de> Deserialize<'de> for $type {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    match Option::<String>::deserialize(deserializer)? {
                        Some(s) => Self::parse_iso(&s).map_err(serde::de::Error::custom),
                        None    => Ok(Self::default()),
                    }
                }
            }
        )*
    };
}

iso_serde!(LocalDate, LocalTime, LocalDateTime, ZoneOffset, OffsetDateTime);


// A year-month has no zero value, so it is always a string.

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
