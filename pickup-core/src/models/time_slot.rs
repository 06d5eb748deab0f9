use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not one of the offered pickup times.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not an available pickup time")]
pub struct ParseTimeSlotError(pub String);

/// Pickup start times offered in the time dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeSlot {
    #[default]
    Eight,
    Nine,
    Ten,
    Eleven,
    Noon,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 5] = [
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Eleven,
        Self::Noon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eight => "08:00",
            Self::Nine => "09:00",
            Self::Ten => "10:00",
            Self::Eleven => "11:00",
            Self::Noon => "12:00",
        }
    }

    /// Position of this slot in [`TimeSlot::ALL`], as used by the dropdown.
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl FromStr for TimeSlot {
    type Err = ParseTimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| ParseTimeSlotError(s.to_string()))
    }
}

impl TryFrom<&str> for TimeSlot {
    type Error = ParseTimeSlotError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ParseTimeSlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.as_str().to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
