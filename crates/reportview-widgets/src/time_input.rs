//! Time-of-day values as stored by time inputs
//!
//! A time input keeps its value in a string slot using the 24-hour `HH:MM`
//! form.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A wall-clock time with minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time, rejecting out-of-range components
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime(format!("{}:{}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidTime(s.to_string());
        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        let hour = hours.trim().parse::<u8>().map_err(|_| invalid())?;
        let minute = minutes.trim().parse::<u8>().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
