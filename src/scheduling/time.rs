use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A wall-clock time as minutes since midnight, 0..=1439.
///
/// Parsed from `HH:MM` (24-hour; a single-digit hour is accepted) and always
/// re-serialized zero-padded, so `"9:30"` round-trips as `"09:30"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

#[derive(Debug, thiserror::Error)]
#[error("invalid time {0:?} (expected HH:MM, 24-hour)")]
pub struct TimeParseError(pub String);

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Builds a time from an in-range minute count. Panics outside 0..=1439,
    /// so only use with constants; parse user input via `FromStr`.
    pub fn from_minutes(minutes: u16) -> Self {
        assert!(minutes < Self::MINUTES_PER_DAY);
        Self(minutes)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeParseError(s.to_string());

        let (hh, mm) = s.split_once(':').ok_or_else(err)?;
        if hh.is_empty() || hh.len() > 2 || mm.len() != 2 {
            return Err(err());
        }
        if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }

        let hour: u16 = hh.parse().map_err(|_| err())?;
        let minute: u16 = mm.parse().map_err(|_| err())?;
        if hour > 23 || minute > 59 {
            return Err(err());
        }

        Ok(Self(hour * 60 + minute))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_and_unpadded_hours() {
        assert_eq!("09:30".parse::<TimeOfDay>().unwrap().minutes(), 9 * 60 + 30);
        assert_eq!("9:30".parse::<TimeOfDay>().unwrap().minutes(), 9 * 60 + 30);
        assert_eq!("00:00".parse::<TimeOfDay>().unwrap().minutes(), 0);
        assert_eq!("23:59".parse::<TimeOfDay>().unwrap().minutes(), 1439);
    }

    #[test]
    fn rejects_out_of_range_and_malformed() {
        for bad in ["24:00", "12:60", "1200", "12:5", "12:005", "ab:cd", "", ":30", "-1:00"] {
            assert!(bad.parse::<TimeOfDay>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn formats_zero_padded() {
        let t: TimeOfDay = "9:05".parse().unwrap();
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn serde_round_trip_as_string() {
        let t: TimeOfDay = "22:00".parse().unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"22:00\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
