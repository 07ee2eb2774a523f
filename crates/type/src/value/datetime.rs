// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};

use super::date::Date;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// The widest fractional-second precision a datetime can carry (nanoseconds).
pub const MAX_PRECISION: u8 = 9;

/// A date and time value with nanosecond resolution, always interpreted in
/// UTC.
///
/// Internally stored as seconds since Unix epoch plus a positive nanosecond
/// offset. The fractional-second precision only affects Display; it does not
/// participate in equality or ordering.
#[derive(Copy, Clone, Debug)]
pub struct DateTime {
    seconds: i64,
    nanos: u32,
    precision: u8,
}

impl DateTime {
    pub fn new(seconds: i64, nanos: u32) -> Option<Self> {
        if nanos >= NANOS_PER_SECOND {
            return None;
        }
        Some(Self { seconds, nanos, precision: MAX_PRECISION })
    }

    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        let date = Date::new(year, month, day)?;
        let seconds = date.to_days_since_epoch() as i64 * SECONDS_PER_DAY
            + hour as i64 * 3600
            + minute as i64 * 60
            + second as i64;
        Self::new(seconds, 0)
    }

    /// Truncates the nanosecond field to `precision` fractional digits and
    /// records the precision for Display.
    pub fn with_precision(mut self, precision: u8) -> Self {
        let precision = precision.min(MAX_PRECISION);
        if precision < MAX_PRECISION {
            let step = 10u32.pow((MAX_PRECISION - precision) as u32);
            self.nanos -= self.nanos % step;
        }
        self.precision = precision;
        self
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn date(&self) -> Date {
        let days = self.seconds.div_euclid(SECONDS_PER_DAY) as i32;
        // Always in range: the day count fits far inside Date's limits.
        Date::from_days_since_epoch(days).unwrap()
    }

    pub fn hour(&self) -> u32 {
        (self.seconds.rem_euclid(SECONDS_PER_DAY) / 3600) as u32
    }

    pub fn minute(&self) -> u32 {
        (self.seconds.rem_euclid(SECONDS_PER_DAY) % 3600 / 60) as u32
    }

    pub fn second(&self) -> u32 {
        (self.seconds.rem_euclid(SECONDS_PER_DAY) % 60) as u32
    }

    /// The stored payload: 8-byte big-endian seconds followed by a 4-byte
    /// big-endian nanosecond field.
    pub fn marshal(&self) -> [u8; 12] {
        let mut out = [0u8; 12];
        out[..8].copy_from_slice(&self.seconds.to_be_bytes());
        out[8..].copy_from_slice(&self.nanos.to_be_bytes());
        out
    }

    /// Reinterpret a stored payload, truncating to the declared precision.
    pub fn unmarshal(payload: &[u8], precision: u8) -> Result<Self, String> {
        let bytes: [u8; 12] = payload
            .try_into()
            .map_err(|_| format!("datetime payload must be 12 bytes, got {}", payload.len()))?;
        let seconds = i64::from_be_bytes(bytes[..8].try_into().unwrap());
        let nanos = u32::from_be_bytes(bytes[8..].try_into().unwrap());
        let datetime =
            Self::new(seconds, nanos).ok_or_else(|| format!("nanosecond field {} is out of range", nanos))?;
        Ok(datetime.with_precision(precision))
    }
}

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        self.seconds == other.seconds && self.nanos == other.nanos
    }
}

impl Eq for DateTime {}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.seconds, self.nanos).cmp(&(other.seconds, other.nanos))
    }
}

impl Hash for DateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.seconds, self.nanos).hash(state);
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            self.date(),
            self.hour(),
            self.minute(),
            self.second()
        )?;
        if self.precision > 0 {
            let digits = format!("{:09}", self.nanos);
            write!(f, ".{}", &digits[..self.precision as usize])?;
        }
        Ok(())
    }
}

// Serde implementation for ISO 8601 format
impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
    type Value = DateTime;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a datetime in ISO 8601 format (YYYY-MM-DDTHH:MM:SS[.fff])")
    }

    fn visit_str<E>(self, value: &str) -> Result<DateTime, E>
    where
        E: de::Error,
    {
        let invalid = || E::custom(format!("invalid datetime format: {}", value));

        let (date_part, time_part) = value.split_once('T').ok_or_else(invalid)?;
        let date = Date::parse_iso(date_part).ok_or_else(invalid)?;

        let (hms, fraction) = match time_part.split_once('.') {
            Some((hms, fraction)) => (hms, Some(fraction)),
            None => (time_part, None),
        };

        let mut fields = hms.split(':');
        let hour: u32 = fields.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
        let minute: u32 = fields.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
        let second: u32 = fields.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
        if fields.next().is_some() {
            return Err(invalid());
        }

        let mut datetime =
            DateTime::from_ymd_hms(date.year(), date.month(), date.day(), hour, minute, second)
                .ok_or_else(invalid)?;

        if let Some(fraction) = fraction {
            if fraction.is_empty() || fraction.len() > MAX_PRECISION as usize {
                return Err(invalid());
            }
            let digits: u32 = fraction.parse().map_err(|_| invalid())?;
            let nanos = digits * 10u32.pow((MAX_PRECISION as usize - fraction.len()) as u32);
            datetime = DateTime::new(datetime.seconds, nanos)
                .ok_or_else(invalid)?
                .with_precision(fraction.len() as u8);
        }

        Ok(datetime)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DateTimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_fraction() {
        let datetime = DateTime::from_ymd_hms(2024, 3, 15, 14, 30, 45).unwrap().with_precision(0);
        assert_eq!(datetime.to_string(), "2024-03-15T14:30:45");
    }

    #[test]
    fn test_display_with_fraction() {
        let datetime = DateTime::new(
            DateTime::from_ymd_hms(2024, 3, 15, 14, 30, 45).unwrap().seconds(),
            123_456_789,
        )
        .unwrap()
        .with_precision(3);
        assert_eq!(datetime.to_string(), "2024-03-15T14:30:45.123");
    }

    #[test]
    fn test_precision_truncates_nanos() {
        let datetime = DateTime::new(0, 123_456_789).unwrap().with_precision(6);
        assert_eq!(datetime.nanos(), 123_456_000);

        let datetime = DateTime::new(0, 123_456_789).unwrap().with_precision(0);
        assert_eq!(datetime.nanos(), 0);
    }

    #[test]
    fn test_marshal_roundtrip() {
        let datetime = DateTime::new(1_710_513_045, 500_000_000).unwrap();
        let recovered = DateTime::unmarshal(&datetime.marshal(), MAX_PRECISION).unwrap();
        assert_eq!(datetime, recovered);
    }

    #[test]
    fn test_unmarshal_applies_precision() {
        let datetime = DateTime::new(0, 987_654_321).unwrap();
        let recovered = DateTime::unmarshal(&datetime.marshal(), 2).unwrap();
        assert_eq!(recovered.nanos(), 980_000_000);
        assert_eq!(recovered.precision(), 2);
    }

    #[test]
    fn test_unmarshal_rejects_bad_length() {
        assert!(DateTime::unmarshal(&[0x00; 8], 0).is_err());
        assert!(DateTime::unmarshal(&[0x00; 13], 0).is_err());
    }

    #[test]
    fn test_unmarshal_rejects_overflowing_nanos() {
        let mut payload = [0u8; 12];
        payload[8..].copy_from_slice(&1_500_000_000u32.to_be_bytes());
        assert!(DateTime::unmarshal(&payload, 9).is_err());
    }

    #[test]
    fn test_before_epoch() {
        let datetime = DateTime::from_ymd_hms(1969, 12, 31, 23, 0, 0).unwrap();
        assert!(datetime.seconds() < 0);
        assert_eq!(datetime.hour(), 23);
        assert_eq!(datetime.date().to_string(), "1969-12-31");
    }

    #[test]
    fn test_ordering() {
        let earlier = DateTime::new(100, 0).unwrap();
        let later = DateTime::new(100, 1).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_serde_roundtrip() {
        let datetime = DateTime::new(
            DateTime::from_ymd_hms(2024, 3, 15, 14, 30, 45).unwrap().seconds(),
            123_000_000,
        )
        .unwrap()
        .with_precision(3);
        let json = serde_json::to_string(&datetime).unwrap();
        assert_eq!(json, "\"2024-03-15T14:30:45.123\"");

        let recovered: DateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(datetime, recovered);
    }
}
