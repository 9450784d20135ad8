//! Common value types and lenient decoders
//!
//! The marketplace API is not consistent about numeric encoding: ids,
//! prices, coordinates and counters arrive either as JSON numbers or as
//! numeric strings (`"150000.00"`, `"-6.2"`). The decoders in [`lenient`]
//! accept both.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrString {
    fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrString::Int(n) => Some(*n as f64),
            NumberOrString::Float(f) => Some(*f),
            NumberOrString::Text(s) => s.trim().parse().ok(),
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            NumberOrString::Int(n) => Some(*n),
            NumberOrString::Float(f) => Some(f.round() as i64),
            NumberOrString::Text(s) => {
                let trimmed = s.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().map(|f| f.round() as i64))
            }
        }
    }
}

/// Decoders accepting numbers or numeric strings
pub mod lenient {
    use super::NumberOrString;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = NumberOrString::deserialize(deserializer)?;
        raw.as_i64().ok_or_else(|| D::Error::custom("expected an integer or numeric string"))
    }

    pub fn option_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Ok(Option::<NumberOrString>::deserialize(deserializer)?.and_then(|raw| raw.as_i64()))
    }

    pub fn u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let value = i64(deserializer)?;
        u64::try_from(value).map_err(|_| D::Error::custom("expected a non-negative integer"))
    }

    pub fn option_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        Ok(option_i64(deserializer)?.and_then(|value| u64::try_from(value).ok()))
    }

    pub fn f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let raw = NumberOrString::deserialize(deserializer)?;
        raw.as_f64().ok_or_else(|| D::Error::custom("expected a number or numeric string"))
    }

    pub fn option_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Ok(Option::<NumberOrString>::deserialize(deserializer)?.and_then(|raw| raw.as_f64()))
    }
}

/// Amount in Indonesian rupiah (no minor unit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rupiah(pub i64);

impl Rupiah {
    pub const ZERO: Rupiah = Rupiah(0);

    pub fn amount(self) -> i64 {
        self.0
    }
}

impl Add for Rupiah {
    type Output = Rupiah;

    fn add(self, rhs: Rupiah) -> Rupiah {
        Rupiah(self.0.saturating_add(rhs.0))
    }
}

impl Mul<i64> for Rupiah {
    type Output = Rupiah;

    fn mul(self, rhs: i64) -> Rupiah {
        Rupiah(self.0.saturating_mul(rhs))
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Rupiah>>(iter: I) -> Rupiah {
        iter.fold(Rupiah::ZERO, Add::add)
    }
}

impl fmt::Display for Rupiah {
    /// `Rp 150.000`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rp {}", sign, grouped)
    }
}

impl Serialize for Rupiah {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Rupiah {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::i64(deserializer).map(Rupiah)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("Latitude out of range: {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude out of range: {0}")]
    LongitudeOutOfRange(f64),
}

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(deserialize_with = "lenient::f64")]
    pub latitude: f64,

    #[serde(deserialize_with = "lenient::f64")]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) || latitude.is_nan() {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) || longitude.is_nan() {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self { latitude, longitude })
    }

    /// Fixed-precision latitude, as sent in request bodies
    pub fn latitude_str(&self) -> String {
        format!("{:.6}", self.latitude)
    }

    /// Fixed-precision longitude, as sent in request bodies
    pub fn longitude_str(&self) -> String {
        format!("{:.6}", self.longitude)
    }

    /// `lat,lng` query string accepted by map links
    pub fn to_query(&self) -> String {
        format!("{},{}", self.latitude_str(), self.longitude_str())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude_str(), self.longitude_str())
    }
}
