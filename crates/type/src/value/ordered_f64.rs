// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Error, error, error::diagnostic::number::nan_not_allowed};

/// An 8-byte floating point with a total order. NaN is rejected on
/// construction, which makes `Eq` and `Ord` sound.
#[derive(Debug, Copy, Clone)]
pub struct OrderedF64(f64);

impl OrderedF64 {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn zero() -> Self {
        Self(0.0)
    }
}

impl TryFrom<f64> for OrderedF64 {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_nan() {
            return Err(error!(nan_not_allowed()));
        }
        Ok(Self(value))
    }
}

impl From<OrderedF64> for f64 {
    fn from(value: OrderedF64) -> Self {
        value.0
    }
}

impl PartialEq for OrderedF64 {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Total order is safe: NaN cannot be constructed.
        self.0.partial_cmp(&other.0).unwrap()
    }
}

impl Hash for OrderedF64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Normalize -0.0 so that Hash stays consistent with Eq.
        let normalized = if self.0 == 0.0 { 0.0 } else { self.0 };
        normalized.to_bits().hash(state);
    }
}

impl Display for OrderedF64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Serialize for OrderedF64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for OrderedF64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        OrderedF64::try_from(value).map_err(|_| de::Error::custom("NaN not allowed"))
    }
}
