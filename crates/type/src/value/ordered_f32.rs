// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Error, error, error::diagnostic::number::nan_not_allowed};

/// A 4-byte floating point with a total order. NaN is rejected on
/// construction, which makes `Eq` and `Ord` sound.
#[derive(Debug, Copy, Clone)]
pub struct OrderedF32(f32);

impl OrderedF32 {
    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn zero() -> Self {
        Self(0.0)
    }
}

impl TryFrom<f32> for OrderedF32 {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if value.is_nan() {
            return Err(error!(nan_not_allowed()));
        }
        Ok(Self(value))
    }
}

impl From<OrderedF32> for f32 {
    fn from(value: OrderedF32) -> Self {
        value.0
    }
}

impl PartialEq for OrderedF32 {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for OrderedF32 {}

impl PartialOrd for OrderedF32 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedF32 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Total order is safe: NaN cannot be constructed.
        self.0.partial_cmp(&other.0).unwrap()
    }
}

impl Hash for OrderedF32 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Normalize -0.0 so that Hash stays consistent with Eq.
        let normalized = if self.0 == 0.0 { 0.0 } else { self.0 };
        normalized.to_bits().hash(state);
    }
}

impl Display for OrderedF32 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Serialize for OrderedF32 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f32(self.0)
    }
}

impl<'de> Deserialize<'de> for OrderedF32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f32::deserialize(deserializer)?;
        OrderedF32::try_from(value).map_err(|_| de::Error::custom("NaN not allowed"))
    }
}
