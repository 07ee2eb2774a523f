// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, EnumAccess, VariantAccess, Visitor},
    ser,
};

mod bit;
mod blob;
mod date;
mod datetime;
mod decimal;
mod enumeration;
mod interval;
mod ordered_f32;
mod ordered_f64;
mod set;

pub use bit::BitValue;
pub use blob::Blob;
pub use date::Date;
pub use datetime::{DateTime, MAX_PRECISION};
pub use decimal::Decimal;
pub use enumeration::EnumValue;
pub use interval::Interval;
pub use ordered_f32::OrderedF32;
pub use ordered_f64::OrderedF64;
pub use set::SetValue;

/// A single cell value, represented as a native Rust type.
///
/// The first six variants are the storage kinds: the shapes a value can take
/// inside a stored row or index tuple. The remaining variants only exist in
/// memory, produced by unflattening a storage kind against the declared
/// column type.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    /// Value is absent (think null in SQL)
    Null,
    /// An 8-byte signed integer
    Int8(i64),
    /// An 8-byte unsigned integer
    Uint8(u64),
    /// An 8-byte floating point
    Float8(OrderedF64),
    /// A UTF-8 encoded text
    Utf8(String),
    /// A binary large object
    Blob(Blob),
    /// A 4-byte floating point
    Float4(OrderedF32),
    /// An arbitrary-precision decimal
    Decimal(Decimal),
    /// A date value (year, month, day)
    Date(Date),
    /// A date and time value with nanosecond precision in UTC
    DateTime(DateTime),
    /// An interval representing a duration
    Interval(Interval),
    /// A resolved enum symbol
    Enum(EnumValue),
    /// A resolved set of symbols
    Set(SetValue),
    /// A bit-field value with a declared width
    Bit(BitValue),
}

impl Datum {
    pub fn null() -> Self {
        Datum::Null
    }

    pub fn int8(v: impl Into<i64>) -> Self {
        Datum::Int8(v.into())
    }

    pub fn uint8(v: impl Into<u64>) -> Self {
        Datum::Uint8(v.into())
    }

    pub fn float8(v: impl Into<f64>) -> Self {
        OrderedF64::try_from(v.into()).map(Datum::Float8).unwrap_or(Datum::Null)
    }

    pub fn float4(v: impl Into<f32>) -> Self {
        OrderedF32::try_from(v.into()).map(Datum::Float4).unwrap_or(Datum::Null)
    }

    pub fn utf8(v: impl Into<String>) -> Self {
        Datum::Utf8(v.into())
    }

    pub fn blob(v: impl Into<Blob>) -> Self {
        Datum::Blob(v.into())
    }

    pub fn decimal(v: impl Into<Decimal>) -> Self {
        Datum::Decimal(v.into())
    }

    pub fn date(v: impl Into<Date>) -> Self {
        Datum::Date(v.into())
    }

    pub fn datetime(v: impl Into<DateTime>) -> Self {
        Datum::DateTime(v.into())
    }

    pub fn interval(v: impl Into<Interval>) -> Self {
        Datum::Interval(v.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    /// The variant name, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Datum::Null => "Null",
            Datum::Int8(_) => "Int8",
            Datum::Uint8(_) => "Uint8",
            Datum::Float8(_) => "Float8",
            Datum::Utf8(_) => "Utf8",
            Datum::Blob(_) => "Blob",
            Datum::Float4(_) => "Float4",
            Datum::Decimal(_) => "Decimal",
            Datum::Date(_) => "Date",
            Datum::DateTime(_) => "DateTime",
            Datum::Interval(_) => "Interval",
            Datum::Enum(_) => "Enum",
            Datum::Set(_) => "Set",
            Datum::Bit(_) => "Bit",
        }
    }

    /// The stored integer view of this datum, if it has one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Datum::Int8(v) => Some(*v),
            Datum::Uint8(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// The stored unsigned integer view of this datum, if it has one. Signed
    /// storage of a non-negative value is accepted.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Datum::Uint8(v) => Some(*v),
            Datum::Int8(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Datum::Float8(v) => Some(v.value()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::Utf8(v) => Some(v),
            _ => None,
        }
    }

    /// The stored byte payload of this datum, if it has one.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Datum::Blob(v) => Some(v.as_bytes()),
            Datum::Utf8(v) => Some(v.as_bytes()),
            _ => None,
        }
    }
}

impl PartialOrd for Datum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Datum::Int8(l), Datum::Int8(r)) => l.partial_cmp(r),
            (Datum::Uint8(l), Datum::Uint8(r)) => l.partial_cmp(r),
            (Datum::Float8(l), Datum::Float8(r)) => l.partial_cmp(r),
            (Datum::Utf8(l), Datum::Utf8(r)) => l.partial_cmp(r),
            (Datum::Blob(l), Datum::Blob(r)) => l.partial_cmp(r),
            (Datum::Float4(l), Datum::Float4(r)) => l.partial_cmp(r),
            (Datum::Decimal(l), Datum::Decimal(r)) => l.partial_cmp(r),
            (Datum::Date(l), Datum::Date(r)) => l.partial_cmp(r),
            (Datum::DateTime(l), Datum::DateTime(r)) => l.partial_cmp(r),
            (Datum::Interval(l), Datum::Interval(r)) => l.partial_cmp(r),
            (Datum::Enum(l), Datum::Enum(r)) => l.partial_cmp(r),
            (Datum::Set(l), Datum::Set(r)) => l.partial_cmp(r),
            (Datum::Bit(l), Datum::Bit(r)) => l.partial_cmp(r),
            _ => None,
        }
    }
}

impl Display for Datum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Datum::Null => f.write_str("null"),
            Datum::Int8(value) => Display::fmt(value, f),
            Datum::Uint8(value) => Display::fmt(value, f),
            Datum::Float8(value) => Display::fmt(value, f),
            Datum::Utf8(value) => Display::fmt(value, f),
            Datum::Blob(value) => Display::fmt(value, f),
            Datum::Float4(value) => Display::fmt(value, f),
            Datum::Decimal(value) => Display::fmt(value, f),
            Datum::Date(value) => Display::fmt(value, f),
            Datum::DateTime(value) => Display::fmt(value, f),
            Datum::Interval(value) => Display::fmt(value, f),
            Datum::Enum(value) => Display::fmt(value, f),
            Datum::Set(value) => Display::fmt(value, f),
            Datum::Bit(value) => Display::fmt(value, f),
        }
    }
}

const VARIANTS: &[&str] = &[
    "Null", "Int8", "Uint8", "Float8", "Utf8", "Blob", "Float4", "Decimal", "Date", "DateTime", "Interval",
    "Enum", "Set", "Bit",
];

// The variant indexes below are a durable on-disk contract: they become the
// leading tag byte of every stored datum. Only the storage kinds are
// serializable; attempting to store an in-memory-only kind must fail so the
// caller can surface an encoding error instead of persisting garbage.
impl Serialize for Datum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Datum::Null => serializer.serialize_unit_variant("Datum", 0, "Null"),
            Datum::Int8(v) => serializer.serialize_newtype_variant("Datum", 1, "Int8", v),
            Datum::Uint8(v) => serializer.serialize_newtype_variant("Datum", 2, "Uint8", v),
            Datum::Float8(v) => serializer.serialize_newtype_variant("Datum", 3, "Float8", v),
            Datum::Utf8(v) => serializer.serialize_newtype_variant("Datum", 4, "Utf8", v),
            Datum::Blob(v) => serializer.serialize_newtype_variant("Datum", 5, "Blob", v),
            other => Err(ser::Error::custom(format!("{} datum has no storage representation", other.name()))),
        }
    }
}

struct DatumVisitor;

impl<'de> Visitor<'de> for DatumVisitor {
    type Value = Datum;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a stored datum")
    }

    fn visit_enum<A>(self, data: A) -> Result<Datum, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (index, variant) = data.variant::<u32>()?;
        match index {
            0 => {
                variant.unit_variant()?;
                Ok(Datum::Null)
            }
            1 => Ok(Datum::Int8(variant.newtype_variant()?)),
            2 => Ok(Datum::Uint8(variant.newtype_variant()?)),
            3 => Ok(Datum::Float8(variant.newtype_variant()?)),
            4 => Ok(Datum::Utf8(variant.newtype_variant()?)),
            5 => Ok(Datum::Blob(variant.newtype_variant()?)),
            other => Err(de::Error::custom(format!("datum tag {} is not a storage kind", other))),
        }
    }
}

impl<'de> Deserialize<'de> for Datum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_enum("Datum", VARIANTS, DatumVisitor)
    }
}
