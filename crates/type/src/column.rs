// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The declared SQL type of a column, as recorded by the schema layer.
///
/// This codec only consumes these tags; it does not define the schema format.
/// Tags it does not interpret survive as [`ColumnType::Other`] so a value
/// written by a newer schema can still be passed through unchanged.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// A 4-byte floating point
    Float4,
    /// An 8-byte floating point
    Float8,
    /// A 1-byte signed integer
    Int1,
    /// A 2-byte signed integer
    Int2,
    /// A 4-byte signed integer
    Int4,
    /// An 8-byte signed integer
    Int8,
    /// A 1-byte unsigned integer
    Uint1,
    /// A 2-byte unsigned integer
    Uint2,
    /// A 4-byte unsigned integer
    Uint4,
    /// An 8-byte unsigned integer
    Uint8,
    /// A UTF-8 encoded text
    Utf8,
    /// A binary large object
    Blob,
    /// A date value (year, month, day)
    Date,
    /// A date and time value without timezone semantics
    DateTime,
    /// A date and time value anchored to UTC
    Timestamp,
    /// An interval representing a duration
    Interval,
    /// An arbitrary-precision decimal
    Decimal,
    /// A symbol from a declared symbol list
    Enum,
    /// A subset of a declared symbol list
    Set,
    /// A bit field with a declared width
    Bit,
    /// A type tag this codec does not interpret
    Other(u8),
}

impl ColumnType {
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            0x01 => ColumnType::Float4,
            0x02 => ColumnType::Float8,
            0x03 => ColumnType::Int1,
            0x04 => ColumnType::Int2,
            0x05 => ColumnType::Int4,
            0x06 => ColumnType::Int8,
            0x07 => ColumnType::Uint1,
            0x08 => ColumnType::Uint2,
            0x09 => ColumnType::Uint4,
            0x0A => ColumnType::Uint8,
            0x0B => ColumnType::Utf8,
            0x0C => ColumnType::Blob,
            0x0D => ColumnType::Date,
            0x0E => ColumnType::DateTime,
            0x0F => ColumnType::Timestamp,
            0x10 => ColumnType::Interval,
            0x11 => ColumnType::Decimal,
            0x12 => ColumnType::Enum,
            0x13 => ColumnType::Set,
            0x14 => ColumnType::Bit,
            other => ColumnType::Other(other),
        }
    }

    pub fn to_tag(&self) -> u8 {
        match self {
            ColumnType::Float4 => 0x01,
            ColumnType::Float8 => 0x02,
            ColumnType::Int1 => 0x03,
            ColumnType::Int2 => 0x04,
            ColumnType::Int4 => 0x05,
            ColumnType::Int8 => 0x06,
            ColumnType::Uint1 => 0x07,
            ColumnType::Uint2 => 0x08,
            ColumnType::Uint4 => 0x09,
            ColumnType::Uint8 => 0x0A,
            ColumnType::Utf8 => 0x0B,
            ColumnType::Blob => 0x0C,
            ColumnType::Date => 0x0D,
            ColumnType::DateTime => 0x0E,
            ColumnType::Timestamp => 0x0F,
            ColumnType::Interval => 0x10,
            ColumnType::Decimal => 0x11,
            ColumnType::Enum => 0x12,
            ColumnType::Set => 0x13,
            ColumnType::Bit => 0x14,
            ColumnType::Other(tag) => *tag,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ColumnType::Int1
                | ColumnType::Int2
                | ColumnType::Int4
                | ColumnType::Int8
                | ColumnType::Uint1
                | ColumnType::Uint2
                | ColumnType::Uint4
                | ColumnType::Uint8
        )
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::DateTime | ColumnType::Timestamp)
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Other(tag) => write!(f, "Other({:#04x})", tag),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Read-only schema metadata describing one column: the declared type and the
/// parameters some types carry (fractional-second precision, bit width,
/// symbol list).
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDescriptor {
    pub ty: ColumnType,
    /// Fractional-second digits for temporal types
    pub precision: Option<u8>,
    /// Declared width for the bit type
    pub width: Option<u32>,
    /// Symbol list for enum and set types
    pub symbols: Vec<String>,
}

impl ColumnDescriptor {
    pub fn new(ty: ColumnType) -> Self {
        Self { ty, precision: None, width: None, symbols: Vec::new() }
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }
}
