// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use column::{ColumnDescriptor, ColumnType};
pub use error::{Diagnostic, Error, IntoDiagnostic, Result, diagnostic};
pub use value::{
    BitValue, Blob, Date, DateTime, Datum, Decimal, EnumValue, Interval, MAX_PRECISION, OrderedF32,
    OrderedF64, SetValue,
};

mod column;
pub mod error;
mod value;
