// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Identifies one table. Assigned externally by the schema layer.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(pub i64);

impl Deref for TableId {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<i64> for TableId {
    fn eq(&self, other: &i64) -> bool {
        self.0.eq(other)
    }
}

impl From<i64> for TableId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// A surrogate row identifier, unique within its table. The numeric order of
/// handles is meaningful: range scans walk rows in ascending handle order.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct Handle(pub i64);

impl Deref for Handle {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<i64> for Handle {
    fn eq(&self, other: &i64) -> bool {
        self.0.eq(other)
    }
}

impl From<i64> for Handle {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for Handle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Identifies one column within a table. The id 0 is reserved: it means "no
/// specific column" and marks a row-level key. A real column is never
/// assigned id 0, so the encoded key can simply omit the suffix.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnId(pub i64);

impl ColumnId {
    /// The reserved "no specific column" id.
    pub const NONE: ColumnId = ColumnId(0);

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl Deref for ColumnId {
    type Target = i64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<i64> for ColumnId {
    fn eq(&self, other: &i64) -> bool {
        self.0.eq(other)
    }
}

impl From<i64> for ColumnId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for ColumnId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Sorts handles ascending by their signed numeric value, in place.
///
/// The caller must have exclusive access to the slice for the duration of the
/// call. Handles are assumed unique within the slice, so no stability
/// guarantee is needed or given.
pub fn sort_handles(handles: &mut [Handle]) {
    handles.sort_unstable();
}
