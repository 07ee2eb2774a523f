// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::collections::Bound;
use std::ops::Deref;

use crate::catalog::TableId;
use crate::encoding::keycode;

pub use index::{EncodedIndexKey, IndexKey};
pub use record::RecordKey;

mod index;
mod record;

/// The first byte of every table-owned key.
pub const TABLE_PREFIX: &[u8] = b"t";
/// Separates the encoded table id from the record namespace.
pub const RECORD_PREFIX_SEP: &[u8] = b"_r";
/// Separates the encoded table id from the index namespace.
pub const INDEX_PREFIX_SEP: &[u8] = b"_i";

/// An immutable, byte-lexicographically ordered key.
#[derive(Debug, Clone, PartialOrd, Ord, Hash, PartialEq, Eq)]
pub struct EncodedKey(Vec<u8>);

impl EncodedKey {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self(key.into())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for EncodedKey {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for EncodedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A scan range over encoded keys.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedKeyRange {
    pub start: Bound<EncodedKey>,
    pub end: Bound<EncodedKey>,
}

impl EncodedKeyRange {
    pub fn contains(&self, key: &EncodedKey) -> bool {
        let after_start = match &self.start {
            Bound::Included(start) => key >= start,
            Bound::Excluded(start) => key > start,
            Bound::Unbounded => true,
        };
        let before_end = match &self.end {
            Bound::Included(end) => key <= end,
            Bound::Excluded(end) => key < end,
            Bound::Unbounded => true,
        };
        after_start && before_end
    }
}

/// The record namespace prefix of a table: `'t' <table> "_r"`.
pub fn table_record_prefix(table: TableId) -> Vec<u8> {
    let mut buf = Vec::with_capacity(TABLE_PREFIX.len() + 8 + RECORD_PREFIX_SEP.len());
    buf.extend_from_slice(TABLE_PREFIX);
    buf.extend(keycode::serialize(&table));
    buf.extend_from_slice(RECORD_PREFIX_SEP);
    buf
}

/// The index namespace prefix of a table: `'t' <table> "_i"`.
pub fn table_index_prefix(table: TableId) -> Vec<u8> {
    let mut buf = Vec::with_capacity(TABLE_PREFIX.len() + 8 + INDEX_PREFIX_SEP.len());
    buf.extend_from_slice(TABLE_PREFIX);
    buf.extend(keycode::serialize(&table));
    buf.extend_from_slice(INDEX_PREFIX_SEP);
    buf
}

// The encoded table id is always exactly 8 bytes, so the namespace separator
// starts at a fixed offset and the two namespaces of a table can never
// collide: their separator bytes differ.
pub(crate) fn prefix_successor(prefix: &[u8]) -> Vec<u8> {
    let mut end = prefix.to_vec();
    // The separators end in 'r' and 'i', never 0xFF, so incrementing the
    // final byte yields a tight exclusive upper bound.
    let last = end.len() - 1;
    end[last] += 1;
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_layout() {
        let prefix = table_record_prefix(TableId(1));
        assert_eq!(prefix[0], b't');
        assert_eq!(&prefix[1..9], &[0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]);
        assert_eq!(&prefix[9..], b"_r");
    }

    #[test]
    fn test_prefixes_of_same_table_differ_only_in_namespace() {
        let record = table_record_prefix(TableId(42));
        let index = table_index_prefix(TableId(42));
        assert_eq!(record[..9], index[..9]);
        assert_eq!(&record[9..], b"_r");
        assert_eq!(&index[9..], b"_i");
    }

    #[test]
    fn test_prefixes_of_distinct_tables_never_collide() {
        let a = table_record_prefix(TableId(1));
        let b = table_record_prefix(TableId(2));
        assert_ne!(a, b);
        assert!(!a.starts_with(&b) && !b.starts_with(&a));
    }

    #[test]
    fn test_prefix_order_follows_table_id_order() {
        assert!(table_record_prefix(TableId(-1)) < table_record_prefix(TableId(0)));
        assert!(table_record_prefix(TableId(0)) < table_record_prefix(TableId(1)));
    }

    #[test]
    fn test_range_contains() {
        let range = EncodedKeyRange {
            start: std::collections::Bound::Included(EncodedKey::new(vec![0x02])),
            end: std::collections::Bound::Excluded(EncodedKey::new(vec![0x04])),
        };
        assert!(!range.contains(&EncodedKey::new(vec![0x01])));
        assert!(range.contains(&EncodedKey::new(vec![0x02])));
        assert!(range.contains(&EncodedKey::new(vec![0x03, 0xFF])));
        assert!(!range.contains(&EncodedKey::new(vec![0x04])));
    }
}
