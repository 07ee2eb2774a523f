// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::collections::Bound;

use serde::Deserialize;

use tablekv_type::{
    Result, error,
    error::diagnostic::{
        encoding::keycode_error,
        key::{invalid_record_key, malformed_record_key},
    },
    return_error,
};

use super::{
    EncodedKey, EncodedKeyRange, RECORD_PREFIX_SEP, TABLE_PREFIX, prefix_successor, table_record_prefix,
};
use crate::catalog::{ColumnId, Handle, TableId};
use crate::encoding::keycode::{self, Deserializer};

/// Key for one row of a table, or for one cell when a column id is present:
/// `'t' <table> "_r" <handle> [<column>]`.
///
/// A column id of [`ColumnId::NONE`] encodes to no suffix at all, and an
/// absent suffix decodes back to [`ColumnId::NONE`]; the two are deliberately
/// indistinguishable on disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordKey {
    pub table: TableId,
    pub handle: Handle,
    pub column: ColumnId,
}

impl RecordKey {
    pub fn new(table: TableId, handle: Handle) -> Self {
        Self { table, handle, column: ColumnId::NONE }
    }

    pub fn with_column(table: TableId, handle: Handle, column: ColumnId) -> Self {
        Self { table, handle, column }
    }

    pub fn encode(&self) -> EncodedKey {
        let mut buf = table_record_prefix(self.table);
        buf.reserve(16);
        buf.extend(keycode::serialize(&self.handle));
        if !self.column.is_none() {
            buf.extend(keycode::serialize(&self.column));
        }
        EncodedKey::new(buf)
    }

    /// Parses a record key back into its components. Each stage fails
    /// independently, and every failure keeps the offending key bytes on the
    /// diagnostic.
    pub fn decode(key: &EncodedKey) -> Result<Self> {
        let bytes = key.as_slice();

        let Some(rest) = bytes.strip_prefix(TABLE_PREFIX) else {
            return_error!(invalid_record_key(bytes));
        };

        let mut de = Deserializer::from_bytes(rest);
        let table = i64::deserialize(&mut de)
            .map_err(|err| error!(malformed_record_key(bytes, keycode_error(err.to_string()))))?;

        let Some(rest) = de.input.strip_prefix(RECORD_PREFIX_SEP) else {
            return_error!(invalid_record_key(bytes));
        };

        let mut de = Deserializer::from_bytes(rest);
        let handle = i64::deserialize(&mut de)
            .map_err(|err| error!(malformed_record_key(bytes, keycode_error(err.to_string()))))?;

        if de.input.is_empty() {
            return Ok(Self { table: TableId(table), handle: Handle(handle), column: ColumnId::NONE });
        }

        let column = i64::deserialize(&mut de)
            .map_err(|err| error!(malformed_record_key(bytes, keycode_error(err.to_string()))))?;
        if !de.input.is_empty() {
            return_error!(malformed_record_key(
                bytes,
                keycode_error(format!("unexpected trailing bytes {:x?}", de.input))
            ));
        }

        Ok(Self { table: TableId(table), handle: Handle(handle), column: ColumnId(column) })
    }

    /// The range covering every key in one table's record namespace.
    pub fn table_scan(table: TableId) -> EncodedKeyRange {
        let start = table_record_prefix(table);
        let end = prefix_successor(&start);
        EncodedKeyRange {
            start: Bound::Included(EncodedKey::new(start)),
            end: Bound::Excluded(EncodedKey::new(end)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let key = RecordKey::new(TableId(1), Handle(2)).encode();

        let expected: Vec<u8> = vec![
            b't', //
            0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, // table id
            b'_', b'r', //
            0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, // handle
        ];
        assert_eq!(key.as_slice(), expected);
    }

    #[test]
    fn test_encode_appends_column_id_only_when_present() {
        let row = RecordKey::new(TableId(1), Handle(2)).encode();
        let cell = RecordKey::with_column(TableId(1), Handle(2), ColumnId(3)).encode();

        assert_eq!(cell.len(), row.len() + 8);
        assert!(cell.as_slice().starts_with(row.as_slice()));

        // Column id 0 is the reserved "no column" id and encodes to nothing.
        let zero = RecordKey::with_column(TableId(1), Handle(2), ColumnId::NONE).encode();
        assert_eq!(zero, row);
    }

    #[test]
    fn test_roundtrip() {
        for (table, handle, column) in [
            (1, 2, 0),
            (1, 2, 3),
            (7, -100, 0),
            (i64::MAX, i64::MIN, 12),
            (42, 0, i64::MAX),
        ] {
            let key = RecordKey::with_column(TableId(table), Handle(handle), ColumnId(column));
            let decoded = RecordKey::decode(&key.encode()).unwrap();
            assert_eq!(decoded.table, TableId(table));
            assert_eq!(decoded.handle, Handle(handle));
            assert_eq!(decoded.column, ColumnId(column));
        }
    }

    #[test]
    fn test_order_follows_handle_order() {
        let handles = [i64::MIN, -1, 0, 1, 100, i64::MAX];
        let keys: Vec<EncodedKey> =
            handles.iter().map(|h| RecordKey::new(TableId(9), Handle(*h)).encode()).collect();
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1], "key order does not follow handle order");
        }
    }

    #[test]
    fn test_decode_rejects_missing_table_prefix() {
        let mut bytes = RecordKey::new(TableId(1), Handle(2)).encode().into_vec();
        bytes[0] = b'x';
        let err = RecordKey::decode(&EncodedKey::new(bytes)).unwrap_err();
        assert_eq!(err.code(), "KEY_001");
    }

    #[test]
    fn test_decode_rejects_missing_record_separator() {
        let mut bytes = RecordKey::new(TableId(1), Handle(2)).encode().into_vec();
        bytes[10] = b'i'; // "_r" becomes "_i"
        let err = RecordKey::decode(&EncodedKey::new(bytes)).unwrap_err();
        assert_eq!(err.code(), "KEY_001");
    }

    #[test]
    fn test_decode_rejects_truncated_handle() {
        let bytes = RecordKey::new(TableId(1), Handle(2)).encode().into_vec();
        let err = RecordKey::decode(&EncodedKey::new(bytes[..15].to_vec())).unwrap_err();
        assert_eq!(err.code(), "KEY_002");
    }

    #[test]
    fn test_decode_rejects_trailing_garbage() {
        let mut bytes =
            RecordKey::with_column(TableId(1), Handle(2), ColumnId(3)).encode().into_vec();
        bytes.push(0xAB);
        let err = RecordKey::decode(&EncodedKey::new(bytes)).unwrap_err();
        assert_eq!(err.code(), "KEY_002");
    }

    #[test]
    fn test_decode_keeps_offending_bytes() {
        let key = EncodedKey::new(vec![b'x', 0x01, 0x02]);
        let err = RecordKey::decode(&key).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("1, 2") || rendered.contains("[78, 1, 2]"), "{rendered}");
    }

    #[test]
    fn test_table_scan_contains_only_this_table() {
        let range = RecordKey::table_scan(TableId(5));

        assert!(range.contains(&RecordKey::new(TableId(5), Handle(i64::MIN)).encode()));
        assert!(range.contains(&RecordKey::new(TableId(5), Handle(0)).encode()));
        assert!(range.contains(&RecordKey::new(TableId(5), Handle(i64::MAX)).encode()));
        assert!(range.contains(&RecordKey::with_column(TableId(5), Handle(1), ColumnId(2)).encode()));

        assert!(!range.contains(&RecordKey::new(TableId(4), Handle(0)).encode()));
        assert!(!range.contains(&RecordKey::new(TableId(6), Handle(0)).encode()));
    }
}
