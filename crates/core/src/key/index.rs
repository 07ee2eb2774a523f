// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::collections::Bound;

use tablekv_type::{
    Datum, Result, error,
    error::diagnostic::{encoding::keycode_error, key::index_key_encoding_failed},
};

use super::{EncodedKey, EncodedKeyRange, prefix_successor, table_index_prefix};
use crate::catalog::{Handle, TableId};
use crate::encoding::keycode;

/// Key for one entry of a secondary index:
/// `'t' <table> "_i" <values...> [<handle>]`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexKey<'a> {
    pub table: TableId,
    pub values: &'a [Datum],
    pub handle: Handle,
    pub unique: bool,
}

/// The result of encoding an index key. `distinct` tells the
/// constraint-enforcing layer whether key uniqueness alone enforces the SQL
/// uniqueness constraint, or whether duplicates are permitted and the handle
/// was folded into the key to keep it unique at the storage level.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedIndexKey {
    pub key: EncodedKey,
    pub distinct: bool,
}

impl<'a> IndexKey<'a> {
    pub fn new(table: TableId, values: &'a [Datum], handle: Handle, unique: bool) -> Self {
        Self { table, values, handle, unique }
    }

    pub fn encode(&self) -> Result<EncodedIndexKey> {
        // A unique index must reject duplicate non-NULL tuples but permits
        // any number of rows with NULL in an indexed column. Appending the
        // handle only in the NULL case achieves both without a separate
        // duplicate-check path.
        let distinct = self.unique && !self.values.iter().any(Datum::is_null);

        let mut buf = table_index_prefix(self.table);
        for value in self.values {
            let encoded = keycode::try_serialize(value)
                .map_err(|err| error!(index_key_encoding_failed(keycode_error(err.to_string()))))?;
            buf.extend(encoded);
        }
        if !distinct {
            buf.extend(keycode::serialize(&Datum::Int8(self.handle.0)));
        }

        Ok(EncodedIndexKey { key: EncodedKey::new(buf), distinct })
    }

    /// The range covering every key in one table's index namespace.
    pub fn table_scan(table: TableId) -> EncodedKeyRange {
        let start = table_index_prefix(table);
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
    use crate::key::RecordKey;
    use tablekv_type::Decimal;

    fn handle_tail(handle: i64) -> Vec<u8> {
        keycode::serialize(&Datum::Int8(handle))
    }

    #[test]
    fn test_unique_without_null_is_distinct() {
        let values = [Datum::int8(1), Datum::int8(2)];
        let encoded = IndexKey::new(TableId(1), &values, Handle(7), true).encode().unwrap();

        assert!(encoded.distinct);
        assert!(!encoded.key.as_slice().ends_with(&handle_tail(7)));
    }

    #[test]
    fn test_unique_with_null_folds_handle_into_key() {
        let values = [Datum::Null, Datum::int8(5)];
        let encoded = IndexKey::new(TableId(1), &values, Handle(7), true).encode().unwrap();

        assert!(!encoded.distinct);
        assert!(encoded.key.as_slice().ends_with(&handle_tail(7)));
    }

    #[test]
    fn test_non_unique_always_folds_handle_into_key() {
        let values = [Datum::int8(1)];
        let encoded = IndexKey::new(TableId(1), &values, Handle(9), false).encode().unwrap();

        assert!(!encoded.distinct);
        assert!(encoded.key.as_slice().ends_with(&handle_tail(9)));
    }

    #[test]
    fn test_same_values_different_handles_stay_unique_when_not_distinct() {
        let values = [Datum::Null];
        let first = IndexKey::new(TableId(1), &values, Handle(1), true).encode().unwrap();
        let second = IndexKey::new(TableId(1), &values, Handle(2), true).encode().unwrap();

        assert_ne!(first.key, second.key);
    }

    #[test]
    fn test_order_follows_value_order() {
        let low = [Datum::int8(100)];
        let high = [Datum::int8(200)];
        let first = IndexKey::new(TableId(1), &low, Handle(1), false).encode().unwrap();
        let second = IndexKey::new(TableId(1), &high, Handle(1), false).encode().unwrap();

        assert!(first.key < second.key);
    }

    #[test]
    fn test_null_sorts_before_any_value() {
        let null = [Datum::Null];
        let value = [Datum::int8(i64::MIN)];
        let first = IndexKey::new(TableId(1), &null, Handle(1), false).encode().unwrap();
        let second = IndexKey::new(TableId(1), &value, Handle(1), false).encode().unwrap();

        assert!(first.key < second.key);
    }

    #[test]
    fn test_unencodable_value_fails_without_emitting_a_key() {
        let values = [Datum::Decimal(Decimal::parse("1.5").unwrap())];
        let err = IndexKey::new(TableId(1), &values, Handle(1), true).encode().unwrap_err();
        assert_eq!(err.code(), "KEY_003");
    }

    #[test]
    fn test_record_and_index_namespaces_never_collide() {
        let values = [Datum::int8(2)];
        let index = IndexKey::new(TableId(1), &values, Handle(2), false).encode().unwrap();
        let record = RecordKey::new(TableId(1), Handle(2)).encode();

        assert_ne!(index.key, record);
        assert!(!index.key.as_slice().starts_with(record.as_slice()));
        assert!(!record.as_slice().starts_with(index.key.as_slice()));
    }

    #[test]
    fn test_table_scan_contains_only_this_table() {
        let range = IndexKey::table_scan(TableId(5));
        let values = [Datum::utf8("abc")];

        let inside = IndexKey::new(TableId(5), &values, Handle(1), false).encode().unwrap();
        let other_table = IndexKey::new(TableId(6), &values, Handle(1), false).encode().unwrap();
        let record = RecordKey::new(TableId(5), Handle(1)).encode();

        assert!(range.contains(&inside.key));
        assert!(!range.contains(&other_table.key));
        assert!(!range.contains(&record));
    }
}
