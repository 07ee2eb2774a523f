// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use catalog::{ColumnId, Handle, TableId, sort_handles};
pub use key::{
    EncodedIndexKey, EncodedKey, EncodedKeyRange, INDEX_PREFIX_SEP, IndexKey, RECORD_PREFIX_SEP, RecordKey,
    TABLE_PREFIX, table_index_prefix, table_record_prefix,
};
pub use tablekv_type::{Error, Result};
pub use unflatten::{Unflattened, decode_datums, decode_value, unflatten};

mod catalog;
pub mod encoding;
mod key;
mod unflatten;
