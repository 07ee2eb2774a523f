// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use super::Diagnostic;

/// A record key that does not match the `'t' <table> "_r"` layout: wrong
/// table prefix or missing record separator. The offending bytes are kept on
/// the diagnostic so the corrupt key can be inspected later.
pub fn invalid_record_key(key: &[u8]) -> Diagnostic {
    Diagnostic {
        code: "KEY_001".to_string(),
        message: "invalid record key".to_string(),
        label: Some(format!("key {:x?} does not match the record key layout", key)),
        help: Some("record keys start with 't', the encoded table id and the '_r' separator".to_string()),
        notes: vec![],
        cause: None,
    }
}

/// A record key with the right shape but a truncated or corrupt component
/// encoding. `cause` carries the underlying keycode failure.
pub fn malformed_record_key(key: &[u8], cause: Diagnostic) -> Diagnostic {
    Diagnostic {
        code: "KEY_002".to_string(),
        message: "malformed record key".to_string(),
        label: Some(format!("failed to decode a component of key {:x?}", key)),
        help: None,
        notes: vec![],
        cause: Some(Box::new(cause)),
    }
}

/// An index key could not be encoded because one of the indexed values has no
/// key representation. `cause` carries the underlying keycode failure.
pub fn index_key_encoding_failed(cause: Diagnostic) -> Diagnostic {
    Diagnostic {
        code: "KEY_003".to_string(),
        message: "failed to encode index key".to_string(),
        label: None,
        help: Some("only null, integer, float, text and binary values can appear in index keys".to_string()),
        notes: vec![],
        cause: Some(Box::new(cause)),
    }
}
