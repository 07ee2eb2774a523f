// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use super::Diagnostic;
use crate::column::ColumnType;

/// A stored datum whose kind does not match what the declared column type
/// expects (e.g. a temporal column whose stored datum is not a byte payload).
pub fn unexpected_datum(ty: ColumnType, expected: &str, found: &str) -> Diagnostic {
    Diagnostic {
        code: "COERCION_001".to_string(),
        message: format!("unexpected datum for {} column", ty),
        label: Some(format!("expected a {} datum, found {}", expected, found)),
        help: None,
        notes: vec![],
        cause: None,
    }
}

/// A temporal byte payload that could not be unmarshalled.
pub fn temporal_unmarshal_failed(ty: ColumnType, reason: impl Into<String>) -> Diagnostic {
    Diagnostic {
        code: "COERCION_002".to_string(),
        message: format!("failed to unmarshal {} value", ty),
        label: Some(reason.into()),
        help: None,
        notes: vec![],
        cause: None,
    }
}

/// A stored decimal string that failed to parse. `cause` carries the number
/// diagnostic describing the malformed text.
pub fn decimal_parse_failed(cause: Diagnostic) -> Diagnostic {
    Diagnostic {
        code: "COERCION_003".to_string(),
        message: "failed to parse stored decimal".to_string(),
        label: None,
        help: None,
        notes: vec![],
        cause: Some(Box::new(cause)),
    }
}

/// An enum ordinal outside the declared symbol list.
pub fn invalid_enum_ordinal(ordinal: u64, symbols: usize) -> Diagnostic {
    Diagnostic {
        code: "COERCION_004".to_string(),
        message: "invalid enum ordinal".to_string(),
        label: Some(format!("ordinal {} is outside the symbol list of {} entries", ordinal, symbols)),
        help: Some("enum ordinals are 1-based indexes into the declared symbol list".to_string()),
        notes: vec![],
        cause: None,
    }
}

/// A set bitmask with bits beyond the declared symbol list.
pub fn invalid_set_bitmask(bitmask: u64, symbols: usize) -> Diagnostic {
    Diagnostic {
        code: "COERCION_005".to_string(),
        message: "invalid set bitmask".to_string(),
        label: Some(format!("bitmask {:#x} has bits beyond the symbol list of {} entries", bitmask, symbols)),
        help: None,
        notes: vec![],
        cause: None,
    }
}

/// A column type tag this codec does not interpret. This is a warning, not an
/// error: the stored value passes through unchanged and the caller decides
/// whether to log, ignore or escalate.
pub fn unknown_column_type(tag: u8) -> Diagnostic {
    Diagnostic {
        code: "COERCION_006".to_string(),
        message: format!("unknown column type tag {:#04x}", tag),
        label: Some("the stored value was passed through unchanged".to_string()),
        help: Some("this usually means the schema was written by a newer codec version".to_string()),
        notes: vec![],
        cause: None,
    }
}
