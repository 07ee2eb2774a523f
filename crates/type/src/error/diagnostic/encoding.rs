// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use super::Diagnostic;

/// A keycode serialization or deserialization failure.
pub fn keycode_error(message: impl Into<String>) -> Diagnostic {
    Diagnostic {
        code: "ENCODING_001".to_string(),
        message: format!("keycode error: {}", message.into()),
        label: None,
        help: None,
        notes: vec![],
        cause: None,
    }
}

/// A stored value that decodes to no datum at all.
pub fn empty_value() -> Diagnostic {
    Diagnostic {
        code: "ENCODING_002".to_string(),
        message: "stored value contains no datum".to_string(),
        label: None,
        help: None,
        notes: vec![],
        cause: None,
    }
}
