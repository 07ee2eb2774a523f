// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use super::Diagnostic;

pub fn nan_not_allowed() -> Diagnostic {
    Diagnostic {
        code: "NUMBER_001".to_string(),
        message: "NaN not allowed".to_string(),
        label: Some("NaN (Not a Number) values are not permitted".to_string()),
        help: Some("use a finite number instead".to_string()),
        notes: vec![],
        cause: None,
    }
}

pub fn invalid_decimal_format(value: &str) -> Diagnostic {
    Diagnostic {
        code: "NUMBER_002".to_string(),
        message: "invalid decimal format".to_string(),
        label: Some(format!("'{}' is not a valid decimal number", value)),
        help: Some("use decimal format (e.g., 123.45, -67.89, 1.23e-4)".to_string()),
        notes: vec!["valid: 123.45".to_string(), "valid: -67.89".to_string()],
        cause: None,
    }
}
