// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

pub mod coercion;
pub mod encoding;
pub mod key;
pub mod number;

/// A structured description of a failure (or, for warnings, a condition worth
/// surfacing): a stable code, a human readable message and optional context.
///
/// Diagnostics are plain values. The caller decides whether to render, log or
/// inspect them; nothing in this crate writes to a global sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub label: Option<String>,
    pub help: Option<String>,
    pub notes: Vec<String>,
    pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
    /// Renders the diagnostic and its cause chain into a single string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "[{}] {}", self.code, self.message);
        if let Some(label) = &self.label {
            let _ = write!(out, ": {}", label);
        }
        if let Some(help) = &self.help {
            let _ = write!(out, "\nhelp: {}", help);
        }
        for note in &self.notes {
            let _ = write!(out, "\nnote: {}", note);
        }
        if let Some(cause) = &self.cause {
            let _ = write!(out, "\ncaused by: {}", cause.render());
        }
        out
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

pub trait IntoDiagnostic {
    fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
    fn into_diagnostic(self) -> Diagnostic {
        self
    }
}
