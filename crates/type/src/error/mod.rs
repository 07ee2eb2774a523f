// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

pub mod diagnostic;

pub use diagnostic::{Diagnostic, IntoDiagnostic};

/// The crate wide error type: a single structured [`Diagnostic`].
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
    pub fn diagnostic(self) -> Diagnostic {
        self.0
    }

    pub fn code(&self) -> &str {
        &self.0.code
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0.render(), f)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Wraps a diagnostic into an [`Error`].
#[macro_export]
macro_rules! error {
    ($diagnostic:expr) => {
        $crate::Error($crate::IntoDiagnostic::into_diagnostic($diagnostic))
    };
}

/// Returns early with an [`Error`] built from a diagnostic.
#[macro_export]
macro_rules! return_error {
    ($diagnostic:expr) => {
        return Err($crate::error!($diagnostic))
    };
}
