// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::array::TryFromSliceError;
use std::fmt::{Display, Formatter};
use std::string::FromUtf8Error;

/// Represents errors that may occur during keycode encoding or decoding:
/// malformed input, unsupported data shapes, or truncated byte sequences.
///
/// This is the low-level serialization error; the key and value codecs wrap
/// it into a structured diagnostic before surfacing it to callers.
#[derive(Debug, PartialEq)]
pub struct Error(pub String);

#[macro_export]
macro_rules! invalid_data {
    ($($args:tt)*) => { Err(Error(format!($($args)*)).into()) };
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error {}

impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Self(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Self(msg.to_string())
    }
}

impl From<TryFromSliceError> for Error {
    fn from(err: TryFromSliceError) -> Self {
        Self(err.to_string())
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Self {
        Self(err.to_string())
    }
}

impl From<Error> for tablekv_type::Error {
    fn from(err: Error) -> Self {
        tablekv_type::error!(tablekv_type::diagnostic::encoding::keycode_error(err.to_string()))
    }
}
