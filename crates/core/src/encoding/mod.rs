// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

pub use error::Error;

mod error;
pub mod keycode;

pub type Result<T> = std::result::Result<T, Error>;
