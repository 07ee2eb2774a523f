// Copyright (c) tablekv 2026
// This file is licensed under the MIT, see license.md file

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

use crate::{Result, error, error::diagnostic::number::invalid_decimal_format};

/// An arbitrary-precision decimal.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Decimal {
    inner: BigDecimal,
}

impl Decimal {
    pub fn new(inner: BigDecimal) -> Self {
        Self { inner }
    }

    /// Parses the canonical decimal string representation used by the storage
    /// layer.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(error!(invalid_decimal_format(value)));
        }
        let inner = BigDecimal::from_str(trimmed).map_err(|_| error!(invalid_decimal_format(value)))?;
        Ok(Self { inner })
    }

    pub fn inner(&self) -> &BigDecimal {
        &self.inner
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.inner.to_f64()
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl From<BigDecimal> for Decimal {
    fn from(inner: BigDecimal) -> Self {
        Self { inner }
    }
}
