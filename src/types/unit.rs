// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Unit symbol type

use serde::{Deserialize, Serialize};

/// Symbol of the unit a transaction amount is entered in
///
/// A unit is either the active network's native currency (the "network unit",
/// e.g. `ETH`) or the symbol of a fungible token (e.g. `USDC`). The symbol itself
/// is opaque: whether it is the network unit is decided by the active
/// [`NetworkConfig`](crate::NetworkConfig), and token metadata is looked up through
/// a [`TokenResolver`](crate::TokenResolver).
///
/// Symbols compare exactly, including case.
///
/// # Examples
///
/// ```
/// use unitswap::Unit;
///
/// let unit = Unit::new("ETH");
/// assert_eq!(unit.as_str(), "ETH");
/// assert_ne!(unit, Unit::new("eth"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit(String);

impl Unit {
    /// Create a unit from its symbol
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the symbol as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Unit {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Unit {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Unit {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
