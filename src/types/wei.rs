// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for native currency amounts
//!
//! This module provides a newtype wrapper for native currency (ETH, MATIC, etc.)
//! in wei so balances and gas costs are never confused with token amounts.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::TokenAmount;

/// Represents an amount of native currency (ETH, MATIC, etc.) in wei
///
/// This type is distinct from [`TokenAmount`] to prevent mixing a
/// balance or gas cost with a token-denominated transfer amount. Arithmetic is
/// checked: the amount validator treats overflow as "not affordable".
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use unitswap::WeiAmount;
///
/// let gas_price = WeiAmount::new(U256::from(20_000_000_000u64)); // 20 gwei
/// let cost = WeiAmount::gas_cost(21_000, gas_price).unwrap();
/// assert_eq!(cost.as_u256(), U256::from(420_000_000_000_000u64));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct WeiAmount(U256);

impl WeiAmount {
    /// Zero wei amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new wei amount
    pub const fn new(wei: U256) -> Self {
        Self(wei)
    }

    /// Get the inner U256 value (in wei)
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Total cost of `gas_limit` units of gas at `gas_price`, or `None` on overflow
    pub fn gas_cost(gas_limit: u64, gas_price: WeiAmount) -> Option<Self> {
        gas_price.0.checked_mul(U256::from(gas_limit)).map(Self)
    }

    /// Checked addition, `None` on overflow
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Convert to ether (1 ETH = 10^18 wei)
    ///
    /// Returns f64 for display purposes. This is a lossy conversion.
    pub fn to_ether(&self) -> f64 {
        self.0.to_string().parse::<f64>().unwrap_or(0.0) / 1e18
    }
}

impl From<u64> for WeiAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for WeiAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

/// Reinterpret an amount rebased at the network unit's precision as wei
impl From<TokenAmount> for WeiAmount {
    fn from(value: TokenAmount) -> Self {
        Self(value.as_u256())
    }
}

impl std::fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let eth = self.to_ether();
        if eth < 0.000001 {
            write!(f, "{} wei", self.0)
        } else {
            write!(f, "{:.6} ETH", eth)
        }
    }
}
