// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integer token amount type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Integer amount in a unit's smallest denomination
///
/// This is the rebased form of a human-entered value: `1.5` entered in a
/// 6-decimal token becomes `1_500_000`, and `1.5` entered in ETH becomes
/// `1_500_000_000_000_000_000` wei. The amount carries no decimals of its own;
/// its scale is always that of the unit it was rebased for.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use unitswap::TokenAmount;
///
/// let amount = TokenAmount::new(U256::from(1_500_000u64));
/// assert_eq!(amount.as_u256(), U256::from(1_500_000u64));
/// assert!(!amount.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_amount_creation() {
        let amount = TokenAmount::new(U256::from(1000u64));
        assert_eq!(amount.as_u256(), U256::from(1000u64));
    }

    #[test]
    fn test_token_amount_zero() {
        assert!(TokenAmount::ZERO.is_zero());
        assert_eq!(TokenAmount::ZERO.as_u256(), U256::ZERO);
    }

    #[test]
    fn test_display_formatting() {
        let amount = TokenAmount::new(U256::from(12345u64));
        assert_eq!(format!("{}", amount), "12345");
    }

    #[test]
    fn test_ordering() {
        assert!(TokenAmount::from(1u64) < TokenAmount::from(2u64));
    }
}
