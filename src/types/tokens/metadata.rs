// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token metadata type

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;
use crate::Unit;

/// What the wallet knows about a token unit
///
/// `address` is the ERC-20 contract a transfer call is sent to, and `decimal`
/// is the precision user input is rebased to when the token becomes the active
/// unit.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use unitswap::{TokenDecimals, TokenMetadata, Unit};
///
/// let usdc = TokenMetadata::new(
///     "USDC",
///     address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
///     TokenDecimals::USDC,
/// );
/// assert_eq!(usdc.symbol, Unit::new("USDC"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Unit symbol the token is selected by
    pub symbol: Unit,
    /// ERC-20 contract address
    pub address: Address,
    /// Decimal precision of the token
    pub decimal: TokenDecimals,
}

impl TokenMetadata {
    /// Create token metadata
    pub fn new(symbol: impl Into<Unit>, address: Address, decimal: TokenDecimals) -> Self {
        Self {
            symbol: symbol.into(),
            address,
            decimal,
        }
    }
}
