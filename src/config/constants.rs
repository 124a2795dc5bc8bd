// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and constants
//!
//! This module centralizes magic constants and well-known token contracts
//! used throughout the unitswap crate, improving discoverability and maintainability.

use alloy_chains::NamedChain;
use alloy_primitives::{address, Address};

use crate::{TokenDecimals, TokenMetadata};

/// Gas limit of a plain network-unit transfer
pub const NATIVE_TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Gas limit budgeted for an ERC-20 `transfer` call
pub const TOKEN_TRANSFER_GAS_LIMIT: u64 = 65_000;

/// Symbol used when a chain does not declare its native currency
pub const DEFAULT_NETWORK_UNIT: &str = "ETH";

/// Well-known stablecoin addresses
pub mod stablecoins {
    use super::*;

    /// Native USDC on Ethereum Mainnet
    ///
    /// Contract: 0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48
    pub const ETH_USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");

    /// USDT on Ethereum Mainnet
    ///
    /// Contract: 0xdAC17F958D2ee523a2206206994597C13D831ec7
    pub const ETH_USDT: Address = address!("dac17f958d2ee523a2206206994597c13d831ec7");

    /// DAI on Ethereum Mainnet
    ///
    /// Contract: 0x6B175474E89094C44Da98b954EedeAC495271d0F
    pub const ETH_DAI: Address = address!("6b175474e89094c44da98b954eedeac495271d0f");
}

/// Tokens the wallet knows about out of the box on a chain
///
/// Chains without a built-in list return an empty vector; users add their own
/// tokens through configuration.
pub fn well_known_tokens(chain_id: u64) -> Vec<TokenMetadata> {
    match NamedChain::try_from(chain_id) {
        Ok(NamedChain::Mainnet) => vec![
            TokenMetadata::new("USDC", stablecoins::ETH_USDC, TokenDecimals::USDC),
            TokenMetadata::new("USDT", stablecoins::ETH_USDT, TokenDecimals::new(6)),
            TokenMetadata::new("DAI", stablecoins::ETH_DAI, TokenDecimals::STANDARD),
        ],
        _ => Vec::new(),
    }
}
