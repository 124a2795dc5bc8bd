// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Network definitions and user-added custom networks
//!
//! Exactly one unit per active network is the *network unit*; every other unit
//! is a token. [`NetworkConfig`] carries that unit and its precision, and
//! [`CustomNetworks`] holds the networks a user added by hand, keyed by id.

use std::collections::BTreeMap;

use alloy_chains::NamedChain;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::constants::DEFAULT_NETWORK_UNIT;
use crate::{ConfigError, TokenDecimals, Unit};

fn default_network_decimals() -> TokenDecimals {
    TokenDecimals::NATIVE
}

/// A network the wallet can send on
///
/// # Examples
///
/// ```
/// use alloy_chains::NamedChain;
/// use unitswap::{NetworkConfig, Unit};
///
/// let mainnet = NetworkConfig::builtin(NamedChain::Mainnet);
/// assert!(mainnet.is_network_unit(&Unit::new("ETH")));
/// assert!(!mainnet.is_network_unit(&Unit::new("USDC")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Unique id of the network
    pub id: String,
    /// EIP-155 chain id
    pub chain_id: u64,
    /// Display name
    pub name: String,
    /// Symbol of the native currency
    pub unit: Unit,
    /// Precision of the native currency
    #[serde(default = "default_network_decimals")]
    pub decimals: TokenDecimals,
    /// Whether the user added this network by hand
    #[serde(default)]
    pub is_custom: bool,
}

impl NetworkConfig {
    /// Built-in definition of a well-known chain
    ///
    /// The network unit is the chain's native currency symbol, falling back to
    /// `ETH` for chains that do not declare one.
    pub fn builtin(chain: NamedChain) -> Self {
        let unit = chain
            .native_currency_symbol()
            .unwrap_or(DEFAULT_NETWORK_UNIT);

        Self {
            id: chain.to_string(),
            chain_id: chain as u64,
            name: chain.to_string(),
            unit: Unit::new(unit),
            decimals: TokenDecimals::NATIVE,
            is_custom: false,
        }
    }

    /// Definition of a user-added network with an 18-decimal native currency
    pub fn custom(
        id: impl Into<String>,
        chain_id: u64,
        name: impl Into<String>,
        unit: impl Into<Unit>,
    ) -> Self {
        Self {
            id: id.into(),
            chain_id,
            name: name.into(),
            unit: unit.into(),
            decimals: TokenDecimals::NATIVE,
            is_custom: true,
        }
    }

    /// Whether `unit` is this network's native currency
    pub fn is_network_unit(&self, unit: &Unit) -> bool {
        self.unit == *unit
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::builtin(NamedChain::Mainnet)
    }
}

/// User-added networks keyed by id
///
/// Adding a network whose id already exists replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomNetworks(BTreeMap<String, NetworkConfig>);

impl CustomNetworks {
    /// Create an empty set of custom networks
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a custom network
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotCustomNetwork`] if `network.is_custom` is false.
    pub fn add(&mut self, network: NetworkConfig) -> Result<(), ConfigError> {
        if !network.is_custom {
            return Err(ConfigError::NotCustomNetwork { id: network.id });
        }

        info!(
            id = %network.id,
            chain_id = network.chain_id,
            unit = %network.unit,
            "Adding custom network"
        );
        self.0.insert(network.id.clone(), network);
        Ok(())
    }

    /// Remove a custom network by id
    pub fn remove(&mut self, id: &str) -> Option<NetworkConfig> {
        self.0.remove(id)
    }

    /// Look up a custom network by id
    pub fn get(&self, id: &str) -> Option<&NetworkConfig> {
        self.0.get(id)
    }

    /// Number of custom networks
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no custom networks
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over custom networks ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &NetworkConfig> {
        self.0.values()
    }
}
