// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for unit swaps
//!
//! This module provides the wallet configuration the swap machinery runs
//! against: the active network, user-added networks and tokens, and the gas
//! limits used when checking that a draft is affordable.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use unitswap::UnitSwapConfig;
//!
//! // Ethereum mainnet with its well-known tokens
//! let config = UnitSwapConfig::default();
//! assert_eq!(config.network.unit.as_str(), "ETH");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use unitswap::{NetworkConfig, TokenDecimals, TokenMetadata, UnitSwapConfigBuilder};
//! use alloy_primitives::address;
//!
//! let config = UnitSwapConfigBuilder::new()
//!     .network(NetworkConfig::custom("local", 1337, "Local", "LOC"))
//!     .custom_token(TokenMetadata::new(
//!         "TKN",
//!         address!("2222222222222222222222222222222222222222"),
//!         TokenDecimals::new(8),
//!     ))
//!     .build();
//!
//! assert_eq!(config.token_registry().len(), 1);
//! ```

use std::path::Path;

use alloy_chains::NamedChain;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{ConfigError, TokenMetadata, TokenRegistry};

pub mod constants;
pub mod networks;

pub use networks::{CustomNetworks, NetworkConfig};

/// Configuration for unit swap operations
///
/// Use [`UnitSwapConfigBuilder`] for a fluent API to construct instances, or
/// [`UnitSwapConfig::from_json_file`] to load one from disk. Missing JSON fields
/// take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSwapConfig {
    /// The active network
    /// Default: Ethereum mainnet
    pub network: NetworkConfig,

    /// Networks the user added by hand
    pub custom_networks: CustomNetworks,

    /// Tokens the user added by hand, on top of the well-known ones
    pub custom_tokens: Vec<TokenMetadata>,

    /// Gas limit of a network-unit transfer
    /// Default: 21,000
    pub native_gas_limit: u64,

    /// Gas limit of a token transfer
    /// Default: 65,000
    pub token_gas_limit: u64,
}

impl Default for UnitSwapConfig {
    fn default() -> Self {
        Self::for_chain(NamedChain::Mainnet)
    }
}

impl UnitSwapConfig {
    /// Create config for a built-in chain with default gas limits
    ///
    /// # Example
    ///
    /// ```rust
    /// use unitswap::UnitSwapConfig;
    /// use alloy_chains::NamedChain;
    ///
    /// let config = UnitSwapConfig::for_chain(NamedChain::Polygon);
    /// assert_eq!(config.network.chain_id, 137);
    /// ```
    pub fn for_chain(chain: NamedChain) -> Self {
        Self {
            network: NetworkConfig::builtin(chain),
            custom_networks: CustomNetworks::new(),
            custom_tokens: Vec::new(),
            native_gas_limit: constants::NATIVE_TRANSFER_GAS_LIMIT,
            token_gas_limit: constants::TOKEN_TRANSFER_GAS_LIMIT,
        }
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::parse("string", e))
    }

    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are not a valid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io(path_str.clone(), e))?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|e| ConfigError::parse(path_str.clone(), e))?;

        info!(
            path = %path_str,
            network = %config.network.id,
            custom_networks = config.custom_networks.len(),
            custom_tokens = config.custom_tokens.len(),
            "Loaded unit swap configuration"
        );

        Ok(config)
    }

    /// Switch the active network to one of the custom networks
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NetworkNotFound`] if no custom network has this id.
    pub fn select_custom_network(&mut self, id: &str) -> Result<(), ConfigError> {
        let network = self
            .custom_networks
            .get(id)
            .cloned()
            .ok_or_else(|| ConfigError::NetworkNotFound { id: id.to_string() })?;

        debug!(id, unit = %network.unit, "Selected custom network");
        self.network = network;
        Ok(())
    }

    /// Token lookup for the active network
    ///
    /// Starts from the well-known tokens of the network's chain and layers the
    /// custom tokens on top; a custom token replaces a well-known one with the
    /// same symbol.
    pub fn token_registry(&self) -> TokenRegistry {
        TokenRegistry::with_tokens(
            constants::well_known_tokens(self.network.chain_id)
                .into_iter()
                .chain(self.custom_tokens.iter().cloned()),
        )
    }
}

/// Builder for [`UnitSwapConfig`]
///
/// Provides a fluent API for constructing unit swap configurations.
///
/// # Example
///
/// ```rust
/// use unitswap::UnitSwapConfigBuilder;
/// use alloy_chains::NamedChain;
///
/// let config = UnitSwapConfigBuilder::new()
///     .chain(NamedChain::Arbitrum)
///     .token_gas_limit(100_000)
///     .build();
///
/// assert_eq!(config.token_gas_limit, 100_000);
/// ```
pub struct UnitSwapConfigBuilder {
    config: UnitSwapConfig,
}

impl Default for UnitSwapConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitSwapConfigBuilder {
    /// Create a new builder with mainnet defaults
    pub fn new() -> Self {
        Self {
            config: UnitSwapConfig::default(),
        }
    }

    /// Set the active network
    pub fn network(mut self, network: NetworkConfig) -> Self {
        self.config.network = network;
        self
    }

    /// Set the active network to a built-in chain
    pub fn chain(mut self, chain: NamedChain) -> Self {
        self.config.network = NetworkConfig::builtin(chain);
        self
    }

    /// Register a custom network
    ///
    /// Networks not marked as custom are ignored.
    pub fn custom_network(mut self, network: NetworkConfig) -> Self {
        if let Err(e) = self.config.custom_networks.add(network) {
            debug!(error = %e, "Ignoring network passed to builder");
        }
        self
    }

    /// Register a custom token
    pub fn custom_token(mut self, token: TokenMetadata) -> Self {
        self.config.custom_tokens.push(token);
        self
    }

    /// Set the gas limit of a network-unit transfer
    pub fn native_gas_limit(mut self, gas_limit: u64) -> Self {
        self.config.native_gas_limit = gas_limit;
        self
    }

    /// Set the gas limit of a token transfer
    pub fn token_gas_limit(mut self, gas_limit: u64) -> Self {
        self.config.token_gas_limit = gas_limit;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> UnitSwapConfig {
        self.config
    }
}
