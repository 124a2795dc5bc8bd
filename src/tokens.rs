// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token metadata lookup by unit symbol
//!
//! The coordinator never assumes a token exists: it asks a [`TokenResolver`] and
//! treats absence as fatal for the unit swap in progress. Resolution runs against
//! state the wallet has already loaded; fetching token lists or on-chain metadata
//! is outside this crate.
//!
//! [`TokenRegistry`] is the in-memory resolver. It is seeded with the well-known
//! tokens of the active chain plus any user-added custom tokens, see
//! [`UnitSwapConfig::token_registry`](crate::UnitSwapConfig::token_registry).

use std::collections::HashMap;

use tracing::debug;

use crate::{TokenMetadata, Unit};

/// Read-only lookup of token metadata by unit symbol
///
/// Returning `None` means "not a known token", which is distinct from a token
/// that resolves with zero decimals.
pub trait TokenResolver: Send + Sync {
    /// Look up the token selected by `unit`
    fn resolve(&self, unit: &Unit) -> Option<TokenMetadata>;
}

/// In-memory token registry keyed by unit symbol
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use unitswap::{TokenDecimals, TokenMetadata, TokenRegistry, TokenResolver, Unit};
///
/// let mut registry = TokenRegistry::new();
/// registry.add_token(TokenMetadata::new(
///     "USDC",
///     address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"),
///     TokenDecimals::USDC,
/// ));
///
/// assert!(registry.resolve(&Unit::new("USDC")).is_some());
/// assert!(registry.resolve(&Unit::new("usdc")).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: HashMap<Unit, TokenMetadata>,
}

impl TokenRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a list of tokens
    ///
    /// Later entries replace earlier ones with the same symbol.
    pub fn with_tokens(tokens: impl IntoIterator<Item = TokenMetadata>) -> Self {
        let mut registry = Self::new();
        for token in tokens {
            registry.add_token(token);
        }
        registry
    }

    /// Add a token, returning the entry it replaced, if any
    pub fn add_token(&mut self, token: TokenMetadata) -> Option<TokenMetadata> {
        debug!(
            symbol = %token.symbol,
            address = %token.address,
            decimals = token.decimal.as_u8(),
            "Registering token"
        );
        self.tokens.insert(token.symbol.clone(), token)
    }

    /// Remove a token by symbol
    pub fn remove_token(&mut self, unit: &Unit) -> Option<TokenMetadata> {
        self.tokens.remove(unit)
    }

    /// Look up a token by symbol without cloning
    pub fn get(&self, unit: &Unit) -> Option<&TokenMetadata> {
        self.tokens.get(unit)
    }

    /// Number of registered tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no tokens are registered
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over registered tokens (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &TokenMetadata> {
        self.tokens.values()
    }
}

impl TokenResolver for TokenRegistry {
    fn resolve(&self, unit: &Unit) -> Option<TokenMetadata> {
        self.tokens.get(unit).cloned()
    }
}
