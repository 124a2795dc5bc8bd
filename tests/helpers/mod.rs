// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for unitswap integration tests
//!
//! Provides recording implementations of the coordinator's collaborators so
//! tests can assert on the sequence of lookups and validations, not only on the
//! emitted command.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use unitswap::{AmountValidator, TokenAmount, TokenMetadata, TokenRegistry, TokenResolver, Unit};

/// Token resolver that records every unit it was asked about
///
/// # Example
///
/// ```rust,ignore
/// let resolver = RecordingResolver::new()
///     .with_token(TokenMetadata::new("TKN", address, TokenDecimals::new(1)));
///
/// coordinator.handle_unit_change(&UnitChanged::new("TKN"), &ctx)?;
/// assert_eq!(resolver.calls(), vec![Unit::new("TKN")]);
/// ```
#[derive(Default)]
pub struct RecordingResolver {
    registry: TokenRegistry,
    calls: Arc<Mutex<Vec<Unit>>>,
}

impl RecordingResolver {
    /// Create a resolver that knows no tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `token` resolvable
    pub fn with_token(mut self, token: TokenMetadata) -> Self {
        self.registry.add_token(token);
        self
    }

    /// Units looked up so far, in order
    pub fn calls(&self) -> Vec<Unit> {
        self.calls.lock().unwrap().clone()
    }
}

impl TokenResolver for RecordingResolver {
    fn resolve(&self, unit: &Unit) -> Option<TokenMetadata> {
        self.calls.lock().unwrap().push(unit.clone());
        self.registry.resolve(unit)
    }
}

/// Amount validator with a fixed verdict that records every call
pub struct RecordingValidator {
    verdict: bool,
    calls: Arc<Mutex<Vec<(Option<TokenAmount>, Unit)>>>,
}

impl RecordingValidator {
    /// Validator that accepts every parsed amount
    pub fn accepting() -> Self {
        Self {
            verdict: true,
            calls: Arc::default(),
        }
    }

    /// Validator that rejects everything
    pub fn rejecting() -> Self {
        Self {
            verdict: false,
            calls: Arc::default(),
        }
    }

    /// Validation requests so far, in order
    pub fn calls(&self) -> Vec<(Option<TokenAmount>, Unit)> {
        self.calls.lock().unwrap().clone()
    }
}

impl AmountValidator for RecordingValidator {
    fn validate(&self, value: Option<TokenAmount>, unit: &Unit) -> bool {
        self.calls.lock().unwrap().push((value, unit.clone()));
        self.verdict && value.is_some()
    }
}

/// Install a test subscriber honoring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
