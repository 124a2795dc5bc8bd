// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for unit swaps.
//!
//! This module provides the fatal error of the `swap` module. Everything else a
//! unit swap can run into (an invalid amount, a native-to-native no-op) ends in an
//! empty outcome instead of an error.

use crate::Unit;

/// Errors that halt a unit swap.
///
/// When one of these is returned no command has been emitted and no draft field
/// has been touched.
///
/// # Examples
///
/// ```rust,ignore
/// use unitswap::{SwapError, UnitChanged};
///
/// match coordinator.handle_unit_change(&UnitChanged::new("TKN2"), &ctx) {
///     Ok(outcome) => draft.apply(outcome),
///     Err(SwapError::TokenNotFound { unit }) => {
///         eprintln!("{unit} is not a known token on this network");
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    /// The newly selected unit is not the network unit and no token metadata
    /// exists for it.
    ///
    /// Proceeding would encode a transfer against an unknown contract with an
    /// unknown precision, so the swap stops here.
    #[error("Could not find token during unit swap: {unit}")]
    TokenNotFound {
        /// The unit that failed to resolve
        unit: Unit,
    },
}

impl SwapError {
    /// Create a `TokenNotFound` error for a unit.
    pub fn token_not_found(unit: impl Into<Unit>) -> Self {
        SwapError::TokenNotFound { unit: unit.into() }
    }
}
