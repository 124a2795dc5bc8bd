// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token-related values
//!
//! This module provides newtype wrappers for token operations
//! to add type safety and prevent mixing incompatible units.
//!
//! # Type Relationships
//!
//! ```text
//! raw user input ("1.5")
//!     |
//!     | rebase_user_input(TokenDecimals)
//!     ↓
//! TokenAmount (U256, smallest denomination)
//!     |
//!     | encode_transfer(to, amount)
//!     ↓
//! ERC-20 transfer call data
//! ```

mod amount;
mod decimals;
mod metadata;

pub use amount::TokenAmount;
pub use decimals::TokenDecimals;
pub use metadata::TokenMetadata;
