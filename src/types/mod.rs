// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across unitswap.
//!
//! This module provides newtype wrappers for the values a transaction draft carries:
//! - Unit symbols (network unit vs. token symbols)
//! - Token amounts, decimals and metadata
//! - Native currency amounts in wei
//! - User-editable draft fields and the transaction meta record they form

pub mod fields;
pub mod meta;
pub mod tokens;
pub mod unit;
pub mod wei;

// Note: Public types are re-exported from lib.rs, not here
