// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Rebasing human-entered decimal strings to integer amounts
//!
//! The rebaser turns what the user typed (`"1.5"`) into the integer amount in a
//! unit's smallest denomination (`1_500_000` for a 6-decimal token). Digits past
//! the target precision are truncated, never rounded up. The typed string is kept
//! verbatim so the UI can redisplay it unchanged.
//!
//! The rebaser has no failure mode: input that is empty, malformed, negative or
//! too large for a `U256` yields an [`AmountField`] whose `value` is `None`, and
//! the [`AmountValidator`](crate::AmountValidator) rejects it.
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use unitswap::{rebase_user_input, TokenDecimals};
//!
//! let field = rebase_user_input("1.5", TokenDecimals::USDC);
//! assert_eq!(field.raw, "1.5");
//! assert_eq!(field.value.unwrap().as_u256(), U256::from(1_500_000u64));
//!
//! // Extra precision is truncated
//! let field = rebase_user_input("0.1234569", TokenDecimals::USDC);
//! assert_eq!(field.value.unwrap().as_u256(), U256::from(123_456u64));
//! ```

use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::num_bigint::Sign;
use bigdecimal::BigDecimal;
use tracing::trace;

use crate::{spans, AmountField, TokenAmount, TokenDecimals};

/// Number of decimal digits in `U256::MAX`
const MAX_U256_DIGITS: i64 = 78;

/// Rebase a raw decimal string at the given precision
pub fn rebase_user_input(raw: &str, decimals: TokenDecimals) -> AmountField {
    let span = spans::rebase_user_input(decimals);
    let _guard = span.enter();

    let value = parse_scaled(raw.trim(), decimals);
    if value.is_none() {
        trace!(raw, "Input is not a valid non-negative amount");
    }

    AmountField {
        raw: raw.to_string(),
        value,
    }
}

impl AmountField {
    /// Recompute `value` from `raw` at a new precision
    ///
    /// The old `value` is discarded: it belongs to the previous unit's scale.
    pub fn rebased(&self, decimals: TokenDecimals) -> AmountField {
        rebase_user_input(&self.raw, decimals)
    }
}

fn parse_scaled(input: &str, decimals: TokenDecimals) -> Option<TokenAmount> {
    if input.is_empty() {
        return None;
    }

    let parsed = BigDecimal::from_str(input).ok()?;
    let (digits, exponent) = parsed.as_bigint_and_exponent();
    if digits.sign() == Sign::Minus {
        return None;
    }

    // value < 10^magnitude
    let magnitude = (digits.to_string().len() as i64).saturating_sub(exponent);
    if magnitude > MAX_U256_DIGITS {
        return None;
    }
    if magnitude <= -i64::from(decimals.as_u8()) {
        return Some(TokenAmount::ZERO);
    }

    let (integer, _) = parsed
        .with_scale(i64::from(decimals.as_u8()))
        .into_bigint_and_exponent();

    integer.to_string().parse::<U256>().ok().map(TokenAmount::new)
}
