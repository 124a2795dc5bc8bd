// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The transaction record kept consistent across unit swaps

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{decode_transfer, AddressField, AmountField, DataField, TokenDecimals};

/// Monetary and recipient fields of a transaction draft
///
/// `to`, `value` and `data` describe the literal on-chain call. `token_value`
/// and `token_to` describe the logical token-level amount and recipient when a
/// token is the active unit. For a token transfer both views agree:
///
/// - `to.value` is the token contract address
/// - `data` is a `transfer(token_to.value, token_value.value)` call
/// - `value.value` is zero (no ether moves)
///
/// `decimal` is the precision of the active unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMeta {
    /// Call target: recipient for ether sends, token contract for token sends
    pub to: AddressField,
    /// Ether amount in wei
    pub value: AmountField,
    /// Call data
    pub data: DataField,
    /// Token amount in the token's smallest denomination
    pub token_value: AmountField,
    /// Token recipient
    pub token_to: AddressField,
    /// Decimal precision of the active unit
    pub decimal: TokenDecimals,
}

impl TransactionMeta {
    /// Empty draft fields for a network whose unit has `decimal` precision
    pub fn new(decimal: TokenDecimals) -> Self {
        Self {
            to: AddressField::default(),
            value: AmountField::default(),
            data: DataField::default(),
            token_value: AmountField::default(),
            token_to: AddressField::default(),
            decimal,
        }
    }

    /// Check that the literal call agrees with the logical token transfer
    ///
    /// Returns `true` when `data` decodes to a transfer of `token_value` to
    /// `token_to` (an unset recipient encodes as the zero address) and no ether
    /// moves alongside it.
    pub fn is_consistent_token_transfer(&self) -> bool {
        let Ok((recipient, amount)) = decode_transfer(&self.data.value) else {
            return false;
        };
        let expected_recipient = self.token_to.value.unwrap_or(Address::ZERO);
        recipient == expected_recipient
            && amount == self.token_value.amount_or_zero()
            && self.value.amount_or_zero().is_zero()
    }
}

impl Default for TransactionMeta {
    fn default() -> Self {
        Self::new(TokenDecimals::NATIVE)
    }
}
