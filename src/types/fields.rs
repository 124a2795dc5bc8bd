// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! User-editable transaction draft fields
//!
//! Every field keeps two views: `raw`, exactly what the user typed (or what is
//! shown back to them), and `value`, the parsed form the transaction is built from.

use std::str::FromStr;

use alloy_primitives::{hex, Address, Bytes};
use serde::{Deserialize, Serialize};

use crate::TokenAmount;

/// An amount field: the typed decimal string and its rebased integer
///
/// `value` is always the integer representation of `raw` at the decimal
/// precision of the *current* unit, or `None` when `raw` is not a valid
/// non-negative number. Build it with [`rebase_user_input`](crate::rebase_user_input)
/// so the two views cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountField {
    /// User-visible decimal string, preserved byte-for-byte
    pub raw: String,
    /// Rebased integer amount in the unit's smallest denomination
    pub value: Option<TokenAmount>,
}

impl AmountField {
    /// Create an amount field from both views
    pub fn new(raw: impl Into<String>, value: Option<TokenAmount>) -> Self {
        Self {
            raw: raw.into(),
            value,
        }
    }

    /// Amount field for "nothing moves": empty text, zero amount
    pub fn zero() -> Self {
        Self {
            raw: String::new(),
            value: Some(TokenAmount::ZERO),
        }
    }

    /// The rebased amount, or zero when the input is not a valid number
    pub fn amount_or_zero(&self) -> TokenAmount {
        self.value.unwrap_or(TokenAmount::ZERO)
    }
}

/// An address field: the typed text and the address it parses to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressField {
    /// User-visible address text (may be empty or partial while editing)
    pub raw: String,
    /// Parsed address, `None` while `raw` is not a valid address
    pub value: Option<Address>,
}

impl AddressField {
    /// Parse user text into an address field
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::address;
    /// use unitswap::AddressField;
    ///
    /// let field = AddressField::parse("0x1111111111111111111111111111111111111111");
    /// assert_eq!(field.value, Some(address!("1111111111111111111111111111111111111111")));
    ///
    /// let partial = AddressField::parse("0x11");
    /// assert_eq!(partial.value, None);
    /// ```
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = Address::from_str(raw.trim()).ok();
        Self { raw, value }
    }

    /// Field holding an address that was set programmatically (empty text)
    pub fn from_address(address: Address) -> Self {
        Self {
            raw: String::new(),
            value: Some(address),
        }
    }
}

/// Call data field: the hex rendering and the bytes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataField {
    /// `0x`-prefixed hex of `value`
    pub raw: String,
    /// Call data bytes
    pub value: Bytes,
}

impl DataField {
    /// Whether the field carries no call data
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<Bytes> for DataField {
    fn from(value: Bytes) -> Self {
        Self {
            raw: hex::encode_prefixed(&value),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, U256};

    #[test]
    fn test_address_field_parse_valid() {
        let field = AddressField::parse("0x2222222222222222222222222222222222222222");
        assert_eq!(
            field.value,
            Some(address!("2222222222222222222222222222222222222222"))
        );
        assert_eq!(field.raw, "0x2222222222222222222222222222222222222222");
    }

    #[test]
    fn test_address_field_parse_keeps_invalid_text() {
        let field = AddressField::parse("not an address");
        assert_eq!(field.raw, "not an address");
        assert_eq!(field.value, None);
    }

    #[test]
    fn test_address_field_from_address_has_empty_raw() {
        let addr = address!("3333333333333333333333333333333333333333");
        let field = AddressField::from_address(addr);
        assert!(field.raw.is_empty());
        assert_eq!(field.value, Some(addr));
    }

    #[test]
    fn test_data_field_hex_rendering() {
        let field = DataField::from(Bytes::from(vec![0xa9, 0x05, 0x9c, 0xbb]));
        assert_eq!(field.raw, "0xa9059cbb");
        assert!(!field.is_empty());
        assert!(DataField::default().is_empty());
    }

    #[test]
    fn test_amount_or_zero() {
        assert_eq!(AmountField::new("abc", None).amount_or_zero(), TokenAmount::ZERO);
        let field = AmountField::new("7", Some(TokenAmount::new(U256::from(7u64))));
        assert_eq!(field.amount_or_zero(), TokenAmount::from(7u64));
    }
}
