// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-20 `transfer` call encoding
//!
//! A token send is an ordinary transaction to the token contract whose call data
//! is `transfer(recipient, amount)`. This module produces that call data and
//! decodes it back.
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::address;
//! use unitswap::{decode_transfer, encode_transfer, TokenAmount};
//!
//! let recipient = address!("1111111111111111111111111111111111111111");
//! let data = encode_transfer(recipient, TokenAmount::from(1_000_000u64));
//!
//! assert_eq!(&data[..4], &[0xa9, 0x05, 0x9c, 0xbb]);
//! assert_eq!(decode_transfer(&data).unwrap(), (recipient, TokenAmount::from(1_000_000u64)));
//! ```

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{sol, SolCall};

use crate::{EncodingError, TokenAmount};

sol! {
    /// ERC-20 transfer function
    ///
    /// Moves `amount` of the caller's tokens to `to`. The selector is
    /// `0xa9059cbb`.
    ///
    /// # Fields
    ///
    /// - `to`: Recipient of the tokens
    /// - `amount`: Raw token amount (not adjusted for decimals)
    function transfer(address to, uint256 amount) external returns (bool);
}

/// Encode an ERC-20 `transfer(destination, amount)` call
///
/// Deterministic and infallible. The destination is not validated here; an
/// unset recipient is encoded by the caller as [`Address::ZERO`].
pub fn encode_transfer(destination: Address, amount: TokenAmount) -> Bytes {
    transferCall {
        to: destination,
        amount: amount.as_u256(),
    }
    .abi_encode()
    .into()
}

/// Decode ERC-20 `transfer` call data into `(destination, amount)`
///
/// # Errors
///
/// Returns [`EncodingError::Decode`] when the selector is not `transfer` or the
/// arguments are malformed.
pub fn decode_transfer(data: &[u8]) -> Result<(Address, TokenAmount), EncodingError> {
    let call = transferCall::abi_decode(data)?;
    Ok((call.to, TokenAmount::new(call.amount)))
}
