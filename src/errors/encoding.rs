// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transfer call data.

/// Errors that can occur when decoding ERC-20 transfer call data.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    /// The data is not a well-formed `transfer(address,uint256)` call.
    ///
    /// This covers a foreign selector as well as truncated or malformed
    /// arguments.
    #[error("Failed to decode transfer call data: {0}")]
    Decode(#[from] alloy_sol_types::Error),
}
