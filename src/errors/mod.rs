// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the unitswap library.
//!
//! This module provides strongly-typed errors for all public APIs in unitswap.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`SwapError`,
//!   `ConfigError`, etc.)
//! - **Unified error type** (`UnitSwapError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! - [`SwapError`] - Fatal conditions during a unit swap (unresolvable token)
//! - [`EncodingError`] - Malformed ERC-20 transfer call data
//! - [`ConfigError`] - Network and token configuration, config file loading
//! - [`DraftJobError`] - The draft job actor went away
//!
//! An *invalid amount* is not an error: the coordinator completes with an empty
//! outcome and leaves the draft untouched.
//!
//! # Examples
//!
//! ```rust
//! use unitswap::{SwapError, Unit};
//!
//! let error = SwapError::token_not_found(Unit::new("TKN2"));
//! assert_eq!(error.to_string(), "Could not find token during unit swap: TKN2");
//! ```

mod config;
mod encoding;
mod job;
mod swap;

pub use config::ConfigError;
pub use encoding::EncodingError;
pub use job::DraftJobError;
pub use swap::SwapError;

/// Unified error type for all unitswap operations.
///
/// All module-specific error types automatically convert to `UnitSwapError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
///
/// # Examples
///
/// ```rust,ignore
/// use unitswap::{UnitSwapConfig, UnitSwapError, Unit};
///
/// async fn switch_to_usdc(path: &str) -> Result<(), UnitSwapError> {
///     let config = UnitSwapConfig::from_json_file(path)?;
///     let handle = spawn_draft_job(&config);
///     handle.change_unit(Unit::new("USDC")).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum UnitSwapError {
    /// Error from the unit swap coordinator.
    #[error("Unit swap error: {0}")]
    Swap(#[from] SwapError),

    /// Error decoding transfer call data.
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Error from configuration handling.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error talking to the draft job.
    #[error("Draft job error: {0}")]
    Job(#[from] DraftJobError),
}
