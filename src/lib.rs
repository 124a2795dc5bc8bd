// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Keeps a wallet's pending transaction consistent when the user switches the
//! unit an amount is entered in, between the network's native currency and
//! ERC-20 tokens with their own precision.
//!
//! The entry points are [`UnitSwapCoordinator::handle_unit_change`], which
//! computes the field rewrite for one unit change, [`TransactionDraft`], which
//! owns the fields and applies rewrites atomically, and [`DraftJob`], which
//! serves a draft from a background task.

pub mod config;
mod draft;
mod encoding;
pub mod errors;
mod job;
mod rebase;
mod spans;
pub mod swap;
mod tokens;
pub mod types;
mod validation;

pub use config::*;
pub use draft::*;
pub use encoding::*;
pub use errors::*;
pub use job::*;
pub use rebase::*;
pub use swap::*;
pub use tokens::*;
pub use types::fields::*;
pub use types::meta::*;
pub use types::tokens::*;
pub use types::unit::*;
pub use types::wei::*;
pub use validation::*;
