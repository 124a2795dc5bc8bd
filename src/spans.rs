// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for unit swap operations.
//!
//! This module provides span creation functions following an orthogonal design pattern
//! where telemetry concerns are separated from business logic. Instead of using
//! `#[instrument]` attributes directly on functions, each instrumented operation has
//! a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::{Level, Span};

use crate::{TokenDecimals, Unit};

/// Create span for reacting to a change of the active unit.
///
/// This is the main entry point of the swap coordinator.
///
/// Parent: None, or draft_job_command when driven by a draft job
/// Children: rebase_user_input spans
#[inline]
pub(crate) fn handle_unit_change(previous_unit: &Unit, current_unit: &Unit) -> Span {
    tracing::span!(
        Level::INFO,
        "unitswap.handle_unit_change",
        previous_unit = %previous_unit,
        current_unit = %current_unit,
    )
}

/// Create span for rebasing a typed amount at a unit's precision.
///
/// Parent: handle_unit_change span (when called during a swap)
/// Children: None
#[inline]
pub(crate) fn rebase_user_input(decimals: TokenDecimals) -> Span {
    tracing::debug_span!("unitswap.rebase_user_input", decimals = decimals.as_u8())
}

/// Create span for one command processed by a draft job.
///
/// Parent: None (root span for this operation)
/// Children: handle_unit_change span for `change_unit` commands
#[inline]
pub(crate) fn draft_job_command(command: &'static str) -> Span {
    tracing::debug_span!("unitswap.draft_job_command", command = command)
}
