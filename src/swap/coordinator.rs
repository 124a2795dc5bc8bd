// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The unit change state machine

use alloy_primitives::Address;
use tracing::{debug, info, warn};

use super::{
    DraftSnapshot, SideEffect, SwapCommand, SwapContext, UnitChangeOutcome, UnitChanged, UnitSwap,
};
use crate::{
    encode_transfer, spans, AddressField, AmountField, DataField, NetworkConfig, SwapError,
    TokenMetadata, Unit,
};

/// Computes the draft rewrite for a change of the active unit
///
/// | previous | current | result |
/// |---|---|---|
/// | network | network | nothing |
/// | token | network | [`SwapCommand::SwapTokenToEther`] |
/// | network | token | scheduling disabled, [`SwapCommand::SwapEtherToToken`] |
/// | token | token | [`SwapCommand::SwapTokenToToken`] |
///
/// The amount rebased is always the one entered in the previous unit: `value`
/// after the network unit, `token_value` after a token. If the rebased amount
/// fails validation the outcome has no command. If the newly selected token
/// cannot be resolved the call fails with [`SwapError::TokenNotFound`] and
/// nothing is emitted.
///
/// # Examples
///
/// ```
/// use unitswap::{
///     BalanceSnapshot, BalanceValidator, DraftSnapshot, SwapContext, UnitChanged,
///     UnitSwapConfig, UnitSwapCoordinator, Unit,
/// };
///
/// let config = UnitSwapConfig::default();
/// let coordinator = UnitSwapCoordinator::new(config.network.clone());
/// let tokens = config.token_registry();
/// let validator = BalanceValidator::new(&config, BalanceSnapshot::default());
///
/// let draft = DraftSnapshot {
///     previous_unit: Unit::new("ETH"),
///     ..Default::default()
/// };
/// let ctx = SwapContext::new(&draft, &tokens, &validator);
///
/// let outcome = coordinator
///     .handle_unit_change(&UnitChanged::new("ETH"), &ctx)
///     .unwrap();
/// assert!(outcome.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct UnitSwapCoordinator {
    network: NetworkConfig,
}

impl UnitSwapCoordinator {
    /// Create a coordinator for the active network
    pub fn new(network: NetworkConfig) -> Self {
        Self { network }
    }

    /// The network whose unit counts as native
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// React to the user selecting `event.unit`
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::TokenNotFound`] when the selected unit is a token the
    /// resolver does not know.
    pub fn handle_unit_change(
        &self,
        event: &UnitChanged,
        ctx: &SwapContext<'_>,
    ) -> Result<UnitChangeOutcome, SwapError> {
        let previous_unit = &ctx.draft.previous_unit;
        let current_unit = &event.unit;

        let span = spans::handle_unit_change(previous_unit, current_unit);
        let _guard = span.enter();

        let swap = UnitSwap::classify(
            self.network.is_network_unit(previous_unit),
            self.network.is_network_unit(current_unit),
        );
        debug!(swap = %swap, "Classified unit change");

        let outcome = match swap {
            UnitSwap::NativeToNative => UnitChangeOutcome::none(),
            UnitSwap::TokenToNative => self.token_to_native(current_unit, ctx),
            UnitSwap::NativeToToken => self.native_to_token(current_unit, ctx)?,
            UnitSwap::TokenToToken => self.token_to_token(current_unit, ctx)?,
        };

        match &outcome.command {
            Some(command) => info!(
                swap = %swap,
                command = command.name(),
                decimals = command.decimal().as_u8(),
                "Unit swap produced command"
            ),
            None => debug!(swap = %swap, "Unit swap produced no command"),
        }

        Ok(outcome)
    }

    fn token_to_native(&self, current_unit: &Unit, ctx: &SwapContext<'_>) -> UnitChangeOutcome {
        let DraftSnapshot {
            token_to,
            token_value,
            ..
        } = ctx.draft;

        let value = token_value.rebased(self.network.decimals);
        if !ctx.validator.validate(value.value, current_unit) {
            debug!(raw = %value.raw, "Amount invalid for network unit");
            return UnitChangeOutcome::none();
        }

        UnitChangeOutcome {
            command: Some(SwapCommand::SwapTokenToEther {
                to: token_to.clone(),
                value,
                decimal: self.network.decimals,
            }),
            effects: Vec::new(),
        }
    }

    fn native_to_token(
        &self,
        current_unit: &Unit,
        ctx: &SwapContext<'_>,
    ) -> Result<UnitChangeOutcome, SwapError> {
        let token = resolve_token(current_unit, ctx)?;

        let token_value = ctx.draft.value.rebased(token.decimal);
        if !ctx.validator.validate(token_value.value, current_unit) {
            debug!(raw = %token_value.raw, token = %token.symbol, "Amount invalid for token");
            return Ok(UnitChangeOutcome::none());
        }

        let to = &ctx.draft.to;
        let effects = vec![SideEffect::SetSchedulingToggle { enabled: false }];
        let data = transfer_data(to, &token_value);

        Ok(UnitChangeOutcome {
            command: Some(SwapCommand::SwapEtherToToken {
                data,
                to: AddressField::from_address(token.address),
                token_value,
                decimal: token.decimal,
            }),
            effects,
        })
    }

    fn token_to_token(
        &self,
        current_unit: &Unit,
        ctx: &SwapContext<'_>,
    ) -> Result<UnitChangeOutcome, SwapError> {
        let token = resolve_token(current_unit, ctx)?;

        let token_value = ctx.draft.token_value.rebased(token.decimal);
        if !ctx.validator.validate(token_value.value, current_unit) {
            debug!(raw = %token_value.raw, token = %token.symbol, "Amount invalid for token");
            return Ok(UnitChangeOutcome::none());
        }

        let token_to = ctx.draft.token_to.clone();
        let data = transfer_data(&token_to, &token_value);

        Ok(UnitChangeOutcome {
            command: Some(SwapCommand::SwapTokenToToken {
                data,
                to: AddressField::from_address(token.address),
                token_value,
                token_to,
                decimal: token.decimal,
            }),
            effects: Vec::new(),
        })
    }
}

fn resolve_token(unit: &Unit, ctx: &SwapContext<'_>) -> Result<TokenMetadata, SwapError> {
    ctx.tokens.resolve(unit).ok_or_else(|| {
        warn!(unit = %unit, "Token not found during unit swap");
        SwapError::token_not_found(unit.clone())
    })
}

/// Encode the transfer of `amount` to `recipient`
///
/// A recipient that has not been entered yet encodes as the zero address; the
/// draft is not sendable until it is filled in, and the next unit change
/// re-encodes from the fields.
fn transfer_data(recipient: &AddressField, amount: &AmountField) -> DataField {
    let destination = recipient.value.unwrap_or(Address::ZERO);
    DataField::from(encode_transfer(destination, amount.amount_or_zero()))
}
