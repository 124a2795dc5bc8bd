// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The transaction draft a unit swap edits
//!
//! [`TransactionDraft`] owns the [`TransactionMeta`] being composed together with
//! the active unit and the scheduling toggle. It is the single writer of those
//! fields: user edits go through its setters, unit changes through
//! [`TransactionDraft::change_unit`], and each coordinator outcome is applied in
//! one call so no reader ever observes a half-swapped draft.

use alloy_primitives::Address;
use tracing::debug;

use crate::{
    encode_transfer, rebase_user_input, AddressField, AmountField, AmountValidator, DataField,
    DraftSnapshot, NetworkConfig, SideEffect, SwapCommand, SwapContext, SwapError, TokenResolver,
    TransactionMeta, Unit, UnitChangeOutcome, UnitChanged, UnitSwapCoordinator,
};

/// A transaction being composed
///
/// # Examples
///
/// ```
/// use unitswap::{
///     BalanceSnapshot, BalanceValidator, TransactionDraft, Unit, UnitSwapConfig,
///     UnitSwapCoordinator,
/// };
///
/// let config = UnitSwapConfig::default();
/// let coordinator = UnitSwapCoordinator::new(config.network.clone());
/// let tokens = config.token_registry();
/// let validator = BalanceValidator::new(&config, BalanceSnapshot::default());
///
/// let mut draft = TransactionDraft::new(&config.network);
/// draft.set_recipient("0x1111111111111111111111111111111111111111");
/// draft.set_amount("12.5");
///
/// draft
///     .change_unit(&coordinator, Unit::new("USDC"), &tokens, &validator)
///     .unwrap();
///
/// assert_eq!(draft.unit().as_str(), "USDC");
/// assert!(draft.meta().is_consistent_token_transfer());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    meta: TransactionMeta,
    network_unit: Unit,
    unit: Unit,
    previous_unit: Unit,
    scheduling_enabled: bool,
}

impl TransactionDraft {
    /// Start an empty draft denominated in the network unit
    pub fn new(network: &NetworkConfig) -> Self {
        Self {
            meta: TransactionMeta::new(network.decimals),
            network_unit: network.unit.clone(),
            unit: network.unit.clone(),
            previous_unit: network.unit.clone(),
            scheduling_enabled: false,
        }
    }

    /// The draft's monetary fields
    pub fn meta(&self) -> &TransactionMeta {
        &self.meta
    }

    /// Unit the amount is currently entered in
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Unit that was active before the last successful change
    pub fn previous_unit(&self) -> &Unit {
        &self.previous_unit
    }

    /// Whether the send may be scheduled for later
    pub fn scheduling_enabled(&self) -> bool {
        self.scheduling_enabled
    }

    /// Allow or forbid scheduling the send for later
    pub fn set_scheduling_enabled(&mut self, enabled: bool) {
        self.scheduling_enabled = enabled;
    }

    fn is_token_send(&self) -> bool {
        self.unit != self.network_unit
    }

    /// Set the recipient the user typed
    ///
    /// While a token is active the recipient is the token recipient and the
    /// transfer call is re-encoded; `to` stays on the token contract.
    pub fn set_recipient(&mut self, raw: impl Into<String>) {
        let field = AddressField::parse(raw);
        if self.is_token_send() {
            self.meta.token_to = field;
            self.reencode_transfer();
        } else {
            self.meta.to = field;
        }
    }

    /// Set the amount the user typed, rebased at the active unit's precision
    pub fn set_amount(&mut self, raw: &str) {
        let field = rebase_user_input(raw, self.meta.decimal);
        if self.is_token_send() {
            self.meta.token_value = field;
            self.reencode_transfer();
        } else {
            self.meta.value = field;
        }
    }

    fn reencode_transfer(&mut self) {
        let destination = self.meta.token_to.value.unwrap_or(Address::ZERO);
        let amount = self.meta.token_value.amount_or_zero();
        self.meta.data = DataField::from(encode_transfer(destination, amount));
    }

    /// The fields a unit change reads, as of now
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            previous_unit: self.unit.clone(),
            to: self.meta.to.clone(),
            value: self.meta.value.clone(),
            token_value: self.meta.token_value.clone(),
            token_to: self.meta.token_to.clone(),
        }
    }

    /// Switch the active unit and resynchronize the fields
    ///
    /// Returns the command that was applied, `None` when nothing needed to
    /// change or the amount did not validate. The active unit only moves when a
    /// command was applied, so the fields always stay in the active unit's
    /// scale. On error the draft is left as it was.
    pub fn change_unit(
        &mut self,
        coordinator: &UnitSwapCoordinator,
        unit: Unit,
        tokens: &dyn TokenResolver,
        validator: &dyn AmountValidator,
    ) -> Result<Option<SwapCommand>, SwapError> {
        let snapshot = self.snapshot();
        let ctx = SwapContext::new(&snapshot, tokens, validator);
        let event = UnitChanged { unit };

        let outcome = coordinator.handle_unit_change(&event, &ctx)?;
        let Some(command) = outcome.command.clone() else {
            debug!(unit = %event.unit, active = %self.unit, "Keeping active unit");
            self.apply(outcome);
            return Ok(None);
        };

        self.previous_unit = std::mem::replace(&mut self.unit, event.unit);
        self.apply(outcome);

        Ok(Some(command))
    }

    /// Apply a coordinator outcome
    ///
    /// Side effects are applied first, then the command replaces the fields it
    /// names. A native-to-token swap moves the entered recipient into
    /// `token_to`, which is where the encoded transfer sends the tokens.
    pub fn apply(&mut self, outcome: UnitChangeOutcome) {
        for effect in outcome.effects {
            match effect {
                SideEffect::SetSchedulingToggle { enabled } => {
                    debug!(enabled, "Setting scheduling toggle");
                    self.scheduling_enabled = enabled;
                }
            }
        }

        let Some(command) = outcome.command else {
            return;
        };

        match command {
            SwapCommand::SwapTokenToEther { to, value, decimal } => {
                self.meta.to = to;
                self.meta.value = value;
                self.meta.decimal = decimal;
                self.meta.data = DataField::default();
                self.meta.token_value = AmountField::default();
                self.meta.token_to = AddressField::default();
            }
            SwapCommand::SwapEtherToToken {
                data,
                to,
                token_value,
                decimal,
            } => {
                let recipient = std::mem::replace(&mut self.meta.to, to);
                self.meta.token_to = recipient;
                self.meta.data = data;
                self.meta.token_value = token_value;
                self.meta.value = AmountField::zero();
                self.meta.decimal = decimal;
            }
            SwapCommand::SwapTokenToToken {
                data,
                to,
                token_value,
                token_to,
                decimal,
            } => {
                self.meta.data = data;
                self.meta.to = to;
                self.meta.token_value = token_value;
                self.meta.token_to = token_to;
                self.meta.value = AmountField::zero();
                self.meta.decimal = decimal;
            }
        }
    }
}
