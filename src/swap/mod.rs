// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Keeping a transaction draft consistent across unit changes
//!
//! When the user switches the unit an amount is entered in, the draft's monetary
//! fields have to be rewritten: the amount rebased to the new precision, the
//! recipient moved between `to` and `token_to`, and the ERC-20 transfer call
//! encoded or dropped. [`UnitSwapCoordinator`] computes that rewrite as a
//! [`UnitChangeOutcome`]; the caller applies it in one step, see
//! [`TransactionDraft::apply`](crate::TransactionDraft::apply).
//!
//! The coordinator is a plain function of the event and a [`SwapContext`]: it
//! reads a [`DraftSnapshot`] and the injected resolver and validator, and owns
//! no state beyond the active network.

mod coordinator;

pub use coordinator::UnitSwapCoordinator;

use serde::{Deserialize, Serialize};

use crate::{
    AddressField, AmountField, AmountValidator, DataField, TokenDecimals, TokenResolver, Unit,
};

/// The user selected a new unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitChanged {
    /// The unit just selected
    pub unit: Unit,
}

impl UnitChanged {
    /// Create a unit-changed event
    pub fn new(unit: impl Into<Unit>) -> Self {
        Self { unit: unit.into() }
    }
}

/// Kind of transition between two units
///
/// Classified once from whether each side is the network unit; the coordinator
/// matches on it to pick the rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSwap {
    /// Network unit to network unit: nothing to do
    NativeToNative,
    /// A token to the network unit
    TokenToNative,
    /// The network unit to a token
    NativeToToken,
    /// One token to another (or the same) token
    TokenToToken,
}

impl UnitSwap {
    /// Classify a transition
    ///
    /// # Examples
    ///
    /// ```
    /// use unitswap::UnitSwap;
    ///
    /// assert_eq!(UnitSwap::classify(true, false), UnitSwap::NativeToToken);
    /// assert_eq!(UnitSwap::classify(false, true), UnitSwap::TokenToNative);
    /// ```
    pub fn classify(previous_is_network: bool, current_is_network: bool) -> Self {
        match (previous_is_network, current_is_network) {
            (true, true) => UnitSwap::NativeToNative,
            (false, true) => UnitSwap::TokenToNative,
            (true, false) => UnitSwap::NativeToToken,
            (false, false) => UnitSwap::TokenToToken,
        }
    }

    /// Name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSwap::NativeToNative => "native_to_native",
            UnitSwap::TokenToNative => "token_to_native",
            UnitSwap::NativeToToken => "native_to_token",
            UnitSwap::TokenToToken => "token_to_token",
        }
    }
}

impl std::fmt::Display for UnitSwap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite of the draft's monetary fields
///
/// Each variant lists every field it sets. Applying one replaces those fields
/// together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapCommand {
    /// Back to a plain network-unit send
    SwapTokenToEther {
        /// Recipient, taken from the token recipient
        to: AddressField,
        /// Amount rebased at the network unit's precision
        value: AmountField,
        /// Precision of the network unit
        decimal: TokenDecimals,
    },
    /// From a network-unit send to a token transfer
    SwapEtherToToken {
        /// Encoded `transfer` call to the entered recipient
        data: DataField,
        /// Token contract address
        to: AddressField,
        /// Amount rebased at the token's precision
        token_value: AmountField,
        /// Precision of the token
        decimal: TokenDecimals,
    },
    /// From one token transfer to another
    SwapTokenToToken {
        /// Encoded `transfer` call to the carried-over recipient
        data: DataField,
        /// Contract address of the new token
        to: AddressField,
        /// Amount rebased at the new token's precision
        token_value: AmountField,
        /// Carried-over token recipient
        token_to: AddressField,
        /// Precision of the new token
        decimal: TokenDecimals,
    },
}

impl SwapCommand {
    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            SwapCommand::SwapTokenToEther { .. } => "swap_token_to_ether",
            SwapCommand::SwapEtherToToken { .. } => "swap_ether_to_token",
            SwapCommand::SwapTokenToToken { .. } => "swap_token_to_token",
        }
    }

    /// Precision the command leaves the draft in
    pub fn decimal(&self) -> TokenDecimals {
        match self {
            SwapCommand::SwapTokenToEther { decimal, .. }
            | SwapCommand::SwapEtherToToken { decimal, .. }
            | SwapCommand::SwapTokenToToken { decimal, .. } => *decimal,
        }
    }
}

/// Change outside the draft's monetary fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideEffect {
    /// Allow or forbid scheduling the send for later
    SetSchedulingToggle {
        /// New toggle state
        enabled: bool,
    },
}

/// Everything a unit change produced
///
/// Effects are listed in the order they were raised and come before the command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitChangeOutcome {
    /// The field rewrite, `None` for a no-op or an invalid amount
    pub command: Option<SwapCommand>,
    /// Side effects to apply alongside the command
    pub effects: Vec<SideEffect>,
}

impl UnitChangeOutcome {
    /// Outcome that changes nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether applying the outcome changes nothing
    pub fn is_empty(&self) -> bool {
        self.command.is_none() && self.effects.is_empty()
    }
}

/// The draft fields a unit change reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSnapshot {
    /// Unit the amounts are currently denominated in
    pub previous_unit: Unit,
    /// Literal recipient (or token contract)
    pub to: AddressField,
    /// Network-unit amount
    pub value: AmountField,
    /// Token amount
    pub token_value: AmountField,
    /// Token recipient
    pub token_to: AddressField,
}

/// Read access the coordinator needs for one unit change
#[derive(Clone, Copy)]
pub struct SwapContext<'a> {
    /// Current draft fields
    pub draft: &'a DraftSnapshot,
    /// Token lookup for the active network
    pub tokens: &'a dyn TokenResolver,
    /// Amount gate
    pub validator: &'a dyn AmountValidator,
}

impl<'a> SwapContext<'a> {
    /// Bundle the reads for one unit change
    pub fn new(
        draft: &'a DraftSnapshot,
        tokens: &'a dyn TokenResolver,
        validator: &'a dyn AmountValidator,
    ) -> Self {
        Self {
            draft,
            tokens,
            validator,
        }
    }
}

impl std::fmt::Debug for SwapContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapContext")
            .field("draft", self.draft)
            .finish_non_exhaustive()
    }
}
