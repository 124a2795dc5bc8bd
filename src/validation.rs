// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Amount validation against the wallet's balances
//!
//! Before a rebased amount is committed to the transaction draft it must pass an
//! [`AmountValidator`]. The validator is a pure predicate: it never mutates state
//! and never reports *why* an amount is invalid. Surfacing that to the user is the
//! UI's concern.
//!
//! [`BalanceValidator`] is the wallet's implementation. It checks that:
//!
//! 1. the input parsed to an amount at all
//! 2. the account can pay for the transaction in ether: the amount itself when
//!    sending the network unit, plus `gas_limit × gas_price` in every case
//! 3. when sending a token, the token balance covers the amount
//!
//! Balances the wallet does not know yet (offline, not fetched) are not held
//! against the user.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{NetworkConfig, TokenAmount, Unit, UnitSwapConfig, WeiAmount};

/// Predicate gating amounts before they are committed to a transaction draft
///
/// Implement this trait to plug in custom validation. The trait is object-safe,
/// so coordinators accept `&dyn AmountValidator`.
pub trait AmountValidator: Send + Sync {
    /// Whether `value`, denominated in `unit`, may be committed
    ///
    /// `None` means the user's input did not parse to an amount.
    fn validate(&self, value: Option<TokenAmount>, unit: &Unit) -> bool;
}

/// Balances and gas pricing known to the wallet at validation time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// Ether balance of the sending account, if fetched
    pub ether_balance: Option<WeiAmount>,
    /// Token balances of the sending account by unit symbol
    pub token_balances: HashMap<Unit, TokenAmount>,
    /// Gas price the transaction will be sent with
    pub gas_price: WeiAmount,
    /// Whether the wallet is offline (balances cannot be trusted)
    pub offline: bool,
}

impl BalanceSnapshot {
    /// Snapshot with a known ether balance and gas price
    pub fn new(ether_balance: WeiAmount, gas_price: WeiAmount) -> Self {
        Self {
            ether_balance: Some(ether_balance),
            token_balances: HashMap::new(),
            gas_price,
            offline: false,
        }
    }

    /// Add a known token balance
    pub fn with_token_balance(mut self, unit: impl Into<Unit>, balance: TokenAmount) -> Self {
        self.token_balances.insert(unit.into(), balance);
        self
    }
}

/// Validates amounts against a [`BalanceSnapshot`]
///
/// # Examples
///
/// ```
/// use unitswap::{AmountValidator, BalanceSnapshot, BalanceValidator, UnitSwapConfig, Unit, WeiAmount};
///
/// let config = UnitSwapConfig::default();
/// let one_eth = WeiAmount::from(1_000_000_000_000_000_000u64);
/// let validator = BalanceValidator::new(&config, BalanceSnapshot::new(one_eth, WeiAmount::ZERO));
///
/// let half_eth = Some(500_000_000_000_000_000u64.into());
/// assert!(validator.validate(half_eth, &Unit::new("ETH")));
/// assert!(!validator.validate(None, &Unit::new("ETH")));
/// ```
#[derive(Debug, Clone)]
pub struct BalanceValidator {
    network: NetworkConfig,
    native_gas_limit: u64,
    token_gas_limit: u64,
    snapshot: BalanceSnapshot,
}

impl BalanceValidator {
    /// Create a validator for the configured network and gas limits
    pub fn new(config: &UnitSwapConfig, snapshot: BalanceSnapshot) -> Self {
        Self {
            network: config.network.clone(),
            native_gas_limit: config.native_gas_limit,
            token_gas_limit: config.token_gas_limit,
            snapshot,
        }
    }

    /// Current balance snapshot
    pub fn snapshot(&self) -> &BalanceSnapshot {
        &self.snapshot
    }

    /// Replace the balance snapshot (e.g. after a balance refresh)
    pub fn set_snapshot(&mut self, snapshot: BalanceSnapshot) {
        self.snapshot = snapshot;
    }

    fn has_enough_ether(&self, amount: TokenAmount, unit: &Unit, balance: WeiAmount) -> bool {
        let is_network_unit = self.network.is_network_unit(unit);
        let (sent, gas_limit) = if is_network_unit {
            (WeiAmount::from(amount), self.native_gas_limit)
        } else {
            (WeiAmount::ZERO, self.token_gas_limit)
        };

        let required = WeiAmount::gas_cost(gas_limit, self.snapshot.gas_price)
            .and_then(|gas| gas.checked_add(sent));

        match required {
            Some(required) if required <= balance => true,
            Some(required) => {
                debug!(
                    unit = %unit,
                    required = %required,
                    balance = %balance,
                    "Ether balance does not cover amount and gas"
                );
                false
            }
            None => false,
        }
    }

    fn has_enough_tokens(&self, amount: TokenAmount, unit: &Unit) -> bool {
        match self.snapshot.token_balances.get(unit) {
            Some(balance) if amount <= *balance => true,
            Some(balance) => {
                debug!(
                    unit = %unit,
                    amount = %amount,
                    balance = %balance,
                    "Token balance does not cover amount"
                );
                false
            }
            None => true,
        }
    }
}

impl AmountValidator for BalanceValidator {
    fn validate(&self, value: Option<TokenAmount>, unit: &Unit) -> bool {
        let Some(amount) = value else {
            return false;
        };

        if self.snapshot.offline {
            return true;
        }

        let ether_ok = match self.snapshot.ether_balance {
            Some(balance) => self.has_enough_ether(amount, unit, balance),
            None => true,
        };

        ether_ok && (self.network.is_network_unit(unit) || self.has_enough_tokens(amount, unit))
    }
}
