// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the unit swap coordinator
//!
//! An invalid amount and a native-to-native no-op both end in an empty outcome,
//! so these tests also assert on the resolver and validator call sequences.

mod helpers;

use alloy_primitives::{address, Address};
use helpers::{init_tracing, RecordingResolver, RecordingValidator};
use proptest::prelude::*;
use unitswap::{
    encode_transfer, rebase_user_input, AddressField, DataField, DraftSnapshot, NetworkConfig,
    SideEffect, SwapCommand, SwapContext, SwapError, TokenAmount, TokenDecimals, TokenMetadata,
    Unit, UnitChanged, UnitSwapCoordinator,
};

const TOKEN_RECIPIENT: Address = address!("7777777777777777777777777777777777777777");
const STALE_TO: Address = address!("8888888888888888888888888888888888888888");
const ENTERED_TO: Address = address!("9999999999999999999999999999999999999999");

/// Mainnet with a one-decimal network unit, which keeps expected amounts small
fn one_decimal_network() -> NetworkConfig {
    NetworkConfig {
        decimals: TokenDecimals::new(1),
        ..NetworkConfig::default()
    }
}

fn tkn() -> TokenMetadata {
    TokenMetadata::new("TKN", Address::ZERO, TokenDecimals::new(1))
}

#[test]
fn test_ether_to_ether_emits_nothing() {
    init_tracing();
    let coordinator = UnitSwapCoordinator::new(one_decimal_network());
    let resolver = RecordingResolver::new().with_token(tkn());
    let validator = RecordingValidator::accepting();
    let draft = DraftSnapshot {
        previous_unit: Unit::new("ETH"),
        value: rebase_user_input("1", TokenDecimals::new(1)),
        ..Default::default()
    };

    let outcome = coordinator
        .handle_unit_change(
            &UnitChanged::new("ETH"),
            &SwapContext::new(&draft, &resolver, &validator),
        )
        .unwrap();

    assert!(outcome.is_empty());
    assert!(resolver.calls().is_empty());
    assert!(validator.calls().is_empty());
}

#[test]
fn test_token_to_ether_sends_to_token_recipient() {
    init_tracing();
    let coordinator = UnitSwapCoordinator::new(one_decimal_network());
    let resolver = RecordingResolver::new().with_token(tkn());
    let validator = RecordingValidator::accepting();
    let draft = DraftSnapshot {
        previous_unit: Unit::new("TKN"),
        to: AddressField::from_address(STALE_TO),
        token_value: rebase_user_input("2.5", TokenDecimals::new(1)),
        token_to: AddressField::from_address(TOKEN_RECIPIENT),
        ..Default::default()
    };

    let outcome = coordinator
        .handle_unit_change(
            &UnitChanged::new("ETH"),
            &SwapContext::new(&draft, &resolver, &validator),
        )
        .unwrap();

    assert_eq!(
        outcome.command,
        Some(SwapCommand::SwapTokenToEther {
            to: AddressField::from_address(TOKEN_RECIPIENT),
            value: rebase_user_input("2.5", TokenDecimals::new(1)),
            decimal: TokenDecimals::new(1),
        })
    );
    assert!(outcome.effects.is_empty());
    // The network unit is never resolved
    assert!(resolver.calls().is_empty());
    assert_eq!(
        validator.calls(),
        vec![(Some(TokenAmount::from(25u64)), Unit::new("ETH"))]
    );
}

#[test]
fn test_ether_to_token_disables_scheduling_and_encodes_transfer() {
    init_tracing();
    let coordinator = UnitSwapCoordinator::new(one_decimal_network());
    let resolver = RecordingResolver::new().with_token(tkn());
    let validator = RecordingValidator::accepting();
    let draft = DraftSnapshot {
        previous_unit: Unit::new("ETH"),
        to: AddressField::from_address(ENTERED_TO),
        value: rebase_user_input("4.2", TokenDecimals::new(1)),
        ..Default::default()
    };

    let outcome = coordinator
        .handle_unit_change(
            &UnitChanged::new("TKN"),
            &SwapContext::new(&draft, &resolver, &validator),
        )
        .unwrap();

    assert_eq!(
        outcome.effects,
        vec![SideEffect::SetSchedulingToggle { enabled: false }]
    );
    assert_eq!(
        outcome.command,
        Some(SwapCommand::SwapEtherToToken {
            data: DataField::from(encode_transfer(ENTERED_TO, TokenAmount::from(42u64))),
            to: AddressField::from_address(Address::ZERO),
            token_value: rebase_user_input("4.2", TokenDecimals::new(1)),
            decimal: TokenDecimals::new(1),
        })
    );
    assert_eq!(resolver.calls(), vec![Unit::new("TKN")]);
    assert_eq!(
        validator.calls(),
        vec![(Some(TokenAmount::from(42u64)), Unit::new("TKN"))]
    );
}

#[test]
fn test_token_to_unknown_token_fails() {
    init_tracing();
    let coordinator = UnitSwapCoordinator::new(NetworkConfig::default());
    let resolver = RecordingResolver::new().with_token(TokenMetadata::new(
        "TKN1",
        address!("1111111111111111111111111111111111111111"),
        TokenDecimals::new(6),
    ));
    let validator = RecordingValidator::accepting();
    let draft = DraftSnapshot {
        previous_unit: Unit::new("TKN1"),
        token_value: rebase_user_input("1", TokenDecimals::new(6)),
        token_to: AddressField::from_address(TOKEN_RECIPIENT),
        ..Default::default()
    };

    let err = coordinator
        .handle_unit_change(
            &UnitChanged::new("TKN2"),
            &SwapContext::new(&draft, &resolver, &validator),
        )
        .unwrap_err();

    assert_eq!(err, SwapError::token_not_found("TKN2"));
    assert!(err
        .to_string()
        .starts_with("Could not find token during unit swap"));
    assert_eq!(resolver.calls(), vec![Unit::new("TKN2")]);
    // Resolution fails before any amount is looked at
    assert!(validator.calls().is_empty());
}

fn token_to_token_draft() -> DraftSnapshot {
    DraftSnapshot {
        previous_unit: Unit::new("TKN1"),
        to: AddressField::from_address(address!("1111111111111111111111111111111111111111")),
        token_value: rebase_user_input("1.25", TokenDecimals::new(6)),
        token_to: AddressField::from_address(TOKEN_RECIPIENT),
        ..Default::default()
    }
}

fn tkn2() -> TokenMetadata {
    TokenMetadata::new(
        "TKN2",
        address!("2222222222222222222222222222222222222222"),
        TokenDecimals::new(2),
    )
}

#[test]
fn test_token_to_token_resolves_then_validates() {
    init_tracing();
    let coordinator = UnitSwapCoordinator::new(NetworkConfig::default());
    let resolver = RecordingResolver::new().with_token(tkn2());
    let validator = RecordingValidator::accepting();
    let draft = token_to_token_draft();

    let outcome = coordinator
        .handle_unit_change(
            &UnitChanged::new("TKN2"),
            &SwapContext::new(&draft, &resolver, &validator),
        )
        .unwrap();

    assert_eq!(
        outcome.command,
        Some(SwapCommand::SwapTokenToToken {
            data: DataField::from(encode_transfer(TOKEN_RECIPIENT, TokenAmount::from(125u64))),
            to: AddressField::from_address(tkn2().address),
            token_value: rebase_user_input("1.25", TokenDecimals::new(2)),
            token_to: AddressField::from_address(TOKEN_RECIPIENT),
            decimal: TokenDecimals::new(2),
        })
    );
    // Scheduling is left alone between tokens
    assert!(outcome.effects.is_empty());
    assert_eq!(resolver.calls(), vec![Unit::new("TKN2")]);
    assert_eq!(
        validator.calls(),
        vec![(Some(TokenAmount::from(125u64)), Unit::new("TKN2"))]
    );
}

#[test]
fn test_token_to_token_rejected_amount_emits_nothing() {
    init_tracing();
    let coordinator = UnitSwapCoordinator::new(NetworkConfig::default());
    let resolver = RecordingResolver::new().with_token(tkn2());
    let validator = RecordingValidator::rejecting();
    let draft = token_to_token_draft();

    let outcome = coordinator
        .handle_unit_change(
            &UnitChanged::new("TKN2"),
            &SwapContext::new(&draft, &resolver, &validator),
        )
        .unwrap();

    assert!(outcome.is_empty());
    assert_eq!(resolver.calls(), vec![Unit::new("TKN2")]);
    assert_eq!(
        validator.calls(),
        vec![(Some(TokenAmount::from(125u64)), Unit::new("TKN2"))]
    );
}

#[test]
fn test_invalid_amount_is_validated_but_not_emitted() {
    init_tracing();
    let coordinator = UnitSwapCoordinator::new(one_decimal_network());
    let resolver = RecordingResolver::new().with_token(tkn());
    let validator = RecordingValidator::rejecting();
    let draft = DraftSnapshot {
        previous_unit: Unit::new("ETH"),
        to: AddressField::from_address(ENTERED_TO),
        value: rebase_user_input("4.2", TokenDecimals::new(1)),
        ..Default::default()
    };

    let outcome = coordinator
        .handle_unit_change(
            &UnitChanged::new("TKN"),
            &SwapContext::new(&draft, &resolver, &validator),
        )
        .unwrap();

    // No scheduling change either: the swap stopped before it
    assert!(outcome.is_empty());
    assert_eq!(resolver.calls(), vec![Unit::new("TKN")]);
    assert_eq!(validator.calls().len(), 1);
}

#[test]
fn test_unparseable_amount_reaches_validator_as_none() {
    let coordinator = UnitSwapCoordinator::new(NetworkConfig::default());
    let resolver = RecordingResolver::new();
    let validator = RecordingValidator::accepting();
    let draft = DraftSnapshot {
        previous_unit: Unit::new("TKN"),
        token_value: rebase_user_input("abc", TokenDecimals::new(6)),
        ..Default::default()
    };

    let outcome = coordinator
        .handle_unit_change(
            &UnitChanged::new("ETH"),
            &SwapContext::new(&draft, &resolver, &validator),
        )
        .unwrap();

    assert!(outcome.command.is_none());
    assert_eq!(validator.calls(), vec![(None, Unit::new("ETH"))]);
}

#[test]
fn test_same_token_reselected_rebases_token_value() {
    let coordinator = UnitSwapCoordinator::new(NetworkConfig::default());
    let resolver = RecordingResolver::new().with_token(tkn());
    let validator = RecordingValidator::accepting();
    let draft = DraftSnapshot {
        previous_unit: Unit::new("TKN"),
        to: AddressField::from_address(Address::ZERO),
        value: rebase_user_input("9", TokenDecimals::NATIVE),
        token_value: rebase_user_input("0.3", TokenDecimals::new(1)),
        token_to: AddressField::from_address(TOKEN_RECIPIENT),
    };

    let outcome = coordinator
        .handle_unit_change(
            &UnitChanged::new("TKN"),
            &SwapContext::new(&draft, &resolver, &validator),
        )
        .unwrap();

    let Some(SwapCommand::SwapTokenToToken {
        token_value,
        token_to,
        ..
    }) = outcome.command
    else {
        panic!("expected SwapTokenToToken");
    };
    assert_eq!(token_value.value, Some(TokenAmount::from(3u64)));
    assert_eq!(token_to.value, Some(TOKEN_RECIPIENT));
}

fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

proptest! {
    /// Property: switching back to the network unit sends to the token recipient,
    /// never to the stale literal `to`
    #[test]
    fn prop_token_to_ether_uses_token_recipient(
        recipient in arb_address(),
        stale in arb_address(),
        whole in 0u64..1_000_000,
    ) {
        let coordinator = UnitSwapCoordinator::new(NetworkConfig::default());
        let resolver = RecordingResolver::new();
        let validator = RecordingValidator::accepting();
        let draft = DraftSnapshot {
            previous_unit: Unit::new("TKN"),
            to: AddressField::from_address(stale),
            token_value: rebase_user_input(&whole.to_string(), TokenDecimals::new(6)),
            token_to: AddressField::from_address(recipient),
            ..Default::default()
        };

        let outcome = coordinator
            .handle_unit_change(
                &UnitChanged::new("ETH"),
                &SwapContext::new(&draft, &resolver, &validator),
            )
            .unwrap();

        match outcome.command {
            Some(SwapCommand::SwapTokenToEther { to, .. }) => {
                prop_assert_eq!(to.value, Some(recipient));
            }
            other => prop_assert!(false, "unexpected command {:?}", other),
        }
    }

    /// Property: an unknown target token always fails, whatever the amount
    #[test]
    fn prop_unknown_token_fails_regardless_of_amount(
        raw in "[0-9a-z.-]{0,12}",
        from_native in any::<bool>(),
        accept in any::<bool>(),
    ) {
        let coordinator = UnitSwapCoordinator::new(NetworkConfig::default());
        let resolver = RecordingResolver::new();
        let validator = if accept {
            RecordingValidator::accepting()
        } else {
            RecordingValidator::rejecting()
        };
        let draft = DraftSnapshot {
            previous_unit: Unit::new(if from_native { "ETH" } else { "TKN1" }),
            value: rebase_user_input(&raw, TokenDecimals::NATIVE),
            token_value: rebase_user_input(&raw, TokenDecimals::new(6)),
            ..Default::default()
        };

        let result = coordinator.handle_unit_change(
            &UnitChanged::new("TKN2"),
            &SwapContext::new(&draft, &resolver, &validator),
        );

        prop_assert_eq!(result, Err(SwapError::token_not_found("TKN2")));
        prop_assert!(validator.calls().is_empty());
    }
}
