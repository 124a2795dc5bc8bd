// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for loading configuration from disk

use std::io::Write;

use anyhow::Result;
use unitswap::{ConfigError, TokenResolver, Unit, UnitSwapConfig};

#[test]
fn test_load_config_with_custom_network_and_token() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "custom_networks": {{
                "local": {{
                    "id": "local",
                    "chain_id": 1337,
                    "name": "Local",
                    "unit": "LOC",
                    "is_custom": true
                }}
            }},
            "custom_tokens": [
                {{
                    "symbol": "TKN",
                    "address": "0x2222222222222222222222222222222222222222",
                    "decimal": 8
                }}
            ]
        }}"#
    )?;

    let mut config = UnitSwapConfig::from_json_file(file.path())?;
    assert_eq!(config.network.unit, Unit::new("ETH"));
    assert_eq!(config.native_gas_limit, 21_000);

    let token = config
        .token_registry()
        .resolve(&Unit::new("TKN"))
        .expect("custom token should resolve");
    assert_eq!(token.decimal.as_u8(), 8);

    config.select_custom_network("local")?;
    assert!(config.network.is_network_unit(&Unit::new("LOC")));
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = UnitSwapConfig::from_json_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_file_is_parse_error() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{{ \"native_gas_limit\": \"lots\" }}")?;

    let err = UnitSwapConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    Ok(())
}
