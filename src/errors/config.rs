// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration.
//!
//! This module provides error types for the `config` module: managing custom
//! networks and loading configuration files.

/// Errors that can occur while building or loading configuration.
///
/// # Examples
///
/// ```rust,ignore
/// use unitswap::{ConfigError, UnitSwapConfig};
///
/// match UnitSwapConfig::from_json_file("wallet.json") {
///     Ok(config) => println!("Network unit: {}", config.network.unit),
///     Err(ConfigError::Io { path, .. }) => eprintln!("Cannot read {path}"),
///     Err(e) => eprintln!("Bad configuration: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("Failed to read config file {path}")]
    Io {
        /// Path of the file
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON or has the wrong shape.
    #[error("Failed to parse config {origin}")]
    Parse {
        /// Where the configuration came from (file path or "string")
        origin: String,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A built-in network was passed where a custom network is required.
    #[error("Network {id} is not a custom network")]
    NotCustomNetwork {
        /// Id of the offending network
        id: String,
    },

    /// No custom network with this id exists.
    #[error("Network not found: {id}")]
    NetworkNotFound {
        /// The id that was looked up
        id: String,
    },
}

impl ConfigError {
    /// Create an `Io` error for a path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a `Parse` error for a configuration origin.
    pub fn parse(origin: impl Into<String>, source: serde_json::Error) -> Self {
        ConfigError::Parse {
            origin: origin.into(),
            source,
        }
    }
}
