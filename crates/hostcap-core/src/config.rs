// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Channel name callers use to address the bridge unless configured otherwise.
pub const DEFAULT_CHANNEL: &str = "tflite_native";

/// Bridge settings, loadable from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Name the dispatcher is registered under. Must be unique per messenger.
    pub channel_name: String,
    /// Answer non-empty arguments to a zero-argument operation with a
    /// `MalformedRequest` failure instead of ignoring them.
    pub reject_unexpected_arguments: bool,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL.into(),
            reject_unexpected_arguments: false,
            log_filter: "info".into(),
        }
    }
}

impl BridgeConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.channel_name.trim().is_empty() {
            return Err(BridgeError::Config("channel_name must not be empty".into()));
        }
        Ok(())
    }
}
