// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host provider built from facts supplied by the embedding application.

use hostcap_core::error::{BridgeError, Result};

use crate::traits::HostCapabilityProvider;

/// Provider that reports exactly the facts it was given.
///
/// Hosts that already know their platform (or tests that need a
/// deterministic answer) inject it here instead of querying the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedProvider {
    name: String,
    release: String,
}

impl FixedProvider {
    /// Both facts must be non-empty.
    pub fn new(name: impl Into<String>, release: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let release = release.into();
        if name.trim().is_empty() {
            return Err(BridgeError::Host("platform name must not be empty".into()));
        }
        if release.trim().is_empty() {
            return Err(BridgeError::Host("OS release must not be empty".into()));
        }
        Ok(Self { name, release })
    }
}

impl HostCapabilityProvider for FixedProvider {
    fn platform_name(&self) -> &str {
        &self.name
    }

    fn os_release(&self) -> &str {
        &self.release
    }
}
