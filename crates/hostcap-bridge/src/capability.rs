// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capability table: operation name → host-fact accessor.
//
// Built once at startup and never mutated. Lookups are exact and
// case-sensitive.

use std::collections::BTreeMap;

use crate::traits::HostCapabilityProvider;

/// Every operation the bridge knows how to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// "Android 13", "iOS 17.2", ...
    PlatformVersion,
    /// "Android", "iOS", ...
    PlatformName,
    /// "13", "17.2", ...
    OsRelease,
}

impl Capability {
    pub const ALL: [Capability; 3] = [
        Capability::PlatformVersion,
        Capability::PlatformName,
        Capability::OsRelease,
    ];

    /// Operation name callers send.
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::PlatformVersion => "getPlatformVersion",
            Self::PlatformName => "getPlatformName",
            Self::OsRelease => "getOsRelease",
        }
    }

    pub fn from_method_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.method_name() == name)
    }

    /// Whether the accessor consumes request arguments. None do today.
    pub fn takes_arguments(&self) -> bool {
        false
    }

    /// Run the accessor against a provider. Pure read.
    pub fn read(&self, provider: &dyn HostCapabilityProvider) -> String {
        match self {
            Self::PlatformVersion => provider.platform_version(),
            Self::PlatformName => provider.platform_name().to_string(),
            Self::OsRelease => provider.os_release().to_string(),
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method_name())
    }
}

/// Immutable mapping from operation name to capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityTable {
    entries: BTreeMap<&'static str, Capability>,
}

impl CapabilityTable {
    /// Table with every known capability.
    pub fn standard() -> Self {
        Self::with(Capability::ALL)
    }

    /// Table with only the given capabilities. Duplicates collapse.
    pub fn with(capabilities: impl IntoIterator<Item = Capability>) -> Self {
        let entries = capabilities
            .into_iter()
            .map(|c| (c.method_name(), c))
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, operation: &str) -> Option<Capability> {
        self.entries.get(operation).copied()
    }

    /// Registered operation names in sorted order.
    pub fn operations(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CapabilityTable {
    fn default() -> Self {
        Self::standard()
    }
}
