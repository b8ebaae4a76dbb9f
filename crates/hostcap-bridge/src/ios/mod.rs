// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// iOS host provider via objc2.
//
// Requires compilation with the iOS SDK (Xcode). The release is read from
// `NSProcessInfo.operatingSystemVersion`, which is thread-safe and does not
// need the main thread.

#![cfg(target_os = "ios")]

use objc2_foundation::{NSOperatingSystemVersion, NSProcessInfo};

use crate::traits::HostCapabilityProvider;

/// Format a version as `major.minor`, appending `.patch` when non-zero.
fn format_version(v: &NSOperatingSystemVersion) -> String {
    if v.patchVersion > 0 {
        format!("{}.{}.{}", v.majorVersion, v.minorVersion, v.patchVersion)
    } else {
        format!("{}.{}", v.majorVersion, v.minorVersion)
    }
}

/// Concrete iOS host capability provider.
#[derive(Debug, Clone)]
pub struct IosProvider {
    release: String,
}

impl IosProvider {
    /// Read the OS version once from the process info singleton.
    pub fn new() -> Self {
        let version = NSProcessInfo::processInfo().operatingSystemVersion();
        let release = format_version(&version);
        tracing::info!(release = %release, "iOS: read operatingSystemVersion");
        Self { release }
    }
}

impl Default for IosProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HostCapabilityProvider for IosProvider {
    fn platform_name(&self) -> &str {
        "iOS"
    }

    fn os_release(&self) -> &str {
        &self.release
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that the provider reports the correct platform name.
    #[test]
    fn platform_name() {
        let provider = IosProvider::new();
        assert_eq!(provider.platform_name(), "iOS");
        assert!(!provider.os_release().is_empty());
    }

    #[test]
    fn patch_is_omitted_when_zero() {
        let v = NSOperatingSystemVersion {
            majorVersion: 17,
            minorVersion: 2,
            patchVersion: 0,
        };
        assert_eq!(format_version(&v), "17.2");
        let v = NSOperatingSystemVersion {
            majorVersion: 17,
            minorVersion: 2,
            patchVersion: 1,
        };
        assert_eq!(format_version(&v), "17.2.1");
    }
}
