// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop / CI host provider.
//
// Used when compiling for targets that are neither iOS nor Android. The
// platform name comes from the compile target; the release comes from
// uname(2) on Unix hosts.

use tracing::debug;

use crate::traits::HostCapabilityProvider;

/// Release reported when the host cannot tell us.
pub const UNKNOWN_RELEASE: &str = "unknown";

/// Host provider for desktop and CI builds.
#[derive(Debug, Clone)]
pub struct StubProvider {
    name: String,
    release: String,
}

impl StubProvider {
    /// Read the host facts once.
    pub fn new() -> Self {
        let name = platform_label(std::env::consts::OS);
        let release = read_release().unwrap_or_else(|| UNKNOWN_RELEASE.to_string());
        debug!(platform = %name, release = %release, "desktop host facts read");
        Self { name, release }
    }
}

impl Default for StubProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HostCapabilityProvider for StubProvider {
    fn platform_name(&self) -> &str {
        &self.name
    }

    fn os_release(&self) -> &str {
        &self.release
    }
}

/// Map a `std::env::consts::OS` value to the name users expect to see.
fn platform_label(os: &str) -> String {
    match os {
        "linux" => "Linux".into(),
        "macos" => "macOS".into(),
        "windows" => "Windows".into(),
        "freebsd" => "FreeBSD".into(),
        "openbsd" => "OpenBSD".into(),
        "netbsd" => "NetBSD".into(),
        "" => "Unknown".into(),
        other => other.to_string(),
    }
}

#[cfg(unix)]
fn read_release() -> Option<String> {
    use std::ffi::CStr;

    // SAFETY: `utsname` is plain C arrays; all-zero is a valid value.
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    // SAFETY: `uts` is a valid, writable utsname for the duration of the call.
    if unsafe { libc::uname(&mut uts) } != 0 {
        return None;
    }
    // SAFETY: uname NUL-terminates every field on success.
    let release = unsafe { CStr::from_ptr(uts.release.as_ptr()) }
        .to_string_lossy()
        .trim()
        .to_string();
    (!release.is_empty()).then_some(release)
}

#[cfg(not(unix))]
fn read_release() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facts_are_never_empty() {
        let provider = StubProvider::new();
        assert!(!provider.platform_name().is_empty());
        assert!(!provider.os_release().is_empty());
        assert!(provider.platform_version().starts_with(provider.platform_name()));
    }

    #[test]
    fn facts_are_stable() {
        let provider = StubProvider::new();
        assert_eq!(provider.platform_version(), provider.platform_version());
    }

    #[test]
    fn known_targets_get_display_names() {
        assert_eq!(platform_label("linux"), "Linux");
        assert_eq!(platform_label("macos"), "macOS");
        assert_eq!(platform_label("haiku"), "haiku");
        assert_eq!(platform_label(""), "Unknown");
    }
}
