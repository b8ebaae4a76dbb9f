// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for host facts and channel handlers.

/// Source of the host facts the dispatcher can report.
///
/// Implementations read the OS once at construction and cache the result,
/// so every accessor is a pure read: no shared mutation, no blocking, and
/// the same answer for the lifetime of the process.
pub trait HostCapabilityProvider: Send + Sync {
    /// Human-readable platform name (e.g. "Android", "iOS", "Linux").
    fn platform_name(&self) -> &str;

    /// Operating system release as the host reports it (e.g. "13", "17.2").
    fn os_release(&self) -> &str;

    /// Platform name and release joined by a space, e.g. "Android 13".
    fn platform_version(&self) -> String {
        format!("{} {}", self.platform_name(), self.os_release())
    }
}

/// Receiver of encoded messages sent to a named channel.
pub trait MethodHandler: Send + Sync {
    /// Handle one encoded request and return the encoded reply.
    ///
    /// Never fails: every problem with the message is reported inside the
    /// reply envelope.
    fn handle_message(&self, message: &[u8]) -> Vec<u8>;
}
