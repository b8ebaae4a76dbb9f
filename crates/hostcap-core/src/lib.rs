// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Hostcap: core message types, error definitions, configuration, and the
// JSON method codec shared by the bridge and its hosts.

pub mod codec;
pub mod config;
pub mod error;
pub mod types;

pub use config::{BridgeConfig, DEFAULT_CHANNEL};
pub use error::BridgeError;
pub use types::*;
