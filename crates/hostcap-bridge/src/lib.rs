// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Hostcap capability-query bridge.
//!
//! The dispatcher answers named requests from a static capability table
//! backed by a host provider. Providers are chosen per target OS: JNI on
//! Android, objc2 on iOS, and a uname-backed stub everywhere else.

pub mod capability;
pub mod dispatcher;
pub mod fixed;
pub mod messenger;
pub mod traits;

#[cfg(target_os = "ios")]
pub mod ios;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod stub;

use std::sync::Arc;

use hostcap_core::error::Result;

pub use capability::{Capability, CapabilityTable};
pub use dispatcher::Dispatcher;
pub use fixed::FixedProvider;
pub use messenger::{Messenger, register_with};
pub use traits::{HostCapabilityProvider, MethodHandler};

/// Build the host provider for the target operating system.
///
/// Host facts are read here, once; the returned provider only serves
/// cached values.
pub fn host_provider() -> Result<Arc<dyn HostCapabilityProvider>> {
    #[cfg(target_os = "ios")]
    {
        Ok(Arc::new(ios::IosProvider::new()))
    }
    #[cfg(target_os = "android")]
    {
        Ok(Arc::new(android::AndroidProvider::new()?))
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        // DESKTOP/CI: compile-target name plus uname release.
        Ok(Arc::new(stub::StubProvider::new()))
    }
}
