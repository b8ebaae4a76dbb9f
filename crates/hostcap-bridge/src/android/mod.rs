// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android host provider via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. The release string is read once from
// `android.os.Build.VERSION.RELEASE` through the ART runtime and cached.

#![cfg(target_os = "android")]

use jni::objects::JString;

use hostcap_core::error::{BridgeError, Result};

use crate::traits::HostCapabilityProvider;

/// JNI class holding the static build version fields.
const BUILD_VERSION_CLASS: &str = "android/os/Build$VERSION";

/// Convenience: map any `jni::errors::Error` into `BridgeError::Host`.
fn jni_err(context: &str, e: jni::errors::Error) -> BridgeError {
    BridgeError::Host(format!("{context}: {e}"))
}

/// Read `Build.VERSION.RELEASE` from the hosting JVM.
///
/// Calls `ndk_context::android_context()` to retrieve the `JavaVM*` pointer
/// set by `android_main` or `ANativeActivity_onCreate`, then attaches the
/// current thread for the duration of the read.
fn read_release() -> Result<String> {
    let ctx = ndk_context::android_context();
    if ctx.vm().is_null() {
        return Err(BridgeError::Host(
            "Android context is null; native activity not initialised".into(),
        ));
    }
    // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
    // The pointer is guaranteed valid for the lifetime of the process.
    let vm = unsafe { jni::JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| jni_err("failed to obtain JavaVM", e))?;
    let mut env = vm
        .attach_current_thread()
        .map_err(|e| jni_err("failed to attach JNI thread", e))?;

    let value = env
        .get_static_field(BUILD_VERSION_CLASS, "RELEASE", "Ljava/lang/String;")
        .map_err(|e| jni_err("Build.VERSION.RELEASE", e))?
        .l()
        .map_err(|e| jni_err("Build.VERSION.RELEASE->l", e))?;
    if value.is_null() {
        return Err(BridgeError::Host("Build.VERSION.RELEASE is null".into()));
    }

    let release: String = env
        .get_string(&JString::from(value))
        .map_err(|e| jni_err("get_string", e))?
        .into();
    let release = release.trim().to_string();
    if release.is_empty() {
        return Err(BridgeError::Host("Build.VERSION.RELEASE is empty".into()));
    }
    Ok(release)
}

/// Android implementation of the host capability provider.
#[derive(Debug, Clone)]
pub struct AndroidProvider {
    release: String,
}

impl AndroidProvider {
    /// Read the release through JNI.
    ///
    /// This is the only JNI round trip; accessors afterwards are plain reads.
    pub fn new() -> Result<Self> {
        let release = read_release()?;
        tracing::info!(release = %release, "Android: read Build.VERSION.RELEASE");
        Ok(Self { release })
    }
}

impl HostCapabilityProvider for AndroidProvider {
    fn platform_name(&self) -> &str {
        "Android"
    }

    fn os_release(&self) -> &str {
        &self.release
    }
}
