// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Named channel registry.
//
// Handlers are registered during startup (`&mut self`); afterwards the
// messenger is only read, so sends need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use hostcap_core::config::BridgeConfig;
use hostcap_core::error::{BridgeError, Result};

use crate::dispatcher::Dispatcher;
use crate::traits::MethodHandler;

/// Routes encoded messages to the handler registered under a channel name.
#[derive(Default)]
pub struct Messenger {
    handlers: HashMap<String, Arc<dyn MethodHandler>>,
}

impl Messenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a handler to a channel name. Names are unique per messenger.
    pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn MethodHandler>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BridgeError::Config("channel name must not be empty".into()));
        }
        if self.handlers.contains_key(&name) {
            return Err(BridgeError::DuplicateChannel(name));
        }
        info!(channel = %name, "channel registered");
        self.handlers.insert(name, handler);
        Ok(())
    }

    /// Deliver a message and return the handler's encoded reply.
    pub fn send(&self, channel: &str, message: &[u8]) -> Result<Vec<u8>> {
        let handler = self
            .handlers
            .get(channel)
            .ok_or_else(|| BridgeError::UnknownChannel(channel.to_string()))?;
        debug!(channel, bytes = message.len(), "delivering message");
        Ok(handler.handle_message(message))
    }

    /// Registered channel names, sorted.
    pub fn channels(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for Messenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messenger")
            .field("channels", &self.channels())
            .finish()
    }
}

/// Register a dispatcher on the channel named by `config`.
///
/// Returns the shared dispatcher so the host can also call it directly.
pub fn register_with(
    messenger: &mut Messenger,
    dispatcher: Dispatcher,
    config: &BridgeConfig,
) -> Result<Arc<Dispatcher>> {
    config.validate()?;
    let dispatcher = Arc::new(dispatcher.configured(config));
    let handler: Arc<dyn MethodHandler> = dispatcher.clone();
    messenger.register(config.channel_name.clone(), handler)?;
    Ok(dispatcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::FixedProvider;
    use hostcap_core::codec;
    use hostcap_core::types::{ErrorKind, Response};

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(FixedProvider::new("Android", "13").unwrap()))
    }

    #[test]
    fn register_and_send() {
        let mut messenger = Messenger::new();
        register_with(&mut messenger, dispatcher(), &BridgeConfig::default()).unwrap();
        assert_eq!(messenger.channels(), vec!["tflite_native"]);

        let reply = messenger
            .send("tflite_native", br#"{"method": "getPlatformVersion"}"#)
            .unwrap();
        assert_eq!(codec::decode_response(&reply).unwrap(), Response::success("Android 13"));
    }

    #[test]
    fn returned_dispatcher_is_the_registered_one() {
        let mut messenger = Messenger::new();
        let config = BridgeConfig {
            reject_unexpected_arguments: true,
            ..Default::default()
        };
        let shared = register_with(&mut messenger, dispatcher(), &config).unwrap();
        assert_eq!(Arc::strong_count(&shared), 2);

        let direct = shared.handle_bytes(br#"{"method": "getOsRelease"}"#);
        let routed = messenger
            .send("tflite_native", br#"{"method": "getOsRelease"}"#)
            .unwrap();
        assert_eq!(direct, routed);
    }

    #[test]
    fn duplicate_channel_is_rejected() {
        let mut messenger = Messenger::new();
        let config = BridgeConfig::default();
        register_with(&mut messenger, dispatcher(), &config).unwrap();
        let err = register_with(&mut messenger, dispatcher(), &config).unwrap_err();
        assert!(matches!(err, BridgeError::DuplicateChannel(ref name) if name == "tflite_native"));
    }

    #[test]
    fn unknown_channel_is_an_error() {
        let messenger = Messenger::new();
        let err = messenger.send("nope", b"{}").unwrap_err();
        assert!(matches!(err, BridgeError::UnknownChannel(_)));
    }

    #[test]
    fn empty_channel_name_is_rejected() {
        let mut messenger = Messenger::new();
        let err = messenger.register("", Arc::new(dispatcher())).unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[test]
    fn config_policy_reaches_registered_dispatcher() {
        let mut messenger = Messenger::new();
        let config = BridgeConfig {
            channel_name: "host_facts".into(),
            reject_unexpected_arguments: true,
            ..Default::default()
        };
        register_with(&mut messenger, dispatcher(), &config).unwrap();
        let reply = messenger
            .send("host_facts", br#"{"method": "getPlatformVersion", "args": {"x": 1}}"#)
            .unwrap();
        let resp = codec::decode_response(&reply).unwrap();
        assert_eq!(resp.kind(), Some(ErrorKind::MalformedRequest));
    }
}
