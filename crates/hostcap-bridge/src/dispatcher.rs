// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request dispatcher.
//
// Resolves a request's operation name against the capability table and
// answers from the host provider. Unknown operations and undecodable
// messages come back as failure responses; nothing here panics or returns
// an error to the caller.

use std::sync::Arc;

use tracing::{debug, warn};

use hostcap_core::codec;
use hostcap_core::config::BridgeConfig;
use hostcap_core::error::BridgeError;
use hostcap_core::types::{ErrorKind, Request, Response};

use crate::capability::CapabilityTable;
use crate::traits::{HostCapabilityProvider, MethodHandler};

/// Routes named requests to host-fact accessors.
///
/// Holds only immutable state, so a single instance can be shared behind an
/// `Arc` and called from any number of threads.
#[derive(Clone)]
pub struct Dispatcher {
    table: CapabilityTable,
    provider: Arc<dyn HostCapabilityProvider>,
    reject_unexpected_arguments: bool,
}

impl Dispatcher {
    /// Dispatcher answering every standard capability.
    pub fn new(provider: Arc<dyn HostCapabilityProvider>) -> Self {
        Self::with_table(CapabilityTable::standard(), provider)
    }

    pub fn with_table(table: CapabilityTable, provider: Arc<dyn HostCapabilityProvider>) -> Self {
        Self {
            table,
            provider,
            reject_unexpected_arguments: false,
        }
    }

    /// Apply the argument policy from a bridge config.
    pub fn configured(mut self, config: &BridgeConfig) -> Self {
        self.reject_unexpected_arguments = config.reject_unexpected_arguments;
        self
    }

    /// Handle one request.
    pub fn handle(&self, request: &Request) -> Response {
        let operation = request.operation();

        let Some(capability) = self.table.lookup(operation) else {
            warn!(operation, "unsupported operation requested");
            return Response::from_error(&BridgeError::UnsupportedOperation(operation.to_string()));
        };

        if request.has_arguments() && !capability.takes_arguments() {
            if self.reject_unexpected_arguments {
                warn!(operation, "rejecting arguments for zero-argument operation");
                return Response::failure(
                    ErrorKind::MalformedRequest,
                    format!("operation '{operation}' takes no arguments"),
                );
            }
            debug!(operation, "ignoring arguments for zero-argument operation");
        }

        let value = capability.read(self.provider.as_ref());
        debug!(operation, value = %value, "operation answered");
        Response::success(value)
    }

    /// Decode an encoded request, handle it, and encode the reply.
    pub fn handle_bytes(&self, message: &[u8]) -> Vec<u8> {
        let response = match codec::decode_request(message) {
            Ok(request) => self.handle(&request),
            Err(e) => {
                warn!(error = %e, bytes = message.len(), "undecodable request");
                Response::from_error(&e)
            }
        };
        codec::encode_response(&response)
    }

    /// Registered operation names in sorted order.
    pub fn operations(&self) -> Vec<&'static str> {
        self.table.operations().collect()
    }

    pub fn provider(&self) -> &dyn HostCapabilityProvider {
        self.provider.as_ref()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("table", &self.table)
            .field("platform", &self.provider.platform_name())
            .field("reject_unexpected_arguments", &self.reject_unexpected_arguments)
            .finish()
    }
}

impl MethodHandler for Dispatcher {
    fn handle_message(&self, message: &[u8]) -> Vec<u8> {
        self.handle_bytes(message)
    }
}
