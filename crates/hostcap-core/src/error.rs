// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Hostcap.

use thiserror::Error;

use crate::types::ErrorKind;

/// Top-level error type for all Hostcap operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    // -- Dispatch errors --
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("malformed reply: {0}")]
    MalformedReply(String),

    // -- Channel registration --
    #[error("channel already registered: {0}")]
    DuplicateChannel(String),

    #[error("no handler registered for channel: {0}")]
    UnknownChannel(String),

    // -- Host capability providers --
    #[error("host capability error: {0}")]
    Host(String),

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BridgeError {
    /// The wire-level kind reported to callers when this error reaches the
    /// dispatcher boundary.
    ///
    /// Only an unrecognised operation is `UnsupportedOperation`. Decode
    /// failures are `MalformedRequest`. Host, channel, and config errors are
    /// raised at startup or by the messenger and never reach a reply; if one
    /// is converted anyway it is reported as `MalformedRequest`, the only
    /// other kind on the wire.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            Self::MalformedRequest(_) | Self::MalformedReply(_) | Self::Serialization(_) => {
                ErrorKind::MalformedRequest
            }
            Self::DuplicateChannel(_)
            | Self::UnknownChannel(_)
            | Self::Host(_)
            | Self::Config(_)
            | Self::Io(_) => ErrorKind::MalformedRequest,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_operation_keeps_its_kind() {
        let err = BridgeError::UnsupportedOperation("unknownThing".into());
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        assert!(err.to_string().contains("unknownThing"));
    }

    #[test]
    fn decode_failure_is_malformed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = BridgeError::from(json_err);
        assert_eq!(err.kind(), ErrorKind::MalformedRequest);
    }

    #[test]
    fn only_unknown_operations_are_unsupported() {
        let errors = [
            BridgeError::MalformedRequest("args".into()),
            BridgeError::MalformedReply("envelope".into()),
            BridgeError::Host("JNI detached".into()),
            BridgeError::Config("channel_name".into()),
            BridgeError::UnknownChannel("nope".into()),
        ];
        for err in &errors {
            assert_eq!(err.kind(), ErrorKind::MalformedRequest, "{err}");
        }
    }
}
