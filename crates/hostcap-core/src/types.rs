// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request / response types exchanged across a capability channel.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BridgeError, Result};

/// Opaque key-value argument payload carried by a request.
pub type Arguments = Map<String, Value>;

/// A named request addressed to the dispatcher.
///
/// The operation name is guaranteed non-empty; construct through
/// [`Request::new`] or [`Request::with_arguments`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    operation: String,
    arguments: Arguments,
}

impl Request {
    /// A request with no arguments.
    pub fn new(operation: impl Into<String>) -> Result<Self> {
        Self::with_arguments(operation, Arguments::new())
    }

    /// A request carrying an argument map (possibly empty).
    pub fn with_arguments(operation: impl Into<String>, arguments: Arguments) -> Result<Self> {
        let operation = operation.into();
        if operation.is_empty() {
            return Err(BridgeError::MalformedRequest(
                "operation name must not be empty".into(),
            ));
        }
        Ok(Self {
            operation,
            arguments,
        })
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }
}

/// Error kinds a caller can observe in a failure response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No handler is registered for the requested operation name.
    UnsupportedOperation,
    /// The request could not be decoded, or its arguments were rejected.
    MalformedRequest,
}

impl ErrorKind {
    /// Code string used on the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedOperation => "UnsupportedOperation",
            Self::MalformedRequest => "MalformedRequest",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "UnsupportedOperation" => Some(Self::UnsupportedOperation),
            "MalformedRequest" => Some(Self::MalformedRequest),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of handling one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    Success(String),
    Failure { kind: ErrorKind, message: String },
}

impl Response {
    pub fn success(value: impl Into<String>) -> Self {
        Self::Success(value.into())
    }

    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// Convert an error reaching the dispatcher boundary into a failure.
    pub fn from_error(err: &BridgeError) -> Self {
        Self::failure(err.kind(), err.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure { .. } => None,
        }
    }

    /// The failure kind, if any.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_operation_is_rejected() {
        let err = Request::new("").unwrap_err();
        assert!(matches!(err, BridgeError::MalformedRequest(_)));
    }

    #[test]
    fn request_keeps_arguments() {
        let mut args = Arguments::new();
        args.insert("model".into(), Value::from("mobilenet"));
        let req = Request::with_arguments("getPlatformVersion", args).unwrap();
        assert_eq!(req.operation(), "getPlatformVersion");
        assert!(req.has_arguments());
    }

    #[test]
    fn from_error_carries_kind_and_message() {
        let resp = Response::from_error(&BridgeError::UnsupportedOperation("unknownThing".into()));
        assert_eq!(resp.kind(), Some(ErrorKind::UnsupportedOperation));
        assert!(!resp.is_success());
        match resp {
            Response::Failure { message, .. } => assert!(message.contains("unknownThing")),
            Response::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn error_kind_codes_are_stable() {
        for kind in [ErrorKind::UnsupportedOperation, ErrorKind::MalformedRequest] {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code("notImplemented"), None);
    }
}
