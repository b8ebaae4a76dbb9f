// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JSON method codec for messages crossing a channel.
//
// Request envelope:  {"method": "<name>", "args": <object | null>}
// Success envelope:  ["<value>"]
// Failure envelope:  ["<code>", "<message>", null]

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BridgeError, Result};
use crate::types::{Arguments, ErrorKind, Request, Response};

#[derive(Debug, Serialize, Deserialize)]
struct MethodCall {
    method: String,
    #[serde(default)]
    args: Value,
}

/// Decode a request envelope.
///
/// `args` may be omitted or `null` (no arguments) or an object. Any other
/// shape, a missing or empty method name, or invalid JSON is a
/// `MalformedRequest`.
pub fn decode_request(bytes: &[u8]) -> Result<Request> {
    let call: MethodCall = serde_json::from_slice(bytes)
        .map_err(|e| BridgeError::MalformedRequest(format!("invalid method call: {e}")))?;

    let arguments = match call.args {
        Value::Null => Arguments::new(),
        Value::Object(map) => map,
        other => {
            return Err(BridgeError::MalformedRequest(format!(
                "arguments for '{}' must be an object or null, got {}",
                call.method,
                json_type(&other)
            )));
        }
    };

    Request::with_arguments(call.method, arguments)
}

/// Encode a request envelope.
pub fn encode_request(request: &Request) -> Vec<u8> {
    let args = if request.has_arguments() {
        Value::Object(request.arguments().clone())
    } else {
        Value::Null
    };
    let envelope = serde_json::json!({ "method": request.operation(), "args": args });
    envelope.to_string().into_bytes()
}

/// Encode a reply envelope.
pub fn encode_response(response: &Response) -> Vec<u8> {
    let envelope = match response {
        Response::Success(value) => serde_json::json!([value]),
        Response::Failure { kind, message } => {
            serde_json::json!([kind.code(), message, Value::Null])
        }
    };
    envelope.to_string().into_bytes()
}

/// Decode a reply envelope produced by [`encode_response`].
pub fn decode_response(bytes: &[u8]) -> Result<Response> {
    let envelope: Vec<Value> = serde_json::from_slice(bytes)
        .map_err(|e| BridgeError::MalformedReply(format!("invalid reply envelope: {e}")))?;

    match envelope.as_slice() {
        [Value::String(value)] => Ok(Response::success(value.clone())),
        [Value::String(code), Value::String(message), _details] => {
            let kind = ErrorKind::from_code(code)
                .ok_or_else(|| BridgeError::MalformedReply(format!("unknown error code '{code}'")))?;
            Ok(Response::failure(kind, message.clone()))
        }
        _ => Err(BridgeError::MalformedReply(format!(
            "expected 1 or 3 elements, got {}",
            envelope.len()
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_call_without_args() {
        let req = decode_request(br#"{"method": "getPlatformVersion"}"#).unwrap();
        assert_eq!(req.operation(), "getPlatformVersion");
        assert!(!req.has_arguments());
    }

    #[test]
    fn decodes_null_and_object_args() {
        let req = decode_request(br#"{"method": "getPlatformVersion", "args": null}"#).unwrap();
        assert!(!req.has_arguments());

        let req = decode_request(br#"{"method": "getOsRelease", "args": {"verbose": true}}"#).unwrap();
        assert_eq!(req.arguments().get("verbose"), Some(&Value::Bool(true)));
    }

    #[test]
    fn scalar_args_are_malformed() {
        let err = decode_request(br#"{"method": "getPlatformVersion", "args": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, BridgeError::MalformedRequest(ref m) if m.contains("array")));
    }

    #[test]
    fn garbage_and_empty_method_are_malformed() {
        assert!(matches!(
            decode_request(b"not json").unwrap_err(),
            BridgeError::MalformedRequest(_)
        ));
        assert!(matches!(
            decode_request(br#"{"args": {}}"#).unwrap_err(),
            BridgeError::MalformedRequest(_)
        ));
        assert!(matches!(
            decode_request(br#"{"method": ""}"#).unwrap_err(),
            BridgeError::MalformedRequest(_)
        ));
    }

    #[test]
    fn request_envelope_survives_encoding() {
        let mut args = Arguments::new();
        args.insert("threads".into(), Value::from(4));
        let req = Request::with_arguments("getPlatformVersion", args).unwrap();
        assert_eq!(decode_request(&encode_request(&req)).unwrap(), req);
    }

    #[test]
    fn reply_envelope_shapes() {
        let ok = encode_response(&Response::success("Android 13"));
        assert_eq!(ok, br#"["Android 13"]"#.to_vec());

        let failure = Response::failure(ErrorKind::UnsupportedOperation, "unknownThing");
        let bytes = encode_response(&failure);
        assert_eq!(
            bytes,
            br#"["UnsupportedOperation","unknownThing",null]"#.to_vec()
        );
        assert_eq!(decode_response(&bytes).unwrap(), failure);
    }

    #[test]
    fn bad_reply_is_rejected() {
        assert!(matches!(
            decode_response(br#"["a", "b"]"#).unwrap_err(),
            BridgeError::MalformedReply(_)
        ));
        assert!(matches!(
            decode_response(br#"["Nope", "b", null]"#).unwrap_err(),
            BridgeError::MalformedReply(_)
        ));
    }
}
