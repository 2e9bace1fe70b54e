//! Response representation.

use serde_json::Value;

/// The resolved value of one RPC call.
///
/// Which variant a call produces is decided once, at client construction,
/// by [`NanoBuilder::decode_responses`](super::NanoBuilder::decode_responses):
/// decoding on (the default) yields [`RpcResponse::Json`], decoding off
/// yields [`RpcResponse::Raw`] with the exact text the node sent, no parse
/// attempted.
///
/// The payload shape inside [`RpcResponse::Json`] is defined entirely by
/// the node's RPC protocol; this client treats it as opaque. In particular
/// a 2xx response whose JSON encodes an application-level error (the node's
/// `"error"` key) still resolves as `Ok` here - that contract belongs to
/// the remote protocol, not to this transport.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcResponse {
    /// The decoded response body.
    Json(Value),
    /// The raw response text, untouched.
    Raw(String),
}

impl RpcResponse {
    /// The decoded value, if this response was decoded.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            RpcResponse::Json(value) => Some(value),
            RpcResponse::Raw(_) => None,
        }
    }

    /// The raw text, if decoding was disabled for this client.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            RpcResponse::Json(_) => None,
            RpcResponse::Raw(text) => Some(text),
        }
    }

    /// Consume the response, returning the decoded value if present.
    pub fn into_json(self) -> Option<Value> {
        match self {
            RpcResponse::Json(value) => Some(value),
            RpcResponse::Raw(_) => None,
        }
    }

    /// Convenience lookup of a top-level key in a decoded object response.
    ///
    /// Returns `None` for raw responses, non-object payloads, and missing
    /// keys alike.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(key))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_accessors() {
        let response = RpcResponse::Json(json!({"count": "1000"}));
        assert_eq!(response.get("count"), Some(&json!("1000")));
        assert_eq!(response.get("missing"), None);
        assert!(response.as_raw().is_none());
        assert_eq!(response.into_json(), Some(json!({"count": "1000"})));
    }

    #[test]
    fn test_raw_accessors() {
        let response = RpcResponse::Raw("{\"count\":\"1000\"}".into());
        assert_eq!(response.as_raw(), Some("{\"count\":\"1000\"}"));
        assert!(response.as_json().is_none());
        assert_eq!(response.get("count"), None);
        assert_eq!(response.into_json(), None);
    }

    #[test]
    fn test_get_on_scalar_payload() {
        let response = RpcResponse::Json(json!("plain"));
        assert_eq!(response.get("anything"), None);
    }
}
