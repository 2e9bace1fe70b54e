//! The HTTP round trip.
//!
//! One call here is one POST: the scheme (plain or TLS), host and port come
//! from the request URL, the body goes out as-is, and the full response body
//! is accumulated before anything is interpreted. All of the client's corner
//! cases live in this file: status-code policy, drain-before-reject, and the
//! decode-failure split.

use tracing::{debug, trace};

use super::request::RpcRequest;
use super::response::RpcResponse;
use crate::error::Error;

/// Perform one request/response exchange.
///
/// Each invocation is an independent, unordered, one-shot operation; no
/// state is shared between calls beyond the internally-synchronized
/// `reqwest::Client`. Dropping the returned future aborts the in-flight
/// request.
///
/// The response body is always drained in full, even for a non-2xx status,
/// so the connection is never left dangling; only after draining is the
/// status policy applied.
pub(crate) async fn send(
    http: &reqwest::Client,
    request: &RpcRequest,
    decode: bool,
) -> Result<RpcResponse, Error> {
    trace!(url = %request.url, body = %request.body, "sending RPC request");

    let response = http
        .post(&request.url)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(request.body.clone())
        .send()
        .await?;

    let status = response.status();
    // Drain the whole body first; the status check comes after so the
    // connection is always consumed. Chunks arrive in order and are
    // accumulated into one buffer before any parse is attempted.
    let body = response.text().await?;

    if !status.is_success() {
        debug!(status = status.as_u16(), "node returned non-success status");
        return Err(Error::Status {
            code: status.as_u16(),
            body,
        });
    }

    if !decode {
        return Ok(RpcResponse::Raw(body));
    }

    match serde_json::from_str(&body) {
        Ok(value) => Ok(RpcResponse::Json(value)),
        Err(e) => {
            debug!(error = %e, "response body is not valid JSON");
            Err(Error::Decode(e))
        }
    }
}
