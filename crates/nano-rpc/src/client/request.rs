//! Request construction.
//!
//! A Nano node exposes every RPC action at a single endpoint: the body
//! carries an `action` key naming the operation, with action-specific
//! parameters merged alongside it at the top level. This module turns an
//! action name plus a parameter map into that wire shape without touching
//! the network.

use serde_json::{Map, Value};

use crate::error::Error;

/// A fully-built request: target URL and serialized JSON body.
///
/// Value type, constructed fresh per call and discarded once the call
/// completes. Building one performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcRequest {
    /// Where the request goes: the node address with a single trailing slash.
    pub url: String,
    /// The serialized body. Always a JSON object whose first key is `action`.
    pub body: String,
}

/// Build an [`RpcRequest`] for `action` against `node_address`.
///
/// With no parameters the body is exactly `{"action":"<action>"}`. With
/// parameters, each entry of `params` is shallow-merged after the `action`
/// key, values passed through as-is. Parameter keys are trusted not to
/// collide with `action`; the protocol guarantees this and the client does
/// not deduplicate.
///
/// Fails with [`Error::Serialization`] if a parameter value cannot be
/// encoded, before any network attempt is made.
pub(crate) fn build(
    node_address: &str,
    action: &str,
    params: Map<String, Value>,
) -> Result<RpcRequest, Error> {
    let mut object = Map::with_capacity(params.len() + 1);
    object.insert("action".to_owned(), Value::String(action.to_owned()));
    object.extend(params);

    let body = serde_json::to_string(&object).map_err(Error::Serialization)?;

    Ok(RpcRequest {
        url: endpoint(node_address),
        body,
    })
}

/// The node serves every action at its root path, so the target is always
/// `<node_address>/` with exactly one trailing slash.
fn endpoint(node_address: &str) -> String {
    let trimmed = node_address.trim_end_matches('/');
    format!("{trimmed}/")
}
