//! Client module: the request builder, the transport, and the action table.
//!
//! The split mirrors the shape of one RPC call:
//!
//! - `request` builds the wire request - a pure step, no I/O
//! - `transport` performs the single POST and applies the status/decode
//!   policy
//! - [`Nano`] owns the immutable configuration and the generic
//!   [`Nano::command`] dispatch
//! - the action table (`actions`) maps every protocol action onto
//!   `command` as a one-line adapter
//!
//! Each piece is independent of in-flight call state: calls never share
//! mutable data, so one client can serve any number of concurrent tasks.

mod actions;
mod nano;
mod request;
mod response;
mod transport;

pub use nano::{Nano, NanoBuilder};
pub use response::RpcResponse;
