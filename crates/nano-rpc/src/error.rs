//! Error types for nano-rpc.
//!
//! Every RPC call resolves to exactly one [`RpcResponse`](crate::RpcResponse)
//! or exactly one [`Error`](enum@Error); the library never retries and never
//! swallows a failure.
//!
//! # Error Hierarchy
//!
//! - [`Error::Serialization`] — parameters could not be encoded; raised
//!   before any network I/O
//! - [`Error::Network`] — the node could not be reached (DNS, refused
//!   connection, reset mid-stream)
//! - [`Error::Status`] — the node answered with an HTTP status outside
//!   the 2xx range
//! - [`Error::Decode`] — the node answered 2xx but the body was not valid
//!   JSON while decoding was requested
//!
//! The last two are deliberately distinct so callers can tell "node
//! reachable but returned a malformed payload" apart from "node
//! unreachable":
//!
//! ```rust,no_run
//! use nano_rpc::{Error, Nano};
//!
//! # async fn example() -> Result<(), Error> {
//! let nano = Nano::new("http://[::1]:7076");
//!
//! match nano.block_count().await {
//!     Ok(response) => println!("{response:?}"),
//!     Err(Error::Status { code, .. }) => println!("node said HTTP {code}"),
//!     Err(Error::Decode(e)) => println!("node sent garbage: {e}"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Errors produced by RPC calls.
#[derive(Debug, Error)]
pub enum Error {
    /// Request parameters could not be serialized to JSON. Raised before
    /// any network I/O; no partial request is ever sent.
    #[error("failed to serialize request parameters: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The HTTP exchange failed below the protocol level: DNS resolution,
    /// connection establishment, or a reset while reading the body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The node answered, but with a status code outside 200-299. The
    /// response body is drained and kept for diagnostics.
    #[error("node returned HTTP {code}")]
    Status {
        /// The numeric HTTP status code.
        code: u16,
        /// The (drained) response body, possibly empty.
        body: String,
    },

    /// The node answered 2xx but the body was not valid JSON while
    /// response decoding was enabled.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// The HTTP status code, if this is a [`Error::Status`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True if the node was reachable but its payload failed to decode.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// True if the failure happened below the HTTP protocol level.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}
