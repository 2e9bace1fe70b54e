//! The main Nano client.

use serde_json::{Map, Value};

use super::request;
use super::response::RpcResponse;
use super::transport;
use crate::error::Error;

/// The client for a Nano node's RPC interface.
///
/// `Nano` is the single entry point: construct it once with the node's
/// address, then issue typed action calls. Configuration is immutable after
/// [`NanoBuilder::build`]; the client is `Clone` (cheap, the underlying
/// HTTP client is shared) and safe to use from any number of concurrent
/// tasks without synchronization.
///
/// # Example
///
/// ```rust,no_run
/// use nano_rpc::Nano;
///
/// #[tokio::main]
/// async fn main() -> Result<(), nano_rpc::Error> {
///     let nano = Nano::new("http://[::1]:7076");
///
///     let count = nano.block_count().await?;
///     println!("blocks: {count:?}");
///
///     let balance = nano.account_balance("xrb_3e3j5...").await?;
///     println!("balance: {balance:?}");
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Nano {
    node_address: String,
    decode_responses: bool,
    http: reqwest::Client,
}

impl Nano {
    /// Create a client for the node at `node_address` with default
    /// configuration: responses are decoded to JSON, stock HTTP client.
    ///
    /// `node_address` is the full URL including scheme and optional port
    /// (e.g. `http://[::1]:7076`); the client performs no validation of
    /// its well-formedness.
    pub fn new(node_address: impl Into<String>) -> Self {
        Self::builder(node_address).build()
    }

    /// Create a builder for custom configuration.
    pub fn builder(node_address: impl Into<String>) -> NanoBuilder {
        NanoBuilder {
            node_address: node_address.into(),
            decode_responses: true,
            http: None,
        }
    }

    /// The configured node address.
    pub fn node_address(&self) -> &str {
        &self.node_address
    }

    /// Whether responses are decoded to JSON.
    pub fn decodes_responses(&self) -> bool {
        self.decode_responses
    }

    /// Invoke an arbitrary RPC action.
    ///
    /// This is the primitive every typed method funnels through, exposed
    /// publicly as an escape hatch for actions the table does not cover.
    /// The body sent is `params` shallow-merged after `{"action": action}`;
    /// with an empty map it is exactly `{"action":"<action>"}`.
    ///
    /// Calls are independent one-shot operations: overlapping calls on the
    /// same client resolve in whatever order the node answers, and dropping
    /// the returned future aborts that request alone.
    pub async fn command(
        &self,
        action: &str,
        params: Map<String, Value>,
    ) -> Result<RpcResponse, Error> {
        let request = request::build(&self.node_address, action, params)?;
        transport::send(&self.http, &request, self.decode_responses).await
    }
}

impl std::fmt::Debug for Nano {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nano")
            .field("node_address", &self.node_address)
            .field("decode_responses", &self.decode_responses)
            .finish()
    }
}

/// Fluent builder for [`Nano`].
#[derive(Debug)]
pub struct NanoBuilder {
    node_address: String,
    decode_responses: bool,
    http: Option<reqwest::Client>,
}

impl NanoBuilder {
    /// Control whether response bodies are decoded to JSON (default `true`).
    ///
    /// When disabled, every call resolves with the raw response text and no
    /// parse is ever attempted, so [`Error::Decode`] cannot occur.
    pub fn decode_responses(mut self, decode: bool) -> Self {
        self.decode_responses = decode;
        self
    }

    /// Use a pre-configured `reqwest::Client` (timeouts, TLS settings,
    /// proxies). Defaults to a stock client.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    pub fn build(self) -> Nano {
        Nano {
            node_address: self.node_address,
            decode_responses: self.decode_responses,
            http: self.http.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let nano = Nano::new("http://[::1]:7076");
        assert_eq!(nano.node_address(), "http://[::1]:7076");
        assert!(nano.decodes_responses());
    }

    #[test]
    fn test_builder_decode_off() {
        let nano = Nano::builder("http://localhost:7076")
            .decode_responses(false)
            .build();
        assert!(!nano.decodes_responses());
    }

    #[test]
    fn test_builder_custom_http_client() {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let nano = Nano::builder("http://localhost:7076")
            .http_client(http)
            .build();
        assert_eq!(nano.node_address(), "http://localhost:7076");
    }

    #[test]
    fn test_clone_shares_config() {
        let nano = Nano::builder("addr").decode_responses(false).build();
        let cloned = nano.clone();
        assert_eq!(cloned.node_address(), nano.node_address());
        assert_eq!(cloned.decodes_responses(), nano.decodes_responses());
    }

    #[test]
    fn test_debug_omits_http_client() {
        let nano = Nano::new("http://localhost:7076");
        let debug = format!("{nano:?}");
        assert!(debug.contains("Nano"));
        assert!(debug.contains("localhost:7076"));
    }
}
