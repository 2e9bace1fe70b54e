//! An async Rust client for the Nano (RaiBlocks) node RPC.
//!
//! **nano-rpc** exposes the node's HTTP JSON-RPC as typed method calls:
//! every call serializes an `action` name plus parameters into a JSON body,
//! POSTs it to the configured node, and resolves with the node's JSON (or
//! raw text) response.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nano_rpc::Nano;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nano_rpc::Error> {
//!     // Configure once
//!     let nano = Nano::new("http://[::1]:7076");
//!
//!     // Ledger-wide block count
//!     let count = nano.block_count().await?;
//!     println!("blocks: {:?}", count.get("count"));
//!
//!     // Balance for one account
//!     let balance = nano.account_balance("xrb_3t6k35gi95xu6tergt6p69ck76ogmitsa8mnijtpxm9fkcm736xtoncuohr3").await?;
//!     println!("balance: {:?}", balance.get("balance"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Design
//!
//! 1. **Single entry point**: everything hangs off the [`Nano`] client
//! 2. **Configure once**: node address and decode mode are set at
//!    construction and never change
//! 3. **One primitive**: every typed method is a one-line adapter over
//!    [`Nano::command`], which is also public as an escape hatch for
//!    actions the table does not cover
//! 4. **Opaque payloads**: response shapes belong to the node's protocol;
//!    this client decodes them to [`serde_json::Value`] (or hands back the
//!    raw text when decoding is disabled) without interpreting them
//!
//! # Raw responses
//!
//! ```rust,no_run
//! use nano_rpc::Nano;
//!
//! # async fn example() -> Result<(), nano_rpc::Error> {
//! let nano = Nano::builder("http://[::1]:7076")
//!     .decode_responses(false)
//!     .build();
//!
//! // Resolves with the exact text the node sent, unparsed
//! let raw = nano.version().await?;
//! println!("{}", raw.as_raw().unwrap());
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Calls fail with exactly one [`Error`]: serialization trouble before any
//! I/O, a network-level fault, a non-2xx status (carrying the code), or a
//! decode failure on a 2xx body. See [`error`] for the taxonomy. The
//! library performs no retries and no logging beyond `tracing` debug
//! events.

pub mod client;
pub mod error;

// Re-export commonly used types at crate root
pub use client::{Nano, NanoBuilder, RpcResponse};
pub use error::Error;
