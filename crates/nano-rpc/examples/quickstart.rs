//! Quickstart - essential node queries
//!
//! Covers: block count, account balance, raw (undecoded) responses
//!
//! Run against a local node: cargo run --example quickstart
//!
//! The default node RPC port is 7076; adjust NODE below if yours differs.

use nano_rpc::{Error, Nano};

const NODE: &str = "http://[::1]:7076";

// ============================================================================
// 1. Decoded queries (the default)
// ============================================================================

async fn decoded_example() -> Result<(), Error> {
    println!("=== Decoded Example ===\n");

    let nano = Nano::new(NODE);

    let count = nano.block_count().await?;
    println!("ledger blocks: {:?}", count.get("count"));

    let version = nano.version().await?;
    println!("node vendor: {:?}", version.get("node_vendor"));

    let supply = nano.available_supply().await?;
    println!("available supply: {:?}", supply.get("available"));

    Ok(())
}

// ============================================================================
// 2. Raw responses (decoding disabled)
// ============================================================================

async fn raw_example() -> Result<(), Error> {
    println!("\n=== Raw Example ===\n");

    let nano = Nano::builder(NODE).decode_responses(false).build();

    // Resolves with the exact text the node sent
    let raw = nano.block_count().await?;
    println!("raw body: {}", raw.as_raw().unwrap());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    decoded_example().await?;
    raw_example().await?;
    Ok(())
}
