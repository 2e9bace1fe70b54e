//! The public action table.
//!
//! Every method here is the same one-line adapter: name an RPC action,
//! collect the parameters into a map, forward to [`Nano::command`]. The
//! whole surface is therefore expressed as one declarative registry - the
//! `rpc_actions!` invocation at the bottom of this file - rather than as
//! dozens of hand-written near-duplicate functions. Adding an action is a
//! one-line edit.
//!
//! Parameter conventions follow the node's RPC protocol: accounts, wallets,
//! block hashes, seeds, keys and amounts travel as strings (amounts are raw
//! values wider than any machine integer), counts as integers, account
//! lists as string sequences. Optional parameters take `Option<T>`; passing
//! `None` applies the protocol's documented default.

use serde_json::{Map, json};

use super::nano::Nano;
use super::response::RpcResponse;
use crate::error::Error;

/// Declares the RPC method registry.
///
/// Each entry is `method => "action"` with optional `req(...)` required
/// parameters and `opt(name: type = default, ...)` optional parameters,
/// and expands to a `pub async fn` on [`Nano`] that builds the parameter
/// map and calls [`Nano::command`].
macro_rules! rpc_actions {
    ($(
        $(#[$meta:meta])*
        $method:ident => $action:literal
            $(, req( $($p:ident : $pt:ty),+ $(,)? ))?
            $(, opt( $($o:ident : $ot:ty = $d:expr),+ $(,)? ))?
        ;
    )+) => {
        impl Nano {
            $(
                $(#[$meta])*
                pub async fn $method(
                    &self
                    $($(, $p: $pt)+)?
                    $($(, $o: Option<$ot>)+)?
                ) -> Result<RpcResponse, Error> {
                    #[allow(unused_mut)]
                    let mut params = Map::new();
                    $($(
                        params.insert(stringify!($p).to_owned(), json!($p));
                    )+)?
                    $($(
                        params.insert(stringify!($o).to_owned(), json!($o.unwrap_or($d)));
                    )+)?
                    self.command($action, params).await
                }
            )+
        }
    };
}

rpc_actions! {
    // ── Accounts ──────────────────────────────────────────────────────

    /// Balance and pending (not yet received) amount for an account, in raw.
    account_balance => "account_balance", req(account: &str);

    /// Number of blocks in an account's chain.
    account_block_count => "account_block_count", req(account: &str);

    /// Create a new account inside a wallet.
    ///
    /// Requires the node's `enable_control` setting, as do all
    /// wallet-mutating actions.
    account_create => "account_create", req(wallet: &str);

    /// Account number for the given public key.
    account_get => "account_get", req(key: &str);

    /// Block history for an account, newest first.
    account_history => "account_history", req(account: &str), opt(count: u64 = 1);

    /// Frontier, open block, change representative block, balance, last
    /// modified timestamp and block count for an account.
    account_info => "account_info", req(account: &str);

    /// Public key for the given account number.
    account_key => "account_key", req(account: &str);

    /// Accounts inside a wallet.
    account_list => "account_list", req(wallet: &str);

    /// Move accounts from `source` wallet into `wallet`.
    account_move => "account_move", req(wallet: &str, source: &str, accounts: &[&str]);

    /// Remove an account from a wallet.
    account_remove => "account_remove", req(wallet: &str, account: &str);

    /// The representative for an account.
    account_representative => "account_representative", req(account: &str);

    /// Set the representative for an account in a wallet.
    account_representative_set => "account_representative_set",
        req(wallet: &str, account: &str, representative: &str);

    /// Voting weight for an account, in raw.
    account_weight => "account_weight", req(account: &str);

    /// Balances for a batch of accounts.
    accounts_balances => "accounts_balances", req(accounts: &[&str]);

    /// Create several accounts inside a wallet at once.
    accounts_create => "accounts_create", req(wallet: &str), opt(count: u64 = 1);

    /// Frontier block hash for each of a batch of accounts.
    accounts_frontiers => "accounts_frontiers", req(accounts: &[&str]);

    /// Pending (receivable) blocks for a batch of accounts, filtered by a
    /// minimum amount.
    ///
    /// The threshold default is the protocol's, `10^24` raw.
    accounts_pending => "accounts_pending", req(accounts: &[&str]),
        opt(count: u64 = 4096, threshold: &str = "1000000000000000000000000");

    /// Check whether an account number is valid.
    validate_account_number => "validate_account_number", req(account: &str);

    // ── Blocks & ledger ───────────────────────────────────────────────

    /// Total amount available in the ledger, in raw.
    available_supply => "available_supply";

    /// Retrieve a block by hash.
    block => "block", req(hash: &str);

    /// Retrieve a batch of blocks by hash.
    blocks => "blocks", req(hashes: &[&str]);

    /// The account a block belongs to.
    block_account => "block_account", req(hash: &str);

    /// Number of blocks in the ledger.
    block_count => "block_count";

    /// Block counts broken down by type (open, send, receive, change).
    block_count_type => "block_count_type";

    /// Walk an account chain backwards from `block`.
    chain => "chain", req(block: &str), opt(count: u64 = 4096);

    /// Frontier block hashes starting at `account`.
    frontiers => "frontiers", req(account: &str, count: u64);

    /// Number of accounts in the ledger.
    frontier_count => "frontier_count";

    /// Transaction history starting from a block hash.
    history => "history", req(hash: &str, count: u64);

    /// Ledger information starting at `account`.
    ledger => "ledger", req(account: &str), opt(count: u64 = 1);

    /// Pending (receivable) blocks for one account.
    pending => "pending", req(account: &str), opt(count: u64 = 4096);

    /// Check whether a block hash is still pending.
    pending_exists => "pending_exists", req(hash: &str);

    /// Publish a serialized block to the network.
    process => "process", req(block: &str);

    /// Rebroadcast a block (and its successors) to the network.
    republish => "republish", req(hash: &str);

    /// Walk an account chain forwards from `block`.
    successors => "successors", req(block: &str), opt(count: u64 = 4096);

    // ── Keys & units ──────────────────────────────────────────────────

    /// Derive the private/public key pair and account for a seed at `index`.
    deterministic_key => "deterministic_key", req(seed: &str, index: u64);

    /// Generate a fresh random key pair.
    key_create => "key_create";

    /// Derive the public key and account for a private key.
    key_expand => "key_expand", req(key: &str);

    /// Convert a krai amount (10^27 raw) to raw.
    krai_to_raw => "krai_to_raw", req(amount: &str);

    /// Convert a raw amount to krai.
    krai_from_raw => "krai_from_raw", req(amount: &str);

    /// Convert an mrai amount (10^30 raw) to raw.
    mrai_to_raw => "mrai_to_raw", req(amount: &str);

    /// Convert a raw amount to mrai.
    mrai_from_raw => "mrai_from_raw", req(amount: &str);

    /// Convert a rai amount (10^24 raw) to raw.
    rai_to_raw => "rai_to_raw", req(amount: &str);

    /// Convert a raw amount to rai.
    rai_from_raw => "rai_from_raw", req(amount: &str);

    // ── Network ───────────────────────────────────────────────────────

    /// Initialize bootstrap against a specific peer.
    bootstrap => "bootstrap", req(address: &str, port: u16);

    /// Initialize multi-connection bootstrap against random peers.
    bootstrap_any => "bootstrap_any";

    /// Send a keepalive packet to a peer.
    keepalive => "keepalive", req(address: &str, port: u16);

    /// Currently connected peers and their network versions.
    peers => "peers";

    /// Representatives and their voting weight.
    representatives => "representatives";

    /// Node vendor version and store version.
    version => "version";

    /// Stop the node.
    stop => "stop";

    // ── Payments ──────────────────────────────────────────────────────

    /// Begin a payment session, locking an account in the wallet.
    payment_begin => "payment_begin", req(wallet: &str);

    /// Mark accounts in a wallet as available for payment sessions.
    payment_init => "payment_init", req(wallet: &str);

    /// End a payment session, releasing the account back to the wallet.
    payment_end => "payment_end", req(account: &str, wallet: &str);

    /// Wait for `account` to receive at least `amount` raw, up to
    /// `timeout` milliseconds.
    payment_wait => "payment_wait", req(account: &str, amount: &str, timeout: u64);

    // ── Wallets ───────────────────────────────────────────────────────

    /// Change a wallet's password.
    password_change => "password_change", req(wallet: &str, password: &str);

    /// Unlock a wallet.
    password_enter => "password_enter", req(wallet: &str, password: &str);

    /// Check whether a wallet's password is valid (wallet unlocked).
    password_valid => "password_valid", req(wallet: &str);

    /// Receive a pending block into a wallet account.
    receive => "receive", req(wallet: &str, account: &str, block: &str);

    /// Send `amount` raw from `source` to `destination` out of a wallet.
    send => "send", req(wallet: &str, source: &str, destination: &str, amount: &str);

    /// Search for pending blocks in a wallet.
    search_pending => "search_pending", req(wallet: &str);

    /// Search for pending blocks in every local wallet.
    search_pending_all => "search_pending_all";

    /// Add an adhoc private key to a wallet.
    wallet_add => "wallet_add", req(wallet: &str, key: &str);

    /// Total balance and pending amount across a wallet.
    wallet_balance_total => "wallet_balance_total", req(wallet: &str);

    /// Per-account balances inside a wallet.
    wallet_balances => "wallet_balances", req(wallet: &str);

    /// Change a wallet's seed.
    wallet_change_seed => "wallet_change_seed", req(wallet: &str, seed: &str);

    /// Check whether a wallet contains an account.
    wallet_contains => "wallet_contains", req(wallet: &str, account: &str);

    /// Create a new wallet.
    wallet_create => "wallet_create";

    /// Destroy a wallet and all of its accounts.
    wallet_destroy => "wallet_destroy", req(wallet: &str);

    /// Export a wallet as JSON.
    wallet_export => "wallet_export", req(wallet: &str);

    /// Frontier block hash for each account in a wallet.
    wallet_frontiers => "wallet_frontiers", req(wallet: &str);

    /// Pending (receivable) blocks for every account in a wallet.
    wallet_pending => "wallet_pending", req(wallet: &str), opt(count: u64 = 4096);

    /// The default representative for a wallet.
    wallet_representative => "wallet_representative", req(wallet: &str);

    /// Set the default representative for a wallet.
    wallet_representative_set => "wallet_representative_set",
        req(wallet: &str, representative: &str);

    /// Rebroadcast blocks from every account in a wallet.
    wallet_republish => "wallet_republish", req(wallet: &str, count: u64);

    /// Work values cached for each account in a wallet.
    wallet_work_get => "wallet_work_get", req(wallet: &str);

    // ── Proof of work ─────────────────────────────────────────────────

    /// Stop generating work for a block hash.
    work_cancel => "work_cancel", req(hash: &str);

    /// Generate proof of work for a block hash.
    work_generate => "work_generate", req(hash: &str);

    /// The cached work value for a wallet account.
    work_get => "work_get", req(wallet: &str, account: &str);

    /// Set the cached work value for a wallet account.
    work_set => "work_set", req(wallet: &str, account: &str, work: &str);

    /// Add a work peer.
    work_peer_add => "work_peer_add", req(address: &str, port: u16);

    /// Configured work peers.
    work_peers => "work_peers";

    /// Clear the work peer list.
    work_peers_clear => "work_peers_clear";
}
