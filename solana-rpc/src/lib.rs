//! Thin async client for the Solana cluster JSON-RPC API.
//!
//! Each [`Client`] operation builds a JSON-RPC 2.0 request body for one
//! remote method, posts it, and hands back the decoded envelope without
//! interpreting it. Transaction construction and signing stay behind the
//! [`Transaction`] trait; everything network-shaped lives in
//! [`http::HttpClient`].
//!
//! ```no_run
//! use solana_rpc::{Client, Pubkey};
//!
//! # async fn run() -> Result<(), solana_rpc::ClientError> {
//! let client = Client::new("https://api.devnet.solana.com")?;
//! let owner = Pubkey::new("9aE476sH92Vz7DMPyq5WLPkrKWivxeuTKEFKd2sZZcde");
//! let balance = client.get_balance(&owner).await?;
//! println!("{:?}", balance.result);
//! # Ok(())
//! # }
//! ```

/// Solana cluster RPC method names.
pub mod methods {
    pub const GET_ACCOUNT_INFO: &str = "getAccountInfo";
    pub const GET_BALANCE: &str = "getBalance";
    pub const GET_BLOCK: &str = "getBlock";
    pub const GET_BLOCK_HEIGHT: &str = "getBlockHeight";
    pub const GET_BLOCK_PRODUCTION: &str = "getBlockProduction";
    pub const GET_BLOCK_COMMITMENT: &str = "getBlockCommitment";
    pub const GET_BLOCKS: &str = "getBlocks";
    pub const GET_BLOCKS_WITH_LIMIT: &str = "getBlocksWithLimit";
    pub const GET_BLOCK_TIME: &str = "getBlockTime";
    pub const GET_CLUSTER_NODES: &str = "getClusterNodes";
    pub const GET_EPOCH_INFO: &str = "getEpochInfo";
    pub const GET_EPOCH_SCHEDULE: &str = "getEpochSchedule";
    pub const GET_FEE_FOR_MESSAGE: &str = "getFeeForMessage";
    /// Deprecated upstream; answered by current public clusters still.
    pub const GET_FEES: &str = "getFees";
    pub const GET_FIRST_AVAILABLE_BLOCK: &str = "getFirstAvailableBlock";
    pub const GET_GENESIS_HASH: &str = "getGenesisHash";
    pub const GET_HEALTH: &str = "getHealth";
    pub const GET_SUPPLY: &str = "getSupply";
    pub const GET_IDENTITY: &str = "getIdentity";
    pub const GET_TRANSACTION: &str = "getTransaction";
    /// Deprecated upstream in favor of `getLatestBlockhash`.
    pub const GET_RECENT_BLOCKHASH: &str = "getRecentBlockhash";
    pub const GET_TOKEN_ACCOUNTS_BY_OWNER: &str = "getTokenAccountsByOwner";
    pub const REQUEST_AIRDROP: &str = "requestAirdrop";
    pub const SEND_TRANSACTION: &str = "sendTransaction";
}

pub mod client;
pub mod error;
pub mod http;
pub mod transaction;
pub mod types;

// Re-exports for convenience
pub use client::{Client, ENDPOINTS};
pub use error::ClientError;
pub use transaction::Transaction;
pub use types::{Encoding, Pubkey, RpcError, RpcRequest, RpcResponse, TokenAccountsFilter};
