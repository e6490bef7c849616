//! RPC client - thin binding over the Solana cluster JSON-RPC API.

use base64::{prelude::BASE64_STANDARD, Engine};
use serde_json::json;

use crate::error::ClientError;
use crate::http::HttpClient;
use crate::methods;
use crate::transaction::Transaction;
use crate::types::{Encoding, Pubkey, RpcResponse, TokenAccountsFilter};

/// Public cluster RPC endpoints accepted by [`Client::new`].
pub const ENDPOINTS: [&str; 3] = [
    "https://api.mainnet-beta.solana.com",
    "https://api.devnet.solana.com",
    "https://api.testnet.solana.com",
];

/// Client for a Solana cluster node.
///
/// Every operation maps 1:1 onto a remote method: arguments are
/// assembled positionally (a literal `null` fills a parameter slot the
/// remote method expects but the operation takes no argument for),
/// posted through [`HttpClient`], and the decoded [`RpcResponse`] is
/// returned verbatim. Success or failure of the remote call is the
/// caller's to read out of `result`/`error`.
///
/// The client holds no mutable state across calls, so it can be shared
/// across tasks; the one exception is the caller's transaction during
/// [`Client::send_transaction`].
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Connect to one of the known public clusters.
    ///
    /// Fails with [`ClientError::InvalidEndpoint`] for anything not in
    /// [`ENDPOINTS`]; use [`Client::new_local`] for a custom deployment.
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        if !ENDPOINTS.contains(&endpoint) {
            return Err(ClientError::InvalidEndpoint(endpoint.to_string()));
        }
        Ok(Self {
            http: HttpClient::new(endpoint),
        })
    }

    /// Connect to a local or otherwise custom deployment, skipping the
    /// public-cluster allow-list.
    pub fn new_local(endpoint: &str) -> Result<Self, ClientError> {
        if endpoint.is_empty() {
            return Err(ClientError::EmptyEndpoint);
        }
        Ok(Self {
            http: HttpClient::new(endpoint),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }

    /// Drop the pooled HTTP session and start a fresh one.
    pub fn refresh_http(&mut self) {
        self.http.refresh();
    }

    /// Generic dispatch: build the envelope for `method` and post it.
    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<RpcResponse, ClientError> {
        let data = self.http.build_data(method, params);
        self.http.send(&data).await
    }

    pub async fn get_account_info(&self, public_key: &Pubkey) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_ACCOUNT_INFO, json!([public_key])).await
    }

    pub async fn get_balance(&self, public_key: &Pubkey) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_BALANCE, json!([public_key])).await
    }

    pub async fn get_block(&self, slot: u64) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_BLOCK, json!([slot])).await
    }

    pub async fn get_block_height(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_BLOCK_HEIGHT, json!([null])).await
    }

    pub async fn get_block_production(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_BLOCK_PRODUCTION, json!([null])).await
    }

    pub async fn get_block_commitment(&self, block: u64) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_BLOCK_COMMITMENT, json!([block])).await
    }

    /// Confirmed blocks from `start_slot`, optionally bounded by
    /// `end_slot`; the second slot is only sent when given.
    pub async fn get_blocks(
        &self,
        start_slot: u64,
        end_slot: Option<u64>,
    ) -> Result<RpcResponse, ClientError> {
        let params = match end_slot {
            Some(end_slot) => json!([start_slot, end_slot]),
            None => json!([start_slot]),
        };
        self.call(methods::GET_BLOCKS, params).await
    }

    pub async fn get_blocks_with_limit(
        &self,
        start_slot: u64,
        limit: u64,
    ) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_BLOCKS_WITH_LIMIT, json!([start_slot, limit])).await
    }

    pub async fn get_block_time(&self, block: u64) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_BLOCK_TIME, json!([block])).await
    }

    pub async fn get_cluster_nodes(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_CLUSTER_NODES, json!([null])).await
    }

    pub async fn get_epoch_info(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_EPOCH_INFO, json!([null])).await
    }

    pub async fn get_epoch_schedule(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_EPOCH_SCHEDULE, json!([null])).await
    }

    pub async fn get_fee_for_message(&self, message: &str) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_FEE_FOR_MESSAGE, json!([message])).await
    }

    /// Deprecated upstream in favor of `getFeeForMessage`; kept while
    /// public clusters still answer it.
    pub async fn get_fees(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_FEES, json!([null])).await
    }

    pub async fn get_first_available_block(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_FIRST_AVAILABLE_BLOCK, json!([null])).await
    }

    pub async fn get_genesis_hash(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_GENESIS_HASH, json!([null])).await
    }

    pub async fn get_health(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_HEALTH, json!([null])).await
    }

    pub async fn get_supply(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_SUPPLY, json!([null])).await
    }

    pub async fn get_identity(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_IDENTITY, json!([null])).await
    }

    pub async fn get_transaction(&self, signature: &str) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_TRANSACTION, json!([signature])).await
    }

    /// Deprecated upstream; still the blockhash source for
    /// [`Client::send_transaction`].
    pub async fn get_recent_blockhash(&self) -> Result<RpcResponse, ClientError> {
        self.call(methods::GET_RECENT_BLOCKHASH, json!([null])).await
    }

    /// Token accounts owned by `owner`, selected by mint or by token
    /// program. Encoding defaults to `jsonParsed`.
    pub async fn get_token_accounts_by_owner(
        &self,
        owner: &Pubkey,
        filter: TokenAccountsFilter,
        encoding: Option<Encoding>,
    ) -> Result<RpcResponse, ClientError> {
        let encoding = encoding.unwrap_or_default();
        self.call(
            methods::GET_TOKEN_ACCOUNTS_BY_OWNER,
            json!([
                owner,
                filter.to_param(),
                { "encoding": encoding.as_str() }
            ]),
        )
        .await
    }

    pub async fn request_airdrop(
        &self,
        public_key: &Pubkey,
        lamports: u64,
    ) -> Result<RpcResponse, ClientError> {
        self.call(methods::REQUEST_AIRDROP, json!([public_key, lamports])).await
    }

    /// Submit a signed transaction.
    ///
    /// The one operation with a cross-call dependency: when the
    /// transaction carries no recent blockhash, a `getRecentBlockhash`
    /// round trip resolves one and applies it before signing. A
    /// blockhash already present is used as-is.
    pub async fn send_transaction<T: Transaction>(
        &self,
        transaction: &mut T,
    ) -> Result<RpcResponse, ClientError> {
        if transaction.recent_blockhash().is_none() {
            let response = self.get_recent_blockhash().await?;
            let blockhash = response
                .result
                .as_ref()
                .and_then(|result| result.pointer("/value/blockhash"))
                .and_then(|value| value.as_str())
                .ok_or(ClientError::MissingBlockhash)?;
            transaction.set_recent_blockhash(blockhash.to_string());
        }

        transaction.sign();
        let encoded = BASE64_STANDARD.encode(transaction.serialize());

        self.call(
            methods::SEND_TRANSACTION,
            json!([encoded, { "encoding": "base64" }]),
        )
        .await
    }
}
