//! Wire types for the Solana cluster JSON-RPC interface.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// Standard JSON-RPC request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: u64,
}

/// Standard JSON-RPC response
///
/// Returned to callers verbatim: this crate never interprets `result`
/// or `error` beyond decoding the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
    pub id: u64,
}

/// JSON-RPC error object carried inside a response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// A Solana account public key, base58-encoded
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pubkey(pub String);

impl Pubkey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Pubkey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for Pubkey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Account data encoding accepted by token-account queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    Base58,
    Base64,
    #[default]
    JsonParsed,
}

impl Encoding {
    /// The literal the cluster API expects in the options map.
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Base58 => "base58",
            Encoding::Base64 => "base64",
            Encoding::JsonParsed => "jsonParsed",
        }
    }
}

/// Selector for `getTokenAccountsByOwner`.
///
/// The cluster API takes exactly one of a mint or a token-program id;
/// making the choice a required enum rules out the neither-selector
/// call at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenAccountsFilter {
    /// Restrict to accounts of this mint.
    Mint(Pubkey),
    /// Restrict to accounts owned by this token program.
    Program(Pubkey),
}

impl TokenAccountsFilter {
    /// The one-key options map sent as the second positional parameter.
    pub(crate) fn to_param(&self) -> serde_json::Value {
        match self {
            TokenAccountsFilter::Mint(mint) => json!({ "mint": mint }),
            TokenAccountsFilter::Program(program) => json!({ "programId": program }),
        }
    }
}
