//! Client error types.

use thiserror::Error;

/// Errors raised locally by the client.
///
/// Remote JSON-RPC error objects are *not* translated into this type;
/// they ride back to the caller inside [`crate::RpcResponse::error`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// Endpoint is not one of the known public cluster URLs.
    #[error(
        "invalid cluster RPC endpoint `{0}` \
         (refer to https://docs.solana.com/cluster/rpc-endpoints, \
         or use Client::new_local for a custom deployment)"
    )]
    InvalidEndpoint(String),

    /// A local client still needs somewhere to connect to.
    #[error("endpoint URL must not be empty")]
    EmptyEndpoint,

    /// `getRecentBlockhash` answered without a `result.value.blockhash`.
    #[error("blockhash query returned no `result.value.blockhash` field")]
    MissingBlockhash,

    /// Network failure or an undecodable response body, straight from
    /// the transport.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),
}
