//! HTTP transport - posts JSON-RPC request bodies and decodes the reply.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::error::ClientError;
use crate::types::{RpcRequest, RpcResponse};

/// Transport collaborator for the RPC client.
///
/// Owns one `reqwest::Client` (connection pooling, TLS, and JSON
/// encoding live there) and hands out monotonically increasing request
/// ids. Safe for concurrent use from multiple tasks.
pub struct HttpClient {
    endpoint: String,
    client: reqwest::Client,
    request_id: AtomicU64,
}

impl HttpClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
            request_id: AtomicU64::new(1),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Replace the underlying session, dropping any pooled connections.
    pub fn refresh(&mut self) {
        self.client = reqwest::Client::new();
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Assemble a JSON-RPC 2.0 request body for `method`.
    pub fn build_data(&self, method: &str, params: serde_json::Value) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: self.next_id(),
        }
    }

    /// Post the request and decode the response envelope.
    ///
    /// A JSON-RPC error object in the reply is not an `Err`: it is
    /// returned inside the envelope for the caller to inspect.
    pub async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, ClientError> {
        debug!(method = %request.method, id = request.id, "sending RPC request");

        let response: RpcResponse = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = &response.error {
            warn!(code = error.code, message = %error.message, "RPC node returned an error");
        }

        Ok(response)
    }
}
