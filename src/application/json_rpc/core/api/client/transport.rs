use async_trait::async_trait;
use serde_json::Value;

use crate::application::json_rpc::core::error::TransportResult;

/// Sends one positional JSON-RPC call to a daemon.
///
/// `Ok` carries the raw reply: the envelope's `result` when the call
/// succeeded, or its `error` object when the daemon rejected it. Sorting the
/// two apart is left to [`classify`](crate::application::json_rpc::core::api::classify::classify).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, method: &str, params: Vec<Value>) -> TransportResult<Value>;

    /// Human readable description of the remote end, for logs.
    fn endpoint(&self) -> String;
}

impl std::fmt::Debug for dyn Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Transport({})", self.endpoint())
    }
}
