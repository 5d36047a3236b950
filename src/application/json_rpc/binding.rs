use std::sync::Arc;
use std::sync::OnceLock;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::application::config::cli_args::Configuration;
use crate::application::config::rpc_host::RpcHost;
use crate::application::json_rpc::core::api::args::Arg;
use crate::application::json_rpc::core::api::client::http::HttpTransport;
use crate::application::json_rpc::core::api::client::transport::Transport;
use crate::application::json_rpc::core::api::dispatch;
use crate::application::json_rpc::core::api::ops;
use crate::application::json_rpc::core::api::ops::MethodDescriptor;
use crate::application::json_rpc::core::api::rpc::ElementsApi;
use crate::application::json_rpc::core::error::ConfigError;
use crate::application::json_rpc::core::error::RpcResult;
use crate::application::json_rpc::core::model::outcome::RpcOutcome;
use crate::application::locks::tokio::AtomicRw;

/// A daemon client whose endpoint can be replaced while it is in use.
///
/// The active transport is an immutable snapshot. Each invocation takes the
/// snapshot once and performs the whole exchange with it, so a call that
/// overlaps [`ElementsClient::switch_node`] talks to either the old or the
/// new node, never a mix of the two.
#[derive(Debug, Clone)]
pub struct ElementsClient {
    transport: AtomicRw<Arc<dyn Transport>>,
}

impl ElementsClient {
    pub fn connect(host: &RpcHost) -> Self {
        Self::from_transport(Arc::new(HttpTransport::new(host)))
    }

    pub fn from_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: AtomicRw::from((transport, Some("elementsd-transport"))),
        }
    }

    /// Retargets the client at the node described by `config`.
    pub async fn switch_node(&self, config: &Configuration) {
        let transport = HttpTransport::new(&config.rpc_host());
        self.switch_transport(Arc::new(transport)).await;
    }

    /// Replaces the active transport. Calls already in flight finish on the
    /// transport they started with.
    pub async fn switch_transport(&self, transport: Arc<dyn Transport>) {
        let to = transport.endpoint();
        let previous = self
            .transport
            .lock_mut(|current| std::mem::replace(current, transport))
            .await;
        info!(from = %previous.endpoint(), to = %to, "switched elementsd node");
    }

    /// The transport calls are currently dispatched to.
    pub async fn snapshot(&self) -> Arc<dyn Transport> {
        self.transport.lock(Arc::clone).await
    }

    pub async fn endpoint(&self) -> String {
        self.snapshot().await.endpoint()
    }

    /// Untyped call by wire name, with interior defaults taken from the
    /// method table when `method` is listed there.
    pub async fn invoke_outcome(&self, method: &str, args: Vec<Arg>) -> RpcOutcome<Value> {
        let defaults = ops::lookup(method)
            .map(|descriptor| descriptor.defaults())
            .unwrap_or_default();
        let transport = self.snapshot().await;
        dispatch::invoke_outcome(transport.as_ref(), method, args, &defaults).await
    }
}

#[async_trait]
impl ElementsApi for ElementsClient {
    async fn invoke_method<R>(&self, method: &MethodDescriptor, args: Vec<Arg>) -> RpcResult<R>
    where
        R: DeserializeOwned + Send,
    {
        let transport = self.snapshot().await;
        dispatch::invoke(transport.as_ref(), method, args).await
    }
}

static CLIENT: OnceLock<ElementsClient> = OnceLock::new();

/// The process-wide client.
///
/// Bound on first use from the `ELEMENTSD_*` environment, unless
/// [`init_client`] or [`switch_node`] bound it earlier. It lives for the rest
/// of the process.
pub fn client() -> Result<&'static ElementsClient, ConfigError> {
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let config = Configuration::from_env()?;
    Ok(init_client(&config))
}

/// Binds the process-wide client to `config`.
///
/// Has no effect once the client is bound; use [`switch_node`] to move it.
pub fn init_client(config: &Configuration) -> &'static ElementsClient {
    CLIENT.get_or_init(|| ElementsClient::connect(&config.rpc_host()))
}

/// Points the process-wide client at another node, binding it if needed.
pub async fn switch_node(config: &Configuration) -> &'static ElementsClient {
    match CLIENT.get() {
        Some(client) => {
            client.switch_node(config).await;
            client
        }
        None => init_client(config),
    }
}
