use std::future::Future;

use tokio::runtime::Builder;
use tokio::runtime::Runtime;

use crate::application::config::rpc_host::RpcHost;
use crate::application::json_rpc::binding::ElementsClient;
use crate::application::json_rpc::core::api::rpc::ElementsApi;

/// Runs [`ElementsApi`] calls to completion for synchronous callers.
///
/// Owns a current-thread runtime, so it must not be used from within another
/// tokio runtime.
///
/// ```no_run
/// # use elements_rpc::application::config::rpc_host::RpcHost;
/// # use elements_rpc::application::json_rpc::blocking::BlockingClient;
/// # use elements_rpc::application::json_rpc::core::api::rpc::ElementsApi;
/// # fn main() -> anyhow::Result<()> {
/// let host = RpcHost {
///     host: "localhost".to_string(),
///     rpcport: 16885,
///     user: "user3".to_string(),
///     pass: "password3".to_string(),
/// };
/// let client = BlockingClient::connect(&host)?;
/// let height = client.run(|api| api.get_block_count())?;
/// println!("{height}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BlockingClient<A> {
    runtime: Runtime,
    api: A,
}

impl BlockingClient<ElementsClient> {
    pub fn connect(host: &RpcHost) -> std::io::Result<Self> {
        Self::new(ElementsClient::connect(host))
    }
}

impl<A: ElementsApi> BlockingClient<A> {
    pub fn new(api: A) -> std::io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { runtime, api })
    }

    /// Blocks until the future built by `f` resolves.
    pub fn run<'a, F, Fut, R>(&'a self, f: F) -> R
    where
        F: FnOnce(&'a A) -> Fut,
        Fut: Future<Output = R>,
    {
        self.runtime.block_on(f(&self.api))
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}
