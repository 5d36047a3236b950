//! Re-exports the most commonly-needed APIs of elements-rpc.
//!
//! This module is intended to be wildcard-imported, _i.e._, `use elements_rpc::prelude::*;`.

pub use crate::application::config::cli_args::Configuration;
pub use crate::application::config::cli_args::ElementsdArgs;
pub use crate::application::config::rpc_host::RpcHost;
pub use crate::application::json_rpc::binding::client;
pub use crate::application::json_rpc::binding::init_client;
pub use crate::application::json_rpc::binding::switch_node;
pub use crate::application::json_rpc::binding::ElementsClient;
pub use crate::application::json_rpc::blocking::BlockingClient;
pub use crate::application::json_rpc::core::api::args::Arg;
pub use crate::application::json_rpc::core::api::client::http::HttpTransport;
pub use crate::application::json_rpc::core::api::client::transport::Transport;
pub use crate::application::json_rpc::core::api::rpc::ElementsApi;
pub use crate::application::json_rpc::core::error::ElementsError;
pub use crate::application::json_rpc::core::error::RpcError;
pub use crate::application::json_rpc::core::error::RpcResult;
pub use crate::application::json_rpc::core::error::TransportError;
pub use crate::application::json_rpc::core::model::outcome::RpcOutcome;
pub use crate::application::json_rpc::core::model::wallet::Balance;
