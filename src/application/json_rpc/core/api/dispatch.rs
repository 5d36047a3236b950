use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use tracing::trace;

use crate::application::json_rpc::core::api::args::trim_args;
use crate::application::json_rpc::core::api::args::Arg;
use crate::application::json_rpc::core::api::classify::classify;
use crate::application::json_rpc::core::api::client::transport::Transport;
use crate::application::json_rpc::core::api::ops::MethodDescriptor;
use crate::application::json_rpc::core::api::ops::ParamDefault;
use crate::application::json_rpc::core::error::RpcResult;
use crate::application::json_rpc::core::error::TransportError;
use crate::application::json_rpc::core::model::outcome::RpcOutcome;

/// Calls `method` and classifies the reply, without decoding it.
///
/// Errors from the transport come back as [`RpcOutcome::TransportError`];
/// nothing is retried.
pub async fn invoke_outcome<T>(
    transport: &T,
    method: &str,
    args: Vec<Arg>,
    defaults: &[ParamDefault],
) -> RpcOutcome<Value>
where
    T: Transport + ?Sized,
{
    let params = trim_args(args, defaults);
    debug!(
        method,
        arity = params.len(),
        endpoint = %transport.endpoint(),
        "invoking elementsd"
    );

    let raw = transport.call(method, params).await;
    trace!(method, raw = ?raw, "raw reply");

    classify(raw)
}

/// Calls `method` with untyped arguments and no parameter table.
pub async fn invoke_raw<T>(transport: &T, method: &str, args: Vec<Arg>) -> RpcResult<Value>
where
    T: Transport + ?Sized,
{
    invoke_outcome(transport, method, args, &[])
        .await
        .into_result()
}

/// Calls a method from the table and decodes the payload into `R`.
///
/// A payload that does not fit `R` is a [`TransportError::Decode`]: the
/// exchange completed but did not have the agreed shape.
pub async fn invoke<T, R>(
    transport: &T,
    method: &MethodDescriptor,
    args: Vec<Arg>,
) -> RpcResult<R>
where
    T: Transport + ?Sized,
    R: DeserializeOwned,
{
    let value = invoke_outcome(transport, method.name, args, &method.defaults())
        .await
        .into_result()?;

    serde_json::from_value(value)
        .map_err(TransportError::Decode)
        .map_err(Into::into)
}
