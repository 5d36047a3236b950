use crate::application::json_rpc::core::error::ElementsError;
use crate::application::json_rpc::core::error::RpcError;
use crate::application::json_rpc::core::error::RpcResult;
use crate::application::json_rpc::core::error::TransportError;

/// Classified result of a single RPC invocation.
///
/// Exactly one variant is populated. [`RpcOutcome::into_result`] turns it into
/// the `Result` every typed method returns, and `From<RpcResult<T>>` goes the
/// other way for callers that prefer to inspect the three cases.
#[derive(Debug)]
pub enum RpcOutcome<T> {
    Success(T),
    ApplicationError(ElementsError),
    TransportError(TransportError),
}

impl<T> RpcOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn map<U, F>(self, f: F) -> RpcOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => RpcOutcome::Success(f(value)),
            Self::ApplicationError(err) => RpcOutcome::ApplicationError(err),
            Self::TransportError(err) => RpcOutcome::TransportError(err),
        }
    }

    pub fn into_result(self) -> RpcResult<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::ApplicationError(err) => Err(RpcError::Application(err)),
            Self::TransportError(err) => Err(RpcError::Transport(err)),
        }
    }

    /// The payload, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::ApplicationError(_) | Self::TransportError(_) => None,
        }
    }
}

impl<T> From<RpcResult<T>> for RpcOutcome<T> {
    fn from(result: RpcResult<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(RpcError::Application(err)) => Self::ApplicationError(err),
            Err(RpcError::Transport(err)) => Self::TransportError(err),
        }
    }
}
