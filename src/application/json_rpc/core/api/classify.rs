use serde_json::Value;

use crate::application::json_rpc::core::error::ElementsError;
use crate::application::json_rpc::core::error::TransportResult;
use crate::application::json_rpc::core::model::outcome::RpcOutcome;

/// Sorts a raw reply into success, daemon error or transport error.
///
/// Only an object carrying an integer `code` next to a `message` is a daemon
/// error. Falsy scalars (`0`, `false`, `""`) and `null` are successful
/// payloads; nothing here tests for "truthiness".
pub fn classify(raw: TransportResult<Value>) -> RpcOutcome<Value> {
    let value = match raw {
        Ok(value) => value,
        Err(err) => return RpcOutcome::TransportError(err),
    };

    match application_error(&value) {
        Some(err) => RpcOutcome::ApplicationError(err),
        None => RpcOutcome::Success(value),
    }
}

fn application_error(value: &Value) -> Option<ElementsError> {
    let object = value.as_object()?;
    let code = object.get("code")?.as_i64()?;
    let message = match object.get("message")? {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    };
    Some(ElementsError { code, message })
}
