use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Request body in the daemon's JSON-RPC 1.0 dialect.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Vec<Value>,
}

impl JsonRequest {
    pub const VERSION: &'static str = "1.0";

    pub fn new(id: u64, method: &str, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: Self::VERSION.to_string(),
            id,
            method: method.to_string(),
            params,
        }
    }
}

/// Reply envelope.
///
/// The daemon always sends both `result` and `error`, one of them `null`.
/// Both are optional here so a missing member is not a parse failure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JsonResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

impl JsonResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Option<Value>, code: i64, message: &str) -> Self {
        Self {
            result: None,
            error: Some(serde_json::json!({ "code": code, "message": message })),
            id,
        }
    }
}
