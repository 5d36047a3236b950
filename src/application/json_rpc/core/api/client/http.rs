use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::trace;

use crate::application::config::rpc_host::RpcHost;
use crate::application::json_rpc::core::api::client::transport::Transport;
use crate::application::json_rpc::core::error::TransportError;
use crate::application::json_rpc::core::error::TransportResult;
use crate::application::json_rpc::core::model::json::JsonRequest;
use crate::application::json_rpc::core::model::json::JsonResponse;

/// JSON-RPC over HTTP with basic authentication.
#[derive(Clone)]
pub struct HttpTransport {
    url: String,
    user: String,
    pass: String,
    client: Client,
    last_id: Arc<AtomicU64>,
}

impl HttpTransport {
    pub fn new(host: &RpcHost) -> Self {
        Self {
            url: host.url(),
            user: host.user.clone(),
            pass: host.pass.clone(),
            client: Client::new(),
            last_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Turns a reply body into the raw value handed to the classifier.
    ///
    /// The daemon reports application errors with a non-2xx status and a
    /// regular envelope, so the body is examined before the status.
    fn unpack(status: u16, body: &str) -> TransportResult<Value> {
        let envelope: JsonResponse = match serde_json::from_str(body) {
            Ok(envelope) => envelope,
            Err(_) if !(200..300).contains(&status) => {
                return Err(TransportError::Status {
                    status,
                    body: body.to_string(),
                })
            }
            Err(err) => return Err(TransportError::Parse(err)),
        };

        match envelope.error {
            Some(error) if is_error_object(&error) => Ok(error),
            Some(other) => Err(TransportError::Protocol(format!(
                "error member lacks an integer code and a message: {other}"
            ))),
            None => Ok(envelope.result.unwrap_or(Value::Null)),
        }
    }
}

/// Whether an envelope's `error` member has the shape the daemon reports
/// application errors in.
fn is_error_object(error: &Value) -> bool {
    error.get("code").is_some_and(Value::is_i64) && error.get("message").is_some()
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("last_id", &self.last_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, method: &str, params: Vec<Value>) -> TransportResult<Value> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst);
        let request = JsonRequest::new(id, method, params);

        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.user, Some(&self.pass))
            .json(&request)
            .send()
            .await
            .map_err(|source| TransportError::Connection {
                endpoint: self.url.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|source| TransportError::Connection {
                endpoint: self.url.clone(),
                source,
            })?;
        trace!(id, method, status, body = %body, "elementsd reply");

        Self::unpack(status, &body)
    }

    fn endpoint(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::application::json_rpc::core::api::classify::classify;

    #[test]
    fn endpoint_is_built_from_host() {
        let host = RpcHost {
            host: "10.0.0.7".to_string(),
            rpcport: 7041,
            user: "u".to_string(),
            pass: "p".to_string(),
        };
        assert_eq!(HttpTransport::new(&host).endpoint(), "http://10.0.0.7:7041/");
    }

    #[test]
    fn result_is_unpacked() {
        let raw = HttpTransport::unpack(200, r#"{"result":"abc","error":null,"id":0}"#).unwrap();
        assert_eq!(raw, json!("abc"));
    }

    #[test]
    fn null_and_missing_results_are_null() {
        let raw = HttpTransport::unpack(200, r#"{"result":null,"error":null,"id":0}"#).unwrap();
        assert_eq!(raw, Value::Null);
        let raw = HttpTransport::unpack(200, r#"{"error":null,"id":0}"#).unwrap();
        assert_eq!(raw, Value::Null);
    }

    #[test]
    fn error_envelope_on_500_is_returned_raw() {
        let body = r#"{"result":null,"error":{"code":-5,"message":"Invalid address"},"id":1}"#;
        let raw = HttpTransport::unpack(500, body).unwrap();
        assert_eq!(raw, json!({"code": -5, "message": "Invalid address"}));
    }

    #[test]
    fn non_json_error_page_is_a_status_error() {
        match HttpTransport::unpack(401, "") {
            Err(TransportError::Status { status, .. }) => assert_eq!(status, 401),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_json_success_is_a_parse_error() {
        assert!(matches!(
            HttpTransport::unpack(200, "<html>"),
            Err(TransportError::Parse(_))
        ));
    }

    #[test]
    fn error_without_integer_code_is_a_protocol_error() {
        let bodies = [
            r#"{"result":null,"error":{"message":"Work queue depth exceeded"},"id":0}"#,
            r#"{"result":null,"error":{"code":"-5","message":"Invalid address"},"id":0}"#,
            r#"{"result":null,"error":{"code":-5},"id":0}"#,
        ];
        for body in bodies {
            let raw = HttpTransport::unpack(500, body);
            assert!(matches!(raw, Err(TransportError::Protocol(_))), "{body}");
            assert!(!classify(raw).is_success(), "{body}");
        }
    }

    #[test]
    fn scalar_error_member_is_a_protocol_error() {
        assert!(matches!(
            HttpTransport::unpack(200, r#"{"result":null,"error":"boom","id":0}"#),
            Err(TransportError::Protocol(_))
        ));
    }
}
