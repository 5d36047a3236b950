use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;

use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::post;
use axum::Json;
use axum::Router;
use elements_rpc::application::config::cli_args::Configuration;
use elements_rpc::application::config::cli_args::ElementsdArgs;
use elements_rpc::application::config::rpc_host::RpcHost;
use elements_rpc::application::json_rpc::core::model::json::JsonResponse;
use serde_json::json;
use serde_json::Value;
use tokio::net::TcpListener;

/// `Basic` credentials for `user3:password3`.
const AUTHORIZATION: &str = "Basic dXNlcjM6cGFzc3dvcmQz";

#[derive(Debug)]
struct DaemonState {
    block_count: u64,
    requests: Mutex<Vec<Value>>,
}

/// An in-process HTTP server that answers like elementsd on regtest.
///
/// Application errors come back with HTTP 500 and unknown methods with
/// HTTP 404, each with a regular JSON-RPC envelope, as the daemon does.
#[derive(Debug)]
pub struct MockElementsd {
    addr: SocketAddr,
    state: Arc<DaemonState>,
}

impl MockElementsd {
    /// Starts a daemon whose chain is `block_count` blocks high.
    pub async fn start(block_count: u64) -> anyhow::Result<Self> {
        let state = Arc::new(DaemonState {
            block_count,
            requests: Mutex::new(vec![]),
        });
        let app = Router::new()
            .route("/", post(rpc))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move { axum::serve(listener, app).await });

        Ok(Self { addr, state })
    }

    pub fn rpc_host(&self) -> RpcHost {
        RpcHost {
            host: self.addr.ip().to_string(),
            rpcport: self.addr.port(),
            user: "user3".to_string(),
            pass: "password3".to_string(),
        }
    }

    pub fn configuration(&self) -> Configuration {
        let host = self.rpc_host();
        Configuration::from(ElementsdArgs {
            host: host.host,
            rpcport: host.rpcport,
            port: 0,
            user: host.user,
            pass: host.pass,
        })
    }

    /// Every request body received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Value {
        self.requests().last().cloned().unwrap_or(Value::Null)
    }
}

fn application_error(status: StatusCode, id: &Value, code: i64, message: &str) -> Response {
    let envelope = JsonResponse::error(Some(id.clone()), code, message);
    (status, Json(envelope)).into_response()
}

async fn rpc(
    State(state): State<Arc<DaemonState>>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> Response {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .is_some_and(|value| value == AUTHORIZATION);
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    state.requests.lock().unwrap().push(request.clone());

    let id = request["id"].clone();
    let params = request["params"].as_array().cloned().unwrap_or_default();
    let result = match request["method"].as_str().unwrap_or_default() {
        "getblockcount" => json!(state.block_count),
        "getblockhash" => {
            let height = params.first().and_then(Value::as_u64).unwrap_or_default();
            json!(format!("{height:064x}"))
        }
        "getbalance" if params.len() >= 4 => json!(0.25),
        "getbalance" => json!({"bitcoin": 1.5, "L-USD": 20.0}),
        "listsinceblock" => json!({"transactions": [], "removed": [], "lastblock": "00ff"}),
        "submitblock" => Value::Null,
        "getaddressinfo" => {
            return application_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                &id,
                -5,
                "Invalid address",
            )
        }
        _ => return application_error(StatusCode::NOT_FOUND, &id, -32601, "Method not found"),
    };

    let envelope = JsonResponse::success(Some(id), result);
    (StatusCode::OK, Json(envelope)).into_response()
}
