use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::json_rpc::core::api::client::transport::Transport;
use crate::application::json_rpc::core::error::TransportError;
use crate::application::json_rpc::core::error::TransportResult;

type Call = (String, Vec<Value>);

enum Reply {
    Fixed(Value),
    PerMethod(HashMap<String, Value>),
    Failing(fn() -> TransportError),
}

/// In-memory [`Transport`] that records every call and answers from a script.
pub struct MockTransport {
    name: String,
    reply: Reply,
    calls: Mutex<Vec<Call>>,
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl MockTransport {
    fn with_reply(reply: Reply) -> Self {
        Self {
            name: "mock".to_string(),
            reply,
            calls: Mutex::new(vec![]),
        }
    }

    /// Answers every call with `value`.
    pub fn replying(value: Value) -> Self {
        Self::with_reply(Reply::Fixed(value))
    }

    /// Answers each method with its own value, `null` for unlisted ones.
    pub fn scripted<'a>(replies: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        let replies = replies
            .into_iter()
            .map(|(method, value)| (method.to_string(), value))
            .collect();
        Self::with_reply(Reply::PerMethod(replies))
    }

    /// Fails every call with the error `make` builds.
    pub fn failing(make: fn() -> TransportError) -> Self {
        Self::with_reply(Reply::Failing(make))
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<Call> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn call(&self, method: &str, params: Vec<Value>) -> TransportResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params));

        match &self.reply {
            Reply::Fixed(value) => Ok(value.clone()),
            Reply::PerMethod(replies) => Ok(replies.get(method).cloned().unwrap_or(Value::Null)),
            Reply::Failing(make) => Err(make()),
        }
    }

    fn endpoint(&self) -> String {
        self.name.clone()
    }
}
