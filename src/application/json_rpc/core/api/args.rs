use serde::Serialize;
use serde_json::Value;

use crate::application::json_rpc::core::api::ops::ParamDefault;
use crate::application::json_rpc::core::error::TransportError;
use crate::application::json_rpc::core::error::TransportResult;

/// One positional argument of an invocation.
///
/// `Unset` means the caller did not provide the argument at all. It is
/// different from `Set(Value::Null)`, which is an explicit `null` and always
/// reaches the daemon.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Unset,
    Set(Value),
}

impl Arg {
    pub fn new<T: Serialize + ?Sized>(value: &T) -> TransportResult<Self> {
        serde_json::to_value(value)
            .map(Self::Set)
            .map_err(TransportError::Encode)
    }

    /// `None` becomes [`Arg::Unset`].
    pub fn optional<T: Serialize>(value: Option<T>) -> TransportResult<Self> {
        match value {
            Some(value) => Self::new(&value),
            None => Ok(Self::Unset),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Set(value)
    }
}

/// Produces the positional parameter list sent to the daemon.
///
/// The trailing run of unset arguments is dropped, because the daemon fills
/// omitted trailing parameters itself. An unset argument followed by a set
/// one cannot be omitted, so it is replaced by the default at that position
/// in `defaults`, or `null` when no default is known.
pub fn trim_args(args: Vec<Arg>, defaults: &[ParamDefault]) -> Vec<Value> {
    let provided = args
        .iter()
        .rposition(|arg| !arg.is_unset())
        .map_or(0, |last| last + 1);

    args.into_iter()
        .take(provided)
        .enumerate()
        .map(|(position, arg)| match arg {
            Arg::Set(value) => value,
            Arg::Unset => defaults
                .get(position)
                .map_or(Value::Null, |default| default.to_value()),
        })
        .collect()
}
