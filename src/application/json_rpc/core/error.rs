use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Error codes the daemon uses to report application failures.
///
/// The list mirrors the daemon's `rpc/protocol.h`. Codes not listed here are
/// still carried verbatim by [`ElementsError`].
#[repr(i64)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcErrorCode {
    InvalidRequest = -32600,
    MethodNotFound = -32601,
    InvalidParams = -32602,
    InternalError = -32603,
    ParseError = -32700,

    MiscError = -1,
    TypeError = -3,
    WalletError = -4,
    InvalidAddressOrKey = -5,
    WalletInsufficientFunds = -6,
    OutOfMemory = -7,
    InvalidParameter = -8,
    ClientNotConnected = -9,
    ClientInInitialDownload = -10,
    WalletInvalidLabelName = -11,
    WalletKeypoolRanOut = -12,
    WalletUnlockNeeded = -13,
    WalletPassphraseIncorrect = -14,
    WalletWrongEncState = -15,
    WalletEncryptionFailed = -16,
    WalletAlreadyUnlocked = -17,
    WalletNotFound = -18,
    WalletNotSpecified = -19,
    DatabaseError = -20,
    DeserializationError = -22,
    VerifyError = -25,
    VerifyRejected = -26,
    VerifyAlreadyInChain = -27,
    InWarmup = -28,
    MethodDeprecated = -32,
}

impl RpcErrorCode {
    pub fn from_code(code: i64) -> Option<Self> {
        let kind = match code {
            -32600 => Self::InvalidRequest,
            -32601 => Self::MethodNotFound,
            -32602 => Self::InvalidParams,
            -32603 => Self::InternalError,
            -32700 => Self::ParseError,
            -1 => Self::MiscError,
            -3 => Self::TypeError,
            -4 => Self::WalletError,
            -5 => Self::InvalidAddressOrKey,
            -6 => Self::WalletInsufficientFunds,
            -7 => Self::OutOfMemory,
            -8 => Self::InvalidParameter,
            -9 => Self::ClientNotConnected,
            -10 => Self::ClientInInitialDownload,
            -11 => Self::WalletInvalidLabelName,
            -12 => Self::WalletKeypoolRanOut,
            -13 => Self::WalletUnlockNeeded,
            -14 => Self::WalletPassphraseIncorrect,
            -15 => Self::WalletWrongEncState,
            -16 => Self::WalletEncryptionFailed,
            -17 => Self::WalletAlreadyUnlocked,
            -18 => Self::WalletNotFound,
            -19 => Self::WalletNotSpecified,
            -20 => Self::DatabaseError,
            -22 => Self::DeserializationError,
            -25 => Self::VerifyError,
            -26 => Self::VerifyRejected,
            -27 => Self::VerifyAlreadyInChain,
            -28 => Self::InWarmup,
            -32 => Self::MethodDeprecated,
            _ => return None,
        };
        Some(kind)
    }

    pub fn code(self) -> i64 {
        self as i64
    }
}

/// A failure the daemon reported after executing the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("elements error {code}: {message}")]
pub struct ElementsError {
    pub code: i64,
    pub message: String,
}

impl ElementsError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The well-known kind of this error, if the code is one the daemon documents.
    pub fn kind(&self) -> Option<RpcErrorCode> {
        RpcErrorCode::from_code(self.code)
    }
}

/// A call that could not be completed as a well-formed RPC exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to reach {endpoint}: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("daemon answered with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response envelope: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("protocol violation: {0}")]
    Protocol(String),

    #[error("could not encode argument: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("unexpected result shape: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Outcome of a typed call: either the daemon rejected it or it never completed.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Application(#[from] ElementsError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl RpcError {
    /// The daemon's error, when this is an application failure.
    pub fn as_application(&self) -> Option<&ElementsError> {
        match self {
            Self::Application(err) => Some(err),
            Self::Transport(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

pub type RpcResult<T> = Result<T, RpcError>;
pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid elementsd configuration: {0}")]
    Environment(#[from] clap::Error),
}
