pub mod args;
pub mod classify;
pub mod client;
pub mod dispatch;
pub mod ops;
pub mod rpc;
