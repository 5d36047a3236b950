pub mod block;
pub mod common;
pub mod json;
pub mod outcome;
pub mod raw_transaction;
pub mod wallet;
