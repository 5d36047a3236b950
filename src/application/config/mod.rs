pub mod cli_args;
pub mod rpc_host;
