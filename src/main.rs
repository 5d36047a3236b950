use std::process;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use elements_rpc::application::config::cli_args::Configuration;
use elements_rpc::application::config::cli_args::ElementsdArgs;
use elements_rpc::application::json_rpc::binding;
use elements_rpc::application::json_rpc::core::api::args::Arg;
use elements_rpc::application::json_rpc::core::api::ops;
use elements_rpc::application::json_rpc::core::model::outcome::RpcOutcome;
use elements_rpc::units;
use serde_json::Value;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::FmtSubscriber;

/// Command-line client for an Elements daemon.
#[derive(Debug, Parser)]
#[clap(name = "elements-rpc-cli", author, version, about)]
struct Args {
    #[clap(flatten)]
    elementsd: ElementsdArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Invoke a daemon method by its wire name.
    ///
    /// Each parameter is read as JSON, or taken as a plain string when it is
    /// not valid JSON. `_` leaves a positional parameter unset.
    Call {
        method: String,

        #[clap(allow_hyphen_values = true, num_args = 0..)]
        params: Vec<String>,
    },

    /// List the methods with typed bindings and their parameters.
    Methods,

    /// Convert an amount in coins to the smallest unit.
    ToSat {
        #[clap(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Convert an amount in the smallest unit to coins.
    ToBtc {
        #[clap(allow_negative_numbers = true)]
        amount: f64,
    },
}

pub fn main() -> Result<()> {
    let args = Args::parse();
    set_up_logger()?;

    let code = match args.command {
        Command::Call { method, params } => {
            let config = Configuration::from(args.elementsd);
            let tokio_runtime = tokio::runtime::Builder::new_current_thread()
                .enable_io()
                .enable_time()
                .build()
                .context("Could not create tokio runtime")?;
            tokio_runtime.block_on(call(&config, &method, &params))?
        }
        Command::Methods => {
            print_methods();
            0
        }
        Command::ToSat { amount } => {
            println!("{}", units::btc_to_sat(amount));
            0
        }
        Command::ToBtc { amount } => {
            println!("{}", units::sat_to_btc(amount));
            0
        }
    };

    process::exit(code)
}

async fn call(config: &Configuration, method: &str, params: &[String]) -> Result<i32> {
    let client = binding::init_client(config);
    let args = params.iter().map(|param| parse_param(param)).collect();

    match client.invoke_outcome(method, args).await {
        RpcOutcome::Success(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(0)
        }
        RpcOutcome::ApplicationError(err) => {
            warn!(code = err.code, method, "elementsd rejected the call");
            eprintln!("error code: {}\nerror message:\n{}", err.code, err.message);
            Ok(1)
        }
        RpcOutcome::TransportError(err) => {
            Err(err).with_context(|| format!("calling {method} at {}", config.rpc_host().url()))
        }
    }
}

fn parse_param(param: &str) -> Arg {
    if param == "_" {
        return Arg::Unset;
    }
    serde_json::from_str(param)
        .map(Arg::Set)
        .unwrap_or_else(|_| Arg::Set(Value::String(param.to_string())))
}

fn print_methods() {
    for method in ops::ALL {
        let params: Vec<String> = method
            .params
            .iter()
            .map(|param| match param.default {
                ops::ParamDefault::Required => param.name.to_string(),
                default => format!("[{}={}]", param.name, default.to_value()),
            })
            .collect();
        println!("{} {}", method.name, params.join(" "));
    }
}

/// Configure logger to use ISO-8601, of which rfc3339 is a subset. Install
/// global collector configured based on RUST_LOG env var. Accepted `RUST_LOG`
/// values are `trace`, `debug`, `info`, `warn`, and `error`.
///
/// Logs go to stderr so that stdout carries only call results.
fn set_up_logger() -> Result<()> {
    let info_env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_env_filter(info_env_filter)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to set global default subscriber")
}
