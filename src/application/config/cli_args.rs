use clap::Parser;

use super::rpc_host::RpcHost;
use crate::application::json_rpc::core::error::ConfigError;

/// Connection settings for elementsd.
///
/// Every flag falls back to its `ELEMENTSD_*` environment variable, then to
/// the regtest defaults.
#[derive(clap::Args, Clone, PartialEq, Eq)]
pub struct ElementsdArgs {
    /// Host name or address of the daemon.
    #[clap(long, env = "ELEMENTSD_HOST", default_value = "localhost")]
    pub host: String,

    /// JSON-RPC port.
    #[clap(long, env = "ELEMENTSD_RPCPORT", default_value = "16885")]
    pub rpcport: u16,

    /// Peer-to-peer port. Not used for RPC.
    #[clap(long, env = "ELEMENTSD_PORT", default_value = "16886")]
    pub port: u16,

    #[clap(long, env = "ELEMENTSD_USER", default_value = "user3")]
    pub user: String,

    #[clap(
        long,
        env = "ELEMENTSD_PASS",
        default_value = "password3",
        hide_env_values = true
    )]
    pub pass: String,
}

impl std::fmt::Debug for ElementsdArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementsdArgs")
            .field("host", &self.host)
            .field("rpcport", &self.rpcport)
            .field("port", &self.port)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

impl ElementsdArgs {
    pub fn rpc_host(&self) -> RpcHost {
        RpcHost {
            host: self.host.clone(),
            rpcport: self.rpcport,
            user: self.user.clone(),
            pass: self.pass.clone(),
        }
    }
}

/// Reads [`ElementsdArgs`] with no command line, i.e. from the environment.
#[derive(Parser, Debug)]
#[clap(no_binary_name = true)]
struct EnvironmentOnly {
    #[clap(flatten)]
    elementsd: ElementsdArgs,
}

/// Settings of the client library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub elementsd: ElementsdArgs,
}

impl Configuration {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse_from(std::iter::empty::<String>())
    }

    fn parse_from<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        let parsed = EnvironmentOnly::try_parse_from(args)?;
        Ok(Self::from(parsed.elementsd))
    }

    pub fn rpc_host(&self) -> RpcHost {
        self.elementsd.rpc_host()
    }
}

impl From<ElementsdArgs> for Configuration {
    fn from(elementsd: ElementsdArgs) -> Self {
        Self { elementsd }
    }
}
