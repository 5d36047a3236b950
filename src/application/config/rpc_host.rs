use std::net::Ipv6Addr;

/// Where and how to reach the daemon's RPC interface.
#[derive(Clone, PartialEq, Eq)]
pub struct RpcHost {
    pub host: String,
    pub rpcport: u16,
    pub user: String,
    pub pass: String,
}

impl RpcHost {
    /// Endpoint URL, with trailing slash. IPv6 literals are bracketed.
    pub fn url(&self) -> String {
        if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("http://[{}]:{}/", self.host, self.rpcport)
        } else {
            format!("http://{}:{}/", self.host, self.rpcport)
        }
    }
}

impl std::fmt::Debug for RpcHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcHost")
            .field("host", &self.host)
            .field("rpcport", &self.rpcport)
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn host() -> RpcHost {
        RpcHost {
            host: "localhost".to_string(),
            rpcport: 16885,
            user: "user3".to_string(),
            pass: "hunter2".to_string(),
        }
    }

    #[test]
    fn url_has_scheme_port_and_trailing_slash() {
        assert_eq!(host().url(), "http://localhost:16885/");
    }

    #[test]
    fn ipv6_host_is_bracketed() {
        let loopback = RpcHost {
            host: "::1".to_string(),
            ..host()
        };
        assert_eq!(loopback.url(), "http://[::1]:16885/");

        let bracketed = RpcHost {
            host: "[fe80::1]".to_string(),
            ..host()
        };
        assert_eq!(bracketed.url(), "http://[fe80::1]:16885/");
    }

    #[test]
    fn debug_hides_password() {
        let printed = format!("{:?}", host());
        assert!(printed.contains("user3"));
        assert!(!printed.contains("hunter2"));
    }
}
