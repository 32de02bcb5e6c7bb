//! Command-line and environment settings for the report server.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{ArgAction, Parser};
use placeholder_core::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT};
use placeholder_core::ClientConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "report-server", about = "Serves jsonplaceholder user reports")]
pub struct ServerArgs {
    /// Remote API host.
    #[arg(long, env = "API_HOST", default_value = DEFAULT_HOST)]
    pub api_host: String,

    /// Use TLS for the remote API.
    #[arg(long, env = "API_TLS", default_value_t = true, action = ArgAction::Set)]
    pub api_tls: bool,

    #[arg(long, env = "API_PORT", default_value_t = DEFAULT_PORT)]
    pub api_port: u16,

    /// Bound on connect and I/O waits for each API call.
    #[arg(long, env = "API_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub api_timeout_secs: u64,

    /// 0 is silent, 1 logs request lines, 2 adds response headers.
    #[arg(long, env = "API_DEBUG_LEVEL", default_value_t = 0)]
    pub api_debug_level: u8,

    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:80")]
    pub listen: SocketAddr,
}

impl ServerArgs {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            host: self.api_host.clone(),
            tls: self.api_tls,
            port: self.api_port,
            timeout: Duration::from_secs(self.api_timeout_secs),
            debug_level: self.api_debug_level,
        }
    }
}
