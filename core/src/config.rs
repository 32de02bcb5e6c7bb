//! Connection settings for the remote API.

use std::time::Duration;

pub const DEFAULT_HOST: &str = "jsonplaceholder.typicode.com";
pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Host, port, TLS flag, timeout and debug verbosity of the shared connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub tls: bool,
    pub port: u16,
    pub timeout: Duration,
    pub debug_level: u8,
}

impl ClientConfig {
    /// `scheme://host:port` with no trailing slash.
    pub fn base_url(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!("{scheme}://{}:{}", self.host, self.port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            tls: true,
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
            debug_level: 0,
        }
    }
}
