//! The shared connection to the remote API.
//!
//! # Design
//! `Transport` is the only place that performs I/O. `UreqTransport` wraps a
//! single `ureq::Agent` created once at startup; its idle pool is capped at
//! one connection per host so every call reuses the same socket when the
//! server allows keep-alive. HTTP status codes are returned as data and
//! interpreted by the client, never raised here.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

use tracing::{error, info};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one request over the shared connection.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by `ureq`.
pub struct UreqTransport {
    agent: ureq::Agent,
    base_url: String,
    debug_level: AtomicU8,
}

impl UreqTransport {
    /// Build the agent for `config`. No socket is opened until the first send.
    pub fn connect(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url();
        let parsed = Url::parse(&base_url).map_err(|e| {
            error!(base_url = %base_url, error = %e, "invalid API address");
            ApiError::Transport(format!("invalid API address {base_url}: {e}"))
        })?;
        if parsed.host_str().is_none() {
            error!(base_url = %base_url, "API address has no host");
            return Err(ApiError::Transport(format!("API address {base_url} has no host")));
        }

        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .max_idle_connections_per_host(1)
            .build()
            .new_agent();

        Ok(Self {
            agent,
            base_url,
            debug_level: AtomicU8::new(config.debug_level),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn debug_level(&self) -> u8 {
        self.debug_level.load(Ordering::Relaxed)
    }

    pub fn set_debug_level(&self, level: u8) {
        self.debug_level.store(level, Ordering::Relaxed);
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ureq::Error> {
        let url = format!("{}{}", self.base_url, request.path);
        let headers = request.headers.as_slice();

        let mut response = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&url), headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&url), headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&url), headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&url), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(&url), headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(&url), headers).send_empty(),
        }?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (name.as_str().to_string(), value.to_str().unwrap_or_default().to_string())
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport")
            .field("base_url", &self.base_url)
            .field("debug_level", &self.debug_level())
            .finish_non_exhaustive()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let level = self.debug_level();
        if level > 0 {
            info!(method = request.method.as_str(), path = %request.path, "sending request");
        }

        let response = self.execute(request).map_err(|e| {
            error!(method = request.method.as_str(), path = %request.path, error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        if level > 0 {
            info!(status = response.status, reason = %response.reason, "received response");
        }
        if level > 1 {
            for (name, value) in &response.headers {
                info!(header = %name, value = %value, "response header");
            }
        }
        Ok(response)
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
