//! Error types for the jsonplaceholder client.
//!
//! # Design
//! `NotFound`, `Transport` and `Parse` are kept apart so the endpoint layer
//! can pick a status code per cause. None of them is retried.

use thiserror::Error;

/// Errors returned by `JsonPlaceholder` accessors and the report aggregator.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A filtered lookup matched no records, or the server returned 404.
    #[error("resource not found")]
    NotFound,

    /// Network, timeout or protocol failure on the shared connection.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body was not JSON, or lacked a contract field.
    #[error("parse failed: {0}")]
    Parse(String),

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },
}
