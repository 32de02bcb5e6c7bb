//! Blocking client for the jsonplaceholder REST API.
//!
//! # Overview
//! Fetches users, posts, albums and photos over one shared connection and
//! joins them into a `UserReport`.
//!
//! # Design
//! - `Transport` is the only I/O seam. `UreqTransport` is the real one,
//!   built once from a `ClientConfig` and reused for every call.
//! - `JsonPlaceholder` owns the transport and splits every accessor into a
//!   pure `build_request` / `parse_collection` pair around one `send`.
//! - `ApiError` keeps not-found, transport and parse failures distinct so
//!   callers can choose how to surface each.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
mod report;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod stub;

pub use client::JsonPlaceholder;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{Album, ApiResponse, JoinKey, Photo, Post, Resource, User, UserReport};
