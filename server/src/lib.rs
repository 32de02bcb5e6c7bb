//! HTTP endpoint serving user reports.
//!
//! # Design
//! The one `JsonPlaceholder` client is built at startup and injected as
//! router state; handlers never construct their own. The client blocks, so
//! each request runs it on tokio's blocking pool. Requests share the client
//! without extra locking.

pub mod config;
pub mod error;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use placeholder_core::{ApiError, JsonPlaceholder, Transport, UserReport};
use tokio::net::TcpListener;
use tracing::info;

pub use error::AppError;

pub fn app<T: Transport + 'static>(client: Arc<JsonPlaceholder<T>>) -> Router {
    Router::new()
        .route("/users/{id}", get(get_user_report::<T>))
        .with_state(client)
}

pub async fn run<T: Transport + 'static>(
    listener: TcpListener,
    client: Arc<JsonPlaceholder<T>>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(client)).await
}

/// Resolve `id` to a user, then build the report for that user's email.
///
/// Only a missing user maps to `UserNotFound`; every other failure,
/// including a vanished email during aggregation, is `Upstream`.
pub fn user_report<T: Transport>(
    client: &JsonPlaceholder<T>,
    id: &str,
) -> Result<UserReport, AppError> {
    let user = match client.get_user_by_id(id) {
        Ok(response) => response.body,
        Err(ApiError::NotFound) => return Err(AppError::UserNotFound),
        Err(e) => return Err(e.into()),
    };
    Ok(client.build_user_report(&user.email().to_string())?)
}

async fn get_user_report<T: Transport + 'static>(
    State(client): State<Arc<JsonPlaceholder<T>>>,
    Path(id): Path<String>,
) -> Result<Json<UserReport>, AppError> {
    info!(id = %id, "user report requested");
    let report = tokio::task::spawn_blocking(move || user_report(&client, &id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(Json(report))
}
