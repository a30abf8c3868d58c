//! HTTP Server for the Schema Registry
//!
//! A thin adapter over [`SchemaRegistry`]: request bodies pass straight
//! through to the registry, and the registry's error kinds map onto HTTP
//! status codes by a single exhaustive dispatch.
//!
//! ## Endpoints
//!
//! - `POST /schema/:id` - upload a schema (201 on success)
//! - `GET  /schema/:id` - download the stored schema bytes
//! - `POST /validate/:id` - validate the request body against a schema

use crate::config::ServerConfig;
use crate::error::SchemaError;
use crate::registry::SchemaRegistry;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Operation named in the response envelope
#[derive(Debug, Clone, Copy, Serialize)]
enum Action {
    #[serde(rename = "uploadSchema")]
    UploadSchema,
    #[serde(rename = "downloadSchema")]
    DownloadSchema,
    #[serde(rename = "validateDocument")]
    ValidateDocument,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum ApiStatus {
    Success,
    Error,
}

/// Response envelope shared by all endpoints
#[derive(Debug, Serialize)]
struct ApiResponse {
    action: Action,
    id: String,
    status: ApiStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ApiResponse {
    fn success(action: Action, id: &str) -> Self {
        Self {
            action,
            id: id.to_string(),
            status: ApiStatus::Success,
            message: None,
        }
    }

    fn error(action: Action, id: &str, message: String) -> Self {
        Self {
            action,
            id: id.to_string(),
            status: ApiStatus::Error,
            message: Some(message),
        }
    }
}

/// Schema Registry HTTP server
pub struct SchemaServer {
    registry: Arc<SchemaRegistry>,
    config: ServerConfig,
}

impl SchemaServer {
    /// Create a new server for the given registry
    pub fn new(registry: SchemaRegistry, config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config,
        }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/schema/:id", post(upload_schema).get(download_schema))
            .route("/validate/:id", post(validate_document))
            .with_state(self.registry.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until Ctrl+C or SIGTERM
    pub async fn run(self) -> anyhow::Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Schema Registry listening on http://{}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Schema Registry stopped");
        Ok(())
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn upload_schema(
    State(registry): State<Arc<SchemaRegistry>>,
    Path(id): Path<String>,
    body: Bytes,
) -> (StatusCode, Json<ApiResponse>) {
    match registry.create_schema(&id, &body).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(Action::UploadSchema, &id)),
        ),
        Err(e) => error_response(Action::UploadSchema, &id, e),
    }
}

async fn download_schema(
    State(registry): State<Arc<SchemaRegistry>>,
    Path(id): Path<String>,
) -> Response {
    match registry.get_schema(&id).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(e) => error_response(Action::DownloadSchema, &id, e).into_response(),
    }
}

async fn validate_document(
    State(registry): State<Arc<SchemaRegistry>>,
    Path(id): Path<String>,
    body: Bytes,
) -> (StatusCode, Json<ApiResponse>) {
    match registry.validate_json(&body, &id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Action::ValidateDocument, &id)),
        ),
        Err(e) => error_response(Action::ValidateDocument, &id, e),
    }
}

/// Convert a [`SchemaError`] into a status code and error envelope.
///
/// Internal errors are logged here; the registry itself never logs or
/// swallows them.
fn error_response(action: Action, id: &str, e: SchemaError) -> (StatusCode, Json<ApiResponse>) {
    let status = match e.http_status() {
        404 => StatusCode::NOT_FOUND,
        409 => StatusCode::CONFLICT,
        400 => StatusCode::BAD_REQUEST,
        _ => {
            error!(id, error = %e, "internal error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ApiResponse::error(action, id, e.to_string())))
}
