//! Webhook endpoint handlers.
//!
//! The revalidation handler is the single trust boundary of the service:
//! it authenticates the delivery against the shared secret, types the
//! untrusted payload, maps it to cache tags and marks them stale. Every
//! failure is handled here; nothing is retried internally. The CMS's own
//! at-least-once redelivery is the only resilience mechanism, which the
//! idempotent tag invalidation makes safe.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::cache::TagCache;
use crate::revalidate::{tags_for, WebhookPayload};
use crate::sanity::SanityClient;
use crate::web::signature::{is_secret_configured, verify_signature, SIGNATURE_HEADER};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cache: TagCache,
    pub content: SanityClient,
}

impl AppState {
    pub fn new(config: Config, cache: TagCache, content: SanityClient) -> Self {
        Self {
            config: Arc::new(config),
            cache,
            content,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Revalidation Webhook
// =============================================================================

/// Success response for the revalidation endpoint.
#[derive(Serialize)]
pub struct RevalidateResponse {
    pub message: String,
    pub revalidated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Error response for the revalidation endpoint.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Revalidation webhook endpoint.
///
/// This endpoint:
/// 1. Fails closed when no webhook secret is configured (500)
/// 2. Verifies the HMAC-SHA256 signature over the raw body (401 on mismatch)
/// 3. Types the payload at the boundary (400 on empty/unparseable body)
/// 4. Maps the document type to cache tags and marks them stale
///
/// Unknown document types are a no-op success, not an error, so new CMS
/// content types never break the webhook sender's integration.
pub async fn revalidate_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    info!(body_length = body.len(), "revalidate_received");

    if !is_secret_configured(&state.config.revalidate_secret) {
        error!("revalidate_secret_missing");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: "Erro na revalidação".to_string(),
                error: Some("REVALIDATE_SECRET não configurado".to_string()),
            }),
        )
            .into_response();
    }
    let secret = state
        .config
        .revalidate_secret
        .as_deref()
        .unwrap_or_default();

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if !verify_signature(secret, body.as_bytes(), signature) {
        warn!("revalidate_signature_invalid");
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                message: "Assinatura inválida".to_string(),
                error: None,
            }),
        )
            .into_response();
    }

    if body.trim().is_empty() {
        warn!("revalidate_empty_body");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: "Body vazio".to_string(),
                error: None,
            }),
        )
            .into_response();
    }

    let payload: WebhookPayload = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "revalidate_body_unparseable");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: "Payload inválido".to_string(),
                    error: None,
                }),
            )
                .into_response();
        }
    };

    let slug = payload.slug.as_ref().map(|slug| slug.current.as_str());
    let tags = tags_for(&payload.kind, slug);

    if tags.is_empty() {
        info!(
            document_type = payload.kind.as_str(),
            "revalidate_type_not_configured"
        );
        return (
            StatusCode::OK,
            Json(RevalidateResponse {
                message: format!("Tipo não configurado: {}", payload.kind.as_str()),
                revalidated: false,
                tags: Vec::new(),
            }),
        )
            .into_response();
    }

    // Awaited before responding; marking an already-stale tag is a no-op.
    for tag in &tags {
        state.cache.invalidate(tag).await;
    }

    info!(
        document_type = payload.kind.as_str(),
        tag_count = tags.len(),
        "revalidate_complete"
    );

    (
        StatusCode::OK,
        Json(RevalidateResponse {
            message: format!("Revalidação concluída: {}", payload.kind.as_str()),
            revalidated: true,
            tags,
        }),
    )
        .into_response()
}

/// Reachability probe for the revalidation endpoint.
#[derive(Serialize)]
pub struct RevalidateInfo {
    pub message: &'static str,
    pub usage: &'static str,
}

/// Read-only endpoint confirming the webhook is deployed. No verification,
/// no side effect.
pub async fn revalidate_info() -> Json<RevalidateInfo> {
    Json(RevalidateInfo {
        message: "Endpoint de revalidação ativo",
        usage: "POST /api/revalidate com o header x-vidamed-signature \
                (HMAC-SHA256 hex do corpo) e body JSON \
                {\"_type\": \"post\", \"slug\": {\"current\": \"...\"}}",
    })
}
