// Axum server: application state, router and export endpoint
//
// Pages: GET / (search form), POST / (lookup + results), POST /download_docx (export)

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::document::{chart_filename, ClaimChartDocument, DOCX_MIME_TYPE};
use crate::lookup::{LookupError, PatentClient};
use crate::web::handlers::{index_page, search_page, DownloadForm};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub lookup: Arc<PatentClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, LookupError> {
        tracing::info!("Initializing patent search client ({})", config.search_base_url);
        let lookup = Arc::new(PatentClient::new(&config)?);

        Ok(Self {
            config: Arc::new(config),
            lookup,
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Search form and results
        .route("/", get(index_page).post(search_page))

        // Claim chart export
        .route("/download_docx", post(download_claim_chart))

        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn download_claim_chart(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let form = DownloadForm::from_urlencoded(&body);
    let record = form.record;

    let bytes = ClaimChartDocument::new(state.config.company_name.as_str())
        .assemble(&record, &record.claims)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let filename = chart_filename(&record.publication_number);
    tracing::info!("Exporting {} ({} bytes)", filename, bytes.len());

    let disposition = HeaderValue::from_str(&content_disposition(&filename))
        .map_err(|e| AppError::Internal(format!("Invalid download filename: {}", e)))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(DOCX_MIME_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// Attachment header with an ASCII fallback name plus the RFC 5987 form
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
