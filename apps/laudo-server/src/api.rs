//! API handlers for the laudo server
//!
//! Provides REST endpoints for:
//! - Health checks
//! - Form vocabulary (material, packaging and colour codes)
//! - Report preview as JSON blocks
//! - Report download as `.docx`

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use laudo_engine::date::now_at_offset;
use laudo_engine::document::Block;
use laudo_engine::GenerationWarning;
use laudo_types::{LaudoRequest, MaterialType, PackagingColor, PackagingType, SubstanceFamily};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ServerError;
use crate::AppState;

/// Number of generation warnings, sent with the downloaded document
pub const WARNINGS_HEADER: &str = "x-laudo-warnings";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "laudo-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
pub struct MaterialInfo {
    pub code: String,
    pub description: String,
    pub family: Option<SubstanceFamily>,
}

#[derive(Serialize)]
pub struct CodeInfo {
    pub code: &'static str,
    pub description: &'static str,
}

/// Codes the form may send
#[derive(Serialize)]
pub struct CatalogResponse {
    pub success: bool,
    pub materials: Vec<MaterialInfo>,
    pub packagings: Vec<CodeInfo>,
    pub colors: Vec<CodeInfo>,
}

/// Handler: GET /api/catalog
pub async fn handle_catalog() -> Json<CatalogResponse> {
    let materials = MaterialType::KNOWN
        .into_iter()
        .map(|m| MaterialInfo {
            code: m.code().to_string(),
            description: m.description().to_string(),
            family: m.family(),
        })
        .collect();

    let packagings = PackagingType::ALL
        .into_iter()
        .map(|p| CodeInfo {
            code: p.code(),
            description: p.noun(),
        })
        .collect();

    let colors = PackagingColor::ALL
        .into_iter()
        .map(|c| CodeInfo {
            code: c.code(),
            description: c.feminine(),
        })
        .collect();

    Json(CatalogResponse {
        success: true,
        materials,
        packagings,
        colors,
    })
}

/// Preview response
#[derive(Serialize)]
pub struct PreviewResponse {
    pub success: bool,
    pub file_name: String,
    pub blocks: Vec<Block>,
    pub warnings: Vec<GenerationWarning>,
}

/// Handler: POST /api/laudo/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<LaudoRequest>,
) -> Result<Json<PreviewResponse>, ServerError> {
    info!(
        "Preview request: laudo={}, items={}",
        req.report_number,
        req.item_count()
    );

    let now = now_at_offset(state.config.utc_offset_hours);
    let preview =
        laudo_engine::preview_laudo(req, state.config.clone(), now, state.timeout_ms).await?;

    Ok(Json(PreviewResponse {
        success: true,
        file_name: preview.file_name,
        blocks: preview.document.blocks,
        warnings: preview.warnings,
    }))
}

/// Handler: POST /api/laudo
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<LaudoRequest>,
) -> Result<Response, ServerError> {
    info!(
        "Generate request: laudo={}, items={}",
        req.report_number,
        req.item_count()
    );

    let now = now_at_offset(state.config.utc_offset_hours);
    let generated =
        laudo_engine::generate_laudo(req, state.config.clone(), now, state.timeout_ms).await?;

    for warning in &generated.warnings {
        debug!("Warning for {}: {}", generated.file_name, warning.message);
    }

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        generated.file_name
    ))
    .map_err(|e| ServerError::Internal(format!("Invalid file name header: {}", e)))?;

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static(laudo_engine::DOCX_MIME),
        ),
        (header::CONTENT_DISPOSITION, disposition),
        (
            HeaderName::from_static(WARNINGS_HEADER),
            HeaderValue::from(generated.warnings.len()),
        ),
    ];

    Ok((headers, generated.bytes).into_response())
}
