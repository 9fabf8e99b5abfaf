//! Core generation logic
//!
//! Validation, classification, figure loading and section assembly run on
//! the caller's thread in the `_sync` functions. The async variants move the
//! same work onto a blocking thread and bound it with a timeout.

#[cfg(feature = "server")]
use std::sync::Arc;
#[cfg(feature = "server")]
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use laudo_types::LaudoRequest;
use tracing::{debug, info};

use super::errors::{GenerationWarning, LaudoError};
use super::output::{file_name, DOCX_MIME};
use super::{GeneratedLaudo, LaudoPreview};
use crate::classify::classify;
use crate::config::ReportConfig;
use crate::document::{load_figure, write_docx, LaudoDocument};
use crate::sections::{assemble, AssemblyContext};

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Reject requests the report cannot be written from
pub fn validate_request(request: &LaudoRequest) -> Result<(), LaudoError> {
    if blank(&request.report_number) {
        return Err(LaudoError::InvalidRequest(
            "report_number must not be blank".to_string(),
        ));
    }
    if blank(&request.seal_number) {
        return Err(LaudoError::InvalidRequest(
            "seal_number must not be blank".to_string(),
        ));
    }
    if request.items.is_empty() {
        return Err(LaudoError::InvalidRequest(
            "at least one item is required".to_string(),
        ));
    }

    for (index, item) in request.items.iter().enumerate() {
        if item.quantity == 0 {
            return Err(LaudoError::InvalidRequest(format!(
                "item {}: quantity must be at least 1",
                index + 1
            )));
        }
        if blank(item.material.code()) {
            return Err(LaudoError::InvalidRequest(format!(
                "item {}: material code must not be blank",
                index + 1
            )));
        }
        if blank(&item.reference) {
            return Err(LaudoError::InvalidRequest(format!(
                "item {}: reference must not be blank",
                index + 1
            )));
        }
    }

    Ok(())
}

/// Assemble the report for `request` as of `now`
///
/// `now` fixes the document date, so the same request and timestamp always
/// yield the same text.
pub fn build_document(
    request: &LaudoRequest,
    config: &ReportConfig,
    now: DateTime<FixedOffset>,
) -> Result<LaudoPreview, LaudoError> {
    validate_request(request)?;

    let classification = classify(&request.items);
    debug!(
        "Classified {} items: {} cannabis, {} cocaine, {} unclassified",
        request.item_count(),
        classification.cannabis.len(),
        classification.cocaine.len(),
        classification.unclassified.len()
    );

    let mut warnings: Vec<GenerationWarning> = Vec::new();
    let figure = load_figure(request.image_base64.as_deref(), &config.style, &mut warnings);

    let ctx = AssemblyContext {
        request,
        classification: &classification,
        config,
        date: now.date_naive(),
        figure: &figure,
    };

    let document = LaudoDocument {
        header_lines: config.header_lines.clone(),
        footer_label: format!("Laudo nº {}", request.report_number.trim()),
        blocks: assemble(&ctx),
    };

    Ok(LaudoPreview {
        file_name: file_name(&request.report_number),
        document,
        warnings,
    })
}

/// Assemble and pack the report on the current thread
pub fn generate_laudo_sync(
    request: &LaudoRequest,
    config: &ReportConfig,
    now: DateTime<FixedOffset>,
) -> Result<GeneratedLaudo, LaudoError> {
    let preview = build_document(request, config, now)?;
    let bytes = write_docx(&preview.document, &config.style)?;

    info!(
        "Generated {} ({} items, {} bytes, {} warnings)",
        preview.file_name,
        request.item_count(),
        bytes.len(),
        preview.warnings.len()
    );

    Ok(GeneratedLaudo {
        file_name: preview.file_name,
        bytes,
        mime_type: DOCX_MIME.to_string(),
        warnings: preview.warnings,
    })
}

/// Run `job` on the blocking pool, giving up after `timeout_ms`
#[cfg(feature = "server")]
async fn run_blocking<T, F>(job: F, timeout_ms: u64) -> Result<T, LaudoError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, LaudoError> + Send + 'static,
{
    let result = tokio::time::timeout(
        Duration::from_millis(timeout_ms),
        tokio::task::spawn_blocking(job),
    )
    .await;

    match result {
        Ok(Ok(output)) => output,
        Ok(Err(join_error)) => Err(LaudoError::TaskFailed(join_error.to_string())),
        Err(_timeout) => Err(LaudoError::Timeout(timeout_ms)),
    }
}

/// Generate the `.docx` with timeout
#[cfg(feature = "server")]
pub async fn generate_laudo(
    request: LaudoRequest,
    config: Arc<ReportConfig>,
    now: DateTime<FixedOffset>,
    timeout_ms: u64,
) -> Result<GeneratedLaudo, LaudoError> {
    run_blocking(
        move || generate_laudo_sync(&request, &config, now),
        timeout_ms,
    )
    .await
}

/// Assemble the report text with timeout, without packing it
#[cfg(feature = "server")]
pub async fn preview_laudo(
    request: LaudoRequest,
    config: Arc<ReportConfig>,
    now: DateTime<FixedOffset>,
    timeout_ms: u64,
) -> Result<LaudoPreview, LaudoError> {
    run_blocking(move || build_document(&request, &config, now), timeout_ms).await
}
