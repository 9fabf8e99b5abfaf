//! Report generation with validation, timeout and warning collection

pub mod errors;
pub mod generate;
pub mod output;

pub use errors::{GenerationWarning, LaudoError};
pub use generate::{build_document, generate_laudo_sync, validate_request};
pub use output::{file_name, DOCX_EXTENSION, DOCX_MIME};

#[cfg(feature = "server")]
pub use generate::{generate_laudo, preview_laudo};

use serde::Serialize;

use crate::document::LaudoDocument;

/// Assembled report before it is written out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaudoPreview {
    pub file_name: String,
    pub document: LaudoDocument,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<GenerationWarning>,
}

/// Packed `.docx` ready for download
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedLaudo {
    pub file_name: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<GenerationWarning>,
}
