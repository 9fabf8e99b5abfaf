//! Forensic drug-analysis report (laudo pericial) engine
//!
//! This crate turns a structured seizure record into a complete report:
//! - Item classification into cannabis and cocaine families
//! - Portuguese item descriptions with plural and numeral agreement
//! - Section assembly with family-dependent subsection numbering
//! - `.docx` emission with header, footer and the material photo
//!
//! # Feature Flags
//!
//! - `server` (default): Enables async `generate_laudo`/`preview_laudo` with timeout (requires tokio)

pub mod classify;
pub mod config;
pub mod date;
pub mod document;
pub mod generator;
pub mod sections;
pub mod text;

pub use classify::{classify, Classification, FamilyGroup};
pub use config::{ReportConfig, Signatory, StyleConfig};
pub use generator::{
    build_document, file_name, generate_laudo_sync, validate_request, GeneratedLaudo,
    GenerationWarning, LaudoError, LaudoPreview, DOCX_MIME,
};

#[cfg(feature = "server")]
pub use generator::{generate_laudo, preview_laudo};
