//! Section assembly
//!
//! Builds the report body in fixed order. Sections 4 to 6 depend on which
//! substance families are present; everything else is fixed text filled with
//! request and configuration values.

pub mod analysis;
pub mod closing;
pub mod numbering;
pub mod preamble;

use chrono::NaiveDate;
use laudo_types::LaudoRequest;

use crate::classify::Classification;
use crate::config::ReportConfig;
use crate::document::{Block, Figure};

/// Inputs shared by every section builder
pub struct AssemblyContext<'a> {
    pub request: &'a LaudoRequest,
    pub classification: &'a Classification,
    pub config: &'a ReportConfig,
    /// Document date, already in the institute's time zone
    pub date: NaiveDate,
    pub figure: &'a Figure,
}

/// All body blocks, title to signature
pub fn assemble(ctx: &AssemblyContext<'_>) -> Vec<Block> {
    let mut blocks = Vec::new();
    blocks.extend(preamble::title(ctx));
    blocks.extend(preamble::history(ctx));
    blocks.extend(preamble::received_material(ctx));
    blocks.extend(preamble::objective());
    blocks.extend(analysis::exams(ctx.classification));
    blocks.extend(analysis::results(ctx.classification));
    blocks.extend(analysis::conclusion(ctx.classification, &ctx.config.legal_basis));
    blocks.extend(closing::custody(ctx));
    blocks.extend(closing::references(ctx.config));
    blocks.extend(closing::signature(ctx));
    blocks
}
