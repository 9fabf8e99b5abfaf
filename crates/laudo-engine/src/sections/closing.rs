//! Section 7, references and the signature block

use crate::config::ReportConfig;
use crate::date::long_date;
use crate::document::{Align, Block, TextBlock};

use super::numbering::CUSTODY;
use super::AssemblyContext;

pub const SIGNATURE_LINE: &str = "________________________________________";

const REFERENCE_SIZE_PT: u32 = 10;

pub fn custody(ctx: &AssemblyContext<'_>) -> Vec<Block> {
    vec![
        Block::heading(format!("{} CUSTÓDIA DO MATERIAL", CUSTODY)),
        Block::paragraph(format!("{}.1 Contraprova", CUSTODY)),
        Block::justified(format!(
            "{}.1.1 A amostra contraprova ficará armazenada neste Instituto, conforme {} (Lacre nº {}).",
            CUSTODY,
            ctx.config.custody_ordinance,
            ctx.request.seal_number.trim()
        )),
    ]
}

pub fn references(config: &ReportConfig) -> Vec<Block> {
    std::iter::once(Block::heading("REFERÊNCIAS"))
        .chain(config.references.iter().map(|reference| {
            Block::Paragraph(
                TextBlock::new(reference.as_str())
                    .align(Align::Justified)
                    .size(REFERENCE_SIZE_PT),
            )
        }))
        .collect()
}

/// Date line, signature line, then whichever signatory fields are configured
pub fn signature(ctx: &AssemblyContext<'_>) -> Vec<Block> {
    let signatory = &ctx.config.signatory;
    let centered = |text: &str| Block::Paragraph(TextBlock::new(text).align(Align::Center));

    let mut blocks = vec![
        Block::Paragraph(
            TextBlock::new(format!("{}, {}.", ctx.config.city, long_date(ctx.date)))
                .align(Align::Right)
                .spaced(),
        ),
        Block::Paragraph(TextBlock::new(SIGNATURE_LINE).align(Align::Center).spaced()),
    ];
    if let Some(name) = signatory.name.as_deref() {
        blocks.push(Block::Paragraph(
            TextBlock::new(name).align(Align::Center).bold(),
        ));
    }
    blocks.push(centered(&signatory.title));
    if let Some(registration) = signatory.registration.as_deref() {
        blocks.push(centered(registration));
    }
    blocks
}
