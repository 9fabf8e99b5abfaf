//! Title and sections 1 to 3: history, received material, objective

use crate::classify::item_label;
use crate::date::long_date;
use crate::document::{Align, Block, Figure, TextBlock};
use crate::text::describe_item;

use super::numbering::{HISTORY, MATERIAL, OBJECTIVE};
use super::AssemblyContext;

pub const SUBTITLE: &str =
    "Exame químico em material com suspeita de conter substância entorpecente";

pub const CAPTION: &str = "Ilustração 1 – Material recebido para exame.";

pub const IMAGE_PLACEHOLDER: &str = "(Imagem não pôde ser carregada)";

const OBJECTIVE_TEXT: &str = "Visa esclarecer à autoridade requisitante quanto às características do material apresentado, bem como se ele contém substância de uso proscrito no Brasil e capaz de causar dependência física e/ou psíquica. O presente laudo pericial busca demonstrar a materialidade da infração penal apurada.";

pub fn title(ctx: &AssemblyContext<'_>) -> Vec<Block> {
    vec![
        Block::Paragraph(
            TextBlock::new(format!(
                "LAUDO DE PERÍCIA CRIMINAL Nº {}",
                ctx.request.report_number.trim()
            ))
            .bold()
            .align(Align::Center)
            .size(14),
        ),
        Block::Paragraph(TextBlock::new(SUBTITLE).align(Align::Center)),
    ]
}

/// Non-blank optional field, trimmed
fn field(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `1.1` paragraph. Each optional request field adds its clause; the seal
/// number always closes the sentence.
pub fn history_text(ctx: &AssemblyContext<'_>) -> String {
    let request = ctx.request;
    let mut text = format!("{}.1 ", HISTORY);

    match request.received_on {
        Some(date) => text.push_str(&format!(
            "Em {}, foi recebido neste {}",
            long_date(date),
            ctx.config.institute
        )),
        None => text.push_str(&format!("Foi recebido neste {}", ctx.config.institute)),
    }

    // "expedido" needs the document it qualifies
    match (
        field(&request.request_document),
        field(&request.requesting_authority),
    ) {
        (Some(document), Some(authority)) => text.push_str(&format!(
            ", por meio do documento {}, expedido pela autoridade {}",
            document, authority
        )),
        (Some(document), None) => {
            text.push_str(&format!(", por meio do documento {}", document))
        }
        (None, Some(authority)) => {
            text.push_str(&format!(", a pedido da autoridade {}", authority))
        }
        (None, None) => {}
    }

    text.push_str(", o material descrito na seção 2 deste laudo");
    if let Some(preliminary) = field(&request.preliminary_report) {
        text.push_str(&format!(
            ", objeto do laudo de constatação nº {}",
            preliminary
        ));
    }
    text.push_str(&format!(
        ", acondicionado sob o Lacre nº {}.",
        request.seal_number.trim()
    ));
    text
}

pub fn history(ctx: &AssemblyContext<'_>) -> Vec<Block> {
    vec![
        Block::heading(format!("{} HISTÓRICO", HISTORY)),
        Block::justified(history_text(ctx)),
    ]
}

/// Section 2: photo or placeholder, caption, then one paragraph per item
pub fn received_material(ctx: &AssemblyContext<'_>) -> Vec<Block> {
    let mut blocks = vec![Block::heading(format!(
        "{} MATERIAL RECEBIDO PARA EXAME",
        MATERIAL
    ))];

    match ctx.figure {
        Figure::Image(image) => blocks.push(Block::Image(image.clone())),
        Figure::Unavailable => blocks.push(Block::caption(IMAGE_PLACEHOLDER)),
        Figure::Absent => {}
    }
    blocks.push(Block::caption(CAPTION));

    blocks.extend(
        ctx.request
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| Block::justified(describe_item(&item_label(index), item))),
    );
    blocks
}

pub fn objective() -> Vec<Block> {
    vec![
        Block::heading(format!("{} OBJETIVO DOS EXAMES", OBJECTIVE)),
        Block::justified(OBJECTIVE_TEXT),
    ]
}
