//! `.docx` emission
//!
//! Maps the block model onto docx-rs paragraphs and packs the result into an
//! in-memory buffer. Document-wide styling (font, size, colour, margins) comes
//! from [`StyleConfig`].

use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, Footer, Header, LineSpacing, NumPages, PageMargin, PageNum, Paragraph,
    Pic, Run, RunFonts,
};
use tracing::debug;

use super::figure::PreparedImage;
use super::model::{Align, Block, LaudoDocument, TextBlock};
use crate::config::StyleConfig;
use crate::generator::errors::LaudoError;

const TWIPS_PER_CM: f32 = 566.93;

/// Space above spaced paragraphs, in twentieths of a point (one 12 pt line)
const SPACE_BEFORE: u32 = 240;

const HEADER_SIZE_PT: u32 = 10;
const FOOTER_SIZE_PT: u32 = 9;

fn twips(cm: f32) -> i32 {
    (cm * TWIPS_PER_CM).round() as i32
}

/// docx sizes are in half-points
fn half_points(pt: u32) -> usize {
    (pt * 2) as usize
}

fn alignment(align: Align) -> AlignmentType {
    match align {
        Align::Left => AlignmentType::Left,
        Align::Center => AlignmentType::Center,
        Align::Right => AlignmentType::Right,
        Align::Justified => AlignmentType::Both,
    }
}

fn fonts(style: &StyleConfig) -> RunFonts {
    RunFonts::new()
        .ascii(&style.font_family)
        .hi_ansi(&style.font_family)
        .cs(&style.font_family)
}

fn text_paragraph(block: &TextBlock, color: &str, style: &StyleConfig) -> Paragraph {
    let mut run = Run::new()
        .add_text(&block.text)
        .fonts(fonts(style))
        .color(color);
    if block.bold {
        run = run.bold();
    }
    if let Some(size) = block.size_pt {
        run = run.size(half_points(size));
    }

    let mut paragraph = Paragraph::new().add_run(run).align(alignment(block.align));
    if block.space_before {
        paragraph = paragraph.line_spacing(LineSpacing::new().before(SPACE_BEFORE));
    }
    paragraph
}

fn image_paragraph(image: &PreparedImage) -> Paragraph {
    let pic = Pic::new_with_dimensions(image.png.clone(), image.width_px, image.height_px)
        .size(image.width_emu, image.height_emu);
    Paragraph::new()
        .add_run(Run::new().add_image(pic))
        .align(AlignmentType::Center)
}

fn render_block(block: &Block, style: &StyleConfig) -> Paragraph {
    match block {
        Block::Heading(text) => text_paragraph(text, &style.heading_color, style),
        Block::Paragraph(text) => text_paragraph(text, &style.font_color, style),
        Block::Image(image) => image_paragraph(image),
    }
}

fn build_header(lines: &[String], style: &StyleConfig) -> Header {
    lines.iter().fold(Header::new(), |header, line| {
        header.add_paragraph(
            Paragraph::new()
                .add_run(
                    Run::new()
                        .add_text(line)
                        .bold()
                        .fonts(fonts(style))
                        .size(half_points(HEADER_SIZE_PT)),
                )
                .align(AlignmentType::Center),
        )
    })
}

/// `Laudo nº <n> - Página <PAGE> de <NUMPAGES>`, right-aligned
fn build_footer(label: &str, style: &StyleConfig) -> Footer {
    let run = |text: &str| {
        Run::new()
            .add_text(text)
            .fonts(fonts(style))
            .size(half_points(FOOTER_SIZE_PT))
    };

    Footer::new().add_paragraph(
        Paragraph::new()
            .add_run(run(&format!("{} - Página ", label)))
            .add_page_num(PageNum::new())
            .add_run(run(" de "))
            .add_num_pages(NumPages::new())
            .align(AlignmentType::Right),
    )
}

/// Write the document and return the packed `.docx` bytes
pub fn write_docx(document: &LaudoDocument, style: &StyleConfig) -> Result<Vec<u8>, LaudoError> {
    let margins = PageMargin::new()
        .top(twips(style.margin_top_cm))
        .left(twips(style.margin_left_cm))
        .bottom(twips(style.margin_bottom_cm))
        .right(twips(style.margin_right_cm));

    let docx = document.blocks.iter().fold(
        Docx::new()
            .page_margin(margins)
            .default_fonts(fonts(style))
            .default_size(half_points(style.font_size_pt))
            .header(build_header(&document.header_lines, style))
            .footer(build_footer(&document.footer_label, style)),
        |docx, block| docx.add_paragraph(render_block(block, style)),
    );

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| LaudoError::PackError(e.to_string()))?;

    let bytes = buffer.into_inner();
    debug!(
        "Packed {} blocks into {} bytes",
        document.blocks.len(),
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn sample_document() -> LaudoDocument {
        LaudoDocument {
            header_lines: vec!["INSTITUTO DE CRIMINALÍSTICA".to_string()],
            footer_label: "Laudo nº 42/2026".to_string(),
            blocks: vec![
                Block::heading("1 HISTÓRICO"),
                Block::justified("Texto justificado."),
                Block::caption("Ilustração 1 – Material recebido para exame."),
            ],
        }
    }

    #[test]
    fn test_twips_conversion() {
        assert_eq!(twips(3.0), 1701);
        assert_eq!(twips(2.0), 1134);
    }

    #[test]
    fn test_write_produces_zip_container() {
        let bytes = write_docx(&sample_document(), &StyleConfig::default()).unwrap();
        assert!(bytes.starts_with(b"PK"));
        assert!(bytes.len() > 1000);
    }

    fn part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_header_footer_and_body_parts() {
        let bytes = write_docx(&sample_document(), &StyleConfig::default()).unwrap();

        let header = part(&bytes, "word/header1.xml");
        assert!(header.contains("INSTITUTO DE CRIMINALÍSTICA"));

        let footer = part(&bytes, "word/footer1.xml");
        assert!(footer.contains("Laudo nº 42/2026 - Página "));
        assert!(footer.contains(" de "));
        assert!(footer.contains("NUMPAGES"));
        assert!(footer.matches("PAGE").count() >= 2);

        let body = part(&bytes, "word/document.xml");
        assert!(body.contains("1 HISTÓRICO"));
        assert!(body.contains("Ilustração 1"));
    }

    #[test]
    fn test_empty_document_still_packs() {
        let document = LaudoDocument {
            header_lines: vec![],
            footer_label: String::new(),
            blocks: vec![],
        };
        let bytes = write_docx(&document, &StyleConfig::default()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
