//! Ordered block model of a report
//!
//! The assembler produces blocks, the writer turns them into paragraphs. Blocks
//! carry only what the institute template varies per paragraph: alignment,
//! weight, size and spacing. Fonts, colours and margins are document-wide.

use serde::Serialize;

use super::figure::PreparedImage;

/// Paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

/// A run of text forming one paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub text: String,
    pub align: Align,
    pub bold: bool,
    /// Overrides the document font size, in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_pt: Option<u32>,
    /// Adds a blank line's worth of space above the paragraph
    pub space_before: bool,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            align: Align::Left,
            bold: false,
            size_pt: None,
            space_before: false,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn size(mut self, size_pt: u32) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    pub fn spaced(mut self) -> Self {
        self.space_before = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Numbered section heading (`4 EXAMES`), bold with space above
    Heading(TextBlock),
    Paragraph(TextBlock),
    Image(PreparedImage),
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading(TextBlock::new(text).bold().spaced())
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(TextBlock::new(text))
    }

    pub fn justified(text: impl Into<String>) -> Self {
        Block::Paragraph(TextBlock::new(text).align(Align::Justified))
    }

    /// Bold, centred, 10 pt line under a figure
    pub fn caption(text: impl Into<String>) -> Self {
        Block::Paragraph(TextBlock::new(text).bold().align(Align::Center).size(10))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading(t) | Block::Paragraph(t) => Some(&t.text),
            Block::Image(_) => None,
        }
    }
}

/// A complete report, ready to be written out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaudoDocument {
    pub header_lines: Vec<String>,
    /// Text before the page number in the footer
    pub footer_label: String,
    pub blocks: Vec<Block>,
}

impl LaudoDocument {
    /// Text of every text block, in order
    pub fn paragraphs(&self) -> Vec<&str> {
        self.blocks.iter().filter_map(Block::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_is_bold_and_spaced() {
        match Block::heading("4 EXAMES") {
            Block::Heading(t) => {
                assert!(t.bold);
                assert!(t.space_before);
                assert_eq!(t.align, Align::Left);
            }
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_block_serializes_with_kind_tag() {
        let json = serde_json::to_value(Block::caption("Ilustração 1")).unwrap();
        assert_eq!(json["kind"], "paragraph");
        assert_eq!(json["align"], "center");
        assert_eq!(json["size_pt"], 10);
    }
}
