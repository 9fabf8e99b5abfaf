//! In-memory report document and its `.docx` emission

pub mod docx;
pub mod figure;
pub mod model;

pub use docx::write_docx;
pub use figure::{load_figure, Figure, PreparedImage};
pub use model::{Align, Block, LaudoDocument, TextBlock};
