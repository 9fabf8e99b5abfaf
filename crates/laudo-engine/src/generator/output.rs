//! Output naming for generated reports

use lazy_static::lazy_static;
use regex::Regex;

/// MIME type of the generated document
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// File extension of the generated document
pub const DOCX_EXTENSION: &str = "docx";

lazy_static! {
    static ref UNSAFE_FILE_CHARS: Regex = Regex::new(r"[^A-Za-z0-9._-]").unwrap();
}

/// `Laudo_<id>.docx`, with characters that are unsafe in a file name replaced by `-`
pub fn file_name(report_number: &str) -> String {
    let trimmed = report_number.trim();
    let stem = if trimmed.is_empty() {
        "sem_numero".to_string()
    } else {
        UNSAFE_FILE_CHARS.replace_all(trimmed, "-").into_owned()
    };
    format!("Laudo_{}.{}", stem, DOCX_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_identifier() {
        assert_eq!(file_name("12345"), "Laudo_12345.docx");
    }

    #[test]
    fn test_slashes_and_spaces_are_replaced() {
        assert_eq!(file_name(" 1234/2025 RG "), "Laudo_1234-2025-RG.docx");
    }

    #[test]
    fn test_non_ascii_is_replaced() {
        assert_eq!(file_name("nº7"), "Laudo_n-7.docx");
    }

    #[test]
    fn test_blank_identifier() {
        assert_eq!(file_name("   "), "Laudo_sem_numero.docx");
    }
}
