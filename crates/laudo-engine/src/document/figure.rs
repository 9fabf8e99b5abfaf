//! Photo of the received material
//!
//! Uploads arrive base64-encoded. They are decoded, downsampled when very
//! wide, re-encoded as PNG and sized for the page. Any failure degrades to a
//! placeholder and a warning; it never stops the report.

use std::io::Cursor;

use base64::Engine;
use image::{imageops::FilterType, ImageFormat};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::StyleConfig;
use crate::generator::errors::GenerationWarning;

/// English Metric Units per inch, the unit drawings are sized in
pub const EMU_PER_INCH: u32 = 914_400;

/// Pixel density assumed when an image carries none
const SCREEN_DPI: f32 = 96.0;

/// PNG-encoded image with its page size
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedImage {
    #[serde(skip)]
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
    pub width_emu: u32,
    pub height_emu: u32,
}

/// What goes above the "Ilustração 1" caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Figure {
    Image(PreparedImage),
    /// An upload was sent but could not be used
    Unavailable,
    /// Nothing was uploaded
    Absent,
}

/// Decode plain base64 or a `data:<mime>;base64,<payload>` URL
pub fn decode_upload(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let payload = match encoded.split_once(',') {
        Some((prefix, data)) if prefix.trim_start().starts_with("data:") => data,
        _ => encoded,
    };
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    base64::engine::general_purpose::STANDARD.decode(compact)
}

/// Decode image bytes and size them for the page
pub fn prepare_image(bytes: &[u8], style: &StyleConfig) -> Result<PreparedImage, image::ImageError> {
    let mut img = image::load_from_memory(bytes)?;

    let max_px = style.image_max_pixels.max(1);
    if img.width() > max_px {
        let height = (u64::from(img.height()) * u64::from(max_px) / u64::from(img.width())).max(1);
        img = img.resize(max_px, height as u32, FilterType::Triangle);
    }

    let (width_px, height_px) = (img.width(), img.height());
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    let display_in = (width_px as f32 / SCREEN_DPI).min(style.image_max_width_in);
    let width_emu = (display_in * EMU_PER_INCH as f32).round() as u32;
    let height_emu =
        (u64::from(width_emu) * u64::from(height_px) / u64::from(width_px.max(1))) as u32;

    Ok(PreparedImage {
        png,
        width_px,
        height_px,
        width_emu,
        height_emu,
    })
}

/// Turn the optional upload into a figure, recording a warning on failure
pub fn load_figure(
    upload: Option<&str>,
    style: &StyleConfig,
    warnings: &mut Vec<GenerationWarning>,
) -> Figure {
    let Some(encoded) = upload.filter(|u| !u.trim().is_empty()) else {
        return Figure::Absent;
    };

    let bytes = match decode_upload(encoded) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Image upload is not valid base64: {}", e);
            warnings.push(
                GenerationWarning::new(format!("Erro ao processar a imagem: {}", e))
                    .with_hint("Envie a imagem codificada em base64"),
            );
            return Figure::Unavailable;
        }
    };

    match prepare_image(&bytes, style) {
        Ok(prepared) => {
            debug!(
                "Prepared image {}x{} px ({} bytes PNG)",
                prepared.width_px,
                prepared.height_px,
                prepared.png.len()
            );
            Figure::Image(prepared)
        }
        Err(e) => {
            warn!("Image upload could not be decoded: {}", e);
            warnings.push(
                GenerationWarning::new(format!("Erro ao processar a imagem: {}", e))
                    .with_hint("Formatos aceitos: PNG, JPEG, GIF, BMP, WebP"),
            );
            Figure::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;
    use pretty_assertions::assert_eq;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut out = Vec::new();
        DynamicImage::new_rgb8(width, height)
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .unwrap();
        out
    }

    fn encoded(width: u32, height: u32) -> String {
        base64::engine::general_purpose::STANDARD.encode(png_bytes(width, height))
    }

    #[test]
    fn test_small_image_keeps_natural_size() {
        let prepared = prepare_image(&png_bytes(192, 96), &StyleConfig::default()).unwrap();
        assert_eq!((prepared.width_px, prepared.height_px), (192, 96));
        assert_eq!(prepared.width_emu, 2 * EMU_PER_INCH);
        assert_eq!(prepared.height_emu, EMU_PER_INCH);
        assert!(prepared.png.starts_with(&[0x89, b'P', b'N', b'G']));
    }

    #[test]
    fn test_wide_image_is_resampled_and_capped() {
        let prepared = prepare_image(&png_bytes(3200, 1600), &StyleConfig::default()).unwrap();
        assert_eq!((prepared.width_px, prepared.height_px), (1600, 800));
        assert_eq!(prepared.width_emu, 5 * EMU_PER_INCH);
        assert_eq!(prepared.height_emu, 5 * EMU_PER_INCH / 2);
    }

    #[test]
    fn test_data_url_prefix_is_accepted() {
        let url = format!("data:image/png;base64,{}", encoded(10, 10));
        let mut warnings = Vec::new();
        let figure = load_figure(Some(&url), &StyleConfig::default(), &mut warnings);
        assert!(matches!(figure, Figure::Image(_)));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_base64_degrades_to_placeholder() {
        let mut warnings = Vec::new();
        let figure = load_figure(Some("***not base64***"), &StyleConfig::default(), &mut warnings);
        assert_eq!(figure, Figure::Unavailable);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_undecodable_image_degrades_to_placeholder() {
        let garbage = base64::engine::general_purpose::STANDARD.encode(b"definitely not an image");
        let mut warnings = Vec::new();
        let figure = load_figure(Some(&garbage), &StyleConfig::default(), &mut warnings);
        assert_eq!(figure, Figure::Unavailable);
        assert!(warnings[0].message.starts_with("Erro ao processar a imagem"));
    }

    #[test]
    fn test_missing_or_blank_upload_is_absent() {
        let mut warnings = Vec::new();
        assert_eq!(load_figure(None, &StyleConfig::default(), &mut warnings), Figure::Absent);
        assert_eq!(load_figure(Some("  "), &StyleConfig::default(), &mut warnings), Figure::Absent);
        assert!(warnings.is_empty());
    }
}
