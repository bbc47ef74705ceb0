//! Upload validation, storage normalization, encoding and export naming.
//!
//! Rules enforced here, before anything touches the collection:
//! - inputs must carry a real image signature (no MIME sniffing by name),
//! - inputs above the byte ceiling are rejected outright, never partially
//!   ingested,
//! - stored images may be normalized (downscaled + re-encoded lossy) to a
//!   bounded size, independent of the display-time scale-to-fit.
//!
//! Persisted payloads are data URLs so the collection document stays a
//! single self-describing JSON file.

use std::io::Cursor;

use base64::{engine::general_purpose, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::error::{EditorError, Result};

/// Byte ceiling for collection submissions.
pub const COLLECTION_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Byte ceiling for standalone editor uploads.
pub const EDITOR_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Long-edge bound applied by [`normalize_for_store`].
pub const STORE_LONG_EDGE: u32 = 1200;

/// JPEG quality used when re-encoding for storage.
pub const STORE_JPEG_QUALITY: u8 = 80;

/// Validate an upload against a byte ceiling.
///
/// Returns the sniffed format on success. Rejection leaves no trace: the
/// caller must not have touched any state yet.
pub fn check_upload(bytes: &[u8], limit: usize) -> Result<ImageFormat> {
    let format = image::guess_format(bytes).map_err(|_| EditorError::NotAnImage)?;
    if bytes.len() > limit {
        return Err(EditorError::Oversized {
            actual: bytes.len(),
            limit,
        });
    }
    Ok(format)
}

/// Downscale to the storage long-edge bound and re-encode as JPEG.
///
/// Images already inside the bound are only re-encoded. This runs before
/// persistence and has nothing to do with the editor's display fit.
pub fn normalize_for_store(img: &DynamicImage) -> Result<Vec<u8>> {
    let long_edge = img.width().max(img.height());
    let bounded = if long_edge > STORE_LONG_EDGE {
        img.resize(STORE_LONG_EDGE, STORE_LONG_EDGE, FilterType::Lanczos3)
    } else {
        img.clone()
    };
    encode_jpeg(&bounded, STORE_JPEG_QUALITY)
}

/// Lossless PNG encoding (used for commit/export).
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Lossy JPEG encoding at an explicit quality factor (interactive preview
/// and storage normalization).
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    // JPEG has no alpha channel.
    let rgb = img.to_rgb8();
    let mut out = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut out, quality);
    rgb.write_with_encoder(encoder)?;
    Ok(out.into_inner())
}

/// Wrap encoded bytes as a `data:` URL for the collection document.
pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Unwrap a `data:` URL into its MIME type and decoded bytes.
pub fn from_data_url(url: &str) -> Result<(String, Vec<u8>)> {
    let rest = url.strip_prefix("data:").ok_or(EditorError::MalformedDataUrl)?;
    let (mime, payload) = rest.split_once(";base64,").ok_or(EditorError::MalformedDataUrl)?;
    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| EditorError::MalformedDataUrl)?;
    Ok((mime.to_string(), bytes))
}

/// Build a download filename from an entry label, e.g. "Sr. Reno" ->
/// "sr-reno.png".
pub fn export_file_name(label: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = true;
    for ch in label.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            slug.push(ch);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "edited-image.png".to_string()
    } else {
        format!("{slug}.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba([1, 2, 3, 255])));
        encode_png(&img).unwrap()
    }

    #[test]
    fn test_valid_png_passes() {
        let bytes = png_bytes(10, 10);
        assert_eq!(
            check_upload(&bytes, EDITOR_MAX_BYTES).unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_non_image_is_rejected() {
        let err = check_upload(b"definitely not pixels", EDITOR_MAX_BYTES).unwrap_err();
        assert!(matches!(err, EditorError::NotAnImage));
    }

    #[test]
    fn test_oversized_upload_is_rejected() {
        // 6 MB of "image": real PNG header, padded past a 5 MB ceiling.
        let mut bytes = png_bytes(2, 2);
        bytes.resize(6 * 1024 * 1024, 0);
        let err = check_upload(&bytes, COLLECTION_MAX_BYTES).unwrap_err();
        match err {
            EditorError::Oversized { actual, limit } => {
                assert_eq!(actual, 6 * 1024 * 1024);
                assert_eq!(limit, COLLECTION_MAX_BYTES);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_normalize_bounds_the_long_edge() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            2400,
            1200,
            Rgba([100, 100, 100, 255]),
        ));
        let jpeg = normalize_for_store(&img).unwrap();
        let stored = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((stored.width(), stored.height()), (1200, 600));
    }

    #[test]
    fn test_normalize_keeps_small_images_at_size() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            640,
            480,
            Rgba([5, 5, 5, 255]),
        ));
        let jpeg = normalize_for_store(&img).unwrap();
        let stored = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((stored.width(), stored.height()), (640, 480));
    }

    #[test]
    fn test_data_url_round_trip() {
        let bytes = png_bytes(3, 3);
        let url = to_data_url(&bytes, "image/png");
        assert!(url.starts_with("data:image/png;base64,"));

        let (mime, decoded) = from_data_url(&url).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_bad_data_url_is_rejected() {
        assert!(from_data_url("http://example.com/cat.png").is_err());
        assert!(from_data_url("data:image/png;base64,!!!").is_err());
    }

    #[test]
    fn test_export_names_are_slugged() {
        assert_eq!(export_file_name("Sr. Reno"), "sr-reno.png");
        assert_eq!(export_file_name("T-Rex"), "t-rex.png");
        assert_eq!(export_file_name("   "), "edited-image.png");
    }
}
