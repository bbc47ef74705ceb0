//! Sticker glyph rasterization.
//!
//! Glyphs are drawn at a fixed point size, anchored at their stored
//! position, in list order. There is no collision avoidance: overlaps are
//! allowed and later stickers occlude earlier ones.

use ab_glyph::{FontArc, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::state::edit::StickerPlacement;

/// Point size every sticker is drawn at. Also the footprint subtracted
/// from the canvas bounds when a placement is chosen.
pub const STICKER_POINT_SIZE: f32 = 40.0;

/// Candidate system fonts, tried in order by [`StickerFont::discover`].
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
];

/// A font used to rasterize sticker glyphs.
pub struct StickerFont {
    font: FontArc,
}

impl StickerFont {
    /// Load a font from raw TTF/OTF bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        match FontArc::try_from_vec(bytes) {
            Ok(font) => Some(Self { font }),
            Err(err) => {
                tracing::warn!(%err, "sticker font bytes are not a usable font");
                None
            }
        }
    }

    /// Find a usable system font for sticker drawing.
    ///
    /// Returns `None` when no candidate exists; the pipeline then skips
    /// the sticker pass (still deterministic, just glyph-less).
    pub fn discover() -> Option<Self> {
        for path in FONT_CANDIDATES {
            if let Ok(bytes) = std::fs::read(path) {
                if let Some(font) = Self::from_bytes(bytes) {
                    tracing::debug!(path, "sticker font loaded");
                    return Some(font);
                }
            }
        }
        tracing::warn!("no sticker font found; stickers will not be drawn");
        None
    }
}

/// Draw every placement onto the canvas, in list order.
pub fn draw_stickers(canvas: &mut RgbaImage, placements: &[StickerPlacement], font: &StickerFont) {
    for sticker in placements {
        draw_text_mut(
            canvas,
            Rgba([0, 0, 0, 255]),
            sticker.x as i32,
            sticker.y as i32,
            PxScale::from(STICKER_POINT_SIZE),
            &font.font,
            &sticker.glyph,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(glyph: &str, x: f32, y: f32) -> StickerPlacement {
        StickerPlacement {
            glyph: glyph.to_string(),
            x,
            y,
        }
    }

    #[test]
    fn test_drawing_a_glyph_marks_pixels() {
        // Skipped quietly on systems with no candidate font.
        let Some(font) = StickerFont::discover() else {
            return;
        };
        let mut canvas = RgbaImage::from_pixel(120, 120, Rgba([255, 255, 255, 255]));
        draw_stickers(&mut canvas, &[place("A", 20.0, 20.0)], &font);
        assert!(canvas.pixels().any(|p| p[0] != 255));
    }

    #[test]
    fn test_drawing_is_deterministic() {
        let Some(font) = StickerFont::discover() else {
            return;
        };
        let stickers = [place("X", 5.0, 5.0), place("O", 30.0, 30.0)];
        let mut a = RgbaImage::from_pixel(90, 90, Rgba([200, 200, 200, 255]));
        let mut b = a.clone();
        draw_stickers(&mut a, &stickers, &font);
        draw_stickers(&mut b, &stickers, &font);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_bad_font_bytes_are_rejected() {
        assert!(StickerFont::from_bytes(vec![0, 1, 2, 3]).is_none());
    }
}
