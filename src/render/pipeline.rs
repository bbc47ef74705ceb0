//! The compositing pipeline: source image + editor state -> rendered canvas.
//!
//! Steps run in a fixed order and the whole pipeline is deterministic:
//! 1. scale-to-fit inside the requested bounding box,
//! 2. background gradient fill (skipped for "none"),
//! 3. fold the tonal pipeline into a single color operator,
//! 4. draw the scaled source through the operator,
//! 5. draw stickers in insertion order.
//!
//! The output raster is exactly the size computed in step 1. Encoding is
//! the caller's choice (see `media::ingest`).

use image::imageops::FilterType;
use image::{DynamicImage, Pixel, Rgba, RgbaImage};

use crate::presets::background_fill;
use crate::render::background::fill_gradient;
use crate::render::fit::{fit_within, FitBounds};
use crate::render::stickers::{draw_stickers, StickerFont};
use crate::render::tone::build_operator;
use crate::state::edit::EditorState;

/// Render the editor state over a decoded source image.
///
/// `font` is optional: without one the sticker pass is skipped (the rest
/// of the pipeline is unaffected).
pub fn compose(
    source: &DynamicImage,
    state: &EditorState,
    bounds: FitBounds,
    font: Option<&StickerFont>,
) -> RgbaImage {
    let (w, h) = fit_within(source.width(), source.height(), bounds);
    let mut canvas = RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 0]));

    let fill = background_fill(&state.background_id);
    if let Some((start, end)) = fill {
        fill_gradient(&mut canvas, start, end);
    }

    let operator = build_operator(state);
    let scaled = if (w, h) == (source.width(), source.height()) {
        source.to_rgba8()
    } else {
        source.resize_exact(w, h, FilterType::Lanczos3).to_rgba8()
    };

    // Single pass: adjust each source pixel and composite it over the
    // fill. Without a fill there is nothing underneath, so the adjusted
    // pixels land as-is.
    for (x, y, src) in scaled.enumerate_pixels() {
        let adjusted = if operator.is_identity() {
            *src
        } else {
            operator.apply(*src)
        };
        if fill.is_some() {
            canvas.get_pixel_mut(x, y).blend(&adjusted);
        } else {
            canvas.put_pixel(x, y, adjusted);
        }
    }

    if let Some(font) = font {
        draw_stickers(&mut canvas, &state.stickers, font);
    }

    canvas
}
