//! The editor session controller.
//!
//! Owns the editor state and the decoded source image for one editing
//! session. All mutation goes through the methods here; re-rendering is
//! left to the shell, which calls [`EditorSession::render`] after each
//! mutator.
//!
//! Loading is where ordering matters: decodes are asynchronous, and a user
//! can drop a second image on the editor before the first decode lands.
//! Each load gets a ticket from a monotonically increasing sequence, and a
//! completed decode is applied only while its ticket is still the newest
//! one issued. A stale decode is dropped on the floor, not an error.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use image::{DynamicImage, RgbaImage};

use crate::error::Result;
use crate::media::decode::decode_image;
use crate::media::ingest::{check_upload, EDITOR_MAX_BYTES};
use crate::render::fit::{fit_within, FitBounds, EDITOR_BOUNDS};
use crate::render::pipeline::compose;
use crate::render::stickers::{StickerFont, STICKER_POINT_SIZE};
use crate::state::edit::{EditorState, StickerPlacement};

/// A user-visible notice. Not an engine error: the operation was simply
/// not applicable and nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The operation needs a loaded image first.
    NoImage,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoImage => write!(f, "load an image first"),
        }
    }
}

/// Handle for one in-flight image load. See the module docs for the
/// last-invocation-wins rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
}

pub struct EditorSession {
    state: EditorState,
    source: Option<DynamicImage>,
    bounds: FitBounds,
    font: Option<StickerFont>,
    load_seq: u64,
    rng: SplitMix64,
}

impl EditorSession {
    /// A session rendering into the standalone editor box, with a
    /// best-effort system font for stickers.
    pub fn new() -> Self {
        Self::with_bounds(EDITOR_BOUNDS)
    }

    pub fn with_bounds(bounds: FitBounds) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9e3779b97f4a7c15);
        Self {
            state: EditorState::default(),
            source: None,
            bounds,
            font: StickerFont::discover(),
            load_seq: 0,
            rng: SplitMix64::new(seed),
        }
    }

    /// Fix the sticker-placement sequence, for reproducible tests.
    pub fn with_seed(bounds: FitBounds, seed: u64) -> Self {
        let mut session = Self::with_bounds(bounds);
        session.rng = SplitMix64::new(seed);
        session
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn has_image(&self) -> bool {
        self.source.is_some()
    }

    /// Size of the canvas the current source renders into, if any.
    pub fn canvas_size(&self) -> Option<(u32, u32)> {
        self.source
            .as_ref()
            .map(|img| fit_within(img.width(), img.height(), self.bounds))
    }

    pub fn set_font(&mut self, font: StickerFont) {
        self.font = Some(font);
    }

    // ---- mutators -------------------------------------------------------

    pub fn set_filter(&mut self, id: &str) {
        self.state.filter_id = id.to_string();
    }

    pub fn set_background(&mut self, id: &str) {
        self.state.background_id = id.to_string();
    }

    pub fn set_brightness(&mut self, level: u32) {
        self.state.brightness = level;
    }

    pub fn set_contrast(&mut self, level: u32) {
        self.state.contrast = level;
    }

    pub fn set_saturation(&mut self, level: u32) {
        self.state.saturation = level;
    }

    /// Place a sticker at a uniformly random spot inside the current
    /// canvas, leaving a fixed glyph footprint of margin. The position is
    /// chosen here, once; re-renders never move it.
    pub fn add_sticker(&mut self, glyph: &str) -> std::result::Result<&StickerPlacement, Notice> {
        let Some((w, h)) = self.canvas_size() else {
            return Err(Notice::NoImage);
        };
        let span_x = (w as f32 - STICKER_POINT_SIZE).max(0.0);
        let span_y = (h as f32 - STICKER_POINT_SIZE).max(0.0);
        let placement = StickerPlacement {
            glyph: glyph.to_string(),
            x: self.rng.next_f32() * span_x,
            y: self.rng.next_f32() * span_y,
        };
        self.state.stickers.push(placement);
        Ok(self.state.stickers.last().unwrap())
    }

    /// Restore the default editor state exactly.
    pub fn reset(&mut self) -> std::result::Result<(), Notice> {
        if self.source.is_none() {
            return Err(Notice::NoImage);
        }
        self.state.reset();
        Ok(())
    }

    /// Replace the whole state, e.g. when re-editing a saved entry.
    pub fn restore_state(&mut self, state: EditorState) {
        self.state = state;
    }

    /// Drop the loaded image. The edit state survives until `reset`.
    pub fn remove_image(&mut self) {
        self.source = None;
    }

    // ---- loading --------------------------------------------------------

    /// Validate upload bytes and claim a load ticket. Any previously
    /// issued ticket becomes stale immediately.
    pub fn begin_load(&mut self, bytes: &[u8]) -> Result<LoadTicket> {
        check_upload(bytes, EDITOR_MAX_BYTES)?;
        self.load_seq += 1;
        Ok(LoadTicket { seq: self.load_seq })
    }

    /// Apply a finished decode. Returns `false` (and changes nothing) when
    /// a newer load was started since the ticket was issued.
    pub fn complete_load(&mut self, ticket: LoadTicket, image: DynamicImage) -> bool {
        if ticket.seq != self.load_seq {
            tracing::debug!(
                stale = ticket.seq,
                current = self.load_seq,
                "discarding superseded decode"
            );
            return false;
        }
        self.source = Some(image);
        true
    }

    /// Convenience: validate, decode and apply in one call.
    pub async fn load_image(&mut self, bytes: Vec<u8>) -> Result<bool> {
        let ticket = self.begin_load(&bytes)?;
        let image = decode_image(bytes).await?;
        Ok(self.complete_load(ticket, image))
    }

    // ---- rendering ------------------------------------------------------

    /// Re-render the current state. `None` when no image is loaded.
    pub fn render(&self) -> Option<RgbaImage> {
        self.source
            .as_ref()
            .map(|img| compose(img, &self.state, self.bounds, self.font.as_ref()))
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal deterministic generator for sticker placement (the only random
/// choice in the engine, fixed at insertion time).
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(w, h, Rgba([50, 90, 120, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    fn image_of(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(w, h, Rgba([1, 2, 3, 255])))
    }

    #[test]
    fn test_sticker_without_image_is_a_notice() {
        let mut session = EditorSession::with_seed(EDITOR_BOUNDS, 7);
        assert_eq!(session.add_sticker("🎄"), Err(Notice::NoImage));
        assert!(session.state().stickers.is_empty());
    }

    #[test]
    fn test_reset_without_image_is_a_notice() {
        let mut session = EditorSession::with_seed(EDITOR_BOUNDS, 7);
        assert_eq!(session.reset(), Err(Notice::NoImage));
    }

    #[test]
    fn test_sticker_lands_inside_the_canvas_margin() {
        let mut session = EditorSession::with_seed(EDITOR_BOUNDS, 42);
        let ticket = session.begin_load(&png_bytes(4, 4)).unwrap();
        session.complete_load(ticket, image_of(300, 200));

        for _ in 0..50 {
            session.add_sticker("⭐").unwrap();
        }
        let (w, h) = session.canvas_size().unwrap();
        for s in &session.state().stickers {
            assert!(s.x >= 0.0 && s.x <= w as f32 - STICKER_POINT_SIZE);
            assert!(s.y >= 0.0 && s.y <= h as f32 - STICKER_POINT_SIZE);
        }
    }

    #[test]
    fn test_seeded_placement_is_reproducible() {
        let mut a = EditorSession::with_seed(EDITOR_BOUNDS, 99);
        let mut b = EditorSession::with_seed(EDITOR_BOUNDS, 99);
        for s in [&mut a, &mut b] {
            let ticket = s.begin_load(&png_bytes(4, 4)).unwrap();
            s.complete_load(ticket, image_of(300, 200));
            s.add_sticker("🎁").unwrap();
        }
        assert_eq!(a.state().stickers, b.state().stickers);
    }

    #[test]
    fn test_stale_decode_is_discarded() {
        let mut session = EditorSession::with_seed(EDITOR_BOUNDS, 1);
        let first = session.begin_load(&png_bytes(4, 4)).unwrap();
        let second = session.begin_load(&png_bytes(4, 4)).unwrap();

        // The earlier decode finishes late: it must not win.
        assert!(!session.complete_load(first, image_of(10, 10)));
        assert!(!session.has_image());

        assert!(session.complete_load(second, image_of(20, 20)));
        assert_eq!(session.canvas_size(), Some((20, 20)));
    }

    #[test]
    fn test_oversized_load_never_issues_a_ticket() {
        let mut session = EditorSession::with_seed(EDITOR_BOUNDS, 1);
        let mut bytes = png_bytes(2, 2);
        bytes.resize(11 * 1024 * 1024, 0);
        assert!(session.begin_load(&bytes).is_err());
        assert!(!session.has_image());
    }

    #[test]
    fn test_reset_restores_the_default_state() {
        let mut session = EditorSession::with_seed(EDITOR_BOUNDS, 5);
        let ticket = session.begin_load(&png_bytes(4, 4)).unwrap();
        session.complete_load(ticket, image_of(100, 100));

        session.set_filter("cool");
        session.set_background("night");
        session.set_brightness(140);
        session.add_sticker("❄️").unwrap();
        session.reset().unwrap();

        assert!(session.state().is_unedited());
    }

    #[tokio::test]
    async fn test_load_image_applies_the_decode() {
        let mut session = EditorSession::with_seed(EDITOR_BOUNDS, 3);
        assert!(session.load_image(png_bytes(6, 5)).await.unwrap());
        assert_eq!(session.canvas_size(), Some((6, 5)));
        assert!(session.render().is_some());
    }

    #[test]
    fn test_splitmix_is_deterministic_and_in_range() {
        let mut a = SplitMix64::new(123);
        let mut b = SplitMix64::new(123);
        for _ in 0..100 {
            let x = a.next_f32();
            assert_eq!(x, b.next_f32());
            assert!((0.0..1.0).contains(&x));
        }
    }
}
