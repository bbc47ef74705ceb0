//! Non-destructive edit parameters for a loaded photo.
//!
//! This struct stores every adjustment made in the editor. It is serialized
//! to JSON inside each collection entry, enabling complete re-editing of a
//! saved card later: restore the state, re-run the pipeline, same pixels.

use serde::{Deserialize, Serialize};

/// A sticker committed to the canvas.
///
/// The position is chosen once, at insertion time, and never moves again.
/// List order is draw order: later stickers are painted on top.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StickerPlacement {
    /// The glyph to draw (usually an emoji from the palette).
    #[serde(rename = "emoji")]
    pub glyph: String,
    pub x: f32,
    pub y: f32,
}

/// All edit parameters for one editing session.
///
/// Brightness, contrast and saturation are percentages where 100 is
/// neutral. They are intentionally NOT clamped: values outside the usual
/// slider range pass through to the pipeline unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EditorState {
    /// Active filter preset id ("none" for no filter).
    #[serde(rename = "filter")]
    pub filter_id: String,

    /// Active background preset id ("none" for no fill).
    #[serde(rename = "background")]
    pub background_id: String,

    pub brightness: u32,
    pub contrast: u32,
    pub saturation: u32,

    /// Placed stickers in insertion (= z) order.
    pub stickers: Vec<StickerPlacement>,
}

impl Default for EditorState {
    /// The identity state: no filter, no background, neutral adjustments,
    /// no stickers.
    fn default() -> Self {
        Self {
            filter_id: "none".to_string(),
            background_id: "none".to_string(),
            brightness: 100,
            contrast: 100,
            saturation: 100,
            stickers: Vec::new(),
        }
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert to JSON for storage inside a collection entry.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON (from a collection entry).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check if this represents an unedited image (all values at default).
    pub fn is_unedited(&self) -> bool {
        *self == Self::default()
    }

    /// Reset all adjustments to default (no edits, no stickers).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
