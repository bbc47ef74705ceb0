//! Immutable reference data for the editor.
//!
//! - `filters.rs` - filter presets as ordered tonal-operation recipes
//! - `backgrounds.rs` - background presets as two-stop gradients
//! - `stickers.rs` - the festive sticker glyph palette

pub mod backgrounds;
pub mod filters;
pub mod stickers;

pub use backgrounds::{background_fill, BackgroundPreset, BACKGROUNDS};
pub use filters::{filter_by_id, FilterPreset, ToneOp, FILTERS};
pub use stickers::STICKERS;
