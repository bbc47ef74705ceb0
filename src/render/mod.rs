//! The deterministic compositing pipeline.
//!
//! - `fit.rs` - scale-to-fit math and the two canvas bounding boxes
//! - `background.rs` - two-stop gradient fill
//! - `tone.rs` - tonal operations folded into one color operator
//! - `stickers.rs` - glyph rasterization for placed stickers
//! - `pipeline.rs` - the fixed-order composition of all of the above

pub mod background;
pub mod fit;
pub mod pipeline;
pub mod stickers;
pub mod tone;

pub use fit::{fit_within, FitBounds, EDITOR_BOUNDS, MODAL_BOUNDS};
pub use pipeline::compose;
pub use stickers::{StickerFont, STICKER_POINT_SIZE};
pub use tone::{build_operator, ColorMatrix};
