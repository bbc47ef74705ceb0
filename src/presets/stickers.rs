//! The festive sticker palette offered by the editor shell.
//!
//! The engine itself accepts any glyph string; this list is reference data
//! for palette UIs.

pub const STICKERS: &[&str] = &[
    "🎄", "🎅", "🦌", "❄️", "⭐", "🎁", "🔔", "🕯️", "🌟", "🤶", "☃️", "🕊️", "✨", "🎀", "🧦", "🍪",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_sixteen_glyphs() {
        assert_eq!(STICKERS.len(), 16);
    }
}
