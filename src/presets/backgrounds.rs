//! Background catalog: two-stop linear gradients painted behind the image.
//!
//! Stops are `[r, g, b]` triples; the gradient always runs from the
//! top-left corner to the bottom-right corner of the canvas.

/// A named background preset. `stops` is `None` for the "no fill" entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub stops: Option<([u8; 3], [u8; 3])>,
}

/// Built-in background presets.
pub const BACKGROUNDS: &[BackgroundPreset] = &[
    BackgroundPreset {
        id: "none",
        name: "No background",
        stops: None,
    },
    BackgroundPreset {
        id: "red",
        name: "Christmas Red",
        stops: Some(([0x8b, 0x00, 0x00], [0xc4, 0x1e, 0x3a])),
    },
    BackgroundPreset {
        id: "green",
        name: "Pine Green",
        stops: Some(([0x0a, 0x5d, 0x0a], [0x06, 0x47, 0x06])),
    },
    BackgroundPreset {
        id: "gold",
        name: "Festive Gold",
        stops: Some(([0xb8, 0x86, 0x0b], [0xd4, 0xaf, 0x37])),
    },
    BackgroundPreset {
        id: "snow",
        name: "Snow",
        stops: Some(([0xe0, 0xf7, 0xff], [0xff, 0xff, 0xff])),
    },
    BackgroundPreset {
        id: "night",
        name: "Starry Night",
        stops: Some(([0x0a, 0x11, 0x28], [0x1e, 0x3a, 0x5f])),
    },
    BackgroundPreset {
        id: "candy",
        name: "Candy",
        stops: Some(([0xff, 0x6b, 0x6b], [0xff, 0xa8, 0xa8])),
    },
    BackgroundPreset {
        id: "blue",
        name: "Ice Blue",
        stops: Some(([0x4f, 0xac, 0xfe], [0x00, 0xf2, 0xfe])),
    },
];

/// Gradient stops for a background id, or `None` when no fill pass should
/// run (the "none" preset and unknown ids).
pub fn background_fill(id: &str) -> Option<([u8; 3], [u8; 3])> {
    BACKGROUNDS
        .iter()
        .find(|bg| bg.id == id)
        .and_then(|bg| bg.stops)
}
