//! Filter catalog: each preset is a fixed, ordered list of tonal operations.
//!
//! The recipes are applied AFTER the three base adjustments (brightness,
//! contrast, saturation). Reordering a recipe changes the rendered pixels,
//! so the lists below are part of the contract.

/// One tonal operation. Parameters are unit factors where 1.0 is neutral,
/// except `Sepia` (amount in 0..=1) and `HueRotate` (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneOp {
    Brightness(f32),
    Contrast(f32),
    Saturate(f32),
    Sepia(f32),
    HueRotate(f32),
}

/// A named filter preset with its ordered tonal recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub ops: &'static [ToneOp],
}

/// Built-in filter presets, identity first.
pub const FILTERS: &[FilterPreset] = &[
    FilterPreset {
        id: "none",
        name: "Normal",
        ops: &[],
    },
    FilterPreset {
        id: "warm",
        name: "Warm",
        ops: &[ToneOp::Sepia(0.30), ToneOp::HueRotate(-10.0)],
    },
    FilterPreset {
        id: "vintage",
        name: "Vintage",
        ops: &[
            ToneOp::Sepia(0.50),
            ToneOp::Contrast(1.1),
            ToneOp::Brightness(1.1),
        ],
    },
    FilterPreset {
        id: "festive",
        name: "Festive",
        ops: &[ToneOp::Saturate(1.5), ToneOp::HueRotate(10.0)],
    },
    FilterPreset {
        id: "golden",
        name: "Golden",
        ops: &[
            ToneOp::Sepia(0.20),
            ToneOp::Saturate(1.3),
            ToneOp::Contrast(1.1),
        ],
    },
    FilterPreset {
        id: "cool",
        name: "Cool",
        ops: &[ToneOp::HueRotate(180.0), ToneOp::Saturate(1.2)],
    },
    FilterPreset {
        id: "dramatic",
        name: "Dramatic",
        ops: &[
            ToneOp::Contrast(1.4),
            ToneOp::Brightness(0.9),
            ToneOp::Saturate(1.3),
        ],
    },
];

/// Look up a preset by id. Unknown ids resolve to the identity preset,
/// matching the editor's behavior of simply adding no extra operations.
pub fn filter_by_id(id: &str) -> &'static FilterPreset {
    FILTERS
        .iter()
        .find(|f| f.id == id)
        .unwrap_or(&FILTERS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_preset_is_empty() {
        assert_eq!(filter_by_id("none").ops.len(), 0);
    }

    #[test]
    fn test_unknown_id_falls_back_to_identity() {
        assert_eq!(filter_by_id("sparkle").id, "none");
    }

    #[test]
    fn test_vintage_recipe_order() {
        let ops = filter_by_id("vintage").ops;
        assert_eq!(
            ops,
            &[
                ToneOp::Sepia(0.50),
                ToneOp::Contrast(1.1),
                ToneOp::Brightness(1.1),
            ]
        );
    }
}
