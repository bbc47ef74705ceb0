//! Tonal adjustment operators.
//!
//! Every supported operation (brightness, contrast, saturation, sepia,
//! hue rotation) is an affine transform of the RGB vector, so an ordered
//! pipeline of operations folds into ONE matrix + offset pair that is
//! applied in a single pass while drawing the source. The source image is
//! never mutated.
//!
//! Matrix definitions follow the SVG/CSS filter-effects color matrices
//! (Rec. 709-ish luminance weights 0.213 / 0.715 / 0.072), applied
//! directly on 8-bit sRGB values the way a browser canvas does.

use cgmath::{Matrix3, SquareMatrix, Vector3};
use image::Rgba;

use crate::presets::{filter_by_id, ToneOp};
use crate::state::edit::EditorState;

const LUM_R: f32 = 0.213;
const LUM_G: f32 = 0.715;
const LUM_B: f32 = 0.072;

/// An affine color operator: `rgb' = m * rgb + offset`, in 0..=1 space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    m: Matrix3<f32>,
    offset: Vector3<f32>,
}

/// Build a 3x3 matrix from row-major data (cgmath stores column-major).
fn from_rows(r: [[f32; 3]; 3]) -> Matrix3<f32> {
    Matrix3::new(
        r[0][0], r[1][0], r[2][0], // Column 0
        r[0][1], r[1][1], r[2][1], // Column 1
        r[0][2], r[1][2], r[2][2], // Column 2
    )
}

impl ColorMatrix {
    pub fn identity() -> Self {
        Self {
            m: Matrix3::identity(),
            offset: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.m == Matrix3::identity() && self.offset == Vector3::new(0.0, 0.0, 0.0)
    }

    /// The operator for a single tonal operation.
    pub fn from_op(op: ToneOp) -> Self {
        match op {
            ToneOp::Brightness(b) => Self {
                m: Matrix3::from_value(b),
                offset: Vector3::new(0.0, 0.0, 0.0),
            },
            ToneOp::Contrast(c) => Self {
                // Pivot around mid gray: slope c, intercept 0.5 - 0.5c.
                m: Matrix3::from_value(c),
                offset: Vector3::new(0.5 - 0.5 * c, 0.5 - 0.5 * c, 0.5 - 0.5 * c),
            },
            ToneOp::Saturate(s) => Self {
                m: from_rows([
                    [LUM_R + (1.0 - LUM_R) * s, LUM_G - LUM_G * s, LUM_B - LUM_B * s],
                    [LUM_R - LUM_R * s, LUM_G + (1.0 - LUM_G) * s, LUM_B - LUM_B * s],
                    [LUM_R - LUM_R * s, LUM_G - LUM_G * s, LUM_B + (1.0 - LUM_B) * s],
                ]),
                offset: Vector3::new(0.0, 0.0, 0.0),
            },
            ToneOp::Sepia(amount) => {
                // Interpolate between identity (t = 1) and the full sepia
                // matrix (t = 0).
                let t = 1.0 - amount;
                Self {
                    m: from_rows([
                        [0.393 + 0.607 * t, 0.769 - 0.769 * t, 0.189 - 0.189 * t],
                        [0.349 - 0.349 * t, 0.686 + 0.314 * t, 0.168 - 0.168 * t],
                        [0.272 - 0.272 * t, 0.534 - 0.534 * t, 0.131 + 0.869 * t],
                    ]),
                    offset: Vector3::new(0.0, 0.0, 0.0),
                }
            }
            ToneOp::HueRotate(deg) => {
                let (s, c) = deg.to_radians().sin_cos();
                Self {
                    m: from_rows([
                        [
                            LUM_R + c * (1.0 - LUM_R) - s * LUM_R,
                            LUM_G - c * LUM_G - s * LUM_G,
                            LUM_B - c * LUM_B + s * (1.0 - LUM_B),
                        ],
                        [
                            LUM_R - c * LUM_R + s * 0.143,
                            LUM_G + c * (1.0 - LUM_G) + s * 0.140,
                            LUM_B - c * LUM_B - s * 0.283,
                        ],
                        [
                            LUM_R - c * LUM_R - s * (1.0 - LUM_R),
                            LUM_G - c * LUM_G + s * LUM_G,
                            LUM_B + c * (1.0 - LUM_B) + s * LUM_B,
                        ],
                    ]),
                    offset: Vector3::new(0.0, 0.0, 0.0),
                }
            }
        }
    }

    /// Compose: apply `self` first, then `next`.
    pub fn then(&self, next: &ColorMatrix) -> Self {
        Self {
            m: next.m * self.m,
            offset: next.m * self.offset + next.offset,
        }
    }

    /// Apply the operator to one pixel. Alpha passes through untouched.
    pub fn apply(&self, px: Rgba<u8>) -> Rgba<u8> {
        let v = Vector3::new(
            px[0] as f32 / 255.0,
            px[1] as f32 / 255.0,
            px[2] as f32 / 255.0,
        );
        let out = self.m * v + self.offset;
        Rgba([to_channel(out.x), to_channel(out.y), to_channel(out.z), px[3]])
    }
}

fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Fold the full tonal pipeline for an editor state into one operator:
/// the three base adjustments first (brightness, contrast, saturation),
/// then the active filter preset's recipe in its fixed order.
pub fn build_operator(state: &EditorState) -> ColorMatrix {
    let base = [
        ToneOp::Brightness(state.brightness as f32 / 100.0),
        ToneOp::Contrast(state.contrast as f32 / 100.0),
        ToneOp::Saturate(state.saturation as f32 / 100.0),
    ];
    let preset = filter_by_id(&state.filter_id);

    base.iter()
        .chain(preset.ops.iter())
        .fold(ColorMatrix::identity(), |acc, &op| {
            acc.then(&ColorMatrix::from_op(op))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(r: u8, g: u8, b: u8) -> Rgba<u8> {
        Rgba([r, g, b, 255])
    }

    #[test]
    fn test_neutral_state_is_identity() {
        let op = build_operator(&EditorState::default());
        assert!(op.is_identity());
        assert_eq!(op.apply(px(10, 128, 250)), px(10, 128, 250));
    }

    #[test]
    fn test_brightness_scales_channels() {
        let op = ColorMatrix::from_op(ToneOp::Brightness(2.0));
        assert_eq!(op.apply(px(100, 10, 200)), px(200, 20, 255));
    }

    #[test]
    fn test_contrast_pivots_on_mid_gray() {
        let op = ColorMatrix::from_op(ToneOp::Contrast(1.5));
        // 0.5 maps to itself regardless of the contrast factor.
        let out = op.apply(Rgba([128, 128, 128, 255]));
        assert!(out[0].abs_diff(128) <= 1);
    }

    #[test]
    fn test_full_desaturation_yields_luminance_gray() {
        let op = ColorMatrix::from_op(ToneOp::Saturate(0.0));
        let out = op.apply(px(255, 0, 0));
        assert_eq!(out[0], out[1]);
        assert_eq!(out[1], out[2]);
        // 0.213 * 255 ~= 54
        assert!(out[0].abs_diff(54) <= 1);
    }

    #[test]
    fn test_hue_rotate_zero_is_identity_within_rounding() {
        let op = ColorMatrix::from_op(ToneOp::HueRotate(0.0));
        let out = op.apply(px(37, 142, 209));
        assert!(out[0].abs_diff(37) <= 1);
        assert!(out[1].abs_diff(142) <= 1);
        assert!(out[2].abs_diff(209) <= 1);
    }

    #[test]
    fn test_sepia_full_matches_reference_white() {
        let op = ColorMatrix::from_op(ToneOp::Sepia(1.0));
        let out = op.apply(px(255, 255, 255));
        // Rows of the sepia matrix sum to 1.351 / 1.203 / 0.937.
        assert_eq!(out, px(255, 255, 239));
    }

    #[test]
    fn test_composition_order_matters() {
        let bright = ColorMatrix::from_op(ToneOp::Brightness(1.4));
        let contrast = ColorMatrix::from_op(ToneOp::Contrast(0.5));
        let a = bright.then(&contrast).apply(px(40, 90, 200));
        let b = contrast.then(&bright).apply(px(40, 90, 200));
        assert_ne!(a, b);
    }

    #[test]
    fn test_preset_ops_append_after_base_adjustments() {
        // A state with non-neutral brightness plus a preset must differ
        // from the preset alone.
        let mut state = EditorState::default();
        state.filter_id = "dramatic".to_string();
        let preset_only = build_operator(&state);

        state.brightness = 150;
        let with_base = build_operator(&state);

        assert_ne!(
            preset_only.apply(px(80, 80, 80)),
            with_base.apply(px(80, 80, 80))
        );
    }

    #[test]
    fn test_alpha_is_preserved() {
        let op = ColorMatrix::from_op(ToneOp::Brightness(0.5));
        assert_eq!(op.apply(Rgba([100, 100, 100, 77]))[3], 77);
    }
}
