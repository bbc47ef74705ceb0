//! Scale-to-fit math for the editor canvas.
//!
//! The clamp runs in two steps, in a fixed order: width first (scaling
//! height proportionally), then the RESULT height (scaling width). Images
//! constrained on both axes land inside both limits only because the
//! second step re-checks the output of the first.

/// A maximum bounding box for the rendered canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitBounds {
    pub max_width: u32,
    pub max_height: u32,
}

/// Canvas box for the standalone editor.
pub const EDITOR_BOUNDS: FitBounds = FitBounds {
    max_width: 600,
    max_height: 500,
};

/// Canvas box for the smaller modal editor.
pub const MODAL_BOUNDS: FitBounds = FitBounds {
    max_width: 500,
    max_height: 400,
};

/// Compute the target canvas size for a source image, preserving aspect
/// ratio. Never returns a zero dimension.
pub fn fit_within(width: u32, height: u32, bounds: FitBounds) -> (u32, u32) {
    let mut w = width as f64;
    let mut h = height as f64;

    if w > bounds.max_width as f64 {
        h = (bounds.max_width as f64 / w) * h;
        w = bounds.max_width as f64;
    }

    if h > bounds.max_height as f64 {
        w = (bounds.max_height as f64 / h) * w;
        h = bounds.max_height as f64;
    }

    ((w.round() as u32).max(1), (h.round() as u32).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_image_is_width_bound() {
        // 2000x1000 into 600x500: width clamps to 600, height follows to
        // 300 and is already inside the height limit.
        assert_eq!(fit_within(2000, 1000, EDITOR_BOUNDS), (600, 300));
    }

    #[test]
    fn test_tall_image_is_clamped_twice() {
        // 1000x2000: width step gives 600x1200, height step then gives
        // 250x500.
        assert_eq!(fit_within(1000, 2000, EDITOR_BOUNDS), (250, 500));
    }

    #[test]
    fn test_small_image_is_untouched() {
        assert_eq!(fit_within(320, 240, EDITOR_BOUNDS), (320, 240));
    }

    #[test]
    fn test_modal_bounds_are_smaller() {
        assert_eq!(fit_within(2000, 1000, MODAL_BOUNDS), (500, 250));
    }

    #[test]
    fn test_degenerate_source_keeps_one_pixel() {
        assert_eq!(fit_within(10_000, 1, EDITOR_BOUNDS), (600, 1));
    }
}
