//! Background fill: a two-stop linear gradient across the canvas diagonal.

use image::{Rgba, RgbaImage};

/// Paint the full canvas with a gradient running from the top-left corner
/// (`start`) to the bottom-right corner (`end`). Each pixel is colored by
/// its projection onto the diagonal.
pub fn fill_gradient(canvas: &mut RgbaImage, start: [u8; 3], end: [u8; 3]) {
    let (w, h) = canvas.dimensions();
    let dx = w as f32;
    let dy = h as f32;
    let len_sq = dx * dx + dy * dy;

    for (x, y, px) in canvas.enumerate_pixels_mut() {
        let t = (x as f32 * dx + y as f32 * dy) / len_sq;
        *px = Rgba([
            lerp(start[0], end[0], t),
            lerp(start[1], end[1], t),
            lerp(start[2], end[2], t),
            255,
        ]);
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
