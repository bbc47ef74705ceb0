//! Asynchronous image decoding.
//!
//! Decoding is CPU-bound, so it runs on the blocking pool. Callers that
//! care about stale results (rapid re-loads in the editor) pair this with
//! the session's load tickets; the decode itself is oblivious to ordering.

use image::DynamicImage;
use tokio::task;

use crate::error::{EditorError, Result};

/// Decode encoded image bytes into pixels off the async thread.
pub async fn decode_image(bytes: Vec<u8>) -> Result<DynamicImage> {
    task::spawn_blocking(move || decode_blocking(&bytes))
        .await
        .map_err(|e| EditorError::Join(e.to_string()))?
}

/// Blocking implementation of image decoding.
fn decode_blocking(bytes: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(bytes)?;
    tracing::debug!(
        width = img.width(),
        height = img.height(),
        "decoded source image"
    );
    Ok(img)
}
