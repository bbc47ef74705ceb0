//! Error taxonomy for the editor engine and the collection store.
//!
//! Three families matter here:
//! - validation failures (bad upload, missing field) abort the operation
//!   with no state change,
//! - storage failures degrade (reads fall back to an empty collection,
//!   writes leave the in-memory list untouched),
//! - decode failures surface from the image crate.
//!
//! Operating on a missing entry id is deliberately NOT an error: the CRUD
//! surface treats it as already satisfied and reports it through its
//! return value instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditorError>;

#[derive(Debug, Error)]
pub enum EditorError {
    /// Upload bytes do not carry a recognizable image signature.
    #[error("the file is not a supported image")]
    NotAnImage,

    /// Upload exceeds the configured byte ceiling.
    #[error("image is too large: {actual} bytes (limit {limit})")]
    Oversized { actual: usize, limit: usize },

    /// A required entry field was left empty at creation time.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A persisted image payload is not a well-formed data URL.
    #[error("malformed data URL payload")]
    MalformedDataUrl,

    /// Decoding or encoding pixels failed.
    #[error("image processing failed: {0}")]
    Image(#[from] image::ImageError),

    /// Reading or writing the collection document failed.
    #[error("collection storage failed: {0}")]
    Io(#[from] std::io::Error),

    /// The collection document could not be serialized.
    #[error("collection serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A background task was cancelled or panicked.
    #[error("background task aborted: {0}")]
    Join(String),
}

impl EditorError {
    /// True for failures caused by user input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EditorError::NotAnImage
                | EditorError::Oversized { .. }
                | EditorError::MissingField(_)
                | EditorError::MalformedDataUrl
        )
    }

    /// True for persistence-layer failures.
    pub fn is_storage(&self) -> bool {
        matches!(self, EditorError::Io(_) | EditorError::Serialize(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(EditorError::NotAnImage.is_validation());
        assert!(EditorError::Oversized {
            actual: 6,
            limit: 5
        }
        .is_validation());
        assert!(!EditorError::NotAnImage.is_storage());

        let io = EditorError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(io.is_storage());
        assert!(!io.is_validation());
    }
}
