//! Image ingestion and encoding.
//!
//! - `decode.rs` - async decode of uploaded bytes into pixels
//! - `ingest.rs` - upload validation, storage normalization, data-URL
//!   payloads and export filenames

pub mod decode;
pub mod ingest;

pub use decode::decode_image;
pub use ingest::{
    check_upload, encode_jpeg, encode_png, export_file_name, from_data_url, normalize_for_store,
    to_data_url, COLLECTION_MAX_BYTES, EDITOR_MAX_BYTES, STORE_JPEG_QUALITY, STORE_LONG_EDGE,
};
