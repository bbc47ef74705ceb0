//! tinsel - festive photo editor engine and collection store.
//!
//! The crate covers the two cores a shell builds on:
//!
//! - the **editor engine**: an [`EditorSession`] holding a decoded photo
//!   plus an [`EditorState`], rendered by a deterministic compositing
//!   pipeline (background gradient, tonal operator, stickers) into a
//!   bounded canvas;
//! - the **collection store**: a [`CollectionStore`] persisting entries as
//!   one JSON document per namespace, with CRUD, votes and pure derived
//!   queries (search, sort, most-voted ranking).
//!
//! Buttons, sliders, drag-and-drop and other shell concerns stay outside;
//! they call in here and display what comes back.

pub mod collection;
pub mod error;
pub mod media;
pub mod presets;
pub mod render;
pub mod state;

pub use collection::{
    categories, most_voted_ids, search, search_labels, sorted, CollectionStore, EntryRecord,
    GalleryEntry, RankedEntry, SortKey, StoreConfig, Voted, ALL_CATEGORIES,
};
pub use error::{EditorError, Result};
pub use media::{
    check_upload, decode_image, export_file_name, from_data_url, normalize_for_store, to_data_url,
    COLLECTION_MAX_BYTES, EDITOR_MAX_BYTES,
};
pub use presets::{background_fill, filter_by_id, ToneOp, BACKGROUNDS, FILTERS, STICKERS};
pub use render::{compose, FitBounds, StickerFont, EDITOR_BOUNDS, MODAL_BOUNDS};
pub use state::{EditorSession, EditorState, LoadTicket, Notice, StickerPlacement};
