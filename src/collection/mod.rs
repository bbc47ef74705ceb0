//! The persisted collection: entries, whole-document store, and derived
//! queries.
//!
//! - `entry.rs` - the two entry shapes and id assignment
//! - `store.rs` - load/save + CRUD over one JSON document per namespace
//! - `query.rs` - search, sort, ranking and category listing

pub mod entry;
pub mod query;
pub mod store;

pub use entry::{EntryRecord, GalleryEntry, RankedEntry, Voted};
pub use query::{categories, most_voted_ids, search, search_labels, sorted, SortKey, ALL_CATEGORIES};
pub use store::{CollectionStore, StoreConfig};
