//! The collection store: one JSON document per collection namespace.
//!
//! The whole collection is loaded and saved as a unit; there is no
//! incremental persistence. On-disk order is insertion order, newest
//! first, and is independent of any display ordering (which is always a
//! derived sort, see `query.rs`).
//!
//! Failure policy:
//! - a missing or unreadable document loads as an EMPTY collection with a
//!   logged warning, never a crash,
//! - a failed save surfaces an error but leaves the in-memory list as it
//!   is (at-most-once durability, best effort),
//! - operating on an absent id is a silent no-op reported through the
//!   return value.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::collection::entry::{EntryRecord, IdGenerator, Voted};
use crate::error::Result;
use crate::state::edit::EditorState;

/// Where a collection document lives.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    /// The default location for a named collection:
    /// - Linux: ~/.local/share/tinsel/<namespace>.json
    /// - macOS: ~/Library/Application Support/tinsel/<namespace>.json
    /// - Windows: %APPDATA%\tinsel\<namespace>.json
    pub fn for_namespace(namespace: &str) -> Self {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push("tinsel");
        path.push(format!("{namespace}.json"));
        Self { path }
    }

    /// An explicit document path (tests, portable installs).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// In-memory collection plus its document path. The store owns the only
/// mutable copy; queries read a snapshot via [`CollectionStore::entries`].
pub struct CollectionStore<E> {
    entries: Vec<E>,
    path: PathBuf,
    ids: IdGenerator,
}

impl<E> CollectionStore<E>
where
    E: EntryRecord + Serialize + DeserializeOwned,
{
    pub fn open(config: StoreConfig) -> Self {
        Self {
            entries: Vec::new(),
            path: config.path,
            ids: IdGenerator::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn get(&self, id: i64) -> Option<&E> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read the whole document. Any failure degrades to an empty
    /// collection; the number of loaded entries is returned.
    pub async fn load(&mut self) -> usize {
        self.entries = match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<E>>(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(path = %self.path.display(), %err,
                        "collection document is unreadable; starting empty");
                    Vec::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no collection document yet");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err,
                    "failed to read collection document; starting empty");
                Vec::new()
            }
        };

        // Seed the id sequence so loaded ids are never reissued.
        for entry in &self.entries {
            self.ids.observe(entry.id());
        }
        self.entries.len()
    }

    /// Write the whole document. The in-memory list is the source of
    /// truth either way; a failed write does not roll it back.
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let doc = serde_json::to_vec_pretty(&self.entries)?;
        tokio::fs::write(&self.path, doc).await?;
        Ok(())
    }

    /// Validate a draft, assign its identity, prepend it (newest first)
    /// and persist. Returns the assigned id.
    pub async fn create(&mut self, mut entry: E) -> Result<i64> {
        entry.validate()?;
        let now = Utc::now();
        let id = self.ids.next(now.timestamp_millis());
        entry.assign_identity(id, now);
        self.entries.insert(0, entry);
        self.save().await?;
        Ok(id)
    }

    /// Re-edit: replace the rendered image and editor state of one entry
    /// in place, then persist. `false` when the id is absent (no write).
    pub async fn update_render(
        &mut self,
        id: i64,
        rendered: String,
        state: EditorState,
    ) -> Result<bool> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id() == id) else {
            return Ok(false);
        };
        entry.replace_render(rendered, state);
        self.save().await?;
        Ok(true)
    }

    /// Remove one entry and persist. Deleting an absent id is a no-op,
    /// not an error.
    pub async fn delete(&mut self, id: i64) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.save().await?;
        Ok(true)
    }
}

impl<E> CollectionStore<E>
where
    E: EntryRecord + Voted + Serialize + DeserializeOwned,
{
    /// Add exactly one vote and persist. `None` when the id is absent.
    pub async fn increment_vote(&mut self, id: i64) -> Result<Option<u32>> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id() == id) else {
            return Ok(None);
        };
        entry.add_vote();
        let votes = entry.votes();
        self.save().await?;
        Ok(Some(votes))
    }
}
