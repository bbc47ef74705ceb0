//! Collection entry shapes and identity assignment.
//!
//! Two entry shapes share one lifecycle: the card gallery stores edited
//! images, the pet gallery stores ranked records with votes. Both get
//! their id and timestamp from the store at creation time and keep them
//! for life; re-edits only ever replace the rendered image and the editor
//! state that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::state::edit::EditorState;

/// The store-facing surface shared by both entry shapes.
pub trait EntryRecord: Clone {
    fn id(&self) -> i64;
    fn created_at(&self) -> DateTime<Utc>;

    /// Called exactly once, by the store, at creation.
    fn assign_identity(&mut self, id: i64, at: DateTime<Utc>);

    /// Re-edit: replace the rendered image and the state that produced
    /// it, nothing else.
    fn replace_render(&mut self, rendered: String, state: EditorState);

    /// Field checks run before an entry enters the collection.
    fn validate(&self) -> Result<()>;
}

/// Implemented by entries that can be voted on.
pub trait Voted {
    fn votes(&self) -> u32;
    fn add_vote(&mut self);
}

/// A saved card in the image gallery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntry {
    pub id: i64,
    pub label: String,
    /// Original upload, as a data URL (re-edit starts from this).
    pub original_image: String,
    /// Pipeline output, as a data URL.
    pub rendered_image: String,
    pub created_at: DateTime<Utc>,
    pub editor_state: EditorState,
}

impl GalleryEntry {
    /// A draft entry; the store assigns id and timestamp on `create`.
    pub fn draft(
        label: impl Into<String>,
        original_image: String,
        rendered_image: String,
        editor_state: EditorState,
    ) -> Self {
        Self {
            id: 0,
            label: label.into(),
            original_image,
            rendered_image,
            created_at: DateTime::<Utc>::MIN_UTC,
            editor_state,
        }
    }
}

impl EntryRecord for GalleryEntry {
    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn assign_identity(&mut self, id: i64, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = at;
    }

    fn replace_render(&mut self, rendered: String, state: EditorState) {
        self.rendered_image = rendered;
        self.editor_state = state;
    }

    fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(EditorError::MissingField("label"));
        }
        if self.rendered_image.is_empty() {
            return Err(EditorError::MissingField("renderedImage"));
        }
        Ok(())
    }
}

/// A ranked record in the pet gallery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub age: u32,
    pub description: String,
    /// Submitted photo, as a data URL.
    pub image: String,
    /// Present once the photo has been through the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_state: Option<EditorState>,
    pub vote_count: u32,
    pub created_at: DateTime<Utc>,
}

impl RankedEntry {
    pub fn draft(
        name: impl Into<String>,
        category: impl Into<String>,
        age: u32,
        description: impl Into<String>,
        image: String,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            category: category.into(),
            age,
            description: description.into(),
            image,
            edited_image: None,
            editor_state: None,
            vote_count: 0,
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }
}

impl EntryRecord for RankedEntry {
    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn assign_identity(&mut self, id: i64, at: DateTime<Utc>) {
        self.id = id;
        self.created_at = at;
    }

    fn replace_render(&mut self, rendered: String, state: EditorState) {
        self.edited_image = Some(rendered);
        self.editor_state = Some(state);
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(EditorError::MissingField("name"));
        }
        if self.category.trim().is_empty() {
            return Err(EditorError::MissingField("category"));
        }
        if self.image.is_empty() {
            return Err(EditorError::MissingField("image"));
        }
        Ok(())
    }
}

impl Voted for RankedEntry {
    fn votes(&self) -> u32 {
        self.vote_count
    }

    fn add_vote(&mut self) {
        self.vote_count += 1;
    }
}

/// Issues entry ids derived from millisecond timestamps, strictly
/// increasing even when two entries land in the same millisecond. Ids are
/// never reused: the store seeds `last` with the collection's maximum id
/// after every load.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub(crate) fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }

    pub(crate) fn next(&mut self, now_ms: i64) -> i64 {
        let id = now_ms.max(self.last + 1);
        self.last = id;
        id
    }
}
