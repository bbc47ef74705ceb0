//! Editor state management.
//!
//! - `edit.rs` - the serializable edit parameters and sticker placements
//! - `session.rs` - the per-session controller (mutators, load tickets,
//!   render entry point)

pub mod edit;
pub mod session;

pub use edit::{EditorState, StickerPlacement};
pub use session::{EditorSession, LoadTicket, Notice};
