//! Core types and traits for the Plaza occupancy engine.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! value types shared by every other crate in the workspace: grid
//! positions, occupancy notes and their phases, broadcast drops, the
//! read-only box projection handed to observers, error types, and the
//! two observer traits (batched [`BoardListener`] and synchronous
//! [`NoteSubscriber`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod note;
pub mod position;
pub mod traits;

pub use error::{BoardError, ObserverError, PlanError};
pub use id::{BoxId, GroupId};
pub use note::{BoxInfo, BoxRoster, CellDrop, DropBatch, Note, Phase, Stamp};
pub use position::{Position, Rect};
pub use traits::{BoardListener, NoteSubscriber, RecorderListener};
