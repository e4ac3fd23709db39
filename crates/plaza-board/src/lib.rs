//! The shared occupancy board.
//!
//! [`Board`] owns the grid of cells and the box roster, enforces the
//! four-phase transition table under concurrent access, and runs the two
//! notification channels: synchronous per-cell subscribers and batched
//! listeners flushed through [`Board::send_state_and_changes`].
//! [`BoardProxy`] is the narrowed handle that can only trigger flushes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod clock;
pub mod config;
pub mod proxy;
pub(crate) mod roster;
pub mod spot;

pub use board::{Board, FlushReport};
pub use config::{BoardConfig, BoxSpec, ConfigError};
pub use proxy::BoardProxy;
