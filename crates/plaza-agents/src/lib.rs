//! Box-side logic for Plaza: moving, choosing, and walking.
//!
//! Each box runs on its own thread and owns one [`Mover`]. The mover
//! speaks the four-phase protocol to the shared board; a [`Decider`]
//! picks which planner candidate to attempt; a [`Walker`] ties planner,
//! decider and mover into the per-box loop.
//!
//! Rejections from the board are ordinary `false` results here. Only
//! programming errors (unknown box, off-board position) surface as `Err`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod decider;
pub mod error;
pub mod mover;
pub mod risk;
pub mod safe;
pub mod walker;

pub use config::{MoverTiming, WalkerConfig};
pub use decider::{Choice, Decider};
pub use error::WalkError;
pub use mover::Mover;
pub use risk::RiskDecider;
pub use safe::SafeDecider;
pub use walker::{WalkReport, Walker};
