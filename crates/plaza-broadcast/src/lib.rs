//! Change broadcast pipeline.
//!
//! Sits between the board and its downstream observers:
//!
//! - [`BroadcastAgent`] asks the board (through a [`BoardProxy`]) to flush.
//! - [`BroadcastTicker`] is the driver thread calling the agent on a
//!   fixed interval.
//! - [`Recorder`] listens to flushes and republishes the cumulative
//!   picture of the occupied board to [`RecorderListener`]s.
//! - [`NoteAccountant`] is a per-cell subscriber keeping an audit log.
//!
//! [`BoardProxy`]: plaza_board::BoardProxy
//! [`RecorderListener`]: plaza_core::RecorderListener

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accountant;
pub mod agent;
pub mod recorder;
pub mod ticker;

pub use accountant::NoteAccountant;
pub use agent::BroadcastAgent;
pub use recorder::Recorder;
pub use ticker::{BroadcastTicker, TickerConfig};
