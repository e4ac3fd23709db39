//! Plaza: many boxes, one board.
//!
//! Plaza coordinates independent agents ("boxes"), each on its own
//! thread, over a shared grid. Every cell follows a four-phase claim
//! protocol (`ToArrive → Arrive → ToLeave → Left`) enforced by the
//! [`Board`](board::Board); contention is an ordinary `false`, never a
//! panic. Observers either subscribe to single cells synchronously or
//! receive batched deltas whenever the board is flushed.
//!
//! This is the facade crate re-exporting every Plaza sub-crate.
//!
//! # Quick start
//!
//! ```rust
//! use plaza::prelude::*;
//! use std::sync::Arc;
//!
//! let board = Arc::new(Board::new(BoardConfig::new(10, 10).with_boxes([0])).unwrap());
//! let mover = Mover::with_timing(0, Arc::clone(&board), MoverTiming::IMMEDIATE);
//!
//! assert!(mover.add_box(Position::new(4, 9)).unwrap());
//! assert!(mover.move_box(Position::new(4, 9), Position::new(4, 8)).unwrap());
//! assert_eq!(board.note_at(Position::new(4, 8)).unwrap(), Note::new(0, Phase::Arrive));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plaza-core` | Positions, notes, drops, errors, observer traits |
//! | [`board`] | `plaza-board` | The board, its config, and the flush proxy |
//! | [`planner`] | `plaza-planner` | Up/Down/Step path planners |
//! | [`agents`] | `plaza-agents` | Mover, deciders, walker loop |
//! | [`broadcast`] | `plaza-broadcast` | Broadcast agent, ticker, recorder, note accountant |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types, errors and observer traits (`plaza-core`).
pub use plaza_core as types;

/// The concurrent occupancy board (`plaza-board`).
///
/// [`board::Board`] is the only shared mutable state; hand it to every
/// box thread in an `Arc`.
pub use plaza_board as board;

/// Path planners (`plaza-planner`).
pub use plaza_planner as planner;

/// Movers, deciders and the walker loop (`plaza-agents`).
pub use plaza_agents as agents;

/// Change broadcast pipeline (`plaza-broadcast`).
///
/// Drive flushes with [`broadcast::BroadcastTicker`]; fold them into a
/// full picture with [`broadcast::Recorder`].
pub use plaza_broadcast as broadcast;

/// Common imports for typical Plaza usage.
///
/// ```rust
/// use plaza::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use plaza_core::{
        BoardListener, BoxId, BoxInfo, BoxRoster, CellDrop, DropBatch, GroupId, Note,
        NoteSubscriber, Phase, Position, Rect, RecorderListener, Stamp,
    };

    // Errors
    pub use plaza_core::{BoardError, ObserverError, PlanError};

    // Board
    pub use plaza_board::{Board, BoardConfig, BoardProxy, BoxSpec, ConfigError, FlushReport};

    // Planners
    pub use plaza_planner::{DownPlanner, Planner, StepPlanner, UpPlanner};

    // Agents
    pub use plaza_agents::{
        Choice, Decider, Mover, MoverTiming, RiskDecider, SafeDecider, WalkError, WalkReport,
        Walker, WalkerConfig,
    };

    // Broadcast
    pub use plaza_broadcast::{
        BroadcastAgent, BroadcastTicker, NoteAccountant, Recorder, TickerConfig,
    };
}
