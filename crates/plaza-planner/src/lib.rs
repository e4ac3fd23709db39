//! Path planners for Plaza boxes.
//!
//! A [`Planner`] turns a box's current position into a short, ranked list
//! of neighbouring cells to try next. Planners are pure with respect to
//! the board: they never read occupancy. Deciding which candidate is
//! actually free is the job of a decider in `plaza-agents`.
//!
//! # Planners
//!
//! - [`UpPlanner`] / [`DownPlanner`]: head for a horizontal finish line.
//! - [`StepPlanner`]: head for a single cell via intermediate lattice points,
//!   with a seeded or injected random tail ordering.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod line;
pub mod planner;
pub mod step;

pub use line::{DownPlanner, UpPlanner};
pub use planner::{Candidates, Planner};
pub use step::StepPlanner;
