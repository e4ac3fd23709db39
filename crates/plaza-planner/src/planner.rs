//! The planner trait.

use plaza_core::{PlanError, Position, Rect};
use smallvec::SmallVec;

/// Ranked candidate cells, best first. At most the eight neighbours.
pub type Candidates = SmallVec<[Position; 8]>;

/// Proposes where a box should go next.
///
/// `&mut self` on [`future_positions`](Planner::future_positions) lets a
/// planner carry state between calls (intermediate targets, a random
/// source). Each box owns its planner, so no synchronisation is needed;
/// `Send` lets the planner move onto the box's thread.
pub trait Planner: Send {
    /// Candidate next cells for a box at `position`, best first.
    ///
    /// Every candidate lies inside the planner's bounds. Returns an empty
    /// list once [`at_end`](Planner::at_end) holds, and
    /// [`PlanError::OutOfBounds`] if `position` itself is off the board.
    fn future_positions(&mut self, position: Position) -> Result<Candidates, PlanError>;

    /// Whether a box at `position` has reached its goal.
    fn at_end(&self, position: Position) -> bool;

    /// The region that counts as arrival.
    fn end_rect(&self) -> Rect;

    /// The region the planner is steering toward, for display.
    fn target_rect(&self) -> Rect;
}

/// Reject positions outside `bounds`.
pub(crate) fn check_bounds(position: Position, bounds: Rect) -> Result<(), PlanError> {
    if bounds.contains(position) {
        Ok(())
    } else {
        Err(PlanError::OutOfBounds { position, bounds })
    }
}
