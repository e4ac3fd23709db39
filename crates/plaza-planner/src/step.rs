//! Single-cell target planner with intermediate lattice targets.
//!
//! Far from the goal, the planner aims at the next lattice point on the
//! straight line to the goal rather than at the goal itself, so boxes
//! follow the line instead of hugging an axis. Within ten cells (or when
//! already level with the goal on either axis) it aims at the goal
//! directly.
//!
//! The intermediate target is not recomputed on every call. It advances
//! only when the box is standing on it, so a box pushed off the line by
//! contention keeps steering back to the same waypoint instead of
//! drawing a new line from wherever it ended up.

use plaza_core::{PlanError, Position, Rect};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::planner::{check_bounds, Candidates, Planner};

/// Distance under which the goal is targeted directly.
const DIRECT_RANGE: i64 = 10;

/// Candidates ranked strictly by distance; the rest are shuffled.
const RANKED_PREFIX: usize = 3;

/// Neighbour offsets in ranking tie-break order, starting due north and
/// going round through the `+x` side.
const NEIGHBOURS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Steers a box to one cell.
///
/// The random source only orders candidates past the closest three; pass
/// a seeded generator for reproducible walks.
#[derive(Clone, Debug)]
pub struct StepPlanner<R> {
    final_target: Position,
    bounds: Rect,
    current_target: Position,
    rng: R,
}

impl<R: Rng> StepPlanner<R> {
    /// Head for `final_target` on a board covering `bounds`, ordering the
    /// candidate tail with `rng`.
    pub fn new(final_target: Position, bounds: Rect, rng: R) -> Self {
        Self {
            final_target,
            bounds,
            current_target: Position::UNSET,
            rng,
        }
    }

    /// The intermediate target, or [`Position::UNSET`] before the first plan.
    pub fn current_target(&self) -> Position {
        self.current_target
    }

    /// Advance the intermediate target if it is unset or has been reached.
    fn retarget(&mut self, position: Position) {
        if !self.current_target.is_unset() && position != self.current_target {
            return;
        }
        self.current_target = next_waypoint(position, self.final_target);
    }
}

impl StepPlanner<ChaCha8Rng> {
    /// A planner with a ChaCha8 generator seeded from `seed`.
    pub fn seeded(final_target: Position, bounds: Rect, seed: u64) -> Self {
        Self::new(final_target, bounds, ChaCha8Rng::seed_from_u64(seed))
    }
}

/// The next point to aim for from `from` on the way to `goal`.
///
/// Steps one cell along the axis with the larger delta and solves the
/// other coordinate from the line through both points, rounding half away
/// from zero.
fn next_waypoint(from: Position, goal: Position) -> Position {
    // Deltas across the i32 range only fit in i64, and are squared only
    // once both are known to be small.
    let dx = i64::from(goal.x) - i64::from(from.x);
    let dy = i64::from(goal.y) - i64::from(from.y);
    let near = dx.abs() < DIRECT_RANGE && dy.abs() < DIRECT_RANGE;
    if dx == 0 || dy == 0 || (near && dx * dx + dy * dy < DIRECT_RANGE * DIRECT_RANGE) {
        return goal;
    }
    if dx.abs() >= dy.abs() {
        let step = dx.signum() as i32;
        let y = f64::from(from.y) + f64::from(step) * dy as f64 / dx as f64;
        Position::new(from.x + step, y.round() as i32)
    } else {
        let step = dy.signum() as i32;
        let x = f64::from(from.x) + f64::from(step) * dx as f64 / dy as f64;
        Position::new(x.round() as i32, from.y + step)
    }
}

impl<R: Rng + Send> Planner for StepPlanner<R> {
    fn future_positions(&mut self, position: Position) -> Result<Candidates, PlanError> {
        check_bounds(position, self.bounds)?;
        if self.at_end(position) {
            return Ok(Candidates::new());
        }
        self.retarget(position);

        let target = self.current_target;
        let mut ranked: Candidates = NEIGHBOURS
            .iter()
            .map(|&(dx, dy)| position.offset(dx, dy))
            .collect();
        // Stable sort keeps the NEIGHBOURS order among equal distances.
        ranked.sort_by(|a, b| a.dist_squared(target).total_cmp(&b.dist_squared(target)));
        ranked.retain(|p| self.bounds.contains(*p));

        if ranked.len() > RANKED_PREFIX {
            ranked[RANKED_PREFIX..].shuffle(&mut self.rng);
        }
        Ok(ranked)
    }

    fn at_end(&self, position: Position) -> bool {
        position == self.final_target
    }

    fn end_rect(&self) -> Rect {
        Rect::new(self.final_target, self.final_target)
    }

    fn target_rect(&self) -> Rect {
        Rect::new(self.final_target, self.final_target)
    }
}
