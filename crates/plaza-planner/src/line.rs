//! Finish-line planners.
//!
//! The goal is a horizontal line `y = end_y` spanning the board. A box
//! first tries to step toward the line, then sideways along it.

use plaza_core::{PlanError, Position, Rect};

use crate::planner::{check_bounds, Candidates, Planner};

/// Shared candidate generation: forward step, then left, then right.
fn line_candidates(position: Position, forward_dy: i32, bounds: Rect) -> Candidates {
    [
        position.offset(0, forward_dy),
        position.offset(-1, 0),
        position.offset(1, 0),
    ]
    .into_iter()
    .filter(|p| bounds.contains(*p))
    .collect()
}

/// The zero-height rectangle along `y = end_y` across the board.
fn finish_line(end_y: i32, bounds: Rect) -> Rect {
    Rect::new(
        Position::new(bounds.min.x, end_y),
        Position::new(bounds.max.x, end_y),
    )
}

// ── UpPlanner ───────────────────────────────────────────────────

/// Moves boxes toward smaller `y` until `y <= end_y`.
#[derive(Clone, Debug)]
pub struct UpPlanner {
    end_y: i32,
    bounds: Rect,
}

impl UpPlanner {
    /// Finish at row `end_y` on a board covering `bounds`.
    pub fn new(end_y: i32, bounds: Rect) -> Self {
        Self { end_y, bounds }
    }
}

impl Planner for UpPlanner {
    fn future_positions(&mut self, position: Position) -> Result<Candidates, PlanError> {
        check_bounds(position, self.bounds)?;
        if self.at_end(position) {
            return Ok(Candidates::new());
        }
        Ok(line_candidates(position, -1, self.bounds))
    }

    fn at_end(&self, position: Position) -> bool {
        position.y <= self.end_y
    }

    fn end_rect(&self) -> Rect {
        finish_line(self.end_y, self.bounds)
    }

    fn target_rect(&self) -> Rect {
        finish_line(self.end_y, self.bounds)
    }
}

// ── DownPlanner ─────────────────────────────────────────────────

/// Moves boxes toward larger `y` until `y >= end_y`.
#[derive(Clone, Debug)]
pub struct DownPlanner {
    end_y: i32,
    bounds: Rect,
}

impl DownPlanner {
    /// Finish at row `end_y` on a board covering `bounds`.
    pub fn new(end_y: i32, bounds: Rect) -> Self {
        Self { end_y, bounds }
    }
}

impl Planner for DownPlanner {
    fn future_positions(&mut self, position: Position) -> Result<Candidates, PlanError> {
        check_bounds(position, self.bounds)?;
        if self.at_end(position) {
            return Ok(Candidates::new());
        }
        Ok(line_candidates(position, 1, self.bounds))
    }

    fn at_end(&self, position: Position) -> bool {
        position.y >= self.end_y
    }

    fn end_rect(&self) -> Rect {
        finish_line(self.end_y, self.bounds)
    }

    fn target_rect(&self) -> Rect {
        finish_line(self.end_y, self.bounds)
    }
}
