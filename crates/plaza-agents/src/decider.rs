//! Choosing which candidate cell to attempt.

use std::fmt;

use plaza_board::Board;
use plaza_core::{BoardError, Position};

/// A decider's pick: a cell and how risky it looked.
///
/// Lower weights are safer. [`Choice::NONE`] means nothing was worth
/// attempting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    /// The chosen cell, or [`Position::UNSET`].
    pub position: Position,
    /// Risk weight of the choice; `-1` when there is none.
    pub weight: i32,
}

impl Choice {
    /// No acceptable candidate.
    pub const NONE: Choice = Choice {
        position: Position::UNSET,
        weight: -1,
    };

    /// A pick of `position` with `weight`.
    pub const fn new(position: Position, weight: i32) -> Self {
        Self { position, weight }
    }

    /// Whether this is [`Choice::NONE`].
    pub fn is_none(&self) -> bool {
        self.position.is_unset()
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (weight {})", self.position, self.weight)
    }
}

/// Policy for picking among planner candidates.
///
/// Deciders read the board but never write it, so one decider can be
/// shared across threads. The answer is advisory: the cell may change
/// between the read and the mover's claim, and the board arbitrates.
pub trait Decider: Send + Sync {
    /// Whether moving to `position` looks acceptable right now.
    fn suggest_move_to(&self, position: Position, board: &Board) -> Result<bool, BoardError>;

    /// The first acceptable candidate, scanned in planner order.
    fn choose(&self, candidates: &[Position], board: &Board) -> Result<Choice, BoardError>;
}
