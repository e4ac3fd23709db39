//! Errors from the walker loop.

use std::error::Error;
use std::fmt;

use plaza_core::{BoardError, PlanError};

/// Why a [`Walker`](crate::Walker) stopped abnormally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// The board refused a request outright.
    Board(BoardError),
    /// The planner was handed a position it cannot plan from.
    Plan(PlanError),
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(e) => write!(f, "board error: {e}"),
            Self::Plan(e) => write!(f, "planner error: {e}"),
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            Self::Plan(e) => Some(e),
        }
    }
}

impl From<BoardError> for WalkError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl From<PlanError> for WalkError {
    fn from(e: PlanError) -> Self {
        Self::Plan(e)
    }
}
