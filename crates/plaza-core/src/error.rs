//! Error types shared across the Plaza workspace.
//!
//! Contention is deliberately absent: a rejected transition is an
//! ordinary `false` from the board, not an error. The enums here cover
//! programming and configuration mistakes only.

use std::error::Error;
use std::fmt;

use crate::id::BoxId;
use crate::position::{Position, Rect};

/// Errors from board entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A note named a box the board was never given.
    UnknownBox {
        /// The unregistered id.
        box_id: BoxId,
    },
    /// A position lies outside the board.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Board width in cells.
        width: u32,
        /// Board height in cells.
        height: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBox { box_id } => write!(f, "box {box_id} is not on the roster"),
            Self::OutOfBounds {
                position,
                width,
                height,
            } => write!(f, "position {position} is outside the {width}x{height} board"),
        }
    }
}

impl Error for BoardError {}

/// Errors from path planners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// The current position handed to the planner is outside its bounds.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// The planner's bounds.
        bounds: Rect,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { position, bounds } => {
                write!(f, "{position} is an invalid position for bounds {bounds}")
            }
        }
    }
}

impl Error for PlanError {}

/// Failure reported by an observer while handling a delivery.
///
/// The board logs these and carries on delivering to the remaining
/// observers; the failing observer's error never reaches movers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObserverError {
    /// The observer refused or could not process the delivery.
    Rejected {
        /// Human-readable description.
        reason: String,
    },
}

impl fmt::Display for ObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { reason } => write!(f, "observer rejected delivery: {reason}"),
        }
    }
}

impl Error for ObserverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_error_messages() {
        let e = BoardError::UnknownBox { box_id: BoxId(100) };
        assert_eq!(e.to_string(), "box 100 is not on the roster");

        let e = BoardError::OutOfBounds {
            position: Position::new(20, 3),
            width: 20,
            height: 20,
        };
        assert_eq!(e.to_string(), "position (20, 3) is outside the 20x20 board");
    }

    #[test]
    fn plan_error_message_names_position() {
        let e = PlanError::OutOfBounds {
            position: Position::new(-2, 0),
            bounds: Rect::board(4, 4),
        };
        assert!(e.to_string().starts_with("(-2, 0) is an invalid position"));
    }
}
