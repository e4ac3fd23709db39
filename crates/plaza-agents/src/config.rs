//! Timing and loop configuration for movers and walkers.

use std::time::Duration;

/// Pauses a [`Mover`](crate::Mover) takes while a box is in transit.
///
/// Pauses are taken with no board lock held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoverTiming {
    /// Between `ToArrive` and `Arrive` when entering the board. Default: 5 ms.
    pub arrive_pause: Duration,
    /// Between `ToLeave` and `Arrive` for a horizontal or vertical move.
    /// Default: 10 ms.
    pub axis_move_pause: Duration,
    /// Between `ToLeave` and `Arrive` for a diagonal move. Default: 14 ms.
    pub diagonal_move_pause: Duration,
}

impl MoverTiming {
    /// No pauses at all, for tests and benchmarks.
    pub const IMMEDIATE: MoverTiming = MoverTiming {
        arrive_pause: Duration::ZERO,
        axis_move_pause: Duration::ZERO,
        diagonal_move_pause: Duration::ZERO,
    };
}

impl Default for MoverTiming {
    fn default() -> Self {
        Self {
            arrive_pause: Duration::from_millis(5),
            axis_move_pause: Duration::from_millis(10),
            diagonal_move_pause: Duration::from_millis(14),
        }
    }
}

/// Loop policy for a [`Walker`](crate::Walker).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Pause after a rejected or empty choice before replanning.
    /// Default: 10 ms.
    pub blocked_pause: Duration,
    /// Give up after this many consecutive stalls. `None` waits forever
    /// (until stopped). Default: `None`.
    pub max_stalls: Option<u32>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            blocked_pause: Duration::from_millis(10),
            max_stalls: None,
        }
    }
}
