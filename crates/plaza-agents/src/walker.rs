//! The per-box driver loop.
//!
//! A walker enters the board at a start cell, then repeatedly plans,
//! decides and moves until its planner reports the goal, it stalls too
//! often, or it is told to stop. On the way out it always takes its box
//! off the board.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use plaza_core::Position;
use plaza_planner::Planner;
use tracing::{debug, info};

use crate::config::WalkerConfig;
use crate::decider::Decider;
use crate::error::WalkError;
use crate::mover::Mover;

/// Summary of one finished walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkReport {
    /// Successful moves.
    pub moves: u32,
    /// Rejected or empty attempts, including failed entries.
    pub stalls: u32,
    /// Whether the planner's goal was reached.
    pub reached_end: bool,
    /// Last cell the box held, or [`Position::UNSET`] if it never entered.
    pub final_position: Position,
}

/// Owns one box's mover, planner and decider.
pub struct Walker<P, D> {
    mover: Mover,
    planner: P,
    decider: D,
    config: WalkerConfig,
    stop: Arc<AtomicBool>,
}

impl<P: Planner, D: Decider> Walker<P, D> {
    /// A walker with its own stop flag.
    pub fn new(mover: Mover, planner: P, decider: D, config: WalkerConfig) -> Self {
        Self {
            mover,
            planner,
            decider,
            config,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share `stop` with other walkers so one store stops them all.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = stop;
        self
    }

    /// The flag that ends the loop when set.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    fn stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Record a stall and report whether the walker should give up.
    fn stall(&self, report: &mut WalkReport, consecutive: &mut u32) -> bool {
        report.stalls += 1;
        *consecutive += 1;
        if self.config.max_stalls.is_some_and(|max| *consecutive >= max) {
            return true;
        }
        thread::sleep(self.config.blocked_pause);
        false
    }

    /// Plan, decide and move from `position` until the goal, a stall-out
    /// or a stop. `position` always names the cell the box holds.
    fn roam(&mut self, position: &mut Position, report: &mut WalkReport) -> Result<(), WalkError> {
        let box_id = self.mover.box_id();
        let mut consecutive = 0u32;
        while !self.stopped() {
            if self.planner.at_end(*position) {
                report.reached_end = true;
                break;
            }
            let candidates = self.planner.future_positions(*position)?;
            let choice = self.decider.choose(&candidates, self.mover.board())?;

            if !choice.is_none() && self.mover.move_box(*position, choice.position)? {
                *position = choice.position;
                report.moves += 1;
                consecutive = 0;
                continue;
            }
            if self.stall(report, &mut consecutive) {
                debug!(%box_id, %position, stalls = consecutive, "walker stalled out");
                break;
            }
        }
        Ok(())
    }

    /// Run the loop from `start` until it ends.
    ///
    /// # Errors
    ///
    /// A [`WalkError`] if the board rejects the box or a position outright,
    /// or the planner is given a position off its board. Contention is
    /// never an error.
    pub fn walk(&mut self, start: Position) -> Result<WalkReport, WalkError> {
        let box_id = self.mover.box_id();
        let mut report = WalkReport {
            moves: 0,
            stalls: 0,
            reached_end: false,
            final_position: Position::UNSET,
        };
        let mut consecutive = 0u32;

        loop {
            if self.stopped() {
                return Ok(report);
            }
            if self.mover.add_box(start)? {
                break;
            }
            if self.stall(&mut report, &mut consecutive) {
                debug!(%box_id, %start, "gave up entering the board");
                return Ok(report);
            }
        }
        let mut position = start;
        report.final_position = position;

        // The box comes off the board even when the loop fails.
        let outcome = self.roam(&mut position, &mut report);
        let removed = self.mover.remove_box(position);
        outcome?;
        removed?;

        report.final_position = position;
        info!(
            %box_id,
            moves = report.moves,
            stalls = report.stalls,
            reached_end = report.reached_end,
            "walk finished"
        );
        Ok(report)
    }
}
