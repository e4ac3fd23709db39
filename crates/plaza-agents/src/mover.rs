//! The four-phase move protocol for a single box.
//!
//! A box enters a cell with `ToArrive` then `Arrive`, and leaves it with
//! `ToLeave` then `Left`. Moving interleaves the two so the box holds
//! both cells while in transit:
//!
//! ```text
//! ToArrive@new → ToLeave@old → (pause) → Arrive@new → Left@old
//! ```

use std::sync::Arc;
use std::thread;

use plaza_board::Board;
use plaza_core::{BoardError, BoxId, Note, Phase, Position};
use tracing::{debug, warn};

use crate::config::MoverTiming;

/// Drives one box through the board protocol.
///
/// Every method returns `Ok(false)` when the board rejects a step; that
/// is contention, not failure. `Err` means the box or position is invalid.
#[derive(Clone)]
pub struct Mover {
    box_id: BoxId,
    board: Arc<Board>,
    timing: MoverTiming,
}

impl Mover {
    /// A mover for `box_id` with the default transit pauses.
    pub fn new(box_id: impl Into<BoxId>, board: Arc<Board>) -> Self {
        Self::with_timing(box_id, board, MoverTiming::default())
    }

    /// A mover with explicit transit pauses.
    pub fn with_timing(box_id: impl Into<BoxId>, board: Arc<Board>, timing: MoverTiming) -> Self {
        Self {
            box_id: box_id.into(),
            board,
            timing,
        }
    }

    /// The box this mover drives.
    pub fn box_id(&self) -> BoxId {
        self.box_id
    }

    /// The shared board.
    pub fn board(&self) -> &Arc<Board> {
        &self.board
    }

    fn note(&self, phase: Phase) -> Note {
        Note::new(self.box_id, phase)
    }

    /// Put the box on the board at `position`.
    ///
    /// An occupied cell is rejected without raising anyone's level.
    pub fn add_box(&self, position: Position) -> Result<bool, BoardError> {
        if !self
            .board
            .change_spot(position, self.note(Phase::ToArrive), false)?
        {
            return Ok(false);
        }
        thread::sleep(self.timing.arrive_pause);
        let arrived = self
            .board
            .change_spot(position, self.note(Phase::Arrive), true)?;
        debug!(box_id = %self.box_id, %position, arrived, "box added");
        Ok(arrived)
    }

    /// Take the box off the board at `position`.
    pub fn remove_box(&self, position: Position) -> Result<bool, BoardError> {
        let leaving = self
            .board
            .change_spot(position, self.note(Phase::ToLeave), true)?;
        let left = self
            .board
            .change_spot(position, self.note(Phase::Left), true)?;
        if !(leaving && left) {
            warn!(box_id = %self.box_id, %position, "remove rejected: box was not settled here");
        }
        Ok(leaving && left)
    }

    /// Move the box from `old` to `new`.
    ///
    /// A rejected claim on `new` raises the levels of this box and the
    /// cell's holder and returns `Ok(false)` without touching `old`. Once
    /// the claim succeeds, every remaining step is attempted so the box
    /// never strands a half-claimed cell; the result is `true` only if
    /// all four steps were admitted.
    pub fn move_box(&self, old: Position, new: Position) -> Result<bool, BoardError> {
        if !self.board.change_spot(new, self.note(Phase::ToArrive), true)? {
            debug!(box_id = %self.box_id, from = %old, to = %new, "move rejected");
            return Ok(false);
        }
        let leaving = self.board.change_spot(old, self.note(Phase::ToLeave), true)?;

        let pause = if old.is_diagonal_to(new) {
            self.timing.diagonal_move_pause
        } else {
            self.timing.axis_move_pause
        };
        thread::sleep(pause);

        let arrived = self.board.change_spot(new, self.note(Phase::Arrive), true)?;
        let left = self.board.change_spot(old, self.note(Phase::Left), true)?;

        let moved = leaving && arrived && left;
        if moved {
            debug!(box_id = %self.box_id, from = %old, to = %new, "box moved");
        } else {
            warn!(
                box_id = %self.box_id, from = %old, to = %new,
                leaving, arrived, left, "move partially rejected"
            );
        }
        Ok(moved)
    }
}

impl std::fmt::Debug for Mover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mover")
            .field("box_id", &self.box_id)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaza_broadcast::NoteAccountant;
    use plaza_test_utils::{board_with_boxes, CapturingListener};

    const A: Position = Position::new(5, 5);
    const B: Position = Position::new(5, 6);

    fn mover(id: i32, board: &Arc<Board>) -> Mover {
        Mover::with_timing(id, Arc::clone(board), MoverTiming::IMMEDIATE)
    }

    #[test]
    fn add_then_move_commits_in_protocol_order() {
        let board = board_with_boxes(10, 10, [0]);
        let at_a = Arc::new(NoteAccountant::new());
        let at_b = Arc::new(NoteAccountant::new());
        board.register_note_subscriber(A, at_a.clone()).unwrap();
        board.register_note_subscriber(B, at_b.clone()).unwrap();

        // Default timing: the pauses are part of what is being exercised.
        let mover = Mover::new(0, Arc::clone(&board));
        assert!(mover.add_box(A).unwrap());
        assert!(mover.move_box(A, B).unwrap());

        use Phase::*;
        assert_eq!(at_a.phases(), vec![ToArrive, Arrive, ToLeave, Left]);
        assert_eq!(at_b.phases(), vec![ToArrive, Arrive]);

        let mut merged: Vec<_> = at_a
            .notes()
            .into_iter()
            .map(|(stamp, note)| (stamp, A, note.phase))
            .chain(at_b.notes().into_iter().map(|(stamp, note)| (stamp, B, note.phase)))
            .collect();
        merged.sort_by_key(|(stamp, _, _)| *stamp);
        let order: Vec<_> = merged.iter().map(|(_, p, phase)| (*p, *phase)).collect();
        assert_eq!(
            order,
            vec![
                (A, ToArrive),
                (A, Arrive),
                (B, ToArrive),
                (A, ToLeave),
                (B, Arrive),
                (A, Left),
            ]
        );
        // Stamps are unique, so the order is strict.
        assert!(merged.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn remove_vacates_the_cell() {
        let board = board_with_boxes(10, 10, [0]);
        let mover = mover(0, &board);
        assert!(mover.add_box(A).unwrap());
        assert_eq!(board.note_at(A).unwrap(), Note::new(0, Phase::Arrive));
        assert!(mover.remove_box(A).unwrap());
        assert_eq!(board.note_at(A).unwrap(), Note::VACANT);
    }

    #[test]
    fn remove_where_absent_is_rejected() {
        let board = board_with_boxes(10, 10, [0]);
        assert!(!mover(0, &board).remove_box(A).unwrap());
        assert_eq!(board.note_at(A).unwrap(), Note::VACANT);
    }

    #[test]
    fn add_conflict_leaves_levels_alone() {
        let board = board_with_boxes(10, 10, [0, 1]);
        let listener = CapturingListener::new();
        board.register_listener(listener.clone());

        assert!(mover(0, &board).add_box(A).unwrap());
        assert!(!mover(1, &board).add_box(A).unwrap());
        board.send_state_and_changes();

        assert_eq!(listener.level(0), 0);
        assert_eq!(listener.level(1), 0);
    }

    #[test]
    fn move_conflict_raises_both_levels() {
        let board = board_with_boxes(10, 10, [0, 1]);
        let listener = CapturingListener::new();
        board.register_listener(listener.clone());

        let a = Position::new(5, 5);
        let b = Position::new(6, 6);
        assert!(mover(0, &board).add_box(a).unwrap());
        assert!(mover(1, &board).add_box(b).unwrap());
        assert!(!mover(0, &board).move_box(a, b).unwrap());
        board.send_state_and_changes();

        assert_eq!(listener.level(0), 1);
        assert_eq!(listener.level(1), 1);
        // The rejected move never touched the old cell.
        assert_eq!(board.note_at(a).unwrap(), Note::new(0, Phase::Arrive));
    }

    #[test]
    fn unknown_box_is_an_error() {
        let board = board_with_boxes(10, 10, [0]);
        let err = mover(5, &board).add_box(A).unwrap_err();
        assert_eq!(err, BoardError::UnknownBox { box_id: BoxId(5) });
    }
}
