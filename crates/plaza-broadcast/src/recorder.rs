//! Folds board flushes into the full picture of the occupied board.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use plaza_core::{
    BoardListener, BoxRoster, DropBatch, ObserverError, Phase, RecorderListener,
};
use tracing::warn;

/// A [`BoardListener`] that keeps one drop per occupied cell.
///
/// Each flush is applied on top of the previous state: a drop whose
/// phase is [`Phase::Left`] removes its cell, any other drop replaces it.
/// The resulting picture, plus every box on the roster (on the board or
/// not), is forwarded to each registered [`RecorderListener`].
#[derive(Default)]
pub struct Recorder {
    occupied: Mutex<DropBatch>,
    listeners: RwLock<Vec<Arc<dyn RecorderListener>>>,
}

impl Recorder {
    /// A recorder with an empty picture and no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a downstream observer.
    pub fn register_listener(&self, listener: Arc<dyn RecorderListener>) {
        self.listeners.write().push(listener);
    }

    /// The current picture: one drop per occupied cell.
    pub fn occupied(&self) -> DropBatch {
        self.occupied.lock().clone()
    }
}

impl BoardListener for Recorder {
    fn receive_changes(&self, drops: &DropBatch, boxes: &BoxRoster) -> Result<(), ObserverError> {
        let mut occupied = self.occupied.lock();
        for (position, drop) in drops {
            if drop.phase() == Phase::Left {
                occupied.swap_remove(position);
            } else {
                occupied.insert(*position, *drop);
            }
        }

        let mut failures = 0usize;
        for (i, listener) in self.listeners.read().iter().enumerate() {
            match panic::catch_unwind(AssertUnwindSafe(|| {
                listener.receive_all_drops_all_boxes(&occupied, boxes)
            })) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    failures += 1;
                    warn!(listener = i, error = %err, "recorder listener failed");
                }
                Err(_) => {
                    failures += 1;
                    warn!(listener = i, "recorder listener panicked");
                }
            }
        }
        if failures > 0 {
            return Err(ObserverError::Rejected {
                reason: format!("{failures} recorder listener(s) failed"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaza_core::{BoxId, Note, Position};
    use plaza_test_utils::{board_with_boxes, CapturingListener, RefusingListener};

    const A: Position = Position::new(5, 5);
    const B: Position = Position::new(6, 6);

    #[test]
    fn picture_accumulates_across_flushes() {
        let board = board_with_boxes(20, 20, [0, 1, 2]);
        let recorder = Arc::new(Recorder::new());
        let out = CapturingListener::new();
        recorder.register_listener(out.clone());
        board.register_listener(recorder.clone());

        board.change_spot(A, Note::new(0, Phase::ToArrive), true).unwrap();
        board.change_spot(B, Note::new(1, Phase::ToArrive), true).unwrap();
        board.send_state_and_changes();
        assert_eq!(out.drops().len(), 2);

        // Only A changes; B must still be in the picture.
        board.change_spot(A, Note::new(0, Phase::Arrive), true).unwrap();
        board.send_state_and_changes();
        assert_eq!(out.drops().len(), 2);
        assert_eq!(out.note_at(A), Some(Note::new(0, Phase::Arrive)));
        assert_eq!(out.note_at(B), Some(Note::new(1, Phase::ToArrive)));
        assert_eq!(out.boxes().len(), 3);
    }

    #[test]
    fn vacated_cells_leave_the_picture() {
        let board = board_with_boxes(20, 20, [0]);
        let recorder = Arc::new(Recorder::new());
        board.register_listener(recorder.clone());

        for phase in [Phase::ToArrive, Phase::Arrive, Phase::ToLeave] {
            board.change_spot(A, Note::new(0, phase), true).unwrap();
        }
        board.send_state_and_changes();
        assert_eq!(recorder.occupied().len(), 1);

        board.change_spot(A, Note::new(0, Phase::Left), true).unwrap();
        board.send_state_and_changes();
        assert!(recorder.occupied().is_empty());
    }

    #[test]
    fn boxes_off_the_board_are_still_forwarded() {
        let board = board_with_boxes(20, 20, [0, 7]);
        let recorder = Arc::new(Recorder::new());
        let out = CapturingListener::new();
        recorder.register_listener(out.clone());
        board.register_listener(recorder.clone());

        board.send_state_and_changes();
        let boxes = out.boxes();
        assert!(out.drops().is_empty());
        assert!(boxes.contains_key(&BoxId(0)));
        assert!(boxes.contains_key(&BoxId(7)));
    }

    #[test]
    fn refusing_listener_fails_the_delivery_but_not_its_peers() {
        let board = board_with_boxes(20, 20, [0]);
        let recorder = Arc::new(Recorder::new());
        let out = CapturingListener::new();
        recorder.register_listener(Arc::new(RefusingListener));
        recorder.register_listener(out.clone());
        board.register_listener(recorder.clone());

        board.change_spot(A, Note::new(0, Phase::ToArrive), true).unwrap();
        let report = board.send_state_and_changes();
        assert_eq!(report.failures, 1);
        assert_eq!(out.calls(), 1);
        assert_eq!(recorder.occupied().len(), 1);
    }

    #[test]
    fn panicking_listener_does_not_starve_its_peers() {
        struct Panics;
        impl RecorderListener for Panics {
            fn receive_all_drops_all_boxes(
                &self,
                _: &DropBatch,
                _: &BoxRoster,
            ) -> Result<(), ObserverError> {
                panic!("renderer went away");
            }
        }

        let board = board_with_boxes(20, 20, [0]);
        let recorder = Arc::new(Recorder::new());
        let out = CapturingListener::new();
        recorder.register_listener(Arc::new(Panics));
        recorder.register_listener(out.clone());
        board.register_listener(recorder.clone());

        board.change_spot(A, Note::new(0, Phase::ToArrive), true).unwrap();
        let report = board.send_state_and_changes();
        assert_eq!(report.failures, 1);
        assert_eq!(out.calls(), 1);
        assert_eq!(out.note_at(A), Some(Note::new(0, Phase::ToArrive)));

        // The recorder keeps working on later flushes.
        board.change_spot(A, Note::new(0, Phase::Arrive), true).unwrap();
        board.send_state_and_changes();
        assert_eq!(out.calls(), 2);
    }
}
