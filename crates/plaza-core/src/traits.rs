//! Observer traits for the two notification disciplines.
//!
//! - [`NoteSubscriber`] is push: invoked synchronously on the committing
//!   thread for every change at one position, in commit order.
//! - [`BoardListener`] is pull-on-flush: invoked only when someone asks
//!   the board to broadcast, with the changes accumulated since the
//!   previous flush.
//!
//! [`RecorderListener`] is the downstream end of the recorder, which
//! folds flushes into the full picture of the occupied board.

use crate::error::ObserverError;
use crate::note::{BoxRoster, DropBatch, Note, Stamp};

/// Batched observer of board changes.
///
/// Implementations are shared across threads and take `&self`; use
/// interior mutability for any state they keep.
pub trait BoardListener: Send + Sync {
    /// Receive the drops committed since the previous flush together with
    /// a snapshot of every box on the roster.
    fn receive_changes(&self, drops: &DropBatch, boxes: &BoxRoster) -> Result<(), ObserverError>;
}

/// Synchronous per-cell observer.
///
/// Called while the cell is locked, so a slow subscriber stalls the
/// committing mover (and only that cell).
pub trait NoteSubscriber: Send + Sync {
    /// Receive the note just committed at the subscribed position.
    fn receive_note(&self, note: Note, stamp: Stamp);
}

/// Observer of the cumulative board picture kept by a recorder.
pub trait RecorderListener: Send + Sync {
    /// Receive one drop for every currently occupied cell, plus every box
    /// including those not on the board.
    fn receive_all_drops_all_boxes(
        &self,
        drops: &DropBatch,
        boxes: &BoxRoster,
    ) -> Result<(), ObserverError>;
}
