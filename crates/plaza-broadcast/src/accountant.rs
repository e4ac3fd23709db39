//! Audit log for one cell.

use parking_lot::Mutex;
use plaza_core::{Note, NoteSubscriber, Phase, Stamp};

/// Records every note committed at the position it is subscribed to.
///
/// Register one per position with
/// [`Board::register_note_subscriber`](plaza_board::Board::register_note_subscriber).
#[derive(Debug, Default)]
pub struct NoteAccountant {
    notes: Mutex<Vec<(Stamp, Note)>>,
}

impl NoteAccountant {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(stamp, note)` received so far, in commit order.
    pub fn notes(&self) -> Vec<(Stamp, Note)> {
        self.notes.lock().clone()
    }

    /// Just the phases, in commit order.
    pub fn phases(&self) -> Vec<Phase> {
        self.notes.lock().iter().map(|(_, n)| n.phase).collect()
    }

    /// Number of notes received.
    pub fn len(&self) -> usize {
        self.notes.lock().len()
    }

    /// Whether nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.notes.lock().is_empty()
    }
}

impl NoteSubscriber for NoteAccountant {
    fn receive_note(&self, note: Note, stamp: Stamp) {
        self.notes.lock().push((stamp, note));
    }
}
