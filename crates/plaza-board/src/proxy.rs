//! Flush-only handle to a board.

use std::sync::Arc;

use crate::board::{Board, FlushReport};

/// A capability-narrowed view of a [`Board`].
///
/// Timing code that decides *when* to broadcast gets a `BoardProxy`
/// rather than the board itself: the only thing it can do is trigger
/// [`Board::send_state_and_changes`].
#[derive(Clone)]
pub struct BoardProxy {
    board: Arc<Board>,
}

impl BoardProxy {
    pub(crate) fn new(board: Arc<Board>) -> Self {
        Self { board }
    }

    /// Flush the board's pending changes to its listeners.
    pub fn send_changes(&self) -> FlushReport {
        self.board.send_state_and_changes()
    }
}

impl std::fmt::Debug for BoardProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardProxy")
            .field("width", &self.board.width())
            .field("height", &self.board.height())
            .finish()
    }
}
