//! The concurrent occupancy board.
//!
//! Every cell has its own fair readers-writer lock, so readers on one
//! cell never wait on writers elsewhere and a reader is never starved by
//! a stream of writers on its own cell. A transition is checked and
//! applied under the cell's write lock; the matching [`CellDrop`] is
//! queued and the cell's subscribers are called before that lock is
//! released, which is what keeps per-cell delivery in commit order.
//!
//! Lock order is always cell → pending batch. Flushing never touches a
//! cell lock.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use plaza_core::{
    BoardError, BoardListener, BoxId, BoxInfo, BoxRoster, CellDrop, DropBatch, Note,
    NoteSubscriber, Position, Rect,
};
use tracing::{debug, trace, warn};

use crate::clock::StampClock;
use crate::config::{BoardConfig, ConfigError};
use crate::proxy::BoardProxy;
use crate::roster::Roster;
use crate::spot::{self, Spot};

/// Outcome of one [`Board::send_state_and_changes`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlushReport {
    /// Number of drops in the delivered batch.
    pub drops: usize,
    /// Number of listeners the batch was offered to.
    pub listeners: usize,
    /// Listeners that returned an error or panicked.
    pub failures: usize,
}

/// Shared grid authority.
///
/// Construct once from a [`BoardConfig`], wrap in an `Arc`, and hand a
/// clone to every mover thread.
pub struct Board {
    width: u32,
    height: u32,
    spots: Vec<RwLock<Spot>>,
    roster: Roster,
    pending: Mutex<DropBatch>,
    listeners: RwLock<Vec<Arc<dyn BoardListener>>>,
    /// Serialises flushes so listeners see batches in drain order.
    flush_lock: Mutex<()>,
    clock: StampClock,
}

// Compile-time assertion: Board must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<Board>();
};

impl Board {
    /// Build a board with every cell vacant and every level at zero.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let cells = (config.width as usize) * (config.height as usize);
        let spots = (0..cells).map(|_| RwLock::new(Spot::vacant())).collect();
        Ok(Self {
            width: config.width,
            height: config.height,
            spots,
            roster: Roster::new(&config.roster),
            pending: Mutex::new(DropBatch::new()),
            listeners: RwLock::new(Vec::new()),
            flush_lock: Mutex::new(()),
            clock: StampClock::new(),
        })
    }

    /// Board width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The rectangle of valid positions.
    pub fn bounds(&self) -> Rect {
        Rect::board(self.width, self.height)
    }

    /// Number of boxes on the roster.
    pub fn box_count(&self) -> usize {
        self.roster.len()
    }

    /// Whether `id` is on the roster.
    pub fn contains_box(&self, id: BoxId) -> bool {
        self.roster.contains(id)
    }

    /// Current projection of one box.
    pub fn box_info(&self, id: BoxId) -> Option<BoxInfo> {
        self.roster.info(id)
    }

    /// Current projection of every box.
    pub fn boxes(&self) -> BoxRoster {
        self.roster.snapshot()
    }

    fn index(&self, position: Position) -> Result<usize, BoardError> {
        if self.bounds().contains(position) {
            Ok(position.y as usize * self.width as usize + position.x as usize)
        } else {
            Err(BoardError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The note currently committed at `position`.
    pub fn note_at(&self, position: Position) -> Result<Note, BoardError> {
        let idx = self.index(position)?;
        Ok(self.spots[idx].read().note)
    }

    /// Try to commit `note` at `position`.
    ///
    /// Returns `Ok(true)` if the transition table admitted the note and
    /// `Ok(false)` if it did not (contention or an out-of-order phase;
    /// the two are not distinguished). A rejection never changes the cell.
    /// When `raise_level_on_conflict` is set, a rejection bumps the level
    /// of the requesting box and of the cell's current holder, each once.
    ///
    /// # Errors
    ///
    /// [`BoardError::UnknownBox`] if `note.box_id` is not on the roster,
    /// [`BoardError::OutOfBounds`] if `position` is off the board.
    pub fn change_spot(
        &self,
        position: Position,
        note: Note,
        raise_level_on_conflict: bool,
    ) -> Result<bool, BoardError> {
        if !self.roster.contains(note.box_id) {
            return Err(BoardError::UnknownBox {
                box_id: note.box_id,
            });
        }
        let idx = self.index(position)?;

        let mut spot = self.spots[idx].write();
        let current = spot.note;

        if !spot::admits(current, note) {
            if raise_level_on_conflict {
                self.roster.raise_level(note.box_id);
                if let Some(holder) = current.holder().filter(|h| *h != note.box_id) {
                    self.roster.raise_level(holder);
                }
            }
            debug!(%position, requested = %note, current = %current, "transition rejected");
            return Ok(false);
        }

        spot.note = spot::settled(note);
        let stamp = self.clock.next();
        self.pending
            .lock()
            .insert(position, CellDrop::new(position, note, Some(stamp)));
        for subscriber in &spot.subscribers {
            subscriber.receive_note(note, stamp);
        }
        trace!(%position, committed = %note, %stamp, "transition committed");
        Ok(true)
    }

    /// Add a batched observer. It receives every later flush.
    pub fn register_listener(&self, listener: Arc<dyn BoardListener>) {
        self.listeners.write().push(listener);
    }

    /// Add a synchronous observer for one cell.
    ///
    /// The subscriber runs while the cell is write-locked, so it must not
    /// call back into the board for the same position.
    pub fn register_note_subscriber(
        &self,
        position: Position,
        subscriber: Arc<dyn NoteSubscriber>,
    ) -> Result<(), BoardError> {
        let idx = self.index(position)?;
        self.spots[idx].write().subscribers.push(subscriber);
        Ok(())
    }

    /// Drain the pending batch and deliver it, with a snapshot of every
    /// box, to each registered listener.
    ///
    /// A listener that errors or panics is logged and skipped; the others
    /// still receive the batch, and the drained batch is never re-queued.
    pub fn send_state_and_changes(&self) -> FlushReport {
        let _flush = self.flush_lock.lock();
        let drops = std::mem::take(&mut *self.pending.lock());
        let boxes = self.roster.snapshot();
        let listeners: Vec<Arc<dyn BoardListener>> = self.listeners.read().clone();

        let mut report = FlushReport {
            drops: drops.len(),
            listeners: listeners.len(),
            failures: 0,
        };
        for (i, listener) in listeners.iter().enumerate() {
            match panic::catch_unwind(AssertUnwindSafe(|| {
                listener.receive_changes(&drops, &boxes)
            })) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    report.failures += 1;
                    warn!(listener = i, error = %err, "board listener failed");
                }
                Err(_) => {
                    report.failures += 1;
                    warn!(listener = i, "board listener panicked");
                }
            }
        }
        debug!(drops = report.drops, listeners = report.listeners, "board flushed");
        report
    }

    /// A handle that can trigger flushes and nothing else.
    pub fn board_proxy(self: &Arc<Self>) -> BoardProxy {
        BoardProxy::new(Arc::clone(self))
    }
}
