//! Test utilities for Plaza development.
//!
//! Provides capturing implementations of the observer traits and small
//! board builders for constructing test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use parking_lot::Mutex;
use plaza_board::{Board, BoardConfig};
use plaza_core::{
    BoardListener, BoxId, BoxRoster, CellDrop, DropBatch, Note, ObserverError, Position,
    RecorderListener,
};

/// A `width` x `height` board whose roster holds `ids`, ready to share.
pub fn board_with_boxes(width: u32, height: u32, ids: impl IntoIterator<Item = i32>) -> Arc<Board> {
    let config = BoardConfig::new(width, height).with_boxes(ids);
    Arc::new(Board::new(config).expect("fixture board config must be valid"))
}

/// Keeps the most recent flush delivered to it and counts deliveries.
///
/// Works as both a [`BoardListener`] and a [`RecorderListener`].
#[derive(Default)]
pub struct CapturingListener {
    drops: Mutex<DropBatch>,
    boxes: Mutex<BoxRoster>,
    calls: Mutex<usize>,
}

impl CapturingListener {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Drops from the last delivery.
    pub fn drops(&self) -> DropBatch {
        self.drops.lock().clone()
    }

    /// Boxes from the last delivery.
    pub fn boxes(&self) -> BoxRoster {
        self.boxes.lock().clone()
    }

    /// Level of `id` in the last delivery. Panics if it was absent.
    pub fn level(&self, id: i32) -> u64 {
        self.boxes.lock()[&BoxId(id)].level()
    }

    /// Note carried by the last delivery's drop at `position`, if any.
    pub fn note_at(&self, position: Position) -> Option<Note> {
        self.drops.lock().get(&position).map(|d| d.note)
    }

    /// Number of deliveries so far.
    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }

    fn capture(&self, drops: &DropBatch, boxes: &BoxRoster) {
        *self.drops.lock() = drops.clone();
        *self.boxes.lock() = boxes.clone();
        *self.calls.lock() += 1;
    }
}

impl BoardListener for CapturingListener {
    fn receive_changes(&self, drops: &DropBatch, boxes: &BoxRoster) -> Result<(), ObserverError> {
        self.capture(drops, boxes);
        Ok(())
    }
}

impl RecorderListener for CapturingListener {
    fn receive_all_drops_all_boxes(
        &self,
        drops: &DropBatch,
        boxes: &BoxRoster,
    ) -> Result<(), ObserverError> {
        self.capture(drops, boxes);
        Ok(())
    }
}

/// Accumulates every drop from every flush, in delivery order.
#[derive(Default)]
pub struct DropLog {
    drops: Mutex<Vec<CellDrop>>,
}

impl DropLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn drops(&self) -> Vec<CellDrop> {
        self.drops.lock().clone()
    }
}

impl BoardListener for DropLog {
    fn receive_changes(&self, drops: &DropBatch, _boxes: &BoxRoster) -> Result<(), ObserverError> {
        self.drops.lock().extend(drops.values().copied());
        Ok(())
    }
}

/// Listener that always fails, for exercising delivery isolation.
pub struct RefusingListener;

impl RefusingListener {
    fn refuse() -> Result<(), ObserverError> {
        Err(ObserverError::Rejected {
            reason: "refusing listener".into(),
        })
    }
}

impl BoardListener for RefusingListener {
    fn receive_changes(&self, _drops: &DropBatch, _boxes: &BoxRoster) -> Result<(), ObserverError> {
        Self::refuse()
    }
}

impl RecorderListener for RefusingListener {
    fn receive_all_drops_all_boxes(
        &self,
        _drops: &DropBatch,
        _boxes: &BoxRoster,
    ) -> Result<(), ObserverError> {
        Self::refuse()
    }
}
