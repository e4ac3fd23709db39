//! Occupancy notes, commit stamps, broadcast drops and box projections.

use std::fmt;

use indexmap::IndexMap;

use crate::id::{BoxId, GroupId};
use crate::position::Position;

/// One step of the four-phase claim/vacate protocol.
///
/// For a given box at a given cell the phases are always committed in
/// declaration order: `ToArrive`, `Arrive`, `ToLeave`, `Left`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// The box has claimed the cell and is travelling into it.
    ToArrive,
    /// The box sits in the cell.
    Arrive,
    /// The box is travelling out of the cell.
    ToLeave,
    /// The cell has been vacated.
    Left,
}

impl Phase {
    /// The phase a cell must currently be in (for the same box) before
    /// `self` may be committed. `None` for [`Phase::ToArrive`], which
    /// requires a vacant cell instead.
    pub fn predecessor(self) -> Option<Phase> {
        match self {
            Phase::ToArrive => None,
            Phase::Arrive => Some(Phase::ToArrive),
            Phase::ToLeave => Some(Phase::Arrive),
            Phase::Left => Some(Phase::ToLeave),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::ToArrive => "to_arrive",
            Phase::Arrive => "arrive",
            Phase::ToLeave => "to_leave",
            Phase::Left => "left",
        };
        f.write_str(s)
    }
}

/// An immutable `(box, phase)` claim on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Note {
    /// The box making the claim, or [`BoxId::NONE`] for a vacant cell.
    pub box_id: BoxId,
    /// Protocol phase of the claim.
    pub phase: Phase,
}

impl Note {
    /// The note held by a cell nobody occupies.
    pub const VACANT: Note = Note {
        box_id: BoxId::NONE,
        phase: Phase::Left,
    };

    /// Create a note.
    pub fn new(box_id: impl Into<BoxId>, phase: Phase) -> Self {
        Self {
            box_id: box_id.into(),
            phase,
        }
    }

    /// Whether this is the vacant sentinel.
    pub fn is_vacant(&self) -> bool {
        *self == Self::VACANT
    }

    /// The box holding the cell, if any.
    pub fn holder(&self) -> Option<BoxId> {
        if self.box_id.is_none() || self.phase == Phase::Left {
            None
        } else {
            Some(self.box_id)
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.box_id, self.phase)
    }
}

/// Commit timestamp: nanoseconds since the owning board was created.
///
/// Stamps issued by one board are strictly increasing across all of its
/// commits, so ordering by stamp recovers commit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stamp(pub u64);

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

/// One committed cell-state change queued for batched broadcast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellDrop {
    /// The cell that changed.
    pub position: Position,
    /// The note that was committed (a vacated cell reports the leaving
    /// box with [`Phase::Left`]).
    pub note: Note,
    /// When the change was committed, if recorded.
    pub stamp: Option<Stamp>,
}

impl CellDrop {
    /// Create a drop.
    pub fn new(position: Position, note: Note, stamp: Option<Stamp>) -> Self {
        Self {
            position,
            note,
            stamp,
        }
    }

    /// The box named by the note.
    pub fn box_id(&self) -> BoxId {
        self.note.box_id
    }

    /// The phase named by the note.
    pub fn phase(&self) -> Phase {
        self.note.phase
    }
}

/// A broadcast batch: at most one drop per position, in first-change order.
pub type DropBatch = IndexMap<Position, CellDrop>;

/// Read-only projection of a box handed to observers.
///
/// Fields are private: a `BoxInfo` is a copy taken at flush time and
/// cannot reach back into the live box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoxInfo {
    id: BoxId,
    group: GroupId,
    level: u64,
}

impl BoxInfo {
    /// Create a projection.
    pub fn new(id: BoxId, group: GroupId, level: u64) -> Self {
        Self { id, group, level }
    }

    /// The box id.
    pub fn id(&self) -> BoxId {
        self.id
    }

    /// The box's group tag.
    pub fn group(&self) -> GroupId {
        self.group
    }

    /// Contention level at the time of the snapshot.
    pub fn level(&self) -> u64 {
        self.level
    }
}

/// Every box on the board keyed by id, in roster order.
pub type BoxRoster = IndexMap<BoxId, BoxInfo>;
