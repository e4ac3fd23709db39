//! Per-cell state and the four-phase transition table.
//!
//! | requested   | allowed iff the cell holds | cell afterwards |
//! |-------------|----------------------------|-----------------|
//! | `ToArrive`  | the vacant note            | requester       |
//! | `Arrive`    | `(requester, ToArrive)`    | requester       |
//! | `ToLeave`   | `(requester, Arrive)`      | requester       |
//! | `Left`      | `(requester, ToLeave)`     | vacant          |

use std::sync::Arc;

use plaza_core::{Note, NoteSubscriber, Phase};

/// Whether `requested` may be committed over `current`.
pub fn admits(current: Note, requested: Note) -> bool {
    match requested.phase.predecessor() {
        None => current.is_vacant(),
        Some(prev) => current.box_id == requested.box_id && current.phase == prev,
    }
}

/// The note a cell holds after `requested` has been admitted.
pub fn settled(requested: Note) -> Note {
    match requested.phase {
        Phase::Left => Note::VACANT,
        _ => requested,
    }
}

/// One cell. Guarded by its own lock inside the board.
pub(crate) struct Spot {
    pub note: Note,
    pub subscribers: Vec<Arc<dyn NoteSubscriber>>,
}

impl Spot {
    pub fn vacant() -> Self {
        Self {
            note: Note::VACANT,
            subscribers: Vec::new(),
        }
    }
}
