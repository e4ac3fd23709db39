//! Strongly-typed identifiers for boxes and their groups.

use std::fmt;

/// Identifies a box (a mobile agent) on the board.
///
/// Ids are assigned by the roster handed to the board at construction.
/// [`BoxId::NONE`] is reserved: paired with [`Phase::Left`](crate::Phase)
/// it marks a cell that nobody holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub i32);

impl BoxId {
    /// Sentinel id carried by vacant cells.
    pub const NONE: BoxId = BoxId(-1);

    /// Whether this is the vacant-cell sentinel.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for BoxId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Group tag shared by boxes that were created together.
///
/// The board never interprets groups; renderers use them for colouring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for GroupId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
