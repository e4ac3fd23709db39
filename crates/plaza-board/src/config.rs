//! Board configuration, validation, and error types.
//!
//! [`BoardConfig`] is supplied once at construction: board dimensions and
//! the static roster of boxes. There is no runtime reconfiguration.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use plaza_core::{BoxId, GroupId};

// ── BoxSpec ────────────────────────────────────────────────────────

/// One roster entry: a box's identity, group and on-screen footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxSpec {
    /// Unique, non-negative id.
    pub id: BoxId,
    /// Group tag (used by renderers).
    pub group: GroupId,
    /// Rendered width in pixels. Default: 3.
    pub width: u32,
    /// Rendered height in pixels. Default: 3.
    pub height: u32,
}

impl BoxSpec {
    /// A box with the default 3x3 footprint.
    pub fn new(id: impl Into<BoxId>, group: impl Into<GroupId>) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            width: 3,
            height: 3,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating configuration or wiring threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero.
    EmptyBoard {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// A dimension does not fit in an `i32` coordinate.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The configured value.
        value: u32,
    },
    /// Width times height exceeds [`BoardConfig::MAX_CELLS`].
    TooManyCells {
        /// Configured cell count.
        cells: u64,
        /// The limit.
        max: u64,
    },
    /// Two roster entries share an id.
    DuplicateBox {
        /// The repeated id.
        box_id: BoxId,
    },
    /// A roster entry uses a negative id (negative ids are reserved).
    ReservedBoxId {
        /// The offending id.
        box_id: BoxId,
    },
    /// A background thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of which thread failed.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard { width, height } => {
                write!(f, "board must have at least one cell, got {width}x{height}")
            }
            Self::DimensionTooLarge { name, value } => {
                write!(f, "board {name} {value} exceeds i32::MAX")
            }
            Self::TooManyCells { cells, max } => {
                write!(f, "board has {cells} cells, limit is {max}")
            }
            Self::DuplicateBox { box_id } => write!(f, "box {box_id} appears twice in the roster"),
            Self::ReservedBoxId { box_id } => {
                write!(f, "box id {box_id} is reserved (ids must be non-negative)")
            }
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
        }
    }
}

impl Error for ConfigError {}

// ── BoardConfig ────────────────────────────────────────────────────

/// Dimensions and roster for a [`Board`](crate::Board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Board width in cells.
    pub width: u32,
    /// Board height in cells.
    pub height: u32,
    /// Every box that will ever appear on the board.
    pub roster: Vec<BoxSpec>,
}

impl BoardConfig {
    /// Largest board [`validate`](Self::validate) accepts, in cells.
    /// Every cell is allocated up front by [`Board::new`](crate::Board::new).
    pub const MAX_CELLS: u64 = 1 << 24;

    /// A board with an empty roster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            roster: Vec::new(),
        }
    }

    /// Append one box per id, each in its own group numbered by position.
    pub fn with_boxes(mut self, ids: impl IntoIterator<Item = i32>) -> Self {
        let start = self.roster.len() as u32;
        self.roster.extend(
            ids.into_iter()
                .enumerate()
                .map(|(i, id)| BoxSpec::new(id, start + i as u32)),
        );
        self
    }

    /// Append a whole roster.
    pub fn with_roster(mut self, roster: impl IntoIterator<Item = BoxSpec>) -> Self {
        self.roster.extend(roster);
        self
    }

    /// Build a grouped roster: group `n` gets `sizes[n]` consecutive ids,
    /// numbered from `first_id` across all groups.
    pub fn groups(first_id: i32, sizes: &[usize]) -> Vec<BoxSpec> {
        let mut next = first_id;
        let mut roster = Vec::with_capacity(sizes.iter().sum());
        for (group, &size) in sizes.iter().enumerate() {
            for _ in 0..size {
                roster.push(BoxSpec::new(next, group as u32));
                next += 1;
            }
        }
        roster
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > i32::MAX as u32 {
                return Err(ConfigError::DimensionTooLarge { name, value });
            }
        }
        let cells = u64::from(self.width) * u64::from(self.height);
        if cells > Self::MAX_CELLS {
            return Err(ConfigError::TooManyCells {
                cells,
                max: Self::MAX_CELLS,
            });
        }
        let mut seen = HashSet::with_capacity(self.roster.len());
        for spec in &self.roster {
            if spec.id.0 < 0 {
                return Err(ConfigError::ReservedBoxId { box_id: spec.id });
            }
            if !seen.insert(spec.id) {
                return Err(ConfigError::DuplicateBox { box_id: spec.id });
            }
        }
        Ok(())
    }
}
