//! Grid positions and inclusive rectangles.

use std::fmt;

/// An integer `(x, y)` cell coordinate on the board.
///
/// `x` grows to the right, `y` grows downwards. [`Position::UNSET`]
/// (`(-1, -1)`) is reserved to mean "no position", e.g. a decider that
/// found nothing worth attempting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// Sentinel meaning "unset".
    pub const UNSET: Position = Position { x: -1, y: -1 };

    /// Create a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this is the [`UNSET`](Self::UNSET) sentinel.
    pub fn is_unset(self) -> bool {
        self == Self::UNSET
    }

    /// Offset this position by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Squared Euclidean distance to `other`.
    pub fn dist_squared(self, other: Position) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx * dx + dy * dy
    }

    /// Whether `other` differs from `self` on both axes.
    pub fn is_diagonal_to(self, other: Position) -> bool {
        self.x != other.x && self.y != other.y
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle with inclusive corners.
///
/// A rectangle whose corners share a `y` value is a horizontal line;
/// one whose corners are equal is a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left corner (smallest x and y).
    pub min: Position,
    /// Bottom-right corner (largest x and y).
    pub max: Position,
}

impl Rect {
    /// Build a rectangle from any two opposite corners.
    pub fn new(a: Position, b: Position) -> Self {
        Self {
            min: Position::new(a.x.min(b.x), a.y.min(b.y)),
            max: Position::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// The rectangle covering a `width` x `height` board anchored at the origin.
    pub fn board(width: u32, height: u32) -> Self {
        Self {
            min: Position::new(0, 0),
            max: Position::new(width as i32 - 1, height as i32 - 1),
        }
    }

    /// Whether `p` lies inside (or on the edge of) the rectangle.
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unset_sentinel() {
        assert!(Position::UNSET.is_unset());
        assert!(!Position::new(0, 0).is_unset());
    }

    #[test]
    fn board_rect_is_inclusive() {
        let r = Rect::board(20, 10);
        assert!(r.contains(Position::new(0, 0)));
        assert!(r.contains(Position::new(19, 9)));
        assert!(!r.contains(Position::new(20, 9)));
        assert!(!r.contains(Position::new(19, 10)));
        assert!(!r.contains(Position::new(-1, 0)));
    }

    #[test]
    fn rect_normalises_corners() {
        let r = Rect::new(Position::new(5, 1), Position::new(2, 7));
        assert_eq!(r.min, Position::new(2, 1));
        assert_eq!(r.max, Position::new(5, 7));
    }

    #[test]
    fn diagonal_detection() {
        let p = Position::new(5, 5);
        assert!(p.is_diagonal_to(Position::new(6, 6)));
        assert!(!p.is_diagonal_to(Position::new(5, 6)));
        assert!(!p.is_diagonal_to(Position::new(4, 5)));
    }

    proptest! {
        #[test]
        fn dist_squared_is_symmetric(ax in -50i32..50, ay in -50i32..50, bx in -50i32..50, by in -50i32..50) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            prop_assert_eq!(a.dist_squared(b), b.dist_squared(a));
            prop_assert!(a.dist_squared(b) >= 0.0);
            prop_assert_eq!(a.dist_squared(a), 0.0);
        }
    }
}
