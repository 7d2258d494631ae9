#![forbid(unsafe_code)]

//! Geometric primitives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell position on the terminal grid.
///
/// Uses terminal coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Column, growing rightward.
    pub x: u16,
    /// Row, growing downward.
    pub y: u16,
}

impl Coordinate {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// The four compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Toward the top of the grid.
    North,
    /// Toward the right of the grid.
    East,
    /// Toward the bottom of the grid.
    South,
    /// Toward the left of the grid.
    West,
}

impl Direction {
    /// All directions in N/E/S/W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The opposite direction.
    #[inline]
    #[must_use]
    pub const fn inverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Whether this direction runs along the x axis.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }
}

/// Where a panel asks to be placed.
///
/// `None` and `Center` both mean "not edge-docked"; a dock-style composer
/// hands such a panel whatever space the docked panels leave over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Position {
    /// No placement requested.
    #[default]
    None,
    /// Explicitly centered; equivalent to `None` for docking purposes.
    Center,
    /// Docked to the top edge.
    Top,
    /// Docked to the bottom edge.
    Bottom,
    /// Docked to the left edge.
    Left,
    /// Docked to the right edge.
    Right,
}

impl Position {
    /// Whether this position claims an edge of the available space.
    #[inline]
    pub const fn is_docked(self) -> bool {
        matches!(
            self,
            Position::Top | Position::Bottom | Position::Left | Position::Right
        )
    }
}

/// An axis-aligned box, inclusive on both ends.
///
/// A box covering a single cell has `top_left == bottom_right`. Zero-size
/// regions have no valid box; constructors return `None` for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// Upper-left cell, inclusive.
    pub top_left: Coordinate,
    /// Lower-right cell, inclusive.
    pub bottom_right: Coordinate,
}

impl BoundingBox {
    /// Create a box from two inclusive corners.
    ///
    /// Returns `None` if the corners are not ordered.
    pub const fn new(top_left: Coordinate, bottom_right: Coordinate) -> Option<Self> {
        if bottom_right.x < top_left.x || bottom_right.y < top_left.y {
            return None;
        }
        Some(Self {
            top_left,
            bottom_right,
        })
    }

    /// Create a box from an origin and a size in cells.
    ///
    /// Returns `None` for zero-size regions, which have no cells to cover.
    pub const fn from_origin_size(x: u16, y: u16, width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            top_left: Coordinate::new(x, y),
            bottom_right: Coordinate::new(x.saturating_add(width - 1), y.saturating_add(height - 1)),
        })
    }

    /// Width in cells (inclusive span).
    #[inline]
    pub const fn width(&self) -> u16 {
        self.bottom_right.x - self.top_left.x + 1
    }

    /// Height in cells (inclusive span).
    #[inline]
    pub const fn height(&self) -> u16 {
        self.bottom_right.y - self.top_left.y + 1
    }

    /// Check if a coordinate is inside the box (both bounds inclusive).
    #[inline]
    pub const fn contains(&self, point: Coordinate) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bottom_right.y
    }

    /// Check a possibly off-grid cell against the box.
    ///
    /// Border probes step one cell outside a panel, which may be off the grid
    /// entirely; negative cells are never inside.
    #[inline]
    pub const fn contains_cell(&self, x: i32, y: i32) -> bool {
        x >= self.top_left.x as i32
            && x <= self.bottom_right.x as i32
            && y >= self.top_left.y as i32
            && y <= self.bottom_right.y as i32
    }

    /// Check if two boxes share at least one cell.
    #[inline]
    pub const fn overlaps(&self, other: &BoundingBox) -> bool {
        self.top_left.x <= other.bottom_right.x
            && other.top_left.x <= self.bottom_right.x
            && self.top_left.y <= other.bottom_right.y
            && other.top_left.y <= self.bottom_right.y
    }

    /// Check if `other` is fully contained in this box.
    #[inline]
    pub const fn encloses(&self, other: &BoundingBox) -> bool {
        self.contains(other.top_left) && self.contains(other.bottom_right)
    }

    /// Check if `other` adjoins this box on the given side.
    ///
    /// Adjacency means the boxes are exactly one unit apart along the
    /// direction's axis and overlap by at least one cell on the
    /// perpendicular axis.
    pub fn adjacent_in(&self, other: &BoundingBox, side: Direction) -> bool {
        let rows_overlap = self.top_left.y <= other.bottom_right.y
            && other.top_left.y <= self.bottom_right.y;
        let cols_overlap = self.top_left.x <= other.bottom_right.x
            && other.top_left.x <= self.bottom_right.x;

        match side {
            Direction::East => {
                rows_overlap && u32::from(other.top_left.x) == u32::from(self.bottom_right.x) + 1
            }
            Direction::West => {
                rows_overlap && u32::from(self.top_left.x) == u32::from(other.bottom_right.x) + 1
            }
            Direction::South => {
                cols_overlap && u32::from(other.top_left.y) == u32::from(self.bottom_right.y) + 1
            }
            Direction::North => {
                cols_overlap && u32::from(self.top_left.y) == u32::from(other.bottom_right.y) + 1
            }
        }
    }

    /// Extent along the edge shared with a neighbor on the given side.
    ///
    /// For east/west neighbors the shared edge is vertical, so this is the
    /// box height; for north/south neighbors it is the width.
    #[inline]
    pub const fn shared_extent(&self, side: Direction) -> u16 {
        if side.is_horizontal() {
            self.height()
        } else {
            self.width()
        }
    }
}
