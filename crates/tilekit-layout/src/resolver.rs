#![forbid(unsafe_code)]

//! Border-junction resolution over a composed set of panels.
//!
//! After composition every panel knows its rectangle but not its
//! surroundings. This pass recomputes, from scratch, which sides adjoin a
//! neighbor and which corner glyphs must change so that abutting borders
//! meet in a tee or cross instead of overlapping blindly. Running it twice
//! over the same panels is a no-op.

use crate::borders::{BorderGlyphSet, Borders, CornerGlyphs};
use crate::panel::PanelState;
use tilekit_core::{BoundingBox, Direction};

/// One of a panel's four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

const CORNERS: [Corner; 4] = [
    Corner::TopLeft,
    Corner::TopRight,
    Corner::BottomLeft,
    Corner::BottomRight,
];

impl Corner {
    /// The two sides meeting at this corner.
    const fn flanking(self) -> [Direction; 2] {
        match self {
            Corner::TopLeft => [Direction::North, Direction::West],
            Corner::TopRight => [Direction::North, Direction::East],
            Corner::BottomLeft => [Direction::South, Direction::West],
            Corner::BottomRight => [Direction::South, Direction::East],
        }
    }

    /// The corner's cell, in signed coordinates so probes can step off-grid.
    const fn cell(self, bounds: &BoundingBox) -> (i32, i32) {
        let (left, top) = (bounds.top_left.x as i32, bounds.top_left.y as i32);
        let (right, bottom) = (bounds.bottom_right.x as i32, bounds.bottom_right.y as i32);
        match self {
            Corner::TopLeft => (left, top),
            Corner::TopRight => (right, top),
            Corner::BottomLeft => (left, bottom),
            Corner::BottomRight => (right, bottom),
        }
    }

    /// The cell diagonally outward from this corner.
    const fn diagonal(self, bounds: &BoundingBox) -> (i32, i32) {
        let (x, y) = self.cell(bounds);
        match self {
            Corner::TopLeft => (x - 1, y - 1),
            Corner::TopRight => (x + 1, y - 1),
            Corner::BottomLeft => (x - 1, y + 1),
            Corner::BottomRight => (x + 1, y + 1),
        }
    }

    /// The panel's own frame glyph for this corner.
    const fn plain_glyph(self, glyphs: &BorderGlyphSet) -> char {
        match self {
            Corner::TopLeft => glyphs.top_left,
            Corner::TopRight => glyphs.top_right,
            Corner::BottomLeft => glyphs.bottom_left,
            Corner::BottomRight => glyphs.bottom_right,
        }
    }
}

/// One cell outward in the given direction.
const fn step(x: i32, y: i32, side: Direction) -> (i32, i32) {
    match side {
        Direction::North => (x, y - 1),
        Direction::East => (x + 1, y),
        Direction::South => (x, y + 1),
        Direction::West => (x - 1, y),
    }
}

const fn side_index(side: Direction) -> usize {
    match side {
        Direction::North => 0,
        Direction::East => 1,
        Direction::South => 2,
        Direction::West => 3,
    }
}

/// Recompute adjacency flags and corner glyph overrides for every panel.
///
/// Neighbor search is a direct pairwise scan; panel counts are small enough
/// that nothing fancier pays for itself. When several panels adjoin the
/// same side, the one with the shortest shared edge wins, ties going to the
/// lower index. Degenerate panels neither receive flags nor count as
/// neighbors.
pub fn resolve_borders(panels: &mut [PanelState], glyphs: &BorderGlyphSet) {
    let bounds: Vec<Option<BoundingBox>> = panels.iter().map(|p| p.bounds()).collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "tilekit::layout",
        count = panels.len(),
        "resolve borders"
    );

    for (i, panel) in panels.iter_mut().enumerate() {
        panel.borders = Borders::empty();
        panel.corners = CornerGlyphs::NONE;
        let Some(own) = bounds[i] else {
            continue;
        };

        // The winning neighbor per side, N/E/S/W
        let mut neighbors: [Option<BoundingBox>; 4] = [None; 4];
        for side in Direction::ALL {
            let mut best: Option<(u16, BoundingBox)> = None;
            for (j, other) in bounds.iter().enumerate() {
                if j == i {
                    continue;
                }
                let Some(other) = other else {
                    continue;
                };
                if !own.adjacent_in(other, side) {
                    continue;
                }
                let extent = other.shared_extent(side);
                let replace = match best {
                    None => true,
                    Some((shortest, _)) => extent < shortest,
                };
                if replace {
                    best = Some((extent, *other));
                }
            }
            if let Some((_, neighbor)) = best {
                panel.borders |= Borders::from_direction(side);
                neighbors[side_index(side)] = Some(neighbor);
            }
        }

        for corner in CORNERS {
            let (cx, cy) = corner.cell(&own);
            let (dx, dy) = corner.diagonal(&own);
            let mut tee: Option<char> = None;
            let mut plain: Option<char> = None;
            let mut overlapping = false;

            for side in corner.flanking() {
                let Some(neighbor) = neighbors[side_index(side)] else {
                    continue;
                };
                // The neighbor only matters here if it reaches this corner
                let (sx, sy) = step(cx, cy, side);
                if !neighbor.contains_cell(sx, sy) {
                    continue;
                }
                // Past the corner as well: the neighbor's edge runs on, so
                // our border must tee into it. Otherwise the corners
                // coincide and the plain frame glyph already meets cleanly.
                if neighbor.contains_cell(dx, dy) {
                    match tee {
                        None => tee = Some(glyphs.tee(side)),
                        Some(existing) if existing == glyphs.tee(side) => {}
                        // Two distinct tees claim the same diagonal cell for
                        // two different panels, so the input tiling overlaps
                        Some(_) => overlapping = true,
                    }
                } else {
                    plain = Some(corner.plain_glyph(glyphs));
                }
            }

            // A tee from one side outranks a coinciding corner on the other;
            // both occur together at every T junction
            let required = if overlapping {
                debug_assert!(
                    false,
                    "panel {i} corner {corner:?}: overlapping neighbors demand different tees"
                );
                Some(glyphs.cross)
            } else {
                tee.or(plain)
            };

            match corner {
                Corner::TopLeft => panel.corners.top_left = required,
                Corner::TopRight => panel.corners.top_right = required,
                Corner::BottomLeft => panel.corners.bottom_left = required,
                Corner::BottomRight => panel.corners.bottom_right = required,
            }
        }
    }
}
