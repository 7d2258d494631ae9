#![forbid(unsafe_code)]

//! Uniform grid placement.

use crate::composition::Composition;
use crate::panel::{PanelDefinition, PanelState};
use crate::stack::split_extent;

/// Places panels row-major on a uniform grid.
///
/// Width is distributed across the columns and height across the rows
/// independently, with the same leading-remainder rule a stack uses. The
/// row count follows from the panel count; trailing cells of the last row
/// are simply absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridComposer {
    columns: usize,
}

impl GridComposer {
    /// Create a grid with the given column count (sanitized to at least 1).
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    /// The column count.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Lay the definitions out on the grid.
    ///
    /// Panel *i* lands at row `i / columns`, column `i % columns`. Never
    /// fails; zero panels or a zero-size viewport yield a degenerate
    /// composition.
    pub fn compose(&self, width: u16, height: u16, definitions: &[PanelDefinition]) -> Composition {
        let count = definitions.len();
        if count == 0 {
            return Composition::default();
        }

        let rows = count.div_ceil(self.columns);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "tilekit::layout",
            count,
            columns = self.columns,
            rows,
            width,
            height,
            "grid compose"
        );

        let col_widths = split_extent(width, self.columns);
        let row_heights = split_extent(height, rows);

        // Prefix sums give each cell's origin
        let mut x_offsets = Vec::with_capacity(self.columns);
        let mut x = 0u16;
        for &w in &col_widths {
            x_offsets.push(x);
            x = x.saturating_add(w);
        }
        let mut y_offsets = Vec::with_capacity(rows);
        let mut y = 0u16;
        for &h in &row_heights {
            y_offsets.push(y);
            y = y.saturating_add(h);
        }

        let states = (0..count)
            .map(|i| {
                let row = i / self.columns;
                let col = i % self.columns;
                PanelState::new(
                    x_offsets[col],
                    y_offsets[row],
                    col_widths[col],
                    row_heights[row],
                )
            })
            .collect();

        Composition::from_panels(states)
    }
}
