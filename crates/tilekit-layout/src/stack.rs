#![forbid(unsafe_code)]

//! Even stacking of panels along one axis.

use crate::composition::Composition;
use crate::panel::{PanelDefinition, PanelState};
use tilekit_core::Direction;

/// Split an extent evenly across `count` parts with exact sum conservation.
///
/// `base = extent / count`; the first `extent % count` parts get `base + 1`.
/// The parts always sum to `extent` exactly.
pub(crate) fn split_extent(extent: u16, count: usize) -> Vec<u16> {
    if count == 0 {
        return Vec::new();
    }
    let count_u16 = count.min(usize::from(u16::MAX)) as u16;
    let base = extent / count_u16;
    let remainder = usize::from(extent % count_u16);
    (0..count)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

/// Stacks panels contiguously along one axis, splitting the extent evenly.
///
/// Gutters are a rendering concern; panels touch. `East`/`South` place
/// panels in input order; `West`/`North` reverse the placement so the first
/// panel sits at the far edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackComposer {
    direction: Direction,
}

impl StackComposer {
    /// Create a stack flowing in the given direction.
    pub const fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// The flow direction.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Lay the definitions out across the available space.
    ///
    /// Positions and size requests on the definitions are ignored; a stack
    /// divides its axis evenly. Never fails; zero panels or a zero-size
    /// viewport yield a degenerate composition.
    pub fn compose(&self, width: u16, height: u16, definitions: &[PanelDefinition]) -> Composition {
        let count = definitions.len();
        if count == 0 {
            return Composition::default();
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "tilekit::layout",
            count,
            width,
            height,
            direction = ?self.direction,
            "stack compose"
        );

        let extent = if self.direction.is_horizontal() {
            width
        } else {
            height
        };
        let sizes = split_extent(extent, count);

        // West/North flow from the far edge toward the origin; sizes stay
        // bound to definition order either way.
        let reversed = matches!(self.direction, Direction::West | Direction::North);
        let mut states = Vec::with_capacity(count);
        let mut offset = 0u16;
        for &size in &sizes {
            let pos = if reversed {
                extent.saturating_sub(offset).saturating_sub(size)
            } else {
                offset
            };
            let state = if self.direction.is_horizontal() {
                PanelState::new(pos, 0, size, height)
            } else {
                PanelState::new(0, pos, width, size)
            };
            states.push(state);
            offset = offset.saturating_add(size);
        }

        Composition::from_panels(states)
    }
}
