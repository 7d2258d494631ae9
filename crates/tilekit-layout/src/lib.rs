#![forbid(unsafe_code)]

//! Panel composition and border-junction resolution for terminal grids.
//!
//! A host hands a list of [`PanelDefinition`]s and a viewport size to a
//! composer and gets back a [`Composition`]: one [`PanelState`] rectangle
//! per definition, tiling the viewport without gaps or overlap. A second
//! pass, [`resolver::resolve_borders`], works out where adjacent panels'
//! borders meet and which tee or corner glyphs the renderer should use at
//! those junctions.
//!
//! Everything is recomputed from scratch on every call. Layout state is
//! small and the arithmetic is trivial, so recomposition on resize is
//! cheaper than any incremental scheme would be to maintain.

pub mod borders;
pub mod composition;
pub mod dock;
pub mod error;
pub mod grid;
pub mod panel;
pub mod priority;
pub mod resolver;
pub mod stack;
pub mod tabbed;

pub use borders::{BorderGlyphSet, BorderType, Borders, CornerGlyphs};
pub use composition::{Composition, Overlay};
pub use dock::DockComposer;
pub use error::ComposeError;
pub use grid::GridComposer;
pub use panel::{PanelDefinition, PanelState, SizeSpec};
pub use priority::PrioritySplitComposer;
pub use stack::StackComposer;
pub use tabbed::{TabbedComposer, TabsSide};

pub use tilekit_core::{BoundingBox, Coordinate, Direction, Position};

/// Any built-in composition strategy behind one entry point.
///
/// Hosts that let the user switch layouts at runtime store one of these
/// and call [`compose`](Composer::compose) on every resize or parameter
/// change. Strategies that cannot fail are wrapped in `Ok` so the caller
/// handles a single result type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Composer {
    Dock(DockComposer),
    Stack(StackComposer),
    Grid(GridComposer),
    PrioritySplit(PrioritySplitComposer),
    Tabbed(TabbedComposer),
}

impl Composer {
    /// Lay the definitions out against the viewport.
    pub fn compose(
        &self,
        width: u16,
        height: u16,
        definitions: &[PanelDefinition],
    ) -> Result<Composition, ComposeError> {
        match self {
            Composer::Dock(c) => c.compose(width, height, definitions),
            Composer::Stack(c) => Ok(c.compose(width, height, definitions)),
            Composer::Grid(c) => Ok(c.compose(width, height, definitions)),
            Composer::PrioritySplit(c) => c.compose(width, height, definitions),
            Composer::Tabbed(c) => Ok(c.compose(width, height, definitions)),
        }
    }
}

impl From<DockComposer> for Composer {
    fn from(c: DockComposer) -> Self {
        Composer::Dock(c)
    }
}

impl From<StackComposer> for Composer {
    fn from(c: StackComposer) -> Self {
        Composer::Stack(c)
    }
}

impl From<GridComposer> for Composer {
    fn from(c: GridComposer) -> Self {
        Composer::Grid(c)
    }
}

impl From<PrioritySplitComposer> for Composer {
    fn from(c: PrioritySplitComposer) -> Self {
        Composer::PrioritySplit(c)
    }
}

impl From<TabbedComposer> for Composer {
    fn from(c: TabbedComposer) -> Self {
        Composer::Tabbed(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unified_entry_point_dispatches() {
        let defs = vec![
            PanelDefinition::new("a").position(Position::Top).height(3),
            PanelDefinition::new("b"),
        ];
        let dock: Composer = DockComposer::new().into();
        let comp = dock.compose(80, 24, &defs).unwrap();
        assert_eq!(comp.panels[0].height, 3);

        let stack: Composer = StackComposer::new(Direction::South).into();
        let comp = stack.compose(80, 24, &defs).unwrap();
        assert_eq!(comp.panels[0].height, 12);
    }

    #[test]
    fn infallible_strategies_still_return_ok() {
        let grid: Composer = GridComposer::new(2).into();
        assert!(grid.compose(10, 10, &[]).is_ok());
        let tabs: Composer = TabbedComposer::new(TabsSide::Top).into();
        assert!(tabs.compose(10, 10, &[]).is_ok());
    }

    #[test]
    fn fallible_strategies_surface_errors() {
        let dock: Composer = DockComposer::new().into();
        assert_eq!(dock.compose(10, 10, &[]).unwrap_err(), ComposeError::MissingFill);
    }
}
