#![forbid(unsafe_code)]

//! Composition output: panel states plus overlay regions.

use crate::borders::BorderGlyphSet;
use crate::panel::PanelState;
use crate::resolver;

/// A pre-rendered region outside the panel system, such as a tab strip.
///
/// Overlays are painted verbatim by the renderer and take no part in border
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overlay {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    /// One string per row, already cut to `width` display columns.
    pub lines: Vec<String>,
}

/// The full output of a composer.
///
/// `panels` is ordered 1:1 with the input definitions; `overlays` carries
/// regions with no corresponding definition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composition {
    pub panels: Vec<PanelState>,
    pub overlays: Vec<Overlay>,
}

impl Composition {
    /// A composition with the given panels and no overlays.
    pub fn from_panels(panels: Vec<PanelState>) -> Self {
        Self {
            panels,
            overlays: Vec::new(),
        }
    }

    /// Number of panels.
    #[inline]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// True when the composition holds no panels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// The index of the panel marked fill-remaining, if any.
    pub fn fill_index(&self) -> Option<usize> {
        self.panels.iter().position(|p| p.fill_remaining)
    }

    /// Run border-junction resolution over the composition's panels.
    pub fn resolve_borders(&mut self, glyphs: &BorderGlyphSet) {
        resolver::resolve_borders(&mut self.panels, glyphs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_index_finds_marked_panel() {
        let mut fill = PanelState::new(0, 0, 10, 10);
        fill.fill_remaining = true;
        let comp = Composition::from_panels(vec![PanelState::new(0, 0, 5, 5), fill]);
        assert_eq!(comp.fill_index(), Some(1));
        assert_eq!(comp.len(), 2);
    }

    #[test]
    fn empty_composition() {
        let comp = Composition::default();
        assert!(comp.is_empty());
        assert_eq!(comp.fill_index(), None);
    }
}
