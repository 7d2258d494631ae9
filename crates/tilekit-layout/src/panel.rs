#![forbid(unsafe_code)]

//! Panel definitions and computed panel states.

use crate::borders::{Borders, CornerGlyphs};
use tilekit_core::{BoundingBox, Position};

/// How much of one axis a panel asks for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeSpec {
    /// Take all currently available space.
    #[default]
    Auto,
    /// An exact size in cells, clamped to what is available.
    Cells(u16),
    /// A fraction in `[0, 1]` of the *currently available* space at
    /// allocation time, not of the total viewport. Out-of-range values are
    /// clamped.
    Ratio(f32),
}

impl SizeSpec {
    /// Resolve against the currently available extent.
    ///
    /// Never exceeds `available`; a resolved size of zero is legal and
    /// produces a degenerate panel.
    #[must_use]
    pub fn resolve(self, available: u16) -> u16 {
        match self {
            SizeSpec::Auto => available,
            SizeSpec::Cells(cells) => cells.min(available),
            SizeSpec::Ratio(ratio) => {
                let ratio = ratio.clamp(0.0, 1.0);
                let cells = (f32::from(available) * ratio).round() as u16;
                cells.min(available)
            }
        }
    }
}

/// A declarative description of one panel's desired placement.
///
/// Definitions are built once and read-only thereafter; composers consume
/// them and produce [`PanelState`]s on every recomposition.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelDefinition {
    position: Position,
    width: SizeSpec,
    height: SizeSpec,
    focusable: bool,
    name: String,
}

impl PanelDefinition {
    /// Create a definition with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the requested placement.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Request an exact width in cells.
    #[must_use]
    pub fn width(mut self, cells: u16) -> Self {
        self.width = SizeSpec::Cells(cells);
        self
    }

    /// Request a fraction of the available width. Exclusive with [`width`](Self::width).
    #[must_use]
    pub fn width_ratio(mut self, ratio: f32) -> Self {
        self.width = SizeSpec::Ratio(ratio);
        self
    }

    /// Request an exact height in cells.
    #[must_use]
    pub fn height(mut self, cells: u16) -> Self {
        self.height = SizeSpec::Cells(cells);
        self
    }

    /// Request a fraction of the available height. Exclusive with [`height`](Self::height).
    #[must_use]
    pub fn height_ratio(mut self, ratio: f32) -> Self {
        self.height = SizeSpec::Ratio(ratio);
        self
    }

    /// Mark whether the panel can receive focus. Focus itself is tracked by
    /// the host, never by the layout engine.
    #[must_use]
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// The requested placement.
    #[inline]
    pub fn placement(&self) -> Position {
        self.position
    }

    /// The requested width.
    #[inline]
    pub fn width_spec(&self) -> SizeSpec {
        self.width
    }

    /// The requested height.
    #[inline]
    pub fn height_spec(&self) -> SizeSpec {
        self.height
    }

    /// Whether the panel can receive focus.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// The display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The computed placement of one panel after layout.
///
/// States are recomputed from scratch on every resize or parameter change,
/// never patched incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    /// True for exactly one panel in a dock or priority-split result: the
    /// panel absorbing space the docked/primary panels left unclaimed.
    pub fill_remaining: bool,
    /// Sides that adjoin another panel, set by the resolver.
    pub borders: Borders,
    /// Corner glyph overrides, set by the resolver.
    pub corners: CornerGlyphs,
}

impl PanelState {
    /// Create a state covering the given rectangle.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_remaining: false,
            borders: Borders::empty(),
            corners: CornerGlyphs::NONE,
        }
    }

    /// A zero-size placeholder state.
    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// True when the panel covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The inclusive bounding box, or `None` for degenerate panels.
    ///
    /// Degenerate panels render empty and take no part in border
    /// resolution.
    #[inline]
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_origin_size(self.x, self.y, self.width, self.height)
    }
}
