#![forbid(unsafe_code)]

//! Border flags and box-drawing glyph sets.

use bitflags::bitflags;
use tilekit_core::Direction;

bitflags! {
    /// Which sides of a panel adjoin another panel.
    ///
    /// Set by the border-junction resolver; a flag means "a neighbor's
    /// border runs along this side", not "draw this side" (the default
    /// frame comes from the renderer's style).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Borders: u8 {
        const TOP = 1 << 0;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
        const ALL = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

impl Borders {
    /// The flag for the side facing the given direction.
    #[inline]
    pub const fn from_direction(dir: Direction) -> Borders {
        match dir {
            Direction::North => Borders::TOP,
            Direction::East => Borders::RIGHT,
            Direction::South => Borders::BOTTOM,
            Direction::West => Borders::LEFT,
        }
    }
}

/// The border character style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderType {
    /// Single-line square corners.
    #[default]
    Square,
    /// Single-line rounded corners.
    Rounded,
    /// Double lines.
    Double,
    /// Heavy lines.
    Thick,
}

impl BorderType {
    /// The glyph set for this border style.
    #[must_use]
    pub const fn glyphs(self) -> BorderGlyphSet {
        match self {
            BorderType::Square => BorderGlyphSet::SQUARE,
            BorderType::Rounded => BorderGlyphSet::ROUNDED,
            BorderType::Double => BorderGlyphSet::DOUBLE,
            BorderType::Thick => BorderGlyphSet::THICK,
        }
    }
}

/// The characters used to stroke a border, including junction glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphSet {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    /// Junction on a left (west-facing) edge: `├`.
    pub tee_left: char,
    /// Junction on a right (east-facing) edge: `┤`.
    pub tee_right: char,
    /// Junction on a top edge: `┬`.
    pub tee_top: char,
    /// Junction on a bottom edge: `┴`.
    pub tee_bottom: char,
    /// Four-way junction: `┼`.
    pub cross: char,
}

impl BorderGlyphSet {
    /// Single-line square borders.
    pub const SQUARE: Self = Self {
        horizontal: '─',
        vertical: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        tee_left: '├',
        tee_right: '┤',
        tee_top: '┬',
        tee_bottom: '┴',
        cross: '┼',
    };

    /// Single-line borders with rounded corners.
    pub const ROUNDED: Self = Self {
        horizontal: '─',
        vertical: '│',
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        tee_left: '├',
        tee_right: '┤',
        tee_top: '┬',
        tee_bottom: '┴',
        cross: '┼',
    };

    /// Double-line borders.
    pub const DOUBLE: Self = Self {
        horizontal: '═',
        vertical: '║',
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        tee_left: '╠',
        tee_right: '╣',
        tee_top: '╦',
        tee_bottom: '╩',
        cross: '╬',
    };

    /// Heavy-line borders.
    pub const THICK: Self = Self {
        horizontal: '━',
        vertical: '┃',
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        tee_left: '┣',
        tee_right: '┫',
        tee_top: '┳',
        tee_bottom: '┻',
        cross: '╋',
    };

    /// The tee glyph for the edge facing the given direction.
    #[inline]
    pub const fn tee(&self, side: Direction) -> char {
        match side {
            Direction::North => self.tee_top,
            Direction::East => self.tee_right,
            Direction::South => self.tee_bottom,
            Direction::West => self.tee_left,
        }
    }
}

impl Default for BorderGlyphSet {
    fn default() -> Self {
        Self::SQUARE
    }
}

/// Per-corner glyph overrides computed by the resolver.
///
/// `None` means the corner keeps the renderer's default glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CornerGlyphs {
    pub top_left: Option<char>,
    pub top_right: Option<char>,
    pub bottom_left: Option<char>,
    pub bottom_right: Option<char>,
}

impl CornerGlyphs {
    /// All corners at their defaults.
    pub const NONE: Self = Self {
        top_left: None,
        top_right: None,
        bottom_left: None,
        bottom_right: None,
    };

    /// True when no corner carries an override.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.top_left.is_none()
            && self.top_right.is_none()
            && self.bottom_left.is_none()
            && self.bottom_right.is_none()
    }
}
