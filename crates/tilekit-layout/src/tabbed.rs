#![forbid(unsafe_code)]

//! Tabbed composition: one visible panel plus a tab-strip overlay.

use crate::borders::BorderGlyphSet;
use crate::composition::{Composition, Overlay};
use crate::panel::{PanelDefinition, PanelState};
use unicode_width::UnicodeWidthChar;

/// Which edge carries the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TabsSide {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Default band thickness: a title row inside a 1-cell frame.
const DEFAULT_THICKNESS: u16 = 3;

/// Shows one panel at a time behind a strip of tab titles.
///
/// The strip band is an [`Overlay`], not a panel; it is reserved out of the
/// viewport before the content rectangle is computed. Only the active
/// definition receives a placement; the rest keep zero-size states.
/// Changing the active index always triggers a full recomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabbedComposer {
    side: TabsSide,
    thickness: u16,
    active: usize,
}

impl TabbedComposer {
    /// Create a tabbed composer with the strip on the given side.
    pub const fn new(side: TabsSide) -> Self {
        Self {
            side,
            thickness: DEFAULT_THICKNESS,
            active: 0,
        }
    }

    /// Set the band thickness in cells (sanitized to at least 1).
    #[must_use]
    pub fn thickness(mut self, thickness: u16) -> Self {
        self.thickness = thickness.max(1);
        self
    }

    /// Select the active panel (clamped to the panel count at compose time).
    #[must_use]
    pub fn active(mut self, active: usize) -> Self {
        self.active = active;
        self
    }

    /// The currently selected index, before clamping.
    #[inline]
    pub const fn active_index(&self) -> usize {
        self.active
    }

    /// Compose the active panel's content rectangle and the tab strip.
    pub fn compose(&self, width: u16, height: u16, definitions: &[PanelDefinition]) -> Composition {
        if definitions.is_empty() {
            return Composition::default();
        }
        let active = self.active.min(definitions.len() - 1);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "tilekit::layout",
            count = definitions.len(),
            active,
            side = ?self.side,
            width,
            height,
            "tabbed compose"
        );

        let titles: Vec<String> = definitions
            .iter()
            .enumerate()
            .map(|(i, def)| {
                if def.name().is_empty() {
                    fallback_title(i)
                } else {
                    def.name().to_string()
                }
            })
            .collect();

        let (band, content) = match self.side {
            TabsSide::Top => {
                let t = self.thickness.min(height);
                ((0, 0, width, t), (0, t, width, height - t))
            }
            TabsSide::Bottom => {
                let t = self.thickness.min(height);
                ((0, height - t, width, t), (0, 0, width, height - t))
            }
            TabsSide::Left => {
                let t = self.thickness.min(width);
                ((0, 0, t, height), (t, 0, width - t, height))
            }
            TabsSide::Right => {
                let t = self.thickness.min(width);
                ((width - t, 0, t, height), (0, 0, width - t, height))
            }
        };

        let mut states = vec![PanelState::empty(); definitions.len()];
        states[active] = PanelState::new(content.0, content.1, content.2, content.3);

        let lines = match self.side {
            TabsSide::Top | TabsSide::Bottom => {
                horizontal_strip(&titles, active, band.2, band.3)
            }
            TabsSide::Left | TabsSide::Right => vertical_strip(&titles, active, band.2, band.3),
        };
        let overlay = Overlay {
            x: band.0,
            y: band.1,
            width: band.2,
            height: band.3,
            lines,
        };

        let mut composition = Composition::from_panels(states);
        composition.overlays.push(overlay);
        composition
    }
}

/// Lettered placeholder for unnamed panels: "Tab A", "Tab B", ...
fn fallback_title(index: usize) -> String {
    let letter = (b'A' + (index % 26) as u8) as char;
    format!("Tab {letter}")
}

/// Cut a string to at most `max` display columns.
fn fit_to_width(text: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

/// Display width of a string in columns.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Render a horizontal strip: a framed title row, the active tab bracketed.
fn horizontal_strip(titles: &[String], active: usize, width: u16, rows: u16) -> Vec<String> {
    if width == 0 || rows == 0 {
        return Vec::new();
    }
    let glyphs = BorderGlyphSet::SQUARE;
    let width = usize::from(width);

    let mut row = String::new();
    for (i, title) in titles.iter().enumerate() {
        if i > 0 {
            row.push(glyphs.vertical);
        }
        if i == active {
            row.push_str(&format!("[{title}]"));
        } else {
            row.push_str(&format!(" {title} "));
        }
    }
    let interior = width.saturating_sub(2);

    let framed_row = |content: &str| {
        let cut = fit_to_width(content, interior);
        let pad = interior.saturating_sub(display_width(&cut));
        format!(
            "{}{}{}{}",
            glyphs.vertical,
            cut,
            " ".repeat(pad),
            glyphs.vertical
        )
    };

    match rows {
        1 => vec![fit_to_width(&row, width)],
        2 => vec![
            framed_row(&row),
            format!(
                "{}{}{}",
                glyphs.bottom_left,
                glyphs.horizontal.to_string().repeat(interior),
                glyphs.bottom_right
            ),
        ],
        _ => {
            let mut lines = Vec::with_capacity(usize::from(rows));
            lines.push(format!(
                "{}{}{}",
                glyphs.top_left,
                glyphs.horizontal.to_string().repeat(interior),
                glyphs.top_right
            ));
            lines.push(framed_row(&row));
            for _ in 3..rows {
                lines.push(framed_row(""));
            }
            lines.push(format!(
                "{}{}{}",
                glyphs.bottom_left,
                glyphs.horizontal.to_string().repeat(interior),
                glyphs.bottom_right
            ));
            lines
        }
    }
}

/// Render a vertical strip: one title per row, the active tab marked.
fn vertical_strip(titles: &[String], active: usize, width: u16, rows: u16) -> Vec<String> {
    if width == 0 || rows == 0 {
        return Vec::new();
    }
    let width = usize::from(width);
    (0..usize::from(rows))
        .map(|row| {
            if let Some(title) = titles.get(row) {
                let marker = if row == active { '▸' } else { ' ' };
                fit_to_width(&format!("{marker}{title}"), width)
            } else {
                String::new()
            }
        })
        .collect()
}
