#![forbid(unsafe_code)]

//! Edge-docked panel composition.

use crate::composition::Composition;
use crate::error::ComposeError;
use crate::panel::{PanelDefinition, PanelState};
use tilekit_core::Position;

/// Allocates edge-docked panels in list order against a shrinking usable
/// rectangle, then hands the leftover to the single fill panel.
///
/// Top/Bottom panels claim the full usable width; Left/Right panels claim
/// the usable height *as already reduced* by earlier Top/Bottom
/// allocations, so allocation order is visible in the result. Ratio sizes
/// resolve against the space available at their turn, not the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DockComposer;

impl DockComposer {
    /// Create a dock composer.
    pub const fn new() -> Self {
        Self
    }

    /// Lay the definitions out against the viewport.
    ///
    /// Exactly one definition must be left to fill the remaining space
    /// (`Position::None` or `Center`); zero or several is a configuration
    /// error. Oversized requests clamp to what is left, producing legal
    /// zero-size panels rather than failing.
    pub fn compose(
        &self,
        width: u16,
        height: u16,
        definitions: &[PanelDefinition],
    ) -> Result<Composition, ComposeError> {
        let positions = effective_positions(definitions);

        // Exactly one fill claimant
        let mut fill: Option<usize> = None;
        for (i, position) in positions.iter().enumerate() {
            if !position.is_docked() {
                if let Some(first) = fill {
                    return Err(ComposeError::DuplicateFill {
                        first,
                        first_name: definitions[first].name().to_string(),
                        second: i,
                        second_name: definitions[i].name().to_string(),
                    });
                }
                fill = Some(i);
            }
        }
        let fill = fill.ok_or(ComposeError::MissingFill)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "tilekit::layout",
            count = definitions.len(),
            width,
            height,
            fill,
            "dock compose"
        );

        // The usable rectangle shrinks as each docked panel claims its band
        let (mut ux, mut uy, mut uw, mut uh) = (0u16, 0u16, width, height);
        let mut states = vec![PanelState::empty(); definitions.len()];

        for (i, def) in definitions.iter().enumerate() {
            match positions[i] {
                Position::Top => {
                    let h = def.height_spec().resolve(uh);
                    states[i] = PanelState::new(ux, uy, uw, h);
                    uy = uy.saturating_add(h);
                    uh -= h;
                }
                Position::Bottom => {
                    let h = def.height_spec().resolve(uh);
                    states[i] = PanelState::new(ux, uy + (uh - h), uw, h);
                    uh -= h;
                }
                Position::Left => {
                    let w = def.width_spec().resolve(uw);
                    states[i] = PanelState::new(ux, uy, w, uh);
                    ux = ux.saturating_add(w);
                    uw -= w;
                }
                Position::Right => {
                    let w = def.width_spec().resolve(uw);
                    states[i] = PanelState::new(ux + (uw - w), uy, w, uh);
                    uw -= w;
                }
                Position::None | Position::Center => {}
            }
        }

        states[fill] = PanelState::new(ux, uy, uw, uh);
        states[fill].fill_remaining = true;

        Ok(Composition::from_panels(states))
    }
}

/// Positions actually used for allocation.
///
/// When every definition declines to place itself, assign Top, Right,
/// Bottom, Left, then Center in input order as a convenience default;
/// definitions past the fifth cycle the four edges again so the fill panel
/// stays unique.
fn effective_positions(definitions: &[PanelDefinition]) -> Vec<Position> {
    const EDGES: [Position; 4] = [
        Position::Top,
        Position::Right,
        Position::Bottom,
        Position::Left,
    ];

    let all_unplaced = definitions
        .iter()
        .all(|d| d.placement() == Position::None);
    if !all_unplaced || definitions.is_empty() {
        return definitions.iter().map(|d| d.placement()).collect();
    }

    (0..definitions.len())
        .map(|i| match i {
            0..=3 => EDGES[i],
            4 => Position::Center,
            _ => EDGES[(i - 5) % 4],
        })
        .collect()
}
