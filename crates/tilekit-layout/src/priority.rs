#![forbid(unsafe_code)]

//! Primary/secondary split composition.

use crate::composition::Composition;
use crate::error::ComposeError;
use crate::panel::{PanelDefinition, PanelState};
use crate::stack::StackComposer;
use tilekit_core::{Direction, Position};

/// Default share of the split axis given to the primary panel.
const DEFAULT_RATIO: f32 = 0.5;

/// Gives one primary panel a ratio of the viewport and stacks the rest in
/// the leftover space.
///
/// The first definition is the primary; its position picks the split axis
/// (Left/Right split the width, Top/Bottom the height) and the edge it is
/// anchored to. Secondaries are stacked by an internally-owned
/// [`StackComposer`] on the perpendicular axis, re-synced to the
/// definition count on every compose.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrioritySplitComposer {
    ratio: f32,
}

impl PrioritySplitComposer {
    /// Create a split with the default 0.5 ratio.
    pub const fn new() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
        }
    }

    /// Set the primary panel's share of the split axis.
    ///
    /// Out-of-range input silently resets to 0.5. Longstanding behavior;
    /// callers rely on it instead of an error.
    #[must_use]
    pub fn ratio(mut self, ratio: f32) -> Self {
        self.ratio = if (0.0..=1.0).contains(&ratio) {
            ratio
        } else {
            DEFAULT_RATIO
        };
        self
    }

    /// The current primary share.
    #[inline]
    pub const fn current_ratio(&self) -> f32 {
        self.ratio
    }

    /// Lay out the primary and stack the remaining definitions.
    pub fn compose(
        &self,
        width: u16,
        height: u16,
        definitions: &[PanelDefinition],
    ) -> Result<Composition, ComposeError> {
        let Some(primary) = definitions.first() else {
            return Err(ComposeError::MissingPrimary);
        };
        let placement = primary.placement();
        if !placement.is_docked() {
            return Err(ComposeError::PrimaryNotDocked {
                index: 0,
                name: primary.name().to_string(),
            });
        }

        let horizontal_split = matches!(placement, Position::Left | Position::Right);
        let extent = if horizontal_split { width } else { height };
        let primary_size =
            ((f32::from(extent) * self.ratio).round() as u16).min(extent);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "tilekit::layout",
            count = definitions.len(),
            width,
            height,
            ratio = self.ratio,
            primary_size,
            "priority split compose"
        );

        let leftover = extent - primary_size;
        let (primary_state, rest_x, rest_y, rest_w, rest_h) = match placement {
            Position::Left => (
                PanelState::new(0, 0, primary_size, height),
                primary_size,
                0,
                leftover,
                height,
            ),
            Position::Right => (
                PanelState::new(leftover, 0, primary_size, height),
                0,
                0,
                leftover,
                height,
            ),
            Position::Top => (
                PanelState::new(0, 0, width, primary_size),
                0,
                primary_size,
                width,
                leftover,
            ),
            Position::Bottom => (
                PanelState::new(0, leftover, width, primary_size),
                0,
                0,
                width,
                leftover,
            ),
            Position::None | Position::Center => unreachable!("checked is_docked above"),
        };

        let mut states = Vec::with_capacity(definitions.len());
        states.push(primary_state);

        let secondaries = &definitions[1..];
        if secondaries.is_empty() {
            // Nothing to share with: the primary owns the whole viewport
            states[0] = PanelState::new(0, 0, width, height);
            states[0].fill_remaining = true;
            return Ok(Composition::from_panels(states));
        }

        // Secondaries stack on the axis perpendicular to the split
        let stack_direction = if horizontal_split {
            Direction::South
        } else {
            Direction::East
        };
        let stacked = StackComposer::new(stack_direction).compose(rest_w, rest_h, secondaries);
        for mut state in stacked.panels {
            state.x = state.x.saturating_add(rest_x);
            state.y = state.y.saturating_add(rest_y);
            states.push(state);
        }

        // The last secondary sits flush against the far edge and absorbs
        // what the primary left over
        if let Some(last) = states.last_mut() {
            last.fill_remaining = true;
        }

        Ok(Composition::from_panels(states))
    }
}

impl Default for PrioritySplitComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs(primary_at: Position, secondaries: usize) -> Vec<PanelDefinition> {
        let mut all = vec![PanelDefinition::new("primary").position(primary_at)];
        for i in 0..secondaries {
            all.push(PanelDefinition::new(format!("s{i}")));
        }
        all
    }

    #[test]
    fn left_primary_matches_worked_example() {
        let comp = PrioritySplitComposer::new()
            .ratio(0.7)
            .compose(100, 80, &defs(Position::Left, 2))
            .unwrap();
        let p = comp.panels[0];
        assert_eq!((p.x, p.y, p.width, p.height), (0, 0, 70, 80));
        // Secondaries stacked top-to-bottom in the leftover column
        let s0 = comp.panels[1];
        let s1 = comp.panels[2];
        assert_eq!((s0.x, s0.y, s0.width, s0.height), (70, 0, 30, 40));
        assert_eq!((s1.x, s1.y, s1.width, s1.height), (70, 40, 30, 40));
        assert_eq!(comp.fill_index(), Some(2));
    }

    #[test]
    fn top_primary_stacks_secondaries_left_to_right() {
        let comp = PrioritySplitComposer::new()
            .compose(90, 40, &defs(Position::Top, 3))
            .unwrap();
        let p = comp.panels[0];
        assert_eq!((p.x, p.y, p.width, p.height), (0, 0, 90, 20));
        let widths: Vec<u16> = comp.panels[1..].iter().map(|s| s.width).collect();
        assert_eq!(widths, vec![30, 30, 30]);
        assert!(comp.panels[1..].iter().all(|s| s.y == 20 && s.height == 20));
        assert_eq!(comp.panels[2].x, 30);
    }

    #[test]
    fn right_primary_anchors_to_right_edge() {
        let comp = PrioritySplitComposer::new()
            .ratio(0.25)
            .compose(100, 10, &defs(Position::Right, 1))
            .unwrap();
        let p = comp.panels[0];
        assert_eq!((p.x, p.width), (75, 25));
        let s = comp.panels[1];
        assert_eq!((s.x, s.width, s.height), (0, 75, 10));
    }

    #[test]
    fn bottom_primary_anchors_to_bottom_edge() {
        let comp = PrioritySplitComposer::new()
            .ratio(0.3)
            .compose(50, 100, &defs(Position::Bottom, 1))
            .unwrap();
        let p = comp.panels[0];
        assert_eq!((p.y, p.height), (70, 30));
    }

    #[test]
    fn out_of_range_ratio_silently_resets() {
        assert_eq!(PrioritySplitComposer::new().ratio(1.7).current_ratio(), 0.5);
        assert_eq!(PrioritySplitComposer::new().ratio(-0.2).current_ratio(), 0.5);
        assert_eq!(PrioritySplitComposer::new().ratio(0.9).current_ratio(), 0.9);
    }

    #[test]
    fn lone_primary_fills_everything() {
        let comp = PrioritySplitComposer::new()
            .compose(80, 24, &defs(Position::Left, 0))
            .unwrap();
        assert_eq!(comp.panels.len(), 1);
        assert!(comp.panels[0].fill_remaining);
        let p = comp.panels[0];
        assert_eq!((p.x, p.y, p.width, p.height), (0, 0, 80, 24));
    }

    #[test]
    fn undocked_primary_is_an_error() {
        let defs = vec![PanelDefinition::new("floaty")];
        let err = PrioritySplitComposer::new().compose(80, 24, &defs).unwrap_err();
        assert_eq!(
            err,
            ComposeError::PrimaryNotDocked {
                index: 0,
                name: "floaty".into(),
            }
        );
    }

    #[test]
    fn no_definitions_is_an_error() {
        let err = PrioritySplitComposer::new().compose(80, 24, &[]).unwrap_err();
        assert_eq!(err, ComposeError::MissingPrimary);
    }

    #[test]
    fn split_tiles_viewport_exactly() {
        let comp = PrioritySplitComposer::new()
            .ratio(0.6)
            .compose(101, 37, &defs(Position::Left, 3))
            .unwrap();
        let mut covered = 0u32;
        for p in &comp.panels {
            covered += u32::from(p.width) * u32::from(p.height);
        }
        assert_eq!(covered, 101 * 37);
    }

    #[test]
    fn secondary_count_tracks_definition_list() {
        let composer = PrioritySplitComposer::new();
        let comp3 = composer.compose(60, 30, &defs(Position::Left, 2)).unwrap();
        assert_eq!(comp3.panels.len(), 3);
        let comp5 = composer.compose(60, 30, &defs(Position::Left, 4)).unwrap();
        assert_eq!(comp5.panels.len(), 5);
        assert_eq!(comp5.fill_index(), Some(4));
    }
}
