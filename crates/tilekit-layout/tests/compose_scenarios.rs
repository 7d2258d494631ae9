//! End-to-end composition scenarios, driven through the public API.

use tilekit_layout::{
    BorderGlyphSet, Borders, Composer, DockComposer, Direction, GridComposer, PanelDefinition,
    Position, PrioritySplitComposer, StackComposer, TabbedComposer, TabsSide,
};

fn rect(comp: &tilekit_layout::Composition, i: usize) -> (u16, u16, u16, u16) {
    let p = comp.panels[i];
    (p.x, p.y, p.width, p.height)
}

#[test]
fn status_bar_layout() {
    // Header and footer bars around a body that takes the rest
    let defs = vec![
        PanelDefinition::new("header").position(Position::Top).height(5),
        PanelDefinition::new("footer").position(Position::Bottom).height(5),
        PanelDefinition::new("body").position(Position::Center),
    ];
    let comp = DockComposer::new().compose(100, 50, &defs).unwrap();
    assert_eq!(rect(&comp, 0), (0, 0, 100, 5));
    assert_eq!(rect(&comp, 1), (0, 45, 100, 5));
    assert_eq!(rect(&comp, 2), (0, 5, 100, 40));
    assert!(comp.panels[2].fill_remaining);
}

#[test]
fn three_columns_share_an_odd_width() {
    let defs: Vec<_> = ["left", "mid", "right"]
        .iter()
        .map(|n| PanelDefinition::new(*n))
        .collect();
    let comp = StackComposer::new(Direction::East).compose(101, 24, &defs);
    assert_eq!(rect(&comp, 0), (0, 0, 34, 24));
    assert_eq!(rect(&comp, 1), (34, 0, 34, 24));
    assert_eq!(rect(&comp, 2), (68, 0, 33, 24));
}

#[test]
fn grid_wraps_row_major_with_absent_trailing_cell() {
    let defs: Vec<_> = (0..3).map(|i| PanelDefinition::new(format!("p{i}"))).collect();
    let comp = GridComposer::new(2).compose(101, 100, &defs);
    assert_eq!(rect(&comp, 0), (0, 0, 51, 50));
    assert_eq!(rect(&comp, 1), (51, 0, 50, 50));
    assert_eq!(rect(&comp, 2), (0, 50, 51, 50));
}

#[test]
fn editor_with_sidebar_split() {
    let defs = vec![
        PanelDefinition::new("editor").position(Position::Left),
        PanelDefinition::new("outline"),
        PanelDefinition::new("terminal"),
    ];
    let comp = PrioritySplitComposer::new().ratio(0.7).compose(100, 80, &defs).unwrap();
    assert_eq!(rect(&comp, 0), (0, 0, 70, 80));
    assert_eq!(rect(&comp, 1), (70, 0, 30, 40));
    assert_eq!(rect(&comp, 2), (70, 40, 30, 40));
    assert_eq!(comp.fill_index(), Some(2));
}

#[test]
fn resolved_borders_on_a_two_pane_split() {
    let defs = vec![
        PanelDefinition::new("nav").position(Position::Left).width(30),
        PanelDefinition::new("main"),
    ];
    let mut comp = DockComposer::new().compose(100, 40, &defs).unwrap();
    comp.resolve_borders(&BorderGlyphSet::SQUARE);

    assert_eq!(comp.panels[0].borders, Borders::RIGHT);
    assert_eq!(comp.panels[1].borders, Borders::LEFT);
    // Equal-height neighbors: corners coincide, no tees
    assert_eq!(comp.panels[0].corners.top_right, Some('┐'));
    assert_eq!(comp.panels[0].corners.bottom_right, Some('┘'));
    assert_eq!(comp.panels[1].corners.top_left, Some('┌'));
    assert_eq!(comp.panels[1].corners.bottom_left, Some('└'));
}

#[test]
fn resolved_borders_tee_where_a_divider_meets_an_edge() {
    // Tall editor on the left, two stacked panels on the right
    let defs = vec![
        PanelDefinition::new("editor").position(Position::Left),
        PanelDefinition::new("outline"),
        PanelDefinition::new("terminal"),
    ];
    let mut comp = PrioritySplitComposer::new().ratio(0.5).compose(80, 40, &defs).unwrap();
    comp.resolve_borders(&BorderGlyphSet::SQUARE);

    // The divider between outline and terminal tees into the editor's edge
    assert_eq!(comp.panels[1].corners.bottom_left, Some('├'));
    assert_eq!(comp.panels[2].corners.top_left, Some('├'));
    assert_eq!(comp.panels[0].borders, Borders::RIGHT);
    assert_eq!(comp.panels[1].borders, Borders::LEFT | Borders::BOTTOM);
    assert_eq!(comp.panels[2].borders, Borders::LEFT | Borders::TOP);
}

#[test]
fn tabbed_layout_round_trip_through_composer_enum() {
    let defs = vec![
        PanelDefinition::new("logs"),
        PanelDefinition::new("metrics"),
    ];
    let composer: Composer = TabbedComposer::new(TabsSide::Top).active(1).into();
    let comp = composer.compose(80, 24, &defs).unwrap();
    assert!(comp.panels[0].is_empty());
    assert_eq!(rect(&comp, 1), (0, 3, 80, 21));
    assert_eq!(comp.overlays.len(), 1);
    assert!(comp.overlays[0].lines[1].contains("[metrics]"));
}

#[test]
fn recomposition_after_resize_is_deterministic() {
    let defs = vec![
        PanelDefinition::new("top").position(Position::Top).height_ratio(0.25),
        PanelDefinition::new("rest"),
    ];
    let dock = DockComposer::new();
    let small = dock.compose(40, 20, &defs).unwrap();
    let large = dock.compose(160, 80, &defs).unwrap();
    let small_again = dock.compose(40, 20, &defs).unwrap();
    assert_eq!(small, small_again);
    assert_eq!(small.panels[0].height, 5);
    assert_eq!(large.panels[0].height, 20);
}

#[test]
fn zero_viewport_composes_everywhere() {
    let defs = vec![
        PanelDefinition::new("a").position(Position::Left).width(10),
        PanelDefinition::new("b"),
    ];
    let composers: Vec<Composer> = vec![
        DockComposer::new().into(),
        StackComposer::new(Direction::East).into(),
        GridComposer::new(2).into(),
        TabbedComposer::new(TabsSide::Top).into(),
    ];
    for composer in composers {
        let comp = composer.compose(0, 0, &defs).unwrap();
        assert!(comp.panels.iter().all(|p| p.is_empty()));
    }
}
