// Host-side tests for session mutations: focus, filters, navigation and reset.

use awop_core::action::{Action, PanelKind};
use awop_core::band::Band;
use awop_core::content::Dataset;
use awop_core::geometry::Viewport;
use awop_core::persist::Snapshot;
use awop_core::session::Session;
use awop_core::constants::{DRAG_SCALE, SELECTED_SCALE, HOVER_SCALE, DESELECTED_OPACITY};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::f32::consts::TAU;

fn session() -> Session {
    Session::from_dataset(Dataset::default(), Viewport::new(1280.0, 800.0))
}

fn narrow_session() -> Session {
    Session::from_dataset(Dataset::default(), Viewport::new(390.0, 844.0))
}

#[test]
fn tokens_are_grouped_by_category_and_evenly_spaced() {
    let s = session();
    let dataset = Dataset::default();
    assert_eq!(s.token_count(), 20);
    assert_eq!(s.category_count(), 7);

    let order: Vec<usize> = s
        .tokens()
        .iter()
        .map(|t| dataset.category_index(t.category()).expect("known category"))
        .collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);

    for (i, t) in s.tokens().iter().enumerate() {
        assert!((t.angle() - TAU * i as f32 / 20.0).abs() < 1e-6);
        assert_eq!(t.band(), Band::Inner);
        assert!(t.is_category_visible());
        assert_eq!(s.token_id(t.name()), Some(i));
    }
    assert_eq!(s.focus(), None);
}

#[test]
fn focusing_moves_the_single_focus() {
    let mut s = session();
    assert!(s.focus_token(3));
    assert!(s.focus_token(7));
    assert!(!s.is_focused(3));
    assert!(s.is_focused(7));
    assert!(s.toggle_focus(7));
    assert_eq!(s.focus(), None);
    assert!(!s.focus_token(99));
}

#[test]
fn navigation_wraps_both_ways() {
    let mut s = session();
    assert!(!s.navigate(1), "nothing to navigate from");
    s.focus_token(19);
    s.navigate(1);
    assert_eq!(s.focus(), Some(0));
    s.navigate(-1);
    assert_eq!(s.focus(), Some(19));
    s.navigate(-21);
    assert_eq!(s.focus(), Some(18));
    assert!(s.nav_enabled());
}

#[test]
fn hiding_the_focused_category_clears_focus() {
    let mut s = session();
    let category = s.tokens()[0].category().to_string();
    let index = s.dataset().category_index(&category).expect("known category");
    s.focus_token(0);

    let changes = s.set_category_visible(index, false);
    assert!(changes.focus);
    assert_eq!(changes.categories.as_slice(), &[index]);
    assert_eq!(s.focus(), None);
    assert!(s
        .tokens()
        .iter()
        .filter(|t| t.category() == category)
        .all(|t| !t.is_category_visible()));
}

#[test]
fn hiding_another_category_keeps_focus() {
    let mut s = session();
    s.focus_token(0);
    let last = s.tokens()[19].category().to_string();
    let index = s.dataset().category_index(&last).expect("known category");
    assert_ne!(s.tokens()[0].category(), last);

    let changes = s.apply(&Action::ToggleCategory(index));
    assert!(!changes.focus);
    assert_eq!(s.focus(), Some(0));
    assert!(!s.is_category_visible(index));
    assert!(changes.needs_persist());
}

#[test]
fn filtering_does_not_change_the_score() {
    let mut s = session();
    let before = s.score();
    for i in 0..s.category_count() {
        s.set_category_visible(i, false);
    }
    assert_eq!(s.score(), before);
}

#[test]
fn reset_restores_everything_and_always_persists() {
    let mut s = session();
    s.set_band(2, Band::Outer);
    s.set_category_visible(1, false);
    s.focus_token(2);

    let changes = s.apply(&Action::Reset);
    assert!(changes.reset && changes.focus && changes.needs_persist());
    assert_eq!(s.snapshot(), Snapshot::initial(20, 7));
    assert_eq!(s.focus(), None);

    let again = s.reset();
    assert!(again.needs_persist());
    assert!(!again.focus);
}

#[test]
fn dropping_the_focused_token_refreshes_its_panel() {
    let mut s = session();
    s.apply(&Action::Focus(5));
    s.apply(&Action::BeginTokenDrag(5));
    assert_eq!(s.drag().map(|d| d.token), Some(5));

    let changes = s.apply(&Action::DropToken {
        token: 5,
        band: Band::Middle,
    });
    assert!(changes.bands && changes.focused_band);
    assert!(changes.needs_detail_refresh());
    assert_eq!(s.drag(), None);
    assert_eq!(s.tokens()[5].band(), Band::Middle);
}

#[test]
fn dropping_on_the_same_band_changes_nothing() {
    let mut s = session();
    s.apply(&Action::BeginTokenDrag(1));
    let changes = s.apply(&Action::DropToken {
        token: 1,
        band: Band::Inner,
    });
    assert!(!changes.needs_persist());
    assert_eq!(s.drag(), None);
}

#[test]
fn visual_targets_follow_interaction_state() {
    let mut s = session();
    let rest = s.visual_targets(0, false).expect("token exists");
    assert_eq!(rest.radius, 4.0);

    assert_eq!(s.visual_targets(0, true).map(|v| v.scale), Some(HOVER_SCALE));

    s.apply(&Action::BeginTokenDrag(0));
    s.apply(&Action::DragToken {
        token: 0,
        radius: 6.6,
    });
    let dragged = s.visual_targets(0, false).expect("token exists");
    assert_eq!(dragged.radius, 6.6);
    assert!(dragged.snap_radius);
    assert_eq!(dragged.scale, DRAG_SCALE);
    // Hover is ignored for other tokens while a drag is in progress.
    assert_eq!(s.visual_targets(1, true).map(|v| v.scale), Some(1.0));

    s.apply(&Action::CancelTokenDrag(0));
    s.apply(&Action::Focus(0));
    assert_eq!(s.visual_targets(0, false).map(|v| v.scale), Some(SELECTED_SCALE));

    s.set_category_visible(6, false);
    let hidden = s.tokens().iter().position(|t| !t.is_category_visible()).expect("some hidden");
    assert_eq!(s.visual_targets(hidden, false).map(|v| v.opacity), Some(DESELECTED_OPACITY));
}

#[test]
fn help_panel_and_focus_are_exclusive() {
    let mut s = narrow_session();
    s.apply(&Action::Focus(2));
    let changes = s.apply(&Action::ToggleHelp);
    assert!(s.panels.help_open);
    assert!(changes.focus);
    assert_eq!(s.focus(), None);

    let changes = s.apply(&Action::ToggleFocus(4));
    assert!(changes.layout);
    assert!(!s.panels.help_open);
}

#[test]
fn panel_layout_actions() {
    let mut s = narrow_session();
    s.apply(&Action::ExpandPanel);
    assert!(s.panels.detail_expanded);
    s.apply(&Action::ResizePanel {
        panel: PanelKind::Detail,
        height: 600.0,
    });
    assert_eq!(s.panels.detail_height, Some(600.0));
    let changes = s.apply(&Action::CollapsePanel);
    assert!(changes.layout);
    assert!(!s.panels.detail_expanded);
    assert_eq!(s.panels.detail_height, None);
}

#[test]
fn narrow_layout_lifts_the_scene_while_focused() {
    let mut s = narrow_session();
    assert_eq!(s.scene_offset_y(), 0.0);
    s.focus_token(0);
    assert_eq!(s.scene_offset_y(), 5.0);

    let mut wide = session();
    wide.focus_token(0);
    assert_eq!(wide.scene_offset_y(), 0.0);
}

#[test]
fn zoom_is_clamped_and_reported() {
    let mut s = session();
    assert_eq!(s.camera.distance(), 18.0);
    assert!(s.apply(&Action::Zoom(100.0)).camera);
    assert_eq!(s.camera.distance(), 30.0);
    assert!(!s.apply(&Action::Zoom(1.0)).camera);
    s.apply(&Action::Zoom(-100.0));
    assert_eq!(s.camera.distance(), 8.0);
}

fn focus_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..20).prop_map(Action::ToggleFocus),
        (0usize..20).prop_map(Action::Focus),
        Just(Action::ClearFocus),
        (-3i32..=3).prop_map(Action::Navigate),
        (0usize..7).prop_map(Action::ToggleCategory),
        Just(Action::ToggleHelp),
        Just(Action::Reset),
    ]
}

proptest! {
    #[test]
    fn at_most_one_token_is_ever_focused(actions in proptest::collection::vec(focus_action(), 0..40)) {
        let mut s = session();
        for a in &actions {
            s.apply(a);
            let focused = (0..s.token_count()).filter(|&i| s.is_focused(i)).count();
            prop_assert!(focused <= 1);
        }
    }
}
