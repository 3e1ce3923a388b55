// Host-side tests for the gesture machines, driven with synthetic samples.

use awop_core::action::{Action, PanelKind};
use awop_core::band::{Band, RingRadii};
use awop_core::camera::Camera;
use awop_core::geometry::{normalized_to_screen, Viewport};
use awop_core::gesture::{
    starts_grab, wheel_zoom, GestureContext, GestureTuning, PanelMetrics, PanelSwipeMachine, PointerMachine,
    TokenHit, TouchMachine, TouchMode,
};
use glam::{Vec2, Vec3};
use pretty_assertions::assert_eq;

struct Rig {
    camera: Camera,
    viewport: Viewport,
    tuning: GestureTuning,
}

impl Rig {
    fn new() -> Self {
        let viewport = Viewport::new(1200.0, 800.0);
        Self {
            camera: Camera::on_z_axis(18.0, viewport.aspect()),
            viewport,
            tuning: GestureTuning::default(),
        }
    }

    fn ctx(&self) -> GestureContext<'_> {
        GestureContext::new(&self.camera, self.viewport, RingRadii::default())
    }

    /// Screen position of a point on the wheel's +x axis.
    fn at_radius(&self, r: f32) -> Vec2 {
        let ndc = self.camera.project(Vec3::new(r, 0.0, 0.0)).expect("visible");
        normalized_to_screen(ndc.truncate(), self.viewport)
    }
}

fn hit(token: usize, radius: f32) -> Option<TokenHit> {
    Some(TokenHit { token, radius })
}

fn dropped_band(actions: &[Action]) -> Option<Band> {
    actions.iter().find_map(|a| match a {
        Action::DropToken { band, .. } => Some(*band),
        _ => None,
    })
}

#[test]
fn mouse_drag_outward_drops_on_outer_band() {
    let rig = Rig::new();
    let ctx = rig.ctx();
    let mut mouse = PointerMachine::mouse(&rig.tuning);

    let out = mouse.press(rig.at_radius(4.0), hit(0, 4.0), &ctx);
    assert_eq!(out.as_slice(), &[Action::BeginTokenDrag(0)]);
    assert_eq!(mouse.dragged_token(), Some(0));

    let out = mouse.move_to(rig.at_radius(7.0), &ctx);
    match out.as_slice() {
        [Action::DragToken { token: 0, radius }] => assert!((radius - 7.0).abs() < 1e-2),
        other => panic!("unexpected actions {other:?}"),
    }

    let out = mouse.release(rig.at_radius(7.0), &ctx);
    assert_eq!(dropped_band(&out), Some(Band::Outer));
    assert!(!mouse.is_active());
}

#[test]
fn drag_keeps_the_grab_offset_and_clamps() {
    let rig = Rig::new();
    let ctx = rig.ctx();
    let mut mouse = PointerMachine::mouse(&rig.tuning);

    // Grab the token half a unit inside its centre.
    mouse.press(rig.at_radius(3.5), hit(2, 4.0), &ctx);
    let out = mouse.move_to(rig.at_radius(5.0), &ctx);
    match out.as_slice() {
        [Action::DragToken { radius, .. }] => assert!((radius - 5.5).abs() < 1e-2),
        other => panic!("unexpected actions {other:?}"),
    }

    // Far beyond the outer ring: clamped to outer + padding.
    let out = mouse.move_to(rig.at_radius(12.0), &ctx);
    assert!(matches!(out.as_slice(), [Action::DragToken { radius, .. }] if (*radius - 8.0).abs() < 1e-6));
}

#[test]
fn mouse_click_on_token_toggles_focus_without_band_change() {
    let rig = Rig::new();
    let ctx = rig.ctx();
    let mut mouse = PointerMachine::mouse(&rig.tuning);
    let p = rig.at_radius(5.5);

    mouse.press(p, hit(4, 5.5), &ctx);
    let out = mouse.release(p, &ctx);
    assert_eq!(
        out.as_slice(),
        &[Action::CancelTokenDrag(4), Action::ToggleFocus(4)]
    );
}

#[test]
fn mouse_click_on_empty_space_clears_focus() {
    let rig = Rig::new();
    let ctx = rig.ctx();
    let mut mouse = PointerMachine::mouse(&rig.tuning);
    let p = Vec2::new(20.0, 20.0);

    assert!(mouse.press(p, None, &ctx).is_empty());
    assert!(mouse.is_rotating());
    let out = mouse.release(p, &ctx);
    assert_eq!(out.as_slice(), &[Action::DismissHelp, Action::ClearFocus]);
}

#[test]
fn mouse_rotation_sets_velocity_from_the_frame_delta() {
    let rig = Rig::new();
    let ctx = rig.ctx();
    let mut mouse = PointerMachine::mouse(&rig.tuning);

    mouse.press(Vec2::new(100.0, 100.0), None, &ctx);
    mouse.move_to(Vec2::new(110.0, 100.0), &ctx);
    let out = mouse.move_to(Vec2::new(130.0, 90.0), &ctx);
    assert_eq!(
        out.as_slice(),
        &[Action::SetRotationVelocity(Vec2::new(-10.0 * 0.005, 20.0 * 0.005))]
    );
    // Any movement makes the release a drag, not a click.
    assert!(mouse.release(Vec2::new(100.0, 100.0), &ctx).is_empty());
}

#[test]
fn touch_rotation_mirrors_horizontal_motion() {
    let rig = Rig::new();
    let ctx = rig.ctx();
    let mut touch = TouchMachine::new(&rig.tuning);

    touch.start(&[Vec2::new(100.0, 100.0)], None, &ctx);
    let out = touch.move_to(&[Vec2::new(150.0, 120.0)], &ctx);
    assert_eq!(
        out.as_slice(),
        &[Action::SetRotationVelocity(Vec2::new(20.0 * 0.008, -50.0 * 0.008))]
    );
}

#[test]
fn short_touch_on_token_is_a_tap() {
    let rig = Rig::new();
    let ctx = rig.ctx();
    let mut touch = TouchMachine::new(&rig.tuning);
    let p = rig.at_radius(4.0);

    touch.start(&[p], hit(1, 4.0), &ctx);
    touch.move_to(&[p + Vec2::new(3.0, 4.0)], &ctx);
    let out = touch.end(&[], Some(p + Vec2::new(6.0, 0.0)), &ctx);
    assert_eq!(
        out.as_slice(),
        &[Action::CancelTokenDrag(1), Action::ToggleFocus(1)]
    );
    assert_eq!(touch.mode(), TouchMode::Idle);
}

#[test]
fn long_touch_drag_drops_on_a_band() {
    let rig = Rig::new();
    let ctx = rig.ctx();
    let mut touch = TouchMachine::new(&rig.tuning);

    touch.start(&[rig.at_radius(4.0)], hit(3, 4.0), &ctx);
    touch.move_to(&[rig.at_radius(5.6)], &ctx);
    let out = touch.end(&[], None, &ctx);
    assert_eq!(dropped_band(&out), Some(Band::Middle));
}

#[test]
fn second_finger_turns_a_drag_into_a_pinch() {
    let rig = Rig::new();
    let ctx = rig.ctx();
    let mut touch = TouchMachine::new(&rig.tuning);
    let a = rig.at_radius(4.0).round();

    touch.start(&[a], hit(0, 4.0), &ctx);
    let out = touch.start(&[a, a + Vec2::new(100.0, 0.0)], None, &ctx);
    assert_eq!(out.as_slice(), &[Action::CancelTokenDrag(0)]);
    assert_eq!(touch.mode(), TouchMode::Pinch { last_distance: 100.0 });
    assert_eq!(touch.dragged_token(), None);

    // Spreading the fingers zooms in.
    let out = touch.move_to(&[a, a + Vec2::new(150.0, 0.0)], &ctx);
    match out.as_slice() {
        [Action::Zoom(delta)] => assert!((delta + 1.5).abs() < 1e-4),
        other => panic!("unexpected actions {other:?}"),
    }
    // Pinching in zooms out, the same direction as scrolling down.
    let out = touch.move_to(&[a, a + Vec2::new(120.0, 0.0)], &ctx);
    assert!(matches!(out.as_slice(), [Action::Zoom(d)] if *d > 0.0));
    assert!(matches!(wheel_zoom(100.0, &rig.tuning), Action::Zoom(d) if d > 0.0));
}

#[test]
fn pinch_ending_on_one_finger_is_never_a_tap() {
    let rig = Rig::new();
    let ctx = rig.ctx();
    let mut touch = TouchMachine::new(&rig.tuning);
    let a = Vec2::new(300.0, 300.0);
    let b = Vec2::new(400.0, 300.0);

    touch.start(&[a], None, &ctx);
    touch.start(&[a, b], None, &ctx);
    assert!(touch.end(&[a], Some(b), &ctx).is_empty());
    assert_eq!(touch.mode(), TouchMode::PinchTail);

    // The remaining finger neither rotates nor taps.
    assert!(touch.move_to(&[a + Vec2::new(40.0, 0.0)], &ctx).is_empty());
    assert!(touch.start(&[a], hit(5, 4.0), &ctx).is_empty());
    assert!(touch.end(&[], Some(a), &ctx).is_empty());
    assert!(!touch.is_active());
}

#[test]
fn touch_cancel_drops_the_drag_without_a_band() {
    let rig = Rig::new();
    let ctx = rig.ctx();
    let mut touch = TouchMachine::new(&rig.tuning);
    touch.start(&[rig.at_radius(4.0)], hit(7, 4.0), &ctx);
    touch.move_to(&[rig.at_radius(7.0)], &ctx);
    assert_eq!(touch.cancel().as_slice(), &[Action::CancelTokenDrag(7)]);
}

fn metrics(offset_height: f32, scroll_top: f32) -> PanelMetrics {
    PanelMetrics {
        offset_height,
        scroll_top,
        scroll_height: 900.0,
        client_height: offset_height,
        viewport_height: 800.0,
    }
}

#[test]
fn horizontal_panel_swipe_navigates() {
    let mut panel = PanelSwipeMachine::new(PanelKind::Detail, GestureTuning::default());
    let m = metrics(400.0, 0.0);

    panel.touch_start(Vec2::new(300.0, 600.0), false, &m);
    let out = panel.touch_end(Vec2::new(200.0, 610.0), &m, true);
    assert_eq!(out.as_slice(), &[Action::Navigate(1)]);

    panel.touch_start(Vec2::new(100.0, 600.0), false, &m);
    let out = panel.touch_end(Vec2::new(200.0, 590.0), &m, true);
    assert_eq!(out.as_slice(), &[Action::Navigate(-1)]);

    // Too diagonal to count.
    panel.touch_start(Vec2::new(100.0, 600.0), false, &m);
    assert!(panel.touch_end(Vec2::new(180.0, 660.0), &m, true).is_empty());
}

#[test]
fn swipe_down_dismisses_only_at_top_and_min_height() {
    let mut panel = PanelSwipeMachine::new(PanelKind::Detail, GestureTuning::default());
    let start = Vec2::new(200.0, 500.0);
    let end = Vec2::new(205.0, 600.0);

    let at_min = metrics(405.0, 0.0);
    panel.touch_start(start, false, &at_min);
    assert_eq!(
        panel.touch_end(end, &at_min, true).as_slice(),
        &[Action::ClearFocus, Action::CollapsePanel]
    );

    let scrolled = metrics(405.0, 30.0);
    panel.touch_start(start, false, &scrolled);
    assert!(panel.touch_end(end, &scrolled, true).is_empty());

    let tall = metrics(600.0, 0.0);
    panel.touch_start(start, false, &tall);
    assert!(panel.touch_end(end, &tall, true).is_empty());
}

#[test]
fn swipe_up_at_bottom_expands() {
    let mut panel = PanelSwipeMachine::new(PanelKind::Detail, GestureTuning::default());
    let bottom = PanelMetrics {
        offset_height: 400.0,
        scroll_top: 498.0,
        scroll_height: 900.0,
        client_height: 400.0,
        viewport_height: 800.0,
    };
    panel.touch_start(Vec2::new(200.0, 600.0), false, &bottom);
    assert_eq!(
        panel.touch_end(Vec2::new(200.0, 500.0), &bottom, true).as_slice(),
        &[Action::ExpandPanel]
    );
}

#[test]
fn grab_bar_drag_resizes_within_limits() {
    let mut panel = PanelSwipeMachine::new(PanelKind::Detail, GestureTuning::default());
    let m = metrics(400.0, 0.0);

    panel.touch_start(Vec2::new(200.0, 400.0), true, &m);
    assert!(panel.is_grabbing());
    assert_eq!(
        panel.touch_move(Vec2::new(200.0, 300.0), &m).as_slice(),
        &[Action::ResizePanel {
            panel: PanelKind::Detail,
            height: 500.0
        }]
    );
    // Capped at viewport minus the category bar.
    assert_eq!(
        panel.touch_move(Vec2::new(200.0, -500.0), &m).as_slice(),
        &[Action::ResizePanel {
            panel: PanelKind::Detail,
            height: 732.0
        }]
    );
    // Never below half the viewport.
    assert_eq!(
        panel.touch_move(Vec2::new(200.0, 700.0), &m).as_slice(),
        &[Action::ResizePanel {
            panel: PanelKind::Detail,
            height: 400.0
        }]
    );
    // A long grab-bar drag keeps its height and is not a swipe.
    assert!(panel.touch_end(Vec2::new(200.0, 700.0), &m, true).is_empty());
}

#[test]
fn grab_bar_tap_dismisses() {
    let mut detail = PanelSwipeMachine::new(PanelKind::Detail, GestureTuning::default());
    let m = metrics(400.0, 0.0);
    detail.touch_start(Vec2::new(200.0, 400.0), true, &m);
    assert_eq!(
        detail.touch_end(Vec2::new(203.0, 404.0), &m, true).as_slice(),
        &[Action::ClearFocus, Action::CollapsePanel]
    );

    let mut help = PanelSwipeMachine::new(PanelKind::Help, GestureTuning::default());
    help.touch_start(Vec2::new(200.0, 400.0), true, &m);
    assert_eq!(
        help.touch_end(Vec2::new(200.0, 401.0), &m, false).as_slice(),
        &[Action::DismissHelp]
    );
}

#[test]
fn help_panel_swipe_down_dismisses() {
    let mut help = PanelSwipeMachine::new(PanelKind::Help, GestureTuning::default());
    let m = metrics(400.0, 0.0);
    help.touch_start(Vec2::new(200.0, 400.0), false, &m);
    assert_eq!(
        help.touch_end(Vec2::new(260.0, 460.0), &m, false).as_slice(),
        &[Action::DismissHelp]
    );
    help.touch_start(Vec2::new(200.0, 400.0), false, &m);
    assert!(help.touch_end(Vec2::new(200.0, 440.0), &m, false).is_empty());
}

#[test]
fn help_panel_grabs_only_on_the_bar() {
    assert!(starts_grab(PanelKind::Help, true, 300.0, Some(120.0)));
    assert!(!starts_grab(PanelKind::Help, false, 100.0, Some(120.0)));
    assert!(!starts_grab(PanelKind::Help, false, 100.0, None));
}

#[test]
fn detail_panel_grabs_down_to_the_bar_bottom() {
    assert!(starts_grab(PanelKind::Detail, true, 300.0, Some(120.0)));
    assert!(starts_grab(PanelKind::Detail, false, 120.0, Some(120.0)));
    assert!(!starts_grab(PanelKind::Detail, false, 125.0, Some(120.0)));
    assert!(!starts_grab(PanelKind::Detail, false, 100.0, None));
}
