//! Gesture state machines.
//!
//! Each input modality gets its own machine instance. Machines never touch the
//! session: they turn synthetic pointer/touch samples into [`Action`]s, so
//! they can be driven directly from tests.
//!
//! [`Action`]: crate::action::Action

mod drag;
mod panel;
mod pointer;
mod touch;

pub use drag::DragSession;
pub use panel::{analyze_swipe, starts_grab, PanelMetrics, PanelSwipeMachine, Swipe};
pub use pointer::{PointerMachine, PointerPhase, ReleaseRule};
pub use touch::{TouchMachine, TouchMode};

use crate::action::Action;
use crate::band::RingRadii;
use crate::camera::Camera;
use crate::constants::{
    RING_PADDING, ROTATION_SENSITIVITY, SWIPE_ASPECT_RATIO, SWIPE_MIN_DISTANCE, TAP_MAX_DISTANCE,
    TOUCH_ROTATION_SENSITIVITY, TOUCH_ZOOM_SENSITIVITY, ZOOM_SENSITIVITY,
};
use crate::geometry::Viewport;
use crate::token::TokenId;
use glam::Vec2;

/// Thresholds and sensitivities shared by the machines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTuning {
    pub tap_max_distance: f32,
    pub swipe_min_distance: f32,
    pub swipe_aspect_ratio: f32,
    /// Rotation velocity per pixel: `x` scales vertical motion (tilt), `y`
    /// scales horizontal motion (spin).
    pub mouse_rotation: Vec2,
    pub touch_rotation: Vec2,
    pub wheel_zoom_sensitivity: f32,
    pub pinch_zoom_sensitivity: f32,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            tap_max_distance: TAP_MAX_DISTANCE,
            swipe_min_distance: SWIPE_MIN_DISTANCE,
            swipe_aspect_ratio: SWIPE_ASPECT_RATIO,
            mouse_rotation: Vec2::splat(ROTATION_SENSITIVITY),
            // Horizontal touch motion spins the wheel the other way round.
            touch_rotation: Vec2::new(TOUCH_ROTATION_SENSITIVITY, -TOUCH_ROTATION_SENSITIVITY),
            wheel_zoom_sensitivity: ZOOM_SENSITIVITY,
            pinch_zoom_sensitivity: TOUCH_ZOOM_SENSITIVITY,
        }
    }
}

/// What a gesture needs to map pointer positions onto the wheel plane.
#[derive(Clone, Copy, Debug)]
pub struct GestureContext<'a> {
    pub camera: &'a Camera,
    pub viewport: Viewport,
    pub radii: RingRadii,
    pub ring_padding: f32,
}

impl<'a> GestureContext<'a> {
    pub fn new(camera: &'a Camera, viewport: Viewport, radii: RingRadii) -> Self {
        Self {
            camera,
            viewport,
            radii,
            ring_padding: RING_PADDING,
        }
    }
}

/// A token under the pointer, as reported by the renderer's hit test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenHit {
    pub token: TokenId,
    /// Current (rendered) distance of the token from the wheel centre.
    pub radius: f32,
}

/// Scroll-wheel zoom. Positive `delta_y` (scroll down) zooms out, matching
/// pinch-in.
#[inline]
pub fn wheel_zoom(delta_y: f32, tuning: &GestureTuning) -> Action {
    Action::Zoom(delta_y * tuning.wheel_zoom_sensitivity)
}
