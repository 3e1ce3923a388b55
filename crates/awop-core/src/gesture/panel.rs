use super::GestureTuning;
use crate::action::{Action, Actions, PanelKind};
use crate::constants::{
    CATEGORY_BAR_HEIGHT, MIN_HEIGHT_TOLERANCE, MIN_PANEL_HEIGHT_FRACTION, SCROLL_BOTTOM_TOLERANCE,
};
use glam::Vec2;
use smallvec::smallvec;

/// Dominant-axis classification of a finger displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Swipe {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Swipe {
    #[inline]
    pub fn is_significant(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// An axis counts when it exceeds `min_distance` and beats the other axis by
/// `aspect_ratio`. At most one of the two flags can be set.
pub fn analyze_swipe(delta: Vec2, min_distance: f32, aspect_ratio: f32) -> Swipe {
    let (ax, ay) = (delta.x.abs(), delta.y.abs());
    Swipe {
        horizontal: ax > min_distance && ax > ay * aspect_ratio,
        vertical: ay > min_distance && ay > ax * aspect_ratio,
    }
}

/// Layout readings of a mobile panel element, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelMetrics {
    pub offset_height: f32,
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
    pub viewport_height: f32,
}

impl PanelMetrics {
    #[inline]
    pub fn min_height(&self) -> f32 {
        self.viewport_height * MIN_PANEL_HEIGHT_FRACTION
    }

    #[inline]
    pub fn max_height(&self) -> f32 {
        (self.viewport_height - CATEGORY_BAR_HEIGHT).max(self.min_height())
    }

    pub fn at_min_height(&self) -> bool {
        self.offset_height <= self.min_height() + MIN_HEIGHT_TOLERANCE
    }

    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    pub fn at_bottom(&self) -> bool {
        self.scroll_height - self.scroll_top <= self.client_height + SCROLL_BOTTOM_TOLERANCE
    }

    pub fn clamp_height(&self, height: f32) -> f32 {
        height.clamp(self.min_height(), self.max_height())
    }
}

/// Whether a panel touch starts a grab-bar drag. Both panels grab when the
/// touch lands inside the bar element; the detail panel also grabs anywhere
/// at or above the bar's bottom edge.
pub fn starts_grab(kind: PanelKind, on_bar_element: bool, touch_y: f32, bar_bottom: Option<f32>) -> bool {
    match kind {
        PanelKind::Help => on_bar_element,
        PanelKind::Detail => on_bar_element || bar_bottom.is_some_and(|bottom| touch_y <= bottom),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct GrabDrag {
    start_y: f32,
    start_height: f32,
}

/// Swipe and grab-bar handling for one mobile panel.
#[derive(Clone, Debug)]
pub struct PanelSwipeMachine {
    kind: PanelKind,
    tuning: GestureTuning,
    start: Option<Vec2>,
    grab: Option<GrabDrag>,
}

impl PanelSwipeMachine {
    pub fn new(kind: PanelKind, tuning: GestureTuning) -> Self {
        Self {
            kind,
            tuning,
            start: None,
            grab: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> PanelKind {
        self.kind
    }

    #[inline]
    pub fn is_grabbing(&self) -> bool {
        self.grab.is_some()
    }

    pub fn touch_start(&mut self, pos: Vec2, on_grab_bar: bool, metrics: &PanelMetrics) {
        self.start = Some(pos);
        self.grab = on_grab_bar.then_some(GrabDrag {
            start_y: pos.y,
            start_height: metrics.offset_height,
        });
    }

    /// Only a grab-bar drag reacts to moves; dragging up grows the panel.
    pub fn touch_move(&mut self, pos: Vec2, metrics: &PanelMetrics) -> Actions {
        let Some(grab) = self.grab else {
            return Actions::new();
        };
        let height = metrics.clamp_height(grab.start_height + (grab.start_y - pos.y));
        smallvec![Action::ResizePanel {
            panel: self.kind,
            height,
        }]
    }

    /// `focused` is whether a token is shown; the detail panel ignores swipes
    /// when nothing is.
    pub fn touch_end(&mut self, pos: Vec2, metrics: &PanelMetrics, focused: bool) -> Actions {
        let Some(start) = self.start.take() else {
            return Actions::new();
        };
        if let Some(grab) = self.grab.take() {
            return if (pos.y - grab.start_y).abs() < self.tuning.tap_max_distance {
                log::debug!("[panel] grab bar tap dismisses {:?}", self.kind);
                self.dismiss()
            } else {
                Actions::new()
            };
        }

        let delta = pos - start;
        match self.kind {
            PanelKind::Detail => {
                if !focused {
                    return Actions::new();
                }
                let swipe = analyze_swipe(
                    delta,
                    self.tuning.swipe_min_distance,
                    self.tuning.swipe_aspect_ratio,
                );
                if swipe.horizontal {
                    // Swiping right reveals the previous token.
                    let step = if delta.x > 0.0 { -1 } else { 1 };
                    smallvec![Action::Navigate(step)]
                } else if swipe.vertical && delta.y > 0.0 && metrics.at_top() && metrics.at_min_height() {
                    self.dismiss()
                } else if swipe.vertical && delta.y < 0.0 && metrics.at_bottom() {
                    smallvec![Action::ExpandPanel]
                } else {
                    Actions::new()
                }
            }
            PanelKind::Help => {
                if delta.y > self.tuning.swipe_min_distance && metrics.at_top() && metrics.at_min_height() {
                    self.dismiss()
                } else {
                    Actions::new()
                }
            }
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.grab = None;
    }

    fn dismiss(&self) -> Actions {
        match self.kind {
            PanelKind::Detail => smallvec![Action::ClearFocus, Action::CollapsePanel],
            PanelKind::Help => smallvec![Action::DismissHelp],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_needs_dominant_axis() {
        let s = analyze_swipe(Vec2::new(80.0, 10.0), 50.0, 1.5);
        assert!(s.horizontal && !s.vertical);
        let s = analyze_swipe(Vec2::new(80.0, 60.0), 50.0, 1.5);
        assert!(!s.is_significant());
        let s = analyze_swipe(Vec2::new(0.0, -50.0), 50.0, 1.5);
        assert!(!s.is_significant());
    }

    #[test]
    fn max_height_never_below_min() {
        let m = PanelMetrics {
            viewport_height: 100.0,
            ..Default::default()
        };
        assert_eq!(m.max_height(), 50.0);
        assert_eq!(m.clamp_height(10.0), 50.0);
    }
}
