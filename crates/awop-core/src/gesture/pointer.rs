use super::{DragSession, GestureContext, GestureTuning, TokenHit};
use crate::action::{Action, Actions};
use crate::token::TokenId;
use glam::Vec2;
use smallvec::smallvec;

/// How a release decides between "tap/click" and "completed drag".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseRule {
    /// Mouse: a click is a press and release with no movement in between.
    NoDragRecorded,
    /// Touch: a tap is a release closer than this to the press point.
    TapDistance(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerPhase {
    Idle,
    RotatingScene { last: Vec2 },
    DraggingToken(DragSession),
}

/// Single-pointer machine shared by the mouse and one-finger touch.
///
/// ```text
/// Idle --press on token--> DraggingToken --release--> Idle
/// Idle --press elsewhere--> RotatingScene --release--> Idle
/// ```
#[derive(Clone, Debug)]
pub struct PointerMachine {
    rule: ReleaseRule,
    rotation_sensitivity: Vec2,
    phase: PointerPhase,
    press_origin: Vec2,
    last_position: Vec2,
    drag_recorded: bool,
}

impl PointerMachine {
    pub fn new(rule: ReleaseRule, rotation_sensitivity: Vec2) -> Self {
        Self {
            rule,
            rotation_sensitivity,
            phase: PointerPhase::Idle,
            press_origin: Vec2::ZERO,
            last_position: Vec2::ZERO,
            drag_recorded: false,
        }
    }

    pub fn mouse(tuning: &GestureTuning) -> Self {
        Self::new(ReleaseRule::NoDragRecorded, tuning.mouse_rotation)
    }

    pub fn touch(tuning: &GestureTuning) -> Self {
        Self::new(
            ReleaseRule::TapDistance(tuning.tap_max_distance),
            tuning.touch_rotation,
        )
    }

    #[inline]
    pub fn phase(&self) -> &PointerPhase {
        &self.phase
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, PointerPhase::Idle)
    }

    #[inline]
    pub fn is_rotating(&self) -> bool {
        matches!(self.phase, PointerPhase::RotatingScene { .. })
    }

    pub fn dragged_token(&self) -> Option<TokenId> {
        match self.phase {
            PointerPhase::DraggingToken(drag) => Some(drag.token),
            _ => None,
        }
    }

    #[inline]
    pub fn last_position(&self) -> Vec2 {
        self.last_position
    }

    pub fn press(&mut self, pos: Vec2, hit: Option<TokenHit>, ctx: &GestureContext<'_>) -> Actions {
        // A press without a matching release: drop the stale gesture first.
        let mut out = self.cancel();
        self.press_origin = pos;
        self.last_position = pos;
        self.drag_recorded = false;
        match hit {
            Some(hit) => {
                let drag = DragSession::begin(hit, pos, ctx);
                log::debug!("[pointer] begin drag on token {}", hit.token);
                self.phase = PointerPhase::DraggingToken(drag);
                out.push(Action::BeginTokenDrag(hit.token));
            }
            None => {
                self.phase = PointerPhase::RotatingScene { last: pos };
            }
        }
        out
    }

    pub fn move_to(&mut self, pos: Vec2, ctx: &GestureContext<'_>) -> Actions {
        self.last_position = pos;
        if pos != self.press_origin {
            self.drag_recorded = true;
        }
        match &mut self.phase {
            PointerPhase::Idle => Actions::new(),
            PointerPhase::RotatingScene { last } => {
                let delta = pos - *last;
                *last = pos;
                let velocity = Vec2::new(
                    delta.y * self.rotation_sensitivity.x,
                    delta.x * self.rotation_sensitivity.y,
                );
                smallvec![Action::SetRotationVelocity(velocity)]
            }
            PointerPhase::DraggingToken(drag) => match drag.update(pos, ctx) {
                Some(radius) => smallvec![Action::DragToken {
                    token: drag.token,
                    radius,
                }],
                None => Actions::new(),
            },
        }
    }

    pub fn release(&mut self, pos: Vec2, ctx: &GestureContext<'_>) -> Actions {
        self.last_position = pos;
        let tap = self.is_tap(pos);
        let phase = std::mem::replace(&mut self.phase, PointerPhase::Idle);
        match phase {
            PointerPhase::Idle => Actions::new(),
            PointerPhase::RotatingScene { .. } => {
                if tap {
                    smallvec![Action::DismissHelp, Action::ClearFocus]
                } else {
                    // Momentum keeps whatever the last move set.
                    Actions::new()
                }
            }
            PointerPhase::DraggingToken(drag) => {
                if tap {
                    smallvec![
                        Action::CancelTokenDrag(drag.token),
                        Action::ToggleFocus(drag.token)
                    ]
                } else {
                    let band = drag.band(&ctx.radii);
                    log::debug!("[pointer] drop token {} on {}", drag.token, band);
                    smallvec![Action::DropToken {
                        token: drag.token,
                        band,
                    }]
                }
            }
        }
    }

    /// Abort the current gesture without tap/drop semantics.
    pub fn cancel(&mut self) -> Actions {
        match std::mem::replace(&mut self.phase, PointerPhase::Idle) {
            PointerPhase::DraggingToken(drag) => smallvec![Action::CancelTokenDrag(drag.token)],
            _ => Actions::new(),
        }
    }

    fn is_tap(&self, pos: Vec2) -> bool {
        match self.rule {
            ReleaseRule::NoDragRecorded => !self.drag_recorded,
            ReleaseRule::TapDistance(max) => (pos - self.press_origin).length() < max,
        }
    }
}
