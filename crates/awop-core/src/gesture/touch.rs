use super::{GestureContext, GestureTuning, PointerMachine, TokenHit};
use crate::action::{Action, Actions};
use crate::token::TokenId;
use glam::Vec2;
use smallvec::smallvec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchMode {
    Idle,
    /// One finger, delegated to the single-pointer machine.
    Single,
    /// Two or more fingers; `last_distance` is the previous frame's spread.
    Pinch { last_distance: f32 },
    /// A pinch dropped to one finger. Ignored until every finger lifts, and
    /// never reported as a tap.
    PinchTail,
}

/// Wheel-canvas touch handling: one-finger drag/rotate/tap plus pinch zoom.
#[derive(Clone, Debug)]
pub struct TouchMachine {
    single: PointerMachine,
    mode: TouchMode,
    pinch_sensitivity: f32,
}

impl TouchMachine {
    pub fn new(tuning: &GestureTuning) -> Self {
        Self {
            single: PointerMachine::touch(tuning),
            mode: TouchMode::Idle,
            pinch_sensitivity: tuning.pinch_zoom_sensitivity,
        }
    }

    #[inline]
    pub fn mode(&self) -> TouchMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.mode, TouchMode::Idle)
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self.mode, TouchMode::Single) && self.single.is_rotating()
    }

    pub fn dragged_token(&self) -> Option<TokenId> {
        match self.mode {
            TouchMode::Single => self.single.dragged_token(),
            _ => None,
        }
    }

    /// `touches` are every finger currently down (including the new one).
    pub fn start(
        &mut self,
        touches: &[Vec2],
        hit: Option<TokenHit>,
        ctx: &GestureContext<'_>,
    ) -> Actions {
        match touches {
            [] => Actions::new(),
            [only] => match self.mode {
                TouchMode::Idle | TouchMode::Single => {
                    self.mode = TouchMode::Single;
                    self.single.press(*only, hit, ctx)
                }
                TouchMode::Pinch { .. } | TouchMode::PinchTail => Actions::new(),
            },
            [a, b, ..] => self.enter_pinch(*a, *b),
        }
    }

    pub fn move_to(&mut self, touches: &[Vec2], ctx: &GestureContext<'_>) -> Actions {
        match touches {
            [] => Actions::new(),
            [only] => match self.mode {
                TouchMode::Single => self.single.move_to(*only, ctx),
                TouchMode::Pinch { .. } => {
                    self.mode = TouchMode::PinchTail;
                    Actions::new()
                }
                TouchMode::Idle | TouchMode::PinchTail => Actions::new(),
            },
            [a, b, ..] => {
                let TouchMode::Pinch { last_distance } = self.mode else {
                    return self.enter_pinch(*a, *b);
                };
                let distance = a.distance(*b);
                self.mode = TouchMode::Pinch {
                    last_distance: distance,
                };
                if last_distance > 0.0 {
                    // Fingers closing (distance shrinking) moves the camera away.
                    let delta = last_distance - distance;
                    smallvec![Action::Zoom(delta * self.pinch_sensitivity)]
                } else {
                    Actions::new()
                }
            }
        }
    }

    /// `remaining` are the fingers still down; `lifted` is where the finger
    /// that ended this event left the screen, when known.
    pub fn end(
        &mut self,
        remaining: &[Vec2],
        lifted: Option<Vec2>,
        ctx: &GestureContext<'_>,
    ) -> Actions {
        match remaining {
            [] => {
                let mode = std::mem::replace(&mut self.mode, TouchMode::Idle);
                match mode {
                    TouchMode::Single => {
                        let pos = lifted.unwrap_or_else(|| self.single.last_position());
                        self.single.release(pos, ctx)
                    }
                    _ => Actions::new(),
                }
            }
            [_] => {
                if let TouchMode::Pinch { .. } = self.mode {
                    self.mode = TouchMode::PinchTail;
                }
                Actions::new()
            }
            [a, b, ..] => {
                if let TouchMode::Pinch { .. } = self.mode {
                    self.mode = TouchMode::Pinch {
                        last_distance: a.distance(*b),
                    };
                }
                Actions::new()
            }
        }
    }

    /// `touchcancel`: drop everything without tap or drop semantics.
    pub fn cancel(&mut self) -> Actions {
        self.mode = TouchMode::Idle;
        self.single.cancel()
    }

    fn enter_pinch(&mut self, a: Vec2, b: Vec2) -> Actions {
        let out = self.single.cancel();
        if !matches!(self.mode, TouchMode::Pinch { .. }) {
            log::debug!("[touch] pinch start");
        }
        self.mode = TouchMode::Pinch {
            last_distance: a.distance(b),
        };
        out
    }
}
