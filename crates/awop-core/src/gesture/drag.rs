use super::{GestureContext, TokenHit};
use crate::band::{classify_band, Band, RingRadii};
use crate::geometry::{radius_of, screen_to_world_plane};
use crate::token::TokenId;
use glam::Vec2;

/// A token being moved radially along its fixed slot angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub token: TokenId,
    /// Token radius minus the pointer's radius at grab time, so the token does
    /// not jump under the cursor.
    pub radius_offset: f32,
    /// Latest clamped radius.
    pub radius: f32,
}

impl DragSession {
    pub fn begin(hit: TokenHit, pointer: Vec2, ctx: &GestureContext<'_>) -> Self {
        let radius_offset = screen_to_world_plane(pointer, ctx.viewport, ctx.camera)
            .map(|click| hit.radius - radius_of(click))
            .unwrap_or(0.0);
        Self {
            token: hit.token,
            radius_offset,
            radius: hit.radius,
        }
    }

    /// Follow the pointer. `None` when no plane position is available this
    /// event; the previous radius is kept.
    pub fn update(&mut self, pointer: Vec2, ctx: &GestureContext<'_>) -> Option<f32> {
        let world = screen_to_world_plane(pointer, ctx.viewport, ctx.camera)?;
        let (lo, hi) = ctx.radii.drag_limits(ctx.ring_padding);
        self.radius = (radius_of(world) + self.radius_offset).clamp(lo, hi);
        Some(self.radius)
    }

    #[inline]
    pub fn band(&self, radii: &RingRadii) -> Band {
        classify_band(self.radius, radii)
    }
}
