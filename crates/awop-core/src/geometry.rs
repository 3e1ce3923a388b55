//! Pointer → world-plane transforms. Pure and cheap enough for every move event.

use crate::camera::Camera;
use crate::constants::PROJECTION_Z;
use glam::{Vec2, Vec3};

/// Below this |dir.z| the view ray is treated as parallel to the wheel plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Drawing surface size in the same units as pointer coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// Screen pixels to normalized device coordinates. Screen-down maps to NDC-down.
#[inline]
pub fn screen_to_normalized(pointer: Vec2, viewport: Viewport) -> Vec2 {
    let w = viewport.width.max(1.0);
    let h = viewport.height.max(1.0);
    Vec2::new((pointer.x / w) * 2.0 - 1.0, -(pointer.y / h) * 2.0 + 1.0)
}

/// Inverse of [`screen_to_normalized`].
#[inline]
pub fn normalized_to_screen(ndc: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.width,
        (1.0 - ndc.y) * 0.5 * viewport.height,
    )
}

/// Intersect the view ray through `ndc` with the z = 0 plane.
///
/// Returns `None` when the ray is parallel to the plane or the unprojection
/// degenerates; callers skip the update for that event.
pub fn normalized_to_world_plane(ndc: Vec2, camera: &Camera) -> Option<Vec2> {
    let p = camera.unproject(Vec3::new(ndc.x, ndc.y, PROJECTION_Z))?;
    let dir = (p - camera.eye).normalize_or_zero();
    if dir.z.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = -camera.eye.z / dir.z;
    let hit = camera.eye + dir * t;
    hit.is_finite().then(|| hit.truncate())
}

/// Convenience: screen pixels straight onto the wheel plane.
#[inline]
pub fn screen_to_world_plane(pointer: Vec2, viewport: Viewport, camera: &Camera) -> Option<Vec2> {
    normalized_to_world_plane(screen_to_normalized(pointer, viewport), camera)
}

#[inline]
pub fn radius_of(p: Vec2) -> f32 {
    (p.x * p.x + p.y * p.y).sqrt()
}

#[inline]
pub fn point_on_circle(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(angle.cos() * radius, angle.sin() * radius)
}

/// Ray/sphere hit distance along `ray_dir` (normalized), or `None` on a miss.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
