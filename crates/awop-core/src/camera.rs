//! Perspective camera shared by picking, dragging and the web renderer.
//!
//! The wheel camera always sits on the +Z axis looking at the origin; only its
//! distance (zoom) and aspect ratio change during a session.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_Z_LARGE, CAMERA_Z_MAX, CAMERA_Z_MEDIUM,
    CAMERA_Z_MIN, CAMERA_Z_SMALL, MEDIUM_VIEWPORT_MAX_WIDTH, SMALL_VIEWPORT_MAX_WIDTH,
};
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at `(0, 0, distance)` looking at the origin.
    pub fn on_z_axis(distance: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(f32::EPSILON),
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.eye.z
    }

    pub fn set_distance(&mut self, z: f32) {
        self.eye.z = z.clamp(CAMERA_Z_MIN, CAMERA_Z_MAX);
    }

    /// Move the camera along Z by `delta` (positive zooms out), clamped.
    pub fn zoom_by(&mut self, delta: f32) {
        if delta.is_finite() {
            self.set_distance(self.eye.z + delta);
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(f32::EPSILON);
    }

    /// NDC point (x, y in [-1, 1], z in [0, 1]) back to world space.
    pub fn unproject(&self, ndc: Vec3) -> Option<Vec3> {
        let inv = self.view_projection().inverse();
        let p = inv * Vec4::new(ndc.x, ndc.y, ndc.z, 1.0);
        if p.w.abs() <= f32::EPSILON || !p.is_finite() {
            return None;
        }
        Some(p.truncate() / p.w)
    }

    /// World point to NDC; `None` when behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// World-space ray through an NDC point: `(origin, direction)`.
    pub fn ray_through(&self, ndc_x: f32, ndc_y: f32) -> Option<(Vec3, Vec3)> {
        let far = self.unproject(Vec3::new(ndc_x, ndc_y, 1.0))?;
        let dir = (far - self.eye).normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }
        Some((self.eye, dir))
    }
}

/// Initial camera distance for a viewport width in CSS pixels.
pub fn optimal_distance(viewport_width: f32) -> f32 {
    if viewport_width <= SMALL_VIEWPORT_MAX_WIDTH {
        CAMERA_Z_SMALL
    } else if viewport_width <= MEDIUM_VIEWPORT_MAX_WIDTH {
        CAMERA_Z_MEDIUM
    } else {
        CAMERA_Z_LARGE
    }
}
