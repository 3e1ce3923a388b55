//! Scene rotation with momentum and idle auto-rotation.

use crate::constants::{AUTO_ROTATE_AMOUNT, AUTO_ROTATE_THRESHOLD, INIT_ROT_X, ROTATION_DAMPING};
use glam::{Mat4, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneRotation {
    /// Euler x (tilt) in radians.
    pub x: f32,
    /// Euler z (spin) in radians.
    pub z: f32,
    /// `velocity.x` drives tilt, `velocity.y` drives spin.
    pub velocity: Vec2,
}

impl Default for SceneRotation {
    fn default() -> Self {
        Self {
            x: INIT_ROT_X,
            z: 0.0,
            velocity: Vec2::ZERO,
        }
    }
}

impl SceneRotation {
    pub fn set_velocity(&mut self, velocity: Vec2) {
        if velocity.is_finite() {
            self.velocity = velocity;
        }
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.velocity.x.abs() < AUTO_ROTATE_THRESHOLD
            && self.velocity.y.abs() < AUTO_ROTATE_THRESHOLD
    }

    /// Advance one animation frame.
    ///
    /// Velocity decays every frame. Auto-rotation only applies while no gesture
    /// is active, nothing is focused and momentum has died down.
    pub fn tick(&mut self, gesture_active: bool, focused: bool) {
        self.z -= self.velocity.y;
        self.x += self.velocity.x;
        self.velocity *= ROTATION_DAMPING;

        if !gesture_active && !focused && self.is_settled() {
            self.z += AUTO_ROTATE_AMOUNT;
        }
    }

    /// Local wheel → world transform (Euler XYZ with no y rotation), plus a
    /// vertical scene offset.
    pub fn model_matrix(&self, offset_y: f32) -> Mat4 {
        Mat4::from_translation(glam::Vec3::new(0.0, offset_y, 0.0))
            * Mat4::from_rotation_x(self.x)
            * Mat4::from_rotation_z(self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn momentum_decays_geometrically() {
        let mut r = SceneRotation::default();
        r.set_velocity(Vec2::new(0.1, 0.2));
        r.tick(true, false);
        assert!((r.velocity.x - 0.095).abs() < 1e-6);
        assert!((r.velocity.y - 0.19).abs() < 1e-6);
    }

    #[test]
    fn auto_rotation_only_when_idle() {
        let mut r = SceneRotation::default();
        r.tick(false, false);
        assert!((r.z - AUTO_ROTATE_AMOUNT).abs() < 1e-7);

        let z = r.z;
        r.tick(true, false);
        assert_eq!(r.z, z);
        r.tick(false, true);
        assert_eq!(r.z, z);

        r.set_velocity(Vec2::new(0.0, 0.01));
        r.tick(false, false);
        assert!(r.z < z, "momentum spin without auto-rotation");
    }
}
