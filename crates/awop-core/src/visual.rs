//! Per-token render targets and the per-frame easing toward them.
//!
//! The core decides where a token should be and how it should look; the
//! renderer owns the current values and eases them with [`TokenVisual::step`].

use crate::constants::{
    ACTIVE_OPACITY, DEFAULT_SCALE, DESELECTED_OPACITY, DESELECTED_SCALE, DRAG_SCALE,
    FLOAT_AMPLITUDE, FLOAT_SPEED, GLOW_HIGHLIGHT_OPACITY, GLOW_OPACITY, HOVER_SCALE,
    SELECTED_OPACITY, SELECTED_SCALE,
};

/// How one token relates to the current interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenFlags {
    pub focused: bool,
    pub dragged: bool,
    pub hovered: bool,
    pub category_visible: bool,
    /// Something (anything) is focused or being dragged.
    pub interaction_locked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualTargets {
    pub radius: f32,
    /// When set the radius jumps to the target instead of easing (live drag).
    pub snap_radius: bool,
    pub scale: f32,
    pub opacity: f32,
    pub glow: f32,
}

impl VisualTargets {
    pub fn for_token(radius: f32, flags: TokenFlags) -> Self {
        let (mut scale, opacity, mut glow) = if flags.focused {
            (SELECTED_SCALE, SELECTED_OPACITY, GLOW_HIGHLIGHT_OPACITY)
        } else if flags.category_visible {
            (DEFAULT_SCALE, ACTIVE_OPACITY, GLOW_OPACITY)
        } else {
            (DESELECTED_SCALE, DESELECTED_OPACITY, GLOW_OPACITY)
        };
        if flags.dragged && !flags.focused {
            scale = DRAG_SCALE;
        }
        if flags.hovered && !flags.interaction_locked {
            scale = HOVER_SCALE;
            glow = GLOW_HIGHLIGHT_OPACITY;
        }
        Self {
            radius,
            snap_radius: flags.dragged,
            scale,
            opacity,
            glow,
        }
    }
}

/// Current on-screen state of a token as eased by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenVisual {
    pub radius: f32,
    pub z: f32,
    pub scale: f32,
    pub opacity: f32,
    pub glow: f32,
}

impl TokenVisual {
    pub fn at_rest(radius: f32) -> Self {
        Self {
            radius,
            z: 0.0,
            scale: DEFAULT_SCALE,
            opacity: ACTIVE_OPACITY,
            glow: GLOW_OPACITY,
        }
    }

    /// Ease toward `target` by `lerp`; float on z using the slot index as phase.
    pub fn step(&mut self, target: &VisualTargets, lerp: f32, time_ms: f64, index: usize) {
        if target.snap_radius {
            self.radius = target.radius;
        } else {
            self.radius += (target.radius - self.radius) * lerp;
        }
        self.scale += (target.scale - self.scale) * lerp;
        self.opacity += (target.opacity - self.opacity) * lerp;
        self.glow = target.glow;
        self.z = float_offset(time_ms, index);
    }
}

#[inline]
pub fn float_offset(time_ms: f64, index: usize) -> f32 {
    ((time_ms * FLOAT_SPEED as f64 + index as f64).sin() as f32) * FLOAT_AMPLITUDE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LERP;

    fn flags() -> TokenFlags {
        TokenFlags {
            category_visible: true,
            ..TokenFlags::default()
        }
    }

    #[test]
    fn hidden_category_shrinks_and_fades() {
        let t = VisualTargets::for_token(
            4.0,
            TokenFlags {
                category_visible: false,
                ..flags()
            },
        );
        assert_eq!(t.scale, DESELECTED_SCALE);
        assert_eq!(t.opacity, DESELECTED_OPACITY);
    }

    #[test]
    fn hover_is_ignored_while_something_is_focused() {
        let t = VisualTargets::for_token(
            4.0,
            TokenFlags {
                hovered: true,
                interaction_locked: true,
                ..flags()
            },
        );
        assert_eq!(t.scale, DEFAULT_SCALE);
        let t = VisualTargets::for_token(4.0, TokenFlags { hovered: true, ..flags() });
        assert_eq!(t.scale, HOVER_SCALE);
    }

    #[test]
    fn dragged_radius_snaps_others_ease() {
        let mut v = TokenVisual::at_rest(4.0);
        let dragged = VisualTargets::for_token(6.0, TokenFlags { dragged: true, ..flags() });
        v.step(&dragged, LERP, 0.0, 0);
        assert_eq!(v.radius, 6.0);
        let rest = VisualTargets::for_token(4.0, flags());
        v.step(&rest, LERP, 0.0, 0);
        assert!((v.radius - 5.8).abs() < 1e-5);
    }
}
