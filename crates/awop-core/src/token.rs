//! One identity axis placed on the wheel.

use crate::band::Band;
use crate::content::AxisContent;
use std::f32::consts::TAU;

/// Index of a token in creation (slot) order.
pub type TokenId = usize;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    name: String,
    category: String,
    angle: f32,
    band: Band,
    category_visible: bool,
}

impl Token {
    /// Create a token in slot `slot_index` of `total_slots` equally spaced slots.
    /// New tokens start on the inner band with their category visible.
    pub fn new(name: &str, category: &str, slot_index: usize, total_slots: usize) -> Self {
        let angle = if total_slots == 0 {
            0.0
        } else {
            TAU * slot_index as f32 / total_slots as f32
        };
        Self {
            name: name.to_string(),
            category: category.to_string(),
            angle,
            band: Band::Inner,
            category_visible: true,
        }
    }

    pub fn from_content(content: &AxisContent, slot_index: usize, total_slots: usize) -> Self {
        Self::new(content.name, content.category, slot_index, total_slots)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Fixed slot angle in radians.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn band(&self) -> Band {
        self.band
    }

    /// Derived from the band; never stored.
    #[inline]
    pub fn score(&self) -> u32 {
        self.band.points()
    }

    #[inline]
    pub fn is_category_visible(&self) -> bool {
        self.category_visible
    }

    /// Returns true when the band actually changed.
    pub fn set_band(&mut self, band: Band) -> bool {
        let changed = self.band != band;
        self.band = band;
        changed
    }

    /// Returns true when visibility actually changed.
    pub fn set_category_visible(&mut self, visible: bool) -> bool {
        let changed = self.category_visible != visible;
        self.category_visible = visible;
        changed
    }
}
