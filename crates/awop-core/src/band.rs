//! Concentric placement bands and the radius → band classifier.

use crate::constants::{RING_RADIUS_INNER, RING_RADIUS_MIDDLE, RING_RADIUS_OUTER};
use crate::error::UnknownBand;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three rings a token can sit on. Inner is the most privileged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    #[default]
    Inner,
    Middle,
    Outer,
}

impl Band {
    /// Display order used by the detail panel (least privileged first).
    pub const OUTWARD_IN: [Band; 3] = [Band::Outer, Band::Middle, Band::Inner];

    /// Points contributed to the aggregate score.
    #[inline]
    pub fn points(self) -> u32 {
        match self {
            Band::Inner => 3,
            Band::Middle => 2,
            Band::Outer => 1,
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Band::Inner => "inner",
            Band::Middle => "middle",
            Band::Outer => "outer",
        }
    }

    /// Single character used in the URL hash.
    #[inline]
    pub fn hash_char(self) -> char {
        match self {
            Band::Inner => 'i',
            Band::Middle => 'm',
            Band::Outer => 'o',
        }
    }

    #[inline]
    pub fn from_hash_char(c: char) -> Option<Band> {
        match c {
            'i' => Some(Band::Inner),
            'm' => Some(Band::Middle),
            'o' => Some(Band::Outer),
            _ => None,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Band {
    type Err = UnknownBand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inner" => Ok(Band::Inner),
            "middle" => Ok(Band::Middle),
            "outer" => Ok(Band::Outer),
            other => Err(UnknownBand(other.to_string())),
        }
    }
}

/// Radii of the three rings; must satisfy `inner < middle < outer`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingRadii {
    pub inner: f32,
    pub middle: f32,
    pub outer: f32,
}

impl Default for RingRadii {
    fn default() -> Self {
        Self {
            inner: RING_RADIUS_INNER,
            middle: RING_RADIUS_MIDDLE,
            outer: RING_RADIUS_OUTER,
        }
    }
}

impl RingRadii {
    #[inline]
    pub fn radius(&self, band: Band) -> f32 {
        match band {
            Band::Inner => self.inner,
            Band::Middle => self.middle,
            Band::Outer => self.outer,
        }
    }

    /// Boundary between the inner and middle bands.
    #[inline]
    pub fn inner_threshold(&self) -> f32 {
        (self.inner + self.middle) / 2.0
    }

    /// Boundary between the middle and outer bands.
    #[inline]
    pub fn outer_threshold(&self) -> f32 {
        (self.middle + self.outer) / 2.0
    }

    /// Radius clamp applied to a token while it is being dragged.
    #[inline]
    pub fn drag_limits(&self, padding: f32) -> (f32, f32) {
        (self.inner - padding, self.outer + padding)
    }
}

/// Map a radial distance to a band.
///
/// Both comparisons are strict, so a radius exactly on a midpoint stays in the
/// lower (more privileged) band.
#[inline]
pub fn classify_band(radius: f32, radii: &RingRadii) -> Band {
    if radius > radii.inner_threshold() {
        if radius > radii.outer_threshold() {
            return Band::Outer;
        }
        return Band::Middle;
    }
    Band::Inner
}
