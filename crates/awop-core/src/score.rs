//! Aggregate privilege score and its display color.
//!
//! Scoring ignores category visibility; filtering is cosmetic only.

use crate::band::Band;
use crate::token::Token;
use std::fmt;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Per-channel linear interpolation, rounded to the nearest integer.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Reference colors for the lowest, middle and highest normalized score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScorePalette {
    pub low: Rgb,
    pub mid: Rgb,
    pub high: Rgb,
}

impl Default for ScorePalette {
    fn default() -> Self {
        Self {
            low: Rgb::new(239, 68, 68),
            mid: Rgb::new(234, 179, 8),
            high: Rgb::new(34, 197, 94),
        }
    }
}

impl ScorePalette {
    /// Build from theme strings, keeping the default for any that fail to parse.
    pub fn from_hex_or_default(low: &str, mid: &str, high: &str) -> Self {
        let d = Self::default();
        Self {
            low: Rgb::from_hex(low).unwrap_or(d.low),
            mid: Rgb::from_hex(mid).unwrap_or(d.mid),
            high: Rgb::from_hex(high).unwrap_or(d.high),
        }
    }

    /// Two-segment interpolation: low→mid over [0, 0.5], mid→high over (0.5, 1].
    pub fn color_for(&self, normalized: f32) -> Rgb {
        if normalized <= 0.5 {
            self.low.lerp(self.mid, normalized * 2.0)
        } else {
            self.mid.lerp(self.high, (normalized - 0.5) * 2.0)
        }
    }

    /// Ring color: the inner ring is drawn with the "high" color.
    pub fn ring_color(&self, band: Band) -> Rgb {
        match band {
            Band::Inner => self.high,
            Band::Middle => self.mid,
            Band::Outer => self.low,
        }
    }
}

/// Sum of every token's points.
pub fn compute_score(tokens: &[Token]) -> u32 {
    tokens.iter().map(Token::score).sum()
}

/// `(min, max)` attainable totals for `token_count` tokens.
#[inline]
pub fn score_bounds(token_count: usize) -> (u32, u32) {
    let n = token_count as u32;
    (n * Band::Outer.points(), n * Band::Inner.points())
}

/// Map a total onto [0, 1]; 0 when there are no tokens.
pub fn normalize(total: u32, token_count: usize) -> f32 {
    let (min, max) = score_bounds(token_count);
    if max == min {
        return 0.0;
    }
    ((total as f32 - min as f32) / (max - min) as f32).clamp(0.0, 1.0)
}

/// Everything the score widget shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreSummary {
    pub total: u32,
    pub normalized: f32,
    pub percent: f32,
    pub color: Rgb,
}

pub fn summarize(tokens: &[Token], palette: &ScorePalette) -> ScoreSummary {
    let total = compute_score(tokens);
    let normalized = normalize(total, tokens.len());
    ScoreSummary {
        total,
        normalized,
        percent: normalized * 100.0,
        color: palette.color_for(normalized),
    }
}
