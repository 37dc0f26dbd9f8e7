//! RGBA color with human-editable string serialization.
//!
//! Theme files store colors as CSS-style `rgb(r, g, b)` or
//! `rgba(r, g, b, a)` strings so users can edit them by hand. Parsing is
//! forgiving: an unreadable string logs a warning and yields opaque
//! black rather than failing the whole document load.

use crate::layer::Layer;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// Resolves the drawing color for a layer.
///
/// Implemented by color theme stores and consumed by renderers and the
/// plot exporter. Lookups must be total: every layer resolves to some
/// color.
pub trait LayerColors {
    fn layer_color(&self, layer: Layer) -> Color;
}

/// An RGBA color. Channels are 8-bit, alpha is `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parse `rgb(..)` / `rgba(..)` notation. Returns `None` for
    /// anything unrecognized; callers decide the fallback.
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim();
        let (body, has_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest.strip_suffix(')')?, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest.strip_suffix(')')?, false)
        } else {
            return None;
        };

        let mut parts = body.split(',').map(str::trim);
        let r: u8 = parts.next()?.parse().ok()?;
        let g: u8 = parts.next()?.parse().ok()?;
        let b: u8 = parts.next()?.parse().ok()?;
        let a: f64 = if has_alpha {
            parts.next()?.parse().ok()?
        } else {
            1.0
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Color::rgba(r, g, b, a.clamp(0.0, 1.0)))
    }

    /// Parse with a warning-and-black fallback, for settings loads that
    /// must not fail on one bad value.
    pub fn parse_or_black(s: &str) -> Color {
        Color::parse(s).unwrap_or_else(|| {
            warn!("Unrecognized color \"{s}\", using black");
            Color::BLACK
        })
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if (self.a - 1.0).abs() < f64::EPSILON {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {:.4})", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).ok_or_else(|| D::Error::custom(format!("invalid color \"{s}\"")))
    }
}
