//! Accent colors for rendered views

use serde::{Deserialize, Serialize};
use std::fmt;

/// 24-bit RGB color, always within `0..=0xFFFFFF`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Color(u32);

impl Color {
    /// Largest representable color (`#ffffff`)
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Default accent for regular views (`#0099ff`)
    pub const DEFAULT_ACCENT: Self = Self(0x0099FF);

    /// Default accent for error views (`#ff0000`)
    pub const DEFAULT_ERROR: Self = Self(0xFF0000);

    /// Build a color from a raw integer, rejecting values above [`Color::MAX`]
    pub const fn new(value: u32) -> Option<Self> {
        if value > Self::MAX {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Parse `"#RRGGBB"` (the leading `#` is optional)
    ///
    /// Returns `None` for anything that is not exactly six hex digits.
    pub fn parse(input: &str) -> Option<Self> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        u32::from_str_radix(hex, 16).ok().map(Self)
    }

    /// Parse an optional hex string, falling back when it is absent or malformed
    ///
    /// # Example
    ///
    /// ```
    /// use stockcard_core::Color;
    ///
    /// let color = Color::parse_or(Some("not-a-color"), Color::DEFAULT_ACCENT);
    /// assert_eq!(color, Color::DEFAULT_ACCENT);
    ///
    /// let color = Color::parse_or(Some("#00ff00"), Color::DEFAULT_ACCENT);
    /// assert_eq!(color.value(), 0x00ff00);
    /// ```
    pub fn parse_or(input: Option<&str>, fallback: Self) -> Self {
        input.and_then(Self::parse).unwrap_or(fallback)
    }

    /// Raw integer value, as expected by most chat platforms
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT_ACCENT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl TryFrom<u32> for Color {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("color {value:#x} is out of range"))
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}
