//! Color handling for bubble rendering
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and the default palette for the four bubble classes.

use std::{fmt, str::FromStr};

use color::DynamicColor;

use crate::word::BubbleColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#ff0000",
    /// "rgb(255, 0, 0)" or "red".
    ///
    /// # Examples
    ///
    /// ```
    /// use lexibubble_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha value, between 0.0
    /// (fully transparent) and 1.0 (fully opaque).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Default fill for a bubble class.
    pub fn for_bubble(bubble: BubbleColor) -> Self {
        let css = match bubble {
            BubbleColor::Yellow => "#facc15",
            BubbleColor::Orange => "#f97316",
            BubbleColor::Red => "#ef4444",
            BubbleColor::Dark => "#1f2937",
        };
        Self::new(css).expect("palette colors are valid CSS colors")
    }

    /// Default fill for the center bubble.
    pub fn center() -> Self {
        Self::new("#6366f1").expect("'#6366f1' is a valid CSS color")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}
