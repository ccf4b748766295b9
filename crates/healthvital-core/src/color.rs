//! Color handling for HealthVital diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Layer colors arrive as hex strings and are emitted
//! into SVG as normalized `#rrggbb` values, with transparency carried
//! separately through `fill-opacity`/`stroke-opacity`.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_svg_hex().hash(state);
        self.alpha().to_bits().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#FF6B6B", "rgb(255, 0, 0)", "white", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use healthvital_core::color::Color;
    ///
    /// let coral = Color::new("#FF6B6B").unwrap();
    /// let white = Color::new("white").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates an opaque sRGB color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: DynamicColor::from_alpha_color(AlphaColor::<Srgb>::from_rgb8(r, g, b)),
        }
    }

    /// Returns the opaque sRGB value of this color as a lowercase `#rrggbb` string.
    ///
    /// The alpha channel is dropped; callers pair this with [`Color::alpha`]
    /// on the matching `*-opacity` attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use healthvital_core::color::Color;
    ///
    /// let color = Color::new("#4ECDC4").unwrap();
    /// assert_eq!(color.to_svg_hex(), "#4ecdc4");
    /// ```
    pub fn to_svg_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Arguments
    ///
    /// * `alpha` - The alpha value to set, between 0.0 (fully transparent)
    ///   and 1.0 (fully opaque)
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb8(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_svg_hex())
    }
}
