//! Stroke definitions for box outlines.
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |
//!
//! Use [`apply_stroke!`](crate::apply_stroke!) to set all stroke attributes on an SVG element:
//!
//! ```
//! use healthvital_core::color::Color;
//! use healthvital_core::draw::StrokeDefinition;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("white").unwrap(), 3.0);
//! let rect = healthvital_core::apply_stroke!(svg_element::Rectangle::new(), &stroke);
//! assert!(rect.to_string().contains("stroke-width=\"3\""));
//! ```

use crate::color::Color;

/// Outline color and width for a drawable.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width in pixels.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns a copy of this stroke with the color's alpha replaced.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
            width: self.width,
        }
    }
}

impl Default for StrokeDefinition {
    /// Black, 1px.
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Applies the stroke attributes of a [`StrokeDefinition`] to an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        $element
            .set("stroke", stroke.color().to_svg_hex())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", stroke.width())
    }};
}
