//! Drawable Components for Diagram Rendering
//!
//! All drawable components implement the [`Drawable`] trait, which provides a
//! consistent interface for rendering to layered SVG output and calculating
//! size.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are ordered during
//! final SVG generation so that layer panels always sit below service boxes
//! and all text sits on top.
mod labeled_box;
mod layer;
mod positioned;
mod rectangle;
mod stroke;
mod text;

pub use labeled_box::LabeledBox;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use positioned::PositionedDrawable;
pub use rectangle::{Rectangle, RectangleDefinition};
pub use stroke::StrokeDefinition;
pub use text::{Text, TextDefinition};

use crate::geometry::{Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable centered on `position`.
    ///
    /// Simple drawables emit to a single layer, while composite drawables can
    /// emit different elements to different layers for proper z-ordering.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
