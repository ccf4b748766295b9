//! Filled, outlined rectangles.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Style shared by every rectangle of one kind (all panels, all service boxes).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectangleDefinition {
    fill_color: Option<Color>,
    stroke: StrokeDefinition,
}

impl RectangleDefinition {
    /// Create a new rectangle definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill color. `None` renders an unfilled rectangle.
    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    pub fn set_stroke(&mut self, stroke: StrokeDefinition) {
        self.stroke = stroke;
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

/// A sized rectangle ready to be placed.
#[derive(Debug, Clone)]
pub struct Rectangle<'a> {
    definition: &'a RectangleDefinition,
    size: Size,
    layer: RenderLayer,
}

impl<'a> Rectangle<'a> {
    /// Creates a rectangle on the [`RenderLayer::Shape`] layer.
    pub fn new(definition: &'a RectangleDefinition, size: Size) -> Self {
        Self {
            definition,
            size,
            layer: RenderLayer::Shape,
        }
    }

    /// Moves the rectangle to another render layer.
    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn definition(&self) -> &RectangleDefinition {
        self.definition
    }
}

impl Drawable for Rectangle<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        // position is the center of the rectangle
        let bounds = position.to_bounds(self.size);

        let mut rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", self.size.width())
            .set("height", self.size.height());
        rect = apply_stroke!(rect, self.definition.stroke());

        rect = match self.definition.fill_color() {
            Some(fill_color) => rect
                .set("fill", fill_color.to_svg_hex())
                .set("fill-opacity", fill_color.alpha()),
            None => rect.set("fill", "none"),
        };

        let mut output = LayeredOutput::new();
        output.add_to_layer(self.layer, Box::new(rect));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(output: LayeredOutput) -> String {
        output
            .render()
            .into_iter()
            .fold(svg::Document::new(), |doc, node| doc.add(node))
            .to_string()
    }

    #[test]
    fn test_rectangle_render_centered() {
        let def = RectangleDefinition::new();
        let rect = Rectangle::new(&def, Size::new(96.0, 30.0));
        let svg = render(rect.render_to_layers(Point::new(100.0, 100.0)));

        assert!(svg.contains("x=\"52\""));
        assert!(svg.contains("y=\"85\""));
        assert!(svg.contains("width=\"96\""));
        assert!(svg.contains("height=\"30\""));
        assert!(svg.contains("fill=\"none\""));
        assert!(!svg.contains("rx="));
        assert!(svg.contains("data-layer=\"shape\""));
    }

    #[test]
    fn test_rectangle_fill_and_layer() {
        let mut def = RectangleDefinition::new();
        def.set_fill_color(Some(Color::new("#FF6B6B").unwrap().with_alpha(0.5)));
        def.set_stroke(StrokeDefinition::new(Color::new("#FF6B6B").unwrap(), 2.0));

        let rect = Rectangle::new(&def, Size::new(10.0, 10.0)).with_layer(RenderLayer::Background);
        let svg = render(rect.render_to_layers(Point::default()));

        assert!(svg.contains("fill=\"#ff6b6b\""));
        assert!(svg.contains("fill-opacity=\"0.5\""));
        assert!(svg.contains("stroke-width=\"2\""));
        assert!(svg.contains("data-layer=\"background\""));
    }

    #[test]
    fn test_rectangle_size() {
        let def = RectangleDefinition::new();
        let rect = Rectangle::new(&def, Size::new(3.0, 4.0));
        assert_eq!(rect.size(), Size::new(3.0, 4.0));
        assert_eq!(rect.definition(), &def);
    }
}
