//! SVG rendering of a [`DiagramLayout`].
//!
//! Layout coordinates are diagram units with Y growing upward. The renderer
//! maps them to pixels with `unit_size` pixels per unit, flips the Y axis and
//! surrounds the plot with a fixed margin. The figure title sits centered in
//! the top margin.

use log::{debug, trace};
use svg::Document;

use healthvital_core::{
    color::Color,
    draw::{
        Drawable, LabeledBox, LayeredOutput, PositionedDrawable, Rectangle, RectangleDefinition,
        RenderLayer, StrokeDefinition, Text, TextDefinition,
    },
    geometry::{Bounds, Insets, Point, Size},
};

use super::Error;
use crate::{
    config::StyleConfig,
    layout::{DiagramLayout, LayerLayout},
};

/// Panel outline width in pixels.
const PANEL_STROKE_WIDTH: f32 = 2.0;
/// Service box outline width in pixels.
const SERVICE_STROKE_WIDTH: f32 = 3.0;
/// Horizontal room kept free on each side of a service label.
const LABEL_PADDING: f32 = 4.0;

/// Builder for [`Svg`] renderers.
#[derive(Debug, Clone)]
pub struct SvgBuilder {
    style: StyleConfig,
    unit_size: f32,
    margin: Insets,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Pixels per diagram unit.
    pub fn with_unit_size(mut self, unit_size: f32) -> Self {
        self.unit_size = unit_size;
        self
    }

    /// Space around the plot area, in pixels.
    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    /// Resolves colors and text styles.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the configured background color is invalid.
    pub fn build(self) -> Result<Svg, Error> {
        let background = self
            .style
            .background_color()
            .map_err(Error::Render)?
            .unwrap_or_else(white);

        let mut figure_title = TextDefinition::new();
        figure_title.set_font_family(self.style.font_family());
        figure_title.set_font_size(self.style.title_font_size());
        figure_title.set_color(Some(Color::default()));

        let mut layer_title = figure_title.clone();
        layer_title.set_font_size(self.style.layer_title_font_size());
        layer_title.set_bold(true);

        let mut label = layer_title.clone();
        label.set_font_size(self.style.label_font_size());
        label.set_color(Some(white()));

        Ok(Svg {
            style: self.style,
            unit_size: self.unit_size,
            margin: self.margin,
            background,
            figure_title,
            layer_title,
            label,
        })
    }
}

impl Default for SvgBuilder {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            unit_size: 60.0,
            margin: Insets::new(100.0, 80.0, 80.0, 80.0),
        }
    }
}

fn white() -> Color {
    Color::from_rgb8(255, 255, 255)
}

/// Renders [`DiagramLayout`]s to SVG documents.
#[derive(Debug, Clone)]
pub struct Svg {
    style: StyleConfig,
    unit_size: f32,
    margin: Insets,
    background: Color,
    figure_title: TextDefinition,
    layer_title: TextDefinition,
    label: TextDefinition,
}

impl Svg {
    /// Pixel size of the document for `layout`, rounded to whole pixels.
    pub fn canvas_size(&self, layout: &DiagramLayout) -> Size {
        let size = layout
            .viewport()
            .to_size()
            .scale(self.unit_size)
            .add_padding(self.margin);
        Size::new(size.width().round(), size.height().round())
    }

    /// Renders the complete layout to an SVG document.
    pub fn render(&self, layout: &DiagramLayout) -> Document {
        let canvas = self.canvas_size(layout);
        let mut output = LayeredOutput::new();

        let mut background = RectangleDefinition::new();
        background.set_fill_color(Some(self.background));
        background.set_stroke(StrokeDefinition::new(self.background, 0.0));
        output.merge(
            Rectangle::new(&background, canvas)
                .with_layer(RenderLayer::Background)
                .render_to_layers(Point::new(canvas.width() / 2.0, canvas.height() / 2.0)),
        );

        if !self.style.title().is_empty() {
            let title = Text::new(&self.figure_title, self.style.title());
            output.merge(
                title.render_to_layers(Point::new(canvas.width() / 2.0, self.margin.top() / 2.0)),
            );
        }

        for layer_layout in layout.layers() {
            output.merge(self.render_layer(layout.viewport(), layer_layout));
        }

        debug!(
            width = canvas.width(),
            height = canvas.height(),
            layers = layout.layers().len();
            "SVG document rendered"
        );

        output.render().into_iter().fold(
            Document::new()
                .set(
                    "viewBox",
                    format!("0 0 {} {}", canvas.width(), canvas.height()),
                )
                .set("width", canvas.width())
                .set("height", canvas.height()),
            |doc, node| doc.add(node),
        )
    }

    fn render_layer(&self, viewport: Bounds, layer_layout: &LayerLayout) -> LayeredOutput {
        let layer = layer_layout.layer();
        let color = layer.color();
        let mut output = LayeredOutput::new();

        let mut panel = RectangleDefinition::new();
        panel.set_fill_color(Some(color.with_alpha(self.style.panel_opacity())));
        panel.set_stroke(
            StrokeDefinition::new(color, PANEL_STROKE_WIDTH).with_alpha(self.style.panel_opacity()),
        );
        let panel_bounds = self.to_canvas_bounds(viewport, layer_layout.panel());
        output.merge(
            Rectangle::new(&panel, panel_bounds.to_size()).render_to_layers(panel_bounds.center()),
        );

        let title = Text::new(&self.layer_title, layer.name());
        let title_top = self.to_canvas(viewport, layer_layout.title_top());
        output.merge(title.render_to_layers(Point::new(
            title_top.x(),
            title_top.y() + title.calculate_size().height() / 2.0,
        )));

        let mut service = RectangleDefinition::new();
        service.set_fill_color(Some(color.with_alpha(self.style.service_opacity())));
        service.set_stroke(
            StrokeDefinition::new(white(), SERVICE_STROKE_WIDTH)
                .with_alpha(self.style.service_opacity()),
        );

        for slot in layer_layout.services() {
            let bounds = self.to_canvas_bounds(viewport, slot.bounds());
            let label = self.label.shrink_to_fit(
                slot.name(),
                bounds.width() - 2.0 * LABEL_PADDING,
                self.style.min_label_font_size(),
            );
            trace!(
                service = slot.name(),
                font_size = label.font_size();
                "Placing service box"
            );

            let labeled = LabeledBox::new(
                Rectangle::new(&service, bounds.to_size()),
                Text::new(&label, slot.name()),
            );
            output.merge(
                PositionedDrawable::new(labeled)
                    .with_position(bounds.center())
                    .render_to_layers(),
            );
        }

        output
    }

    /// Maps a point in diagram units to pixels.
    fn to_canvas(&self, viewport: Bounds, point: Point) -> Point {
        Point::new(
            self.margin.left() + (point.x() - viewport.min_x()) * self.unit_size,
            self.margin.top() + (viewport.max_y() - point.y()) * self.unit_size,
        )
    }

    fn to_canvas_bounds(&self, viewport: Bounds, bounds: Bounds) -> Bounds {
        let a = self.to_canvas(viewport, Point::new(bounds.min_x(), bounds.min_y()));
        let b = self.to_canvas(viewport, Point::new(bounds.max_x(), bounds.max_y()));
        Bounds::from_corners(a.x(), a.y(), b.x(), b.y())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use healthvital_core::architecture::Layer;

    use super::*;
    use crate::{config::LayoutConfig, layout::LayoutEngine};

    fn sample_layers() -> Vec<Layer> {
        vec![
            Layer::new("Presentation", ["AWS Amplify", "CloudFront"], "#FF6B6B").unwrap(),
            Layer::new("Monitoring", ["CloudWatch"], "#54A0FF").unwrap(),
        ]
    }

    #[test]
    fn test_canvas_size_includes_margins() {
        let config = LayoutConfig::default();
        let layers = sample_layers();
        let layout = LayoutEngine::new(&config).layout(&layers);
        let svg = SvgBuilder::new().build().unwrap();

        // Viewport is 16 units wide and 2 + 3.0 + 1 units tall
        let size = svg.canvas_size(&layout);
        assert_approx_eq!(f32, size.width(), 16.0 * 60.0 + 160.0, epsilon = 0.01);
        assert_approx_eq!(f32, size.height(), 6.0 * 60.0 + 180.0, epsilon = 0.01);
    }

    #[test]
    fn test_to_canvas_flips_y() {
        let svg = SvgBuilder::new().build().unwrap();
        let viewport = Bounds::from_corners(-8.0, -2.0, 8.0, 4.0);

        let top_left = svg.to_canvas(viewport, Point::new(-8.0, 4.0));
        assert_approx_eq!(f32, top_left.x(), 80.0);
        assert_approx_eq!(f32, top_left.y(), 100.0);

        let origin = svg.to_canvas(viewport, Point::new(0.0, 0.0));
        assert_approx_eq!(f32, origin.x(), 80.0 + 8.0 * 60.0);
        assert_approx_eq!(f32, origin.y(), 100.0 + 4.0 * 60.0);
    }

    #[test]
    fn test_render_contains_layers_and_labels() {
        let config = LayoutConfig::default();
        let layers = sample_layers();
        let layout = LayoutEngine::new(&config).layout(&layers);
        let document = SvgBuilder::new().build().unwrap().render(&layout).to_string();

        for expected in [
            "HealthVital Serverless Architecture",
            "Presentation",
            "Monitoring",
            "AWS Amplify",
            "CloudWatch",
            "#ff6b6b",
            "#54a0ff",
            r#"data-layer="shape""#,
            r#"data-layer="text""#,
        ] {
            assert!(document.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_empty_title_is_omitted() {
        let style: StyleConfig = toml::from_str("title = \"\"").unwrap();
        let config = LayoutConfig::default();
        let layers = sample_layers();
        let layout = LayoutEngine::new(&config).layout(&layers);
        let document = SvgBuilder::new()
            .with_style(&style)
            .build()
            .unwrap()
            .render(&layout)
            .to_string();

        assert!(!document.contains("HealthVital Serverless Architecture"));
    }

    #[test]
    fn test_invalid_background_fails_build() {
        let style: StyleConfig = toml::from_str("background_color = \"not-a-color\"").unwrap();
        let err = SvgBuilder::new().with_style(&style).build().unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn test_shapes_stack_in_layer_order() {
        let config = LayoutConfig::default();
        let layers = sample_layers();
        let layout = LayoutEngine::new(&config).layout(&layers);
        let document = SvgBuilder::new().build().unwrap().render(&layout).to_string();

        // Every Presentation shape precedes the Monitoring panel
        let positions = |fill: &str| -> Vec<usize> {
            document
                .match_indices(&format!("fill=\"{fill}\""))
                .map(|(index, _)| index)
                .collect()
        };
        let presentation = positions("#ff6b6b");
        let monitoring = positions("#54a0ff");
        assert_eq!(presentation.len(), 3);
        assert_eq!(monitoring.len(), 2);
        assert!(presentation.iter().max() < monitoring.iter().min());
    }
}
