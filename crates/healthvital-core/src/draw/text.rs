//! Text rendering definitions for diagram titles and labels.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! Text is measured with real font metrics through cosmic-text so labels can
//! be shrunk to fit inside their service boxes.
//!
//! # Quick Start
//!
//! ```
//! # use healthvital_core::draw::{TextDefinition, Text};
//! let mut style = TextDefinition::new();
//! style.set_font_size(12);
//! style.set_bold(true);
//!
//! let text = Text::new(&style, "API Gateway");
//! assert!(text.calculate_size().width() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Defines the visual style for text elements in diagrams.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `12` |
/// | Bold | `false` |
/// | Text color | `None` (SVG default, black) |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family (e.g., "Arial", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Renders the text in a bold weight when `true`.
    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    /// Sets the text color. `None` uses the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Returns a copy of this definition whose font size is reduced, one
    /// point at a time, until `content` fits within `max_width`.
    ///
    /// The font size never drops below `min_font_size`. Content that already
    /// fits keeps the original size.
    pub fn shrink_to_fit(&self, content: &str, max_width: f32, min_font_size: u16) -> Self {
        let mut fitted = self.clone();
        while fitted.font_size > min_font_size
            && Text::new(&fitted, content).calculate_size().width() > max_width
        {
            fitted.font_size -= 1;
        }
        fitted
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 12,
            bold: false,
            color: None,
        }
    }
}

/// A renderable text element combining content with styling.
///
/// The render position is the center of the text box; the element is emitted
/// with `text-anchor="middle"` and `dominant-baseline="central"`.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Calculate the size required to display this text.
    pub fn calculate_size(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.bold() {
            rendered_text = rendered_text.set("font-weight", "bold");
        }

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_svg_hex())
                .set("fill-opacity", color.alpha());
        }

        rendered_text = rendered_text.add(SvgText::new(self.content));

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// Measures text with a shared cosmic-text `FontSystem`.
///
/// Loading system fonts is expensive, so a single instance lives for the
/// whole process.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Calculate the size of a single line of text in pixels.
    ///
    /// Falls back to an average glyph-width estimate when no font can shape
    /// the text (e.g. on hosts without any installed fonts).
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // SVG font sizes are user units, i.e. pixels
        let font_size_px = text_def.font_size() as f32;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = if text_def.bold() {
            Weight::BOLD
        } else {
            Weight::NORMAL
        };
        let attrs = Attrs::new()
            .family(Family::Name(text_def.font_family()))
            .weight(weight);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        for run in &layout_runs {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if max_width == 0.0 {
            max_width = text.chars().count() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
