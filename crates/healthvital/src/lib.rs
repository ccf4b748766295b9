//! HealthVital - documentation artifacts for a serverless health monitoring
//! platform.
//!
//! This library renders the layered architecture diagram of the platform to
//! PNG (or SVG) and flattens the project specification into a CSV file.

pub mod catalog;
pub mod config;
pub mod layout;
pub mod specs;

mod error;
mod export;

pub use healthvital_core::{architecture, color, draw, geometry};

pub use error::HealthVitalError;
pub use export::ImageFormat;

use std::{fs, path::Path};

use log::{debug, info};

use architecture::Layer;
use config::AppConfig;
use geometry::Insets;
use layout::{DiagramLayout, LayoutEngine};

/// Default output path of the architecture diagram.
pub const DEFAULT_DIAGRAM_OUTPUT: &str = "healthvital_architecture.png";

/// Pixel margin around the plot area; the figure title sits in the top one.
const PLOT_MARGIN: Insets = Insets::new(100.0, 80.0, 80.0, 80.0);

/// Builder for laying out and rendering architecture diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use healthvital::{DiagramBuilder, catalog, config::AppConfig};
///
/// let layers = catalog::layers().expect("Invalid layer catalog");
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Render to an SVG string
/// let svg = builder.render_svg(&layers).expect("Failed to render");
///
/// // Or write the PNG next to the current directory
/// builder
///     .export(&layers, "healthvital_architecture.png")
///     .expect("Failed to export");
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Computes the positions of panels, titles and service boxes.
    pub fn layout<'a>(&self, layers: &'a [Layer]) -> DiagramLayout<'a> {
        info!(layers_count = layers.len(); "Calculating diagram layout");
        LayoutEngine::new(self.config.layout()).layout(layers)
    }

    /// Renders `layers` to an SVG document string.
    ///
    /// # Errors
    ///
    /// Returns [`HealthVitalError::Config`] if the configuration is invalid,
    /// [`HealthVitalError::Layout`] if a layer panel falls outside the
    /// visible range, or [`HealthVitalError::Export`] if the renderer cannot
    /// be built.
    pub fn render_svg(&self, layers: &[Layer]) -> Result<String, HealthVitalError> {
        self.config.validate().map_err(HealthVitalError::Config)?;

        let layout = self.layout(layers);
        if let Some(overflow) = layout.overflowing_layer() {
            return Err(HealthVitalError::Layout(format!(
                "layer `{}` does not fit the visible range; widen layout.x_range or lower layout.y_floor",
                overflow.layer().name()
            )));
        }

        let svg = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_unit_size(self.config.layout().unit_size())
            .with_margin(PLOT_MARGIN)
            .build()?;

        let document = svg.render(&layout).to_string();
        info!(bytes = document.len(); "SVG rendered successfully");
        Ok(document)
    }

    /// Renders `layers` to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HealthVitalError`] if rendering or rasterization fails.
    pub fn render_png(&self, layers: &[Layer]) -> Result<Vec<u8>, HealthVitalError> {
        let svg = self.render_svg(layers)?;

        let style = self.config.style();
        let png = export::png::rasterize(&svg, style.scale(), style.font_family())?;
        info!(bytes = png.len(); "PNG rendered successfully");
        Ok(png)
    }

    /// Renders `layers` in the requested `format`.
    ///
    /// # Errors
    ///
    /// Returns [`HealthVitalError`] if rendering fails.
    pub fn render(&self, layers: &[Layer], format: ImageFormat) -> Result<Vec<u8>, HealthVitalError> {
        match format {
            ImageFormat::Png => self.render_png(layers),
            ImageFormat::Svg => self.render_svg(layers).map(String::into_bytes),
        }
    }

    /// Renders `layers` and writes the image to `path`.
    ///
    /// The format follows the file extension: `.svg` writes the SVG document,
    /// anything else a PNG.
    ///
    /// # Errors
    ///
    /// Returns [`HealthVitalError`] if rendering fails or the file cannot be
    /// written.
    pub fn export(&self, layers: &[Layer], path: impl AsRef<Path>) -> Result<(), HealthVitalError> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path);
        debug!(output_path:? = path, format = format.name(); "Exporting diagram");

        let bytes = self.render(layers, format)?;
        fs::write(path, &bytes).map_err(export::Error::Io)?;

        info!(output_path:? = path, bytes = bytes.len(); "Architecture diagram exported");
        Ok(())
    }
}
