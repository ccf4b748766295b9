//! Configuration types for HealthVital diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from TOML.
//! Every field is optional in the file; missing fields take the defaults
//! documented on each type.
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Box sizes and spacing, in diagram units.
//! - [`StyleConfig`] - Colors, fonts, opacities and output scale.
//!
//! # Example
//!
//! ```
//! # use healthvital::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.layout().services_per_row(), 4);
//! ```

use serde::Deserialize;

use healthvital_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks that every value can produce a drawable diagram.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()?;
        self.style.validate()
    }
}

/// Box sizes and spacing in diagram units.
///
/// | Field | Default |
/// |-------|---------|
/// | `layer_height` | 1.2 |
/// | `layer_spacing` | 0.3 |
/// | `service_box_width` | 1.6 |
/// | `service_box_height` | 0.5 |
/// | `service_spacing` | 0.4 |
/// | `row_spacing` | 0.3 |
/// | `services_per_row` | 4 |
/// | `unit_size` | 60.0 pixels per unit |
/// | `x_range` | `[-8.0, 8.0]` |
/// | `y_floor` | -2.0 |
/// | `y_headroom` | 1.0 |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    layer_height: f32,
    layer_spacing: f32,
    service_box_width: f32,
    service_box_height: f32,
    service_spacing: f32,
    row_spacing: f32,
    services_per_row: usize,
    unit_size: f32,
    x_range: [f32; 2],
    y_floor: f32,
    y_headroom: f32,
}

impl LayoutConfig {
    /// Vertical extent reserved for one layer.
    pub fn layer_height(&self) -> f32 {
        self.layer_height
    }

    /// Gap between consecutive layers.
    pub fn layer_spacing(&self) -> f32 {
        self.layer_spacing
    }

    pub fn service_box_width(&self) -> f32 {
        self.service_box_width
    }

    pub fn service_box_height(&self) -> f32 {
        self.service_box_height
    }

    /// Horizontal gap between service boxes in a row.
    pub fn service_spacing(&self) -> f32 {
        self.service_spacing
    }

    /// Vertical gap between rows of service boxes.
    pub fn row_spacing(&self) -> f32 {
        self.row_spacing
    }

    /// Services per row before wrapping.
    pub fn services_per_row(&self) -> usize {
        self.services_per_row
    }

    /// Pixels per diagram unit.
    pub fn unit_size(&self) -> f32 {
        self.unit_size
    }

    /// Visible horizontal range as `[min, max]`.
    pub fn x_range(&self) -> [f32; 2] {
        self.x_range
    }

    /// Lowest visible Y value.
    pub fn y_floor(&self) -> f32 {
        self.y_floor
    }

    /// Visible space above the first layer.
    pub fn y_headroom(&self) -> f32 {
        self.y_headroom
    }

    fn validate(&self) -> Result<(), String> {
        let positive = [
            ("layout.layer_height", self.layer_height),
            ("layout.service_box_width", self.service_box_width),
            ("layout.service_box_height", self.service_box_height),
            ("layout.unit_size", self.unit_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }

        let non_negative = [
            ("layout.layer_spacing", self.layer_spacing),
            ("layout.service_spacing", self.service_spacing),
            ("layout.row_spacing", self.row_spacing),
            ("layout.y_headroom", self.y_headroom),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{name} must not be negative, got {value}"));
            }
        }

        if self.services_per_row == 0 {
            return Err("layout.services_per_row must be at least 1".to_string());
        }

        let [x_min, x_max] = self.x_range;
        if !(x_min.is_finite() && x_max.is_finite() && x_min < x_max) {
            return Err(format!(
                "layout.x_range must be an increasing pair, got [{x_min}, {x_max}]"
            ));
        }

        if !self.y_floor.is_finite() {
            return Err("layout.y_floor must be a finite number".to_string());
        }

        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layer_height: 1.2,
            layer_spacing: 0.3,
            service_box_width: 1.6,
            service_box_height: 0.5,
            service_spacing: 0.4,
            row_spacing: 0.3,
            services_per_row: 4,
            unit_size: 60.0,
            x_range: [-8.0, 8.0],
            y_floor: -2.0,
            y_headroom: 1.0,
        }
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    title: String,
    font_family: String,
    title_font_size: u16,
    layer_title_font_size: u16,
    label_font_size: u16,
    min_label_font_size: u16,
    panel_opacity: f32,
    service_opacity: f32,
    scale: f32,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Figure title drawn above the plot. Empty disables it.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn title_font_size(&self) -> u16 {
        self.title_font_size
    }

    pub fn layer_title_font_size(&self) -> u16 {
        self.layer_title_font_size
    }

    pub fn label_font_size(&self) -> u16 {
        self.label_font_size
    }

    /// Labels are never shrunk below this size.
    pub fn min_label_font_size(&self) -> u16 {
        self.min_label_font_size
    }

    /// Opacity of the layer background panels.
    pub fn panel_opacity(&self) -> f32 {
        self.panel_opacity
    }

    /// Opacity of the service boxes.
    pub fn service_opacity(&self) -> f32 {
        self.service_opacity
    }

    /// Rasterization scale factor for PNG output.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    fn validate(&self) -> Result<(), String> {
        self.background_color()?;

        for (name, value) in [
            ("style.panel_opacity", self.panel_opacity),
            ("style.service_opacity", self.service_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be between 0 and 1, got {value}"));
            }
        }

        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(format!(
                "style.scale must be a positive number, got {}",
                self.scale
            ));
        }

        if self.min_label_font_size == 0 || self.min_label_font_size > self.label_font_size {
            return Err(format!(
                "style.min_label_font_size must be between 1 and label_font_size ({}), got {}",
                self.label_font_size, self.min_label_font_size
            ));
        }

        Ok(())
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            title: "HealthVital Serverless Architecture".to_string(),
            font_family: "Arial".to_string(),
            title_font_size: 17,
            layer_title_font_size: 18,
            label_font_size: 12,
            min_label_font_size: 8,
            panel_opacity: 0.2,
            service_opacity: 0.9,
            scale: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_approx_eq!(f32, config.layout().layer_height(), 1.2);
        assert_approx_eq!(f32, config.style().panel_opacity(), 0.2);
        assert_eq!(config.style().background_color(), Ok(None));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            services_per_row = 3

            [style]
            background_color = "#F0F0F0"
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().services_per_row(), 3);
        assert_approx_eq!(f32, config.layout().service_box_width(), 1.6);
        assert_eq!(config.style().title(), "HealthVital Serverless Architecture");
        let background = config.style().background_color().unwrap().unwrap();
        assert_eq!(background.to_svg_hex(), "#f0f0f0");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_services_per_row() {
        let config: AppConfig = toml::from_str("[layout]\nservices_per_row = 0").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.contains("services_per_row"));
    }

    #[test]
    fn test_validate_rejects_non_positive_sizes() {
        let config: AppConfig = toml::from_str("[layout]\nservice_box_width = 0.0").unwrap();
        assert!(config.validate().unwrap_err().contains("service_box_width"));

        let config: AppConfig = toml::from_str("[layout]\nunit_size = -5.0").unwrap();
        assert!(config.validate().unwrap_err().contains("unit_size"));
    }

    #[test]
    fn test_validate_rejects_inverted_x_range() {
        let config: AppConfig = toml::from_str("[layout]\nx_range = [8.0, -8.0]").unwrap();
        assert!(config.validate().unwrap_err().contains("x_range"));
    }

    #[test]
    fn test_validate_rejects_bad_style_values() {
        let config: AppConfig = toml::from_str("[style]\npanel_opacity = 1.5").unwrap();
        assert!(config.validate().unwrap_err().contains("panel_opacity"));

        let config: AppConfig = toml::from_str("[style]\nbackground_color = \"nope\"").unwrap();
        assert!(config.validate().unwrap_err().contains("background color"));

        let config: AppConfig = toml::from_str("[style]\nmin_label_font_size = 40").unwrap();
        assert!(config.validate().unwrap_err().contains("min_label_font_size"));
    }
}
