//! Layer layout for the architecture diagram.
//!
//! Layout works in diagram units with Y growing upward. Layers are stacked
//! from the top: layer `i` is anchored at
//! `total_height - i * (layer_height + layer_spacing)`. Each layer gets a
//! translucent panel spanning the full row width, a title just below the
//! panel's top edge, and its service boxes wrapped into centered rows.
//!
//! ```text
//!  ┌──────────────────────── panel ─────────────────────────┐  y_pos + 0.2
//!  │                        Title                           │  y_pos + 0.05 (top of title)
//!  │   ┌──────┐   ┌──────┐   ┌──────┐   ┌──────┐            │  y_pos - 0.5
//!  │   └──────┘   └──────┘   └──────┘   └──────┘            │
//!  │              ┌──────┐                                  │  wrapped row, centered
//!  │              └──────┘                                  │
//!  └────────────────────────────────────────────────────────┘  y_pos - panel height
//! ```

use log::{debug, trace};

use healthvital_core::{
    architecture::Layer,
    geometry::{Bounds, Point},
};

use crate::config::LayoutConfig;

/// Horizontal margin between the widest row and the panel edge.
const PANEL_SIDE_MARGIN: f32 = 0.5;
/// Panel extent above the layer anchor.
const PANEL_TOP_MARGIN: f32 = 0.2;
/// Vertical padding added to the stacked rows inside a panel.
const PANEL_VERTICAL_PADDING: f32 = 0.8;
/// Distance from the layer anchor down to the top of the first row.
const FIRST_ROW_OFFSET: f32 = 0.5;
/// Distance from the layer anchor up to the top of the layer title.
const TITLE_OFFSET: f32 = 0.05;

/// Position of one layer and everything drawn for it.
#[derive(Debug, Clone)]
pub struct LayerLayout<'a> {
    layer: &'a Layer,
    anchor_y: f32,
    panel: Bounds,
    title_top: Point,
    services: Vec<ServiceSlot<'a>>,
}

impl<'a> LayerLayout<'a> {
    pub fn layer(&self) -> &'a Layer {
        self.layer
    }

    /// Y coordinate the layer is stacked at.
    pub fn anchor_y(&self) -> f32 {
        self.anchor_y
    }

    /// Background panel bounds.
    pub fn panel(&self) -> Bounds {
        self.panel
    }

    /// Top-center point of the layer title.
    pub fn title_top(&self) -> Point {
        self.title_top
    }

    pub fn services(&self) -> &[ServiceSlot<'a>] {
        &self.services
    }
}

/// A service box and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSlot<'a> {
    name: &'a str,
    row: usize,
    column: usize,
    bounds: Bounds,
}

impl<'a> ServiceSlot<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

/// The complete diagram layout.
#[derive(Debug, Clone)]
pub struct DiagramLayout<'a> {
    layers: Vec<LayerLayout<'a>>,
    total_height: f32,
    viewport: Bounds,
}

impl<'a> DiagramLayout<'a> {
    pub fn layers(&self) -> &[LayerLayout<'a>] {
        &self.layers
    }

    /// Stacked height of all layers, which is also the first layer's anchor.
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Visible region of the diagram in diagram units.
    pub fn viewport(&self) -> Bounds {
        self.viewport
    }

    /// First layer whose panel extends past the viewport, if any.
    pub fn overflowing_layer(&self) -> Option<&LayerLayout<'a>> {
        self.layers
            .iter()
            .find(|layer| !self.viewport.contains(&layer.panel))
    }
}

/// Computes [`DiagramLayout`]s from a [`LayoutConfig`].
#[derive(Debug, Clone)]
pub struct LayoutEngine<'c> {
    config: &'c LayoutConfig,
}

impl<'c> LayoutEngine<'c> {
    pub fn new(config: &'c LayoutConfig) -> Self {
        Self { config }
    }

    /// Lays out `layers` top to bottom in the given order.
    ///
    /// A layer without services still gets a panel and a title; its panel
    /// collapses to the padding height.
    pub fn layout<'a>(&self, layers: &'a [Layer]) -> DiagramLayout<'a> {
        let stride = self.config.layer_height() + self.config.layer_spacing();
        let total_height = layers.len() as f32 * stride;

        let layer_layouts: Vec<LayerLayout<'a>> = layers
            .iter()
            .enumerate()
            .map(|(index, layer)| {
                let anchor_y = total_height - index as f32 * stride;
                self.layout_layer(layer, anchor_y)
            })
            .collect();

        let [x_min, x_max] = self.config.x_range();
        let viewport = Bounds::from_corners(
            x_min,
            self.config.y_floor(),
            x_max,
            total_height + self.config.y_headroom(),
        );

        debug!(
            layers = layer_layouts.len(),
            total_height;
            "Diagram layout calculated"
        );

        DiagramLayout {
            layers: layer_layouts,
            total_height,
            viewport,
        }
    }

    fn layout_layer<'a>(&self, layer: &'a Layer, anchor_y: f32) -> LayerLayout<'a> {
        let box_width = self.config.service_box_width();
        let box_height = self.config.service_box_height();
        let spacing = self.config.service_spacing();
        let row_spacing = self.config.row_spacing();

        let services = layer.services();
        let per_row = self.config.services_per_row().min(services.len()).max(1);
        let rows = services.len().div_ceil(per_row);

        // Panels share one width regardless of how full the layer is
        let max_per_row = self.config.services_per_row();
        let max_width = row_width(max_per_row, box_width, spacing);
        let panel_height = rows as f32 * box_height
            + rows.saturating_sub(1) as f32 * row_spacing
            + PANEL_VERTICAL_PADDING;
        let panel = Bounds::from_corners(
            -max_width / 2.0 - PANEL_SIDE_MARGIN,
            anchor_y - panel_height,
            max_width / 2.0 + PANEL_SIDE_MARGIN,
            anchor_y + PANEL_TOP_MARGIN,
        );

        let slots = services
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let row = index / per_row;
                let column = index % per_row;

                let in_row = per_row.min(services.len() - row * per_row);
                let start_x = -row_width(in_row, box_width, spacing) / 2.0;

                let x = start_x + column as f32 * (box_width + spacing);
                let top = anchor_y - FIRST_ROW_OFFSET - row as f32 * (box_height + row_spacing);

                ServiceSlot {
                    name: name.as_str(),
                    row,
                    column,
                    bounds: Bounds::from_corners(x, top - box_height, x + box_width, top),
                }
            })
            .collect();

        trace!(layer = layer.name(), anchor_y, rows; "Layer laid out");

        LayerLayout {
            layer,
            anchor_y,
            panel,
            title_top: Point::new(0.0, anchor_y + TITLE_OFFSET),
            services: slots,
        }
    }
}

/// Width of `count` boxes separated by `spacing`.
fn row_width(count: usize, box_width: f32, spacing: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    count as f32 * box_width + (count - 1) as f32 * spacing
}
