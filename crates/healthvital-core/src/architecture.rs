//! Architecture data model.
//!
//! Two independent views of the same system live here:
//!
//! - [`Layer`] - the diagram view: a named group of service names with a color.
//! - [`ProjectSpec`] - the spec view: nested, ordered mappings of layers,
//!   technology choices and features, flattened later into CSV rows.
//!
//! Every mapping preserves declaration order; iteration always yields entries
//! in the order they were added.
//!
//! # Example
//!
//! ```
//! # use healthvital_core::architecture::ArchitectureSpec;
//! let spec = ArchitectureSpec::new()
//!     .with_layer("presentation", [("cdn", "Amazon CloudFront"), ("static_assets", "Amazon S3")])
//!     .with_layer("api_layer", [("security", "AWS WAF")]);
//!
//! assert_eq!(spec.layer_count(), 2);
//! assert_eq!(spec.leaf_count(), 3);
//! ```

use indexmap::IndexMap;
use thiserror::Error;

use crate::color::Color;

/// Ordered mapping of component name to technology.
pub type Components = IndexMap<String, String>;

/// Errors raised while building model values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid color for layer `{layer}`: {reason}")]
    InvalidColor { layer: String, reason: String },
}

/// A named grouping of services in the architecture diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: String,
    services: Vec<String>,
    color: Color,
}

impl Layer {
    /// Creates a layer, parsing `color` as a CSS color (usually `#RRGGBB`).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidColor`] if `color` cannot be parsed.
    pub fn new<I, S>(name: impl Into<String>, services: I, color: &str) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let color = Color::new(color).map_err(|reason| ModelError::InvalidColor {
            layer: name.clone(),
            reason,
        })?;

        Ok(Self {
            name,
            services: services.into_iter().map(Into::into).collect(),
            color,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Service names in display order.
    pub fn services(&self) -> &[String] {
        &self.services
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Layer name → component name → technology.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchitectureSpec {
    layers: IndexMap<String, Components>,
}

impl ArchitectureSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer with its components. Re-adding a layer replaces its
    /// components but keeps its original position.
    pub fn with_layer<I, K, V>(mut self, name: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let components = components
            .into_iter()
            .map(|(component, technology)| (component.into(), technology.into()))
            .collect();
        self.layers.insert(name.into(), components);
        self
    }

    /// Iterates layers in declaration order.
    pub fn layers(&self) -> impl Iterator<Item = (&str, &Components)> {
        self.layers
            .iter()
            .map(|(name, components)| (name.as_str(), components))
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Total number of component → technology entries.
    pub fn leaf_count(&self) -> usize {
        self.layers.values().map(IndexMap::len).sum()
    }
}

/// One category of technology choices, e.g. the frontend stack.
///
/// Besides its attributes a category knows how it is labelled when exported:
/// `label` becomes the CSV category and `note` the free-text description.
/// Reference-only categories are part of the model but produce no rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TechCategory {
    key: String,
    label: String,
    note: String,
    attributes: IndexMap<String, String>,
    exported: bool,
}

impl TechCategory {
    pub fn new(key: impl Into<String>, label: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            note: note.into(),
            attributes: IndexMap::new(),
            exported: true,
        }
    }

    /// Keeps the category in the model but out of exported rows.
    pub fn reference_only(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Adds attribute → description entries in order.
    pub fn with_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.extend(
            attributes
                .into_iter()
                .map(|(attribute, description)| (attribute.into(), description.into())),
        );
        self
    }

    /// Category key as declared, e.g. `frontend_technologies`.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Category name used in exported rows, e.g. `frontend`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(attribute, description)| (attribute.as_str(), description.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Category → attribute → description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechSpec {
    categories: IndexMap<String, TechCategory>,
}

impl TechSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: TechCategory) -> Self {
        self.categories.insert(category.key().to_string(), category);
        self
    }

    pub fn categories(&self) -> impl Iterator<Item = &TechCategory> {
        self.categories.values()
    }

    /// Looks up a category by its declared key.
    pub fn category(&self, key: &str) -> Option<&TechCategory> {
        self.categories.get(key)
    }

    pub fn leaf_count(&self) -> usize {
        self.categories.values().map(TechCategory::len).sum()
    }

    /// Categories that produce exported rows, in declaration order.
    pub fn exported_categories(&self) -> impl Iterator<Item = &TechCategory> {
        self.categories().filter(|category| category.is_exported())
    }

    /// Leaf count of the exported categories only.
    pub fn exported_leaf_count(&self) -> usize {
        self.exported_categories().map(TechCategory::len).sum()
    }
}

/// Feature category → ordered feature list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    categories: IndexMap<String, Vec<String>>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category<I, S>(mut self, name: impl Into<String>, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .insert(name.into(), features.into_iter().map(Into::into).collect());
        self
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, features)| (name.as_str(), features.as_slice()))
    }

    pub fn leaf_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

/// Headline information about the project.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectOverview {
    name: String,
    description: String,
    core_features: Vec<String>,
}

impl ProjectOverview {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            core_features: Vec::new(),
        }
    }

    pub fn with_core_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core_features
            .extend(features.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn core_features(&self) -> &[String] {
        &self.core_features
    }
}

/// Everything the spec exporter flattens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectSpec {
    overview: ProjectOverview,
    architecture: ArchitectureSpec,
    tech: TechSpec,
    features: FeatureSet,
}

impl ProjectSpec {
    pub fn new(
        overview: ProjectOverview,
        architecture: ArchitectureSpec,
        tech: TechSpec,
        features: FeatureSet,
    ) -> Self {
        Self {
            overview,
            architecture,
            tech,
            features,
        }
    }

    pub fn overview(&self) -> &ProjectOverview {
        &self.overview
    }

    pub fn architecture(&self) -> &ArchitectureSpec {
        &self.architecture
    }

    pub fn tech(&self) -> &TechSpec {
        &self.tech
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Number of leaf values across all nested mappings.
    pub fn leaf_count(&self) -> usize {
        self.architecture.leaf_count() + self.tech.leaf_count() + self.features.leaf_count()
    }

    /// Number of leaves written as rows; reference-only categories are skipped.
    pub fn exported_leaf_count(&self) -> usize {
        self.architecture.leaf_count()
            + self.tech.exported_leaf_count()
            + self.features.leaf_count()
    }
}
