//! Flattening of a [`ProjectSpec`] into CSV rows.
//!
//! Every exported leaf value of the nested project mappings becomes one
//! four-column row. Rows are emitted in a fixed order: architecture layers,
//! frontend and backend technologies, then unique features. Reference-only
//! technology categories (the database design) stay out of the file.
//!
//! # Example
//!
//! ```
//! # use healthvital::{catalog, specs::SpecExporter};
//! let project = catalog::project();
//! let exporter = SpecExporter::new(&project);
//!
//! let csv = exporter.to_csv_string().unwrap();
//! assert!(csv.starts_with("Category,Component,Technology/Service,Description\r\n"));
//! assert_eq!(exporter.rows().len(), project.exported_leaf_count());
//! ```

use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use csv::{Terminator, WriterBuilder};
use log::{debug, info};
use serde::Serialize;

use healthvital_core::architecture::ProjectSpec;

use crate::HealthVitalError;

/// Default output path of the spec export.
pub const DEFAULT_OUTPUT: &str = "healthvital_project_specs.csv";

/// Column names written as the first record.
pub const HEADER: [&str; 4] = ["Category", "Component", "Technology/Service", "Description"];

const UNIQUE_FEATURES_CATEGORY: &str = "unique_features";
const UNIQUE_FEATURE_NOTE: &str = "Unique project feature";

/// One flattened leaf value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecRow {
    category: String,
    component: String,
    technology: String,
    description: String,
}

impl SpecRow {
    fn new(
        category: impl Into<String>,
        component: impl Into<String>,
        technology: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            component: component.into(),
            technology: technology.into(),
            description: description.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Technology, service or feature text.
    pub fn technology(&self) -> &str {
        &self.technology
    }

    /// Free-text note.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Writes a [`ProjectSpec`] as CSV.
#[derive(Debug, Clone, Copy)]
pub struct SpecExporter<'a> {
    project: &'a ProjectSpec,
}

impl<'a> SpecExporter<'a> {
    pub fn new(project: &'a ProjectSpec) -> Self {
        Self { project }
    }

    /// Flattens the project into rows, in export order.
    pub fn rows(&self) -> Vec<SpecRow> {
        let mut rows = Vec::with_capacity(self.project.exported_leaf_count());

        for (layer, components) in self.project.architecture().layers() {
            rows.extend(components.iter().map(|(component, technology)| {
                SpecRow::new(
                    layer,
                    component,
                    technology,
                    format!("{layer} component for {component}"),
                )
            }));
        }

        for category in self.project.tech().exported_categories() {
            rows.extend(category.attributes().map(|(attribute, description)| {
                SpecRow::new(category.label(), attribute, description, category.note())
            }));
        }

        for (category, features) in self.project.features().categories() {
            rows.extend(features.iter().map(|feature| {
                SpecRow::new(
                    UNIQUE_FEATURES_CATEGORY,
                    category,
                    feature,
                    UNIQUE_FEATURE_NOTE,
                )
            }));
        }

        rows
    }

    /// Writes the header and all rows to `writer`, returning the number of
    /// data rows written.
    ///
    /// # Errors
    ///
    /// Returns [`HealthVitalError::Csv`] if a record cannot be written.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<usize, HealthVitalError> {
        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(writer);

        csv_writer.write_record(HEADER)?;

        let rows = self.rows();
        for row in &rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;

        debug!(rows = rows.len(); "CSV rows written");
        Ok(rows.len())
    }

    /// Renders the CSV document into a string.
    ///
    /// # Errors
    ///
    /// Returns [`HealthVitalError::Csv`] if a record cannot be written.
    pub fn to_csv_string(&self) -> Result<String, HealthVitalError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|err| HealthVitalError::Export(Box::new(err)))
    }

    /// Writes the CSV file at `path` and returns the summary to report.
    ///
    /// # Errors
    ///
    /// Returns [`HealthVitalError::Io`] if the file cannot be created, or
    /// [`HealthVitalError::Csv`] if writing fails.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<SpecSummary, HealthVitalError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let rows = self.write_csv(BufWriter::new(file))?;

        info!(output_path:? = path, rows; "Project specifications exported");
        Ok(self.summary(path, rows))
    }

    /// Summary of an export of `rows` rows to `path`.
    pub fn summary(&self, path: impl AsRef<Path>, rows: usize) -> SpecSummary {
        let overview = self.project.overview();
        SpecSummary {
            path: path.as_ref().to_path_buf(),
            project_name: overview.name().to_string(),
            description: overview.description().to_string(),
            core_features: overview.core_features().len(),
            architecture_layers: self.project.architecture().layer_count(),
            rows,
        }
    }
}

/// Human-readable outcome of a spec export.
///
/// Its [`Display`](fmt::Display) form is the five-line report printed by the
/// command line tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSummary {
    path: PathBuf,
    project_name: String,
    description: String,
    core_features: usize,
    architecture_layers: usize,
    rows: usize,
}

impl SpecSummary {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn core_features(&self) -> usize {
        self.core_features
    }

    pub fn architecture_layers(&self) -> usize {
        self.architecture_layers
    }

    /// Data rows written, excluding the header.
    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl fmt::Display for SpecSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project specifications saved to {}", self.path.display())?;
        writeln!(f, "Project Name: {}", self.project_name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Core Features: {} features defined", self.core_features)?;
        write!(
            f,
            "Architecture Layers: {} layers defined",
            self.architecture_layers
        )
    }
}
