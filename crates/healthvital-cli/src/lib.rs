//! CLI logic for the HealthVital generators.
//!
//! This module wires command-line arguments to the diagram renderer and the
//! spec exporter.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use log::info;

use healthvital::{DiagramBuilder, HealthVitalError, catalog, specs::SpecExporter};

/// Run the HealthVital CLI application
///
/// Generates the artifacts selected by the subcommand. The spec export
/// prints its summary to standard output.
///
/// Only the diagram reads the configuration, so `specs` runs regardless of
/// the state of any config file.
///
/// # Errors
///
/// Returns `HealthVitalError` for:
/// - Configuration loading errors (diagram only)
/// - Layout and rendering errors
/// - File I/O and CSV errors
pub fn run(args: &Args) -> Result<(), HealthVitalError> {
    let command = args.selected_command();
    info!(command:?; "Running generator");

    match command {
        Command::Diagram { output } => export_diagram(args, &output),
        Command::Specs { output } => export_specs(&output),
        Command::All {
            diagram_output,
            specs_output,
        } => {
            export_diagram(args, &diagram_output)?;
            export_specs(&specs_output)
        }
    }
}

fn export_diagram(args: &Args, output: &str) -> Result<(), HealthVitalError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let layers = catalog::layers()?;
    DiagramBuilder::new(app_config).export(&layers, output)?;

    info!(output_file = output; "Architecture diagram exported successfully");
    Ok(())
}

fn export_specs(output: &str) -> Result<(), HealthVitalError> {
    let project = catalog::project();
    let summary = SpecExporter::new(&project).export(output)?;

    println!("{summary}");
    Ok(())
}
