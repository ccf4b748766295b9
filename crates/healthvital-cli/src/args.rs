//! Command-line argument definitions for the HealthVital CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Subcommands select which artifact is generated; global
//! options control configuration file selection and logging verbosity.

use clap::{Parser, Subcommand};

use healthvital::{DEFAULT_DIAGRAM_OUTPUT, specs};

/// Command-line arguments for the HealthVital generators
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Artifact to generate; both when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The subcommand to run, defaulting to [`Command::All`].
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render the architecture diagram (PNG, or SVG for a `.svg` path)
    Diagram {
        #[arg(short, long, default_value = DEFAULT_DIAGRAM_OUTPUT)]
        output: String,
    },

    /// Export the project specification as CSV
    Specs {
        #[arg(short, long, default_value = specs::DEFAULT_OUTPUT)]
        output: String,
    },

    /// Generate both artifacts
    All {
        #[arg(long, default_value = DEFAULT_DIAGRAM_OUTPUT)]
        diagram_output: String,

        #[arg(long, default_value = specs::DEFAULT_OUTPUT)]
        specs_output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::All {
            diagram_output: DEFAULT_DIAGRAM_OUTPUT.to_string(),
            specs_output: specs::DEFAULT_OUTPUT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_everything() {
        let args = Args::try_parse_from(["healthvital"]).unwrap();
        assert_eq!(args.command, None);
        assert_eq!(args.selected_command(), Command::default());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_subcommand_defaults() {
        let args = Args::try_parse_from(["healthvital", "diagram"]).unwrap();
        assert_eq!(
            args.selected_command(),
            Command::Diagram {
                output: "healthvital_architecture.png".to_string()
            }
        );

        let args = Args::try_parse_from(["healthvital", "specs"]).unwrap();
        assert_eq!(
            args.selected_command(),
            Command::Specs {
                output: "healthvital_project_specs.csv".to_string()
            }
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "healthvital",
            "specs",
            "-o",
            "out.csv",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(
            args.selected_command(),
            Command::Specs {
                output: "out.csv".to_string()
            }
        );
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Args::try_parse_from(["healthvital", "deploy"]).is_err());
    }
}
