//! Error adapter for converting HealthVitalError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::{fmt, io};

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan};

use healthvital::HealthVitalError;

/// Adapter giving a [`HealthVitalError`] a diagnostic code and, where one
/// applies, a help message.
pub struct ErrorAdapter<'a>(pub &'a HealthVitalError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            HealthVitalError::Io(_) => "healthvital::io",
            HealthVitalError::Csv(_) => "healthvital::csv",
            HealthVitalError::Model(_) => "healthvital::model",
            HealthVitalError::Config(_) => "healthvital::config",
            HealthVitalError::Layout(_) => "healthvital::layout",
            HealthVitalError::Export(_) => "healthvital::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            HealthVitalError::Config(_) => {
                "check the file passed with --config, healthvital/config.toml, or the user configuration directory"
            }
            HealthVitalError::Layout(_) => "adjust the [layout] section of the configuration",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Renders `err` as a graphical miette report into `writer`.
///
/// # Errors
///
/// Returns an [`io::Error`] if the report cannot be rendered or written.
pub fn write_report<W: io::Write>(err: &HealthVitalError, mut writer: W) -> io::Result<()> {
    let mut report = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut report, &ErrorAdapter(err))
        .map_err(io::Error::other)?;
    writeln!(writer, "{report}")
}
