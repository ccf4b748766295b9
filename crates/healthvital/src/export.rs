//! Export of laid-out diagrams.
//!
//! # Pipeline Position
//!
//! ```text
//! Layers
//!     ↓ layout
//! DiagramLayout (diagram units)
//!     ↓ export::svg (this module)
//! SVG document (pixels)
//!     ↓ export::png
//! PNG bytes
//! ```
//!
//! Export operations return [`Error`], which converts into
//! [`HealthVitalError::Export`](crate::HealthVitalError::Export) at the crate
//! boundary.

pub mod png;
pub mod svg;

use std::{io, path::Path};

use thiserror::Error;

/// Errors raised while turning a layout into an image.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Image encodings the diagram can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    /// Picks the format from a file extension: `.svg` selects SVG, anything
    /// else PNG.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Png,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_format_from_path() {
        assert_eq!(ImageFormat::from_path("healthvital_architecture.png"), ImageFormat::Png);
        assert_eq!(ImageFormat::from_path("out/diagram.svg"), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path("DIAGRAM.SVG"), ImageFormat::Svg);
        assert_eq!(ImageFormat::from_path("diagram"), ImageFormat::Png);
    }
}
