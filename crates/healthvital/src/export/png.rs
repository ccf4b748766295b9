//! PNG rasterization of rendered SVG documents.

use std::sync::{Arc, OnceLock};

use log::{debug, info};
use resvg::{tiny_skia, usvg};

use super::Error;

static FONT_DATABASE: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();

/// System fonts, loaded once per process.
fn font_database() -> Arc<usvg::fontdb::Database> {
    FONT_DATABASE
        .get_or_init(|| {
            info!("Loading system fonts");
            let mut database = usvg::fontdb::Database::new();
            database.load_system_fonts();
            debug!(faces = database.len(); "System fonts loaded");
            Arc::new(database)
        })
        .clone()
}

/// Rasterizes `svg` into PNG bytes.
///
/// The output is `scale` times the document's pixel size. `font_family` is
/// used for text that names no family of its own.
///
/// # Errors
///
/// Returns [`Error::Render`] if the document cannot be parsed, the pixmap
/// cannot be allocated, or PNG encoding fails.
pub fn rasterize(svg: &str, scale: f32, font_family: &str) -> Result<Vec<u8>, Error> {
    let mut options = usvg::Options {
        font_family: font_family.to_string(),
        ..usvg::Options::default()
    };
    options.fontdb = font_database();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| Error::Render(format!("Invalid SVG document: {err}")))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        Error::Render(format!("Failed to allocate a {width}x{height} pixmap"))
    })?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    debug!(width, height, scale; "SVG rasterized");

    pixmap
        .encode_png()
        .map_err(|err| Error::Render(format!("PNG encoding failed: {err}")))
}
