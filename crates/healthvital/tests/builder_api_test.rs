//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works and is usable.

use healthvital::{
    DEFAULT_DIAGRAM_OUTPUT, DiagramBuilder, HealthVitalError, ImageFormat,
    architecture::Layer,
    catalog,
    config::AppConfig,
    specs::{self, SpecExporter},
};
use tempfile::tempdir;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::new(AppConfig::default());
    let _default = DiagramBuilder::default();
}

#[test]
fn test_render_catalog_svg() {
    let layers = catalog::layers().unwrap();
    let result = DiagramBuilder::default().render_svg(&layers);

    if let Ok(svg) = result {
        assert!(svg.contains("<svg"), "Output should contain SVG tag");
        assert!(svg.contains("</svg>"), "Output should be complete SVG");
        assert!(svg.contains(r#"width="1120""#));
        assert!(svg.contains(r#"height="990""#));
        for layer in &layers {
            assert!(svg.contains(layer.name()), "missing layer {}", layer.name());
        }
    } else {
        panic!("Failed to render: {:?}", result.err());
    }
}

#[test]
fn test_render_svg_is_deterministic() {
    let layers = catalog::layers().unwrap();
    let builder = DiagramBuilder::default();
    assert_eq!(
        builder.render_svg(&layers).unwrap(),
        builder.render_svg(&layers).unwrap()
    );
}

#[test]
fn test_render_png() {
    let layers = catalog::layers().unwrap();
    let png = DiagramBuilder::default()
        .render(&layers, ImageFormat::Png)
        .unwrap();

    assert_eq!(png[..8], PNG_SIGNATURE);
    let width = u32::from_be_bytes(png[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(png[20..24].try_into().unwrap());
    assert_eq!((width, height), (1120, 990));
}

#[test]
fn test_export_writes_png_at_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(DEFAULT_DIAGRAM_OUTPUT);
    let layers = catalog::layers().unwrap();

    DiagramBuilder::default().export(&layers, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    assert_eq!(bytes[..8], PNG_SIGNATURE);
}

#[test]
fn test_export_svg_extension_writes_svg() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("architecture.svg");
    let layers = catalog::layers().unwrap();

    DiagramBuilder::default().export(&layers, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<svg"));
}

#[test]
fn test_export_empty_layer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    let layers = [Layer::new("Empty", Vec::<String>::new(), "#96CEB4").unwrap()];

    DiagramBuilder::default().export(&layers, &path).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("Empty"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config: AppConfig = toml::from_str("[layout]\nservices_per_row = 0").unwrap();
    let layers = catalog::layers().unwrap();

    let err = DiagramBuilder::new(config).render_svg(&layers).unwrap_err();
    assert!(matches!(err, HealthVitalError::Config(_)));
}

#[test]
fn test_overflowing_layout_is_rejected() {
    let config: AppConfig = toml::from_str("[layout]\nx_range = [-2.0, 2.0]").unwrap();
    let layers = catalog::layers().unwrap();

    let err = DiagramBuilder::new(config).render_svg(&layers).unwrap_err();
    assert!(matches!(err, HealthVitalError::Layout(_)));
    assert!(err.to_string().contains("Presentation"));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("diagram.svg");
    let layers = catalog::layers().unwrap();

    let err = DiagramBuilder::default().export(&layers, &path).unwrap_err();
    assert!(matches!(err, HealthVitalError::Export(_)));
}

#[test]
fn test_spec_export_api() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(specs::DEFAULT_OUTPUT);
    let project = catalog::project();

    let summary = SpecExporter::new(&project).export(&path).unwrap();
    assert_eq!(summary.path(), path.as_path());
    assert_eq!(summary.rows(), project.exported_leaf_count());

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), project.exported_leaf_count() + 1);
}
