use std::fs;

use tempfile::tempdir;

use healthvital_cli::{Args, Command, run};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn args(command: Command, config: Option<String>) -> Args {
    Args {
        command: Some(command),
        config,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_all_artifacts() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let diagram_path = temp_dir.path().join("healthvital_architecture.png");
    let specs_path = temp_dir.path().join("healthvital_project_specs.csv");

    let command = Command::All {
        diagram_output: diagram_path.to_string_lossy().to_string(),
        specs_output: specs_path.to_string_lossy().to_string(),
    };
    run(&args(command, None)).expect("Generation failed");

    let png = fs::read(&diagram_path).unwrap();
    assert!(!png.is_empty());
    assert_eq!(png[..8], PNG_SIGNATURE);

    let csv = fs::read_to_string(&specs_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Category,Component,Technology/Service,Description")
    );
    assert_eq!(
        lines.next(),
        Some("presentation,frontend_hosting,AWS Amplify,presentation component for frontend_hosting")
    );
    assert_eq!(csv.lines().count(), 62);
    assert!(!csv.contains("Database design specification"));
}

#[test]
fn e2e_smoke_test_svg_diagram() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("architecture.svg");

    let command = Command::Diagram {
        output: output.to_string_lossy().to_string(),
    };
    run(&args(command, None)).expect("Diagram generation failed");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("AI/ML Layer"));
}

#[test]
fn e2e_smoke_test_specs_is_repeatable() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let first = temp_dir.path().join("first.csv");
    let second = temp_dir.path().join("second.csv");

    for path in [&first, &second] {
        let command = Command::Specs {
            output: path.to_string_lossy().to_string(),
        };
        run(&args(command, None)).expect("Spec export failed");
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn e2e_smoke_test_custom_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[style]\ntitle = \"Custom Title\"\nbackground_color = \"#F8F8F8\"\n",
    )
    .unwrap();
    let output = temp_dir.path().join("custom.svg");

    let command = Command::Diagram {
        output: output.to_string_lossy().to_string(),
    };
    run(&args(
        command,
        Some(config_path.to_string_lossy().to_string()),
    ))
    .expect("Diagram generation failed");

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Custom Title"));
    assert!(svg.contains("#f8f8f8"));
}

#[test]
fn e2e_smoke_test_errors() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    // Missing explicit config
    let missing = temp_dir.path().join("missing.toml");
    let command = Command::Diagram {
        output: temp_dir.path().join("diagram.svg").to_string_lossy().to_string(),
    };
    assert!(run(&args(command, Some(missing.to_string_lossy().to_string()))).is_err());
    assert!(!temp_dir.path().join("diagram.svg").exists());

    // Unwritable output location
    let command = Command::Specs {
        output: temp_dir
            .path()
            .join("no_such_dir")
            .join("specs.csv")
            .to_string_lossy()
            .to_string(),
    };
    assert!(run(&args(command, None)).is_err());
}

#[test]
fn e2e_smoke_test_specs_ignores_diagram_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("specs.csv");

    let missing = temp_dir.path().join("missing.toml");
    let invalid = temp_dir.path().join("invalid.toml");
    fs::write(&invalid, "[layout]\nservices_per_row = 0\n").unwrap();

    for config in [missing, invalid] {
        let command = Command::Specs {
            output: output.to_string_lossy().to_string(),
        };
        run(&args(command, Some(config.to_string_lossy().to_string())))
            .expect("Spec export should not read the diagram config");
        assert!(output.exists());
        fs::remove_file(&output).unwrap();
    }
}
