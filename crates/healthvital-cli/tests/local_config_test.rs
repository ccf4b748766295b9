//! Runs in its own test binary because it changes the working directory.

use std::{env, fs};

use tempfile::tempdir;

use healthvital_cli::{Args, Command, run};

fn args(command: Command) -> Args {
    Args {
        command: Some(command),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn invalid_local_config_blocks_only_the_diagram() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::create_dir(temp_dir.path().join("healthvital")).unwrap();
    fs::write(
        temp_dir.path().join("healthvital").join("config.toml"),
        "[layout]\nservices_per_row = 0\n",
    )
    .unwrap();

    let previous = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).unwrap();

    let specs = run(&args(Command::Specs {
        output: "out.csv".to_string(),
    }));
    let diagram = run(&args(Command::Diagram {
        output: "out.svg".to_string(),
    }));

    env::set_current_dir(previous).unwrap();

    specs.expect("Spec export should ignore the diagram config");
    let csv = fs::read_to_string(temp_dir.path().join("out.csv")).unwrap();
    assert_eq!(csv.lines().count(), 62);

    assert!(diagram.is_err());
    assert!(!temp_dir.path().join("out.svg").exists());
}
