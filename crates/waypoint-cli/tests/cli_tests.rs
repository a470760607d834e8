use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a `wp` command isolated in `dir` with plain
/// output
fn wp_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wp").expect("Failed to find wp binary");
    cmd.env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .arg("--no-color")
        .arg("--database-file")
        .arg(dir.join("cli_test.db"));
    cmd
}

/// Runs a create command and returns the ID from "Created X with ID: <id>".
fn create_and_extract_id(dir: &Path, args: &[&str]) -> String {
    let output = wp_cmd(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).expect("Invalid UTF-8");
    output
        .lines()
        .find_map(|line| line.split_once("with ID: ").map(|(_, id)| id.trim()))
        .expect("No ID in output")
        .to_string()
}

#[test]
fn test_cli_list_empty_planners() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(temp_dir.path())
        .args(["planner", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No planners found."));
}

#[test]
fn test_cli_planner_goal_plan_flow() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    let planner_id =
        create_and_extract_id(dir, &["planner", "create", "Fitness", "--owner", "alice"]);
    let goal_id = create_and_extract_id(
        dir,
        &[
            "goal",
            "create",
            "Run a marathon",
            "--deadline",
            "2022-12-31",
            "--planner-id",
            &planner_id,
        ],
    );
    let plan_id = create_and_extract_id(
        dir,
        &[
            "plan",
            "create",
            "Long run",
            "--goal-id",
            &goal_id,
            "--date",
            "2022-06-05",
            "--time",
            "06:45",
            "--task",
            "Pack water",
        ],
    );

    wp_cmd(dir)
        .args(["goal", "find-planner", &planner_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Run a marathon"))
        .stdout(predicate::str::contains("2022-12-31"));

    wp_cmd(dir)
        .args(["plan", "show", &plan_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Long run"))
        .stdout(predicate::str::contains("Pack water"));

    wp_cmd(dir)
        .args(["planner", "find-owner", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Fitness"));
}

#[test]
fn test_cli_task_lifecycle() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    let task_id = create_and_extract_id(
        dir,
        &["task", "create", "Buy shoes", "--owner", "bob"],
    );

    wp_cmd(dir)
        .args(["task", "complete", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated Task with ID:"));

    wp_cmd(dir)
        .args(["task", "find-owner", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy shoes (✓ Completed)"));

    wp_cmd(dir)
        .args(["task", "delete", &task_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted Task with ID:"));

    wp_cmd(dir)
        .args(["task", "delete", &task_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_version_snapshot() {
    let temp_dir = create_cli_test_environment();
    let dir = temp_dir.path();

    let goal_id = create_and_extract_id(
        dir,
        &[
            "goal",
            "create",
            "Ship 1.0",
            "--deadline",
            "2022-12-31",
            "--planner-id",
            "6f1c2a57-3a4b-4c1e-9d2f-0a1b2c3d4e5f",
        ],
    );
    let version_id = create_and_extract_id(
        dir,
        &[
            "version",
            "create",
            &goal_id,
            "--version",
            "1.0.0",
            "--created-by",
            "carol",
        ],
    );

    wp_cmd(dir)
        .args(["version", "show", &version_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Version 1.0.0"))
        .stdout(predicate::str::contains("Ship 1.0"));
}

#[test]
fn test_cli_rejects_invalid_deadline() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(temp_dir.path())
        .args([
            "goal",
            "create",
            "Someday",
            "--deadline",
            "invalid-date",
            "--planner-id",
            "6f1c2a57-3a4b-4c1e-9d2f-0a1b2c3d4e5f",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deadline"));
}

#[test]
fn test_cli_rejects_malformed_id() {
    let temp_dir = create_cli_test_environment();

    wp_cmd(temp_dir.path())
        .args(["task", "show", "not-a-uuid"])
        .assert()
        .failure();
}

#[test]
fn test_cli_missing_explicit_config_fails() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("absent.json");

    wp_cmd(temp_dir.path())
        .arg("--config")
        .arg(&missing)
        .args(["planner", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_cli_database_path_from_config() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("from_config.db");
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(
        &config_path,
        format!(r#"{{"database_path": {:?}}}"#, db_path.to_str().unwrap()),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("wp").expect("Failed to find wp binary");
    cmd.env("XDG_DATA_HOME", temp_dir.path().join("data"))
        .args(["--no-color", "--config"])
        .arg(&config_path)
        .args(["planner", "list"])
        .assert()
        .success();

    assert!(db_path.exists());
}
