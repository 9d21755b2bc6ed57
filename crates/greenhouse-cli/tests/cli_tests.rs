use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and the data file set
fn greenhouse_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("greenhouse").expect("Failed to find greenhouse binary");
    cmd.env_remove("GREENHOUSE_CARETAKER")
        .arg("--no-color")
        .arg("--data-file")
        .arg(temp_dir.path().join("data.json"));
    cmd
}

/// Runs a create command and extracts the ID from its confirmation line
fn create_and_get_id(temp_dir: &TempDir, args: &[&str]) -> u64 {
    let output = greenhouse_cmd(temp_dir)
        .args(args)
        .output()
        .expect("Failed to run greenhouse");
    assert!(output.status.success(), "command failed: {args:?}");

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output");
    stdout
        .lines()
        .find_map(|line| line.split("with ID: ").nth(1))
        .and_then(|id| id.trim().parse().ok())
        .expect("No ID in output")
}

#[test]
fn test_cli_add_plant_success() {
    let temp_dir = create_cli_test_environment();

    greenhouse_cmd(&temp_dir)
        .args(["plant", "add", "Basil", "--strain", "Genovese"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plant with ID:"))
        .stdout(predicate::str::contains("Basil"))
        .stdout(predicate::str::contains("- Strain: Genovese"))
        .stdout(predicate::str::contains("- Stage: Seedling"));
}

#[test]
fn test_cli_add_plant_rejects_unknown_stage() {
    let temp_dir = create_cli_test_environment();

    greenhouse_cmd(&temp_dir)
        .args(["plant", "add", "Basil", "--stage", "sprouting"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid growth stage"));
}

#[test]
fn test_cli_list_empty_plants() {
    let temp_dir = create_cli_test_environment();

    greenhouse_cmd(&temp_dir)
        .args(["plant", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plants found."));
}

#[test]
fn test_cli_log_and_show_plant() {
    let temp_dir = create_cli_test_environment();
    let id = create_and_get_id(&temp_dir, &["plant", "add", "Tomato"]);
    let id_arg = id.to_string();

    greenhouse_cmd(&temp_dir)
        .args([
            "plant",
            "log",
            &id_arg,
            "water",
            "--note",
            "deep soak",
            "--caretaker",
            "Alice",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged water with ID:"));

    greenhouse_cmd(&temp_dir)
        .args(["plant", "show", &id_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("# {id}. Tomato")))
        .stdout(predicate::str::contains("**water** by Alice: deep soak"))
        .stdout(predicate::str::contains("No feeding recorded yet."));
}

#[test]
fn test_cli_log_unknown_plant_fails() {
    let temp_dir = create_cli_test_environment();

    greenhouse_cmd(&temp_dir)
        .args(["plant", "log", "12345", "feed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plant with ID 12345 not found"));
}

#[test]
fn test_cli_delete_plant() {
    let temp_dir = create_cli_test_environment();
    let id = create_and_get_id(&temp_dir, &["plant", "add", "Mint"]);

    greenhouse_cmd(&temp_dir)
        .args(["plant", "delete", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted plant 'Mint' (ID: {id})")));

    greenhouse_cmd(&temp_dir)
        .args(["plant", "delete", &id.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_profiles() {
    let temp_dir = create_cli_test_environment();

    greenhouse_cmd(&temp_dir)
        .args(["profile", "add", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created profile with ID:"))
        .stdout(predicate::str::contains("`#5a8a5e`"));

    greenhouse_cmd(&temp_dir)
        .args(["profile", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn test_cli_category_lifecycle() {
    let temp_dir = create_cli_test_environment();
    let id = create_and_get_id(&temp_dir, &["category", "add", "Herbs", "--water", "2"]);
    let id_arg = id.to_string();

    greenhouse_cmd(&temp_dir)
        .args(["category", "update", &id_arg, "--feed", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Feeding every 14 days"))
        .stdout(predicate::str::contains(
            "Herbs: water every 2 days, feed every 14 days",
        ));

    greenhouse_cmd(&temp_dir)
        .args(["category", "update", &id_arg])
        .assert()
        .failure();

    greenhouse_cmd(&temp_dir)
        .args(["category", "delete", &id_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted category 'Herbs'"));

    greenhouse_cmd(&temp_dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories found."));
}

#[test]
fn test_cli_default_command_shows_schedule() {
    let temp_dir = create_cli_test_environment();

    greenhouse_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing due."));

    create_and_get_id(&temp_dir, &["plant", "add", "Basil"]);

    greenhouse_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("**Water** Basil (Unassigned)"))
        .stdout(predicate::str::contains("**Feed** Basil (Unassigned)"));
}

#[test]
fn test_cli_assign_task() {
    let temp_dir = create_cli_test_environment();
    let plant = create_and_get_id(&temp_dir, &["plant", "add", "Basil"]);
    let profile = create_and_get_id(&temp_dir, &["profile", "add", "Bob"]);

    // A new plant is due today; read the key from the schedule
    let output = greenhouse_cmd(&temp_dir)
        .args(["schedule", "--horizon", "0"])
        .output()
        .expect("Failed to run greenhouse");
    let stdout = String::from_utf8(output.stdout).unwrap();
    let key = stdout
        .lines()
        .filter_map(|line| line.split('`').nth(1))
        .find(|key| key.starts_with(&format!("{plant}:water:")))
        .expect("Watering task missing")
        .to_string();

    greenhouse_cmd(&temp_dir)
        .args(["assign", &key, "--profile", &profile.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Success: Task {key} assigned to profile {profile}"
        )));

    greenhouse_cmd(&temp_dir)
        .args(["schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Water** Basil (Bob)"));

    greenhouse_cmd(&temp_dir)
        .args(["assign", &key])
        .assert()
        .success()
        .stdout(predicate::str::contains("returned to automatic rotation"));
}

#[test]
fn test_cli_assign_rejects_bad_key() {
    let temp_dir = create_cli_test_environment();

    greenhouse_cmd(&temp_dir)
        .args(["assign", "not-a-key", "--profile", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("task_key"));
}

#[test]
fn test_cli_data_file_from_env() {
    let temp_dir = create_cli_test_environment();
    let data_file = temp_dir.path().join("env.json");

    Command::cargo_bin("greenhouse")
        .expect("Failed to find greenhouse binary")
        .env("GREENHOUSE_DATA_FILE", &data_file)
        .args(["--no-color", "plant", "add", "Sage"])
        .assert()
        .success();

    assert!(data_file.exists());
    let contents = std::fs::read_to_string(&data_file).unwrap();
    assert!(contents.contains("\"Sage\""));
}
