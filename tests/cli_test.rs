//! Integration tests for the fitform binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fitform(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("fitform"));
    cmd.current_dir(dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".fitform");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fitform(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Body-metrics form"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fitform(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_complete_form_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fitform(&temp)
        .args(["check", "--age", "30", "--weight", "70", "--height", "180"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All required fields are filled in"))
        .stderr(predicate::str::contains("Please fill out").not());
    Ok(())
}

#[test]
fn check_missing_age_alerts_and_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fitform(&temp)
        .args(["check", "--age", "", "--weight", "70", "--height", "180"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Please fill out the following fields:\nAge\n",
        ));
    Ok(())
}

#[test]
fn check_all_missing_lists_fields_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fitform(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Please fill out the following fields:\nAge\nWeight\nHeight",
        ));
    Ok(())
}

#[test]
fn check_zeros_pass() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fitform(&temp)
        .args(["check", "--age", "0", "--weight", "0", "--height", "0"])
        .assert()
        .success();
    Ok(())
}

#[test]
fn report_prints_bmi() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fitform(&temp)
        .args(["report", "--age", "30", "--weight", "70", "--height", "180"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BMI: 21.6 (Normal Weight)"))
        .stdout(predicate::str::contains("Daily calories: 2016 kcal"));
    Ok(())
}

#[test]
fn report_blocked_by_missing_height() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fitform(&temp)
        .args(["report", "--age", "30", "--weight", "70"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("BMI").not())
        .stderr(predicate::str::contains("Height"));
    Ok(())
}

#[test]
fn report_prompt_reads_env_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fitform(&temp)
        .args(["report", "--prompt", "--age", "30", "--json"])
        .env("FITFORM_PROMPT_WEIGHT", "70")
        .env("FITFORM_PROMPT_HEIGHT", "180")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bmi\": 21.6"));
    Ok(())
}

#[test]
fn meals_with_seed_is_reproducible() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let first = fitform(&temp)
        .args(["meals", "--max-kcal", "2100", "--seed", "4"])
        .output()?;
    let second = fitform(&temp)
        .args(["meals", "--max-kcal", "2100", "--seed", "4"])
        .output()?;

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}

#[test]
fn meals_uses_configured_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
meals:
  include_builtin: false
  custom:
    - name: Porridge
      recipe: https://example.com/porridge
      kcal: 300
      meal_type: breakfast
"#,
    );
    fitform(&temp)
        .args(["meals", "--max-kcal", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breakfast: Porridge"))
        .stdout(predicate::str::contains("Dinner: no suitable meal found"));
    Ok(())
}

#[test]
fn invalid_config_exits_with_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings: [unclosed");
    fitform(&temp)
        .args(["check", "--age", "1", "--weight", "1", "--height", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn config_shows_resolved_settings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings:\n  default_output: verbose\n");
    fitform(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default_output: verbose"));
    Ok(())
}

#[test]
fn completions_generate_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fitform(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fitform"));
    Ok(())
}

#[test]
fn silent_config_still_prints_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings:\n  default_output: silent\n");
    fitform(&temp)
        .args(["report", "--age", "30", "--weight", "70", "--height", "180", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bmi\": 21.6"));
    fitform(&temp)
        .args(["meals", "--max-kcal", "1500", "--seed", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_kcal\": 1500.0"));
    Ok(())
}

#[test]
fn silent_config_applies_to_every_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings:\n  default_output: silent\n");
    fitform(&temp)
        .args(["check", "--age", "30", "--weight", "70", "--height", "180"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All required fields").not());
    fitform(&temp)
        .args(["meals", "--max-kcal", "1500", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal suggestions").not())
        .stdout(predicate::str::contains("Breakfast").not());
    fitform(&temp)
        .args(["check", "--age", "", "--weight", "70", "--height", "180"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please fill out the following fields:\nAge"));
    Ok(())
}

#[test]
fn verbose_flag_overrides_silent_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("settings:\n  default_output: silent\n");
    fitform(&temp)
        .args(["--verbose", "report", "--age", "30", "--weight", "70", "--height", "180"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Age: 30"))
        .stdout(predicate::str::contains("BMI: 21.6"));
    Ok(())
}

#[test]
fn report_prompt_selects_gender_and_activity() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fitform(&temp)
        .args(["--verbose", "report", "--prompt", "--age", "30", "--weight", "70"])
        .args(["--height", "180"])
        .env("FITFORM_PROMPT_GENDER", "female")
        .env("FITFORM_PROMPT_ACTIVITY", "athlete")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gender: Female"))
        .stdout(predicate::str::contains("Activity: Athlete"));
    Ok(())
}
