//! Public API tests for configuration loading.

use fitform::config::{load_config, load_merged_config, validate, OutputMode};
use fitform::meals::MealType;
use fitform::FitformError;
use std::fs;
use tempfile::TempDir;

fn project_with(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".fitform");
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
    temp
}

#[test]
fn local_custom_meals_replace_project_list() {
    let temp = project_with(&[
        (
            "config.yml",
            r#"
meals:
  custom:
    - { name: A, recipe: "https://a", kcal: 100, meal_type: dinner }
    - { name: B, recipe: "https://b", kcal: 200, meal_type: dinner }
"#,
        ),
        (
            "config.local.yml",
            r#"
meals:
  custom:
    - { name: C, recipe: "https://c", kcal: 300, meal_type: SUPPER }
"#,
        ),
    ]);

    let config = load_merged_config(temp.path()).unwrap();
    validate(&config).unwrap();

    assert_eq!(config.meals.custom.len(), 1);
    assert_eq!(config.meals.custom[0].meal_type, MealType::Supper);
    assert_eq!(config.meal_catalog().len(), 11);
}

#[test]
fn missing_override_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.yml");
    let err = load_config(temp.path(), Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, FitformError::ConfigNotFound { .. }));
}

#[test]
fn settings_round_trip_through_loader() {
    let temp = project_with(&[(
        "config.yml",
        "settings:\n  default_output: silent\n  non_interactive: true\n",
    )]);
    let config = load_merged_config(temp.path()).unwrap();
    assert_eq!(config.settings.default_output, OutputMode::Silent);
    assert!(config.settings.non_interactive);
}

#[test]
fn unknown_meal_type_is_parse_error() {
    let temp = project_with(&[(
        "config.yml",
        "meals:\n  custom:\n    - { name: X, recipe: y, kcal: 1, meal_type: brunch }\n",
    )]);
    let err = load_merged_config(temp.path()).unwrap_err();
    assert!(matches!(err, FitformError::ConfigParseError { .. }));
}
