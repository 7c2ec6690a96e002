use crate::cli::catalog::{ReportMode, check, init, list};
use crate::conf::{DEFAULT_TEMPLATE, load_catalog, template};
use std::fs;
use tempfile::tempdir;

#[test]
fn init_writes_a_loadable_catalog() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("bots").join("catalog.hcl");

    // Act
    init(&path).unwrap();

    // Assert
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, template(DEFAULT_TEMPLATE).unwrap().trim_start());
    assert!(load_catalog(&path).unwrap().catalog.contains("GPTBot"));
}

#[test]
fn init_refuses_to_overwrite() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.hcl");
    fs::write(&path, "mine").unwrap();

    // Act
    let err = init(&path).unwrap_err();

    // Assert
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "mine");
}

#[test]
fn check_summarises_the_builtin_catalog() {
    let out = check(None, ReportMode::Plain).unwrap();

    assert!(out.contains("✔ Catalog <builtin> loaded"));
    assert!(out.contains("✔ match policy: all"));
    assert!(!out.contains("warnings"));
}

#[test]
fn check_reports_warnings() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.hcl");
    fs::write(&path, r#"signatures = ["GPTBot", "GPTBot", "ClaudeBot"]"#).unwrap();

    // Act
    let plain = check(Some(&path), ReportMode::Plain).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&check(Some(&path), ReportMode::Json).unwrap()).unwrap();

    // Assert
    assert!(plain.contains("warning: duplicate signature 'GPTBot'"));
    assert!(plain.contains("✔ 2 signatures"));
    assert!(plain.contains("! 1 warnings"));
    assert_eq!(json["warnings"].as_array().unwrap().len(), 1);
}

#[test]
fn check_fails_on_an_invalid_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.hcl");
    fs::write(&path, r#"signatures = ["GPTBot", ""]"#).unwrap();

    assert!(check(Some(&path), ReportMode::Pretty).is_err());
}

#[test]
fn list_keeps_catalog_order() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.hcl");
    fs::write(&path, r#"signatures = ["Zeta", "Alpha", "Zeta"]"#).unwrap();

    // Act
    let out = list(Some(&path)).unwrap();

    // Assert
    assert_eq!(out, "Zeta\nAlpha\n");
}
