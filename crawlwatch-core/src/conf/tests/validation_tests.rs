use crate::catalog::MatchPolicy;
use crate::conf::{CatalogConfig, ConfigError, parse_catalog, validate_catalog};
use pretty_assertions::assert_eq;
use std::path::Path;

fn config(signatures: &[&str]) -> CatalogConfig {
    CatalogConfig {
        signatures: signatures.iter().map(|s| s.to_string()).collect(),
        match_policy: MatchPolicy::All,
        detect_unlisted: false,
    }
}

#[test]
fn empty_catalog_is_an_error() {
    let err = validate_catalog(config(&[]), Path::new("catalog.hcl")).unwrap_err();

    assert!(matches!(err, ConfigError::EmptyCatalog { .. }));
}

#[test]
fn empty_signature_is_an_error() {
    let err = validate_catalog(config(&["GPTBot", ""]), Path::new("catalog.hcl")).unwrap_err();

    assert!(matches!(err, ConfigError::EmptySignature { index: 1, .. }));
}

#[test]
fn duplicates_warn_and_collapse() {
    // Act
    let cfg = validate_catalog(
        config(&["GPTBot", "Googlebot", "GPTBot"]),
        Path::new("catalog.hcl"),
    )
    .unwrap();

    // Assert
    assert_eq!(cfg.catalog.signatures(), ["GPTBot", "Googlebot"]);
    assert_eq!(cfg.report.warnings.len(), 1);
    assert_eq!(cfg.report.warnings[0].index, 2);
    assert!(cfg.report.warnings[0].message.contains("duplicate"));
}

#[test]
fn surrounding_whitespace_warns() {
    let cfg = validate_catalog(config(&[" GPTBot"]), Path::new("catalog.hcl")).unwrap();

    assert_eq!(cfg.report.warnings.len(), 1);
    assert!(cfg.catalog.contains(" GPTBot"));
}

#[test]
fn report_renders_plain_and_json() {
    // Arrange
    let cfg = validate_catalog(
        config(&["GPTBot", "GPTBot"]),
        Path::new("bots/catalog.hcl"),
    )
    .unwrap();

    // Act
    let plain = cfg.report.render_plain();
    let json: serde_json::Value =
        serde_json::from_str(&cfg.report.render_json().unwrap()).unwrap();

    // Assert
    assert!(plain.starts_with("bots/catalog.hcl:warning: duplicate signature 'GPTBot'"));
    assert_eq!(json["warnings"][0]["index"], 1);
    assert!(!cfg.report.render_pretty().is_empty());
}

#[test]
fn clean_report_renders_nothing() {
    let cfg = validate_catalog(config(&["GPTBot"]), Path::new("catalog.hcl")).unwrap();

    assert!(cfg.report.render_plain().is_empty());
    assert!(cfg.report.render_pretty().is_empty());
}

#[test]
fn parse_reports_hcl_syntax_errors() {
    let err = parse_catalog("signatures = [", Path::new("broken.hcl")).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_signatures_is_a_parse_error() {
    let err = parse_catalog("match_policy = \"all\"", Path::new("broken.hcl")).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}
