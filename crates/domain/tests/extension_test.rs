use extman_domain::{Extension, SeedExtension};
use serde_json::json;

mod helpers;
use helpers::ExtensionBuilder;

#[test]
fn test_extension_creation() {
    let ext = ExtensionBuilder::new().id(7).name("StyleSpy").active(false).build();

    assert_eq!(ext.id, 7);
    assert_eq!(ext.name.as_ref(), "StyleSpy");
    assert!(!ext.is_active);
    assert_eq!(ext.status_str(), "inactive");
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut ext = ExtensionBuilder::new().active(true).build();
    let original = ext.clone();

    ext.toggle();
    assert!(!ext.is_active);
    assert_eq!(ext.name, original.name);

    ext.toggle();
    assert_eq!(ext, original);
}

// ── seed numbering ────────────────────────────────────────────────────────────

#[test]
fn test_number_seeds_assigns_sequential_ids_from_one() {
    let seeds = vec![
        ExtensionBuilder::new().name("DevLens").build_seed(),
        ExtensionBuilder::new().name("StyleSpy").build_seed(),
        ExtensionBuilder::new().name("SpeedBoost").build_seed(),
    ];

    let extensions = Extension::number_seeds(seeds);

    let ids: Vec<i64> = extensions.iter().map(|e| e.id).collect();
    let names: Vec<&str> = extensions.iter().map(|e| e.name.as_ref()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(names, vec!["DevLens", "StyleSpy", "SpeedBoost"]);
}

#[test]
fn test_number_seeds_empty() {
    assert!(Extension::number_seeds(Vec::new()).is_empty());
}

// ── serialization ─────────────────────────────────────────────────────────────

#[test]
fn test_extension_serializes_with_camel_case_fields() {
    let ext = ExtensionBuilder::new().id(2).active(true).build();

    let value = serde_json::to_value(&ext).unwrap();

    assert_eq!(value["id"], 2);
    assert_eq!(value["isActive"], true);
    assert_eq!(value["logo"], "./assets/images/logo-devlens.svg");
    assert!(value.get("is_active").is_none());
}

#[test]
fn test_seed_defaults_for_missing_fields() {
    let seed: SeedExtension = serde_json::from_value(json!({ "name": "GridGuides" })).unwrap();

    assert_eq!(seed.name.as_ref(), "GridGuides");
    assert_eq!(seed.description.as_ref(), "");
    assert_eq!(seed.logo.as_ref(), "");
    assert!(!seed.is_active);
}

#[test]
fn test_seed_without_name_is_rejected() {
    let result: Result<SeedExtension, _> = serde_json::from_value(json!({ "isActive": true }));
    assert!(result.is_err());
}

// ── parse_id ──────────────────────────────────────────────────────────────────

#[test]
fn test_parse_id_valid() {
    assert_eq!(Extension::parse_id("1"), Ok(1));
    assert_eq!(Extension::parse_id("42"), Ok(42));
}

#[test]
fn test_parse_id_rejects_non_numeric() {
    assert!(Extension::parse_id("abc").is_err());
    assert!(Extension::parse_id("1abc").is_err());
    assert!(Extension::parse_id("").is_err());
    assert!(Extension::parse_id("-1").is_err());
    assert!(Extension::parse_id("1.5").is_err());
    assert!(Extension::parse_id(" 1").is_err());
    assert!(Extension::parse_id("1 ").is_err());
    assert!(Extension::parse_id("+1").is_err());
}

#[test]
fn test_parse_id_rejects_overflow() {
    assert!(Extension::parse_id("99999999999999999999").is_err());
}

// ── validate_name ─────────────────────────────────────────────────────────────

#[test]
fn test_validate_name() {
    assert!(Extension::validate_name("DevLens").is_ok());
    assert!(Extension::validate_name("").is_err());
    assert!(Extension::validate_name("   ").is_err());
    assert!(Extension::validate_name(&"a".repeat(500)).is_ok());
}
