//! Loading declared permission sets from disk.

use crate::common::{config_file, site_defaults};
use rolegate::{Error, PermissionMode, Role, RolegateConfig};

const POLICY: &str = r#"
default_role = "default"

[permissions.site]
allow = { crud = ["admin"], read = ["member"] }
deny = { create = ["suspended"], update = ["suspended"] }

[permissions.draft]
role = "author"
allow = { update = ["author"] }
deny = { read = ["member"] }
"#;

#[test]
fn test_load_matches_programmatic_sets() {
    let file = config_file(POLICY);
    let config = RolegateConfig::load(file.path()).unwrap();

    let site = config.permission("site").unwrap();
    assert_eq!(site, site_defaults());

    let draft = config.permission("draft").unwrap();
    assert_eq!(draft.role(), Some(&Role::new("author")));
    let merged = draft.concat(&site);
    assert!(!merged.has_permission(PermissionMode::Read, &["member"]));
    assert!(merged.has_permission(PermissionMode::Update, &["author"]));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = RolegateConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_load_malformed_file() {
    let file = config_file("[permissions.site\nallow = ");
    let err = RolegateConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn test_load_rejects_unknown_mode() {
    let file = config_file("[permissions.site]\ndeny = { archive = [\"guest\"] }\n");
    let err = RolegateConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("archive"), "got: {err}");
}

#[test]
fn test_written_config_loads_back() {
    let mut config = RolegateConfig::default();
    config.insert_permission("site", &site_defaults());
    let file = config_file(&config.to_toml_string().unwrap());

    let loaded = RolegateConfig::load(file.path()).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.permission("site").unwrap(), site_defaults());
}
