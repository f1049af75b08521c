//! Merging site-wide rules with per-resource overrides.

use crate::common::{draft_overrides, site_defaults};
use rolegate::{ANYONE, Error, PermissionMode, PermissionSet, Role};

#[test]
fn test_site_defaults() {
    let site = site_defaults();

    for mode in PermissionMode::ATOMIC {
        assert!(site.has_permission(mode, &["admin"]), "admin {mode}");
    }
    assert!(site.has_permission(PermissionMode::Read, &["member"]));
    assert!(!site.has_permission(PermissionMode::Delete, &["member"]));
    assert!(!site.has_permission(PermissionMode::Update, &["admin", "suspended"]));
    assert!(site.has_permission(PermissionMode::Read, &["suspended", "member"]));
}

#[test]
fn test_draft_merged_over_site_defaults() {
    let site = site_defaults();
    let draft = draft_overrides().concat(&site);

    assert_eq!(draft.role(), Some(&Role::new("author")));
    assert!(draft.has_permission(PermissionMode::Update, &["author"]));
    assert!(!draft.has_permission(PermissionMode::Read, &["member"]));
    assert!(draft.has_permission(PermissionMode::Read, &["admin"]));
    assert!(!draft.has_permission(PermissionMode::Update, &["author", "suspended"]));

    // Site rules are untouched by the merge.
    assert!(site.has_permission(PermissionMode::Read, &["member"]));
    assert!(!site.has_permission(PermissionMode::Update, &["author"]));
}

#[test]
fn test_merge_direction_only_changes_order_and_owner() {
    let site = site_defaults();
    let draft = draft_overrides();

    let forward = draft.concat(&site);
    let backward = site.concat(&draft);

    assert_eq!(forward.role(), Some(&Role::new("author")));
    assert_eq!(backward.role(), Some(&Role::default_role()));
    for mode in PermissionMode::ATOMIC {
        for caller in ["admin", "member", "author", "suspended", "guest", ANYONE] {
            assert_eq!(
                forward.has_permission(mode, &[caller]),
                backward.has_permission(mode, &[caller]),
                "{caller} {mode}"
            );
        }
    }
}

#[test]
fn test_caller_wildcard_against_merged_rules() {
    let draft = draft_overrides().concat(&site_defaults());

    // Any deny list for the mode catches the wildcard.
    assert!(!draft.has_permission(PermissionMode::Read, &[ANYONE]));
    assert!(!draft.has_permission(PermissionMode::Update, &[ANYONE]));
    // Delete has allow entries and no deny entries.
    assert!(draft.has_permission(PermissionMode::Delete, &[ANYONE]));
}

#[test]
fn test_merging_with_nothing() {
    let site = site_defaults();
    assert_eq!(site.concat_optional(None), site);
    assert_eq!(site.concat(&PermissionSet::new()), site);
}

#[test]
fn test_check_for_request_handlers() {
    let draft = draft_overrides().concat(&site_defaults());

    let caller = vec!["member".to_string()];
    let result = draft.check(PermissionMode::Read, caller.as_slice());
    assert!(matches!(result, Err(Error::PermissionDenied)));
    assert!(draft.check(PermissionMode::Delete, &["admin"]).is_ok());
}
