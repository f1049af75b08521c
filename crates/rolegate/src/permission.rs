//! Permission sets and their evaluation.
//!
//! A [`PermissionSet`] holds, per [`PermissionMode`], a list of allowed role
//! names and a list of denied role names. Evaluation follows four steps:
//!
//! ```text
//! deny list for mode matches caller  -> denied
//! no allow rules for any mode        -> allowed
//! allow list for mode matches caller -> allowed
//! otherwise                          -> denied
//! ```
//!
//! A caller matches a list when it presents [`ANYONE`] or when one of its
//! roles equals an entry of the list. The wildcard is looked for among the
//! caller's roles, not among the stored entries.

use crate::error::{Error, Result};
use crate::mode::PermissionMode;
use crate::role::{ANYONE, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

type RoleLists = BTreeMap<PermissionMode, Vec<String>>;

/// Allow and deny role lists keyed by permission mode.
///
/// # Examples
///
/// ```
/// use rolegate::{PermissionMode, PermissionSet};
///
/// let mut permission = PermissionSet::new();
/// permission
///     .allow(PermissionMode::Crud, ["admin"])
///     .allow(PermissionMode::Read, ["guest"])
///     .deny(PermissionMode::Read, ["banned"]);
///
/// assert!(permission.has_permission(PermissionMode::Delete, &["admin"]));
/// assert!(permission.has_permission(PermissionMode::Read, &["guest"]));
/// assert!(!permission.has_permission(PermissionMode::Update, &["guest"]));
/// assert!(!permission.has_permission(PermissionMode::Read, &["guest", "banned"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPermissionSet")]
pub struct PermissionSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    allowed_roles: RoleLists,
    denied_roles: RoleLists,
}

impl PermissionSet {
    /// Creates an empty permission set with no owning role.
    ///
    /// An empty set is open: every caller is allowed every mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty permission set owned by `role`.
    pub fn with_role(role: impl Into<Role>) -> Self {
        Self {
            role: Some(role.into()),
            ..Self::default()
        }
    }

    /// Creates an empty permission set owned by the default role.
    pub fn for_default_role() -> Self {
        Self::with_role(Role::default_role())
    }

    /// Returns the role this set belongs to, if any.
    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    /// Sets the owning role.
    pub fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
    }

    /// Allows `roles` for `mode`.
    ///
    /// [`PermissionMode::Crud`] applies to create, read, update and delete.
    /// Duplicates are kept.
    pub fn allow<I, S>(&mut self, mode: PermissionMode, roles: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        log::debug!("allow {mode}: {roles:?}");
        append(&mut self.allowed_roles, mode, &roles);
        self
    }

    /// Denies `roles` for `mode`.
    ///
    /// [`PermissionMode::Crud`] applies to create, read, update and delete.
    pub fn deny<I, S>(&mut self, mode: PermissionMode, roles: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        log::debug!("deny {mode}: {roles:?}");
        append(&mut self.denied_roles, mode, &roles);
        self
    }

    /// By-value form of [`allow`](Self::allow).
    pub fn with_allow<I, S>(mut self, mode: PermissionMode, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow(mode, roles);
        self
    }

    /// By-value form of [`deny`](Self::deny).
    pub fn with_deny<I, S>(mut self, mode: PermissionMode, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deny(mode, roles);
        self
    }

    /// Merges `other` and `self` into a new set.
    ///
    /// `other` is applied first and `self` second: for every mode the
    /// result's lists are `other`'s entries followed by `self`'s. Nothing is
    /// deduplicated, so a deny on either side survives the merge. The result
    /// is owned by `self`'s role, even when `self` has none. Neither operand
    /// is modified.
    pub fn concat(&self, other: &PermissionSet) -> PermissionSet {
        let mut merged = PermissionSet {
            role: self.role.clone(),
            ..PermissionSet::default()
        };
        merged.append_rules(other);
        merged.append_rules(self);
        log::debug!(
            "merged permission sets: {} allow, {} deny entries",
            merged.allowed_roles.values().map(Vec::len).sum::<usize>(),
            merged.denied_roles.values().map(Vec::len).sum::<usize>(),
        );
        merged
    }

    /// Like [`concat`](Self::concat), treating `None` as an empty set.
    pub fn concat_optional(&self, other: Option<&PermissionSet>) -> PermissionSet {
        match other {
            Some(other) => self.concat(other),
            None => self.concat(&PermissionSet::default()),
        }
    }

    /// Decides whether a caller holding `caller_roles` may perform `mode`.
    pub fn has_permission<S: AsRef<str>>(&self, mode: PermissionMode, caller_roles: &[S]) -> bool {
        let denied = self.denied_roles(mode);
        if !denied.is_empty() && matches_any(denied, caller_roles) {
            log::trace!("{mode}: denied by deny rule");
            return false;
        }

        if self.is_open() {
            log::trace!("{mode}: allowed, no allow rules defined");
            return true;
        }

        let allowed = self.allowed_roles(mode);
        if !allowed.is_empty() && matches_any(allowed, caller_roles) {
            log::trace!("{mode}: allowed by allow rule");
            return true;
        }

        log::trace!("{mode}: denied, no matching allow rule");
        false
    }

    /// Like [`has_permission`](Self::has_permission), returning
    /// [`Error::PermissionDenied`] on a negative decision.
    pub fn check<S: AsRef<str>>(&self, mode: PermissionMode, caller_roles: &[S]) -> Result<()> {
        if self.has_permission(mode, caller_roles) {
            Ok(())
        } else {
            Err(Error::PermissionDenied)
        }
    }

    /// Roles allowed for `mode`.
    pub fn allowed_roles(&self, mode: PermissionMode) -> &[String] {
        self.allowed_roles
            .get(&mode)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Roles denied for `mode`.
    pub fn denied_roles(&self, mode: PermissionMode) -> &[String] {
        self.denied_roles.get(&mode).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` when no allow rule exists for any mode.
    pub fn is_open(&self) -> bool {
        self.allowed_roles.values().all(Vec::is_empty)
    }

    /// Returns `true` when the set holds neither allow nor deny rules.
    pub fn is_empty(&self) -> bool {
        self.is_open() && self.denied_roles.values().all(Vec::is_empty)
    }

    fn append_rules(&mut self, source: &PermissionSet) {
        for (mode, roles) in &source.denied_roles {
            append(&mut self.denied_roles, *mode, roles);
        }
        for (mode, roles) in &source.allowed_roles {
            append(&mut self.allowed_roles, *mode, roles);
        }
    }
}

fn append(lists: &mut RoleLists, mode: PermissionMode, roles: &[String]) {
    if roles.is_empty() {
        return;
    }
    for atomic in mode.expand() {
        lists.entry(*atomic).or_default().extend_from_slice(roles);
    }
}

fn matches_any<S: AsRef<str>>(stored: &[String], caller_roles: &[S]) -> bool {
    caller_roles.iter().map(|role| role.as_ref()).any(|caller| {
        caller == ANYONE || stored.iter().any(|role| role.as_str() == caller)
    })
}

/// Wire form of [`PermissionSet`], normalised through `allow`/`deny` so
/// that `crud` keys and empty lists never survive deserialization.
#[derive(Deserialize)]
struct RawPermissionSet {
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    allowed_roles: RoleLists,
    #[serde(default)]
    denied_roles: RoleLists,
}

impl From<RawPermissionSet> for PermissionSet {
    fn from(raw: RawPermissionSet) -> Self {
        let mut permission = PermissionSet {
            role: raw.role,
            ..PermissionSet::default()
        };
        for (mode, roles) in raw.allowed_roles {
            permission.allow(mode, roles);
        }
        for (mode, roles) in raw.denied_roles {
            permission.deny(mode, roles);
        }
        permission
    }
}
