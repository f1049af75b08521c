//! Declarative permission configuration.
//!
//! Permission sets can be declared in TOML and built on demand:
//!
//! ```toml
//! default_role = "default"
//!
//! [permissions.articles]
//! role = "editor"
//! allow = { read = ["anyone"], crud = ["admin"] }
//! deny = { delete = ["guest"] }
//! ```
//!
//! Mode keys use the [`PermissionMode`] names. Sets without a `role` are
//! owned by `default_role`.

use crate::error::{Error, Result};
use crate::mode::PermissionMode;
use crate::permission::PermissionSet;
use crate::role::{DEFAULT_ROLE, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level rolegate configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RolegateConfig {
    /// Role that owns permission sets declaring no role of their own.
    #[serde(default = "default_role_name")]
    pub default_role: String,

    /// Permission sets by name.
    #[serde(default)]
    pub permissions: BTreeMap<String, PermissionConfig>,
}

/// One declared permission set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PermissionConfig {
    /// Owning role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Allowed roles by mode name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub allow: BTreeMap<String, Vec<String>>,

    /// Denied roles by mode name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub deny: BTreeMap<String, Vec<String>>,
}

fn default_role_name() -> String {
    DEFAULT_ROLE.to_string()
}

impl Default for RolegateConfig {
    fn default() -> Self {
        Self {
            default_role: default_role_name(),
            permissions: BTreeMap::new(),
        }
    }
}

impl RolegateConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        log::debug!(
            "loaded {} permission set(s) from {}",
            config.permissions.len(),
            path.display()
        );
        Ok(config)
    }

    /// Checks every declared set for unknown mode names.
    pub fn validate(&self) -> Result<()> {
        for name in self.permissions.keys() {
            self.permission(name)?;
        }
        Ok(())
    }

    /// Names of the declared permission sets, in order.
    pub fn permission_names(&self) -> impl Iterator<Item = &str> {
        self.permissions.keys().map(String::as_str)
    }

    /// Builds the permission set declared under `name`.
    pub fn permission(&self, name: &str) -> Result<PermissionSet> {
        let declared = self
            .permissions
            .get(name)
            .ok_or_else(|| Error::UnknownPermission {
                name: name.to_string(),
            })?;

        let role = declared
            .role
            .as_deref()
            .unwrap_or(self.default_role.as_str());
        let mut permission = PermissionSet::with_role(role);
        for (mode, roles) in &declared.allow {
            permission.allow(parse_mode(name, mode)?, roles.iter().cloned());
        }
        for (mode, roles) in &declared.deny {
            permission.deny(parse_mode(name, mode)?, roles.iter().cloned());
        }
        Ok(permission)
    }

    /// Builds every declared permission set.
    pub fn build_all(&self) -> Result<BTreeMap<String, PermissionSet>> {
        self.permission_names()
            .map(|name| Ok((name.to_string(), self.permission(name)?)))
            .collect()
    }

    /// Declares `permission` under `name`, replacing any previous entry.
    ///
    /// A set owned by `default_role` is written without a `role` key. So is a
    /// set with no owner, which means it is owned by `default_role` once it is
    /// built back through [`permission`](Self::permission).
    pub fn insert_permission(&mut self, name: impl Into<String>, permission: &PermissionSet) {
        let mut declared = PermissionConfig {
            role: permission
                .role()
                .filter(|role| role.as_str() != self.default_role)
                .map(|role| role.to_string()),
            ..PermissionConfig::default()
        };
        for mode in PermissionMode::ATOMIC {
            let allowed = permission.allowed_roles(mode);
            if !allowed.is_empty() {
                declared.allow.insert(mode.to_string(), allowed.to_vec());
            }
            let denied = permission.denied_roles(mode);
            if !denied.is_empty() {
                declared.deny.insert(mode.to_string(), denied.to_vec());
            }
        }
        self.permissions.insert(name.into(), declared);
    }

    /// The configured default role.
    pub fn default_role(&self) -> Role {
        Role::new(self.default_role.as_str())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

fn parse_mode(name: &str, mode: &str) -> Result<PermissionMode> {
    mode.parse::<PermissionMode>()
        .map_err(|e| Error::config(format!("permission set '{name}': {e}")))
}
