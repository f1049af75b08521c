//! Role identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wildcard role name.
///
/// A caller presenting this role matches every rule list it is checked
/// against, both allow and deny.
pub const ANYONE: &str = "anyone";

/// Name of the library-wide default role.
pub const DEFAULT_ROLE: &str = "default";

/// Identifier of a role that owns a permission set.
///
/// Role names are compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Creates a role from its name.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolegate::Role;
    ///
    /// let role = Role::new("editor");
    /// assert_eq!(role.as_str(), "editor");
    /// ```
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// The role named [`DEFAULT_ROLE`].
    pub fn default_role() -> Self {
        Self::new(DEFAULT_ROLE)
    }

    /// The wildcard role named [`ANYONE`].
    pub fn anyone() -> Self {
        Self::new(ANYONE)
    }

    /// Returns the role name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the wildcard role.
    pub fn is_anyone(&self) -> bool {
        self.0 == ANYONE
    }

    /// Converts into the inner name.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::default_role()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.0
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
