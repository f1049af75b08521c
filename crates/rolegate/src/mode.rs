//! Permission modes.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of action a permission governs.
///
/// [`PermissionMode::Crud`] is shorthand for all four atomic modes. It is
/// expanded when rules are added and is never stored as a key itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionMode {
    /// Create a resource
    Create,
    /// Read a resource
    Read,
    /// Update a resource
    Update,
    /// Delete a resource
    Delete,
    /// Create, read, update and delete
    Crud,
}

impl PermissionMode {
    /// The four atomic modes.
    pub const ATOMIC: [PermissionMode; 4] = [
        PermissionMode::Create,
        PermissionMode::Read,
        PermissionMode::Update,
        PermissionMode::Delete,
    ];

    /// Every mode, composite included.
    pub const ALL: [PermissionMode; 5] = [
        PermissionMode::Create,
        PermissionMode::Read,
        PermissionMode::Update,
        PermissionMode::Delete,
        PermissionMode::Crud,
    ];

    /// Returns the lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionMode::Create => "create",
            PermissionMode::Read => "read",
            PermissionMode::Update => "update",
            PermissionMode::Delete => "delete",
            PermissionMode::Crud => "crud",
        }
    }

    /// Returns `true` for [`PermissionMode::Crud`].
    pub fn is_composite(&self) -> bool {
        matches!(self, PermissionMode::Crud)
    }

    /// Expands the mode into the atomic modes it covers.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolegate::PermissionMode;
    ///
    /// assert_eq!(PermissionMode::Read.expand(), &[PermissionMode::Read]);
    /// assert_eq!(PermissionMode::Crud.expand().len(), 4);
    /// ```
    pub fn expand(&self) -> &'static [PermissionMode] {
        match self {
            PermissionMode::Create => &[PermissionMode::Create],
            PermissionMode::Read => &[PermissionMode::Read],
            PermissionMode::Update => &[PermissionMode::Update],
            PermissionMode::Delete => &[PermissionMode::Delete],
            PermissionMode::Crud => &Self::ATOMIC,
        }
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionMode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::InvalidMode {
                value: s.to_string(),
            })
    }
}
