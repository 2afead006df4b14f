//! Role check for the report feature.
//!
//! Authentication happens elsewhere; callers pass the role strings their
//! identity provider returned and get a yes/no answer.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Case-insensitive parse of a role string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

/// Roles allowed to use the report feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    pub allowed_roles: Vec<UserRole>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            allowed_roles: vec![UserRole::Admin, UserRole::User],
        }
    }
}

impl AccessPolicy {
    pub fn new(allowed_roles: Vec<UserRole>) -> Self {
        Self { allowed_roles }
    }

    /// Roles the caller effectively holds. Unknown strings are dropped; a
    /// caller with no roles at all is treated as a plain user.
    pub fn effective_roles(roles: &[String]) -> Vec<UserRole> {
        if roles.is_empty() {
            return vec![UserRole::User];
        }

        roles
            .iter()
            .filter_map(|raw| {
                let role = UserRole::parse(raw);
                if role.is_none() {
                    warn!(role = %raw, "ignoring unknown role");
                }
                role
            })
            .collect()
    }

    /// Returns `true` if any of `roles` is allowed.
    ///
    /// # Example
    ///
    /// ```
    /// use report_core::{AccessPolicy, UserRole};
    ///
    /// let admins_only = AccessPolicy::new(vec![UserRole::Admin]);
    ///
    /// assert!(admins_only.is_authorized(&["Admin".to_string()]));
    /// assert!(!admins_only.is_authorized(&[]));
    /// ```
    pub fn is_authorized(
        &self,
        roles: &[String],
    ) -> bool {
        let effective = Self::effective_roles(roles);
        let authorized = effective
            .iter()
            .any(|role| self.allowed_roles.contains(role));
        debug!(?effective, authorized, "checked report access");
        authorized
    }
}
