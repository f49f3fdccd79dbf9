/// User domain type
use crate::error::KitchenError;
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role
///
/// Only `Chef` may list or manage recipes. Everyone else is a `User`; the
/// legacy spelling `staff` is accepted on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Recipe author
    Chef,
    /// Regular kitchen member
    #[default]
    #[serde(alias = "staff")]
    User,
}

impl Role {
    /// Convert role to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Chef => "chef",
            Role::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chef" => Ok(Role::Chef),
            "user" | "staff" => Ok(Role::User),
            other => Err(KitchenError::invalid_input(format!(
                "Role must be 'chef' or 'user', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered account
///
/// `password` holds whatever the configured password scheme stored and is
/// never serialized back to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Human-readable ID (`U-#####`)
    pub user_id: UserId,

    /// Display name
    pub fullname: String,

    /// Login email, unique across users
    pub email: String,

    /// Stored credential
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Account role
    pub role: Role,

    /// Contact phone
    pub phone: Option<String>,

    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this account may view and manage recipes
    pub fn is_chef(&self) -> bool {
        self.role == Role::Chef
    }
}

/// Data for registering a user; the ID is allocated by storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    /// Display name
    pub fullname: String,
    /// Login email
    pub email: String,
    /// Credential as produced by the password scheme
    pub password: String,
    /// Account role
    pub role: Role,
    /// Contact phone
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_values() {
        assert_eq!("chef".parse::<Role>().unwrap(), Role::Chef);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("staff".parse::<Role>().unwrap(), Role::User);
        assert!("admin".parse::<Role>().is_err());
        assert!("Chef".parse::<Role>().is_err());
    }

    #[test]
    fn role_deserializes_staff_alias() {
        let role: Role = serde_json::from_str("\"staff\"").unwrap();
        assert_eq!(role, Role::User);
        assert_eq!(serde_json::to_string(&Role::Chef).unwrap(), "\"chef\"");
    }

    #[test]
    fn password_is_not_serialized() {
        let user = User {
            user_id: UserId::from_sequence(1),
            fullname: "Alice Chef".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
            role: Role::Chef,
            phone: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userId"], "U-00001");
        assert_eq!(json["role"], "chef");
        assert!(json.get("password").is_none());
    }
}
