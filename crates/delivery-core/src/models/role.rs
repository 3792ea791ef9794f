//! Role domain model.
//!
//! A role is the acting user's fixed identity class. Only three roles carry
//! permissions; any other identifier is kept verbatim as
//! [`Role::Unrecognized`] so it can be logged and reported, but it resolves
//! to no capabilities at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Hr,
    ResourceManager,
    Leadership,
    Unrecognized(String),
}

impl Role {
    /// The roles that have an entry in the permission table.
    pub const RECOGNIZED: [Role; 3] = [Role::Hr, Role::ResourceManager, Role::Leadership];

    pub fn as_str(&self) -> &str {
        match self {
            Role::Hr => "hr",
            Role::ResourceManager => "resource_manager",
            Role::Leadership => "leadership",
            Role::Unrecognized(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unrecognized(_))
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "hr" => Role::Hr,
            "resource_manager" => Role::ResourceManager,
            "leadership" => Role::Leadership,
            other => Role::Unrecognized(other.to_owned()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match Role::from(value.as_str()) {
            Role::Unrecognized(_) => Role::Unrecognized(value),
            known => known,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Unrecognized(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Role::from(s))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
