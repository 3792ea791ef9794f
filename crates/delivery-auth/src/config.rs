//! Authentication configuration.

use delivery_core::models::role::Role;

/// A login the demo directory accepts.
#[derive(Debug, Clone)]
pub struct DemoAccount {
    pub name: String,
    pub email: String,
    /// Raw password (hashed with Argon2id when the service starts).
    pub password: String,
    pub role: Role,
}

impl DemoAccount {
    pub fn new(name: &str, email: &str, password: &str, role: impl Into<Role>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role: role.into(),
        }
    }
}

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Optional pepper prepended to passwords before hashing.
    pub pepper: Option<String>,
    /// Session lifetime in seconds (default: 28_800 = 8 hours).
    pub session_lifetime_secs: u64,
    pub accounts: Vec<DemoAccount>,
}

impl Default for AuthConfig {
    /// The four demo logins of the dashboard. `delivery_owner` has no
    /// permission entry and therefore logs in with no capabilities.
    fn default() -> Self {
        Self {
            pepper: None,
            session_lifetime_secs: 28_800,
            accounts: vec![
                DemoAccount::new("Sarah Johnson", "hr@zapcg.com", "hr123", "hr"),
                DemoAccount::new(
                    "Michael Chen",
                    "manager@zapcg.com",
                    "manager123",
                    "resource_manager",
                ),
                DemoAccount::new(
                    "David Kumar",
                    "leadership@zapcg.com",
                    "leadership123",
                    "leadership",
                ),
                DemoAccount::new("Alex Rodriguez", "pm@zapcg.com", "pm123", "delivery_owner"),
            ],
        }
    }
}
