//! Delivery Auth — demo account login and session tracking.
//!
//! There is no credential store behind this crate: accounts come from
//! [`AuthConfig`] and sessions live in memory.

pub mod config;
pub mod error;
pub mod password;
pub mod service;

pub use config::{AuthConfig, DemoAccount};
pub use error::AuthError;
pub use service::{AuthService, LoginInput};
