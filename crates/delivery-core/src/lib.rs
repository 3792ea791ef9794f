//! Delivery Core — domain models, the role capability resolver and the
//! repository traits shared by the store and auth crates.

pub mod error;
pub mod models;
pub mod rbac;
pub mod repository;

pub use error::{DeliveryError, DeliveryResult};
pub use rbac::{AccessRequirement, Operation, capabilities_for};
