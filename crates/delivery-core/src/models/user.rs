//! User domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::role::Role;

/// The acting user of a dashboard session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}
