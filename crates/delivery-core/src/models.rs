//! Domain models for the delivery desk.
//!
//! These are the core types shared across all crates.

pub mod event;
pub mod kpi;
pub mod permission;
pub mod project;
pub mod resource;
pub mod role;
pub mod session;
pub mod user;
