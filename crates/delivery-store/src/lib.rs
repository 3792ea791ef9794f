//! Delivery Store — the in-memory, permission-gated data store behind the
//! delivery dashboards.
//!
//! This crate provides:
//! - [`DataSyncStore`], implementing the `delivery-core` repository traits
//! - Read filtering hooks ([`RedactionPolicy`], [`FinancialRedaction`])
//! - Store configuration ([`StoreConfig`])
//! - The demo dataset ([`seed::demo_dataset`])

mod config;
mod redaction;
pub mod seed;
mod store;

pub use config::StoreConfig;
pub use redaction::{FinancialRedaction, RedactionPolicy};
pub use store::DataSyncStore;
