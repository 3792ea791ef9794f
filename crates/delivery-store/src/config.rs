//! Data store configuration.

/// Configuration for a [`DataSyncStore`](crate::DataSyncStore).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Load the demo projects and resources at construction.
    pub seed_demo_data: bool,
    /// Buffered change events per subscriber before the slowest one
    /// starts lagging (default: 64).
    pub event_capacity: usize,
}

impl StoreConfig {
    /// An empty store, as used by most tests.
    pub fn empty() -> Self {
        Self {
            seed_demo_data: false,
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            event_capacity: 64,
        }
    }
}
