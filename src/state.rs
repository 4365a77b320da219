//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::host::{HostIdentity, SystemHost};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub host: Arc<dyn HostIdentity>,
}

impl AppState {
    /// Creates application state that reads the host name from the OS.
    pub fn new(config: AppConfig) -> Self {
        Self::with_host(config, SystemHost)
    }

    /// Creates application state with the given host identity source.
    pub fn with_host(config: AppConfig, host: impl HostIdentity) -> Self {
        Self {
            config: Arc::new(config),
            host: Arc::new(host),
        }
    }
}
