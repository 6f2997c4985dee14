//! Settings store port.

use super::key::{SettingKey, SettingScope};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for settings store operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Scoped key-value storage contract.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Returns the stored value for `(scope, key)`, if any.
    async fn get(&self, scope: &SettingScope, key: &SettingKey) -> SettingsResult<Option<String>>;

    /// Stores `value` under `(scope, key)`, replacing any previous value.
    async fn put(&self, scope: &SettingScope, key: &SettingKey, value: &str) -> SettingsResult<()>;

    /// Removes the value under `(scope, key)`, if present.
    async fn remove(&self, scope: &SettingScope, key: &SettingKey) -> SettingsResult<()>;
}

/// Errors returned by settings store implementations.
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    /// The backing store failed.
    #[error("settings store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl SettingsError {
    /// Wraps a backing-store failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
