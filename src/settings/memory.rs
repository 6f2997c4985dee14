//! In-memory settings store adapter.

use super::key::{SettingKey, SettingScope};
use super::store::{SettingsError, SettingsResult, SettingsStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory settings store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    state: Arc<RwLock<HashMap<(SettingScope, SettingKey), String>>>,
}

impl InMemorySettingsStore {
    /// Creates an empty in-memory settings store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, scope: &SettingScope, key: &SettingKey) -> SettingsResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| SettingsError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&(scope.clone(), key.clone())).cloned())
    }

    async fn put(&self, scope: &SettingScope, key: &SettingKey, value: &str) -> SettingsResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SettingsError::unavailable(std::io::Error::other(err.to_string())))?;
        state.insert((scope.clone(), key.clone()), value.to_owned());
        Ok(())
    }

    async fn remove(&self, scope: &SettingScope, key: &SettingKey) -> SettingsResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SettingsError::unavailable(std::io::Error::other(err.to_string())))?;
        state.remove(&(scope.clone(), key.clone()));
        Ok(())
    }
}
