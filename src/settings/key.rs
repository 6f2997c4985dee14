//! Validated scope and key types for the settings store.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors returned while constructing settings identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsDomainError {
    /// The scope is empty or contains characters outside `[a-z0-9_]`.
    #[error("invalid setting scope: '{0}'")]
    InvalidScope(String),

    /// The key is empty or contains characters outside `[a-z0-9_]`.
    #[error("invalid setting key: '{0}'")]
    InvalidKey(String),
}

fn normalize(value: &str) -> Option<String> {
    let normalized = value.trim().to_ascii_lowercase();
    let is_valid = !normalized.is_empty()
        && normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    is_valid.then_some(normalized)
}

/// Namespace a setting belongs to (e.g. `laser`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingScope(String);

impl SettingScope {
    /// Scope holding laser workflow preferences.
    #[must_use]
    pub fn laser() -> Self {
        Self("laser".to_owned())
    }

    /// Creates a validated scope.
    ///
    /// The input is trimmed and lowercased; only `[a-z0-9_]` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsDomainError::InvalidScope`] for empty or malformed
    /// input.
    pub fn new(value: impl Into<String>) -> Result<Self, SettingsDomainError> {
        let raw = value.into();
        normalize(&raw)
            .map(Self)
            .ok_or(SettingsDomainError::InvalidScope(raw))
    }

    /// Returns the scope as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a single setting within a scope (e.g. `default_sender`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingKey(String);

impl SettingKey {
    /// Key for the sender name prefilled into new entries.
    #[must_use]
    pub fn default_sender() -> Self {
        Self("default_sender".to_owned())
    }

    /// Creates a validated key.
    ///
    /// The input is trimmed and lowercased; only `[a-z0-9_]` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsDomainError::InvalidKey`] for empty or malformed
    /// input.
    pub fn new(value: impl Into<String>) -> Result<Self, SettingsDomainError> {
        let raw = value.into();
        normalize(&raw)
            .map(Self)
            .ok_or(SettingsDomainError::InvalidKey(raw))
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn scopes_and_keys_are_normalized() {
        let scope = SettingScope::new(" Laser ").expect("valid scope");
        assert_eq!(scope.as_str(), "laser");
        let key = SettingKey::new("Default_Sender").expect("valid key");
        assert_eq!(key.as_str(), "default_sender");
    }

    #[rstest]
    #[case("")]
    #[case("has space")]
    #[case("has-dash")]
    fn malformed_keys_are_rejected(#[case] input: &str) {
        assert!(SettingKey::new(input).is_err());
    }

    #[rstest]
    fn well_known_identifiers_match_their_storage_form() {
        assert_eq!(SettingScope::laser().as_str(), "laser");
        assert_eq!(SettingKey::default_sender().as_str(), "default_sender");
    }
}
