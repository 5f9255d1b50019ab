//! Pool sizing configuration
//!
//! The host supplies the list of kinds and their pre-warm capacity once at
//! startup. Example TOML:
//!
//! ```toml
//! [[pools]]
//! kind = "bullet"
//! initial_capacity = 32
//!
//! [[pools]]
//! kind = "explosion"
//! initial_capacity = 4
//! ```

use super::{Config, ConfigError};
use crate::pool::PoolDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Capacity used when an entry omits `initial_capacity`
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

/// One configured pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    /// Kind identifier the pool is registered under
    pub kind: String,

    /// Number of instances built up front
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

/// Startup configuration for a pool registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSettings {
    /// Pools to create, in registration order
    #[serde(default)]
    pub pools: Vec<PoolEntry>,
}

impl Config for PoolSettings {}

impl PoolSettings {
    /// Create empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: Append a pool entry
    pub fn with_pool(mut self, kind: impl Into<String>, initial_capacity: usize) -> Self {
        self.pools.push(PoolEntry {
            kind: kind.into(),
            initial_capacity,
        });
        self
    }

    /// Check that every kind appears at most once
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(self.pools.len());
        for entry in &self.pools {
            if !seen.insert(entry.kind.as_str()) {
                return Err(ConfigError::DuplicateKind(entry.kind.clone()));
            }
        }
        Ok(())
    }

    /// Sum of all configured capacities
    pub fn total_initial_capacity(&self) -> usize {
        self.pools.iter().map(|entry| entry.initial_capacity).sum()
    }

    /// Validate and turn the entries into registry descriptors
    ///
    /// `prototype_for` is asked once per entry for the template of that kind.
    pub fn descriptors<P, F>(&self, mut prototype_for: F) -> Result<Vec<PoolDescriptor<String, P>>, ConfigError>
    where
        F: FnMut(&str) -> P,
    {
        self.validate()?;

        Ok(self
            .pools
            .iter()
            .map(|entry| PoolDescriptor::new(entry.kind.clone(), prototype_for(&entry.kind), entry.initial_capacity))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[pools]]
        kind = "bullet"
        initial_capacity = 32

        [[pools]]
        kind = "explosion"
    "#;

    #[test]
    fn test_parse_toml_with_default_capacity() {
        let settings = PoolSettings::from_toml_str(SAMPLE).unwrap();

        assert_eq!(settings.pools.len(), 2);
        assert_eq!(settings.pools[0].kind, "bullet");
        assert_eq!(settings.pools[0].initial_capacity, 32);
        assert_eq!(settings.pools[1].initial_capacity, DEFAULT_INITIAL_CAPACITY);
        assert_eq!(settings.total_initial_capacity(), 32 + DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn test_empty_document_has_no_pools() {
        let settings = PoolSettings::from_toml_str("").unwrap();
        assert!(settings.pools.is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_negative_capacity_fails_to_parse() {
        let result = PoolSettings::from_toml_str("[[pools]]\nkind = \"bullet\"\ninitial_capacity = -1\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_duplicate_kind_is_rejected() {
        let settings = PoolSettings::new().with_pool("bullet", 2).with_pool("bullet", 5);

        match settings.validate() {
            Err(ConfigError::DuplicateKind(kind)) => assert_eq!(kind, "bullet"),
            other => panic!("expected duplicate kind error, got {other:?}"),
        }
    }

    #[test]
    fn test_descriptors_keep_order_and_ask_for_each_prototype() {
        let settings = PoolSettings::new().with_pool("bullet", 2).with_pool("rock", 1);
        let mut asked = Vec::new();

        let descriptors = settings
            .descriptors(|kind| {
                asked.push(kind.to_string());
                format!("{kind}-template")
            })
            .unwrap();

        assert_eq!(asked, vec!["bullet", "rock"]);
        assert_eq!(descriptors[0].kind, "bullet");
        assert_eq!(descriptors[0].prototype, "bullet-template");
        assert_eq!(descriptors[1].initial_capacity, 1);
    }

    #[test]
    fn test_descriptors_fail_on_duplicates_without_building_prototypes() {
        let settings = PoolSettings::new().with_pool("rock", 1).with_pool("rock", 1);
        let mut calls = 0;

        let result = settings.descriptors(|_| {
            calls += 1;
        });

        assert!(result.is_err());
        assert_eq!(calls, 0);
    }
}
