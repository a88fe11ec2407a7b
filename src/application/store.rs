//! In-memory configuration store.
//!
//! Holds every configuration saved during the session. Newest entries sit at
//! the front; that order is the one delete walks. Sorting by price is a read
//! transform and never reorders the store itself.

use std::collections::VecDeque;

use crate::domain::Configuration;

/// All configurations saved during this process.
#[derive(Debug, Default, Clone)]
pub struct ConfigurationStore {
    entries: VecDeque<Configuration>,
}

impl ConfigurationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configuration to the front of the store.
    pub fn insert(&mut self, config: Configuration) {
        self.entries.push_front(config);
    }

    /// All configurations in ascending price order.
    ///
    /// Equal prices keep their relative store order. An empty result is the
    /// "nothing saved" condition, not an error.
    #[must_use]
    pub fn list_sorted_by_price(&self) -> Vec<&Configuration> {
        let mut sorted: Vec<&Configuration> = self.entries.iter().collect();
        sorted.sort_by_key(|config| config.price());
        sorted
    }

    /// Remove the first configuration, in store order, whose description is
    /// exactly `text`.
    ///
    /// Returns `false` and leaves the store untouched when nothing matches.
    pub fn delete_by_description(&mut self, text: &str) -> bool {
        let Some(index) = self
            .entries
            .iter()
            .position(|config| config.description() == text)
        else {
            return false;
        };
        self.entries.remove(index);
        true
    }

    /// Configurations in store order, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Configuration> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
