//! Session-lifetime memo of today forecasts per map coordinate.

use std::collections::HashMap;

use crate::types::{Location, TodayForecast};

/// In-memory cache of the most recent today forecast per coordinate key.
///
/// Entries never expire and are never evicted; the cache lives as long as
/// the session. Only successful fetch results should be stored.
#[derive(Debug, Default)]
pub struct PopupCache {
    entries: HashMap<String, TodayForecast>,
}

impl PopupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached forecast for a location, if any.
    pub fn get(&self, location: &Location) -> Option<&TodayForecast> {
        self.entries.get(&location.cache_key())
    }

    /// Store a freshly fetched forecast for a location.
    pub fn insert(&mut self, location: &Location, forecast: TodayForecast) {
        self.entries.insert(location.cache_key(), forecast);
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.entries.contains_key(&location.cache_key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
