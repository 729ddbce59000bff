//! Loaded country dataset.

use super::Country;

/// An immutable snapshot of every country, in provider order.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Human readable description of where the data came from.
    source: String,
    countries: Vec<Country>,
}

impl Dataset {
    /// Create a new dataset.
    pub fn new(source: impl Into<String>, countries: Vec<Country>) -> Self {
        Self {
            source: source.into(),
            countries,
        }
    }

    /// All countries in their original order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Where the data was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the dataset has no countries.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
