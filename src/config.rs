//! Runtime configuration.
//!
//! The binary parses command-line arguments with `clap` and turns them into a
//! [`Config`], which the rest of the crate consumes.

use crate::app::Theme;
use crate::data::{DatasetProvider, FileProvider, HttpProvider};
use crate::query::SelectionState;
use crate::util::LayoutConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Where the country dataset is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// Fetch from a REST endpoint.
    Http {
        /// Endpoint returning a JSON array of countries.
        url: String,
        /// Request timeout.
        timeout: Duration,
    },
    /// Read a local JSON file.
    File(PathBuf),
}

impl DatasetSource {
    /// Build the provider for this source.
    pub fn provider(&self) -> Box<dyn DatasetProvider> {
        match self {
            DatasetSource::Http { url, timeout } => Box::new(HttpProvider::new(url.clone(), *timeout)),
            DatasetSource::File(path) => Box::new(FileProvider::new(path.clone())),
        }
    }
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::Http {
            url: crate::data::DEFAULT_URL.to_string(),
            timeout: crate::data::DEFAULT_TIMEOUT,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Dataset source.
    pub source: DatasetSource,
    /// Initial theme.
    pub theme: Theme,
    /// Initial filters and ranking.
    pub selection: SelectionState,
    /// Layout tuning.
    pub layout: LayoutConfig,
}

impl Config {
    /// Build the dataset provider for this configuration.
    pub fn provider(&self) -> Box<dyn DatasetProvider> {
        self.source.provider()
    }
}
