//! Dataset providers.
//!
//! A provider is invoked once per session, before any view is derived. A
//! failure here is fatal to the session: there is nothing to render without
//! a dataset, and retrying is left to the caller.

use super::{Country, Dataset};
use crate::error::{OrbisError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Default REST Countries endpoint, restricted to the fields Orbis uses.
pub const DEFAULT_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,capital,population,area,continents,subregion,flags";

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of the country dataset.
pub trait DatasetProvider {
    /// Load every country.
    fn load_all_countries(&self) -> Result<Dataset>;
}

/// Loads the dataset over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    url: String,
    timeout: Duration,
}

impl HttpProvider {
    /// Create a provider for `url`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl Default for HttpProvider {
    fn default() -> Self {
        Self::new(DEFAULT_URL, DEFAULT_TIMEOUT)
    }
}

impl DatasetProvider for HttpProvider {
    fn load_all_countries(&self) -> Result<Dataset> {
        tracing::info!(url = %self.url, "Fetching country dataset");

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let countries: Vec<Country> = client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .json()?;

        tracing::info!(count = countries.len(), "Country dataset fetched");
        Ok(Dataset::new(self.url.clone(), countries))
    }
}

/// Loads the dataset from a local JSON file with the same shape as the API
/// response.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    /// Create a provider for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetProvider for FileProvider {
    fn load_all_countries(&self) -> Result<Dataset> {
        tracing::info!(path = %self.path.display(), "Reading country dataset");

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| OrbisError::file_open(self.path.clone(), e))?;
        let countries = parse_countries(&content)?;

        tracing::info!(count = countries.len(), "Country dataset read");
        Ok(Dataset::new(self.path.display().to_string(), countries))
    }
}

/// Parse a JSON array of countries.
pub fn parse_countries(json: &str) -> Result<Vec<Country>> {
    Ok(serde_json::from_str(json)?)
}
