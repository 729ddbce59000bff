//! Country data and its providers.
//!
//! This module defines the country record, the immutable dataset snapshot,
//! and the providers that load it once at startup.

mod country;
mod dataset;
mod provider;

pub use country::{Country, CountryName, Flags};
pub use dataset::Dataset;
pub use provider::{
    parse_countries, DatasetProvider, FileProvider, HttpProvider, DEFAULT_TIMEOUT, DEFAULT_URL,
};
