//! Orbis - A fast, terminal-based browser for world country data.
//!
//! Orbis loads a dataset of countries once at startup and lets you filter it
//! by continent or subregion and rank it alphabetically or by the ten largest
//! populations or areas.
//!
//! # Features
//!
//! - One-shot dataset loading from the REST Countries API or a local JSON file
//! - Continent and subregion filters (mutually exclusive)
//! - Alphabetical, top 10 population and top 10 area rankings
//! - Vim-style keyboard shortcuts
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```no_run
//! use orbis::data::{DatasetProvider, FileProvider};
//! use orbis::query::{derive_view, Intent, RankingMode, SelectionState};
//!
//! let dataset = FileProvider::new("countries.json").load_all_countries()?;
//!
//! let state = SelectionState::new()
//!     .apply(Intent::Continent("South America".to_string()))
//!     .apply(Intent::Rank(RankingMode::TopPopulation));
//!
//! for country in derive_view(dataset.countries(), &state) {
//!     println!("{} {}", country.name.common, country.population);
//! }
//! # Ok::<(), orbis::OrbisError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod data;
pub mod error;
pub mod query;
pub mod ui;
pub mod util;

pub use error::{OrbisError, Result};
