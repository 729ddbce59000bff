//! Utility functions.
//!
//! This module provides plain-text rendering of countries for the clipboard
//! and the `--list` output, plus layout configuration.

mod card;
mod layout_config;

pub use card::{copy_country_info, country_card_text, format_listing_line, write_listing};
pub use layout_config::{CardLayoutConfig, LayoutConfig, ListLayoutConfig};
