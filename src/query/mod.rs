//! Query engine over the country dataset.
//!
//! This module holds the selection state (filters and ranking mode) and the
//! pure derivation that turns a dataset plus a selection into the view to
//! display.

mod engine;
mod selection;

pub use engine::{derive_view, TOP_N};
pub use selection::{
    cycle_option, Intent, RankingMode, SelectionState, ALL, CONTINENTS, SUBREGIONS,
};
