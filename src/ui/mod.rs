//! User interface rendering.

mod countries;
pub mod formatters;
mod theme;

use crate::app::App;
use ratatui::Frame;

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    countries::draw_countries(f, app);
}
