//! Application state and logic.

use crate::config::Config;
use crate::data::{Country, Dataset};
use crate::query::{
    cycle_option, derive_view, Intent, RankingMode, SelectionState, CONTINENTS, SUBREGIONS,
};
use crate::util::{self, LayoutConfig};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
///
/// Owns the loaded dataset and the selection. The visible list is never
/// stored; [`App::view`] derives it from both on every call.
#[derive(Debug)]
pub struct App {
    /// Loaded dataset, read-only for the session.
    dataset: Dataset,
    /// Current filters and ranking.
    selection: SelectionState,
    /// Cursor position (index into the derived view).
    cursor: usize,
    /// Scroll offset for the list.
    scroll_offset: usize,
    /// Show the country card panel.
    pub show_card: bool,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Layout tuning.
    pub layout: LayoutConfig,
}

impl App {
    /// Create a new application instance over a loaded dataset.
    pub fn new(dataset: Dataset, config: &Config) -> Self {
        let status = format!("{} countries loaded from {}", dataset.len(), dataset.source());
        let mut app = Self {
            dataset,
            selection: config.selection.clone(),
            cursor: 0,
            scroll_offset: 0,
            show_card: true,
            status,
            theme: config.theme,
            layout: config.layout.clone(),
        };
        app.clamp_cursor();
        app
    }

    /// The loaded dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Countries to display for the current selection.
    pub fn view(&self) -> Vec<&Country> {
        derive_view(self.dataset.countries(), &self.selection)
    }

    /// Cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Scroll offset of the list.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Country under the cursor.
    pub fn current_country(&self) -> Option<&Country> {
        self.view().get(self.cursor).copied()
    }

    /// Apply a selection intent and refresh the cursor.
    pub fn apply(&mut self, intent: Intent) {
        tracing::debug!(?intent, "Applying intent");
        self.selection = self.selection.apply(intent);
        self.clamp_cursor();

        let count = self.view().len();
        tracing::debug!(
            continent = self.selection.continent(),
            subregion = self.selection.subregion(),
            ranking = ?self.selection.ranking(),
            count,
            "View derived"
        );
        self.status = format!("{} ({} shown)", self.describe_selection(), count);
    }

    /// Move the continent filter by `step` options.
    pub fn cycle_continent(&mut self, step: isize) {
        let next = cycle_option(CONTINENTS, self.selection.continent(), step);
        self.apply(Intent::Continent(next.to_string()));
    }

    /// Move the subregion filter by `step` options.
    pub fn cycle_subregion(&mut self, step: isize) {
        let next = cycle_option(SUBREGIONS, self.selection.subregion(), step);
        self.apply(Intent::Subregion(next.to_string()));
    }

    /// Select a ranking mode.
    pub fn set_ranking(&mut self, mode: RankingMode) {
        self.apply(Intent::Rank(mode));
    }

    /// Reset filters and ranking.
    pub fn clear(&mut self) {
        self.apply(Intent::Clear);
    }

    fn describe_selection(&self) -> String {
        let filter = if self.selection.continent() != crate::query::ALL {
            format!("Continent: {}", self.selection.continent())
        } else if self.selection.subregion() != crate::query::ALL {
            format!("Subregion: {}", self.selection.subregion())
        } else {
            "All countries".to_string()
        };
        format!("{} | Rank: {}", filter, self.selection.ranking().name())
    }

    fn clamp_cursor(&mut self) {
        let len = self.view().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.scroll_offset = self.scroll_offset.min(self.cursor);
    }

    /// Move the cursor up one position.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one position.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.view().len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor up one page.
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.layout.list.page_size);
    }

    /// Move the cursor down one page.
    pub fn page_down(&mut self) {
        let last = self.view().len().saturating_sub(1);
        self.cursor = (self.cursor + self.layout.list.page_size).min(last);
    }

    /// Jump to the first country.
    pub fn goto_first(&mut self) {
        self.cursor = 0;
    }

    /// Jump to the last country.
    pub fn goto_last(&mut self) {
        self.cursor = self.view().len().saturating_sub(1);
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }

        if self.cursor >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor.saturating_sub(viewport_height - 1);
        }
    }

    /// Toggle the country card panel.
    pub fn toggle_card(&mut self) {
        self.show_card = !self.show_card;
        self.status = if self.show_card {
            "Card: ON".to_string()
        } else {
            "Card: OFF".to_string()
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Copy the selected country's card to the clipboard.
    pub fn copy_current(&mut self) {
        let Some(country) = self.current_country() else {
            self.status = "No country selected".to_string();
            return;
        };
        let name = country.common_name().to_string();

        self.status = match util::copy_country_info(country) {
            Ok(()) => format!("Copied {}!", name),
            Err(e) => {
                tracing::warn!("Copy failed: {}", e);
                format!("Copy failed: {}", e)
            },
        };
    }

    /// Show key bindings in the status bar.
    pub fn show_help(&mut self) {
        self.status = "Help: c/C=continent, s/S=subregion, a/p/r/n=rank, x=clear, y=copy, t=card, T=theme, q=quit".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_countries;

    fn dataset() -> Dataset {
        let mut json = String::from("[");
        for i in 0..30 {
            if i > 0 {
                json.push(',');
            }
            let (continent, subregion) = if i % 2 == 0 {
                ("Europe", "Western Europe")
            } else {
                ("Asia", "Eastern Asia")
            };
            json.push_str(&format!(
                r#"{{"name": {{"common": "Country {:02}", "official": "Republic {:02}"}},
                    "population": {}, "area": {}, "continents": ["{}"], "subregion": "{}"}}"#,
                i,
                i,
                i * 1000,
                (30 - i) * 10,
                continent,
                subregion
            ));
        }
        json.push(']');
        Dataset::new("test", parse_countries(&json).unwrap())
    }

    fn app() -> App {
        App::new(dataset(), &Config::default())
    }

    #[test]
    fn test_new_app_shows_everything() {
        let app = app();
        assert_eq!(app.view().len(), 30);
        assert_eq!(app.cursor(), 0);
        assert!(app.selection().is_default());
        assert_eq!(app.status, "30 countries loaded from test");
    }

    #[test]
    fn test_cycle_continent_resets_subregion() {
        let mut app = app();
        app.cycle_subregion(1);
        assert_eq!(app.selection().subregion(), "Western Africa");
        assert!(app.view().is_empty());

        app.cycle_continent(2);
        assert_eq!(app.selection().continent(), "Europe");
        assert_eq!(app.selection().subregion(), "All");
        assert_eq!(app.view().len(), 15);
        assert_eq!(app.status, "Continent: Europe | Rank: None (15 shown)");
    }

    #[test]
    fn test_cycle_continent_backwards_wraps() {
        let mut app = app();
        app.cycle_continent(-1);
        assert_eq!(app.selection().continent(), "Antarctica");
    }

    #[test]
    fn test_cursor_clamped_after_top_n() {
        let mut app = app();
        app.goto_last();
        assert_eq!(app.cursor(), 29);

        app.set_ranking(RankingMode::TopPopulation);
        assert_eq!(app.view().len(), 10);
        assert_eq!(app.cursor(), 9);
        assert_eq!(
            app.current_country().map(|c| c.name.common.as_str()),
            Some("Country 20")
        );
    }

    #[test]
    fn test_cursor_on_empty_view() {
        let mut app = app();
        app.cycle_continent(-1);
        assert!(app.current_country().is_none());
        app.cursor_down();
        app.page_down();
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_clear_restores_full_view() {
        let mut app = app();
        app.cycle_subregion(11);
        app.set_ranking(RankingMode::Alphabetical);
        assert_eq!(app.selection().subregion(), "Western Europe");
        app.clear();
        assert!(app.selection().is_default());
        assert_eq!(app.view().len(), 30);
    }

    #[test]
    fn test_paging_and_scroll() {
        let mut app = app();
        app.page_down();
        assert_eq!(app.cursor(), 15);
        app.adjust_scroll(10);
        assert_eq!(app.scroll_offset(), 6);
        app.page_down();
        assert_eq!(app.cursor(), 29);
        app.page_up();
        assert_eq!(app.cursor(), 14);
        app.goto_first();
        app.adjust_scroll(10);
        assert_eq!(app.scroll_offset(), 0);
    }

    #[test]
    fn test_initial_selection_from_config() {
        let config = Config {
            selection: SelectionState::new().apply(Intent::Rank(RankingMode::TopArea)),
            theme: Theme::GruvboxLight,
            ..Config::default()
        };
        let app = App::new(dataset(), &config);
        assert_eq!(app.view().len(), 10);
        assert_eq!(app.view()[0].name.common, "Country 00");
        assert_eq!(app.theme, Theme::GruvboxLight);
    }

    #[test]
    fn test_toggles() {
        let mut app = app();
        app.toggle_card();
        assert!(!app.show_card);
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxLight);
        assert_eq!(app.status, "Theme: Gruvbox Light");
    }
}
