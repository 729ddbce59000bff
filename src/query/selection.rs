//! Selection state: the active filters and ranking mode.

/// Filter value meaning "no filter".
pub const ALL: &str = "All";

/// Continent filter options, "All" first.
pub const CONTINENTS: &[&str] = &[
    ALL,
    "North America",
    "Europe",
    "Asia",
    "Oceania",
    "South America",
    "Africa",
    "Antarctica",
];

/// Subregion filter options, "All" first.
pub const SUBREGIONS: &[&str] = &[
    ALL,
    "Western Africa",
    "Eastern Africa",
    "Southern Africa",
    "Northern Africa",
    "Middle Africa",
    "Eastern Asia",
    "South-Eastern Asia",
    "Southern Asia",
    "Central Asia",
    "Western Asia",
    "Western Europe",
    "Central Europe",
    "Southern Europe",
    "Eastern Europe",
    "Northern Europe",
    "Southwest Europe",
    "North America",
    "South America",
    "Central America",
    "Polynesia",
    "Micronesia",
    "Melanesia",
    "Australia and New Zealand",
];

/// How the filtered countries are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingMode {
    /// Dataset order.
    #[default]
    None,
    /// Ascending by common name.
    Alphabetical,
    /// Ten most populous.
    TopPopulation,
    /// Ten largest by area.
    TopArea,
}

impl RankingMode {
    /// Every mode, in display order.
    pub const ALL: [RankingMode; 4] = [
        RankingMode::None,
        RankingMode::Alphabetical,
        RankingMode::TopPopulation,
        RankingMode::TopArea,
    ];

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            RankingMode::None => "None",
            RankingMode::Alphabetical => "Alphabetical (All)",
            RankingMode::TopPopulation => "Top 10 Population",
            RankingMode::TopArea => "Top 10 Area",
        }
    }
}

/// A discrete user intent that changes the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Choose a continent; resets the subregion.
    Continent(String),
    /// Choose a subregion; resets the continent.
    Subregion(String),
    /// Choose a ranking mode.
    Rank(RankingMode),
    /// Reset everything.
    Clear,
}

/// Current filters and ranking.
///
/// At most one of `continent` and `subregion` is ever something other than
/// [`ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    continent: String,
    subregion: String,
    ranking: RankingMode,
}

impl SelectionState {
    /// Create the default selection.
    pub fn new() -> Self {
        Self {
            continent: ALL.to_string(),
            subregion: ALL.to_string(),
            ranking: RankingMode::None,
        }
    }

    /// Active continent filter.
    pub fn continent(&self) -> &str {
        &self.continent
    }

    /// Active subregion filter.
    pub fn subregion(&self) -> &str {
        &self.subregion
    }

    /// Active ranking mode.
    pub fn ranking(&self) -> RankingMode {
        self.ranking
    }

    /// Whether every field holds its default.
    pub fn is_default(&self) -> bool {
        *self == Self::new()
    }

    /// Select a continent and reset the subregion.
    pub fn set_continent(&mut self, value: impl Into<String>) {
        self.continent = value.into();
        self.subregion = ALL.to_string();
    }

    /// Select a subregion and reset the continent.
    pub fn set_subregion(&mut self, value: impl Into<String>) {
        self.subregion = value.into();
        self.continent = ALL.to_string();
    }

    /// Select a ranking mode. Re-selecting the active mode keeps it.
    pub fn set_ranking_mode(&mut self, mode: RankingMode) {
        self.ranking = mode;
    }

    /// Restore defaults.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Return the state that results from applying `intent`.
    pub fn apply(&self, intent: Intent) -> Self {
        let mut next = self.clone();
        match intent {
            Intent::Continent(value) => next.set_continent(value),
            Intent::Subregion(value) => next.set_subregion(value),
            Intent::Rank(mode) => next.set_ranking_mode(mode),
            Intent::Clear => next.clear(),
        }
        next
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Step through `options` from `current` by `step` positions, wrapping.
///
/// A value not in `options` is treated as the first option.
pub fn cycle_option(options: &[&'static str], current: &str, step: isize) -> &'static str {
    if options.is_empty() {
        return ALL;
    }
    let len = options.len() as isize;
    let index = options.iter().position(|o| *o == current).unwrap_or(0) as isize;
    options[(index + step).rem_euclid(len) as usize]
}
