//! Layout configuration constants for the country browser.

/// Configuration for the country list panel.
#[derive(Debug, Clone)]
pub struct ListLayoutConfig {
    /// Padding to account for borders.
    pub border_padding: usize,
    /// Width of the country name column in characters.
    pub name_width: usize,
    /// Rows moved by a page jump.
    pub page_size: usize,
}

impl Default for ListLayoutConfig {
    fn default() -> Self {
        Self {
            border_padding: 2,
            name_width: 32,
            page_size: 15,
        }
    }
}

/// Configuration for the detail card panel.
#[derive(Debug, Clone)]
pub struct CardLayoutConfig {
    /// Percentage of the content width given to the card.
    pub width_percent: u16,
}

impl Default for CardLayoutConfig {
    fn default() -> Self {
        Self { width_percent: 45 }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Configuration for the country list.
    pub list: ListLayoutConfig,
    /// Configuration for the detail card.
    pub card: CardLayoutConfig,
    /// Height of the controls header, borders included.
    pub controls_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            list: ListLayoutConfig::default(),
            card: CardLayoutConfig::default(),
            controls_height: 5,
        }
    }
}
