//! Plain-text country cards and listings.

use crate::clipboard;
use crate::data::Country;
use crate::error::Result;
use crate::ui::formatters::{format_area, format_number};
use std::io::Write;

/// Render a country as a multi-line card.
pub fn country_card_text(country: &Country) -> String {
    let mut text = format!("{}\n", country.common_name());
    text.push_str(&format!("{}\n", country.name.official));
    text.push_str(&"=".repeat(40));
    text.push('\n');
    text.push_str(&format!("Capital: {}\n", country.capital_display()));
    text.push_str(&format!("Population: {}\n", format_number(country.population)));
    text.push_str(&format!("Continents: {}\n", country.continents.join(", ")));
    text.push_str(&format!("Subregion: {}\n", country.subregion_display()));
    text.push_str(&format!("Area: {} km²\n", format_area(country.area)));
    text.push_str(&format!("Flag: {}\n", country.flag_image_url()));
    text
}

/// Copy a country card to the clipboard.
pub fn copy_country_info(country: &Country) -> Result<()> {
    clipboard::copy_to_clipboard(&country_card_text(country))
}

/// One tab-separated line: name, capital, population, area, continents, subregion.
pub fn format_listing_line(country: &Country) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        country.common_name(),
        country.capital_display(),
        country.population,
        country.area,
        country.continents.join(", "),
        country.subregion_display()
    )
}

/// Write a derived view as tab-separated lines.
pub fn write_listing<W: Write>(out: &mut W, view: &[&Country]) -> Result<()> {
    for country in view {
        writeln!(out, "{}", format_listing_line(country))?;
    }
    out.flush()?;
    Ok(())
}
