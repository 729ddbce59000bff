//! Country records.

use serde::{Deserialize, Deserializer, Serialize};

/// Common and official names of a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    /// Short everyday name, e.g. "Peru".
    pub common: String,
    /// Full official name, e.g. "Republic of Peru".
    #[serde(default, deserialize_with = "null_as_default")]
    pub official: String,
}

/// Flag image locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flags {
    /// SVG flag URL.
    #[serde(default)]
    pub svg: Option<String>,
    /// PNG flag URL.
    #[serde(default)]
    pub png: Option<String>,
}

/// A single country as delivered by the dataset provider.
///
/// Missing numeric fields deserialize as `0` so that malformed records sort
/// lowest under the population and area rankings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Country names.
    pub name: CountryName,
    /// Capital cities, possibly empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub capital: Vec<String>,
    /// Population count.
    #[serde(default, deserialize_with = "null_as_default")]
    pub population: u64,
    /// Surface area in square kilometres.
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: f64,
    /// Continents the country belongs to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub continents: Vec<String>,
    /// UN geoscheme subregion.
    #[serde(default)]
    pub subregion: Option<String>,
    /// Flag images.
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Flags,
}

// Explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Country {
    /// Common name.
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// First capital, or "None" when the country has none.
    pub fn capital_display(&self) -> &str {
        self.capital.first().map(String::as_str).unwrap_or("None")
    }

    /// Subregion, or "None" when absent.
    pub fn subregion_display(&self) -> &str {
        self.subregion.as_deref().unwrap_or("None")
    }

    /// Flag image URL, preferring SVG.
    pub fn flag_image_url(&self) -> &str {
        self.flags
            .svg
            .as_deref()
            .or(self.flags.png.as_deref())
            .unwrap_or("")
    }

    /// Area used for ranking; negative sentinel values count as zero.
    pub fn ranking_area(&self) -> f64 {
        if self.area > 0.0 {
            self.area
        } else {
            0.0
        }
    }

    /// Whether the country lists `continent` among its continents.
    pub fn is_in_continent(&self, continent: &str) -> bool {
        self.continents.iter().any(|c| c == continent)
    }

    /// Whether the country's subregion equals `subregion` exactly.
    pub fn is_in_subregion(&self, subregion: &str) -> bool {
        self.subregion.as_deref() == Some(subregion)
    }
}
