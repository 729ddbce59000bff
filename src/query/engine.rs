//! View derivation: filter, then rank.

use super::selection::{RankingMode, SelectionState, ALL};
use crate::data::Country;

/// Number of entries kept by the top rankings.
pub const TOP_N: usize = 10;

/// Derive the countries to display for `state`.
///
/// The result borrows from `dataset`, which is left untouched. Calling this
/// twice with the same inputs yields equal views.
pub fn derive_view<'a>(dataset: &'a [Country], state: &SelectionState) -> Vec<&'a Country> {
    let mut view = filter(dataset, state);
    rank(&mut view, state.ranking());
    view
}

fn filter<'a>(dataset: &'a [Country], state: &SelectionState) -> Vec<&'a Country> {
    if state.continent() != ALL {
        let continent = state.continent();
        dataset
            .iter()
            .filter(|c| c.is_in_continent(continent))
            .collect()
    } else if state.subregion() != ALL {
        let subregion = state.subregion();
        dataset
            .iter()
            .filter(|c| c.is_in_subregion(subregion))
            .collect()
    } else {
        dataset.iter().collect()
    }
}

// `sort_by` is stable, so ties keep dataset order.
fn rank(view: &mut Vec<&Country>, mode: RankingMode) {
    match mode {
        RankingMode::None => {}
        RankingMode::Alphabetical => {
            view.sort_by(|a, b| a.common_name().cmp(b.common_name()));
        },
        RankingMode::TopPopulation => {
            view.sort_by(|a, b| b.population.cmp(&a.population));
            view.truncate(TOP_N);
        },
        RankingMode::TopArea => {
            view.sort_by(|a, b| b.ranking_area().total_cmp(&a.ranking_area()));
            view.truncate(TOP_N);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CountryName, Flags};
    use crate::query::Intent;

    fn country(name: &str, continents: &[&str], subregion: Option<&str>, pop: u64, area: f64) -> Country {
        Country {
            name: CountryName {
                common: name.to_string(),
                official: format!("Republic of {}", name),
            },
            capital: Vec::new(),
            population: pop,
            area,
            continents: continents.iter().map(|c| c.to_string()).collect(),
            subregion: subregion.map(str::to_string),
            flags: Flags::default(),
        }
    }

    fn names(view: &[&Country]) -> Vec<String> {
        view.iter().map(|c| c.name.common.clone()).collect()
    }

    fn sample() -> Vec<Country> {
        vec![
            country("Peru", &["South America"], Some("South America"), 33_000_000, 1_285_216.0),
            country("France", &["Europe"], Some("Western Europe"), 68_000_000, 551_695.0),
            country("Chile", &["South America"], Some("South America"), 19_000_000, 756_102.0),
            country("Turkey", &["Europe", "Asia"], Some("Western Asia"), 85_000_000, 783_562.0),
            country("Japan", &["Asia"], Some("Eastern Asia"), 125_000_000, 377_930.0),
            country("Antarctica", &["Antarctica"], None, 1_000, 14_000_000.0),
            country("Nowhere", &[], None, 0, 0.0),
        ]
    }

    fn many(count: usize) -> Vec<Country> {
        (0..count)
            .map(|i| {
                country(
                    &format!("C{:02}", i),
                    &["Africa"],
                    Some("Western Africa"),
                    ((i * 7919) % 101) as u64,
                    ((i * 104_729) % 97) as f64,
                )
            })
            .collect()
    }

    #[test]
    fn test_default_state_returns_dataset_unchanged() {
        let data = sample();
        let view = derive_view(&data, &SelectionState::new());
        assert_eq!(view.len(), data.len());
        for (derived, original) in view.iter().zip(data.iter()) {
            assert!(std::ptr::eq(*derived, original));
        }
    }

    #[test]
    fn test_continent_filter_uses_membership() {
        let data = sample();
        let state = SelectionState::new().apply(Intent::Continent("Asia".to_string()));
        let view = derive_view(&data, &state);
        assert_eq!(names(&view), vec!["Turkey", "Japan"]);
        assert!(view.iter().all(|c| c.continents.iter().any(|x| x == "Asia")));
    }

    #[test]
    fn test_continent_filter_excludes_empty_continents() {
        let data = sample();
        for continent in crate::query::CONTINENTS.iter().skip(1) {
            let state = SelectionState::new().apply(Intent::Continent(continent.to_string()));
            let view = derive_view(&data, &state);
            assert!(view.len() <= data.len());
            assert!(view.iter().all(|c| c.name.common != "Nowhere"));
        }
    }

    #[test]
    fn test_subregion_filter_is_exact() {
        let data = sample();
        let state = SelectionState::new().apply(Intent::Subregion("Western Europe".to_string()));
        assert_eq!(names(&derive_view(&data, &state)), vec!["France"]);

        let state = SelectionState::new().apply(Intent::Subregion("western europe".to_string()));
        assert!(derive_view(&data, &state).is_empty());
    }

    #[test]
    fn test_subregion_filter_excludes_absent_subregion() {
        let data = sample();
        let state = SelectionState::new().apply(Intent::Subregion("None".to_string()));
        assert!(derive_view(&data, &state).is_empty());
    }

    #[test]
    fn test_alphabetical_sorts_and_is_idempotent() {
        let data = sample();
        let state = SelectionState::new().apply(Intent::Rank(RankingMode::Alphabetical));
        let once = derive_view(&data, &state);
        assert_eq!(
            names(&once),
            vec!["Antarctica", "Chile", "France", "Japan", "Nowhere", "Peru", "Turkey"]
        );

        let owned: Vec<Country> = once.iter().map(|c| (*c).clone()).collect();
        let twice = derive_view(&owned, &state);
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn test_alphabetical_is_ordinal_and_stable() {
        let mut data = vec![
            country("b", &["Asia"], None, 1, 1.0),
            country("Z", &["Asia"], None, 2, 2.0),
            country("Z", &["Asia"], None, 3, 3.0),
            country("a", &["Asia"], None, 4, 4.0),
        ];
        data[1].name.official = "first".to_string();
        data[2].name.official = "second".to_string();

        let state = SelectionState::new().apply(Intent::Rank(RankingMode::Alphabetical));
        let view = derive_view(&data, &state);
        assert_eq!(names(&view), vec!["Z", "Z", "a", "b"]);
        assert_eq!(view[0].name.official, "first");
        assert_eq!(view[1].name.official, "second");
    }

    #[test]
    fn test_top_population_example() {
        let data = vec![
            country("Peru", &["South America"], Some("South America"), 33_000_000, 1_285_216.0),
            country("Chile", &["South America"], Some("South America"), 19_000_000, 756_102.0),
        ];
        let state = SelectionState::new()
            .apply(Intent::Continent("South America".to_string()))
            .apply(Intent::Rank(RankingMode::TopPopulation));
        assert_eq!(names(&derive_view(&data, &state)), vec!["Peru", "Chile"]);
    }

    #[test]
    fn test_top_rankings_truncate_to_ten() {
        let data = many(25);
        for mode in [RankingMode::TopPopulation, RankingMode::TopArea] {
            let state = SelectionState::new().apply(Intent::Rank(mode));
            let view = derive_view(&data, &state);
            assert_eq!(view.len(), TOP_N);

            let key = |c: &Country| match mode {
                RankingMode::TopPopulation => c.population as f64,
                _ => c.ranking_area(),
            };
            let min_kept = view.iter().map(|c| key(*c)).fold(f64::INFINITY, f64::min);
            for excluded in data.iter().filter(|c| !view.iter().any(|v| std::ptr::eq(*v, *c))) {
                assert!(key(excluded) <= min_kept);
            }
            assert!(view.windows(2).all(|w| key(w[0]) >= key(w[1])));
        }
    }

    #[test]
    fn test_top_area_respects_filter() {
        let data = sample();
        let state = SelectionState::new()
            .apply(Intent::Continent("Europe".to_string()))
            .apply(Intent::Rank(RankingMode::TopArea));
        assert_eq!(names(&derive_view(&data, &state)), vec!["Turkey", "France"]);
    }

    #[test]
    fn test_missing_values_sort_lowest() {
        let mut data = sample();
        data.push(country("Ghost", &["Asia"], None, 0, -1.0));
        let state = SelectionState::new()
            .apply(Intent::Continent("Asia".to_string()))
            .apply(Intent::Rank(RankingMode::TopArea));
        let view = derive_view(&data, &state);
        assert_eq!(names(&view).last().map(String::as_str), Some("Ghost"));
    }

    #[test]
    fn test_dataset_not_mutated() {
        let data = sample();
        let before = data.clone();
        let state = SelectionState::new().apply(Intent::Rank(RankingMode::TopPopulation));
        let first = names(&derive_view(&data, &state));
        let second = names(&derive_view(&data, &state));
        assert_eq!(first, second);
        assert_eq!(data, before);
    }
}
