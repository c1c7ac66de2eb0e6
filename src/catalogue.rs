//! Catalogue Utilities
//!
//! Pure helpers behind the list view: name filter and loading flags.

use crate::models::Pokemon;

/// Keep Pokémon whose name contains the search term (trimmed, case-insensitive).
/// Order is preserved; an empty term keeps everything.
pub fn filter_by_name(pokemons: &[Pokemon], search_term: &str) -> Vec<Pokemon> {
    let needle = search_term.trim().to_lowercase();
    pokemons
        .iter()
        .filter(|pokemon| pokemon.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// True exactly when the collection is empty.
///
/// A pending fetch and an empty result look the same here; `LoadStatus`
/// tells them apart.
pub fn is_loading(pokemons: &[Pokemon]) -> bool {
    pokemons.is_empty()
}

/// Where the initial fetch stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{size, SizeLabel};

    fn sample() -> Vec<Pokemon> {
        vec![
            Pokemon::new(1, "Bulbizarre", 25, &["Plante", "Poison"]),
            Pokemon::new(2, "Salamèche", 28, &["Feu"]),
            Pokemon::new(3, "Carapuce", 21, &["Eau"]),
            Pokemon::new(9, "Pikachu", 21, &["Electrik"]),
        ]
    }

    #[test]
    fn test_empty_term_keeps_all_in_order() {
        let pokemons = sample();
        assert_eq!(filter_by_name(&pokemons, ""), pokemons);
        assert_eq!(filter_by_name(&pokemons, "   "), pokemons);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_trimmed() {
        let filtered = filter_by_name(&sample(), "  PIKA ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Pikachu");
    }

    #[test]
    fn test_filter_matches_substring_only() {
        let pokemons = sample();
        let filtered = filter_by_name(&pokemons, "ca");
        let names: Vec<_> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Carapuce"]);
        for pokemon in &filtered {
            assert!(pokemon.name.to_lowercase().contains("ca"));
        }
        assert!(filter_by_name(&pokemons, "mewtwo").is_empty());
    }

    #[test]
    fn test_filter_handles_accents() {
        let filtered = filter_by_name(&sample(), "MÈCHE");
        assert_eq!(filtered[0].name, "Salamèche");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let pokemons = sample();
        for term in ["", "a", "Bul", "zzz"] {
            let once = filter_by_name(&pokemons, term);
            let twice = filter_by_name(&once, term);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_loading_iff_empty() {
        assert!(is_loading(&[]));
        assert!(!is_loading(&sample()));
    }

    #[test]
    fn test_search_and_size_scenario() {
        let pokemons = vec![
            Pokemon::new(1, "Pikachu", 10, &["Electrik"]),
            Pokemon::new(2, "Charizard", 30, &["Feu"]),
        ];
        let filtered = filter_by_name(&pokemons, "char");
        assert_eq!(filtered, vec![pokemons[1].clone()]);
        assert_eq!(size(&pokemons[0]), SizeLabel::Petit);
        assert_eq!(size(&pokemons[1]), SizeLabel::Grand);
    }

    #[test]
    fn test_status_starts_pending() {
        assert_eq!(LoadStatus::default(), LoadStatus::Pending);
    }
}
