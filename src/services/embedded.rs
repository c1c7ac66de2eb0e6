//! Bundled Pokémon Source
//!
//! Serves the Pokémon shipped with the app, after an optional simulated delay.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use super::PokemonRepository;
use crate::error::CatalogueResult;
use crate::models::Pokemon;

const BUNDLED_POKEMONS: &str = include_str!("../../data/pokemons.json");

pub struct EmbeddedRepository {
    latency_ms: u32,
}

impl EmbeddedRepository {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }

    pub fn parse_bundled() -> CatalogueResult<Vec<Pokemon>> {
        Ok(serde_json::from_str(BUNDLED_POKEMONS)?)
    }
}

#[async_trait(?Send)]
impl PokemonRepository for EmbeddedRepository {
    async fn list_pokemons(&self) -> CatalogueResult<Vec<Pokemon>> {
        if self.latency_ms > 0 {
            TimeoutFuture::new(self.latency_ms).await;
        }
        Self::parse_bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_data_parses() {
        let pokemons = EmbeddedRepository::parse_bundled().unwrap();
        assert_eq!(pokemons.len(), 12);
        let ids: HashSet<_> = pokemons.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), pokemons.len());
        assert!(pokemons.iter().all(|p| !p.types.is_empty() && p.created.is_some()));
    }

    #[test]
    fn test_list_without_latency() {
        let repo = EmbeddedRepository::new(0);
        let pokemons = futures::executor::block_on(repo.list_pokemons()).unwrap();
        assert_eq!(pokemons[0].name, "Bulbizarre");
        assert_eq!(pokemons[8].name, "Pikachu");
    }
}
