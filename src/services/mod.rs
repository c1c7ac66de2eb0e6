//! Pokémon Data Access
//!
//! Sources the list view reads from, organized by backend.

mod embedded;
mod http;

use std::rc::Rc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::CatalogueResult;
use crate::models::Pokemon;

pub use embedded::EmbeddedRepository;
pub use http::{resolve_base_url, HttpRepository};

/// Read access to the Pokémon collection
#[async_trait(?Send)]
pub trait PokemonRepository {
    async fn list_pokemons(&self) -> CatalogueResult<Vec<Pokemon>>;
}

fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

/// HTTP when a usable API URL is configured, bundled data otherwise
pub fn repository_from_config(config: &AppConfig) -> Rc<dyn PokemonRepository> {
    if let Some(url) = config.api_url() {
        match resolve_base_url(url, page_origin().as_deref()) {
            Ok(base_url) => {
                log::info!("Using Pokémon API at {}", base_url);
                return Rc::new(HttpRepository::new(&base_url));
            }
            Err(e) => log::warn!("Ignoring apiUrl: {}", e),
        }
    }
    log::info!("Using bundled Pokémon data");
    Rc::new(EmbeddedRepository::new(config.latency_ms))
}
