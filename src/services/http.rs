//! HTTP Pokémon Source
//!
//! Reads `GET {base_url}/pokemons` (a JSON array).

use async_trait::async_trait;

use super::PokemonRepository;
use crate::error::{CatalogueError, CatalogueResult};
use crate::models::Pokemon;

/// Absolute base URL for the API.
///
/// Root-relative paths ("/api") are joined to the page origin; anything else
/// must already be an http(s) URL.
pub fn resolve_base_url(api_url: &str, origin: Option<&str>) -> CatalogueResult<String> {
    let api_url = api_url.trim();
    if api_url.starts_with("http://") || api_url.starts_with("https://") {
        return Ok(api_url.to_string());
    }
    match origin {
        Some(origin) if api_url.starts_with('/') => {
            Ok(format!("{}{}", origin.trim_end_matches('/'), api_url))
        }
        Some(_) => Err(CatalogueError::Config(format!(
            "apiUrl must be absolute or start with '/': {}",
            api_url
        ))),
        None => Err(CatalogueError::Config(format!(
            "cannot resolve relative apiUrl without a page origin: {}",
            api_url
        ))),
    }
}

pub struct HttpRepository {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRepository {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/pokemons", self.base_url)
    }
}

#[async_trait(?Send)]
impl PokemonRepository for HttpRepository {
    async fn list_pokemons(&self) -> CatalogueResult<Vec<Pokemon>> {
        let url = self.endpoint();
        log::debug!("GET {}", url);
        let pokemons = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Pokemon>>()
            .await?;
        Ok(pokemons)
    }
}
