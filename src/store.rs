//! Catalogue State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalogue::{filter_by_name, is_loading, LoadStatus};
use crate::models::Pokemon;

/// List view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogueState {
    /// Collection from the repository, empty until the first response
    pub pokemons: Vec<Pokemon>,
    /// Raw search input, normalized only when filtering
    pub search_term: String,
    pub status: LoadStatus,
}

/// Type alias for the store
pub type CatalogueStore = Store<CatalogueState>;

/// Get the catalogue store from context
pub fn use_catalogue_store() -> CatalogueStore {
    expect_context::<CatalogueStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the collection after a successful fetch
pub fn store_set_pokemons(store: &CatalogueStore, pokemons: Vec<Pokemon>) {
    *store.pokemons().write() = pokemons;
    *store.status().write() = LoadStatus::Loaded;
}

/// Record a failed fetch; the collection is left as is
pub fn store_set_failed(store: &CatalogueStore, message: String) {
    *store.status().write() = LoadStatus::Failed(message);
}

pub fn store_set_search_term(store: &CatalogueStore, term: String) {
    *store.search_term().write() = term;
}

// ========================
// Derived State
// ========================

/// Pokémon matching the current search term, recomputed on either change
pub fn filtered_pokemons(store: CatalogueStore) -> Memo<Vec<Pokemon>> {
    Memo::new(move |_| filter_by_name(&store.pokemons().get(), &store.search_term().get()))
}

/// True while the collection is empty
pub fn loading_flag(store: CatalogueStore) -> Memo<bool> {
    Memo::new(move |_| is_loading(&store.pokemons().get()))
}
