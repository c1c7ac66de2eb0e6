//! Pokémon List Component
//!
//! Loads the collection, filters it by name and renders one card per Pokémon.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalogue::LoadStatus;
use crate::components::{LoadingSpinner, PokemonCard, SearchBar};
use crate::context::use_app_context;
use crate::services::PokemonRepository;
use crate::store::{
    filtered_pokemons, loading_flag, store_set_failed, store_set_pokemons, store_set_search_term, use_catalogue_store,
    CatalogueStateStoreFields,
};

#[component]
pub fn PokemonList(repository: Rc<dyn PokemonRepository>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalogue_store();

    // Load pokemons on mount
    Effect::new(move |_| {
        let repository = repository.clone();
        spawn_local(async move {
            match repository.list_pokemons().await {
                Ok(loaded) => {
                    log::info!("Loaded {} pokemons", loaded.len());
                    store_set_pokemons(&store, loaded);
                }
                Err(e) => {
                    log::error!("Failed to load pokemons: {}", e);
                    store_set_failed(&store, e.to_string());
                }
            }
        });
    });

    let filtered = filtered_pokemons(store);
    let loading = loading_flag(store);

    let on_search = Callback::new(move |term: String| store_set_search_term(&store, term));
    let on_select = Callback::new(move |name: String| ctx.set_title(&name));

    view! {
        <section class="pokemon-list">
            <h1>"Pokédex"</h1>

            <SearchBar value=Signal::derive(move || store.search_term().get()) on_input=on_search />

            <Show when=move || loading.get()>
                {move || match store.status().get() {
                    LoadStatus::Pending => view! { <LoadingSpinner /> }.into_any(),
                    LoadStatus::Loaded => view! { <p class="pokemon-empty">"Aucun Pokémon disponible."</p> }.into_any(),
                    LoadStatus::Failed(message) => view! { <p class="pokemon-error">{message}</p> }.into_any(),
                }}
            </Show>

            <div class="pokemon-grid">
                <For
                    each=move || filtered.get()
                    key=|pokemon| pokemon.id
                    children=move |pokemon| view! { <PokemonCard pokemon=pokemon on_select=on_select /> }
                />
            </div>

            <p class="pokemon-count">
                {move || format!("{} / {} Pokémon", filtered.get().len(), store.pokemons().get().len())}
            </p>
        </section>
    }
}
