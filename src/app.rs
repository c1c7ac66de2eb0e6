//! Pokédex Frontend App
//!
//! Root component: provides context and hosts the list view.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::PokemonList;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::services::PokemonRepository;
use crate::store::CatalogueState;

#[component]
pub fn App(config: AppConfig, repository: Rc<dyn PokemonRepository>) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(&config));
    provide_context(Store::new(CatalogueState::default()));

    view! {
        <main class="app-layout">
            <PokemonList repository=repository />
        </main>
    }
}
