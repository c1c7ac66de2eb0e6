//! Search Bar Component

use leptos::prelude::*;

/// Name search input
#[component]
pub fn SearchBar(
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Rechercher un Pokémon..."
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
