//! Pokémon Card Component
//!
//! One catalogue entry; the border takes the primary type color while hovered.

use leptos::html;
use leptos::prelude::*;
use leptos_border::{bind_border_effect, create_border_signals, make_on_mouseenter, make_on_mouseleave};

use crate::colors::pokemon_color;
use crate::models::{size, Pokemon};

#[component]
pub fn PokemonCard(
    pokemon: Pokemon,
    /// Called with the Pokémon name on click
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let border = create_border_signals();
    bind_border_effect(border, node_ref);

    let on_mouseenter = make_on_mouseenter(border, pokemon.primary_type().to_string(), |category: &str| {
        pokemon_color(category).to_string()
    });
    let on_mouseleave = make_on_mouseleave(border);

    let name = pokemon.name.clone();
    let meta = format!("{} PV · {}", pokemon.life, size(&pokemon));
    let created = pokemon.created_label().unwrap_or_default();

    view! {
        <div
            class="pokemon-card"
            node_ref=node_ref
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=move |_| on_select.run(name.clone())
        >
            <img class="pokemon-picture" src=pokemon.picture alt=pokemon.name.clone() />
            <h2 class="pokemon-name">{pokemon.name.clone()}</h2>
            <p class="pokemon-meta">{meta}</p>
            <div class="pokemon-types">
                {pokemon.types.into_iter().map(|t| {
                    let style = format!("background-color: {};", pokemon_color(&t));
                    view! { <span class="type-chip" style=style>{t}</span> }
                }).collect_view()}
            </div>
            <p class="pokemon-created">{created}</p>
        </div>
    }
}
