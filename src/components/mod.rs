//! UI Components
//!
//! Reusable Leptos components.

mod loading_spinner;
mod pokemon_card;
mod pokemon_list;
mod search_bar;

pub use loading_spinner::LoadingSpinner;
pub use pokemon_card::PokemonCard;
pub use pokemon_list::PokemonList;
pub use search_bar::SearchBar;
