//! Pokémon Type Colors
//!
//! Maps a type name to the color used for borders and type chips.

/// Color for unknown or missing types
pub const DEFAULT_COLOR: &str = "#303030";

/// Known Pokémon types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PokemonType {
    Feu,
    Eau,
    Plante,
    Insecte,
    Normal,
    Vol,
    Poison,
    Fee,
    Electrik,
}

impl PokemonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PokemonType::Feu => "Feu",
            PokemonType::Eau => "Eau",
            PokemonType::Plante => "Plante",
            PokemonType::Insecte => "Insecte",
            PokemonType::Normal => "Normal",
            PokemonType::Vol => "Vol",
            PokemonType::Poison => "Poison",
            PokemonType::Fee => "Fée",
            PokemonType::Electrik => "Electrik",
        }
    }

    /// Parse a type name, French or English, ignoring case and surrounding spaces
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "feu" | "fire" => Some(PokemonType::Feu),
            "eau" | "water" => Some(PokemonType::Eau),
            "plante" | "grass" => Some(PokemonType::Plante),
            "insecte" | "bug" => Some(PokemonType::Insecte),
            "normal" => Some(PokemonType::Normal),
            "vol" | "flying" => Some(PokemonType::Vol),
            "poison" => Some(PokemonType::Poison),
            "fée" | "fee" | "fairy" => Some(PokemonType::Fee),
            "electrik" | "electric" => Some(PokemonType::Electrik),
            _ => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PokemonType::Feu => "#EF5350",
            PokemonType::Eau => "#42A5F5",
            PokemonType::Plante => "#66BB6A",
            PokemonType::Insecte => "#8d6e63",
            PokemonType::Normal => "#8E8E8E",
            PokemonType::Vol => "#90CAF9",
            PokemonType::Poison => "#b388ff",
            PokemonType::Fee => "#f8bbd0",
            PokemonType::Electrik => "#f4ff81",
        }
    }
}

/// Color for a type name, `DEFAULT_COLOR` when unknown
pub fn pokemon_color(type_name: &str) -> &'static str {
    PokemonType::from_name(type_name)
        .map(|t| t.color())
        .unwrap_or(DEFAULT_COLOR)
}
