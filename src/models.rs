//! Frontend Models
//!
//! Data structures matching the Pokémon API payload.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pokémon data structure (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub picture: String,
    /// Life points
    pub life: u32,
    #[serde(default)]
    pub damage: u32,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Pokemon {
    pub fn new(id: u32, name: &str, life: u32, types: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            picture: String::new(),
            life,
            damage: 0,
            types: types.iter().map(|t| t.to_string()).collect(),
            created: None,
        }
    }

    /// Category used for the border color (first type, empty when untyped)
    pub fn primary_type(&self) -> &str {
        self.types.first().map(String::as_str).unwrap_or("")
    }

    /// Creation date as shown on cards, e.g. "Jan 5, 2024"
    pub fn created_label(&self) -> Option<String> {
        self.created.map(|date| date.format("%b %-d, %Y").to_string())
    }
}

/// Size class derived from life points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeLabel {
    Petit,
    Moyen,
    Grand,
}

impl SizeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeLabel::Petit => "Petit",
            SizeLabel::Moyen => "Moyen",
            SizeLabel::Grand => "Grand",
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size of a Pokémon: 15 or less is small, 25 or more is large
pub fn size(pokemon: &Pokemon) -> SizeLabel {
    if pokemon.life <= 15 {
        SizeLabel::Petit
    } else if pokemon.life >= 25 {
        SizeLabel::Grand
    } else {
        SizeLabel::Moyen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_life(life: u32) -> Pokemon {
        Pokemon::new(1, "Test", life, &["Normal"])
    }

    #[test]
    fn test_size_boundaries() {
        assert_eq!(size(&with_life(0)), SizeLabel::Petit);
        assert_eq!(size(&with_life(15)), SizeLabel::Petit);
        assert_eq!(size(&with_life(16)), SizeLabel::Moyen);
        assert_eq!(size(&with_life(24)), SizeLabel::Moyen);
        assert_eq!(size(&with_life(25)), SizeLabel::Grand);
        assert_eq!(size(&with_life(1000)), SizeLabel::Grand);
    }

    #[test]
    fn test_size_labels() {
        assert_eq!(SizeLabel::Petit.to_string(), "Petit");
        assert_eq!(SizeLabel::Moyen.to_string(), "Moyen");
        assert_eq!(SizeLabel::Grand.to_string(), "Grand");
    }

    #[test]
    fn test_primary_type() {
        let bulbizarre = Pokemon::new(1, "Bulbizarre", 25, &["Plante", "Poison"]);
        assert_eq!(bulbizarre.primary_type(), "Plante");
        assert_eq!(Pokemon::new(2, "MissingNo", 33, &[]).primary_type(), "");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"id": 25, "name": "Pikachu", "life": 21, "created": "2024-01-05T09:00:00Z"}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(pokemon.name, "Pikachu");
        assert!(pokemon.types.is_empty());
        assert_eq!(pokemon.damage, 0);
        assert_eq!(pokemon.created_label().as_deref(), Some("Jan 5, 2024"));
    }
}
