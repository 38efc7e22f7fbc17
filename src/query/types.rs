use serde::{Deserialize, Serialize};

/// Lightweight record shown in the list grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PokemonSummary {
    pub id: String,
    /// Pokédex number as reported by the backend, e.g. "001".
    pub number: String,
    pub name: String,
    /// Artwork URL. Shown as text in the detail dialog.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// A minimum/maximum pair as reported by the backend ("0.61m", "6.04kg").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PokemonDimension {
    pub minimum: String,
    pub maximum: String,
}

/// Full record shown in the detail dialog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDetail {
    pub id: String,
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub classification: String,
    #[serde(default)]
    pub height: PokemonDimension,
    #[serde(default)]
    pub weight: PokemonDimension,
    #[serde(rename = "maxCP", default)]
    pub max_cp: i64,
    #[serde(rename = "maxHP", default)]
    pub max_hp: i64,
    #[serde(default)]
    pub flee_rate: f64,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub resistant: Vec<String>,
}

impl PokemonDetail {
    /// Projects the detail record down to the fields the grid shows.
    pub fn summary(&self) -> PokemonSummary {
        PokemonSummary {
            id: self.id.clone(),
            number: self.number.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
            types: self.types.clone(),
        }
    }
}
