//! Recipe data model
//!
//! Mirrors the records of the static `recipes.json` document. Everything here
//! is read-only once loaded; serving changes are view state, not data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty label
///
/// Only "Easy" is distinguished; every other label is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Other(String),
}

impl Difficulty {
    pub fn label(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Other(label) => label,
        }
    }

    /// Dot indicator shown on listing cards
    pub fn dots(&self) -> &'static str {
        match self {
            Difficulty::Easy => "●",
            Difficulty::Other(_) => "●●",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        if label == "Easy" {
            Difficulty::Easy
        } else {
            Difficulty::Other(label)
        }
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => "Easy".to_string(),
            Difficulty::Other(label) => label,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One method step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub step: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub description: String,
}

/// Ingredients under one category heading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// A single recipe record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    #[serde(default)]
    pub description: String,

    /// Listing blurb; the description is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_description: Option<String>,

    #[serde(default)]
    pub tag: String,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub cook_time: String,

    #[serde(default)]
    pub prep_time: String,

    #[serde(default)]
    pub total_time: String,

    #[serde(default)]
    pub calories: String,

    pub servings: u32,

    #[serde(default)]
    pub spice_blend: String,

    // The published document spells this key with a capital I
    #[serde(default, rename = "ImageUrl", alias = "imageUrl")]
    pub image_url: String,

    /// CSS background of the detail hero
    #[serde(default)]
    pub gradient_style: String,

    /// CSS class added to the listing card
    #[serde(default)]
    pub gradient_class: String,

    #[serde(default)]
    pub steps: Vec<Step>,

    #[serde(default)]
    pub tips: Vec<String>,

    #[serde(default)]
    pub pairs_with: Vec<String>,

    #[serde(default)]
    pub ingredients: Vec<IngredientGroup>,
}

impl Recipe {
    pub fn card_description(&self) -> &str {
        self.card_description.as_deref().unwrap_or(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 3,
        "title": "Chicken Tikka Masala",
        "subtitle": "Smoky, creamy, deeply spiced",
        "description": "A restaurant classic.",
        "tag": "Curry",
        "icon": "🍛",
        "difficulty": "Medium",
        "cookTime": "40 min",
        "prepTime": "20 min",
        "totalTime": "1 hr",
        "calories": "520 kcal",
        "servings": 4,
        "spiceBlend": "Garam Masala",
        "ImageUrl": "img/tikka.jpg",
        "gradientStyle": "linear-gradient(135deg, #8b3a1a, #d4a24c)",
        "gradientClass": "grad-3",
        "steps": [
            {"step": 1, "title": "Marinate", "time": "30 min", "description": "Coat the chicken."},
            {"step": 2, "title": "Simmer", "description": "Add the sauce."}
        ],
        "tips": ["Use thigh meat."],
        "pairsWith": ["Naan", "Basmati rice"],
        "ingredients": [{"category": "Marinade", "items": ["500g chicken", "2 tbsp yogurt"]}]
    }"#;

    #[test]
    fn test_recipe_deserialize() {
        let recipe: Recipe = serde_json::from_str(SAMPLE).expect("parse failed");
        assert_eq!(recipe.id, 3);
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.difficulty, Difficulty::Other("Medium".to_string()));
        assert_eq!(recipe.image_url, "img/tikka.jpg");
        assert_eq!(recipe.steps.len(), 2);
        assert_eq!(recipe.steps[0].time.as_deref(), Some("30 min"));
        assert_eq!(recipe.steps[1].time, None);
        assert_eq!(recipe.pairs_with, vec!["Naan", "Basmati rice"]);
        assert_eq!(recipe.ingredients[0].items[1], "2 tbsp yogurt");
    }

    #[test]
    fn test_recipe_minimal_defaults() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id": 1, "title": "Dal", "servings": 2}"#).unwrap();
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert!(recipe.steps.is_empty());
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_recipe_missing_servings_is_error() {
        let result = serde_json::from_str::<Recipe>(r#"{"id": 1, "title": "Dal"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_image_url_alias() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 1, "title": "Dal", "servings": 2, "imageUrl": "dal.jpg"}"#,
        )
        .unwrap();
        assert_eq!(recipe.image_url, "dal.jpg");
    }

    #[test]
    fn test_card_description_fallback() {
        let mut recipe: Recipe = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(recipe.card_description(), "A restaurant classic.");

        recipe.card_description = Some("Short blurb".to_string());
        assert_eq!(recipe.card_description(), "Short blurb");
    }

    #[test]
    fn test_difficulty_dots() {
        assert_eq!(Difficulty::Easy.dots(), "●");
        assert_eq!(Difficulty::from("Hard".to_string()).dots(), "●●");
        assert_eq!(Difficulty::from("Medium".to_string()).label(), "Medium");
    }

    #[test]
    fn test_difficulty_serialize_roundtrip_label() {
        let json = serde_json::to_string(&Difficulty::Other("Medium".into())).unwrap();
        assert_eq!(json, "\"Medium\"");
    }
}
