//! View models
//!
//! Plain data derived from a `Recipe` for each rendered fragment. Building
//! them is pure; turning them into DOM nodes is the binding's job.

use crate::site::detail_url;
use crate::types::Recipe;

/// Listing page card
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard {
    pub href: String,
    pub class_name: String,
    pub aria_label: String,
    pub icon: String,
    pub cook_time: String,
    pub tag: String,
    pub title: String,
    pub description: String,
    /// "● Easy" / "●● Medium"
    pub difficulty: String,
}

impl RecipeCard {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let class_name = if recipe.gradient_class.is_empty() {
            "recipe-card".to_string()
        } else {
            format!("recipe-card {}", recipe.gradient_class)
        };

        Self {
            href: detail_url(recipe.id),
            class_name,
            aria_label: aria_label(recipe),
            icon: recipe.icon.clone(),
            cook_time: recipe.cook_time.clone(),
            tag: recipe.tag.clone(),
            title: recipe.title.clone(),
            description: recipe.card_description().to_string(),
            difficulty: format!("{} {}", recipe.difficulty.dots(), recipe.difficulty.label()),
        }
    }
}

/// Hero heading split into a plain lead word and an emphasized rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroTitle {
    pub lead: String,
    pub emphasis: Option<String>,
}

impl HeroTitle {
    pub fn from_title(title: &str) -> Self {
        match title.split_once(' ') {
            Some((lead, rest)) => Self {
                lead: lead.to_string(),
                emphasis: Some(rest.to_string()),
            },
            None => Self {
                lead: title.to_string(),
                emphasis: None,
            },
        }
    }
}

/// Card in the "more recipes" strip
#[derive(Debug, Clone, PartialEq)]
pub struct MoreRecipeCard {
    pub href: String,
    pub aria_label: String,
    pub image_url: String,
    pub icon: String,
    pub tag: String,
    pub title: String,
    /// The recipe being viewed; dimmed rather than left out
    pub is_current: bool,
}

impl MoreRecipeCard {
    pub fn class_name(&self) -> &'static str {
        if self.is_current {
            "more-recipe-card current"
        } else {
            "more-recipe-card"
        }
    }
}

/// Every recipe of the collection, the current one marked
pub fn more_recipes(current: &Recipe, all: &[Recipe]) -> Vec<MoreRecipeCard> {
    all.iter()
        .map(|recipe| MoreRecipeCard {
            href: detail_url(recipe.id),
            aria_label: aria_label(recipe),
            image_url: recipe.image_url.clone(),
            icon: recipe.icon.clone(),
            tag: recipe.tag.clone(),
            title: recipe.title.clone(),
            is_current: recipe.id == current.id,
        })
        .collect()
}

pub fn document_title(recipe: &Recipe) -> String {
    format!("{} — RASA Recipe", recipe.title)
}

fn aria_label(recipe: &Recipe) -> String {
    format!("View recipe: {}", recipe.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_recipes;
    use crate::types::Difficulty;

    #[test]
    fn test_card_from_recipe() {
        let recipes = sample_recipes();
        let card = RecipeCard::from_recipe(&recipes[0]);
        assert_eq!(card.href, "recipe-details.html?id=3");
        assert_eq!(card.class_name, "recipe-card grad-3");
        assert_eq!(card.aria_label, "View recipe: Chicken Tikka Masala");
        assert_eq!(card.difficulty, "●● Medium");
        assert_eq!(card.cook_time, "40 min");
    }

    #[test]
    fn test_card_easy_single_dot() {
        let mut recipe = sample_recipes().remove(0);
        recipe.difficulty = Difficulty::Easy;
        recipe.gradient_class.clear();
        let card = RecipeCard::from_recipe(&recipe);
        assert_eq!(card.difficulty, "● Easy");
        assert_eq!(card.class_name, "recipe-card");
    }

    #[test]
    fn test_hero_title_split() {
        let title = HeroTitle::from_title("Chicken Tikka Masala");
        assert_eq!(title.lead, "Chicken");
        assert_eq!(title.emphasis.as_deref(), Some("Tikka Masala"));
    }

    #[test]
    fn test_hero_title_single_word() {
        let title = HeroTitle::from_title("Biryani");
        assert_eq!(title.lead, "Biryani");
        assert_eq!(title.emphasis, None);
    }

    #[test]
    fn test_more_recipes_keeps_current() {
        let recipes = sample_recipes();
        let strip = more_recipes(&recipes[1], &recipes);
        assert_eq!(strip.len(), recipes.len());

        let current: Vec<_> = strip.iter().filter(|c| c.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].title, recipes[1].title);
        assert_eq!(current[0].class_name(), "more-recipe-card current");
        assert_eq!(strip[0].class_name(), "more-recipe-card");
    }

    #[test]
    fn test_document_title() {
        let recipes = sample_recipes();
        assert_eq!(document_title(&recipes[0]), "Chicken Tikka Masala — RASA Recipe");
    }
}
