//! RASA Recipes Common Library
//!
//! Shared by the browser pages (WASM) and the CLI: the recipe model, the
//! memoizing data loader, ingredient scaling, and the listing/detail page
//! flows written against the `ViewBinding` contract.

pub mod types;
pub mod error;
pub mod site;
pub mod store;
pub mod scale;
pub mod servings;
pub mod view;
pub mod binding;
pub mod motion;
pub mod listing;
pub mod detail;
pub mod validate;

#[cfg(test)]
mod test_support;

pub use types::{Difficulty, IngredientGroup, Recipe, Step};
pub use error::{Error, Result};
pub use site::{detail_url, listing_url, DATA_PATH};
pub use store::{coerce_id, RecipeSource, RecipeStore};
pub use scale::scale_ingredient;
pub use servings::{ServingsControl, MAX_SERVINGS, MIN_SERVINGS};
pub use view::{HeroTitle, MoreRecipeCard, RecipeCard};
pub use binding::{Page, Section, Slot, Target, ViewBinding};
pub use motion::{AnimationPlan, Animator, RevealImmediately, Tween};
pub use listing::{render_listing, ListingOutcome};
pub use detail::{render_detail, DetailOutcome, DetailSession};
pub use validate::{validate, Problem};
