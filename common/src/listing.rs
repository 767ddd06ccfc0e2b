//! Listing page
//!
//! Loads the collection and fills the grid with one card per recipe.

use crate::binding::{Section, Slot, ViewBinding};
use crate::motion::{listing_plan, Animator};
use crate::store::{RecipeSource, RecipeStore};
use crate::view::RecipeCard;

pub const LOAD_FAILED_MESSAGE: &str = "Unable to load recipes. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOutcome {
    /// The template has no grid; nothing was loaded
    NoGrid,
    /// Number of cards rendered (zero for an empty collection)
    Rendered(usize),
    Failed,
}

pub async fn render_listing<S, B>(
    store: &RecipeStore<S>,
    view: &B,
    animator: &dyn Animator,
) -> ListingOutcome
where
    S: RecipeSource,
    B: ViewBinding + ?Sized,
{
    if !view.has_slot(Slot::RecipesGrid) {
        return ListingOutcome::NoGrid;
    }

    let recipes = match store.load_all().await {
        Ok(recipes) => recipes,
        Err(e) => {
            log::warn!("Listing unavailable: {}", e);
            view.fill(Slot::RecipesLoader, Section::Notice(LOAD_FAILED_MESSAGE.to_string()));
            return ListingOutcome::Failed;
        }
    };

    view.remove(Slot::RecipesLoader);

    let cards: Vec<RecipeCard> = recipes.iter().map(RecipeCard::from_recipe).collect();
    let count = cards.len();
    view.append(Slot::RecipesGrid, Section::Cards(cards));

    animator.play(&listing_plan());

    ListingOutcome::Rendered(count)
}
