//! Detail page
//!
//! Flow: parse id → load recipe and collection together → not-found /
//! failure panel, or render every section in order → animate. The returned
//! `DetailSession` keeps the servings state for later rescaling.

use crate::binding::{Section, Slot, ViewBinding};
use crate::motion::{detail_plan, Animator};
use crate::servings::ServingsControl;
use crate::site::listing_url;
use crate::store::{RecipeSource, RecipeStore};
use crate::types::Recipe;
use crate::view::{document_title, more_recipes, HeroTitle};

pub const NOT_FOUND_HEADING: &str = "Recipe not found.";
pub const NOT_FOUND_MESSAGE: &str =
    "The recipe you're looking for doesn't exist or has been removed.";
pub const FAILED_HEADING: &str = "Something went wrong.";
pub const FAILED_MESSAGE: &str =
    "We couldn't load this recipe. Please check your connection and try again.";

#[derive(Debug)]
pub enum DetailOutcome {
    /// No id in the URL; sent back to the listing page
    Redirected,
    NotFound,
    Failed,
    Rendered(DetailSession),
}

/// The recipe on screen and its serving count
#[derive(Debug, Clone)]
pub struct DetailSession {
    recipe: Recipe,
    servings: ServingsControl,
}

impl DetailSession {
    pub fn new(recipe: Recipe) -> Self {
        let servings = ServingsControl::new(recipe.servings);
        Self { recipe, servings }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn servings(&self) -> &ServingsControl {
        &self.servings
    }

    /// Step the serving count and re-render the ingredient list
    ///
    /// Needs both the servings label and the ingredient list in the
    /// template; otherwise nothing changes.
    pub fn change_servings<B: ViewBinding + ?Sized>(&mut self, view: &B, delta: i32) -> u32 {
        if !view.has_slot(Slot::ServingsValue) || !view.has_slot(Slot::Ingredients) {
            return self.servings.current();
        }
        let current = self.servings.change(delta);
        self.render_ingredients(view);
        current
    }

    /// Jump straight to a serving count
    pub fn set_servings<B: ViewBinding + ?Sized>(&mut self, view: &B, servings: u32) -> u32 {
        let current = self.servings.set(servings);
        self.render_ingredients(view);
        current
    }

    fn render_ingredients<B: ViewBinding + ?Sized>(&self, view: &B) {
        view.set_text(Slot::ServingsValue, &self.servings.label());
        view.fill(
            Slot::Ingredients,
            Section::Ingredients(self.servings.scale_groups(&self.recipe.ingredients)),
        );
    }
}

pub async fn render_detail<S, B>(
    store: &RecipeStore<S>,
    view: &B,
    animator: &dyn Animator,
    id: Option<&str>,
) -> DetailOutcome
where
    S: RecipeSource,
    B: ViewBinding + ?Sized,
{
    let id = match id {
        Some(id) if !id.is_empty() => id,
        _ => {
            log::info!("No recipe id, redirecting to {}", listing_url());
            view.redirect(listing_url());
            return DetailOutcome::Redirected;
        }
    };

    let loaded = futures::future::try_join(store.load_by_id(id), store.load_all()).await;
    let (recipe, all) = match loaded {
        Ok((Some(recipe), all)) => (recipe, all),
        Ok((None, _)) => {
            log::warn!("Recipe {} not found", id);
            show_error(view, NOT_FOUND_HEADING, NOT_FOUND_MESSAGE);
            return DetailOutcome::NotFound;
        }
        Err(e) => {
            log::error!("Detail page error: {}", e);
            show_error(view, FAILED_HEADING, FAILED_MESSAGE);
            return DetailOutcome::Failed;
        }
    };

    let session = DetailSession::new(recipe.clone());
    render_page(view, &session, all);
    view.set_document_title(&document_title(recipe));
    animator.play(&detail_plan());

    DetailOutcome::Rendered(session)
}

/// Populate every section in page order
pub fn render_page<B: ViewBinding + ?Sized>(view: &B, session: &DetailSession, all: &[Recipe]) {
    let r = session.recipe();

    view.remove(Slot::DetailLoader);
    view.reveal(Slot::DetailContent);

    // hero
    view.set_background(Slot::HeroBackground, &r.gradient_style);
    view.set_text(Slot::HeroIcon, &r.icon);
    view.set_text(Slot::HeroTag, &r.tag);
    view.fill(Slot::HeroTitle, Section::HeroTitle(HeroTitle::from_title(&r.title)));
    view.set_text(Slot::HeroSubtitle, &r.subtitle);
    view.set_text(Slot::StatCookTime, &r.cook_time);
    view.set_text(Slot::StatPrepTime, &r.prep_time);
    view.set_text(Slot::StatDifficulty, r.difficulty.label());
    view.set_text(Slot::StatServings, &format!("{} servings", r.servings));
    view.set_text(Slot::StatCalories, &r.calories);

    view.set_text(Slot::BreadcrumbTitle, &r.title);
    view.set_text(Slot::Description, &r.description);

    view.fill(Slot::Steps, Section::Steps(r.steps.clone()));
    view.fill(Slot::Tips, Section::Tips(r.tips.clone()));
    view.fill(Slot::Pairs, Section::Pairings(r.pairs_with.clone()));

    if view.has_slot(Slot::Ingredients) {
        session.render_ingredients(view);
    }

    // quick info
    view.set_text(Slot::QuickCookTime, &r.cook_time);
    view.set_text(Slot::QuickPrepTime, &r.prep_time);
    view.set_text(Slot::QuickTotalTime, &r.total_time);
    view.set_text(Slot::QuickDifficulty, r.difficulty.label());
    view.set_text(Slot::QuickCalories, &r.calories);
    view.set_text(Slot::QuickBlend, &r.spice_blend);

    view.set_text(Slot::BuyBlendName, &r.spice_blend);

    view.fill(Slot::MoreRecipesGrid, Section::MoreRecipes(more_recipes(r, all)));
}

fn show_error<B: ViewBinding + ?Sized>(view: &B, heading: &str, message: &str) {
    view.remove(Slot::DetailLoader);
    view.show_error(Slot::DetailError, heading, message);
}
