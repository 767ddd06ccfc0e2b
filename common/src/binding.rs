//! View binding contract
//!
//! Renderers address named slots of the host template instead of looking up
//! element ids themselves. A binding supplies the concrete elements; when a
//! slot is missing from the template every call on it is a silent no-op.

use crate::types::{IngredientGroup, Step};
use crate::view::{HeroTitle, MoreRecipeCard, RecipeCard};

/// Named element of the host template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    // listing page
    RecipesGrid,
    RecipesLoader,

    // detail page chrome
    DetailLoader,
    DetailContent,
    DetailError,

    // hero
    HeroBackground,
    HeroIcon,
    HeroTag,
    HeroTitle,
    HeroSubtitle,
    StatCookTime,
    StatPrepTime,
    StatDifficulty,
    StatServings,
    StatCalories,

    // body
    BreadcrumbTitle,
    Description,
    Steps,
    Tips,
    Pairs,
    Ingredients,
    ServingsValue,

    // quick info
    QuickCookTime,
    QuickPrepTime,
    QuickTotalTime,
    QuickDifficulty,
    QuickCalories,
    QuickBlend,

    BuyBlendName,
    MoreRecipesGrid,
}

impl Slot {
    /// Element id in the host template
    pub fn id(&self) -> &'static str {
        match self {
            Slot::RecipesGrid => "recipesGrid",
            Slot::RecipesLoader => "recipesLoader",
            Slot::DetailLoader => "detailLoader",
            Slot::DetailContent => "detailContent",
            Slot::DetailError => "detailError",
            Slot::HeroBackground => "detailHeroBg",
            Slot::HeroIcon => "detailHeroIcon",
            Slot::HeroTag => "detailHeroTag",
            Slot::HeroTitle => "detailHeroTitle",
            Slot::HeroSubtitle => "detailHeroSubtitle",
            Slot::StatCookTime => "statCookTime",
            Slot::StatPrepTime => "statPrepTime",
            Slot::StatDifficulty => "statDifficulty",
            Slot::StatServings => "statServings",
            Slot::StatCalories => "statCalories",
            Slot::BreadcrumbTitle => "breadcrumbTitle",
            Slot::Description => "detailDescription",
            Slot::Steps => "detailSteps",
            Slot::Tips => "detailTips",
            Slot::Pairs => "detailPairs",
            Slot::Ingredients => "detailIngredients",
            Slot::ServingsValue => "servingsVal",
            Slot::QuickCookTime => "qiCookTime",
            Slot::QuickPrepTime => "qiPrepTime",
            Slot::QuickTotalTime => "qiTotalTime",
            Slot::QuickDifficulty => "qiDifficulty",
            Slot::QuickCalories => "qiCalories",
            Slot::QuickBlend => "qiBlend",
            Slot::BuyBlendName => "buyBlendName",
            Slot::MoreRecipesGrid => "moreRecipesGrid",
        }
    }
}

/// Structured content that replaces a slot's children
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Cards(Vec<RecipeCard>),
    HeroTitle(HeroTitle),
    Steps(Vec<Step>),
    Tips(Vec<String>),
    Pairings(Vec<String>),
    Ingredients(Vec<IngredientGroup>),
    MoreRecipes(Vec<MoreRecipeCard>),
    /// Inline status text, e.g. a load failure inside the loader
    Notice(String),
}

/// Elements an animation addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Slot(Slot),
    /// Every element matching a CSS selector
    Selector(&'static str),
}

impl Target {
    /// CSS selector form
    pub fn selector(&self) -> String {
        match self {
            Target::Slot(slot) => format!("#{}", slot.id()),
            Target::Selector(selector) => selector.to_string(),
        }
    }
}

pub trait ViewBinding {
    fn has_slot(&self, slot: Slot) -> bool;

    fn set_text(&self, slot: Slot, text: &str);

    /// Set the CSS `background` shorthand
    fn set_background(&self, slot: Slot, css: &str);

    /// Replace the slot's children with the section's fragment
    fn fill(&self, slot: Slot, section: Section);

    /// Add the section's fragment after the slot's existing children
    fn append(&self, slot: Slot, section: Section);

    /// Detach the slot's element
    fn remove(&self, slot: Slot);

    /// Clear an inline `display: none`
    fn reveal(&self, slot: Slot);

    /// Write the heading and paragraph of an error panel and reveal it
    fn show_error(&self, slot: Slot, heading: &str, message: &str);

    /// Final resting state of an animation target: opaque, untransformed
    fn settle(&self, target: &Target);

    fn set_document_title(&self, title: &str);

    fn redirect(&self, url: &str);
}

/// Which recipe page the template is, judged by the slots it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Listing,
    Detail,
}

impl Page {
    pub fn detect<B: ViewBinding + ?Sized>(view: &B) -> Option<Page> {
        if view.has_slot(Slot::RecipesGrid) {
            Some(Page::Listing)
        } else if view.has_slot(Slot::DetailContent) || view.has_slot(Slot::DetailLoader) {
            Some(Page::Detail)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingView;

    #[test]
    fn test_slot_ids_match_template() {
        assert_eq!(Slot::RecipesGrid.id(), "recipesGrid");
        assert_eq!(Slot::HeroBackground.id(), "detailHeroBg");
        assert_eq!(Slot::ServingsValue.id(), "servingsVal");
        assert_eq!(Slot::QuickBlend.id(), "qiBlend");
    }

    #[test]
    fn test_target_selector() {
        assert_eq!(Target::Slot(Slot::Steps).selector(), "#detailSteps");
        assert_eq!(Target::Selector(".fade-up").selector(), ".fade-up");
    }

    #[test]
    fn test_page_detect() {
        let listing = RecordingView::without(&[Slot::DetailContent, Slot::DetailLoader]);
        assert_eq!(Page::detect(&listing), Some(Page::Listing));

        let detail = RecordingView::without(&[Slot::RecipesGrid]);
        assert_eq!(Page::detect(&detail), Some(Page::Detail));

        let other = RecordingView::without(&[
            Slot::RecipesGrid,
            Slot::DetailContent,
            Slot::DetailLoader,
        ]);
        assert_eq!(Page::detect(&other), None);
    }
}
