//! Leptos fragments for structured sections

use leptos::prelude::*;
use rasa_recipes_common::{HeroTitle, IngredientGroup, MoreRecipeCard, RecipeCard, Section, Step};
use std::any::Any;
use web_sys::HtmlElement;

/// Keeps a mounted fragment alive; dropping it unmounts the nodes
pub type Mounted = Box<dyn Any>;

/// Mount a section's fragment after the existing children of `parent`
pub fn mount(parent: HtmlElement, section: Section) -> Mounted {
    Box::new(leptos::mount::mount_to(parent, move || section_view(section)))
}

fn section_view(section: Section) -> AnyView {
    match section {
        Section::Cards(cards) => cards.into_iter().map(recipe_card).collect_view().into_any(),
        Section::HeroTitle(title) => hero_title(title),
        Section::Steps(steps) => steps.into_iter().map(step_item).collect_view().into_any(),
        Section::Tips(tips) => tips.into_iter().map(tip_item).collect_view().into_any(),
        Section::Pairings(items) => items
            .into_iter()
            .map(|item| view! { <span class="pairs-pill">{item}</span> })
            .collect_view()
            .into_any(),
        Section::Ingredients(groups) => groups
            .into_iter()
            .map(ingredient_group)
            .collect_view()
            .into_any(),
        Section::MoreRecipes(cards) => cards
            .into_iter()
            .map(more_recipe_card)
            .collect_view()
            .into_any(),
        Section::Notice(message) => view! {
            <p style="color:var(--text-brown);opacity:0.5;font-size:0.9rem;">{message}</p>
        }
        .into_any(),
    }
}

fn recipe_card(card: RecipeCard) -> impl IntoView {
    view! {
        <a href=card.href class=card.class_name aria-label=card.aria_label>
            <div class="recipe-card-image">
                <div class="recipe-card-image-bg"></div>
                <div class="recipe-icon">{card.icon}</div>
                <div class="recipe-card-meta">{card.cook_time}</div>
            </div>
            <div class="recipe-card-body">
                <div class="recipe-card-tag">{card.tag}</div>
                <div class="recipe-card-name">{card.title}</div>
                <div class="recipe-card-desc">{card.description}</div>
                <div class="recipe-card-footer">
                    <div class="recipe-difficulty">{card.difficulty}</div>
                    <span class="btn-small" style="pointer-events:none;">"Read More"</span>
                </div>
            </div>
        </a>
    }
}

// first word plain, the rest in <em>
fn hero_title(title: HeroTitle) -> AnyView {
    match title.emphasis {
        Some(rest) => view! { {title.lead} " " <em>{rest}</em> }.into_any(),
        None => title.lead.into_any(),
    }
}

fn step_item(step: Step) -> impl IntoView {
    view! {
        <div class="detail-step">
            <div class="detail-step-num">{step.step}</div>
            <div class="detail-step-content">
                <div class="detail-step-header">
                    <div class="detail-step-title">{step.title}</div>
                    {step.time.map(|time| view! { <span class="detail-step-time">{time}</span> })}
                </div>
                <p class="detail-step-desc">{step.description}</p>
            </div>
        </div>
    }
}

fn tip_item(tip: String) -> impl IntoView {
    view! {
        <div class="detail-tip">
            <span class="detail-tip-icon">"✦"</span>
            <span class="detail-tip-text">{tip}</span>
        </div>
    }
}

fn ingredient_group(group: IngredientGroup) -> impl IntoView {
    view! {
        <div class="ingredient-category">{group.category}</div>
        {group
            .items
            .into_iter()
            .map(|item| view! { <div class="ingredient-item">{item}</div> })
            .collect_view()}
    }
}

fn more_recipe_card(card: MoreRecipeCard) -> impl IntoView {
    let class_name = card.class_name();
    let thumb_style = format!(
        "background-image:url('{}');background-size:cover;background-position:center;background-repeat:no-repeat;",
        card.image_url
    );

    view! {
        <a href=card.href class=class_name aria-label=card.aria_label>
            <div class="more-recipe-thumb">
                <div class="more-recipe-thumb-bg" style=thumb_style></div>
                <span class="more-recipe-thumb-icon">{card.icon}</span>
            </div>
            <div class="more-recipe-info">
                <div class="more-recipe-tag">{card.tag}</div>
                <div class="more-recipe-name">{card.title}</div>
            </div>
        </a>
    }
}
