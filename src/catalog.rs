//! Commands over the loaded collection

use crate::config::Config;
use crate::error::{RecipesError, Result};
use crate::terminal::TerminalView;
use dialoguer::{Input, Select};
use rasa_recipes_common::{
    detail_url, render_detail, validate, DetailOutcome, Recipe, RecipeSource,
    RecipeStore, RevealImmediately, MAX_SERVINGS, MIN_SERVINGS,
};

/// One listing line per recipe
pub fn list_lines(recipes: &[Recipe], config: &Config) -> Vec<String> {
    recipes
        .iter()
        .map(|r| {
            format!(
                "{:>3}  {}  {} [{}] {} {} {}",
                r.id,
                r.icon,
                r.title,
                r.tag,
                r.cook_time,
                r.difficulty.dots(),
                config.link(&detail_url(r.id)),
            )
        })
        .collect()
}

/// Render a recipe's detail page into text
///
/// The page goes through the same flow as the browser; `servings` drives
/// the servings control afterwards and is clamped to its range.
pub async fn show<S: RecipeSource>(
    store: &RecipeStore<S>,
    id: &str,
    servings: Option<u32>,
) -> Result<Vec<String>> {
    // surface load errors before the page swallows them into its error panel
    store.load_all().await?;

    let view = TerminalView::new();
    let outcome = render_detail(store, &view, &RevealImmediately(&view), Some(id)).await;

    match outcome {
        DetailOutcome::Rendered(mut session) => {
            if let Some(n) = servings {
                let current = session.set_servings(&view, n);
                if current != n {
                    log::warn!("Servings clamped to {}", current);
                }
            }
            Ok(view.into_lines())
        }
        DetailOutcome::Redirected => Err(RecipesError::NotFound("(no id)".into())),
        DetailOutcome::NotFound | DetailOutcome::Failed => {
            Err(RecipesError::NotFound(id.to_string()))
        }
    }
}

/// Ask for a recipe and a serving count
pub fn pick(recipes: &[Recipe]) -> Result<(i64, u32)> {
    if recipes.is_empty() {
        return Err(RecipesError::NotFound("collection is empty".into()));
    }

    let items: Vec<String> = recipes
        .iter()
        .map(|r| format!("{} {} ({})", r.icon, r.title, r.tag))
        .collect();

    let index = Select::new()
        .with_prompt("Recipe")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| RecipesError::Prompt(e.to_string()))?;

    let recipe = &recipes[index];
    let servings: u32 = Input::new()
        .with_prompt(format!("Servings ({}-{})", MIN_SERVINGS, MAX_SERVINGS))
        .default(recipe.servings.clamp(MIN_SERVINGS, MAX_SERVINGS))
        .validate_with(|n: &u32| -> std::result::Result<(), String> {
            if (MIN_SERVINGS..=MAX_SERVINGS).contains(n) {
                Ok(())
            } else {
                Err(format!("Enter a number from {} to {}", MIN_SERVINGS, MAX_SERVINGS))
            }
        })
        .interact_text()
        .map_err(|e| RecipesError::Prompt(e.to_string()))?;

    Ok((recipe.id, servings))
}

/// Every problem in the collection, as an error when there are any
pub fn check(recipes: &[Recipe]) -> Result<()> {
    let problems = validate(recipes);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(RecipesError::Invalid(problems))
    }
}
