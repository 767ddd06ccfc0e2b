//! Collection checks
//!
//! The pages trust the document: duplicate ids make later recipes
//! unreachable and zero servings breaks the scaler. These checks let authors
//! catch that before publishing.

use crate::types::Recipe;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    DuplicateId { id: i64, first: usize, again: usize },
    ZeroServings { id: i64 },
    EmptyTitle { id: i64 },
    NoSteps { id: i64 },
    NoIngredients { id: i64 },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::DuplicateId { id, first, again } => write!(
                f,
                "id {} is used by entries #{} and #{}; only the first is reachable",
                id, first, again
            ),
            Problem::ZeroServings { id } => write!(f, "recipe {}: servings must be at least 1", id),
            Problem::EmptyTitle { id } => write!(f, "recipe {}: title is empty", id),
            Problem::NoSteps { id } => write!(f, "recipe {}: has no steps", id),
            Problem::NoIngredients { id } => write!(f, "recipe {}: has no ingredients", id),
        }
    }
}

/// Every problem in the collection, in document order
pub fn validate(recipes: &[Recipe]) -> Vec<Problem> {
    let mut problems = Vec::new();
    let mut seen: HashMap<i64, usize> = HashMap::new();

    for (index, recipe) in recipes.iter().enumerate() {
        let id = recipe.id;

        if let Some(&first) = seen.get(&id) {
            problems.push(Problem::DuplicateId {
                id,
                first,
                again: index,
            });
        } else {
            seen.insert(id, index);
        }

        if recipe.servings == 0 {
            problems.push(Problem::ZeroServings { id });
        }
        if recipe.title.trim().is_empty() {
            problems.push(Problem::EmptyTitle { id });
        }
        if recipe.steps.is_empty() {
            problems.push(Problem::NoSteps { id });
        }
        if recipe.ingredients.iter().all(|group| group.items.is_empty()) {
            problems.push(Problem::NoIngredients { id });
        }
    }

    problems
}
