//! Servings control
//!
//! Holds the base and current serving counts of the open recipe. Ingredient
//! lines are always derived from the recipe's original text, never from a
//! previous scaling result.

use crate::scale::scale_ingredient;
use crate::types::IngredientGroup;

pub const MIN_SERVINGS: u32 = 1;
pub const MAX_SERVINGS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServingsControl {
    base: u32,
    current: u32,
}

impl ServingsControl {
    /// Start at the recipe's own serving count
    pub fn new(base: u32) -> Self {
        let base = base.max(MIN_SERVINGS);
        Self { base, current: base }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    /// Apply an increment/decrement, clamped to [1, 20]
    ///
    /// Returns the new count.
    pub fn change(&mut self, delta: i32) -> u32 {
        let next = i64::from(self.current) + i64::from(delta);
        self.current = next.clamp(i64::from(MIN_SERVINGS), i64::from(MAX_SERVINGS)) as u32;
        self.current
    }

    /// Jump to an absolute count, clamped the same way
    pub fn set(&mut self, servings: u32) -> u32 {
        self.current = servings.clamp(MIN_SERVINGS, MAX_SERVINGS);
        self.current
    }

    /// current ÷ base
    pub fn ratio(&self) -> f64 {
        f64::from(self.current) / f64::from(self.base)
    }

    /// "1 serving" / "N servings"
    pub fn label(&self) -> String {
        servings_label(self.current)
    }

    /// Ingredient groups rescaled from the original lines
    pub fn scale_groups(&self, original: &[IngredientGroup]) -> Vec<IngredientGroup> {
        let ratio = self.ratio();
        original
            .iter()
            .map(|group| IngredientGroup {
                category: group.category.clone(),
                items: group
                    .items
                    .iter()
                    .map(|item| scale_ingredient(item, ratio).into_owned())
                    .collect(),
            })
            .collect()
    }
}

pub fn servings_label(count: u32) -> String {
    if count == 1 {
        "1 serving".to_string()
    } else {
        format!("{} servings", count)
    }
}
