//! Recipe data loader
//!
//! `RecipeStore` owns a `RecipeSource` and fetches the collection through it
//! at most once; every later call is served from memory for the lifetime of
//! the store (one page session in the browser).

use crate::error::{Error, Result};
use crate::types::Recipe;
use tokio::sync::OnceCell;

/// Where the raw `recipes.json` text comes from
#[allow(async_fn_in_trait)]
pub trait RecipeSource {
    /// Fetch the whole document as text
    async fn fetch_document(&self) -> Result<String>;
}

pub struct RecipeStore<S> {
    source: S,
    cache: OnceCell<Vec<Recipe>>,
}

impl<S: RecipeSource> RecipeStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The full collection, fetched on first use
    ///
    /// Concurrent first calls wait on the same fetch. A failed fetch leaves
    /// the cache empty and the error goes to the caller.
    pub async fn load_all(&self) -> Result<&[Recipe]> {
        let recipes = self
            .cache
            .get_or_try_init(|| async {
                let text = self.source.fetch_document().await.map_err(|e| {
                    log::error!("Failed to load recipes: {}", e);
                    e
                })?;
                let recipes: Vec<Recipe> = serde_json::from_str(&text).map_err(|e| {
                    log::error!("Failed to parse recipes: {}", e);
                    e
                })?;
                log::debug!("Loaded {} recipes", recipes.len());
                Ok::<_, Error>(recipes)
            })
            .await?;
        Ok(recipes.as_slice())
    }

    /// First recipe whose id equals the coerced `id`, or `None`
    pub async fn load_by_id(&self, id: &str) -> Result<Option<&Recipe>> {
        let all = self.load_all().await?;
        Ok(coerce_id(id).and_then(|id| all.iter().find(|r| r.id == id)))
    }
}

/// Interpret a query-string id the way `Number(id)` does
///
/// Whitespace is ignored and blank means 0. Anything that is not a whole
/// number cannot match a recipe and yields `None`.
pub fn coerce_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    let value: f64 = trimmed.parse().ok()?;
    // i64::MAX is not exactly representable; the bound is exclusive
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
