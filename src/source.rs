//! Recipes document on the local filesystem

use rasa_recipes_common::{RecipeSource, Result};
use std::path::{Path, PathBuf};

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecipeSource for FileSource {
    async fn fetch_document(&self) -> Result<String> {
        log::debug!("Reading {}", self.path.display());
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
