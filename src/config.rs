use crate::error::{RecipesError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured data file
pub const DATA_ENV: &str = "RASA_RECIPES_DATA";

const DEFAULT_DATA_FILE: &str = "recipes.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Local copy of the published recipes document
    pub data_file: Option<PathBuf>,
    /// Where the pages are served, used to print absolute links
    pub site_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RecipesError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("rasa-recipes").join("config.json"))
    }

    /// Data file to read: the `--data` flag, then `RASA_RECIPES_DATA`,
    /// then the configured file, then `recipes.json` in the working directory
    pub fn data_path(&self, flag: Option<PathBuf>) -> PathBuf {
        self.resolve_data_path(flag, std::env::var_os(DATA_ENV).map(PathBuf::from))
    }

    fn resolve_data_path(&self, flag: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
        flag.or(env)
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Link to a page, absolute when a site URL is configured
    pub fn link(&self, page: &str) -> String {
        match &self.site_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), page),
            None => page.to_string(),
        }
    }
}
