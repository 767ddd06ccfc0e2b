use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipesError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Recipe not found: {0}")]
    NotFound(String),

    #[error("{} problem(s) found in the collection", .0.len())]
    Invalid(Vec<rasa_recipes_common::Problem>),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Could not load recipes: {0}")]
    Load(#[from] rasa_recipes_common::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecipesError>;
