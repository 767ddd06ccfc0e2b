//! RASA Recipes CLI
//!
//! Terminal companion to the recipe pages: lists the collection, renders a
//! detail page with scaled ingredients, and checks the document before it
//! is published.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod source;
pub mod terminal;
