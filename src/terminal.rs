//! Detail page rendered as plain text
//!
//! `TerminalView` is a `ViewBinding` that keeps the latest content of every
//! slot, then lays the page out top to bottom. Backgrounds and animations
//! have no terminal form and are dropped.

use rasa_recipes_common::view::MoreRecipeCard;
use rasa_recipes_common::{HeroTitle, Section, Slot, Target, ViewBinding};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct TerminalView {
    texts: RefCell<HashMap<Slot, String>>,
    sections: RefCell<HashMap<Slot, Section>>,
    error: RefCell<Option<(String, String)>>,
    title: RefCell<Option<String>>,
    redirect: RefCell<Option<String>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, slot: Slot) -> Option<String> {
        self.texts.borrow().get(&slot).cloned()
    }

    pub fn section(&self, slot: Slot) -> Option<Section> {
        self.sections.borrow().get(&slot).cloned()
    }

    pub fn document_title(&self) -> Option<String> {
        self.title.borrow().clone()
    }

    pub fn redirected_to(&self) -> Option<String> {
        self.redirect.borrow().clone()
    }

    /// Heading and message of the error panel, if one was shown
    pub fn error(&self) -> Option<(String, String)> {
        self.error.borrow().clone()
    }

    /// The page as printable lines
    pub fn into_lines(self) -> Vec<String> {
        if let Some((heading, message)) = self.error.into_inner() {
            return vec![heading, message];
        }

        let texts = self.texts.into_inner();
        let mut sections = self.sections.into_inner();
        let text = |slot: Slot| texts.get(&slot).map(String::as_str).unwrap_or_default();
        let mut lines = Vec::new();

        let title = match sections.remove(&Slot::HeroTitle) {
            Some(Section::HeroTitle(HeroTitle { lead, emphasis })) => match emphasis {
                Some(rest) => format!("{} {}", lead, rest),
                None => lead,
            },
            _ => text(Slot::BreadcrumbTitle).to_string(),
        };
        lines.push(format!("{}  {}", text(Slot::HeroIcon), title));
        lines.push(format!("[{}] {}", text(Slot::HeroTag), text(Slot::HeroSubtitle)));
        lines.push(format!(
            "Cook {} | Prep {} | Total {} | {} | {} | {}",
            text(Slot::StatCookTime),
            text(Slot::StatPrepTime),
            text(Slot::QuickTotalTime),
            text(Slot::StatDifficulty),
            text(Slot::StatServings),
            text(Slot::StatCalories),
        ));
        lines.push(String::new());
        lines.push(text(Slot::Description).to_string());

        if let Some(Section::Ingredients(groups)) = sections.remove(&Slot::Ingredients) {
            lines.push(String::new());
            lines.push(format!("Ingredients ({})", text(Slot::ServingsValue)));
            for group in groups {
                lines.push(format!("  {}", group.category));
                lines.extend(group.items.into_iter().map(|item| format!("    - {}", item)));
            }
        }

        if let Some(Section::Steps(steps)) = sections.remove(&Slot::Steps) {
            lines.push(String::new());
            lines.push("Method".to_string());
            for step in steps {
                match step.time {
                    Some(time) => lines.push(format!("  {}. {} ({})", step.step, step.title, time)),
                    None => lines.push(format!("  {}. {}", step.step, step.title)),
                }
                lines.push(format!("     {}", step.description));
            }
        }

        if let Some(Section::Tips(tips)) = sections.remove(&Slot::Tips) {
            if !tips.is_empty() {
                lines.push(String::new());
                lines.push("Tips".to_string());
                lines.extend(tips.into_iter().map(|tip| format!("  ✦ {}", tip)));
            }
        }

        if let Some(Section::Pairings(pairs)) = sections.remove(&Slot::Pairs) {
            if !pairs.is_empty() {
                lines.push(String::new());
                lines.push(format!("Pairs with: {}", pairs.join(", ")));
            }
        }

        lines.push(format!("Spice blend: {}", text(Slot::QuickBlend)));

        if let Some(Section::MoreRecipes(cards)) = sections.remove(&Slot::MoreRecipesGrid) {
            lines.push(String::new());
            lines.push("More recipes".to_string());
            lines.extend(cards.iter().map(more_recipe_line));
        }

        lines
    }
}

fn more_recipe_line(card: &MoreRecipeCard) -> String {
    let marker = if card.is_current { "*" } else { " " };
    format!("  {} {} {} [{}] {}", marker, card.icon, card.title, card.tag, card.href)
}

impl ViewBinding for TerminalView {
    fn has_slot(&self, _slot: Slot) -> bool {
        true
    }

    fn set_text(&self, slot: Slot, text: &str) {
        self.texts.borrow_mut().insert(slot, text.to_string());
    }

    fn set_background(&self, _slot: Slot, _css: &str) {}

    fn fill(&self, slot: Slot, section: Section) {
        self.sections.borrow_mut().insert(slot, section);
    }

    fn append(&self, slot: Slot, section: Section) {
        let mut sections = self.sections.borrow_mut();
        let section = match (sections.remove(&slot), section) {
            (Some(Section::Cards(mut existing)), Section::Cards(more)) => {
                existing.extend(more);
                Section::Cards(existing)
            }
            (_, section) => section,
        };
        sections.insert(slot, section);
    }

    fn remove(&self, slot: Slot) {
        self.texts.borrow_mut().remove(&slot);
        self.sections.borrow_mut().remove(&slot);
    }

    fn reveal(&self, _slot: Slot) {}

    fn show_error(&self, _slot: Slot, heading: &str, message: &str) {
        *self.error.borrow_mut() = Some((heading.to_string(), message.to_string()));
    }

    fn settle(&self, _target: &Target) {}

    fn set_document_title(&self, title: &str) {
        *self.title.borrow_mut() = Some(title.to_string());
    }

    fn redirect(&self, url: &str) {
        log::debug!("Redirect to {}", url);
        *self.redirect.borrow_mut() = Some(url.to_string());
    }
}
