//! Test fixtures: an in-memory source, sample recipes and a recording view

use crate::binding::{Section, Slot, Target, ViewBinding};
use crate::error::{Error, Result};
use crate::store::RecipeSource;
use crate::types::Recipe;
use std::cell::{Cell, RefCell};

pub fn sample_json() -> &'static str {
    r#"[
      {
        "id": 3,
        "title": "Chicken Tikka Masala",
        "subtitle": "Smoky, creamy, deeply spiced",
        "description": "A restaurant classic made at home.",
        "cardDescription": "Charred chicken in a velvety tomato sauce.",
        "tag": "Curry",
        "icon": "🍛",
        "difficulty": "Medium",
        "cookTime": "40 min",
        "prepTime": "20 min",
        "totalTime": "1 hr",
        "calories": "520 kcal",
        "servings": 4,
        "spiceBlend": "Garam Masala",
        "ImageUrl": "img/tikka.jpg",
        "gradientStyle": "linear-gradient(135deg, #8b3a1a, #d4a24c)",
        "gradientClass": "grad-3",
        "steps": [
          {"step": 1, "title": "Marinate", "time": "30 min", "description": "Coat the chicken."},
          {"step": 2, "title": "Char", "time": "10 min", "description": "Grill until blackened at the edges."},
          {"step": 3, "title": "Simmer", "description": "Finish in the sauce."}
        ],
        "tips": ["Use thigh meat.", "Rest the marinade overnight."],
        "pairsWith": ["Naan", "Basmati rice"],
        "ingredients": [
          {"category": "Chicken", "items": ["750g chicken thighs", "2 tbsp yogurt"]},
          {"category": "Naan Dough", "items": ["2 cups flour", "1 tsp salt", "Water as needed"]}
        ]
      },
      {
        "id": 4,
        "title": "Masala Chai",
        "subtitle": "Spiced milk tea",
        "description": "Warming and sweet.",
        "tag": "Drink",
        "icon": "☕",
        "difficulty": "Easy",
        "cookTime": "10 min",
        "prepTime": "2 min",
        "totalTime": "12 min",
        "calories": "120 kcal",
        "servings": 2,
        "spiceBlend": "Chai Masala",
        "ImageUrl": "img/chai.jpg",
        "gradientStyle": "linear-gradient(135deg, #6b4226, #c89b6d)",
        "gradientClass": "grad-4",
        "steps": [
          {"step": 2, "title": "Brew", "description": "Add tea and milk."},
          {"step": 1, "title": "Boil", "description": "Boil water with the spices."}
        ],
        "tips": [],
        "pairsWith": ["Biscuits"],
        "ingredients": [{"category": "Tea", "items": ["1 cup water", "1 cup milk", "2 tsp tea"]}]
      },
      {
        "id": 7,
        "title": "Vegetable Biryani",
        "subtitle": "Layered and fragrant",
        "description": "Rice and vegetables steamed together.",
        "tag": "Rice",
        "icon": "🍚",
        "difficulty": "Hard",
        "cookTime": "50 min",
        "prepTime": "30 min",
        "totalTime": "1 hr 20 min",
        "calories": "430 kcal",
        "servings": 6,
        "spiceBlend": "Biryani Masala",
        "ImageUrl": "img/biryani.jpg",
        "gradientStyle": "linear-gradient(135deg, #7a5c1e, #e0b553)",
        "gradientClass": "grad-7",
        "steps": [{"step": 1, "title": "Layer", "time": "50 min", "description": "Layer and steam."}],
        "tips": ["Soak the rice."],
        "pairsWith": ["Raita"],
        "ingredients": [{"category": "Rice", "items": ["500g basmati rice", "3 cups water"]}]
      }
    ]"#
}

pub fn sample_recipes() -> Vec<Recipe> {
    serde_json::from_str(sample_json()).expect("sample recipes must parse")
}

/// Source serving fixed text, counting fetches
pub struct StaticSource {
    text: String,
    error: RefCell<Option<Error>>,
    fetches: Cell<usize>,
}

impl StaticSource {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            error: RefCell::new(None),
            fetches: Cell::new(0),
        }
    }

    pub fn failing(error: Error) -> Self {
        Self {
            text: String::new(),
            error: RefCell::new(Some(error)),
            fetches: Cell::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl RecipeSource for StaticSource {
    async fn fetch_document(&self) -> Result<String> {
        self.fetches.set(self.fetches.get() + 1);
        match self.error.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(self.text.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Text(Slot, String),
    Background(Slot, String),
    Fill(Slot, Section),
    Append(Slot, Section),
    Remove(Slot),
    Reveal(Slot),
    ShowError(Slot, String, String),
    Settle(Target),
    Title(String),
    Redirect(String),
}

/// Binding that records what a renderer did
///
/// Slots listed as missing (or already removed) swallow calls, like a
/// template without those elements.
#[derive(Default)]
pub struct RecordingView {
    missing: Vec<Slot>,
    removed: RefCell<Vec<Slot>>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingView {
    pub fn without(missing: &[Slot]) -> Self {
        Self {
            missing: missing.to_vec(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Latest text written to `slot`
    pub fn text(&self, slot: Slot) -> Option<String> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            Call::Text(s, text) if *s == slot => Some(text.clone()),
            _ => None,
        })
    }

    pub fn last_fill(&self, slot: Slot) -> Option<Section> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            Call::Fill(s, section) if *s == slot => Some(section.clone()),
            _ => None,
        })
    }

    pub fn document_title(&self) -> Option<String> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            Call::Title(title) => Some(title.clone()),
            _ => None,
        })
    }

    fn record(&self, slot: Slot, call: Call) {
        if self.has_slot(slot) {
            self.calls.borrow_mut().push(call);
        }
    }
}

impl ViewBinding for RecordingView {
    fn has_slot(&self, slot: Slot) -> bool {
        !self.missing.contains(&slot) && !self.removed.borrow().contains(&slot)
    }

    fn set_text(&self, slot: Slot, text: &str) {
        self.record(slot, Call::Text(slot, text.to_string()));
    }

    fn set_background(&self, slot: Slot, css: &str) {
        self.record(slot, Call::Background(slot, css.to_string()));
    }

    fn fill(&self, slot: Slot, section: Section) {
        self.record(slot, Call::Fill(slot, section));
    }

    fn append(&self, slot: Slot, section: Section) {
        self.record(slot, Call::Append(slot, section));
    }

    fn remove(&self, slot: Slot) {
        self.record(slot, Call::Remove(slot));
        self.removed.borrow_mut().push(slot);
    }

    fn reveal(&self, slot: Slot) {
        self.record(slot, Call::Reveal(slot));
    }

    fn show_error(&self, slot: Slot, heading: &str, message: &str) {
        self.record(
            slot,
            Call::ShowError(slot, heading.to_string(), message.to_string()),
        );
    }

    fn settle(&self, target: &Target) {
        match target {
            Target::Slot(slot) => self.record(*slot, Call::Settle(target.clone())),
            Target::Selector(_) => self.calls.borrow_mut().push(Call::Settle(target.clone())),
        }
    }

    fn set_document_title(&self, title: &str) {
        self.calls.borrow_mut().push(Call::Title(title.to_string()));
    }

    fn redirect(&self, url: &str) {
        self.calls.borrow_mut().push(Call::Redirect(url.to_string()));
    }
}
