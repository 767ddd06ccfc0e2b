//! `ViewBinding` over the live document

use crate::fragments::{self, Mounted};
use rasa_recipes_common::{Section, Slot, Target, ViewBinding};
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Binding to the live document
///
/// Owns the Leptos fragments it mounted, per slot. Refilling a slot drops
/// the previous ones, and dropping the binding unmounts everything.
pub struct DomBinding {
    document: Document,
    mounted: RefCell<HashMap<Slot, Vec<Mounted>>>,
}

impl DomBinding {
    pub fn new() -> Self {
        Self {
            document: gloo::utils::document(),
            mounted: RefCell::new(HashMap::new()),
        }
    }

    /// Fragments currently mounted in `slot`
    pub fn mounted_count(&self, slot: Slot) -> usize {
        self.mounted.borrow().get(&slot).map_or(0, Vec::len)
    }

    fn unmount(&self, slot: Slot) {
        // bind first so the map borrow ends before the handles run their drop
        let handles = self.mounted.borrow_mut().remove(&slot);
        drop(handles);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, slot: Slot) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(slot.id())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    /// All elements matching `selector`, in document order
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            log::warn!("invalid selector: {}", selector);
            return Vec::new();
        };

        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    pub fn target_elements(&self, target: &Target) -> Vec<Element> {
        match target {
            Target::Slot(slot) => self
                .element(*slot)
                .map(|el| vec![el.unchecked_into::<Element>()])
                .unwrap_or_default(),
            Target::Selector(selector) => self.query_all(selector),
        }
    }

    fn set_style(el: &HtmlElement, property: &str, value: &str) {
        if el.style().set_property(property, value).is_err() {
            log::debug!("could not set {} on #{}", property, el.id());
        }
    }
}

impl Default for DomBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewBinding for DomBinding {
    fn has_slot(&self, slot: Slot) -> bool {
        self.element(slot).is_some()
    }

    fn set_text(&self, slot: Slot, text: &str) {
        if let Some(el) = self.element(slot) {
            el.set_text_content(Some(text));
        }
    }

    fn set_background(&self, slot: Slot, css: &str) {
        if let Some(el) = self.element(slot) {
            Self::set_style(&el, "background", css);
        }
    }

    fn fill(&self, slot: Slot, section: Section) {
        if let Some(el) = self.element(slot) {
            self.unmount(slot);
            el.set_inner_html("");
            self.append(slot, section);
        }
    }

    fn append(&self, slot: Slot, section: Section) {
        if let Some(el) = self.element(slot) {
            let handle = fragments::mount(el, section);
            self.mounted.borrow_mut().entry(slot).or_default().push(handle);
        }
    }

    fn remove(&self, slot: Slot) {
        if let Some(el) = self.element(slot) {
            self.unmount(slot);
            el.remove();
        }
    }

    fn reveal(&self, slot: Slot) {
        if let Some(el) = self.element(slot) {
            let _ = el.style().remove_property("display");
        }
    }

    fn show_error(&self, slot: Slot, heading: &str, message: &str) {
        let Some(el) = self.element(slot) else {
            return;
        };

        if let Ok(Some(h2)) = el.query_selector("h2") {
            h2.set_text_content(Some(heading));
        }
        if let Ok(Some(p)) = el.query_selector("p") {
            p.set_text_content(Some(message));
        }
        let _ = el.style().remove_property("display");
    }

    fn settle(&self, target: &Target) {
        for el in self.target_elements(target) {
            if let Some(el) = el.dyn_ref::<HtmlElement>() {
                Self::set_style(el, "opacity", "1");
                Self::set_style(el, "transform", "none");
            }
        }
    }

    fn set_document_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn redirect(&self, url: &str) {
        if let Err(e) = gloo::utils::window().location().set_href(url) {
            log::error!("redirect to {} failed: {:?}", url, e);
        }
    }
}
