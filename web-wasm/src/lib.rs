//! RASA recipe pages (Leptos + WASM)
//!
//! One module serves both templates: the page kind is read off the slots
//! present in the document, then the listing or detail flow runs against
//! the live DOM.

mod dom;
mod fragments;
mod gsap;
mod logger;
mod source;

use std::cell::RefCell;
use std::rc::Rc;

use rasa_recipes_common::{
    render_detail, render_listing, Animator, DetailOutcome, DetailSession, Page, RecipeStore,
    RevealImmediately, DATA_PATH,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub use dom::DomBinding;
pub use gsap::GsapAnimator;
pub use source::{get_id_from_url, FetchSource};

thread_local! {
    // lives for the page so the mounted fragments stay mounted
    static DOM: Rc<DomBinding> = Rc::new(DomBinding::new());

    // recipe currently shown on the detail page
    static SESSION: RefCell<Option<DetailSession>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let dom = DOM.with(Rc::clone);
    match Page::detect(&*dom) {
        Some(Page::Listing) => spawn_local(run_listing(dom)),
        Some(Page::Detail) => spawn_local(run_detail(dom)),
        None => log::debug!("No recipe slots on this page"),
    }
}

fn animator(dom: &DomBinding) -> Box<dyn Animator + '_> {
    match GsapAnimator::detect(dom) {
        Some(gsap) => Box::new(gsap),
        None => {
            log::info!("GSAP not loaded, revealing without animation");
            Box::new(RevealImmediately(dom))
        }
    }
}

fn store() -> RecipeStore<FetchSource> {
    RecipeStore::new(FetchSource::new(DATA_PATH))
}

async fn run_listing(dom: Rc<DomBinding>) {
    let store = store();
    let outcome = render_listing(&store, &*dom, animator(&dom).as_ref()).await;
    log::debug!("Listing: {:?}", outcome);
}

async fn run_detail(dom: Rc<DomBinding>) {
    let store = store();
    let id = get_id_from_url();
    let outcome = render_detail(&store, &*dom, animator(&dom).as_ref(), id.as_deref()).await;

    if let DetailOutcome::Rendered(session) = outcome {
        SESSION.with(|s| *s.borrow_mut() = Some(session));
    }
}

/// Step the serving count by `delta` (the +/- buttons call this)
#[wasm_bindgen(js_name = changeServings)]
pub fn change_servings(delta: i32) {
    let dom = DOM.with(Rc::clone);
    SESSION.with(|s| match s.borrow_mut().as_mut() {
        Some(session) => {
            session.change_servings(&*dom, delta);
        }
        None => log::debug!("changeServings before a recipe was rendered"),
    });
}
