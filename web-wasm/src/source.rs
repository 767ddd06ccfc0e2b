//! Browser data source and URL access

use rasa_recipes_common::{Error, RecipeSource, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, UrlSearchParams};

/// `fetch` of the static recipes document
pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl RecipeSource for FetchSource {
    async fn fetch_document(&self) -> Result<String> {
        let response = fetch(&self.url).await.map_err(js_error)?;

        if !response.ok() {
            return Err(Error::Http(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        text.as_string()
            .ok_or_else(|| Error::Fetch("response body is not text".to_string()))
    }
}

async fn fetch(url: &str) -> std::result::Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

fn js_error(value: JsValue) -> Error {
    Error::Fetch(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// The raw `id` query parameter of the current page
pub fn get_id_from_url() -> Option<String> {
    let search = gloo::utils::window().location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get("id")
}
