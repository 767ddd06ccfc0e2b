//! Site paths
//!
//! Relative locations of the data document and the two recipe pages. All
//! paths are relative to the page that loads them.

pub const DATA_PATH: &str = "./recipes.json";
pub const LISTING_PAGE: &str = "recipes.html";
pub const DETAIL_PAGE: &str = "recipe-details.html";

/// Link to the detail page of a recipe
pub fn detail_url(id: i64) -> String {
    format!("{}?id={}", DETAIL_PAGE, id)
}

/// Redirect target when the detail page has no id
pub fn listing_url() -> &'static str {
    LISTING_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_url() {
        assert_eq!(detail_url(3), "recipe-details.html?id=3");
        assert_eq!(detail_url(-2), "recipe-details.html?id=-2");
    }

    #[test]
    fn test_listing_url() {
        assert_eq!(listing_url(), "recipes.html");
    }
}
