//! Ingredient quantity scaling
//!
//! Every number in an ingredient line is multiplied by the serving ratio and
//! rounded to the nearest quarter. The line is otherwise left alone, so
//! "750g basmati rice" and "2 medium onions" both scale.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

lazy_static! {
    static ref QUANTITY_RE: Regex = Regex::new(r"\d+(\.\d+)?").unwrap();
}

/// Scale every numeric token of `text` by `ratio`
///
/// A ratio of exactly 1 returns the text untouched. Callers must always pass
/// the original (base servings) text; scaling an already scaled line
/// compounds the rounding.
///
/// # Examples
/// ```
/// use rasa_recipes_common::scale_ingredient;
///
/// assert_eq!(scale_ingredient("2 cups flour", 2.0), "4 cups flour");
/// assert_eq!(scale_ingredient("1 tsp cumin", 0.75), "0.8 tsp cumin");
/// ```
pub fn scale_ingredient(text: &str, ratio: f64) -> Cow<'_, str> {
    if ratio == 1.0 {
        return Cow::Borrowed(text);
    }

    QUANTITY_RE.replace_all(text, |caps: &Captures| {
        // The pattern only matches digit runs, so parsing cannot fail
        let value: f64 = caps[0].parse().unwrap_or(0.0);
        format_quantity(round_to_quarter(value * ratio))
    })
}

/// Round to the nearest 0.25
pub fn round_to_quarter(value: f64) -> f64 {
    (value * 4.0).round() / 4.0
}

/// Whole numbers print without decimals, anything else with exactly one
///
/// Ties round up: 2.25 prints as "2.3". Values too large for a digit run
/// overflow to "Infinity".
pub fn format_quantity(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }
    format!("{:.1}", (value * 10.0).round() / 10.0)
}
