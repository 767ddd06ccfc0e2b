//! GSAP + ScrollTrigger player for animation plans

use crate::dom::DomBinding;
use rasa_recipes_common::motion::{Dim, Pose, Scope, ScrollCue, Tween};
use rasa_recipes_common::{AnimationPlan, Animator};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = gsap, js_name = "registerPlugin")]
    fn register_plugin(plugin: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = "fromTo")]
    fn from_to(targets: &JsValue, from: &JsValue, to: &JsValue);
}

const TOGGLE_ACTIONS: &str = "play none none none";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrollVars<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    trigger: Option<String>,
    start: &'a str,
    toggle_actions: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToVars<'a> {
    #[serde(flatten)]
    pose: Pose,
    duration: f64,
    ease: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stagger: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scroll_trigger: Option<ScrollVars<'a>>,
}

impl<'a> ToVars<'a> {
    fn from_tween(tween: &'a Tween) -> Self {
        Self {
            pose: tween.to,
            duration: tween.duration,
            ease: tween.ease,
            delay: tween.delay,
            stagger: tween.stagger,
            scroll_trigger: tween.scroll.as_ref().map(ScrollVars::from_cue),
        }
    }
}

impl<'a> ScrollVars<'a> {
    fn from_cue(cue: &'a ScrollCue) -> Self {
        Self {
            trigger: cue.trigger.as_ref().map(|t| t.selector()),
            start: cue.start,
            toggle_actions: TOGGLE_ACTIONS,
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn global(name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

pub struct GsapAnimator<'a> {
    dom: &'a DomBinding,
}

impl<'a> GsapAnimator<'a> {
    /// Needs both `gsap` and `ScrollTrigger` on the page
    pub fn detect(dom: &'a DomBinding) -> Option<Self> {
        global("gsap")?;
        let scroll_trigger = global("ScrollTrigger")?;
        register_plugin(&scroll_trigger);
        Some(Self { dom })
    }

    fn play_tween(&self, tween: &Tween) -> Result<(), JsValue> {
        let elements = self.dom.target_elements(&tween.target);
        if elements.is_empty() {
            log::debug!("no elements for {}", tween.target.selector());
            return Ok(());
        }

        let from = to_js(&tween.from)?;
        let vars = ToVars::from_tween(tween);

        match tween.scope {
            Scope::Group => {
                let to = to_js(&vars)?;
                if let Some(dim) = tween.dim {
                    set_dimmed_opacity(&to, dim)?;
                }
                let targets: js_sys::Array = elements.iter().collect();
                from_to(&targets, &from, &to);
            }
            Scope::Each => {
                let own_trigger = matches!(&tween.scroll, Some(cue) if cue.trigger.is_none());
                for el in &elements {
                    let to = to_js(&vars)?;
                    if own_trigger {
                        let scroll = js_sys::Reflect::get(&to, &"scrollTrigger".into())?;
                        js_sys::Reflect::set(&scroll, &"trigger".into(), el)?;
                    }
                    if let Some(dim) = tween.dim {
                        set_dimmed_opacity(&to, dim)?;
                    }
                    from_to(el, &from, &to);
                }
            }
        }
        Ok(())
    }
}

// function-based end opacity: elements with the dim class stop short of 1
fn set_dimmed_opacity(to: &JsValue, dim: Dim) -> Result<(), JsValue> {
    let Dim { class, opacity } = dim;
    let end = Closure::<dyn Fn(u32, Element) -> f64>::new(move |_index: u32, el: Element| {
        if el.class_list().contains(class) {
            opacity
        } else {
            1.0
        }
    });
    js_sys::Reflect::set(to, &"opacity".into(), end.as_ref())?;
    // GSAP calls it when the tween starts, long after this frame
    end.forget();
    Ok(())
}

impl Animator for GsapAnimator<'_> {
    fn play(&self, plan: &AnimationPlan) {
        for tween in &plan.tweens {
            if let Err(e) = self.play_tween(tween) {
                log::warn!("animation for {} skipped: {:?}", tween.target.selector(), e);
            }
        }
    }
}
