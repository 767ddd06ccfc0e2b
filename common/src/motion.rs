//! Reveal animations as data
//!
//! Pages describe their entrance and scroll effects as an `AnimationPlan`.
//! An `Animator` plays it: the browser build hands it to GSAP, and
//! `RevealImmediately` simply settles every target when no animation library
//! is around.

use crate::binding::{Slot, Target, ViewBinding};
use serde::Serialize;

/// Tweenable properties; unset fields are left to the stylesheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Pose {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl Pose {
    pub fn faded() -> Self {
        Self {
            opacity: Some(0.0),
            ..Default::default()
        }
    }

    pub fn shown() -> Self {
        Self {
            opacity: Some(1.0),
            ..Default::default()
        }
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// One tween per matched element, or one tween over all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Each,
    Group,
}

/// Start the tween when the trigger scrolls into view
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollCue {
    /// `None` means each animated element is its own trigger
    pub trigger: Option<Target>,
    /// ScrollTrigger start, e.g. "top 90%"
    pub start: &'static str,
}

/// Elements carrying `class` end at `opacity` instead of the `to` pose's
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dim {
    pub class: &'static str,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: Target,
    pub scope: Scope,
    pub from: Pose,
    pub to: Pose,
    pub duration: f64,
    pub ease: &'static str,
    pub delay: Option<f64>,
    pub stagger: Option<f64>,
    pub scroll: Option<ScrollCue>,
    pub dim: Option<Dim>,
}

impl Tween {
    fn new(target: Target, from: Pose, to: Pose, duration: f64, ease: &'static str) -> Self {
        Self {
            target,
            scope: Scope::Group,
            from,
            to,
            duration,
            ease,
            delay: None,
            stagger: None,
            scroll: None,
            dim: None,
        }
    }

    fn each(mut self) -> Self {
        self.scope = Scope::Each;
        self
    }

    fn delay(mut self, delay: f64) -> Self {
        self.delay = Some(delay);
        self
    }

    fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = Some(stagger);
        self
    }

    fn on_scroll(mut self, trigger: Option<Target>, start: &'static str) -> Self {
        self.scroll = Some(ScrollCue { trigger, start });
        self
    }

    fn dim(mut self, class: &'static str, opacity: f64) -> Self {
        self.dim = Some(Dim { class, opacity });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationPlan {
    pub tweens: Vec<Tween>,
}

impl AnimationPlan {
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

/// Cards fade up as they scroll into view
pub fn listing_plan() -> AnimationPlan {
    AnimationPlan {
        tweens: vec![Tween::new(
            Target::Selector("#recipesGrid .recipe-card"),
            Pose::faded().y(40.0),
            Pose::shown().y(0.0),
            0.75,
            "power3.out",
        )
        .each()
        .on_scroll(None, "top 90%")],
    }
}

pub fn detail_plan() -> AnimationPlan {
    AnimationPlan {
        tweens: vec![
            Tween::new(
                Target::Selector(".detail-hero-content"),
                Pose::faded().y(50.0),
                Pose::shown().y(0.0),
                1.0,
                "power3.out",
            )
            .delay(0.2),
            Tween::new(
                Target::Selector(".detail-hero-icon"),
                Pose::faded().scale(0.6),
                Pose::default().opacity(0.15).scale(1.0),
                1.2,
                "back.out(1.4)",
            )
            .delay(0.1),
            Tween::new(
                Target::Selector(".fade-up"),
                Pose::faded().y(36.0),
                Pose::shown().y(0.0),
                0.75,
                "power3.out",
            )
            .each()
            .on_scroll(None, "top 90%"),
            Tween::new(
                Target::Selector(".detail-step"),
                Pose::faded().x(-24.0),
                Pose::shown().x(0.0),
                0.6,
                "power2.out",
            )
            .stagger(0.1)
            .on_scroll(Some(Target::Slot(Slot::Steps)), "top 85%"),
            Tween::new(
                Target::Selector(".more-recipe-card"),
                Pose::faded().y(24.0),
                Pose::shown().y(0.0),
                0.55,
                "power2.out",
            )
            .stagger(0.08)
            .on_scroll(Some(Target::Selector(".more-recipes-grid")), "top 90%")
            .dim("current", 0.55),
        ],
    }
}

pub trait Animator {
    fn play(&self, plan: &AnimationPlan);
}

/// Fallback when no animation library is loaded
pub struct RevealImmediately<'a, B>(pub &'a B);

impl<B: ViewBinding> Animator for RevealImmediately<'_, B> {
    fn play(&self, plan: &AnimationPlan) {
        for tween in &plan.tweens {
            self.0.settle(&tween.target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, RecordingView};

    #[test]
    fn test_listing_plan_per_card_scroll() {
        let plan = listing_plan();
        assert_eq!(plan.tweens.len(), 1);
        let tween = &plan.tweens[0];
        assert_eq!(tween.scope, Scope::Each);
        assert_eq!(tween.from.y, Some(40.0));
        assert_eq!(tween.scroll.as_ref().map(|c| c.start), Some("top 90%"));
        assert_eq!(tween.scroll.as_ref().and_then(|c| c.trigger.clone()), None);
    }

    #[test]
    fn test_detail_plan_steps_stagger() {
        let plan = detail_plan();
        let steps = plan
            .tweens
            .iter()
            .find(|t| t.target == Target::Selector(".detail-step"))
            .expect("steps tween");
        assert_eq!(steps.stagger, Some(0.1));
        assert_eq!(steps.from.x, Some(-24.0));
        let cue = steps.scroll.as_ref().unwrap();
        assert_eq!(cue.trigger, Some(Target::Slot(Slot::Steps)));
        assert_eq!(cue.start, "top 85%");
    }

    #[test]
    fn test_detail_plan_dims_current_card() {
        let plan = detail_plan();
        let more = plan.tweens.last().unwrap();
        assert_eq!(more.target, Target::Selector(".more-recipe-card"));
        assert_eq!(
            more.dim,
            Some(Dim {
                class: "current",
                opacity: 0.55
            })
        );
        assert_eq!(more.to.opacity, Some(1.0));
    }

    #[test]
    fn test_pose_serializes_only_set_fields() {
        let json = serde_json::to_string(&Pose::faded().y(36.0)).unwrap();
        assert_eq!(json, r#"{"opacity":0.0,"y":36.0}"#);
    }

    #[test]
    fn test_reveal_immediately_settles_every_target() {
        let view = RecordingView::default();
        let plan = detail_plan();
        RevealImmediately(&view).play(&plan);

        let settled: Vec<Target> = view
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Settle(target) => Some(target),
                _ => None,
            })
            .collect();
        let expected: Vec<Target> = plan.tweens.iter().map(|t| t.target.clone()).collect();
        assert_eq!(settled, expected);
    }
}
