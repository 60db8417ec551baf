//! Love Pill Component
//!
//! A word floating in the "Why You're Special" cloud.

use dioxus::prelude::*;
use lovecard_core::content::Pill;

/// Absolute placement of a pill inside its cloud.
pub fn pill_position(pill: &Pill) -> String {
    format!("left: {}%; top: {}%;", pill.left_pct, pill.top_pct)
}

/// Properties for the LovePill component
#[derive(Clone, PartialEq, Props)]
pub struct LovePillProps {
    pub pill: Pill,
    /// Animated inline style
    #[props(default)]
    pub style: String,
}

#[component]
pub fn LovePill(props: LovePillProps) -> Element {
    let position = pill_position(&props.pill);
    rsx! {
        div {
            class: "love-pill",
            style: "{position} {props.style}",
            "{props.pill.text}"
        }
    }
}
