//! Day Badge Component
//!
//! Small rounded pill carrying a date label ("7 Feb", "Bubu Days").

use dioxus::prelude::*;

/// Properties for the DayBadge component
#[derive(Clone, PartialEq, Props)]
pub struct DayBadgeProps {
    pub label: String,
    /// Positioning classes from the caller
    #[props(default)]
    pub class: String,
    /// Animated inline style
    #[props(default)]
    pub style: String,
}

#[component]
pub fn DayBadge(props: DayBadgeProps) -> Element {
    rsx! {
        div {
            class: "day-badge {props.class}",
            style: "{props.style}",
            "{props.label}"
        }
    }
}
