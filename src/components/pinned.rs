//! Pinned Section Wrapper
//!
//! A wrapper as tall as the viewport plus the pin spacing, holding a
//! sticky viewport-sized inner element. The wrapper is what triggers
//! measure, so its top is where the pin starts.

use dioxus::prelude::*;
use lovecard_core::sections::Section;

/// Pin spacing of a section as a share of the viewport height, in vh.
pub fn spacing_vh(section: Section) -> f64 {
    section
        .pin_trigger()
        .and_then(|t| t.pin_spacing(100.0))
        .unwrap_or(0.0)
}

/// Properties for the PinnedSection component
#[derive(Clone, PartialEq, Props)]
pub struct PinnedSectionProps {
    pub section: Section,
    /// Stacking order; later days cover earlier ones
    #[props(default = 10)]
    pub z_index: i32,
    pub children: Element,
}

#[component]
pub fn PinnedSection(props: PinnedSectionProps) -> Element {
    let name = props.section.name();
    let spacing = spacing_vh(props.section);
    let anchor = props.section.anchor();
    let dom_id = anchor.filter(|a| a.id() == name).map(|a| a.id().to_string());
    // Anchors named differently from their section get their own measured marker
    let marker = anchor.filter(|a| a.id() != name);

    rsx! {
        div {
            class: "pin-wrapper",
            id: dom_id,
            "data-measure": "{name}",
            style: "height: calc(100vh + {spacing}vh); z-index: {props.z_index};",
            if let Some(anchor) = marker {
                div {
                    class: "anchor-marker",
                    id: anchor.id(),
                    "data-measure": anchor.id(),
                }
            }
            div { class: "pin-inner", {props.children} }
        }
    }
}
