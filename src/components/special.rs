//! Why You're Special Section
//!
//! A cloud of short compliments that pop in together and then drift
//! upward at slightly different speeds.

use dioxus::prelude::*;
use lovecard_core::content::{PILLS, SPECIAL_HEADING, SPECIAL_SUBHEADING};
use lovecard_core::sections::{pill_keys, Section};
use lovecard_ui::LovePill;

use crate::context::{style_of, use_frame, use_section};

#[component]
pub fn Special() -> Element {
    use_section(Section::Special);
    let frame = use_frame();
    let frame = frame.read();

    let pills: Vec<_> = PILLS
        .iter()
        .zip(pill_keys())
        .map(|(pill, key)| (*pill, frame.css(&key)))
        .collect();

    rsx! {
        section { class: "special", id: "special", "data-measure": "special",
            h2 { class: "section-heading", style: style_of(&frame, "special-heading"), "{SPECIAL_HEADING}" }
            p { class: "section-subheading", style: style_of(&frame, "special-subheading"), "{SPECIAL_SUBHEADING}" }

            div { class: "pill-cloud",
                for (pill, style) in pills {
                    LovePill { key: "{pill.text}", pill, style }
                }
            }
        }
    }
}
