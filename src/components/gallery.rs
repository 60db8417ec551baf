//! Our Moments Gallery
//!
//! Polaroid-style cards that rise into place as the grid scrolls in.

use dioxus::prelude::*;
use lovecard_core::content::{GALLERY_HEADING, GALLERY_ITEMS, GALLERY_SUBHEADING};
use lovecard_core::sections::{gallery_card_keys, Section};

use crate::context::{style_of, use_frame, use_section};

#[component]
pub fn Gallery() -> Element {
    use_section(Section::Gallery);
    let frame = use_frame();
    let frame = frame.read();

    let cards: Vec<_> = GALLERY_ITEMS
        .iter()
        .zip(gallery_card_keys())
        .map(|(item, key)| (*item, frame.css(&key)))
        .collect();

    rsx! {
        section { class: "gallery", id: "gallery", "data-measure": "gallery",
            h2 { class: "section-heading", style: style_of(&frame, "gallery-heading"), "{GALLERY_HEADING}" }
            p { class: "section-subheading", style: style_of(&frame, "gallery-subheading"), "{GALLERY_SUBHEADING}" }

            div { class: "gallery-grid", "data-measure": "gallery-grid",
                for (item, style) in cards {
                    div { key: "{item.image}", class: "gallery-card", style: "{style}",
                        div { class: "gallery-photo",
                            img {
                                class: if item.rotate { "rotated" },
                                src: item.image,
                                alt: item.caption,
                            }
                        }
                        p { class: "gallery-caption", "{item.caption}" }
                    }
                }
            }
        }
    }
}
