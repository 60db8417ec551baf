//! Love Week Day Section
//!
//! One pinned section per day: the photo flies in from the left, the note
//! from the right, both hold, then slide apart as the next day covers them.

use dioxus::prelude::*;
use lovecard_core::content::SIGNATURE;
use lovecard_core::sections::Section;
use lovecard_core::LOVE_DAYS;
use lovecard_ui::{DayBadge, HeartWatermark, LineIcon};

use crate::components::PinnedSection;
use crate::context::{use_frame, use_section};
use crate::theme::colors::ROSE;

#[component]
pub fn LoveDaySection(index: usize) -> Element {
    use_section(Section::LoveDay(index));
    let frame = use_frame();
    let frame = frame.read();

    let Some(day) = LOVE_DAYS.get(index) else {
        return rsx! {};
    };
    let key = Section::LoveDay(index).key();
    let css = |part: &str| frame.css(&key.child(part));

    rsx! {
        PinnedSection { section: Section::LoveDay(index), z_index: day.z_index,
            section { class: "section-pinned",
                HeartWatermark {}

                div { class: "day-row",
                    div { class: "photo-card", style: css("photo"),
                        img { src: day.image, alt: "{day.title}" }
                        div { class: "photo-card-shade" }
                    }

                    div { class: "note-column",
                        DayBadge { label: day.day.to_string(), style: css("badge") }

                        div { class: "love-card", style: css("note"),
                            div { class: "love-card-header",
                                div { class: "icon-bubble", style: css("icon"),
                                    LineIcon { kind: day.icon, color: ROSE.to_string() }
                                }
                                h2 { class: "love-card-title", style: css("title"), "{day.title}" }
                            }
                            p { class: "love-card-body", style: css("body"), "{day.message}" }
                            p { class: "signature", style: css("signature"), "{SIGNATURE}" }
                        }
                    }
                }
            }
        }
    }
}
