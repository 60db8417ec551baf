//! Hero Section
//!
//! Recipient's name in large script, revealed character by character on
//! load and lifted away as the pinned hero scrolls out.

use dioxus::prelude::*;
use lovecard_core::content::{HERO_CTA, HERO_DATE_PILL, HERO_SUBHEAD, RECIPIENT};
use lovecard_core::sections::{headline_chars, Section};
use lovecard_core::Anchor;
use lovecard_ui::{ChevronDown, DayBadge, HeartWatermark};

use crate::components::PinnedSection;
use crate::context::{style_of, use_frame, use_page_commands, use_section, PageCommand};

#[component]
pub fn Hero() -> Element {
    use_section(Section::Hero);
    let frame = use_frame();
    let commands = use_page_commands();
    let frame = frame.read();

    let chars: Vec<(String, char)> = headline_chars()
        .iter()
        .zip(RECIPIENT.chars())
        .map(|(key, ch)| (frame.css(key), ch))
        .collect();

    rsx! {
        PinnedSection { section: Section::Hero, z_index: 10,
            section { class: "section-pinned hero",
                HeartWatermark { style: style_of(&frame, "hero-heart") }

                div { class: "hero-content",
                    h1 { class: "hero-headline", style: style_of(&frame, "hero-headline"),
                        for (style, ch) in chars {
                            span { class: "headline-char", style: "{style}", "{ch}" }
                        }
                    }
                    p { class: "hero-subhead", style: style_of(&frame, "hero-subhead"), "{HERO_SUBHEAD}" }
                    button {
                        class: "hero-cta",
                        style: style_of(&frame, "hero-cta"),
                        onclick: move |_| commands.send(PageCommand::JumpTo(Anchor::LoveWeek)),
                        "{HERO_CTA}"
                    }
                }

                DayBadge {
                    label: HERO_DATE_PILL.to_string(),
                    class: "hero-date".to_string(),
                    style: style_of(&frame, "hero-date"),
                }

                div { class: "hero-hint", style: style_of(&frame, "hero-hint"),
                    span { "SCROLL" }
                    ChevronDown { size: 20 }
                }
            }
        }
    }
}
