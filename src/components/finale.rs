//! Finale Section
//!
//! A big clickable heart that pulses forever. Every click releases a
//! small heart from the click point and bumps the counter badge.

use std::time::Instant;

use dioxus::prelude::*;
use lovecard_core::content::{finale_decor_hearts, FINALE_FOOTER, FINALE_HINT, FINALE_MESSAGE};
use lovecard_core::sections::Section;
use lovecard_core::{BurstField, IconKind, BURST_LIFETIME};
use lovecard_ui::{HeartGlyph, LineIcon};

use crate::context::{style_of, use_frame, use_section};
use crate::theme::colors::ROSE;

/// Hearts in the row under the message.
const HEART_ROW: usize = 5;

#[component]
pub fn Finale() -> Element {
    use_section(Section::Finale);
    let mut burst = use_signal(BurstField::new);
    let frame = use_frame();
    let frame = frame.read();

    let on_heart_click = move |evt: MouseEvent| {
        let point = evt.element_coordinates();
        burst.write().click(point.x, point.y, Instant::now());
        spawn(async move {
            tokio::time::sleep(BURST_LIFETIME).await;
            burst.write().prune(Instant::now());
        });
    };

    let decor = finale_decor_hearts();
    let field = burst.read();

    rsx! {
        section { class: "finale", id: "finale", "data-measure": "finale",
            div { class: "finale-decor",
                for (i, (seed, delay)) in decor.into_iter().enumerate() {
                    HeartGlyph {
                        key: "{i}",
                        class: "floating-heart float-slow",
                        style: format!(
                            "left: {}%; top: {}%; width: {}px; height: {}px; opacity: {}; animation-delay: {}s;",
                            seed.left_pct, seed.top_pct, seed.size, seed.size, seed.opacity, delay
                        ),
                    }
                }
            }

            div { class: "finale-content",
                div { class: "finale-heart-box", style: style_of(&frame, "finale-heart"),
                    div { style: style_of(&frame, "finale-heart-pulse"),
                        HeartGlyph { class: "finale-heart", onclick: on_heart_click }
                    }
                    for particle in field.particles().iter() {
                        HeartGlyph {
                            key: "{particle.id}",
                            class: "burst-heart",
                            style: format!("left: {}px; top: {}px;", particle.x, particle.y),
                        }
                    }
                    if field.show_counter() {
                        div { class: "click-counter", "{field.clicks()}" }
                    }
                }

                h2 { class: "finale-message", style: style_of(&frame, "finale-message"), "{FINALE_MESSAGE}" }
                p { class: "finale-footer", style: style_of(&frame, "finale-footer"), "{FINALE_FOOTER}" }

                div { class: "finale-row",
                    for i in 0..HEART_ROW {
                        span {
                            key: "{i}",
                            class: "pulse",
                            style: format!("animation-delay: {:.1}s;", i as f64 * 0.2),
                            LineIcon { kind: IconKind::Heart, color: ROSE.to_string(), fill: ROSE.to_string() }
                        }
                    }
                }

                p { class: "finale-hint", "{FINALE_HINT}" }
            }
        }
    }
}
