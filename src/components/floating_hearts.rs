//! Floating Hearts
//!
//! Fixed background layer: eight hearts rising forever on their own
//! clock tweens, plus CSS-animated sparkles.

use dioxus::prelude::*;
use lovecard_core::content::FLOATING_HEARTS;
use lovecard_core::sections::{floating_heart_keys, sparkles, Section};
use lovecard_ui::{HeartGlyph, SparkleGlyph};

use crate::context::{use_frame, use_section};

#[component]
pub fn FloatingHearts() -> Element {
    use_section(Section::FloatingHearts);
    let twinkles = use_hook(|| sparkles(&mut rand::rng()));
    let frame = use_frame();
    let frame = frame.read();

    let hearts: Vec<String> = FLOATING_HEARTS
        .iter()
        .zip(floating_heart_keys())
        .map(|(seed, key)| {
            format!(
                "left: {}%; top: {}%; width: {}px; height: {}px; opacity: {}; {}",
                seed.left_pct,
                seed.top_pct,
                seed.size,
                seed.size,
                seed.opacity,
                frame.css(&key)
            )
        })
        .collect();

    rsx! {
        div { class: "floating-hearts",
            for (i, style) in hearts.into_iter().enumerate() {
                HeartGlyph { key: "{i}", class: "floating-heart", style }
            }
            for (i, sparkle) in twinkles.iter().enumerate() {
                SparkleGlyph {
                    key: "sparkle-{i}",
                    style: format!(
                        "left: {:.1}%; top: {:.1}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                        sparkle.left_pct, sparkle.top_pct, sparkle.delay, sparkle.duration
                    ),
                }
            }
        }
    }
}
