//! Navigation Bar
//!
//! Fixed bar with the logo, one link per page anchor and the recipient's
//! name. Turns solid once the page has scrolled past the threshold.

use dioxus::prelude::*;
use lovecard_core::content::{NAV_LOGO, RECIPIENT};
use lovecard_core::{nav, Anchor, IconKind};
use lovecard_ui::LineIcon;

use crate::context::{use_card, use_page_commands, use_scroll_y, PageCommand};

#[component]
pub fn Navbar() -> Element {
    let card = use_card();
    let scroll_y = use_scroll_y();
    let commands = use_page_commands();

    let scrolled = nav::is_scrolled(scroll_y(), card.config.nav_threshold);
    let nav_class = if scrolled { "navbar scrolled" } else { "navbar" };

    rsx! {
        nav { class: "{nav_class}",
            button {
                class: "nav-logo",
                onclick: move |_| commands.send(PageCommand::JumpTo(Anchor::Hero)),
                span { class: "nav-logo-text", "{NAV_LOGO}" }
                span { class: "pulse", "💕" }
            }

            div { class: "nav-links",
                for anchor in Anchor::ALL {
                    button {
                        key: "{anchor.id()}",
                        class: "nav-link",
                        onclick: move |_| commands.send(PageCommand::JumpTo(anchor)),
                        "{anchor.label()}"
                    }
                }
            }

            div { class: "nav-recipient",
                span { "{RECIPIENT}" }
                div { class: "nav-avatar",
                    LineIcon { kind: IconKind::Heart, size: 16, color: "white".to_string(), fill: "white".to_string() }
                }
            }
        }
    }
}
