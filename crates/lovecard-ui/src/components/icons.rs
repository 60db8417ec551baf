//! Line Icons
//!
//! Stroke icons for the love-week day titles and a few page controls,
//! drawn on a 24-unit grid with round caps.

use dioxus::prelude::*;
use lovecard_core::content::IconKind;

const HEART_OUTLINE: &str = "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z";

/// Stroke paths of the icon for `kind`.
pub fn icon_paths(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::Rose => &[
            "M12 5a3 3 0 1 1 3 3m-3-3a3 3 0 1 0-3 3m3-3v1M9 8a3 3 0 1 0 3 3M9 8h1m5 0a3 3 0 1 1-3 3m3-3h-1m-2 3v-1",
            "M10 8a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            "M12 10v12",
            "M12 22c4.2 0 7-1.667 7-5-4.2 0-7 1.667-7 5Z",
            "M12 22c-4.2 0-7-1.667-7-5 4.2 0 7 1.667 7 5Z",
        ],
        IconKind::Ring => &["M6 3h12l4 6-10 13L2 9Z", "M11 3 8 9l4 13 4-13-3-6", "M2 9h20"],
        IconKind::Chocolate => &[
            "M12 2a10 10 0 1 0 10 10 4 4 0 0 1-5-5 4 4 0 0 1-5-5",
            "M8.5 8.5v.01",
            "M16 15.5v.01",
            "M12 12v.01",
            "M11 17v.01",
            "M7 14v.01",
        ],
        IconKind::Teddy => &[
            "M4 8h16a1 1 0 0 1 1 1v10a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1V9a1 1 0 0 1 1-1Z",
            "M10 8V5c0-.6-.4-1-1-1H6a1 1 0 0 0-1 1v3",
            "M19 8V5c0-.6-.4-1-1-1h-3a1 1 0 0 0-1 1v3",
        ],
        IconKind::Promise => &[
            HEART_OUTLINE,
            "M12 5 9.04 7.96a2.17 2.17 0 0 0 0 3.08c.82.82 2.13.85 3 .07l2.07-1.9a2.82 2.82 0 0 1 3.79 0l2.96 2.66",
            "m18 15-2-2",
            "m15 18-2-2",
        ],
        IconKind::Hug => &[
            "M19 9V6a2 2 0 0 0-2-2H7a2 2 0 0 0-2 2v3",
            "M3 16a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-5a2 2 0 0 0-4 0v1.5a.5.5 0 0 1-.5.5h-9a.5.5 0 0 1-.5-.5V11a2 2 0 0 0-4 0z",
            "M5 18v2",
            "M19 18v2",
        ],
        IconKind::Kiss => &[
            "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
            "M5 3v4",
            "M19 17v4",
            "M3 5h4",
            "M17 19h4",
        ],
        IconKind::Heart => &[HEART_OUTLINE],
    }
}

/// Properties for the LineIcon component
#[derive(Clone, PartialEq, Props)]
pub struct LineIconProps {
    pub kind: IconKind,
    #[props(default = 20)]
    pub size: u32,
    #[props(default = "currentColor".to_string())]
    pub color: String,
    /// Fill for closed shapes; "none" for outline only
    #[props(default = "none".to_string())]
    pub fill: String,
}

#[component]
pub fn LineIcon(props: LineIconProps) -> Element {
    let size = props.size;
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "{props.fill}",
            stroke: "{props.color}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon_paths(props.kind).iter() {
                path { d: *d }
            }
        }
    }
}

/// Downward chevron of the hero's scroll hint
#[component]
pub fn ChevronDown(#[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            class: "bounce",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m6 9 6 6 6-6" }
        }
    }
}
