//! Heart Glyphs
//!
//! The two heart shapes used across the card:
//! - a small 24-unit heart for decorations, bursts and the finale
//! - a large 200-unit watermark drawn behind section content

use dioxus::prelude::*;

/// Path of the small heart (24 x 24 view box)
pub const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";

/// Path of the watermark heart (200 x 200 view box)
pub const WATERMARK_PATH: &str = "M100 180L85 165C40 125 15 100 15 65C15 40 35 20 60 20C75 20 90 28 100 42C110 28 125 20 140 20C165 20 185 40 185 65C185 100 160 125 115 165L100 180Z";

/// Sparkle star (12 x 12 view box)
pub const SPARKLE_PATH: &str = "M6 0L7.5 4.5L12 6L7.5 7.5L6 12L4.5 7.5L0 6L4.5 4.5L6 0Z";

pub const ROSE: &str = "#E86A6A";

/// Properties for the HeartGlyph component
#[derive(Clone, PartialEq, Props)]
pub struct HeartGlyphProps {
    /// CSS class of the svg element
    #[props(default)]
    pub class: String,
    /// Inline style, usually size, position and animated transform
    #[props(default)]
    pub style: String,
    #[props(default = ROSE.to_string())]
    pub fill: String,
    /// Click handler receiving element-local coordinates
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
}

/// Small filled heart
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     HeartGlyph { class: "finale-heart", style: frame_css, onclick: move |e| burst(e) }
/// }
/// ```
#[component]
pub fn HeartGlyph(props: HeartGlyphProps) -> Element {
    let onclick = props.onclick;
    rsx! {
        svg {
            class: "{props.class}",
            style: "{props.style}",
            view_box: "0 0 24 24",
            fill: "{props.fill}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            path { d: HEART_PATH }
        }
    }
}

/// Properties for the HeartWatermark component
#[derive(Clone, PartialEq, Props)]
pub struct HeartWatermarkProps {
    /// Width as a share of the viewport width
    #[props(default = 60)]
    pub width_vw: u32,
    /// Upper bound of the width, px
    #[props(default = 700)]
    pub max_width_px: u32,
    /// Vertical center as a percentage of the section height
    #[props(default = 50)]
    pub top_pct: u32,
    /// Extra inline style (animated transform and opacity)
    #[props(default)]
    pub style: String,
}

/// Large faint heart centered behind a section
#[component]
pub fn HeartWatermark(props: HeartWatermarkProps) -> Element {
    let HeartWatermarkProps {
        width_vw,
        max_width_px,
        top_pct,
        style,
    } = props;
    rsx! {
        div {
            class: "heart-watermark-anchor",
            style: "position: absolute; left: 50%; top: {top_pct}%; width: {width_vw}vw; max-width: {max_width_px}px; transform: translate(-50%, -50%); pointer-events: none;",
            svg {
                class: "heart-watermark",
                style: "width: 100%; {style}",
                view_box: "0 0 200 200",
                fill: ROSE,
                path { d: WATERMARK_PATH }
            }
        }
    }
}

/// Sparkle star drawn at a fixed size
#[component]
pub fn SparkleGlyph(#[props(default)] style: String) -> Element {
    rsx! {
        div {
            class: "sparkle",
            style: "{style}",
            svg {
                width: "12",
                height: "12",
                view_box: "0 0 12 12",
                fill: "none",
                path { d: SPARKLE_PATH, fill: ROSE, fill_opacity: "0.6" }
            }
        }
    }
}
