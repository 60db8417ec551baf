//! Love Week Card UI Components
//!
//! Presentational Dioxus components shared by the card's sections.
//!
//! ## Palette
//!
//! - **Blush (#F6E7E7)**: page background
//! - **Rose (#E86A6A)**: hearts, icons, accents
//! - **Cocoa (#5A3A3A)**: headings and body text
//! - **Mauve (#8F6B6B)**: secondary text
//!
//! Components take their animated state as an inline `style` string
//! produced by the engine; they never animate on their own.

pub mod components;

pub use components::*;
