//! Theme for the Love Week card.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
