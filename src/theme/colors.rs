//! Color constants of the card palette.

#![allow(dead_code)]

// === BACKGROUNDS ===
pub const BLUSH: &str = "#F6E7E7";
pub const PETAL: &str = "#F9D6D6";
pub const CARD_WHITE: &str = "#FFFDFB";

// === ACCENTS ===
pub const ROSE: &str = "#E86A6A";
pub const ROSE_LIGHT: &str = "#F08080";
pub const ROSE_GLOW: &str = "rgba(232, 106, 106, 0.5)";

// === TEXT ===
pub const COCOA: &str = "#5A3A3A";
pub const MAUVE: &str = "#8F6B6B";
