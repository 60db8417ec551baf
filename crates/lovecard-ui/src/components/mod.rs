//! Reusable card components
//!
//! Fonts: Dancing Script for titles, Caveat for handwriting, Inter for body.

mod badge;
mod heart;
mod icons;
mod pill;

pub use badge::*;
pub use heart::*;
pub use icons::*;
pub use pill::*;
