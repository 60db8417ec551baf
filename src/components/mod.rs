//! Section components of the Love Week page, in document order.

mod finale;
mod floating_hearts;
mod gallery;
mod hero;
mod love_week;
mod navbar;
mod pinned;
mod special;

pub use finale::Finale;
pub use floating_hearts::FloatingHearts;
pub use gallery::Gallery;
pub use hero::Hero;
pub use love_week::LoveDaySection;
pub use navbar::Navbar;
pub use pinned::PinnedSection;
pub use special::Special;
