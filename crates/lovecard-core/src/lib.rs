//! Love Week Card Core Library
//!
//! Headless scroll-timeline engine behind the Love Week greeting card.
//!
//! ## Overview
//!
//! The card is a single scrolling page: full-viewport sections pin while
//! their enter/exit timelines play against the scroll position, free
//! sections reveal as they come into view, and a finale heart reacts to
//! clicks. Once every section has registered, a coordinator turns the
//! pinned regions into snap targets so that a scroll gesture ending near
//! a pinned section settles on its center.
//!
//! ## Core Pieces
//!
//! - **Timelines**: tweens of `x, y, scale, opacity, rotation` placed on a
//!   timeline and sampled at a playhead (scroll progress or clock time)
//! - **Registry and scopes**: every observer lives in an explicit
//!   [`ObserverRegistry`]; an [`AnimationScope`] releases a component's
//!   observers when it goes away
//! - **Readiness barrier**: coordination starts when every section and the
//!   first layout measurement have reported ready, not after a timer
//! - **Snap plan**: identity outside the padded pinned ranges, nearest
//!   center inside
//!
//! ## Quick Start
//!
//! ```ignore
//! use lovecard_core::{sections, CardConfig, ScrollSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CardConfig::default();
//!     let session = ScrollSession::new(sections::participants(), config.clone());
//!     let _scopes = sections::install_page(&session, &mut rand::rng())?;
//!     session.set_layout(sections::synthetic_layout(
//!         config.window.viewport(),
//!         &config.flow_heights,
//!     ));
//!
//!     println!("{:?}", session.coordinate().await);
//!     let frame = session.frame(1200.0, 0.016);
//!     println!("{}", frame.css(&"hero-cta".into()));
//!     Ok(())
//! }
//! ```

pub mod barrier;
pub mod burst;
pub mod config;
pub mod content;
pub mod coordinator;
pub mod ease;
pub mod error;
pub mod layout;
pub mod logging;
pub mod nav;
pub mod registry;
pub mod scope;
pub mod sections;
pub mod session;
pub mod snap;
pub mod style;
pub mod timeline;
pub mod trigger;

// Re-exports
pub use barrier::ReadinessBarrier;
pub use burst::{BurstField, BurstParticle, BURST_LIFETIME};
pub use config::{default_config_path, CardConfig, FlowHeights, WindowConfig};
pub use content::{Anchor, IconKind, LoveDay, LOVE_DAYS};
pub use coordinator::{install_snap, CoordinatorOutcome, COORDINATOR_OWNER};
pub use ease::Ease;
pub use error::{CardError, CardResult};
pub use layout::{PageLayout, Rect};
pub use registry::{ObserverHandle, ObserverKind, ObserverRegistry, ObserverSpec, Reaction};
pub use scope::AnimationScope;
pub use sections::Section;
pub use session::{FiredEvent, Frame, ScrollSession, LAYOUT_PARTICIPANT};
pub use snap::{PinnedRange, PinnedRegion, SnapConfig, SnapMotion, SnapPlan};
pub use style::{ElementKey, Length, Property, Props, Style, Viewport};
pub use timeline::{ClockPlayback, Position, Repeat, Timeline, Tween};
pub use trigger::{Edge, Phase, ScrollRange, TriggerEvent, TriggerPoint, TriggerSpec};
