//! Card context for the Love Week page.
//!
//! Provides the scroll session, the latest frame and the page command
//! channel to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a section component
//! use_section(Section::Gallery);
//! let frame = use_frame();
//! let css = style_of(&frame.read(), "gallery-heading");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use lovecard_core::sections::{self, Section};
use lovecard_core::{Anchor, AnimationScope, CardConfig, ElementKey, Frame, ScrollSession};
use tracing::{debug, warn};

/// Shared state of the page.
#[derive(Clone)]
pub struct CardContext {
    pub session: ScrollSession,
    pub config: CardConfig,
}

/// Requests from components to the scroll driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageCommand {
    /// Scroll smoothly to an anchor
    JumpTo(Anchor),
}

/// Hook to access the card context.
pub fn use_card() -> CardContext {
    use_context::<CardContext>()
}

/// Hook to access the latest evaluated frame.
pub fn use_frame() -> Signal<Frame> {
    use_context::<Signal<Frame>>()
}

/// Hook to access the current scroll offset.
pub fn use_scroll_y() -> ReadOnlySignal<f64> {
    use_context::<ReadOnlySignal<f64>>()
}

/// Hook to send commands to the scroll driver.
pub fn use_page_commands() -> Coroutine<PageCommand> {
    use_coroutine_handle::<PageCommand>()
}

/// Register a section's observers for the lifetime of the calling
/// component. The scope reverts when the component unmounts.
pub fn use_section(section: Section) {
    let card = use_card();
    let scope = use_hook(move || {
        let mounted = sections::mount(&card.session, section, &mut rand::rng());
        if let Err(e) = &mounted {
            warn!(section = %section.name(), "section not mounted: {}", e);
        }
        Rc::new(RefCell::new(mounted.ok()))
    });

    use_drop(move || {
        if let Some(scope) = scope.borrow_mut().take() {
            debug!(section = %section.name(), observers = scope.handles().len(), "section unmounted");
            drop::<AnimationScope>(scope);
        }
    });
}

/// Inline CSS of one element in a frame.
pub fn style_of(frame: &Frame, key: impl Into<ElementKey>) -> String {
    frame.css(&key.into())
}
