//! Navbar state.

use crate::content::Anchor;
use crate::layout::PageLayout;

/// True once the page has scrolled past `threshold`.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Scroll offset that brings `anchor` to the top of the viewport, clamped
/// to the scrollable range. `None` when the anchor has not been measured.
pub fn anchor_offset(layout: &PageLayout, anchor: Anchor) -> Option<f64> {
    let rect = layout.rect(&anchor.id().into())?;
    Some(rect.top.clamp(0.0, layout.max_scroll()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::style::Viewport;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, 100.0));
        assert!(!is_scrolled(100.0, 100.0));
        assert!(is_scrolled(100.5, 100.0));
    }

    #[test]
    fn missing_anchor_is_skipped() {
        let mut layout = PageLayout::new(Viewport::new(1000.0, 800.0));
        layout.stack("hero", 1800.0);
        layout.stack("finale", 800.0);
        assert_eq!(anchor_offset(&layout, Anchor::Hero), Some(0.0));
        assert_eq!(anchor_offset(&layout, Anchor::Gallery), None);
        assert_eq!(anchor_offset(&layout, Anchor::Finale), Some(1800.0));

        layout.insert("special", Rect::new(5000.0, 10.0));
        assert_eq!(anchor_offset(&layout, Anchor::Special), Some(layout.max_scroll()));
    }
}
