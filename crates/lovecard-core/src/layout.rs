//! Measured page geometry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::{ElementKey, Viewport};

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// One measurement of the page: viewport, document height and the rects
/// of every element a trigger refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub document_height: f64,
    #[serde(default)]
    pub rects: BTreeMap<ElementKey, Rect>,
}

impl PageLayout {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            document_height: viewport.height,
            rects: BTreeMap::new(),
        }
    }

    pub fn rect(&self, key: &ElementKey) -> Option<Rect> {
        self.rects.get(key).copied()
    }

    pub fn insert(&mut self, key: impl Into<ElementKey>, rect: Rect) {
        self.rects.insert(key.into(), rect);
    }

    /// Append an element below everything measured so far and grow the
    /// document to fit. Used to build synthetic layouts.
    pub fn stack(&mut self, key: impl Into<ElementKey>, height: f64) -> Rect {
        let top = self
            .rects
            .values()
            .map(Rect::bottom)
            .fold(0.0_f64, f64::max);
        let rect = Rect::new(top, height.max(0.0));
        self.rects.insert(key.into(), rect);
        self.document_height = self.document_height.max(rect.bottom());
        rect
    }

    /// Largest reachable scroll offset; zero when the page fits the viewport.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport.height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_places_elements_in_order() {
        let mut layout = PageLayout::new(Viewport::new(1280.0, 800.0));
        let a = layout.stack("a", 1840.0);
        let b = layout.stack("b", 600.0);
        assert_eq!(a.top, 0.0);
        assert_eq!(b.top, 1840.0);
        assert_eq!(layout.document_height, 2440.0);
        assert_eq!(layout.max_scroll(), 1640.0);
    }

    #[test]
    fn max_scroll_never_negative() {
        let layout = PageLayout::new(Viewport::new(1280.0, 800.0));
        assert_eq!(layout.max_scroll(), 0.0);
    }

    #[test]
    fn deserializes_from_measurement_json() {
        let json = r#"{
            "viewport": {"width": 1280, "height": 800},
            "document_height": 4000,
            "rects": {"hero": {"top": 0, "height": 1840}}
        }"#;
        let layout: PageLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.rect(&"hero".into()), Some(Rect::new(0.0, 1840.0)));
    }
}
