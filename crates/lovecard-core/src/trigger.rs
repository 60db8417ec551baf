//! Scroll triggers: where a scroll-linked behavior starts and ends.
//!
//! A trigger point pairs an edge of the trigger element with an edge of
//! the viewport. `"top 80%"` starts when the element's top reaches 80% of
//! the way down the viewport; `"top top"` when it reaches the viewport
//! top. Ends may also be relative to the start: `"+=130%"` is 1.3 viewport
//! heights of scrolling after the start.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::layout::PageLayout;
use crate::style::ElementKey;

/// An edge of the element or of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    /// Percentage of the extent from its top
    Percent(f64),
    /// Pixels from its top
    Px(f64),
}

impl Edge {
    /// Offset of this edge from the top of something `extent` tall.
    pub fn offset(self, extent: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => extent * 0.5,
            Self::Bottom => extent,
            Self::Percent(p) => extent * p / 100.0,
            Self::Px(px) => px,
        }
    }
}

impl FromStr for Edge {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidTriggerPoint(s.to_string());
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => {
                if let Some(n) = s.strip_suffix('%') {
                    n.parse().map(Self::Percent).map_err(|_| invalid())
                } else {
                    let n = s.strip_suffix("px").unwrap_or(s);
                    n.parse().map(Self::Px).map_err(|_| invalid())
                }
            }
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Center => write!(f, "center"),
            Self::Bottom => write!(f, "bottom"),
            Self::Percent(p) => write!(f, "{}%", p),
            Self::Px(px) => write!(f, "{}px", px),
        }
    }
}

/// Start or end of a trigger range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TriggerPoint {
    /// Element edge meets viewport edge
    Meet { element: Edge, viewport: Edge },
    /// Viewport-height percentage past the start (`"+=130%"`)
    AfterStartPercent(f64),
    /// Pixels past the start (`"+=300px"`)
    AfterStartPx(f64),
}

impl TriggerPoint {
    pub fn meet(element: Edge, viewport: Edge) -> Self {
        Self::Meet { element, viewport }
    }

    /// Scroll offset at which this point is reached. `start` is the
    /// already-resolved start offset, used by relative points.
    fn resolve(self, top: f64, height: f64, viewport_height: f64, start: f64) -> f64 {
        match self {
            Self::Meet { element, viewport } => {
                top + element.offset(height) - viewport.offset(viewport_height)
            }
            Self::AfterStartPercent(p) => start + viewport_height * p / 100.0,
            Self::AfterStartPx(px) => start + px,
        }
    }
}

impl FromStr for TriggerPoint {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || CardError::InvalidTriggerPoint(s.to_string());
        if let Some(rest) = trimmed.strip_prefix("+=") {
            return if let Some(n) = rest.strip_suffix('%') {
                n.parse().map(Self::AfterStartPercent).map_err(|_| invalid())
            } else {
                let n = rest.strip_suffix("px").unwrap_or(rest);
                n.parse().map(Self::AfterStartPx).map_err(|_| invalid())
            };
        }

        let mut parts = trimmed.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Self::Meet {
                element: element.parse().map_err(|_| invalid())?,
                viewport: viewport.parse().map_err(|_| invalid())?,
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for TriggerPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meet { element, viewport } => write!(f, "{} {}", element, viewport),
            Self::AfterStartPercent(p) => write!(f, "+={}%", p),
            Self::AfterStartPx(px) => write!(f, "+={}px", px),
        }
    }
}

/// Scroll trigger attached to one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerSpec {
    pub element: ElementKey,
    pub start: TriggerPoint,
    pub end: TriggerPoint,
    /// Element stays fixed in the viewport while scrolling through the range
    pub pin: bool,
    /// Seconds the applied progress takes to catch up with the scroll
    /// position; `None` jumps straight to it
    pub scrub: Option<f64>,
}

impl TriggerSpec {
    pub fn new(element: impl Into<ElementKey>, start: TriggerPoint, end: TriggerPoint) -> Self {
        Self {
            element: element.into(),
            start,
            end,
            pin: false,
            scrub: None,
        }
    }

    pub fn pinned(mut self) -> Self {
        self.pin = true;
        self
    }

    pub fn scrub(mut self, seconds: f64) -> Self {
        self.scrub = Some(seconds.max(0.0));
        self
    }

    /// Absolute `(start, end)` scroll offsets, or `None` when the trigger
    /// element has not been measured.
    pub fn resolve(&self, layout: &PageLayout) -> Option<ScrollRange> {
        let rect = layout.rect(&self.element)?;
        let vh = layout.viewport.height;
        let start = self.start.resolve(rect.top, rect.height, vh, rect.top);
        let end = self.end.resolve(rect.top, rect.height, vh, start);
        Some(ScrollRange { start, end })
    }

    /// Extra scroll distance a pinned element holds still for, when it can
    /// be known from the viewport alone.
    pub fn pin_spacing(&self, viewport_height: f64) -> Option<f64> {
        if !self.pin {
            return None;
        }
        match self.end {
            TriggerPoint::AfterStartPercent(p) => Some(viewport_height * p / 100.0),
            TriggerPoint::AfterStartPx(px) => Some(px),
            TriggerPoint::Meet { .. } => None,
        }
    }
}

/// Resolved trigger range in scroll pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    /// Linear progress through the range, clamped to `[0, 1]`. A zero-width
    /// range is a step at `start`.
    pub fn progress(&self, scroll: f64) -> f64 {
        if self.end <= self.start {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    pub fn phase(&self, scroll: f64) -> Phase {
        if scroll <= self.start {
            Phase::Before
        } else if scroll >= self.end {
            Phase::After
        } else {
            Phase::Active
        }
    }

    /// Events fired when scrolling from `prev` to `scroll`.
    pub fn crossings(&self, prev: f64, scroll: f64) -> Vec<TriggerEvent> {
        use Phase::*;
        use TriggerEvent::*;
        match (self.phase(prev), self.phase(scroll)) {
            (Before, Active) => vec![Enter],
            (Before, After) => vec![Enter, Leave],
            (Active, After) => vec![Leave],
            (After, Active) => vec![EnterBack],
            (After, Before) => vec![EnterBack, LeaveBack],
            (Active, Before) => vec![LeaveBack],
            _ => Vec::new(),
        }
    }
}

/// Where the scroll position sits relative to a trigger range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Before,
    Active,
    After,
}

/// Crossing of a trigger boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerEvent {
    /// Scrolled forward past the start
    Enter,
    /// Scrolled forward past the end
    Leave,
    /// Scrolled backward past the end
    EnterBack,
    /// Scrolled backward past the start
    LeaveBack,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::style::Viewport;

    fn layout() -> PageLayout {
        let mut layout = PageLayout::new(Viewport::new(1280.0, 800.0));
        layout.insert("hero", Rect::new(0.0, 1840.0));
        layout.insert("special", Rect::new(3000.0, 900.0));
        layout.document_height = 5000.0;
        layout
    }

    #[test]
    fn parse_points() {
        assert_eq!(
            "top top".parse::<TriggerPoint>().unwrap(),
            TriggerPoint::meet(Edge::Top, Edge::Top)
        );
        assert_eq!(
            "top 80%".parse::<TriggerPoint>().unwrap(),
            TriggerPoint::meet(Edge::Top, Edge::Percent(80.0))
        );
        assert_eq!(
            "bottom 120px".parse::<TriggerPoint>().unwrap(),
            TriggerPoint::meet(Edge::Bottom, Edge::Px(120.0))
        );
        assert_eq!(
            "+=130%".parse::<TriggerPoint>().unwrap(),
            TriggerPoint::AfterStartPercent(130.0)
        );
        assert_eq!(
            "+=300px".parse::<TriggerPoint>().unwrap(),
            TriggerPoint::AfterStartPx(300.0)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "top", "top top top", "sideways top", "+=lots", "top 8o%"] {
            assert!(
                matches!(bad.parse::<TriggerPoint>(), Err(CardError::InvalidTriggerPoint(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for s in ["top top", "top 80%", "bottom top", "+=130%", "+=300px"] {
            let point: TriggerPoint = s.parse().unwrap();
            assert_eq!(point.to_string(), s);
        }
    }

    #[test]
    fn pinned_relative_range() {
        let spec = TriggerSpec::new(
            "hero",
            TriggerPoint::meet(Edge::Top, Edge::Top),
            TriggerPoint::AfterStartPercent(130.0),
        )
        .pinned();
        let range = spec.resolve(&layout()).unwrap();
        assert_eq!(range.start, 0.0);
        assert_eq!(range.end, 1040.0);
        assert_eq!(spec.pin_spacing(800.0), Some(1040.0));
    }

    #[test]
    fn viewport_relative_range() {
        let spec = TriggerSpec::new(
            "special",
            TriggerPoint::meet(Edge::Top, Edge::Percent(80.0)),
            TriggerPoint::meet(Edge::Top, Edge::Percent(50.0)),
        );
        let range = spec.resolve(&layout()).unwrap();
        assert_eq!(range.start, 3000.0 - 640.0);
        assert_eq!(range.end, 3000.0 - 400.0);
        assert_eq!(spec.pin_spacing(800.0), None);
    }

    #[test]
    fn unmeasured_element_is_skipped() {
        let spec = TriggerSpec::new(
            "gallery",
            TriggerPoint::meet(Edge::Top, Edge::Top),
            TriggerPoint::meet(Edge::Bottom, Edge::Top),
        );
        assert!(spec.resolve(&layout()).is_none());
    }

    #[test]
    fn progress_is_clamped_and_steps_on_zero_width() {
        let range = ScrollRange { start: 100.0, end: 300.0 };
        assert_eq!(range.progress(0.0), 0.0);
        assert_eq!(range.progress(200.0), 0.5);
        assert_eq!(range.progress(900.0), 1.0);

        let point = ScrollRange { start: 100.0, end: 100.0 };
        assert_eq!(point.progress(99.0), 0.0);
        assert_eq!(point.progress(100.0), 1.0);
    }

    #[test]
    fn crossing_events() {
        let range = ScrollRange { start: 100.0, end: 300.0 };
        assert_eq!(range.crossings(0.0, 150.0), vec![TriggerEvent::Enter]);
        assert_eq!(range.crossings(150.0, 400.0), vec![TriggerEvent::Leave]);
        assert_eq!(range.crossings(400.0, 250.0), vec![TriggerEvent::EnterBack]);
        assert_eq!(range.crossings(250.0, 0.0), vec![TriggerEvent::LeaveBack]);
        assert_eq!(
            range.crossings(0.0, 900.0),
            vec![TriggerEvent::Enter, TriggerEvent::Leave]
        );
        assert!(range.crossings(150.0, 200.0).is_empty());
    }
}
