//! Snap targets derived from pinned regions.
//!
//! Scroll positions are handled as fractions of the maximum scroll offset
//! (0 = top of the document, 1 = fully scrolled). Releasing a scroll near a
//! pinned region snaps to that region's center; releasing anywhere else is
//! left alone.

use serde::{Deserialize, Serialize};

use crate::ease::Ease;

/// Document distance (as a fraction) at which a snap uses its longest duration.
pub const SNAP_DISTANCE_FOR_MAX_DURATION: f64 = 0.1;

/// Smallest snap correction worth animating, in pixels.
pub const MIN_SNAP_DISTANCE_PX: f64 = 0.5;

/// A pinned scroll region in absolute scroll pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinnedRegion {
    pub start: f64,
    /// Release offset; a region without one is a zero-width point
    pub end: Option<f64>,
}

impl PinnedRegion {
    pub fn new(start: f64, end: impl Into<Option<f64>>) -> Self {
        Self {
            start,
            end: end.into(),
        }
    }

    pub fn end_or_start(&self) -> f64 {
        self.end.unwrap_or(self.start)
    }
}

/// A pinned region as fractions of the maximum scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinnedRange {
    pub start: f64,
    pub end: f64,
    pub center: f64,
}

impl PinnedRange {
    fn from_region(region: &PinnedRegion, max_scroll: f64) -> Self {
        let start = region.start / max_scroll;
        let end = region.end_or_start() / max_scroll;
        Self {
            start,
            end,
            center: start + (end - start) * 0.5,
        }
    }

    /// True when `v` lies within the range widened by `pad` on both sides.
    pub fn contains_padded(&self, v: f64, pad: f64) -> bool {
        v >= self.start - pad && v <= self.end + pad
    }
}

/// Tuning for the snap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapConfig {
    /// Padding (fraction of the document) around each pinned range
    pub tolerance: f64,
    /// Shortest snap animation, seconds
    pub min_duration: f64,
    /// Longest snap animation, seconds
    pub max_duration: f64,
    /// Wait before the snap animation starts, seconds
    pub delay: f64,
    pub ease: Ease,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.02,
            min_duration: 0.15,
            max_duration: 0.35,
            delay: 0.0,
            ease: Ease::Power2Out,
        }
    }
}

impl SnapConfig {
    /// Animation length for a snap covering `distance` of the document.
    pub fn duration_for(&self, distance: f64) -> f64 {
        let share = (distance.abs() / SNAP_DISTANCE_FOR_MAX_DURATION).clamp(0.0, 1.0);
        self.min_duration + (self.max_duration - self.min_duration) * share
    }
}

/// The global snapping rule installed by the coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapPlan {
    ranges: Vec<PinnedRange>,
    max_scroll: f64,
    config: SnapConfig,
}

impl SnapPlan {
    /// Build a plan, or `None` when there is nothing to snap to: no
    /// regions, or no usable scroll distance.
    pub fn new(mut regions: Vec<PinnedRegion>, max_scroll: f64, config: SnapConfig) -> Option<Self> {
        if !(max_scroll.is_finite() && max_scroll > 0.0) || regions.is_empty() {
            return None;
        }
        regions.sort_by(|a, b| a.start.total_cmp(&b.start));
        let ranges = regions
            .iter()
            .map(|r| PinnedRange::from_region(r, max_scroll))
            .collect();
        Some(Self {
            ranges,
            max_scroll,
            config,
        })
    }

    pub fn ranges(&self) -> &[PinnedRange] {
        &self.ranges
    }

    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Snap target for a scroll fraction `v`.
    ///
    /// Outside every padded range `v` comes back unchanged. Inside, the
    /// result is the center closest to `v` over all ranges; on equal
    /// distance the earlier range wins.
    pub fn snap_to(&self, v: f64) -> f64 {
        let pad = self.config.tolerance;
        if !self.ranges.iter().any(|r| r.contains_padded(v, pad)) {
            return v;
        }
        let mut best = self.ranges[0].center;
        for range in &self.ranges {
            if (range.center - v).abs() < (best - v).abs() {
                best = range.center;
            }
        }
        best
    }

    /// Snap animation for a scroll released at `scroll_y` pixels, if the
    /// target is meaningfully different from where the scroll stopped.
    pub fn motion(&self, scroll_y: f64) -> Option<SnapMotion> {
        let v = scroll_y / self.max_scroll;
        let target = self.snap_to(v);
        let to = target * self.max_scroll;
        if (to - scroll_y).abs() < MIN_SNAP_DISTANCE_PX {
            return None;
        }
        Some(SnapMotion {
            from: scroll_y,
            to,
            duration: self.config.duration_for(target - v),
            delay: self.config.delay,
            ease: self.config.ease,
        })
    }
}

/// A scroll animation toward a snap target, in pixels and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapMotion {
    pub from: f64,
    pub to: f64,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl SnapMotion {
    /// Scroll offset `elapsed` seconds after the snap was decided.
    pub fn position_at(&self, elapsed: f64) -> f64 {
        let e = elapsed - self.delay;
        if e <= 0.0 {
            return self.from;
        }
        let p = if self.duration <= 0.0 {
            1.0
        } else {
            (e / self.duration).clamp(0.0, 1.0)
        };
        self.from + (self.to - self.from) * self.ease.apply(p)
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.delay + self.duration
    }
}
