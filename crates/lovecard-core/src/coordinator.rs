//! Scroll-snap coordinator.
//!
//! Runs once per page, after every section has registered its observers:
//! reads the pinned regions, derives fractional snap targets and installs
//! a single global snap observer.

use serde::Serialize;
use tracing::{debug, info};

use crate::layout::PageLayout;
use crate::registry::{ObserverHandle, ObserverRegistry, ObserverSpec};
use crate::snap::{PinnedRange, SnapConfig, SnapPlan};

/// Owner name of the observer the coordinator installs.
pub const COORDINATOR_OWNER: &str = "coordinator";

/// What a coordinator run did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CoordinatorOutcome {
    /// A snap observer now covers these ranges
    Installed {
        #[serde(skip)]
        handle: ObserverHandle,
        ranges: Vec<PinnedRange>,
    },
    /// No observer is pinned; nothing installed
    NoPinnedRegions,
    /// The page cannot scroll (or was never measured); nothing installed
    NoScrollableDistance,
    /// Teardown happened before the coordinator ran
    Cancelled,
}

impl CoordinatorOutcome {
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed { .. })
    }
}

/// Install the global snap observer for the current registry and layout.
pub fn install_snap(
    registry: &ObserverRegistry,
    layout: &PageLayout,
    config: &SnapConfig,
) -> CoordinatorOutcome {
    let max_scroll = layout.max_scroll();
    if !(max_scroll > 0.0) {
        debug!(max_scroll, "no scrollable distance, snap not installed");
        return CoordinatorOutcome::NoScrollableDistance;
    }

    let regions = registry.pinned_regions(layout);
    let Some(plan) = SnapPlan::new(regions, max_scroll, *config) else {
        debug!("no pinned regions, snap not installed");
        return CoordinatorOutcome::NoPinnedRegions;
    };

    let ranges = plan.ranges().to_vec();
    let handle = registry.register(COORDINATOR_OWNER, ObserverSpec::snap(plan));
    info!(%handle, regions = ranges.len(), max_scroll, "snap observer installed");
    CoordinatorOutcome::Installed { handle, ranges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::style::Viewport;
    use crate::timeline::Timeline;
    use crate::trigger::{Edge, TriggerPoint, TriggerSpec};

    fn pin(registry: &ObserverRegistry, element: &str) {
        let trigger = TriggerSpec::new(
            element,
            TriggerPoint::meet(Edge::Top, Edge::Top),
            TriggerPoint::AfterStartPercent(100.0),
        )
        .pinned();
        registry.register(element, ObserverSpec::scroll(element, trigger, Timeline::new()));
    }

    #[test]
    fn installs_one_snap_observer() {
        let registry = ObserverRegistry::new();
        pin(&registry, "a");
        pin(&registry, "b");

        let mut layout = PageLayout::new(Viewport::new(1000.0, 500.0));
        layout.stack("a", 1000.0);
        layout.stack("b", 1000.0);

        let outcome = install_snap(&registry, &layout, &SnapConfig::default());
        let CoordinatorOutcome::Installed { handle, ranges } = outcome else {
            panic!("expected install, got {outcome:?}");
        };
        assert_eq!(ranges.len(), 2);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains(handle));
        assert!(registry.snap_plan().is_some());
    }

    #[test]
    fn no_pins_installs_nothing() {
        let registry = ObserverRegistry::new();
        let mut layout = PageLayout::new(Viewport::new(1000.0, 500.0));
        layout.stack("a", 3000.0);
        let outcome = install_snap(&registry, &layout, &SnapConfig::default());
        assert_eq!(outcome, CoordinatorOutcome::NoPinnedRegions);
        assert!(registry.is_empty());
    }

    #[test]
    fn unscrollable_page_installs_nothing() {
        let registry = ObserverRegistry::new();
        pin(&registry, "a");
        let mut layout = PageLayout::new(Viewport::new(1000.0, 500.0));
        layout.insert("a", Rect::new(0.0, 400.0));
        let outcome = install_snap(&registry, &layout, &SnapConfig::default());
        assert_eq!(outcome, CoordinatorOutcome::NoScrollableDistance);
        assert_eq!(registry.len(), 1);
    }
}
