//! Registry of live scroll observers.
//!
//! Every scroll-linked or clock-driven behavior on the page is an
//! observer registered here. The registry is an owned value handed to
//! whoever needs it (sections register through their
//! [`AnimationScope`](crate::scope::AnimationScope), the coordinator reads
//! pinned regions, teardown kills everything); cloning shares it.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::layout::PageLayout;
use crate::snap::{PinnedRegion, SnapPlan};
use crate::timeline::{ClockPlayback, Timeline};
use crate::trigger::{TriggerEvent, TriggerSpec};

/// Handle to a registered observer. Never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverHandle(u64);

impl ObserverHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObserverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer#{}", self.0)
    }
}

/// What drives an observer.
#[derive(Debug, Clone, PartialEq)]
pub enum ObserverKind {
    /// Timeline progress follows the scroll position through a trigger
    Scroll {
        trigger: TriggerSpec,
        timeline: Timeline,
    },
    /// Timeline plays against elapsed time
    Clock {
        playback: ClockPlayback,
        timeline: Timeline,
    },
    /// Global snapping rule consulted when scrolling stops
    Snap(SnapPlan),
}

/// Side effect of a trigger event on another observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Jump a clock observer to its end state
    Finish(ObserverHandle),
}

/// Everything needed to register an observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverSpec {
    /// Human-readable name for logs (`"hero:exit"`)
    pub label: String,
    pub kind: ObserverKind,
    pub reactions: Vec<(TriggerEvent, Reaction)>,
}

impl ObserverSpec {
    pub fn scroll(label: impl Into<String>, trigger: TriggerSpec, timeline: Timeline) -> Self {
        Self::with_kind(label, ObserverKind::Scroll { trigger, timeline })
    }

    pub fn clock(label: impl Into<String>, playback: ClockPlayback, timeline: Timeline) -> Self {
        Self::with_kind(label, ObserverKind::Clock { playback, timeline })
    }

    pub fn snap(plan: SnapPlan) -> Self {
        Self::with_kind("snap", ObserverKind::Snap(plan))
    }

    fn with_kind(label: impl Into<String>, kind: ObserverKind) -> Self {
        Self {
            label: label.into(),
            kind,
            reactions: Vec::new(),
        }
    }

    pub fn on(mut self, event: TriggerEvent, reaction: Reaction) -> Self {
        self.reactions.push((event, reaction));
        self
    }

    /// Trigger of a pinned scroll observer.
    pub fn pin_trigger(&self) -> Option<&TriggerSpec> {
        match &self.kind {
            ObserverKind::Scroll { trigger, .. } if trigger.pin => Some(trigger),
            _ => None,
        }
    }
}

/// Mutable per-observer playback state.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ObserverState {
    /// Seconds of clock playback
    pub elapsed: f64,
    /// Clock observer forced to its end state
    pub finished: bool,
    /// Scrub-smoothed progress last applied
    pub applied_progress: Option<f64>,
    /// Scroll offset seen on the previous frame
    pub last_scroll: Option<f64>,
}

#[derive(Debug, Clone)]
pub(crate) struct ObserverEntry {
    pub handle: ObserverHandle,
    pub owner: String,
    pub spec: ObserverSpec,
    pub state: ObserverState,
}

#[derive(Debug, Default)]
pub(crate) struct RegistryInner {
    next_id: u64,
    closed: bool,
    pub entries: Vec<ObserverEntry>,
}

/// Shared registry of live observers.
#[derive(Clone, Default)]
pub struct ObserverRegistry {
    inner: Arc<RwLock<RegistryInner>>,
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("live", &self.len())
            .finish()
    }
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer on behalf of `owner`.
    ///
    /// A closed registry still hands out a fresh handle but keeps nothing,
    /// so the observer never becomes live.
    pub fn register(&self, owner: &str, spec: ObserverSpec) -> ObserverHandle {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let handle = ObserverHandle(inner.next_id);
        if inner.closed {
            debug!(%handle, owner, label = %spec.label, "registry closed, observer dropped");
            return handle;
        }
        debug!(%handle, owner, label = %spec.label, pinned = spec.pin_trigger().is_some(), "observer registered");
        inner.entries.push(ObserverEntry {
            handle,
            owner: owner.to_string(),
            spec,
            state: ObserverState::default(),
        });
        handle
    }

    /// Release one observer. Returns false if it was already gone.
    pub fn kill(&self, handle: ObserverHandle) -> bool {
        let mut inner = self.inner.write();
        let before = inner.entries.len();
        inner.entries.retain(|e| e.handle != handle);
        let killed = inner.entries.len() != before;
        if killed {
            debug!(%handle, "observer killed");
        }
        killed
    }

    /// Release every observer registered by `owner`.
    pub fn kill_owner(&self, owner: &str) -> usize {
        let mut inner = self.inner.write();
        let before = inner.entries.len();
        inner.entries.retain(|e| e.owner != owner);
        let killed = before - inner.entries.len();
        debug!(owner, killed, "owner observers killed");
        killed
    }

    /// Release every observer.
    pub fn kill_all(&self) -> usize {
        let mut inner = self.inner.write();
        let killed = inner.entries.len();
        inner.entries.clear();
        debug!(killed, "all observers killed");
        killed
    }

    /// Stop accepting observers. Live ones stay until killed.
    pub fn close(&self) {
        self.inner.write().closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.inner.read().closed
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, handle: ObserverHandle) -> bool {
        self.inner.read().entries.iter().any(|e| e.handle == handle)
    }

    /// Handles in registration order.
    pub fn handles(&self) -> Vec<ObserverHandle> {
        self.inner.read().entries.iter().map(|e| e.handle).collect()
    }

    /// Label of a live observer.
    pub fn label(&self, handle: ObserverHandle) -> Option<String> {
        self.inner
            .read()
            .entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| e.spec.label.clone())
    }

    /// Pinned regions of every pin-bearing observer whose trigger element
    /// is measured in `layout`, in registration order.
    pub fn pinned_regions(&self, layout: &PageLayout) -> Vec<PinnedRegion> {
        self.inner
            .read()
            .entries
            .iter()
            .filter_map(|e| e.spec.pin_trigger())
            .filter_map(|trigger| trigger.resolve(layout))
            .map(|range| PinnedRegion::new(range.start, range.end))
            .collect()
    }

    /// The most recently installed snap plan.
    pub fn snap_plan(&self) -> Option<SnapPlan> {
        self.inner
            .read()
            .entries
            .iter()
            .rev()
            .find_map(|e| match &e.spec.kind {
                ObserverKind::Snap(plan) => Some(plan.clone()),
                _ => None,
            })
    }

    pub(crate) fn with_inner<R>(&self, f: impl FnOnce(&mut RegistryInner) -> R) -> R {
        f(&mut self.inner.write())
    }
}
