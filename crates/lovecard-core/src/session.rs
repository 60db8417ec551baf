//! Scroll session: the live page's engine state.
//!
//! A [`ScrollSession`] bundles the observer registry, the readiness
//! barrier, the latest layout measurement and the cancellation token of
//! the page. The UI feeds it scroll positions and frame times and gets
//! back resolved element styles; when scrolling stops it asks for a snap.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::barrier::ReadinessBarrier;
use crate::config::CardConfig;
use crate::coordinator::{install_snap, CoordinatorOutcome};
use crate::error::{CardError, CardResult};
use crate::layout::PageLayout;
use crate::registry::{ObserverHandle, ObserverKind, ObserverRegistry, Reaction};
use crate::scope::AnimationScope;
use crate::snap::SnapMotion;
use crate::style::{ElementKey, Style};
use crate::trigger::TriggerEvent;

/// Barrier participant that signals when the first layout arrives.
pub const LAYOUT_PARTICIPANT: &str = "layout";

/// A trigger event fired during a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiredEvent {
    #[serde(skip)]
    pub handle: ObserverHandle,
    pub label: String,
    pub event: TriggerEvent,
}

/// Result of evaluating one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub scroll_y: f64,
    pub styles: BTreeMap<ElementKey, Style>,
    pub events: Vec<FiredEvent>,
}

impl Frame {
    pub fn style(&self, key: &ElementKey) -> Style {
        self.styles.get(key).copied().unwrap_or_default()
    }

    /// Inline CSS for an element; empty when nothing animates it.
    pub fn css(&self, key: &ElementKey) -> String {
        self.style(key).to_css()
    }
}

struct SessionInner {
    registry: ObserverRegistry,
    barrier: ReadinessBarrier,
    layout: RwLock<Option<PageLayout>>,
    cancel: CancellationToken,
    config: CardConfig,
}

/// Shared engine state of one page. Cloning shares it.
#[derive(Clone)]
pub struct ScrollSession {
    inner: Arc<SessionInner>,
}

impl std::fmt::Debug for ScrollSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSession")
            .field("observers", &self.inner.registry.len())
            .field("barrier_open", &self.inner.barrier.is_open())
            .field("torn_down", &self.is_torn_down())
            .finish()
    }
}

impl ScrollSession {
    /// New session waiting on `participants` plus the first layout.
    pub fn new<I, S>(participants: I, config: CardConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = participants
            .into_iter()
            .map(Into::into)
            .chain(std::iter::once(LAYOUT_PARTICIPANT.to_string()));
        Self {
            inner: Arc::new(SessionInner {
                registry: ObserverRegistry::new(),
                barrier: ReadinessBarrier::new(names),
                layout: RwLock::new(None),
                cancel: CancellationToken::new(),
                config,
            }),
        }
    }

    pub fn registry(&self) -> &ObserverRegistry {
        &self.inner.registry
    }

    pub fn barrier(&self) -> &ReadinessBarrier {
        &self.inner.barrier
    }

    pub fn config(&self) -> &CardConfig {
        &self.inner.config
    }

    /// Disposer scope for a component; its observers die with it.
    /// Fails once the session has been torn down.
    pub fn scope(&self, name: impl Into<String>) -> CardResult<AnimationScope> {
        let name = name.into();
        if self.is_torn_down() {
            return Err(CardError::SessionClosed(name));
        }
        Ok(AnimationScope::new(name, self.inner.registry.clone()))
    }

    /// Mark a section's registrations complete.
    pub fn ready(&self, participant: &str) -> bool {
        self.inner.barrier.signal(participant)
    }

    /// Store a new measurement. The first one also opens the layout slot
    /// of the readiness barrier.
    pub fn set_layout(&self, layout: PageLayout) {
        debug!(
            document_height = layout.document_height,
            elements = layout.rects.len(),
            "layout measured"
        );
        *self.inner.layout.write() = Some(layout);
        self.inner.barrier.signal(LAYOUT_PARTICIPANT);
    }

    pub fn layout(&self) -> Option<PageLayout> {
        self.inner.layout.read().clone()
    }

    /// Evaluate every observer at `scroll_y`, `dt` seconds after the
    /// previous frame.
    pub fn frame(&self, scroll_y: f64, dt: f64) -> Frame {
        let dt = dt.max(0.0);
        let layout = self.layout();
        let viewport = layout
            .as_ref()
            .map(|l| l.viewport)
            .unwrap_or_else(|| self.inner.config.window.viewport());

        let mut frame = Frame {
            scroll_y,
            ..Frame::default()
        };
        let mut reactions = Vec::new();

        self.inner.registry.with_inner(|inner| {
            for entry in inner.entries.iter_mut() {
                let state = &mut entry.state;
                let sampled = match &entry.spec.kind {
                    ObserverKind::Clock { playback, timeline } => {
                        let duration = timeline.duration();
                        let t = if state.finished {
                            duration
                        } else {
                            state.elapsed += dt;
                            playback.playhead(state.elapsed, duration)
                        };
                        timeline.sample(t, viewport, false)
                    }
                    ObserverKind::Scroll { trigger, timeline } => {
                        let Some(range) = layout.as_ref().and_then(|l| trigger.resolve(l)) else {
                            continue;
                        };
                        if let Some(prev) = state.last_scroll {
                            for event in range.crossings(prev, scroll_y) {
                                frame.events.push(FiredEvent {
                                    handle: entry.handle,
                                    label: entry.spec.label.clone(),
                                    event,
                                });
                                reactions.extend(
                                    entry
                                        .spec
                                        .reactions
                                        .iter()
                                        .filter(|(on, _)| *on == event)
                                        .map(|(_, r)| *r),
                                );
                            }
                        }
                        state.last_scroll = Some(scroll_y);

                        let raw = range.progress(scroll_y);
                        let applied = match (trigger.scrub, state.applied_progress) {
                            (Some(lag), Some(prev)) if lag > 0.0 => {
                                prev + (raw - prev) * (dt / lag).min(1.0)
                            }
                            _ => raw,
                        };
                        state.applied_progress = Some(applied);
                        timeline.sample(applied * timeline.duration(), viewport, true)
                    }
                    ObserverKind::Snap(_) => continue,
                };

                for (key, style) in sampled {
                    frame.styles.entry(key).or_default().merge(&style);
                }
            }

            for reaction in &reactions {
                match reaction {
                    Reaction::Finish(target) => {
                        if let Some(entry) = inner.entries.iter_mut().find(|e| e.handle == *target) {
                            entry.state.finished = true;
                        }
                    }
                }
            }
        });

        for fired in &frame.events {
            debug!(label = %fired.label, event = ?fired.event, scroll_y, "trigger crossed");
        }
        frame
    }

    /// True while any scrubbed observer is still catching up with the
    /// scroll position, i.e. another frame would change something.
    pub fn is_settling(&self) -> bool {
        let layout = self.layout();
        self.inner.registry.with_inner(|inner| {
            inner.entries.iter().any(|entry| match &entry.spec.kind {
                ObserverKind::Scroll { trigger, .. } => {
                    let (Some(layout), Some(scroll), Some(applied)) = (
                        layout.as_ref(),
                        entry.state.last_scroll,
                        entry.state.applied_progress,
                    ) else {
                        return false;
                    };
                    trigger
                        .resolve(layout)
                        .map(|r| (r.progress(scroll) - applied).abs() > 1e-4)
                        .unwrap_or(false)
                }
                _ => false,
            })
        })
    }

    /// Snap motion for a gesture that ended at `scroll_y`.
    pub fn settle(&self, scroll_y: f64) -> Option<SnapMotion> {
        let motion = self.inner.registry.snap_plan()?.motion(scroll_y)?;
        debug!(from = motion.from, to = motion.to, duration = motion.duration, "snapping");
        Some(motion)
    }

    /// Wait until every participant is ready, then install the global snap
    /// observer. Returns early with `Cancelled` if the session is torn
    /// down first.
    pub async fn coordinate(&self) -> CoordinatorOutcome {
        let cancel = self.inner.cancel.clone();
        let barrier = self.inner.barrier.clone();
        let fallback = self.inner.config.barrier_fallback();

        let ready = async {
            match fallback {
                Some(limit) => {
                    if tokio::time::timeout(limit, barrier.wait()).await.is_err() {
                        warn!(
                            pending = ?barrier.pending(),
                            "readiness barrier timed out, coordinating with current registrations"
                        );
                    }
                }
                None => barrier.wait().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("coordinator cancelled before running");
                return CoordinatorOutcome::Cancelled;
            }
            _ = ready => {}
        }
        if self.is_torn_down() {
            debug!("session torn down while waiting, snap not installed");
            return CoordinatorOutcome::Cancelled;
        }

        let Some(layout) = self.layout() else {
            info!("page never measured, snap not installed");
            return CoordinatorOutcome::NoScrollableDistance;
        };
        let outcome = install_snap(&self.inner.registry, &layout, &self.inner.config.snap);
        if !outcome.is_installed() {
            info!(?outcome, "coordinator finished without snapping");
        }
        outcome
    }

    /// Cancel a pending coordinator and release every observer. Scopes
    /// created earlier can no longer register anything.
    pub fn teardown(&self) -> usize {
        self.inner.cancel.cancel();
        self.inner.registry.close();
        let killed = self.inner.registry.kill_all();
        info!(killed, "scroll session torn down");
        killed
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.cancel.is_cancelled()
    }
}
