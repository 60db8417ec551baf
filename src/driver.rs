//! Scroll driver.
//!
//! Turns raw scroll reports into frame ticks: tracks the current offset,
//! detects the end of a gesture and plays snap and anchor motions.

use std::time::{Duration, Instant};

use lovecard_core::{Ease, ScrollSession, SnapMotion};
use tracing::debug;

/// Seconds an anchor jump takes.
pub const ANCHOR_JUMP_SECS: f64 = 0.8;

/// Tolerance when matching scroll reports against a playing motion, px.
const ECHO_SLACK: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
struct ActiveMotion {
    motion: SnapMotion,
    started: Instant,
}

impl ActiveMotion {
    /// Reports inside the motion's span are our own scrolls coming back.
    fn is_echo(&self, y: f64) -> bool {
        let lo = self.motion.from.min(self.motion.to) - ECHO_SLACK;
        let hi = self.motion.from.max(self.motion.to) + ECHO_SLACK;
        (lo..=hi).contains(&y)
    }
}

/// What one tick asks of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Seconds since the previous tick
    pub dt: f64,
    /// Where to scroll the window, if a motion is playing
    pub scroll_to: Option<f64>,
}

#[derive(Debug)]
pub struct ScrollDriver {
    scroll_end: Duration,
    scroll_y: f64,
    last_input: Option<Instant>,
    last_tick: Option<Instant>,
    motion: Option<ActiveMotion>,
    settled: bool,
}

impl ScrollDriver {
    pub fn new(scroll_end: Duration) -> Self {
        Self {
            scroll_end,
            scroll_y: 0.0,
            last_input: None,
            last_tick: None,
            motion: None,
            settled: true,
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    /// Record a scroll report from the window.
    pub fn on_scroll(&mut self, y: f64, now: Instant) {
        if !y.is_finite() {
            return;
        }
        if let Some(active) = &self.motion {
            if active.is_echo(y) {
                self.scroll_y = y;
                return;
            }
            debug!(y, "motion interrupted by user scroll");
            self.motion = None;
        }
        self.scroll_y = y;
        self.last_input = Some(now);
        self.settled = false;
    }

    /// Scroll smoothly to `to`, e.g. a navbar anchor. No snap follows.
    pub fn jump_to(&mut self, to: f64, now: Instant) {
        let motion = SnapMotion {
            from: self.scroll_y,
            to,
            duration: ANCHOR_JUMP_SECS,
            delay: 0.0,
            ease: Ease::Power2InOut,
        };
        self.motion = Some(ActiveMotion { motion, started: now });
        self.settled = true;
    }

    /// Advance to `now`. Starts a snap once the gesture has been idle for
    /// the scroll-end time, and steps any playing motion.
    pub fn tick(&mut self, now: Instant, session: &ScrollSession) -> Tick {
        let dt = self
            .last_tick
            .map(|t| now.saturating_duration_since(t).as_secs_f64())
            .unwrap_or(0.0);
        self.last_tick = Some(now);

        if self.motion.is_none() && !self.settled {
            let idle = self
                .last_input
                .map(|t| now.saturating_duration_since(t) >= self.scroll_end)
                .unwrap_or(false);
            if idle {
                self.settled = true;
                if let Some(motion) = session.settle(self.scroll_y) {
                    self.motion = Some(ActiveMotion { motion, started: now });
                }
            }
        }

        let mut scroll_to = None;
        if let Some(active) = self.motion {
            let elapsed = now.saturating_duration_since(active.started).as_secs_f64();
            let y = active.motion.position_at(elapsed);
            self.scroll_y = y;
            scroll_to = Some(y);
            if active.motion.is_finished(elapsed) {
                self.motion = None;
            }
        }

        Tick { dt, scroll_to }
    }
}
