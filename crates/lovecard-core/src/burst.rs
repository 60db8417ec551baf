//! Click bursts on the finale heart.

use std::time::{Duration, Instant};

use tracing::trace;

/// How long a burst heart stays on screen.
pub const BURST_LIFETIME: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstParticle {
    pub id: u64,
    /// Element-local click position, px
    pub x: f64,
    pub y: f64,
    pub born: Instant,
}

/// Live burst hearts plus the running click count.
#[derive(Debug, Clone, Default)]
pub struct BurstField {
    next_id: u64,
    clicks: u32,
    particles: Vec<BurstParticle>,
}

impl BurstField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click at `(x, y)`; returns the new particle's id.
    pub fn click(&mut self, x: f64, y: f64, now: Instant) -> u64 {
        self.next_id += 1;
        self.clicks = self.clicks.saturating_add(1);
        let id = self.next_id;
        self.particles.push(BurstParticle { id, x, y, born: now });
        trace!(id, x, y, clicks = self.clicks, "heart clicked");
        id
    }

    /// Drop particles older than [`BURST_LIFETIME`]; returns how many went.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.particles.len();
        self.particles
            .retain(|p| now.saturating_duration_since(p.born) < BURST_LIFETIME);
        before - self.particles.len()
    }

    /// Remove one particle regardless of age.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.particles.len();
        self.particles.retain(|p| p.id != id);
        before != self.particles.len()
    }

    pub fn particles(&self) -> &[BurstParticle] {
        &self.particles
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// The counter badge appears after the first click.
    pub fn show_counter(&self) -> bool {
        self.clicks > 0
    }
}
