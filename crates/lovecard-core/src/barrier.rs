//! Readiness barrier for cross-component coordination.
//!
//! Each expected participant signals once when its registrations are
//! done; waiters resume when the last one arrives.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug)]
struct BarrierInner {
    expected: BTreeSet<String>,
    arrived: Mutex<BTreeSet<String>>,
    count: watch::Sender<usize>,
}

/// Counted latch over named participants. Cloning shares the barrier.
#[derive(Debug, Clone)]
pub struct ReadinessBarrier {
    inner: Arc<BarrierInner>,
}

impl ReadinessBarrier {
    pub fn new<I, S>(participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let expected: BTreeSet<String> = participants.into_iter().map(Into::into).collect();
        let (count, _) = watch::channel(0);
        Self {
            inner: Arc::new(BarrierInner {
                expected,
                arrived: Mutex::new(BTreeSet::new()),
                count,
            }),
        }
    }

    /// Record that `name` is ready. Unknown names and repeated signals are
    /// ignored; returns true only when this call counted.
    pub fn signal(&self, name: &str) -> bool {
        if !self.inner.expected.contains(name) {
            debug!(participant = name, "ignoring signal from unexpected participant");
            return false;
        }
        let mut arrived = self.inner.arrived.lock();
        if !arrived.insert(name.to_string()) {
            return false;
        }
        let count = arrived.len();
        drop(arrived);
        debug!(participant = name, count, expected = self.expected(), "participant ready");
        self.inner.count.send_replace(count);
        true
    }

    pub fn expected(&self) -> usize {
        self.inner.expected.len()
    }

    pub fn arrived(&self) -> usize {
        *self.inner.count.borrow()
    }

    pub fn is_open(&self) -> bool {
        self.arrived() >= self.expected()
    }

    /// Participants that have not signalled yet.
    pub fn pending(&self) -> Vec<String> {
        let arrived = self.inner.arrived.lock();
        self.inner
            .expected
            .iter()
            .filter(|name| !arrived.contains(*name))
            .cloned()
            .collect()
    }

    /// Resolve once every participant has signalled.
    pub async fn wait(&self) {
        let expected = self.expected();
        let mut rx = self.inner.count.subscribe();
        // The sender lives as long as `self`, so the channel cannot close here
        let _ = rx.wait_for(|count| *count >= expected).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn counts_each_participant_once() {
        let barrier = ReadinessBarrier::new(["hero", "finale", "layout"]);
        assert!(barrier.signal("hero"));
        assert!(!barrier.signal("hero"));
        assert!(!barrier.signal("stranger"));
        assert_eq!(barrier.arrived(), 1);
        assert_eq!(barrier.pending(), vec!["finale".to_string(), "layout".to_string()]);
        assert!(!barrier.is_open());
    }

    #[test]
    fn empty_barrier_is_open() {
        let barrier = ReadinessBarrier::new(Vec::<String>::new());
        assert!(barrier.is_open());
    }

    #[tokio::test]
    async fn wait_resolves_after_last_signal() {
        let barrier = ReadinessBarrier::new(["a", "b"]);
        let waiter = barrier.clone();
        let task = tokio::spawn(async move { waiter.wait().await });

        barrier.signal("a");
        tokio::task::yield_now().await;
        assert!(!task.is_finished());

        barrier.signal("b");
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("barrier never opened")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_on_open_barrier_returns_immediately() {
        let barrier = ReadinessBarrier::new(["a"]);
        barrier.signal("a");
        tokio::time::timeout(Duration::from_millis(50), barrier.wait())
            .await
            .expect("open barrier should not block");
    }
}
