//! Per-component disposer lists.

use tracing::debug;

use crate::registry::{ObserverHandle, ObserverRegistry, ObserverSpec};

/// Observers created by one component. Reverting (explicitly or by
/// dropping the scope) releases all of them.
#[derive(Debug)]
pub struct AnimationScope {
    name: String,
    registry: ObserverRegistry,
    handles: Vec<ObserverHandle>,
    reverted: bool,
}

impl AnimationScope {
    pub fn new(name: impl Into<String>, registry: ObserverRegistry) -> Self {
        Self {
            name: name.into(),
            registry,
            handles: Vec::new(),
            reverted: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register an observer owned by this scope.
    pub fn add(&mut self, spec: ObserverSpec) -> ObserverHandle {
        // Remounted components reuse their reverted scope
        self.reverted = false;
        let handle = self.registry.register(&self.name, spec);
        self.handles.push(handle);
        handle
    }

    pub fn handles(&self) -> &[ObserverHandle] {
        &self.handles
    }

    pub fn is_reverted(&self) -> bool {
        self.reverted
    }

    /// Kill every observer this scope created. Safe to call repeatedly.
    pub fn revert(&mut self) -> usize {
        if self.reverted {
            return 0;
        }
        let killed = self
            .handles
            .drain(..)
            .filter(|h| self.registry.kill(*h))
            .count();
        self.reverted = true;
        debug!(scope = %self.name, killed, "animation scope reverted");
        killed
    }
}

impl Drop for AnimationScope {
    fn drop(&mut self) {
        self.revert();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{ClockPlayback, Timeline};

    fn clock(label: &str) -> ObserverSpec {
        ObserverSpec::clock(label, ClockPlayback::default(), Timeline::new())
    }

    #[test]
    fn drop_releases_everything() {
        let registry = ObserverRegistry::new();
        {
            let mut scope = AnimationScope::new("hero", registry.clone());
            scope.add(clock("intro"));
            scope.add(clock("exit"));
            assert_eq!(registry.len(), 2);
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn revert_is_idempotent() {
        let registry = ObserverRegistry::new();
        let mut scope = AnimationScope::new("hero", registry.clone());
        scope.add(clock("intro"));
        assert_eq!(scope.revert(), 1);
        assert_eq!(scope.revert(), 0);
        assert!(scope.is_reverted());
        assert!(scope.handles().is_empty());
    }

    #[test]
    fn revert_tolerates_external_kill() {
        let registry = ObserverRegistry::new();
        let mut scope = AnimationScope::new("hero", registry.clone());
        scope.add(clock("intro"));
        scope.add(clock("exit"));
        registry.kill_all();
        assert_eq!(scope.revert(), 0);
    }

    #[test]
    fn scopes_only_release_their_own() {
        let registry = ObserverRegistry::new();
        let mut hero = AnimationScope::new("hero", registry.clone());
        let mut finale = AnimationScope::new("finale", registry.clone());
        hero.add(clock("intro"));
        let pulse = finale.add(clock("pulse"));
        hero.revert();
        assert_eq!(registry.handles(), vec![pulse]);
    }
}
