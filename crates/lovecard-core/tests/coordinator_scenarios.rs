//! Coordinator Scenario Tests
//!
//! End-to-end runs of the scroll session: sections register, the layout
//! arrives, the coordinator installs the snap observer, frames and snaps
//! are evaluated, and teardown releases everything.
//!
//! ## What These Tests Verify
//!
//! - Coordination waits for every participant, not for a timer
//! - The three-region snap scenario on a live registry
//! - Teardown leaves an empty registry, cancels a pending coordinator and
//!   refuses later registrations
//! - The barrier fallback proceeds with whatever is registered

use lovecard_core::layout::{PageLayout, Rect};
use lovecard_core::registry::ObserverSpec;
use lovecard_core::sections::{self, Section};
use lovecard_core::timeline::Timeline;
use lovecard_core::trigger::{Edge, TriggerPoint, TriggerSpec};
use lovecard_core::{CardConfig, CoordinatorOutcome, ScrollSession, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::{sleep, timeout, Duration};

fn pinned(element: &str, end_px: f64) -> ObserverSpec {
    let trigger = TriggerSpec::new(
        element,
        TriggerPoint::meet(Edge::Top, Edge::Top),
        TriggerPoint::AfterStartPx(end_px),
    )
    .pinned();
    ObserverSpec::scroll(element, trigger, Timeline::new())
}

/// Pinned regions 0..200, 250..350 and 800..900 on a page with
/// max_scroll 1000.
fn three_region_layout() -> PageLayout {
    let mut layout = PageLayout::new(Viewport::new(1000.0, 500.0));
    layout.insert("a", Rect::new(0.0, 500.0));
    layout.insert("b", Rect::new(250.0, 500.0));
    layout.insert("c", Rect::new(800.0, 500.0));
    layout.document_height = 1500.0;
    layout
}

fn no_fallback() -> CardConfig {
    CardConfig {
        barrier_fallback_ms: None,
        ..CardConfig::default()
    }
}

// ============================================================================
// Barrier-gated coordination
// ============================================================================

#[tokio::test]
async fn test_three_region_scenario() {
    let session = ScrollSession::new(["a", "b", "c"], no_fallback());
    let mut scope_a = session.scope("a").unwrap();
    let mut scope_b = session.scope("b").unwrap();
    let mut scope_c = session.scope("c").unwrap();
    // Registered out of document order
    scope_c.add(pinned("c", 100.0));
    scope_a.add(pinned("a", 200.0));
    scope_b.add(pinned("b", 100.0));
    for name in ["a", "b", "c"] {
        session.ready(name);
    }
    session.set_layout(three_region_layout());

    let outcome = session.coordinate().await;
    let CoordinatorOutcome::Installed { ranges, .. } = outcome else {
        panic!("expected install, got {outcome:?}");
    };
    let centers: Vec<f64> = ranges.iter().map(|r| r.center).collect();
    for (got, want) in centers.iter().zip([0.1, 0.3, 0.85]) {
        assert!((got - want).abs() < 1e-12, "center {got} != {want}");
    }

    let plan = session.registry().snap_plan().unwrap();
    assert_eq!(plan.snap_to(0.15), 0.1);
    assert!((plan.snap_to(0.3) - 0.3).abs() < 1e-12);
    assert_eq!(plan.snap_to(0.5), 0.5);

    let motion = session.settle(150.0).unwrap();
    assert_eq!(motion.to, 100.0);
    assert!(motion.duration >= 0.15 && motion.duration <= 0.35);
    assert!(session.settle(300.0).is_none());
}

#[tokio::test]
async fn test_coordinator_waits_for_last_participant() {
    let session = ScrollSession::new(["hero", "finale"], no_fallback());
    session.set_layout(three_region_layout());
    let mut hero = session.scope("hero").unwrap();
    hero.add(pinned("a", 200.0));
    session.ready("hero");

    let runner = session.clone();
    let task = tokio::spawn(async move { runner.coordinate().await });
    sleep(Duration::from_millis(20)).await;
    assert!(!task.is_finished(), "coordinator ran before finale was ready");
    assert!(session.registry().snap_plan().is_none());

    // Late registration is still seen by the coordinator
    let mut finale = session.scope("finale").unwrap();
    finale.add(pinned("c", 100.0));
    session.ready("finale");

    let outcome = timeout(Duration::from_secs(1), task)
        .await
        .expect("coordinator never ran")
        .unwrap();
    let CoordinatorOutcome::Installed { ranges, .. } = outcome else {
        panic!("expected install, got {outcome:?}");
    };
    assert_eq!(ranges.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_barrier_fallback_proceeds() {
    let config = CardConfig {
        barrier_fallback_ms: Some(3000),
        ..CardConfig::default()
    };
    let session = ScrollSession::new(["hero", "never"], config);
    let mut hero = session.scope("hero").unwrap();
    hero.add(pinned("a", 200.0));
    session.ready("hero");
    session.set_layout(three_region_layout());

    let outcome = session.coordinate().await;
    assert!(outcome.is_installed());
    assert_eq!(session.barrier().pending(), vec!["never".to_string()]);
}

#[tokio::test]
async fn test_unmeasured_page_installs_nothing() {
    let config = CardConfig {
        barrier_fallback_ms: Some(10),
        ..CardConfig::default()
    };
    let session = ScrollSession::new(Vec::<String>::new(), config);
    let outcome = session.coordinate().await;
    assert_eq!(outcome, CoordinatorOutcome::NoScrollableDistance);
    assert!(session.registry().is_empty());
}

// ============================================================================
// Teardown
// ============================================================================

#[tokio::test]
async fn test_teardown_leaves_empty_registry() {
    let session = ScrollSession::new(sections::participants(), no_fallback());
    let mut rng = StdRng::seed_from_u64(1);
    let scopes = sections::install_page(&session, &mut rng).unwrap();
    session.set_layout(sections::synthetic_layout(
        Viewport::new(1280.0, 800.0),
        &Default::default(),
    ));
    assert!(session.coordinate().await.is_installed());
    assert!(!session.registry().is_empty());

    session.teardown();
    assert!(session.registry().is_empty());
    assert!(session.registry().snap_plan().is_none());
    assert!(session.settle(1000.0).is_none());

    // Scopes dropped after teardown have nothing left to release
    drop(scopes);
    assert!(session.registry().is_empty());
}

#[tokio::test]
async fn test_teardown_cancels_pending_coordinator() {
    let session = ScrollSession::new(["hero", "finale"], no_fallback());
    session.set_layout(three_region_layout());
    let runner = session.clone();
    let task = tokio::spawn(async move { runner.coordinate().await });
    sleep(Duration::from_millis(10)).await;

    session.teardown();
    let outcome = timeout(Duration::from_secs(1), task)
        .await
        .expect("cancelled coordinator should return")
        .unwrap();
    assert_eq!(outcome, CoordinatorOutcome::Cancelled);

    // A late ready signal must not resurrect the snap observer
    session.ready("hero");
    session.ready("finale");
    sleep(Duration::from_millis(10)).await;
    assert!(session.registry().is_empty());
}

#[tokio::test]
async fn test_coordinate_after_teardown_is_cancelled() {
    // Barrier already open when coordinate starts: both select arms are ready
    for _ in 0..50 {
        let session = ScrollSession::new(["a", "b", "c"], no_fallback());
        let mut scope = session.scope("a").unwrap();
        scope.add(pinned("a", 200.0));
        session.ready("a");
        session.ready("b");
        session.ready("c");
        session.set_layout(three_region_layout());
        assert!(session.barrier().is_open());

        session.teardown();
        assert_eq!(session.coordinate().await, CoordinatorOutcome::Cancelled);
        assert!(session.registry().snap_plan().is_none());
        assert!(session.registry().is_empty());
    }
}

#[tokio::test]
async fn test_scope_cannot_register_after_teardown() {
    let session = ScrollSession::new(["a"], no_fallback());
    let mut scope = session.scope("a").unwrap();
    session.set_layout(three_region_layout());
    session.ready("a");

    session.teardown();
    let late = scope.add(pinned("a", 200.0));
    assert!(!session.registry().contains(late));
    assert!(session.registry().is_empty());

    assert_eq!(session.coordinate().await, CoordinatorOutcome::Cancelled);
    assert!(session.registry().is_empty());
    assert!(session.settle(100.0).is_none());
}

#[tokio::test]
async fn test_unmounted_section_releases_only_its_observers() {
    let session = ScrollSession::new(sections::participants(), no_fallback());
    let mut rng = StdRng::seed_from_u64(3);
    let mut scopes = sections::install_page(&session, &mut rng).unwrap();
    let total = session.registry().len();

    let hero_at = Section::all()
        .iter()
        .position(|s| *s == Section::Hero)
        .unwrap();
    let hero = scopes.remove(hero_at);
    let hero_observers = hero.handles().len();
    drop(hero);
    assert_eq!(session.registry().len(), total - hero_observers);
}
