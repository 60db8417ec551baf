//! Edge case and boundary condition tests
//!
//! These tests verify the engine handles degenerate pages, malformed
//! expressions and boundary values without panicking.

use lovecard_core::layout::{PageLayout, Rect};
use lovecard_core::registry::ObserverSpec;
use lovecard_core::snap::{PinnedRegion, SnapConfig, SnapPlan};
use lovecard_core::timeline::{Position, Timeline, Tween};
use lovecard_core::trigger::{Edge, TriggerPoint, TriggerSpec};
use lovecard_core::{
    install_snap, CardConfig, CardError, CoordinatorOutcome, Ease, ObserverRegistry, Props,
    ScrollSession, Viewport,
};

// ============================================================================
// Degenerate pages
// ============================================================================

/// A page that fits in the viewport never gets a snap observer
#[test]
fn test_zero_scroll_distance() {
    assert!(SnapPlan::new(vec![PinnedRegion::new(0.0, 100.0)], 0.0, SnapConfig::default()).is_none());
    assert!(SnapPlan::new(vec![PinnedRegion::new(0.0, 100.0)], -5.0, SnapConfig::default()).is_none());
    assert!(SnapPlan::new(vec![PinnedRegion::new(0.0, 100.0)], f64::NAN, SnapConfig::default()).is_none());
}

/// No pinned observers means no snap observer and an untouched registry
#[test]
fn test_no_pinned_regions() {
    let registry = ObserverRegistry::new();
    let trigger = TriggerSpec::new(
        "special",
        TriggerPoint::meet(Edge::Top, Edge::Percent(80.0)),
        TriggerPoint::meet(Edge::Top, Edge::Percent(50.0)),
    );
    registry.register("special", ObserverSpec::scroll("special", trigger, Timeline::new()));

    let mut layout = PageLayout::new(Viewport::new(1000.0, 800.0));
    layout.stack("special", 3000.0);
    let outcome = install_snap(&registry, &layout, &SnapConfig::default());
    assert_eq!(outcome, CoordinatorOutcome::NoPinnedRegions);
    assert_eq!(registry.len(), 1);
}

/// Pinned observers whose element was never measured are skipped
#[test]
fn test_unmeasured_pinned_element() {
    let registry = ObserverRegistry::new();
    let trigger = TriggerSpec::new(
        "ghost",
        TriggerPoint::meet(Edge::Top, Edge::Top),
        TriggerPoint::AfterStartPercent(100.0),
    )
    .pinned();
    registry.register("ghost", ObserverSpec::scroll("ghost", trigger, Timeline::new()));

    let mut layout = PageLayout::new(Viewport::new(1000.0, 800.0));
    layout.stack("other", 3000.0);
    assert_eq!(
        install_snap(&registry, &layout, &SnapConfig::default()),
        CoordinatorOutcome::NoPinnedRegions
    );
}

/// A region without an end is a point; its center is its start
#[test]
fn test_region_without_end() {
    let plan = SnapPlan::new(vec![PinnedRegion::new(500.0, None)], 1000.0, SnapConfig::default()).unwrap();
    let range = plan.ranges()[0];
    assert_eq!(range.start, 0.5);
    assert_eq!(range.end, 0.5);
    assert_eq!(range.center, 0.5);
    assert_eq!(plan.snap_to(0.51), 0.5);
    assert_eq!(plan.snap_to(0.53), 0.53);
}

/// Fractions outside [0, 1] pass through unchanged when outside every range
#[test]
fn test_out_of_range_fractions() {
    let plan = SnapPlan::new(vec![PinnedRegion::new(400.0, 600.0)], 1000.0, SnapConfig::default()).unwrap();
    assert_eq!(plan.snap_to(-0.5), -0.5);
    assert_eq!(plan.snap_to(1.5), 1.5);
}

/// Padding boundaries are inclusive
#[test]
fn test_padding_boundary() {
    let config = SnapConfig {
        tolerance: 0.125,
        ..SnapConfig::default()
    };
    let plan = SnapPlan::new(vec![PinnedRegion::new(250.0, 500.0)], 1000.0, config).unwrap();
    assert_eq!(plan.snap_to(0.125), 0.375);
    assert_eq!(plan.snap_to(0.625), 0.375);
    assert_eq!(plan.snap_to(0.0625), 0.0625);
}

/// Sub-pixel distances produce no snap motion
#[test]
fn test_tiny_snap_skipped() {
    let plan = SnapPlan::new(vec![PinnedRegion::new(0.0, 1000.0)], 2000.0, SnapConfig::default()).unwrap();
    assert!(plan.motion(500.2).is_none());
    let motion = plan.motion(520.0).unwrap();
    assert_eq!(motion.to, 500.0);
    assert_eq!(motion.position_at(0.0), 520.0);
    assert_eq!(motion.position_at(motion.duration), 500.0);
    assert!(motion.is_finished(motion.duration));
}

// ============================================================================
// Malformed expressions
// ============================================================================

#[test]
fn test_bad_ease_names() {
    for name in ["", "power4.out", "back.out(", "back.out(x)", "elastic"] {
        assert!(
            matches!(name.parse::<Ease>(), Err(CardError::InvalidEase(_))),
            "{name:?} should not parse"
        );
    }
}

#[test]
fn test_bad_trigger_points() {
    for point in ["", "top", "top top top", "middle top", "+=", "+=abc%"] {
        assert!(
            matches!(point.parse::<TriggerPoint>(), Err(CardError::InvalidTriggerPoint(_))),
            "{point:?} should not parse"
        );
    }
}

#[test]
fn test_bad_positions() {
    for pos in ["~=0.2", "-=", "abc"] {
        assert!(
            matches!(pos.parse::<Position>(), Err(CardError::InvalidPosition(_))),
            "{pos:?} should not parse"
        );
    }
}

// ============================================================================
// Sessions at the boundaries
// ============================================================================

/// Frames before any layout still play clock timelines
#[test]
fn test_frame_without_layout() {
    let session = ScrollSession::new(["hero"], CardConfig::default());
    let mut scope = session.scope("hero").unwrap();
    let timeline = Timeline::new().then(
        Tween::from_to("heart", Props::new().opacity(0.0), Props::new().opacity(1.0)).ease(Ease::None),
        0.0,
    );
    scope.add(ObserverSpec::clock("intro", Default::default(), timeline));
    let frame = session.frame(12345.0, 0.25);
    assert_eq!(frame.style(&"heart".into()).opacity, Some(0.5));
    assert!(frame.events.is_empty());
}

/// Negative frame time does not run clocks backwards
#[test]
fn test_negative_dt() {
    let session = ScrollSession::new(["hero"], CardConfig::default());
    let mut scope = session.scope("hero").unwrap();
    let timeline = Timeline::new().then(
        Tween::from_to("heart", Props::new().opacity(0.0), Props::new().opacity(1.0)).ease(Ease::None),
        0.0,
    );
    scope.add(ObserverSpec::clock("intro", Default::default(), timeline));
    session.frame(0.0, 0.25);
    let frame = session.frame(0.0, -10.0);
    assert_eq!(frame.style(&"heart".into()).opacity, Some(0.5));
}

/// Jumping across a whole trigger range in one frame fires both events
#[test]
fn test_jump_over_range() {
    let session = ScrollSession::new(["a"], CardConfig::default());
    let mut layout = PageLayout::new(Viewport::new(1000.0, 500.0));
    layout.insert("a", Rect::new(1000.0, 500.0));
    layout.document_height = 5000.0;
    session.set_layout(layout);

    let mut scope = session.scope("a").unwrap();
    let trigger = TriggerSpec::new(
        "a",
        TriggerPoint::meet(Edge::Top, Edge::Top),
        TriggerPoint::AfterStartPx(200.0),
    );
    scope.add(ObserverSpec::scroll("a", trigger, Timeline::new()));

    session.frame(0.0, 0.0);
    let events: Vec<_> = session.frame(4000.0, 0.0).events.into_iter().map(|e| e.event).collect();
    assert_eq!(
        events,
        vec![lovecard_core::TriggerEvent::Enter, lovecard_core::TriggerEvent::Leave]
    );
}

/// Settling with no snap observer installed is a no-op
#[test]
fn test_settle_before_coordination() {
    let session = ScrollSession::new(["hero"], CardConfig::default());
    assert!(session.settle(300.0).is_none());
}

/// Tearing down twice is harmless
#[test]
fn test_double_teardown() {
    let session = ScrollSession::new(["hero"], CardConfig::default());
    let mut scope = session.scope("hero").unwrap();
    scope.add(ObserverSpec::clock("intro", Default::default(), Timeline::new()));
    assert_eq!(session.teardown(), 1);
    assert_eq!(session.teardown(), 0);
    assert!(session.registry().is_empty());
}
