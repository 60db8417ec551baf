//! Observer declarations for every section of the page.
//!
//! Each section registers its timelines through its own
//! [`AnimationScope`] and then reports ready to the session's barrier.
//! Element keys are derived from the section name (`hero-cta`,
//! `love-day-3-photo`, ...); the UI renders the same keys.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::FlowHeights;
use crate::content::{self, Anchor, LoveDay, LOVE_DAYS, PILLS, RECIPIENT};
use crate::ease::Ease;
use crate::error::CardResult;
use crate::layout::{PageLayout, Rect};
use crate::registry::{ObserverHandle, ObserverSpec, Reaction};
use crate::scope::AnimationScope;
use crate::session::ScrollSession;
use crate::style::{ElementKey, Length, Props, Viewport};
use crate::timeline::{ClockPlayback, Position, Timeline, Tween};
use crate::trigger::{Edge, TriggerEvent, TriggerPoint, TriggerSpec};

/// Scrub lag of the pinned sections.
pub const PINNED_SCRUB: f64 = 0.6;
/// Scrub lag of the free-flowing reveals.
pub const REVEAL_SCRUB: f64 = 1.0;

/// A section of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "section", content = "index", rename_all = "kebab-case")]
pub enum Section {
    FloatingHearts,
    Hero,
    LoveDay(usize),
    Special,
    Gallery,
    Finale,
}

impl Section {
    /// Every section of the standard page.
    pub fn all() -> Vec<Section> {
        let mut sections = vec![Section::FloatingHearts, Section::Hero];
        sections.extend((0..LOVE_DAYS.len()).map(Section::LoveDay));
        sections.extend([Section::Special, Section::Gallery, Section::Finale]);
        sections
    }

    /// Owner, barrier participant and element key prefix.
    pub fn name(self) -> String {
        match self {
            Section::FloatingHearts => "floating-hearts".to_string(),
            Section::Hero => "hero".to_string(),
            Section::LoveDay(i) => LoveDay::section_key(i),
            Section::Special => "special".to_string(),
            Section::Gallery => "gallery".to_string(),
            Section::Finale => "finale".to_string(),
        }
    }

    pub fn key(self) -> ElementKey {
        ElementKey::new(self.name())
    }

    /// Navbar anchor rendered on this section, if any.
    pub fn anchor(self) -> Option<Anchor> {
        match self {
            Section::Hero => Some(Anchor::Hero),
            Section::LoveDay(0) => Some(Anchor::LoveWeek),
            Section::Special => Some(Anchor::Special),
            Section::Gallery => Some(Anchor::Gallery),
            Section::Finale => Some(Anchor::Finale),
            _ => None,
        }
    }

    /// Trigger of the section's pinned timeline.
    pub fn pin_trigger(self) -> Option<TriggerSpec> {
        let end = match self {
            Section::Hero => 130.0,
            Section::LoveDay(i) => {
                if LOVE_DAYS.get(i).is_some_and(|d| d.is_last) {
                    140.0
                } else {
                    130.0
                }
            }
            _ => return None,
        };
        Some(
            TriggerSpec::new(
                self.key(),
                TriggerPoint::meet(Edge::Top, Edge::Top),
                TriggerPoint::AfterStartPercent(end),
            )
            .pinned()
            .scrub(PINNED_SCRUB),
        )
    }
}

/// Barrier participants of the standard page, excluding the layout.
pub fn participants() -> Vec<String> {
    Section::all().into_iter().map(Section::name).collect()
}

/// Register a section's observers in a fresh scope and report it ready.
pub fn mount<R: Rng + ?Sized>(
    session: &ScrollSession,
    section: Section,
    rng: &mut R,
) -> CardResult<AnimationScope> {
    let name = section.name();
    let mut scope = session.scope(name.as_str())?;
    match section {
        Section::FloatingHearts => {
            let seeds = floating_motions(rng);
            install_floating_hearts(&mut scope, &seeds);
        }
        Section::Hero => {
            install_hero(&mut scope);
        }
        Section::LoveDay(i) => {
            if let Some(day) = LOVE_DAYS.get(i) {
                install_love_day(&mut scope, i, day);
            }
        }
        Section::Special => install_special(&mut scope),
        Section::Gallery => install_gallery(&mut scope),
        Section::Finale => install_finale(&mut scope),
    }
    debug!(section = %name, observers = scope.handles().len(), "section mounted");
    session.ready(&name);
    Ok(scope)
}

/// Mount every section of the standard page in document order.
pub fn install_page<R: Rng + ?Sized>(
    session: &ScrollSession,
    rng: &mut R,
) -> CardResult<Vec<AnimationScope>> {
    Section::all()
        .into_iter()
        .map(|section| mount(session, section, rng))
        .collect()
}

fn reveal(element: &ElementKey, start: Edge, end: Edge) -> TriggerSpec {
    TriggerSpec::new(
        element.clone(),
        TriggerPoint::meet(Edge::Top, start),
        TriggerPoint::meet(Edge::Top, end),
    )
    .scrub(REVEAL_SCRUB)
}

// ============================================================================
// Hero
// ============================================================================

/// Character keys of the hero headline.
pub fn headline_chars() -> Vec<ElementKey> {
    let headline = Section::Hero.key().child("headline");
    (0..RECIPIENT.chars().count())
        .map(|i| headline.child(i))
        .collect()
}

/// Handles of the hero's two observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroObservers {
    pub intro: ObserverHandle,
    pub exit: ObserverHandle,
}

pub fn install_hero(scope: &mut AnimationScope) -> HeroObservers {
    let hero = Section::Hero.key();
    let heart = hero.child("heart");
    let subhead = hero.child("subhead");
    let cta = hero.child("cta");
    let date = hero.child("date");
    let hint = hero.child("hint");

    let intro = Timeline::new()
        .with_default_ease(Ease::Power3Out)
        .then(
            Tween::from_to(
                heart.clone(),
                Props::new().opacity(0.0).scale(0.9),
                Props::new().opacity(0.1).scale(1.0),
            )
            .duration(1.0),
            Position::End,
        )
        .then(
            Tween::from_to_each(
                headline_chars(),
                Props::new().y(40.0).opacity(0.0),
                Props::new().y(0.0).opacity(1.0),
            )
            .duration(0.8)
            .stagger(0.03),
            Position::Relative(-0.5),
        )
        .then(
            Tween::from_to(
                subhead.clone(),
                Props::new().y(20.0).opacity(0.0),
                Props::new().y(0.0).opacity(1.0),
            )
            .duration(0.6),
            Position::Relative(-0.3),
        )
        .then(
            Tween::from_to(
                cta.clone(),
                Props::new().y(20.0).opacity(0.0).scale(0.95),
                Props::new().y(0.0).opacity(1.0).scale(1.0),
            )
            .duration(0.6),
            Position::Relative(-0.3),
        )
        .then(
            Tween::from_to(
                date.clone(),
                Props::new().y(15.0).opacity(0.0),
                Props::new().y(0.0).opacity(1.0),
            )
            .duration(0.5),
            Position::Relative(-0.2),
        )
        .then(
            Tween::from_to(hint.clone(), Props::new().opacity(0.0), Props::new().opacity(0.8))
                .duration(0.5),
            Position::Relative(-0.2),
        );
    let intro = scope.add(ObserverSpec::clock("hero:intro", ClockPlayback::default(), intro));

    let exit_to = |y_vh: f64| Props::new().y(Length::Vh(-y_vh)).opacity(0.0);
    let at_rest = Props::new().y(0.0).opacity(1.0);
    let exit = Timeline::new()
        .then(
            Tween::from_to(heart.clone(), Props::new().scale(1.0), Props::new().scale(1.04))
                .ease(Ease::None),
            0.0,
        )
        .then(
            Tween::from_to(hero.child("headline"), at_rest, exit_to(18.0)).ease(Ease::Power2In),
            0.7,
        )
        .then(Tween::from_to(subhead, at_rest, exit_to(14.0)).ease(Ease::Power2In), 0.72)
        .then(Tween::from_to(cta, at_rest, exit_to(10.0)).ease(Ease::Power2In), 0.74)
        .then(Tween::from_to(date, at_rest, exit_to(8.0)).ease(Ease::Power2In), 0.76)
        .then(
            Tween::from_to(
                heart,
                Props::new().scale(1.04).opacity(0.1),
                Props::new().scale(1.12).opacity(0.0),
            )
            .ease(Ease::Power2In),
            0.75,
        )
        .then(
            Tween::from_to(hint, Props::new().opacity(0.8), Props::new().opacity(0.0))
                .ease(Ease::Power2In),
            0.7,
        );

    let trigger = Section::Hero.pin_trigger().map(|t| {
        ObserverSpec::scroll("hero:exit", t, exit).on(TriggerEvent::LeaveBack, Reaction::Finish(intro))
    });
    let exit = match trigger {
        Some(spec) => scope.add(spec),
        None => intro,
    };
    HeroObservers { intro, exit }
}

// ============================================================================
// Love week
// ============================================================================

pub fn install_love_day(scope: &mut AnimationScope, index: usize, day: &LoveDay) -> Option<ObserverHandle> {
    let section = Section::LoveDay(index);
    let trigger = section.pin_trigger()?;
    let key = section.key();
    let photo = key.child("photo");
    let note = key.child("note");
    let badge = key.child("badge");
    let signature = key.child("signature");

    let fly_in = |x_vw: f64| Props::new().x(Length::Vw(x_vw)).opacity(0.0).scale(0.96);
    let landed = Props::new().x(0.0).opacity(1.0).scale(1.0);
    let rise = |y: f64| Props::new().y(y).opacity(0.0);
    let risen = Props::new().y(0.0).opacity(1.0);
    let leave = |x_vw: f64| Props::new().x(Length::Vw(x_vw)).opacity(0.0);
    let shown = Props::new().x(0.0).opacity(1.0);
    let fade = Props::new().opacity(0.0);
    let opaque = Props::new().opacity(1.0);

    let timeline = Timeline::new()
        .then(Tween::from_to(photo.clone(), fly_in(-60.0), landed).ease(Ease::Power2Out), 0.0)
        .then(Tween::from_to(note.clone(), fly_in(60.0), landed).ease(Ease::Power2Out), 0.0)
        .then(
            Tween::from_to(badge.clone(), Props::new().y(-20.0).opacity(0.0), risen).ease(Ease::Power2Out),
            0.1,
        )
        .then(
            Tween::from_to_each(vec![key.child("icon"), key.child("title")], rise(30.0), risen)
                .stagger(0.03)
                .ease(Ease::Power2Out),
            0.15,
        )
        .then(Tween::from_to(key.child("body"), rise(18.0), risen).ease(Ease::Power2Out), 0.2)
        .then(Tween::from_to(signature.clone(), rise(18.0), risen).ease(Ease::Power2Out), 0.25)
        .then(Tween::from_to(photo, shown, leave(-28.0)).ease(Ease::Power2In), 0.7)
        .then(Tween::from_to(note, shown, leave(28.0)).ease(Ease::Power2In), 0.7)
        .then(Tween::from_to(badge, opaque, fade).ease(Ease::Power2In), 0.75)
        .then(Tween::from_to(signature, opaque, fade).ease(Ease::Power2In), 0.8);

    let label = format!("{}:{}", section.name(), day.title);
    Some(scope.add(ObserverSpec::scroll(label, trigger, timeline)))
}

// ============================================================================
// Special
// ============================================================================

/// Parallax rise of the pill at `index`, in px.
pub fn pill_parallax(index: usize) -> f64 {
    -15.0 - (index % 3) as f64 * 8.0
}

pub fn pill_keys() -> Vec<ElementKey> {
    let special = Section::Special.key();
    (0..PILLS.len()).map(|i| special.child(format!("pill-{i}"))).collect()
}

pub fn install_special(scope: &mut AnimationScope) {
    let special = Section::Special.key();
    install_heading_reveals(scope, &special);

    let pills = pill_keys();
    let entrance = Timeline::new().then(
        Tween::from_to_each(
            pills.clone(),
            Props::new().y(30.0).scale(0.9).opacity(0.0),
            Props::new().y(0.0).scale(1.0).opacity(1.0),
        )
        .duration(0.6)
        .stagger(0.08)
        .ease(Ease::BackOut(1.4)),
        0.0,
    );
    scope.add(ObserverSpec::scroll(
        "special:pills",
        reveal(&special, Edge::Percent(70.0), Edge::Percent(30.0)),
        entrance,
    ));

    for (i, pill) in pills.into_iter().enumerate() {
        let drift = Timeline::new().then(
            Tween::from_to(pill, Props::new(), Props::new().y(pill_parallax(i))).ease(Ease::None),
            0.0,
        );
        let trigger = TriggerSpec::new(
            special.clone(),
            TriggerPoint::meet(Edge::Top, Edge::Bottom),
            TriggerPoint::meet(Edge::Bottom, Edge::Top),
        )
        .scrub(REVEAL_SCRUB);
        scope.add(ObserverSpec::scroll(format!("special:parallax-{i}"), trigger, drift));
    }
}

/// Heading and subheading reveals shared by the special and gallery
/// sections.
fn install_heading_reveals(scope: &mut AnimationScope, section: &ElementKey) {
    let heading = Timeline::new().then(
        Tween::from_to(
            section.child("heading"),
            Props::new().y(40.0).opacity(0.0),
            Props::new().y(0.0).opacity(1.0),
        )
        .duration(0.8)
        .ease(Ease::Power2Out),
        0.0,
    );
    scope.add(ObserverSpec::scroll(
        format!("{section}:heading"),
        reveal(section, Edge::Percent(80.0), Edge::Percent(50.0)),
        heading,
    ));

    let subheading = Timeline::new().then(
        Tween::from_to(
            section.child("subheading"),
            Props::new().y(24.0).opacity(0.0),
            Props::new().y(0.0).opacity(1.0),
        )
        .duration(0.6)
        .ease(Ease::Power2Out),
        0.0,
    );
    scope.add(ObserverSpec::scroll(
        format!("{section}:subheading"),
        reveal(section, Edge::Percent(75.0), Edge::Percent(50.0)),
        subheading,
    ));
}

// ============================================================================
// Gallery
// ============================================================================

pub fn gallery_card_keys() -> Vec<ElementKey> {
    let gallery = Section::Gallery.key();
    (0..content::GALLERY_ITEMS.len())
        .map(|i| gallery.child(format!("card-{i}")))
        .collect()
}

pub fn install_gallery(scope: &mut AnimationScope) {
    let gallery = Section::Gallery.key();
    install_heading_reveals(scope, &gallery);

    let cards = Timeline::new().then(
        Tween::from_to_each(
            gallery_card_keys(),
            Props::new().y(50.0).opacity(0.0).scale(0.95),
            Props::new().y(0.0).opacity(1.0).scale(1.0),
        )
        .duration(0.7)
        .stagger(0.12)
        .ease(Ease::Power2Out),
        0.0,
    );
    scope.add(ObserverSpec::scroll(
        "gallery:cards",
        reveal(&gallery.child("grid"), Edge::Percent(85.0), Edge::Percent(40.0)),
        cards,
    ));
}

// ============================================================================
// Finale
// ============================================================================

pub fn install_finale(scope: &mut AnimationScope) {
    let finale = Section::Finale.key();

    let heart = Timeline::new().then(
        Tween::from_to(
            finale.child("heart"),
            Props::new().scale(0.7).opacity(0.0),
            Props::new().scale(1.0).opacity(1.0),
        )
        .duration(1.0)
        .ease(Ease::BackOut(1.4)),
        0.0,
    );
    scope.add(ObserverSpec::scroll(
        "finale:heart",
        reveal(&finale, Edge::Percent(80.0), Edge::Percent(40.0)),
        heart,
    ));

    // Pulse lives on a wrapper so it composes with the reveal's scale
    let pulse = Timeline::new().then(
        Tween::from_to(finale.child("heart-pulse"), Props::new(), Props::new().scale(1.08))
            .duration(1.5)
            .ease(Ease::Power1InOut),
        0.0,
    );
    scope.add(ObserverSpec::clock("finale:pulse", ClockPlayback::forever().yoyo(), pulse));

    let message = Timeline::new().then(
        Tween::from_to(
            finale.child("message"),
            Props::new().y(30.0).opacity(0.0),
            Props::new().y(0.0).opacity(1.0),
        )
        .duration(0.8)
        .ease(Ease::Power2Out),
        0.0,
    );
    scope.add(ObserverSpec::scroll(
        "finale:message",
        reveal(&finale, Edge::Percent(70.0), Edge::Percent(40.0)),
        message,
    ));

    let footer = Timeline::new().then(
        Tween::from_to(finale.child("footer"), Props::new().opacity(0.0), Props::new().opacity(1.0))
            .duration(0.6)
            .ease(Ease::Power2Out),
        0.0,
    );
    scope.add(ObserverSpec::scroll(
        "finale:footer",
        reveal(&finale, Edge::Percent(60.0), Edge::Percent(30.0)),
        footer,
    ));
}

// ============================================================================
// Floating hearts
// ============================================================================

/// Randomized drift of one ambient heart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeartMotion {
    /// Upward travel per cycle, px
    pub rise: f64,
    /// Horizontal drift per cycle, px
    pub drift: f64,
    /// Final rotation, degrees
    pub rotation: f64,
    /// Seconds per cycle
    pub duration: f64,
    /// Seconds before the first cycle
    pub delay: f64,
}

/// One motion per floating heart seed.
pub fn floating_motions<R: Rng + ?Sized>(rng: &mut R) -> Vec<HeartMotion> {
    (0..content::FLOATING_HEARTS.len())
        .map(|i| HeartMotion {
            rise: 100.0 + rng.random::<f64>() * 200.0,
            drift: -30.0 + rng.random::<f64>() * 60.0,
            rotation: rng.random::<f64>() * 30.0 - 15.0,
            duration: 10.0 + rng.random::<f64>() * 10.0,
            delay: i as f64 * 1.5,
        })
        .collect()
}

pub fn floating_heart_keys() -> Vec<ElementKey> {
    let hearts = Section::FloatingHearts.key();
    (0..content::FLOATING_HEARTS.len()).map(|i| hearts.child(i)).collect()
}

pub fn install_floating_hearts(scope: &mut AnimationScope, motions: &[HeartMotion]) {
    for (key, motion) in floating_heart_keys().into_iter().zip(motions) {
        let timeline = Timeline::new().then(
            Tween::from_to(
                key.clone(),
                Props::new().x(0.0).y(0.0).rotation(0.0),
                Props::new()
                    .x(motion.drift)
                    .y(-motion.rise)
                    .rotation(motion.rotation),
            )
            .duration(motion.duration)
            .ease(Ease::None),
            0.0,
        );
        let playback = ClockPlayback::forever().with_delay(motion.delay);
        scope.add(ObserverSpec::clock(format!("{key}:float"), playback, timeline));
    }
}

/// CSS-animated sparkle scattered over the background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sparkle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay: f64,
    pub duration: f64,
}

pub fn sparkles<R: Rng + ?Sized>(rng: &mut R) -> Vec<Sparkle> {
    (0..content::SPARKLE_COUNT)
        .map(|_| Sparkle {
            left_pct: 5.0 + rng.random::<f64>() * 90.0,
            top_pct: 5.0 + rng.random::<f64>() * 90.0,
            delay: rng.random::<f64>() * 3.0,
            duration: 2.0 + rng.random::<f64>() * 2.0,
        })
        .collect()
}

// ============================================================================
// Synthetic layout
// ============================================================================

/// Offset of the gallery grid below the gallery's top, in viewport heights.
const GALLERY_GRID_OFFSET: f64 = 0.35;

/// Layout of the standard page without a window: pinned sections one
/// viewport tall followed by their pin spacing, flowing sections at the
/// configured heights.
pub fn synthetic_layout(viewport: Viewport, flow: &FlowHeights) -> PageLayout {
    let vh = viewport.height;
    let mut layout = PageLayout::new(viewport);

    for section in Section::all() {
        let name = section.name();
        match section {
            Section::FloatingHearts => {}
            Section::Hero | Section::LoveDay(_) => {
                let rect = layout.stack(name.as_str(), vh);
                if let Some(spacing) = section.pin_trigger().and_then(|t| t.pin_spacing(vh)) {
                    layout.stack(format!("{name}-pin-spacer"), spacing);
                }
                if section.anchor() == Some(Anchor::LoveWeek) {
                    layout.insert(Anchor::LoveWeek.id(), rect);
                }
            }
            Section::Special => {
                layout.stack(name.as_str(), flow.special * vh);
            }
            Section::Gallery => {
                let rect = layout.stack(name.as_str(), flow.gallery * vh);
                let offset = (GALLERY_GRID_OFFSET * vh).min(rect.height);
                layout.insert(
                    Section::Gallery.key().child("grid"),
                    Rect::new(rect.top + offset, rect.height - offset),
                );
            }
            Section::Finale => {
                layout.stack(name.as_str(), flow.finale.max(1.0) * vh);
            }
        }
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CardConfig;
    use crate::coordinator::CoordinatorOutcome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 800.0)
    }

    #[test]
    fn participants_cover_every_section() {
        let names = participants();
        assert_eq!(names.len(), 13);
        assert_eq!(names[1], "hero");
        assert_eq!(names[2], "love-day-0");
        assert_eq!(names.last().map(String::as_str), Some("finale"));
    }

    #[test]
    fn only_first_day_carries_love_week_anchor() {
        assert_eq!(Section::LoveDay(0).anchor(), Some(Anchor::LoveWeek));
        for i in 1..LOVE_DAYS.len() {
            assert_eq!(Section::LoveDay(i).anchor(), None);
        }
    }

    #[test]
    fn last_day_pins_longer() {
        let vh = 800.0;
        let spacing = |s: Section| s.pin_trigger().and_then(|t| t.pin_spacing(vh));
        assert_eq!(spacing(Section::LoveDay(0)), Some(1040.0));
        assert_eq!(spacing(Section::LoveDay(7)), Some(1120.0));
        assert_eq!(spacing(Section::Hero), Some(1040.0));
        assert_eq!(spacing(Section::Special), None);
    }

    #[test]
    fn parallax_cycles_in_threes() {
        let offsets: Vec<f64> = (0..4).map(pill_parallax).collect();
        assert_eq!(offsets, vec![-15.0, -23.0, -31.0, -15.0]);
    }

    #[test]
    fn synthetic_layout_stacks_pins_and_flow() {
        let layout = synthetic_layout(viewport(), &FlowHeights::default());
        let hero = layout.rect(&"hero".into()).unwrap();
        let first_day = layout.rect(&"love-day-0".into()).unwrap();
        assert_eq!(hero, Rect::new(0.0, 800.0));
        assert_eq!(first_day.top, 800.0 + 1040.0);
        assert_eq!(layout.rect(&"love-week".into()), Some(first_day));
        assert!(layout.rect(&"gallery-grid".into()).is_some());
        assert!(layout.max_scroll() > 0.0);
    }

    #[tokio::test]
    async fn standard_page_installs_nine_pinned_regions() {
        let session = ScrollSession::new(participants(), CardConfig::default());
        let mut rng = StdRng::seed_from_u64(7);
        let scopes = install_page(&session, &mut rng).unwrap();
        assert_eq!(scopes.len(), 13);
        session.set_layout(synthetic_layout(viewport(), &FlowHeights::default()));
        assert!(session.barrier().is_open());

        let outcome = session.coordinate().await;
        let CoordinatorOutcome::Installed { ranges, .. } = outcome else {
            panic!("expected snap install, got {outcome:?}");
        };
        assert_eq!(ranges.len(), 9);
        assert!(ranges.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn hero_content_hidden_before_intro_and_visible_after() {
        let session = ScrollSession::new(participants(), CardConfig::default());
        let mut scope = session.scope("hero").unwrap();
        install_hero(&mut scope);
        let cta = ElementKey::from("hero-cta");

        let start = session.frame(0.0, 0.0);
        assert_eq!(start.style(&cta).opacity, Some(0.0));
        let done = session.frame(0.0, 10.0);
        assert_eq!(done.style(&cta).opacity, Some(1.0));
        assert_eq!(done.style(&"hero-heart".into()).opacity, Some(0.1));
    }

    #[test]
    fn love_day_holds_between_entrance_and_exit() {
        let session = ScrollSession::new(participants(), CardConfig::default());
        let mut scope = session.scope("love-day-0").unwrap();
        install_love_day(&mut scope, 0, &LOVE_DAYS[0]);
        let layout = synthetic_layout(viewport(), &FlowHeights::default());
        let top = layout.rect(&"love-day-0".into()).unwrap().top;
        session.set_layout(layout);

        // Halfway through the pin the timeline sits at 0.65 of 1.3 s
        let frame = session.frame(top + 520.0, 0.0);
        let photo = frame.style(&"love-day-0-photo".into());
        assert_eq!(photo.opacity, Some(1.0));
        assert_eq!(photo.x, Some(0.0));
    }

    #[test]
    fn floating_motions_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let motions = floating_motions(&mut rng);
        assert_eq!(motions.len(), 8);
        for (i, m) in motions.iter().enumerate() {
            assert!((100.0..=300.0).contains(&m.rise));
            assert!((-30.0..=30.0).contains(&m.drift));
            assert!((-15.0..=15.0).contains(&m.rotation));
            assert!((10.0..=20.0).contains(&m.duration));
            assert_eq!(m.delay, i as f64 * 1.5);
        }
        assert_eq!(sparkles(&mut rng).len(), 12);
    }
}
