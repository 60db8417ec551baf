//! Tweens and timelines.
//!
//! A [`Timeline`] places `fromTo` tweens on a time axis (seconds) and can
//! be sampled at any time to get the style of every element it touches.
//! Scroll-driven timelines are sampled at `progress * duration`; clock
//! timelines at a playhead derived from elapsed time (see [`ClockPlayback`]).

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::ease::Ease;
use crate::error::CardError;
use crate::style::{ElementKey, Length, Property, Props, Style, Viewport};

/// Duration of a tween when none is given.
pub const DEFAULT_TWEEN_DURATION: f64 = 0.5;

/// A `fromTo` tween over one or more elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    targets: Vec<ElementKey>,
    from: Props,
    to: Props,
    duration: f64,
    ease: Option<Ease>,
    stagger: f64,
}

impl Tween {
    pub fn from_to(target: impl Into<ElementKey>, from: Props, to: Props) -> Self {
        Self::from_to_each(vec![target.into()], from, to)
    }

    /// Same tween applied to several elements, offset by [`Tween::stagger`].
    pub fn from_to_each(targets: Vec<ElementKey>, from: Props, to: Props) -> Self {
        Self {
            targets,
            from,
            to,
            duration: DEFAULT_TWEEN_DURATION,
            ease: None,
            stagger: 0.0,
        }
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds.max(0.0);
        self
    }

    pub fn targets(&self) -> &[ElementKey] {
        &self.targets
    }

    /// Time from the first target starting to the last one finishing.
    pub fn total_duration(&self) -> f64 {
        let extra = self.targets.len().saturating_sub(1) as f64 * self.stagger;
        self.duration + extra
    }
}

/// Where a tween is placed on its timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// At an absolute time
    At(f64),
    /// Relative to the current end of the timeline (`"-=0.3"`, `"+=1"`)
    Relative(f64),
    /// At the current end of the timeline
    End,
}

impl From<f64> for Position {
    fn from(t: f64) -> Self {
        Self::At(t)
    }
}

impl FromStr for Position {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::End);
        }
        let parse = |n: &str| {
            n.trim()
                .parse::<f64>()
                .map_err(|_| CardError::InvalidPosition(s.to_string()))
        };
        if let Some(rest) = s.strip_prefix("-=") {
            Ok(Self::Relative(-parse(rest)?))
        } else if let Some(rest) = s.strip_prefix("+=") {
            Ok(Self::Relative(parse(rest)?))
        } else {
            Ok(Self::At(parse(s)?))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Segment {
    start: f64,
    duration: f64,
    /// `None` continues from the previous segment's end value
    from: Option<Length>,
    to: Length,
    ease: Ease,
}

/// A sequence of tweens placed in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    default_ease: Option<Ease>,
    duration: f64,
    tracks: BTreeMap<(ElementKey, Property), Vec<Segment>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ease used by tweens that do not set their own.
    pub fn with_default_ease(mut self, ease: Ease) -> Self {
        self.default_ease = Some(ease);
        self
    }

    /// Place a tween. Builder form of [`Timeline::add`].
    pub fn then(mut self, tween: Tween, position: impl Into<Position>) -> Self {
        self.add(tween, position);
        self
    }

    pub fn add(&mut self, tween: Tween, position: impl Into<Position>) {
        let start = match position.into() {
            Position::At(t) => t,
            Position::Relative(offset) => self.duration + offset,
            Position::End => self.duration,
        }
        .max(0.0);

        let ease = tween.ease.or(self.default_ease).unwrap_or_default();
        let mut properties: Vec<Property> = tween
            .from
            .properties()
            .chain(tween.to.properties())
            .collect();
        properties.sort();
        properties.dedup();

        for (i, target) in tween.targets.iter().enumerate() {
            let target_start = start + i as f64 * tween.stagger;
            for &property in &properties {
                let track = self.tracks.entry((target.clone(), property)).or_default();
                let from = tween.from.get(property);
                let to = tween
                    .to
                    .get(property)
                    .or(from)
                    .unwrap_or(Length::Px(default_value(property)));
                let segment = Segment {
                    start: target_start,
                    duration: tween.duration,
                    from,
                    to,
                    ease,
                };
                let at = track.partition_point(|s| s.start <= target_start);
                track.insert(at, segment);
            }
        }

        self.duration = self.duration.max(start + tween.total_duration());
    }

    /// Latest end time over all tweens.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Elements this timeline animates.
    pub fn elements(&self) -> Vec<ElementKey> {
        let mut keys: Vec<ElementKey> = self.tracks.keys().map(|(k, _)| k.clone()).collect();
        keys.dedup();
        keys
    }

    /// Time at which the first tween touching `property` of `element` starts.
    pub fn first_start(&self, element: &ElementKey, property: Property) -> Option<f64> {
        self.tracks
            .get(&(element.clone(), property))
            .and_then(|track| track.first())
            .map(|s| s.start)
    }

    /// Style of every animated element at time `t`.
    ///
    /// With `only_started`, properties whose first tween has not begun yet
    /// are left unset instead of showing that tween's starting value.
    pub fn sample(&self, t: f64, viewport: Viewport, only_started: bool) -> BTreeMap<ElementKey, Style> {
        let mut out: BTreeMap<ElementKey, Style> = BTreeMap::new();
        for ((element, property), track) in &self.tracks {
            let Some(first) = track.first() else { continue };
            if only_started && t < first.start {
                continue;
            }
            let value = sample_track(track, *property, t, viewport);
            out.entry(element.clone()).or_default().set(*property, value);
        }
        out
    }
}

fn sample_track(track: &[Segment], property: Property, t: f64, viewport: Viewport) -> f64 {
    let fallback = default_value(property);
    let idx = track.partition_point(|s| s.start <= t);
    if idx == 0 {
        return track[0]
            .from
            .map(|l| l.resolve(viewport))
            .unwrap_or(fallback);
    }

    let seg = &track[idx - 1];
    let from = match seg.from {
        Some(l) => l.resolve(viewport),
        None if idx >= 2 => track[idx - 2].to.resolve(viewport),
        None => fallback,
    };
    let to = seg.to.resolve(viewport);
    let local = if seg.duration <= 0.0 {
        1.0
    } else {
        ((t - seg.start) / seg.duration).clamp(0.0, 1.0)
    };
    from + (to - from) * seg.ease.apply(local)
}

/// Resting value of a property with no tween applied.
pub fn default_value(property: Property) -> f64 {
    match property {
        Property::Scale | Property::Opacity => 1.0,
        Property::X | Property::Y | Property::Rotation => 0.0,
    }
}

/// How often a clock timeline plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Plays once plus this many repeats
    Times(u32),
    Forever,
}

/// Time-driven playback of a timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockPlayback {
    pub delay: f64,
    pub repeat: Repeat,
    /// Alternate direction on every repeat
    pub yoyo: bool,
}

impl Default for ClockPlayback {
    fn default() -> Self {
        Self {
            delay: 0.0,
            repeat: Repeat::Once,
            yoyo: false,
        }
    }
}

impl ClockPlayback {
    pub fn forever() -> Self {
        Self {
            repeat: Repeat::Forever,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    /// Playhead position for `elapsed` seconds on a timeline of `duration`.
    pub fn playhead(&self, elapsed: f64, duration: f64) -> f64 {
        let e = elapsed - self.delay;
        if e <= 0.0 || duration <= 0.0 {
            return 0.0;
        }
        let cycle = (e / duration).floor();
        let within = e - cycle * duration;
        let cycles = match self.repeat {
            Repeat::Once => Some(1.0),
            Repeat::Times(n) => Some(n as f64 + 1.0),
            Repeat::Forever => None,
        };
        if let Some(cycles) = cycles {
            if cycle >= cycles {
                let reversed = self.yoyo && (cycles as u64 - 1) % 2 == 1;
                return if reversed { 0.0 } else { duration };
            }
        }
        if self.yoyo && (cycle as u64) % 2 == 1 {
            duration - within
        } else {
            within
        }
    }

    /// True once a finite playback has run past its last cycle.
    pub fn is_complete(&self, elapsed: f64, duration: f64) -> bool {
        let total = match self.repeat {
            Repeat::Once => duration,
            Repeat::Times(n) => duration * (n as f64 + 1.0),
            Repeat::Forever => return false,
        };
        elapsed - self.delay >= total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn position_parsing() {
        assert_eq!("-=0.3".parse::<Position>().unwrap(), Position::Relative(-0.3));
        assert_eq!("+=1".parse::<Position>().unwrap(), Position::Relative(1.0));
        assert_eq!("0.7".parse::<Position>().unwrap(), Position::At(0.7));
        assert_eq!("".parse::<Position>().unwrap(), Position::End);
        assert!("~=2".parse::<Position>().is_err());
    }

    #[test]
    fn duration_covers_latest_tween() {
        let tl = Timeline::new()
            .then(Tween::from_to("a", Props::new().opacity(0.0), Props::new().opacity(1.0)), 0.0)
            .then(Tween::from_to("b", Props::new().opacity(0.0), Props::new().opacity(1.0)), 0.8);
        assert!(close(tl.duration(), 1.3));
    }

    #[test]
    fn relative_positions_follow_the_end() {
        let tl = Timeline::new()
            .then(Tween::from_to("a", Props::new().opacity(0.0), Props::new().opacity(1.0)).duration(1.0), Position::End)
            .then(Tween::from_to("b", Props::new().y(20.0), Props::new().y(0.0)).duration(0.6), "-=0.3".parse::<Position>().unwrap());
        assert_eq!(tl.first_start(&"b".into(), Property::Y), Some(0.7));
        assert!(close(tl.duration(), 1.3));
    }

    #[test]
    fn sample_before_inside_after() {
        let tl = Timeline::new().then(
            Tween::from_to("a", Props::new().y(40.0), Props::new().y(0.0)).ease(Ease::None).duration(1.0),
            1.0,
        );
        let a = ElementKey::from("a");
        assert_eq!(tl.sample(0.0, VP, false)[&a].y, Some(40.0));
        assert_eq!(tl.sample(1.5, VP, false)[&a].y, Some(20.0));
        assert_eq!(tl.sample(9.0, VP, false)[&a].y, Some(0.0));
    }

    #[test]
    fn only_started_hides_pending_properties() {
        let tl = Timeline::new().then(
            Tween::from_to("a", Props::new().opacity(1.0), Props::new().opacity(0.0)),
            0.7,
        );
        assert!(tl.sample(0.2, VP, true).is_empty());
        assert_eq!(tl.sample(0.2, VP, false)[&ElementKey::from("a")].opacity, Some(1.0));
        assert!(tl.sample(0.7, VP, true).contains_key(&ElementKey::from("a")));
    }

    #[test]
    fn later_tween_takes_over_property() {
        let tl = Timeline::new()
            .then(Tween::from_to("photo", Props::new().x(Length::Vw(-60.0)), Props::new().x(0.0)).ease(Ease::None), 0.0)
            .then(Tween::from_to("photo", Props::new().x(0.0), Props::new().x(Length::Vw(-28.0))).ease(Ease::None), 0.7);
        let photo = ElementKey::from("photo");
        assert_eq!(tl.sample(0.0, VP, false)[&photo].x, Some(-600.0));
        assert_eq!(tl.sample(0.6, VP, false)[&photo].x, Some(0.0));
        assert_eq!(tl.sample(1.2, VP, false)[&photo].x, Some(-280.0));
    }

    #[test]
    fn to_only_property_continues_from_previous() {
        let tl = Timeline::new()
            .then(Tween::from_to("h", Props::new().scale(1.0), Props::new().scale(1.04)).ease(Ease::None), 0.0)
            .then(Tween::from_to("h", Props::new(), Props::new().scale(1.12)).ease(Ease::None).duration(1.0), 1.0);
        let h = ElementKey::from("h");
        let mid = tl.sample(1.5, VP, false)[&h].scale.unwrap();
        assert!(close(mid, 1.08));
    }

    #[test]
    fn stagger_offsets_each_target() {
        let targets = vec![ElementKey::from("icon"), ElementKey::from("title")];
        let tl = Timeline::new().then(
            Tween::from_to_each(targets, Props::new().y(30.0), Props::new().y(0.0)).stagger(0.03),
            0.15,
        );
        assert_eq!(tl.first_start(&"icon".into(), Property::Y), Some(0.15));
        assert!(close(tl.first_start(&"title".into(), Property::Y).unwrap(), 0.18));
        assert!(close(tl.duration(), 0.68));
    }

    #[test]
    fn default_ease_applies_to_plain_tweens() {
        let tl = Timeline::new()
            .with_default_ease(Ease::None)
            .then(Tween::from_to("a", Props::new().opacity(0.0), Props::new().opacity(1.0)).duration(1.0), 0.0);
        assert_eq!(tl.sample(0.25, VP, false)[&ElementKey::from("a")].opacity, Some(0.25));
    }

    #[test]
    fn clock_once_holds_end() {
        let clock = ClockPlayback::default();
        assert_eq!(clock.playhead(0.5, 2.0), 0.5);
        assert_eq!(clock.playhead(5.0, 2.0), 2.0);
        assert!(clock.is_complete(2.0, 2.0));
        assert!(!clock.is_complete(1.9, 2.0));
    }

    #[test]
    fn clock_delay_and_forever() {
        let clock = ClockPlayback::forever().with_delay(1.5);
        assert_eq!(clock.playhead(1.0, 10.0), 0.0);
        assert_eq!(clock.playhead(13.5, 10.0), 2.0);
        assert!(!clock.is_complete(1e9, 10.0));
    }

    #[test]
    fn clock_yoyo_reverses_odd_cycles() {
        let clock = ClockPlayback::forever().yoyo();
        assert!(close(clock.playhead(0.5, 1.5), 0.5));
        assert!(close(clock.playhead(2.0, 1.5), 1.0));
        assert!(close(clock.playhead(3.5, 1.5), 0.5));
    }

    #[test]
    fn clock_times_yoyo_finishes_at_start() {
        let clock = ClockPlayback {
            repeat: Repeat::Times(1),
            yoyo: true,
            ..Default::default()
        };
        assert_eq!(clock.playhead(10.0, 1.0), 0.0);
    }
}
