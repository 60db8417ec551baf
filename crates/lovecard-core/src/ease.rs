//! Easing curves.
//!
//! Names follow the `family.direction` convention used in animation
//! configs (`"power2.out"`, `"back.out(1.4)"`, `"none"`), so section
//! timelines and the config file can spell eases the same way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Default overshoot for `back.*` eases when none is given.
pub const DEFAULT_BACK_OVERSHOOT: f64 = 1.70158;

/// An easing curve mapping linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    /// Linear
    None,
    Power1In,
    Power1Out,
    Power1InOut,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3In,
    Power3Out,
    Power3InOut,
    /// Overshoots the target and settles back, by the given amount
    BackOut(f64),
}

impl Default for Ease {
    fn default() -> Self {
        Self::Power1Out
    }
}

impl Ease {
    /// Apply the curve. `t` is clamped to `[0, 1]`; endpoints are exact.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match self {
            Self::None => t,
            Self::Power1In => ease_in(t, 2),
            Self::Power1Out => ease_out(t, 2),
            Self::Power1InOut => ease_in_out(t, 2),
            Self::Power2In => ease_in(t, 3),
            Self::Power2Out => ease_out(t, 3),
            Self::Power2InOut => ease_in_out(t, 3),
            Self::Power3In => ease_in(t, 4),
            Self::Power3Out => ease_out(t, 4),
            Self::Power3InOut => ease_in_out(t, 4),
            Self::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
        }
    }
}

fn ease_in(t: f64, power: i32) -> f64 {
    t.powi(power)
}

fn ease_out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

fn ease_in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        ease_in(t * 2.0, power) / 2.0
    } else {
        1.0 - ease_in((1.0 - t) * 2.0, power) / 2.0
    }
}

impl FromStr for Ease {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let ease = match name.as_str() {
            "none" | "linear" => Self::None,
            "power1.in" => Self::Power1In,
            "power1" | "power1.out" => Self::Power1Out,
            "power1.inout" => Self::Power1InOut,
            "power2.in" => Self::Power2In,
            "power2" | "power2.out" => Self::Power2Out,
            "power2.inout" => Self::Power2InOut,
            "power3.in" => Self::Power3In,
            "power3" | "power3.out" => Self::Power3Out,
            "power3.inout" => Self::Power3InOut,
            "back.out" => Self::BackOut(DEFAULT_BACK_OVERSHOOT),
            other => {
                let overshoot = other
                    .strip_prefix("back.out(")
                    .and_then(|rest| rest.strip_suffix(')'))
                    .and_then(|n| n.trim().parse::<f64>().ok())
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| CardError::InvalidEase(s.to_string()))?;
                Self::BackOut(overshoot)
            }
        };
        Ok(ease)
    }
}

impl TryFrom<String> for Ease {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.to_string()
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Power1In => write!(f, "power1.in"),
            Self::Power1Out => write!(f, "power1.out"),
            Self::Power1InOut => write!(f, "power1.inOut"),
            Self::Power2In => write!(f, "power2.in"),
            Self::Power2Out => write!(f, "power2.out"),
            Self::Power2InOut => write!(f, "power2.inOut"),
            Self::Power3In => write!(f, "power3.in"),
            Self::Power3Out => write!(f, "power3.out"),
            Self::Power3InOut => write!(f, "power3.inOut"),
            Self::BackOut(s) => write!(f, "back.out({})", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 11] = [
        Ease::None,
        Ease::Power1In,
        Ease::Power1Out,
        Ease::Power1InOut,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3In,
        Ease::Power3Out,
        Ease::Power3InOut,
        Ease::BackOut(1.4),
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{ease}");
            assert_eq!(ease.apply(1.0), 1.0, "{ease}");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2In.apply(7.0), 1.0);
    }

    #[test]
    fn power_curves_are_monotonic() {
        for ease in &ALL[..10] {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b && b < c, "{ease}");
        }
    }

    #[test]
    fn out_leads_and_in_lags() {
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
        assert!(Ease::Power2In.apply(0.5) < 0.5);
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.4).apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn parse_names() {
        assert_eq!("power2.out".parse::<Ease>().unwrap(), Ease::Power2Out);
        assert_eq!("power1.inOut".parse::<Ease>().unwrap(), Ease::Power1InOut);
        assert_eq!("none".parse::<Ease>().unwrap(), Ease::None);
        assert_eq!("back.out(1.4)".parse::<Ease>().unwrap(), Ease::BackOut(1.4));
        assert_eq!(
            "back.out".parse::<Ease>().unwrap(),
            Ease::BackOut(DEFAULT_BACK_OVERSHOOT)
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "power9.out".parse::<Ease>(),
            Err(CardError::InvalidEase(_))
        ));
        assert!("back.out(abc)".parse::<Ease>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for ease in ALL {
            assert_eq!(ease.to_string().parse::<Ease>().unwrap(), ease);
        }
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&Ease::Power2Out).unwrap();
        assert_eq!(json, "\"power2.out\"");
        let back: Ease = serde_json::from_str("\"back.out(1.4)\"").unwrap();
        assert_eq!(back, Ease::BackOut(1.4));
    }
}
