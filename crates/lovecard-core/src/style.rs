//! Animated element identity, property values and resolved styles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one animated element on the page (`"hero-headline"`,
/// `"love-day-3-photo"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementKey(String);

impl ElementKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key of a child element, e.g. `hero` + `headline` = `hero-headline`.
    pub fn child(&self, part: impl fmt::Display) -> Self {
        Self(format!("{}-{}", self.0, part))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Visible window size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A property value: a plain number (pixels for offsets) or a share of
/// the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Length {
    Px(f64),
    Vw(f64),
    Vh(f64),
}

impl Length {
    pub fn resolve(self, viewport: Viewport) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Vw(v) => v * viewport.width / 100.0,
            Self::Vh(v) => v * viewport.height / 100.0,
        }
    }
}

impl From<f64> for Length {
    fn from(v: f64) -> Self {
        Self::Px(v)
    }
}

/// Animatable properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    X,
    Y,
    Scale,
    Opacity,
    Rotation,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::X,
        Property::Y,
        Property::Scale,
        Property::Opacity,
        Property::Rotation,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Sparse set of property values, one end of a tween.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Props {
    values: [Option<Length>; 5],
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(self, v: impl Into<Length>) -> Self {
        self.with(Property::X, v.into())
    }

    pub fn y(self, v: impl Into<Length>) -> Self {
        self.with(Property::Y, v.into())
    }

    pub fn scale(self, v: f64) -> Self {
        self.with(Property::Scale, Length::Px(v))
    }

    pub fn opacity(self, v: f64) -> Self {
        self.with(Property::Opacity, Length::Px(v))
    }

    pub fn rotation(self, degrees: f64) -> Self {
        self.with(Property::Rotation, Length::Px(degrees))
    }

    pub fn with(mut self, property: Property, value: Length) -> Self {
        self.values[property.index()] = Some(value);
        self
    }

    pub fn get(&self, property: Property) -> Option<Length> {
        self.values[property.index()]
    }

    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        Property::ALL
            .into_iter()
            .filter(|p| self.values[p.index()].is_some())
    }
}

/// Resolved visual state of one element. Unset properties keep whatever
/// the stylesheet says.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl Style {
    pub fn get(&self, property: Property) -> Option<f64> {
        match property {
            Property::X => self.x,
            Property::Y => self.y,
            Property::Scale => self.scale,
            Property::Opacity => self.opacity,
            Property::Rotation => self.rotation,
        }
    }

    pub fn set(&mut self, property: Property, value: f64) {
        let slot = match property {
            Property::X => &mut self.x,
            Property::Y => &mut self.y,
            Property::Scale => &mut self.scale,
            Property::Opacity => &mut self.opacity,
            Property::Rotation => &mut self.rotation,
        };
        *slot = Some(value);
    }

    /// Overlay `other` on top of `self`; set values in `other` win.
    pub fn merge(&mut self, other: &Style) {
        for property in Property::ALL {
            if let Some(v) = other.get(property) {
                self.set(property, v);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        Property::ALL.iter().all(|p| self.get(*p).is_none())
    }

    /// Inline CSS for this style, e.g.
    /// `transform: translate(0px, -12px) scale(1.04); opacity: 0.5;`
    pub fn to_css(&self) -> String {
        let mut transform = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            transform.push(format!(
                "translate({}px, {}px)",
                round(self.x.unwrap_or(0.0)),
                round(self.y.unwrap_or(0.0))
            ));
        }
        if let Some(s) = self.scale {
            transform.push(format!("scale({})", round(s)));
        }
        if let Some(r) = self.rotation {
            transform.push(format!("rotate({}deg)", round(r)));
        }

        let mut css = String::new();
        if !transform.is_empty() {
            css.push_str("transform: ");
            css.push_str(&transform.join(" "));
            css.push(';');
        }
        if let Some(o) = self.opacity {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(&format!("opacity: {};", round(o.clamp(0.0, 1.0))));
        }
        css
    }
}

fn round(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
