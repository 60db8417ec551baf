//! Static content of the card.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Name on the card.
pub const RECIPIENT: &str = "Yashika";
pub const HERO_SUBHEAD: &str = "My Sweetheart 💖";
pub const HERO_CTA: &str = "Click Me Cutu!!";
pub const HERO_DATE_PILL: &str = "Bubu Days";
pub const NAV_LOGO: &str = "My baby";
pub const SIGNATURE: &str = "— Atharv";

pub const SPECIAL_HEADING: &str = "Why You're Special";
pub const SPECIAL_SUBHEADING: &str = "A few tiny truths 💫";

pub const GALLERY_HEADING: &str = "Our Moments";
pub const GALLERY_SUBHEADING: &str = "Proof that happiness looks like you 📸";

pub const FINALE_MESSAGE: &str = "Made with love, just for you, Yashika 💕";
pub const FINALE_FOOTER: &str = "From Atharv, who really, really likes you.";
pub const FINALE_HINT: &str = "Click the heart! 💝";

/// Page anchors reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Hero,
    LoveWeek,
    Special,
    Gallery,
    Finale,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Hero,
        Anchor::LoveWeek,
        Anchor::Special,
        Anchor::Gallery,
        Anchor::Finale,
    ];

    /// DOM id of the anchor element.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Hero => "hero",
            Anchor::LoveWeek => "love-week",
            Anchor::Special => "special",
            Anchor::Gallery => "gallery",
            Anchor::Finale => "finale",
        }
    }

    /// Navbar label.
    pub fn label(self) -> &'static str {
        match self {
            Anchor::Hero => "Home",
            Anchor::LoveWeek => "Our Love Week",
            Anchor::Special => "Love Notes",
            Anchor::Gallery => "Memories",
            Anchor::Finale => "Finale",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Anchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Anchor::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| format!("unknown anchor '{s}'"))
    }
}

/// Glyph shown next to a day title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Rose,
    Ring,
    Chocolate,
    Teddy,
    Promise,
    Hug,
    Kiss,
    Heart,
}

impl IconKind {
    /// Icon for a selector string; unknown selectors get a heart.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "rose" => Self::Rose,
            "ring" => Self::Ring,
            "chocolate" => Self::Chocolate,
            "teddy" => Self::Teddy,
            "promise" => Self::Promise,
            "hug" => Self::Hug,
            "kiss" => Self::Kiss,
            _ => Self::Heart,
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            Self::Rose => "rose",
            Self::Ring => "ring",
            Self::Chocolate => "chocolate",
            Self::Teddy => "teddy",
            Self::Promise => "promise",
            Self::Hug => "hug",
            Self::Kiss => "kiss",
            Self::Heart => "heart",
        }
    }
}

/// One day of the love week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoveDay {
    /// Date label, e.g. "7 Feb"
    pub day: &'static str,
    pub title: &'static str,
    /// Image path relative to the asset directory
    pub image: &'static str,
    pub message: &'static str,
    pub icon: IconKind,
    pub z_index: i32,
    /// Final day; pinned for a longer stretch
    pub is_last: bool,
}

impl LoveDay {
    /// Element key prefix of this day's section.
    pub fn section_key(index: usize) -> String {
        format!("love-day-{index}")
    }
}

pub const LOVE_DAYS: [LoveDay; 8] = [
    LoveDay {
        day: "7 Feb",
        title: "Rose Day",
        image: "rose_day.jpg",
        message: "When I think about roses, I think about how something can be soft and strong at the same time. That's what you remind me of. You don't even try, yet you carry this quiet beauty that just stays with me.",
        icon: IconKind::Rose,
        z_index: 20,
        is_last: false,
    },
    LoveDay {
        day: "8 Feb",
        title: "Propose Day",
        image: "propose_day.jpg",
        message: "I don't have a rehearsed speech or dramatic lines. I just know this — I like the idea of choosing you. Not once, not loudly, but every day in small ways. In the way I listen. In the way I stay.",
        icon: IconKind::Ring,
        z_index: 30,
        is_last: false,
    },
    LoveDay {
        day: "9 Feb",
        title: "Chocolate Day",
        image: "chocolate_day.jpg",
        message: "Chocolate melts, and somehow so do my thoughts when you smile. You have that effect — turning normal moments into something sweeter without even realizing it.",
        icon: IconKind::Chocolate,
        z_index: 40,
        is_last: false,
    },
    LoveDay {
        day: "10 Feb",
        title: "Teddy Day",
        image: "teddy_day.jpg",
        message: "There's something incredibly safe about you. Like a place I can rest without pretending to be anything else. You make softness feel okay. You make warmth feel real.",
        icon: IconKind::Teddy,
        z_index: 50,
        is_last: false,
    },
    LoveDay {
        day: "11 Feb",
        title: "Promise Day",
        image: "promise_day.jpg",
        message: "I can't promise perfect days. But I can promise honesty. Effort. Care. I promise to try even when it's hard, and to stay gentle even when things aren't easy.",
        icon: IconKind::Promise,
        z_index: 60,
        is_last: false,
    },
    LoveDay {
        day: "12 Feb",
        title: "Hug Day",
        image: "hug_day.jpg",
        message: "A hug doesn't fix everything, but it makes things feel less heavy. That's what I imagine when I think of you — comfort without questions. Warmth without conditions.",
        icon: IconKind::Hug,
        z_index: 70,
        is_last: false,
    },
    LoveDay {
        day: "13 Feb",
        title: "Kiss Day",
        image: "kiss_day.jpg",
        message: "Some feelings don't need noise. They just exist — quietly, sincerely. That's what this is. A gentle moment. A pause where the world fades a little.",
        icon: IconKind::Kiss,
        z_index: 80,
        is_last: false,
    },
    LoveDay {
        day: "14 Feb",
        title: "Valentine's Day",
        image: "valentine_day.jpg",
        message: "Today isn't about grand gestures. It's about truth. And the truth is simple — I love you, Yashika. Not loudly. Not perfectly. But genuinely. Today, tomorrow, and all the ordinary days in between — I choose you.",
        icon: IconKind::Heart,
        z_index: 90,
        is_last: true,
    },
];

/// A word floating in the "special" cloud, positioned in percent of the
/// cloud box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pill {
    pub text: &'static str,
    pub left_pct: f64,
    pub top_pct: f64,
}

const fn pill(text: &'static str, left_pct: f64, top_pct: f64) -> Pill {
    Pill {
        text,
        left_pct,
        top_pct,
    }
}

pub const PILLS: [Pill; 12] = [
    pill("Beautiful", 8.0, 20.0),
    pill("Kind", 28.0, 12.0),
    pill("Pookie", 48.0, 18.0),
    pill("Funny", 68.0, 10.0),
    pill("Cute", 85.0, 22.0),
    pill("Strong", 15.0, 55.0),
    pill("Genuine", 38.0, 62.0),
    pill("My Favorite", 62.0, 58.0),
    pill("Gorgeous", 82.0, 65.0),
    pill("Special", 25.0, 85.0),
    pill("Amazing", 50.0, 90.0),
    pill("Loved", 75.0, 82.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GalleryItem {
    pub image: &'static str,
    pub caption: &'static str,
    /// Shown rotated by 90 degrees
    pub rotate: bool,
}

pub const GALLERY_ITEMS: [GalleryItem; 4] = [
    GalleryItem {
        image: "gallery_1.png",
        caption: "That smile.",
        rotate: false,
    },
    GalleryItem {
        image: "gallery_2.png",
        caption: "Those eyes.",
        rotate: false,
    },
    GalleryItem {
        image: "gallery_3.png",
        caption: "Quiet Afternoons.",
        rotate: false,
    },
    GalleryItem {
        image: "gallery_4.png",
        caption: "Us being us.",
        rotate: true,
    },
];

/// Ambient heart rising behind the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeartSeed {
    pub size: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub opacity: f64,
}

const fn seed(size: f64, left_pct: f64, top_pct: f64, opacity: f64) -> HeartSeed {
    HeartSeed {
        size,
        left_pct,
        top_pct,
        opacity,
    }
}

pub const FLOATING_HEARTS: [HeartSeed; 8] = [
    seed(24.0, 5.0, 90.0, 0.3),
    seed(16.0, 15.0, 95.0, 0.25),
    seed(20.0, 25.0, 88.0, 0.35),
    seed(28.0, 75.0, 92.0, 0.3),
    seed(18.0, 85.0, 87.0, 0.25),
    seed(22.0, 95.0, 94.0, 0.3),
    seed(14.0, 40.0, 96.0, 0.2),
    seed(26.0, 60.0, 89.0, 0.35),
];

/// Number of sparkles scattered over the background.
pub const SPARKLE_COUNT: usize = 12;

/// Small hearts drifting inside the finale, derived from their index.
pub fn finale_decor_hearts() -> Vec<(HeartSeed, f64)> {
    (0..8)
        .map(|i| {
            let tier = (i % 3) as f64;
            let heart = seed(
                20.0 + tier * 10.0,
                10.0 + i as f64 * 12.0,
                20.0 + tier * 25.0,
                0.15 + tier * 0.05,
            );
            (heart, i as f64 * 0.5)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn love_week_runs_seven_to_fourteen() {
        assert_eq!(LOVE_DAYS.first().map(|d| d.day), Some("7 Feb"));
        assert_eq!(LOVE_DAYS.last().map(|d| d.day), Some("14 Feb"));
        let z: Vec<i32> = LOVE_DAYS.iter().map(|d| d.z_index).collect();
        assert_eq!(z, vec![20, 30, 40, 50, 60, 70, 80, 90]);
        assert_eq!(LOVE_DAYS.iter().filter(|d| d.is_last).count(), 1);
        assert!(LOVE_DAYS[7].is_last);
    }

    #[test]
    fn unknown_icon_falls_back_to_heart() {
        assert_eq!(IconKind::from_selector("rose"), IconKind::Rose);
        assert_eq!(IconKind::from_selector("unicorn"), IconKind::Heart);
        for day in &LOVE_DAYS {
            assert_eq!(IconKind::from_selector(day.icon.selector()), day.icon);
        }
    }

    #[test]
    fn anchors_round_trip_through_ids() {
        let ids: Vec<&str> = Anchor::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids, vec!["hero", "love-week", "special", "gallery", "finale"]);
        assert_eq!("gallery".parse::<Anchor>(), Ok(Anchor::Gallery));
        assert!("nowhere".parse::<Anchor>().is_err());
    }

    #[test]
    fn only_last_gallery_item_rotates() {
        let rotated: Vec<bool> = GALLERY_ITEMS.iter().map(|g| g.rotate).collect();
        assert_eq!(rotated, vec![false, false, false, true]);
    }

    #[test]
    fn finale_decor_cycles_in_threes() {
        let decor = finale_decor_hearts();
        assert_eq!(decor.len(), 8);
        assert_eq!(decor[0].0.size, 20.0);
        assert_eq!(decor[2].0.size, 40.0);
        assert_eq!(decor[3].0.size, 20.0);
        assert_eq!(decor[7].1, 3.5);
    }
}
