//! Presentation helpers: condition classification and day labels.

use chrono::{Datelike, NaiveDateTime};

/// Static read-only display assets. Each icon has a stable asset name for
/// graphical frontends and a glyph for the terminal renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Cloudy,
    PartlyCloudy,
    Sunny,
}

impl Icon {
    pub fn asset(self) -> &'static str {
        match self {
            Icon::Cloudy => "cloudy.png",
            Icon::PartlyCloudy => "partly-cloudy.png",
            Icon::Sunny => "sunny.png",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Cloudy => "☁",
            Icon::PartlyCloudy => "⛅",
            Icon::Sunny => "☀",
        }
    }
}

/// What the renderer shows for a given condition description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub icon: Icon,
    pub label: &'static str,
}

/// Map a free-text condition description to its display pair by first-match
/// substring test, case-sensitive, "cloud" before "rain". Anything else
/// counts as clear.
pub fn classify_condition(description: &str) -> Classification {
    if description.contains("cloud") {
        Classification { icon: Icon::Cloudy, label: "Partly Cloudy" }
    } else if description.contains("rain") {
        Classification { icon: Icon::PartlyCloudy, label: "Rainy" }
    } else {
        Classification { icon: Icon::Sunny, label: "Clear" }
    }
}

const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Three-letter day-of-week abbreviation for a "YYYY-MM-DD HH:MM:SS"
/// timestamp, Sunday-first. `None` when the text does not parse.
pub fn day_label(timestamp_txt: &str) -> Option<&'static str> {
    let parsed = NaiveDateTime::parse_from_str(timestamp_txt, "%Y-%m-%d %H:%M:%S").ok()?;
    let index = parsed.weekday().num_days_from_sunday() as usize;
    Some(DAY_NAMES[index])
}
