//! Page-level domain types: theme mode, sections, greeting, About panels.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Light or dark presentation, persisted under the `theme` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored value (`"light"` / `"dark"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Indicator shown on the toggle: the mode you would switch to.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

/// Top-level page sections. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::Projects, Self::Contact];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Anchor identifier (`#home`, `#about`, ...).
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Resolves an anchor identifier, with or without the leading `#`.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|section| section.anchor() == anchor)
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Time-of-day greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    pub headline: &'static str,
    pub subtitle: &'static str,
}

impl Greeting {
    /// Picks the greeting for a local hour (0-23).
    #[must_use]
    pub const fn for_hour(hour: u32) -> Self {
        if hour < 12 {
            Self {
                headline: "Good Morning!",
                subtitle: "Ready to start the day?",
            }
        } else if hour < 18 {
            Self {
                headline: "Good Afternoon!",
                subtitle: "Hope you're having a productive day",
            }
        } else {
            Self {
                headline: "Good Evening!",
                subtitle: "Time to unwind and explore",
            }
        }
    }

    /// Greeting for the current local time.
    #[must_use]
    pub fn now() -> Self {
        use chrono::Timelike;
        Self::for_hour(chrono::Local::now().hour())
    }
}

/// A collapsible panel in the About section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutPanel {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT_PANELS: [AboutPanel; 3] = [
    AboutPanel {
        id: "experience",
        title: "Experience",
        body: "Five years building web and mobile products, from early prototypes to production platforms.",
    },
    AboutPanel {
        id: "education",
        title: "Education",
        body: "B.Sc. in Computer Science with a focus on human-computer interaction.",
    },
    AboutPanel {
        id: "skills",
        title: "Skills",
        body: "JavaScript, TypeScript, React, Node.js, Python, UI/UX design, and data visualization.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_boundaries() {
        assert_eq!(Greeting::for_hour(0).headline, "Good Morning!");
        assert_eq!(Greeting::for_hour(11).headline, "Good Morning!");
        assert_eq!(Greeting::for_hour(12).headline, "Good Afternoon!");
        assert_eq!(Greeting::for_hour(17).headline, "Good Afternoon!");
        assert_eq!(Greeting::for_hour(18).headline, "Good Evening!");
        assert_eq!(Greeting::for_hour(23).subtitle, "Time to unwind and explore");
    }

    #[test]
    fn theme_mode_round_trips_through_its_stored_form() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.as_str().parse::<ThemeMode>(), Ok(mode));
            assert_eq!(mode.toggled().toggled(), mode);
        }
        assert_eq!(ThemeMode::Light.icon(), "🌙");
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn sections_resolve_anchors_and_wrap() {
        assert_eq!(Section::from_anchor("#projects"), Some(Section::Projects));
        assert_eq!(Section::from_anchor("blog"), None);
        assert_eq!(Section::Contact.next(), Section::Home);
        assert_eq!(Section::Home.previous(), Section::Contact);
    }
}
