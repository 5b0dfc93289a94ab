use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::config::SECTION_REVEAL_THRESHOLD;

/// Page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Experience,
    Contact,
    Testimonials,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Home,
        Self::About,
        Self::Projects,
        Self::Experience,
        Self::Contact,
        Self::Testimonials,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
            Self::Testimonials => "testimonials",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
            Self::Testimonials => "Testimonials",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Which sections have been revealed. Entries only ever go from false to true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    revealed: [bool; SectionId::ALL.len()],
}

impl SectionVisibility {
    /// Returns true the first time a section is revealed.
    pub fn reveal(&mut self, id: SectionId) -> bool {
        let slot = &mut self.revealed[id.index()];
        let first = !*slot;
        *slot = true;
        first
    }

    pub fn is_visible(&self, id: SectionId) -> bool {
        self.revealed[id.index()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimationOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub trigger_once: bool,
}

impl Default for ScrollAnimationOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px".to_string(),
            trigger_once: true,
        }
    }
}

impl ScrollAnimationOptions {
    /// Options used for whole-section reveals.
    pub fn section_reveal() -> Self {
        Self {
            threshold: SECTION_REVEAL_THRESHOLD,
            ..Self::default()
        }
    }

    pub fn continuous(mut self) -> Self {
        self.trigger_once = false;
        self
    }
}

/// What the observer should do after an intersection report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverAction {
    KeepObserving,
    Disconnect,
}

/// Visibility state behind a single observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityTracker {
    trigger_once: bool,
    visible: bool,
    done: bool,
}

impl VisibilityTracker {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            trigger_once,
            visible: false,
            done: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, is_intersecting: bool) -> ObserverAction {
        if self.done {
            return ObserverAction::Disconnect;
        }
        if is_intersecting {
            self.visible = true;
            if self.trigger_once {
                self.done = true;
                return ObserverAction::Disconnect;
            }
        } else if !self.trigger_once {
            self.visible = false;
        }
        ObserverAction::KeepObserving
    }
}
