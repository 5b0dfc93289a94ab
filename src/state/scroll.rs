use crate::config::{
    ACTIVE_SECTION_PROBE, COMPACT_HEADER_THRESHOLD, HEADER_OFFSET, SCROLL_TOP_THRESHOLD,
};

use super::section::SectionId;

/// Vertical extent of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section under the probe line `scroll_y + 200`.
///
/// Bounds are given in document order; when several contain the probe the
/// last one wins.
pub fn active_section(bounds: &[SectionBounds], scroll_y: f64) -> Option<SectionId> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE;
    bounds
        .iter()
        .filter(|b| b.contains(probe))
        .last()
        .map(|b| b.id)
}

/// Tracks the highlighted nav entry across scroll events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSection(SectionId);

impl Default for ActiveSection {
    fn default() -> Self {
        Self(SectionId::Home)
    }
}

impl ActiveSection {
    pub fn get(self) -> SectionId {
        self.0
    }

    /// Returns true if the active section changed. Positions that match no
    /// section keep the previous one.
    pub fn update(&mut self, bounds: &[SectionBounds], scroll_y: f64) -> bool {
        match active_section(bounds, scroll_y) {
            Some(id) if id != self.0 => {
                self.0 = id;
                true
            }
            _ => false,
        }
    }
}

pub fn is_compact_header(scroll_y: f64) -> bool {
    scroll_y > COMPACT_HEADER_THRESHOLD
}

pub fn shows_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Scroll position that puts a section just below the fixed header.
pub fn scroll_target(section_top: f64) -> f64 {
    section_top - HEADER_OFFSET
}

/// Translations applied to the hero while it scrolls out of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub background_y: f64,
    pub text_y: f64,
}

const PARALLAX_BACKGROUND_RANGE: f64 = 200.0;
const PARALLAX_TEXT_RANGE: f64 = -100.0;

impl Parallax {
    pub fn at(scroll_y: f64, hero_height: f64) -> Self {
        let progress = if hero_height > 0.0 {
            (scroll_y / hero_height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            background_y: PARALLAX_BACKGROUND_RANGE * progress,
            text_y: PARALLAX_TEXT_RANGE * progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: SectionId, top: f64, height: f64) -> SectionBounds {
        SectionBounds { id, top, height }
    }

    fn layout() -> Vec<SectionBounds> {
        vec![
            section(SectionId::Home, 0.0, 800.0),
            section(SectionId::About, 800.0, 600.0),
            section(SectionId::Projects, 1400.0, 700.0),
        ]
    }

    fn shift(background_y: f64, text_y: f64) -> Parallax {
        Parallax {
            background_y,
            text_y,
        }
    }

    #[test]
    fn test_active_section_uses_probe_offset() {
        let bounds = layout();
        assert_eq!(active_section(&bounds, 0.0), Some(SectionId::Home));
        assert_eq!(active_section(&bounds, 599.0), Some(SectionId::Home));
        assert_eq!(active_section(&bounds, 600.0), Some(SectionId::About));
        assert_eq!(active_section(&bounds, 1200.0), Some(SectionId::Projects));
        assert_eq!(active_section(&bounds, 1900.0), None);
    }

    #[test]
    fn test_overlapping_sections_last_wins() {
        let bounds = vec![
            section(SectionId::Experience, 0.0, 1000.0),
            section(SectionId::Contact, 100.0, 500.0),
            section(SectionId::About, 900.0, 500.0),
        ];
        assert_eq!(active_section(&bounds, 100.0), Some(SectionId::Contact));
        assert_eq!(active_section(&bounds, 750.0), Some(SectionId::About));
        assert_eq!(active_section(&bounds, 500.0), Some(SectionId::Experience));
    }

    #[test]
    fn test_active_section_keeps_previous_on_gap() {
        let bounds = layout();
        let mut active = ActiveSection::default();
        assert!(!active.update(&bounds, 0.0));
        assert!(active.update(&bounds, 1300.0));
        assert_eq!(active.get(), SectionId::Projects);
        assert!(!active.update(&bounds, 5000.0));
        assert_eq!(active.get(), SectionId::Projects);
    }

    #[test]
    fn test_header_thresholds() {
        assert!(!is_compact_header(50.0));
        assert!(is_compact_header(50.5));
        assert!(!shows_scroll_top(300.0));
        assert!(shows_scroll_top(301.0));
        assert_eq!(scroll_target(1400.0), 1320.0);
    }

    #[test]
    fn test_parallax_clamps_progress() {
        assert_eq!(Parallax::at(0.0, 800.0), shift(0.0, 0.0));
        assert_eq!(Parallax::at(400.0, 800.0), shift(100.0, -50.0));
        assert_eq!(Parallax::at(5000.0, 800.0), shift(200.0, -100.0));
        assert_eq!(Parallax::at(100.0, 0.0), shift(0.0, 0.0));
    }
}
