/// Intro overlay sequence: `Loading -> Revealing -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderPhase {
    #[default]
    Loading,
    Revealing,
    Done,
}

impl LoaderPhase {
    /// The page content is mounted all along but stays invisible until done.
    pub fn content_visible(self) -> bool {
        self == Self::Done
    }

    pub fn overlay_mounted(self) -> bool {
        self != Self::Done
    }

    /// Called when the content-ready delay elapses.
    pub fn content_ready(&mut self) -> bool {
        if *self == Self::Loading {
            *self = Self::Revealing;
            true
        } else {
            false
        }
    }

    /// Called when the overlay exit animation ends. Returns true exactly
    /// once, on the transition into `Done`.
    pub fn exit_complete(&mut self) -> bool {
        if *self == Self::Revealing {
            *self = Self::Done;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sequence_reports_done_once() {
        let mut phase = LoaderPhase::default();
        assert!(!phase.content_visible());
        assert!(phase.content_ready());
        assert_eq!(phase, LoaderPhase::Revealing);
        assert!(phase.exit_complete());
        assert_eq!(phase, LoaderPhase::Done);
        assert!(phase.content_visible());
        assert!(!phase.overlay_mounted());

        assert!(!phase.exit_complete());
        assert!(!phase.content_ready());
        assert_eq!(phase, LoaderPhase::Done);
    }

    #[test]
    fn test_early_animation_end_ignored() {
        let mut phase = LoaderPhase::Loading;
        assert!(!phase.exit_complete());
        assert_eq!(phase, LoaderPhase::Loading);
        assert!(phase.content_ready());
        assert!(!phase.content_ready());
        assert_eq!(phase, LoaderPhase::Revealing);
    }
}
