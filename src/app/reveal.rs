use leptos::{html, prelude::*};
use leptos_use::{
    core::IntoElementsMaybeSignal, use_intersection_observer_with_options,
    UseIntersectionObserverOptions,
};

use crate::state::{
    section::ObserverAction, ScrollAnimationOptions, SectionId, SectionVisibility,
    VisibilityTracker,
};

/// Tracks whether `target` has scrolled into view.
///
/// With `trigger_once` the observer disconnects after the first hit and the
/// signal stays true; otherwise it follows the element in and out.
pub fn use_scroll_animation<El, M>(target: El, options: ScrollAnimationOptions) -> Signal<bool>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    let (visible, set_visible) = signal(false);
    let mut tracker = VisibilityTracker::new(options.trigger_once);

    use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            for entry in entries {
                let action = tracker.observe(entry.is_intersecting());
                set_visible.set(tracker.is_visible());
                if action == ObserverAction::Disconnect {
                    observer.disconnect();
                    break;
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![options.threshold])
            .root_margin(options.root_margin),
    );

    visible.into()
}

pub fn provide_section_visibility() -> RwSignal<SectionVisibility> {
    let visibility = RwSignal::new(SectionVisibility::default());
    provide_context(visibility);
    visibility
}

/// Observes a page section and latches it into the shared visibility set the
/// first time it is 15% in view. Returns whether the section is revealed.
pub fn use_section_reveal(id: SectionId, section: NodeRef<html::Section>) -> Signal<bool> {
    let visibility = expect_context::<RwSignal<SectionVisibility>>();
    let in_view = use_scroll_animation(section, ScrollAnimationOptions::section_reveal());

    Effect::new(move |_| {
        if in_view.get() && !visibility.with_untracked(|v| v.is_visible(id)) {
            visibility.update(|v| {
                v.reveal(id);
            });
            log::debug!("Section revealed: {id}");
        }
    });

    Signal::derive(move || visibility.with(|v| v.is_visible(id)))
}
