use leptos::{ev::AnimationEvent, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{config::CONTENT_READY_DELAY_MS, content::PORTFOLIO, state::LoaderPhase};

const EXIT_ANIMATION: &str = "loader-exit";

/// Full-screen intro overlay. Starts its exit once the content-ready delay
/// elapses and unmounts when the exit animation ends.
#[component]
pub fn Loader(
    phase: ReadSignal<LoaderPhase>,
    set_phase: WriteSignal<LoaderPhase>,
) -> impl IntoView {
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            let mut next = phase.get_untracked();
            if next.content_ready() {
                set_phase.set(next);
                log::debug!("Content ready, revealing page");
            }
        },
        CONTENT_READY_DELAY_MS,
    );
    Effect::new(move |_| start(()));

    let on_animation_end = move |ev: AnimationEvent| {
        if ev.animation_name() != EXIT_ANIMATION {
            return;
        }
        let mut next = phase.get_untracked();
        if next.exit_complete() {
            set_phase.set(next);
            log::debug!("Loader finished");
        }
    };

    view! {
        <Show when=move || phase.get().overlay_mounted()>
            <div
                class="loader-overlay fixed inset-0 z-[100] flex flex-col items-center justify-center bg-gradient-to-br from-indigo-600 to-purple-700"
                class:loader-exit=move || phase.get() == LoaderPhase::Revealing
                on:animationend=on_animation_end
                aria-hidden="true"
            >
                <div class="loader-logo text-7xl font-extrabold text-white">
                    {PORTFOLIO.profile.monogram()}
                </div>
                <div class="mt-6 flex gap-2">
                    <span class="loader-dot w-3 h-3 rounded-full bg-white"></span>
                    <span class="loader-dot w-3 h-3 rounded-full bg-white"></span>
                    <span class="loader-dot w-3 h-3 rounded-full bg-white"></span>
                </div>
            </div>
        </Show>
    }
}
