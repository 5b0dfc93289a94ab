use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener, use_window};

use super::dom;
use crate::state::{CursorState, CursorVariant};

/// Ring and dot that follow the mouse on pointer devices.
///
/// Hover state is resolved by delegation: every `mouseover` checks whether
/// its target sits inside an interactive element, so content added later
/// needs no extra wiring.
#[component]
pub fn AnimatedCursor() -> impl IntoView {
    let cursor = RwSignal::new(CursorState::default());

    let detect_touch = move || {
        let touch = dom::is_touch_device();
        cursor.update(|c| c.set_touch(touch));
    };
    Effect::new(move |_| detect_touch());
    let _ = use_event_listener(use_window(), ev::resize, move |_| detect_touch());
    let enabled = Memo::new(move |_| cursor.with(|c| c.is_enabled()));
    Effect::new(move |_| dom::set_body_class("custom-cursor", enabled.get()));

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        cursor.update(|c| c.move_to(f64::from(e.client_x()), f64::from(e.client_y())));
    });
    let _ = use_event_listener(use_document(), ev::mouseover, move |e| {
        let over = dom::targets_interactive(&e);
        if cursor.with_untracked(|c| (c.variant() == CursorVariant::Hover) != over) {
            cursor.update(|c| c.hover(over));
        }
    });
    let _ = use_event_listener(use_document(), ev::mouseout, move |e| {
        if dom::leaves_document(&e) {
            cursor.update(|c| c.hover(false));
        }
    });

    let ring_style = move || {
        cursor
            .with(|c| c.ring())
            .map(|r| {
                format!(
                    "width: {0}px; height: {0}px; transform: translate3d({1}px, {2}px, 0);",
                    r.size, r.x, r.y
                )
            })
            .unwrap_or_default()
    };
    let dot_style = move || {
        cursor
            .with(|c| c.dot())
            .map(|p| format!("transform: translate3d({}px, {}px, 0);", p.x, p.y))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || enabled.get()>
            <div
                class="cursor-ring pointer-events-none fixed top-0 left-0 z-[90] rounded-full border-2 border-indigo-500 dark:border-indigo-300"
                class:cursor-ring-hover=move || {
                    cursor.with(|c| c.variant() == CursorVariant::Hover)
                }
                style=ring_style
            ></div>
            <div
                class="cursor-dot pointer-events-none fixed top-0 left-0 z-[90] w-2 h-2 rounded-full bg-indigo-600 dark:bg-indigo-300"
                style=dot_style
            ></div>
        </Show>
    }
}
