use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;

use super::dom;
use crate::{
    content::PORTFOLIO,
    state::{scroll::is_compact_header, ActiveSection, SectionId},
};

#[component]
pub fn Header() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let active = RwSignal::new(ActiveSection::default());
    let (menu_open, set_menu_open) = signal(false);

    Effect::new(move |_| {
        let y = scroll_y.get();
        let bounds = dom::section_bounds();
        let mut next = active.get_untracked();
        if next.update(&bounds, y) {
            active.set(next);
        }
    });

    let compact = Memo::new(move |_| is_compact_header(scroll_y.get()));

    let go_to = move |ev: MouseEvent, id: SectionId| {
        ev.prevent_default();
        if !dom::scroll_to_section(id) {
            log::debug!("No section to scroll to: {id}");
        }
        set_menu_open.set(false);
    };

    let nav_link = move |id: SectionId, mobile: bool| {
        let base = if mobile {
            "block px-4 py-3 rounded-md text-base font-medium transition-colors"
        } else {
            "px-3 py-2 rounded-md text-sm font-medium transition-colors"
        };
        view! {
            <a
                href=id.href()
                class=move || {
                    if active.get().get() == id {
                        format!("{base} text-indigo-600 dark:text-indigo-400")
                    } else {
                        format!(
                            "{base} text-gray-700 hover:text-indigo-600 dark:text-gray-300 dark:hover:text-indigo-400",
                        )
                    }
                }
                aria-current=move || (active.get().get() == id).then_some("true")
                on:click=move |ev| go_to(ev, id)
            >
                {id.label()}
            </a>
        }
    };

    view! {
        <header class=move || {
            if compact.get() {
                "fixed top-0 inset-x-0 z-50 py-2 shadow-md bg-white/90 dark:bg-gray-900/90 backdrop-blur transition-all duration-300"
            } else {
                "fixed top-0 inset-x-0 z-50 py-4 bg-transparent transition-all duration-300"
            }
        }>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between">
                <a
                    href=SectionId::Home.href()
                    class="text-xl font-bold text-indigo-600 dark:text-indigo-400"
                    on:click=move |ev| go_to(ev, SectionId::Home)
                >
                    {PORTFOLIO.profile.name.clone()}
                </a>
                <nav class="hidden md:flex gap-2" aria-label="Main">
                    {SectionId::ALL.into_iter().map(|id| nav_link(id, false)).collect_view()}
                </nav>
                <button
                    type="button"
                    class="md:hidden p-2 rounded-md text-gray-700 dark:text-gray-300"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav
                    class="md:hidden mt-2 px-4 pb-4 bg-white dark:bg-gray-900 shadow-lg"
                    aria-label="Mobile"
                >
                    {SectionId::ALL.into_iter().map(|id| nav_link(id, true)).collect_view()}
                </nav>
            </Show>
        </header>
    }
}
