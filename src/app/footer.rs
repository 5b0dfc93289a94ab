use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::dom;
use crate::{config::build_year, content::PORTFOLIO, state::scroll::shows_scroll_top};

#[component]
pub fn Footer() -> impl IntoView {
    let profile = &PORTFOLIO.profile;

    view! {
        <footer class="bg-gray-900 text-gray-300 py-10">
            <div class="max-w-6xl mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="text-center md:text-left">
                    <p class="text-lg font-bold text-white">{profile.name.clone()}</p>
                    <p class="text-sm">{profile.headline.clone()}</p>
                </div>
                <div class="flex gap-4">
                    {profile
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-indigo-400 transition-colors"
                                    aria-label=social.kind.label()
                                >
                                    {social.kind.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=format!("mailto:{}", profile.email)
                        class="hover:text-indigo-400 transition-colors"
                    >
                        "Email"
                    </a>
                </div>
            </div>
            <p class="mt-8 text-center text-xs text-gray-500">
                {format!("© {} {}. All rights reserved.", build_year(), profile.name)}
            </p>
        </footer>
    }
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let visible = Memo::new(move |_| shows_scroll_top(scroll_y.get()));

    view! {
        <Show when=move || visible.get()>
            <button
                type="button"
                class="fixed bottom-6 right-6 z-40 p-3 rounded-full shadow-lg bg-indigo-600 text-white hover:bg-indigo-700 transition-colors"
                aria-label="Back to top"
                on:click=move |_| dom::scroll_to_top()
            >
                "↑"
            </button>
        </Show>
    }
}
