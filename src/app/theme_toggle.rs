use leptos::prelude::*;
use leptos_use::use_preferred_dark;

use crate::state::ThemeManager;

#[cfg(feature = "hydrate")]
use crate::state::theme::{DocumentSurface, LocalPreferenceStore};
#[cfg(not(feature = "hydrate"))]
use crate::state::theme::{DetachedSurface, MemoryStore};

#[cfg(feature = "hydrate")]
type SiteTheme = ThemeManager<LocalPreferenceStore, DocumentSurface>;
#[cfg(not(feature = "hydrate"))]
type SiteTheme = ThemeManager<MemoryStore, DetachedSurface>;

/// Handle to the page-wide theme manager.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    is_dark: ReadSignal<bool>,
    manager: StoredValue<Option<SiteTheme>>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    pub fn toggle(&self) {
        self.manager.update_value(|manager| {
            if let Some(manager) = manager {
                manager.toggle();
            }
        });
    }
}

/// Creates the theme manager once the page is running in a browser and keeps
/// it in sync with the OS color-scheme preference.
pub fn provide_theme() {
    let prefers_dark = use_preferred_dark();
    let (is_dark, set_is_dark) = signal(false);
    let manager = StoredValue::new(None::<SiteTheme>);

    Effect::new(move |_| {
        let mut theme = SiteTheme::init(
            Default::default(),
            Default::default(),
            prefers_dark.get_untracked(),
        );
        set_is_dark.set(theme.current().is_dark());
        log::debug!(
            "Theme initialized: {} (following system: {})",
            theme.current().color_scheme(),
            theme.is_following_system()
        );
        let subscription = theme.subscribe(move |t| set_is_dark.set(t.is_dark()));
        manager.set_value(Some(theme));

        on_cleanup(move || {
            manager.update_value(|manager| {
                if let Some(manager) = manager {
                    manager.unsubscribe(subscription);
                }
            });
        });
    });

    Effect::watch(
        move || prefers_dark.get(),
        move |dark, _, _| {
            manager.update_value(|manager| {
                if let Some(manager) = manager {
                    if manager.system_changed(*dark) {
                        log::debug!("Theme follows system preference: dark={dark}");
                    }
                }
            });
        },
        false,
    );

    provide_context(ThemeContext { is_dark, manager });
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class="fixed bottom-6 left-6 z-40 p-3 rounded-full shadow-lg bg-white text-gray-800 dark:bg-gray-800 dark:text-yellow-300 transition-transform duration-500 hover:scale-110"
            class:rotate-180=move || theme.is_dark()
            aria-label=move || {
                if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            on:click=move |_| theme.toggle()
        >
            <span class="block w-6 h-6 text-xl leading-6">
                {move || if theme.is_dark() { "☀" } else { "☾" }}
            </span>
        </button>
    }
}
