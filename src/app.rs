mod contact;
mod cursor;
mod dom;
mod footer;
mod header;
mod homepage;
mod loader;
mod reveal;
mod theme_toggle;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content::PORTFOLIO, state::LoaderPhase};
use cursor::AnimatedCursor;
use footer::{Footer, ScrollToTop};
use header::Header;
use homepage::HomePage;
use loader::Loader;
use theme_toggle::{provide_theme, ThemeToggle};
use toast::{provide_toaster, ToastViewport};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <meta name="description" content=PORTFOLIO.profile.tagline.clone() />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();
    provide_toaster();

    let (phase, set_phase) = signal(LoaderPhase::default());
    let name = PORTFOLIO.profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} | {title}") />

        <AnimatedCursor />
        <Loader phase set_phase />
        <Router>
            <div
                class="transition-opacity duration-500"
                class:invisible=move || !phase.get().content_visible()
                class:opacity-0=move || !phase.get().content_visible()
            >
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
                <ScrollToTop />
                <ThemeToggle />
            </div>
        </Router>
        <ToastViewport />
    }
}
