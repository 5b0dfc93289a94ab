use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_meta::Title;
use leptos_use::use_window_scroll;

use super::{
    contact::ContactSection,
    dom,
    reveal::{provide_section_visibility, use_scroll_animation, use_section_reveal},
};
use crate::{
    content::{Experience, Project, SocialKind, Testimonial, PORTFOLIO},
    state::{Parallax, ScrollAnimationOptions, SectionId},
};

#[component]
pub fn HomePage() -> impl IntoView {
    provide_section_visibility();

    view! {
        <Title text=PORTFOLIO.profile.headline.clone() />
        <Hero />
        <About />
        <Projects />
        <ExperienceTimeline />
        <ContactSection />
        <Testimonials />
    }
}

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">{title}</h2>
            <div class="w-20 h-1 mx-auto mb-6 rounded bg-indigo-600"></div>
            <p class="max-w-2xl mx-auto text-gray-600 dark:text-gray-300">{subtitle}</p>
        </div>
    }
}

/// Size, position and drift of the decorative hero bubbles.
struct Bubble {
    size: u32,
    top: u32,
    left: u32,
    duration: u32,
}

impl Bubble {
    const fn new(size: u32, top: u32, left: u32, duration: u32) -> Self {
        Self {
            size,
            top,
            left,
            duration,
        }
    }
}

const BUBBLES: [Bubble; 8] = [
    Bubble::new(120, 12, 8, 14),
    Bubble::new(80, 65, 15, 11),
    Bubble::new(160, 30, 78, 18),
    Bubble::new(60, 75, 70, 9),
    Bubble::new(100, 8, 55, 13),
    Bubble::new(140, 55, 40, 16),
    Bubble::new(70, 20, 30, 10),
    Bubble::new(90, 82, 88, 12),
];

#[component]
fn Hero() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    use_section_reveal(SectionId::Home, section);
    let (_, scroll_y) = use_window_scroll();
    let profile = &PORTFOLIO.profile;

    let parallax = move || {
        let height = section
            .get()
            .map(|el| f64::from(el.offset_height()))
            .unwrap_or_default();
        Parallax::at(scroll_y.get(), height)
    };

    let scroll_to = move |ev: MouseEvent, id: SectionId| {
        ev.prevent_default();
        dom::scroll_to_section(id);
    };

    view! {
        <section
            id=SectionId::Home.as_str()
            node_ref=section
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div
                class="absolute inset-0 bg-gradient-to-br from-indigo-500 via-purple-500 to-pink-500 dark:from-indigo-900 dark:via-purple-900 dark:to-gray-900"
                style:transform=move || format!("translateY({}px)", parallax().background_y)
            >
                {BUBBLES
                    .iter()
                    .map(|b| {
                        view! {
                            <span
                                class="bubble absolute rounded-full bg-white/10"
                                style=format!(
                                    "width: {0}px; height: {0}px; top: {1}%; left: {2}%; animation-duration: {3}s;",
                                    b.size,
                                    b.top,
                                    b.left,
                                    b.duration,
                                )
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class="relative z-10 max-w-3xl px-4 text-center text-white"
                style:transform=move || format!("translateY({}px)", parallax().text_y)
            >
                <p class="mb-4 text-lg opacity-90">"Hi, I'm"</p>
                <h1 class="text-5xl md:text-7xl font-extrabold mb-6">{profile.name.clone()}</h1>
                <p class="text-xl md:text-2xl mb-10 opacity-90">{profile.tagline.clone()}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href=SectionId::Projects.href()
                        class="btn btn-light"
                        on:click=move |ev| scroll_to(ev, SectionId::Projects)
                    >
                        "View my work"
                    </a>
                    <a
                        href=SectionId::Contact.href()
                        class="btn btn-outline"
                        on:click=move |ev| scroll_to(ev, SectionId::Contact)
                    >
                        "Contact me"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(SectionId::About, section);
    let profile = &PORTFOLIO.profile;

    view! {
        <section
            id=SectionId::About.as_str()
            node_ref=section
            class="reveal py-24"
            class:revealed=move || revealed.get()
        >
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    title="About Me"
                    subtitle="A developer who cares about the details of every interaction."
                />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <img
                        src=format!("/{}", profile.portrait)
                        alt=profile.name.clone()
                        class="w-72 h-72 mx-auto rounded-2xl object-cover shadow-xl"
                    />
                    <div>
                        {profile
                            .about
                            .iter()
                            .map(|p| {
                                view! {
                                    <p class="mb-4 leading-relaxed text-gray-700 dark:text-gray-300">
                                        {p.clone()}
                                    </p>
                                }
                            })
                            .collect_view()}
                        <h3 class="mt-8 mb-4 text-xl font-semibold">"Skills"</h3>
                        <ul class="grid grid-cols-2 sm:grid-cols-4 gap-3">
                            {PORTFOLIO
                                .skills
                                .iter()
                                .enumerate()
                                .map(|(i, skill)| {
                                    view! {
                                        <li
                                            class="skill px-3 py-2 rounded-lg text-center text-sm font-medium bg-indigo-50 text-indigo-700 dark:bg-indigo-900/40 dark:text-indigo-300"
                                            style:transition-delay=format!("{}ms", i * 50)
                                        >
                                            {skill.clone()}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <a href=profile.resume.clone() download class="btn btn-primary mt-8">
                            "Download résumé"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(SectionId::Projects, section);
    let github = PORTFOLIO
        .profile
        .social(SocialKind::Github)
        .map(|s| s.url.clone());

    view! {
        <section
            id=SectionId::Projects.as_str()
            node_ref=section
            class="reveal py-24 bg-gray-50 dark:bg-gray-900"
            class:revealed=move || revealed.get()
        >
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    title="My Projects"
                    subtitle="A selection of recent work across web and mobile."
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PORTFOLIO
                        .projects
                        .iter()
                        .map(|project| view! { <ProjectCard project=project.clone() /> })
                        .collect_view()}
                </div>
                {github
                    .map(|url| {
                        view! {
                            <div class="text-center mt-12">
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn btn-secondary"
                                >
                                    "See more on GitHub"
                                </a>
                            </div>
                        }
                    })}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let visible = use_scroll_animation(card, ScrollAnimationOptions::default());

    view! {
        <div
            node_ref=card
            class="reveal-card rounded-2xl overflow-hidden shadow-lg bg-white dark:bg-gray-800 hover:-translate-y-2 transition-transform"
            class:revealed=move || visible.get()
        >
            <div class="h-40 bg-gradient-to-br from-indigo-400 to-purple-500"></div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="mb-4 text-gray-600 dark:text-gray-300">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 rounded text-xs bg-gray-100 dark:bg-gray-700">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.url.unwrap_or_else(|| "#".to_string())
                    class="font-medium text-indigo-600 dark:text-indigo-400 hover:underline"
                >
                    "View project →"
                </a>
            </div>
        </div>
    }
}

#[component]
fn ExperienceTimeline() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(SectionId::Experience, section);

    view! {
        <section
            id=SectionId::Experience.as_str()
            node_ref=section
            class="reveal py-24"
            class:revealed=move || revealed.get()
        >
            <div class="max-w-5xl mx-auto px-4">
                <SectionHeading
                    title="Professional Experience"
                    subtitle="Where I've worked and what I built there."
                />
                <div class="relative">
                    <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-0.5 bg-indigo-200 dark:bg-indigo-800"></div>
                    {PORTFOLIO
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            view! { <TimelineItem item=item.clone() right=i % 2 == 1 /> }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-12">
                    <a href=PORTFOLIO.profile.resume.clone() download class="btn btn-primary">
                        "Download full résumé"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(item: Experience, right: bool) -> impl IntoView {
    let entry = NodeRef::<html::Div>::new();
    let visible = use_scroll_animation(entry, ScrollAnimationOptions::default());
    let side = if right { "md:ml-auto md:pl-10" } else { "md:mr-auto md:pr-10" };

    view! {
        <div
            node_ref=entry
            class=format!("reveal-card relative mb-10 pl-12 md:w-1/2 {side}")
            class:revealed=move || visible.get()
        >
            <span class="absolute left-2 md:left-auto top-2 w-4 h-4 rounded-full bg-indigo-600"></span>
            <div class="p-6 rounded-xl shadow bg-white dark:bg-gray-800">
                <span class="inline-block mb-2 px-3 py-1 rounded-full text-xs font-semibold bg-indigo-100 text-indigo-700 dark:bg-indigo-900/40 dark:text-indigo-300">
                    {item.period}
                </span>
                <h3 class="text-lg font-bold">{item.title}</h3>
                <p class="mb-2 text-sm text-gray-500 dark:text-gray-400">{item.company}</p>
                <p class="text-gray-700 dark:text-gray-300">{item.description}</p>
            </div>
        </div>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(SectionId::Testimonials, section);

    view! {
        <section
            id=SectionId::Testimonials.as_str()
            node_ref=section
            class="reveal py-24"
            class:revealed=move || revealed.get()
        >
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    title="Testimonials"
                    subtitle="What clients and colleagues say about working with me."
                />
                <div class="grid md:grid-cols-3 gap-8">
                    {PORTFOLIO
                        .testimonials
                        .iter()
                        .map(|t| view! { <TestimonialCard testimonial=t.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initial = testimonial.initial();

    view! {
        <figure class="p-6 rounded-2xl shadow-lg bg-white dark:bg-gray-800">
            <blockquote class="mb-6 italic text-gray-700 dark:text-gray-300">
                {format!("\u{201c}{}\u{201d}", testimonial.content)}
            </blockquote>
            <figcaption class="flex items-center gap-3">
                <span class="w-12 h-12 flex items-center justify-center rounded-full text-lg font-bold text-white bg-indigo-600">
                    {initial.to_string()}
                </span>
                <span>
                    <span class="block font-semibold">{testimonial.name}</span>
                    <span class="block text-sm text-gray-500 dark:text-gray-400">
                        {testimonial.role}
                    </span>
                </span>
            </figcaption>
        </figure>
    }
}
