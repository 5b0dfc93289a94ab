use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};

use super::{
    homepage::SectionHeading,
    reveal::use_section_reveal,
    toast::use_toaster,
};
use crate::{
    config::EmailJsConfig,
    content::PORTFOLIO,
    email::{EmailJsRelay, EmailRelay},
    state::{ContactController, ContactField, SectionId, SubmitStatus},
};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 focus:outline-none focus:ring-2 focus:ring-indigo-500";

#[component]
pub fn ContactSection() -> impl IntoView {
    let section = NodeRef::<html::Section>::new();
    let revealed = use_section_reveal(SectionId::Contact, section);
    let profile = &PORTFOLIO.profile;

    let controller = RwSignal::new(ContactController::default());
    let relay = StoredValue::new(EmailJsRelay::new(EmailJsConfig::from_build_env()));
    let toaster = use_toaster();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let params = match controller.try_update(|c| c.begin_submit()) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                log::debug!("Contact form not submitted: {e}");
                return;
            }
            None => return,
        };
        let relay = relay.get_value();
        spawn_local(async move {
            let outcome = relay.send(&params).await;
            if let Some(notice) = controller.try_update(|c| c.complete(outcome)).flatten() {
                toaster.show(notice.kind, notice.message);
            }
        });
    };

    let submitted = move || controller.with(|c| *c.status() == SubmitStatus::Submitted);

    view! {
        <section
            id=SectionId::Contact.as_str()
            node_ref=section
            class="reveal py-24 bg-gray-50 dark:bg-gray-900"
            class:revealed=move || revealed.get()
        >
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    title="Get in Touch"
                    subtitle="Have a project in mind or a question? Send me a message."
                />
                <div class="grid md:grid-cols-3 gap-8">
                    <div class="space-y-4">
                        <InfoCard label="Email" value=profile.email.clone() />
                        <InfoCard label="Phone" value=profile.phone.clone() />
                        <InfoCard label="Location" value=profile.location.clone() />
                    </div>
                    <div class="md:col-span-2 p-8 rounded-2xl shadow-lg bg-white dark:bg-gray-800">
                        <Show
                            when=submitted
                            fallback=move || {
                                view! {
                                    <form class="space-y-4" on:submit=on_submit>
                                        <div class="grid sm:grid-cols-2 gap-4">
                                            <Field
                                                controller
                                                field=ContactField::Name
                                                label="Name"
                                                input_type="text"
                                            />
                                            <Field
                                                controller
                                                field=ContactField::Email
                                                label="Email"
                                                input_type="email"
                                            />
                                        </div>
                                        <Field
                                            controller
                                            field=ContactField::Subject
                                            label="Subject"
                                            input_type="text"
                                        />
                                        <MessageField controller />
                                        {move || {
                                            controller
                                                .with(|c| c.error_message().map(str::to_string))
                                                .map(|msg| {
                                                    view! {
                                                        <p
                                                            class="p-3 rounded-lg bg-red-100 text-red-700 dark:bg-red-900/40 dark:text-red-300"
                                                            role="alert"
                                                        >
                                                            {msg}
                                                        </p>
                                                    }
                                                })
                                        }}
                                        <button
                                            type="submit"
                                            class="btn btn-primary w-full"
                                            disabled=move || controller.with(|c| c.is_submitting())
                                        >
                                            {move || {
                                                if controller.with(|c| c.is_submitting()) {
                                                    "Sending..."
                                                } else {
                                                    "Send message"
                                                }
                                            }}
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <div class="text-center py-12">
                                <h3 class="text-2xl font-bold mb-2">"Message sent!"</h3>
                                <p class="mb-6 text-gray-600 dark:text-gray-300">
                                    "Thanks for reaching out. I'll get back to you as soon as possible."
                                </p>
                                <button
                                    type="button"
                                    class="btn btn-secondary"
                                    on:click=move |_| {
                                        controller.update(|c| {
                                            c.reset();
                                        });
                                    }
                                >
                                    "Send another message"
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="p-5 rounded-xl shadow bg-white dark:bg-gray-800">
            <p class="text-sm font-semibold text-indigo-600 dark:text-indigo-400">{label}</p>
            <p class="mt-1 break-words">{value}</p>
        </div>
    }
}

#[component]
fn Field(
    controller: RwSignal<ContactController>,
    field: ContactField,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block mb-1 text-sm font-medium">{label}</span>
            <input
                id=field.as_str()
                name=field.as_str()
                type=input_type
                required
                class=INPUT_CLASS
                prop:value=move || controller.with(|c| c.form().get(field).to_string())
                on:input=move |ev| {
                    controller.update(|c| c.update_field(field, event_target_value(&ev)));
                }
            />
        </label>
    }
}

#[component]
fn MessageField(controller: RwSignal<ContactController>) -> impl IntoView {
    let field = ContactField::Message;

    view! {
        <label class="block">
            <span class="block mb-1 text-sm font-medium">"Message"</span>
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows="5"
                required
                class=INPUT_CLASS
                prop:value=move || controller.with(|c| c.form().get(field).to_string())
                on:input=move |ev| {
                    controller.update(|c| c.update_field(field, event_target_value(&ev)));
                }
            ></textarea>
        </label>
    }
}
