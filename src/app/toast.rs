use leptos::prelude::*;

use crate::state::{ToastKind, ToastQueue};

#[derive(Clone, Copy)]
pub struct Toaster(RwSignal<ToastQueue>);

impl Toaster {
    /// Shows a notification and schedules its dismissal.
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let queue = self.0;
        let Some(id) = queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(id));
            },
            kind.duration(),
        );
    }
}

pub fn provide_toaster() {
    provide_context(Toaster(RwSignal::new(ToastQueue::default())));
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let Toaster(queue) = use_toaster();

    view! {
        <div
            class="fixed top-20 left-1/2 -translate-x-1/2 z-50 flex flex-col items-center gap-2"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=|toast| {
                    let tone = match toast.kind {
                        ToastKind::Success => "bg-green-600",
                        ToastKind::Error => "bg-red-600",
                    };
                    view! {
                        <div class=format!(
                            "toast px-4 py-3 rounded-lg shadow-lg text-white {tone}",
                        )>{toast.message}</div>
                    }
                }
            />
        </div>
    }
}
