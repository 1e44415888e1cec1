//! Transient notifications.
//!
//! A small toast store held in Context plus the [`Toaster`] overlay that
//! renders it. Toasts dismiss themselves after a few seconds.

use std::time::Duration;

use leptos::prelude::*;

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastStore {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastStore {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            TOAST_TTL,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn provide_toasts() -> ToastStore {
    let store = ToastStore::new();
    provide_context(store);
    store
}

pub fn use_toasts() -> ToastStore {
    use_context::<ToastStore>().expect("ToastStore should be provided")
}

/// Fixed overlay rendering the active toasts.
#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_toasts();

    view! {
        <div class="fixed top-4 left-1/2 -translate-x-1/2 z-[70] flex flex-col items-center gap-2">
            <For
                each=move || store.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => {
                            "flex items-center gap-2 rounded-lg bg-white border border-green-200 text-green-700 shadow-lg px-4 py-2 text-sm"
                        }
                        ToastKind::Error => {
                            "flex items-center gap-2 rounded-lg bg-white border border-red-200 text-[#E60023] shadow-lg px-4 py-2 text-sm"
                        }
                        ToastKind::Info => {
                            "flex items-center gap-2 rounded-lg bg-white border border-gray-200 text-gray-700 shadow-lg px-4 py-2 text-sm"
                        }
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| store.dismiss(id)>
                            <span class="font-medium">{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
