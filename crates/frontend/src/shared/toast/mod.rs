use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone)]
struct ToastEntry {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Centralized transient notifications ("Deleted", "Export failed: ...").
///
/// Provided once in the app root; every toast auto-dismisses after a few
/// seconds and can be dismissed by click. Errors never block the page that
/// raised them.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
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
        if kind == ToastKind::Error {
            log::warn!("{}", message);
        }

        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| {
            t.push(ToastEntry { id, kind, message });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| {
            t.retain(|e| e.id != id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast stack. Must be mounted exactly once, in the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts.get()
                key=|entry| entry.id
                children=move |entry: ToastEntry| {
                    let id = entry.id;
                    let kind_class = match entry.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                        ToastKind::Info => "toast toast--info",
                    };
                    view! {
                        <div class=kind_class on:click=move |_| svc.dismiss(id)>
                            <span class="toast__message">{entry.message.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
