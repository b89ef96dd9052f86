//! Toast notifications.
//!
//! Toast state lives in a context provided at the app root; any component
//! can push a notification and the [`ToastStack`] renders them in a fixed
//! corner with auto-dismiss.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::delays::TOAST_DISMISS_MS;

stylance::import_crate_style!(css, "src/components/toast.module.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

/// Toast state. `Copy` because all fields are signals.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(ToastVariant::Success, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(ToastVariant::Error, title, message);
    }

    fn push(&self, variant: ToastVariant, title: &str, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                title: title.to_string(),
                message: message.to_string(),
                variant,
            })
        });

        // Auto-dismiss after a fixed delay; the app-lifetime signal outlives
        // whichever page pushed the toast
        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            items.update(|items| items.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-position stack rendering the active toasts.
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let toasts = ctx.toasts;

    view! {
        <div class=css::stack aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.variant {
                        ToastVariant::Success => format!("{} {}", css::toast, css::success),
                        ToastVariant::Error => format!("{} {}", css::toast, css::error),
                    };
                    let icon = match toast.variant {
                        ToastVariant::Success => ic::CHECK_CIRCLE,
                        ToastVariant::Error => ic::WARNING,
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <span class=css::icon><Icon icon=icon /></span>
                            <div class=css::body>
                                <p class=css::title>{toast.title.clone()}</p>
                                <p class=css::message>{toast.message.clone()}</p>
                            </div>
                            <button
                                class=css::closeButton
                                on:click=move |_| toasts.dismiss(id)
                                aria-label="Dismiss notification"
                            >
                                <Icon icon=ic::CLOSE />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
