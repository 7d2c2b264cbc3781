//! Toast host and the reactive manager behind it
//!
//! Toasts appear at the top center of the viewport, one at a time. A new toast
//! replaces the visible one; each dismisses itself after its duration or on click.

use leptos::prelude::*;

use crate::core::notify::{Notifier, Toast, ToastItem, ToastStack};

/// Reactive toast state, shared through context
#[derive(Clone, Copy)]
pub struct ToastManager {
    stack: RwSignal<ToastStack>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(ToastStack::new()),
        }
    }

    /// Get the stack signal for the host
    pub fn stack(&self) -> RwSignal<ToastStack> {
        self.stack
    }

    /// Remove a toast. Subscribers are only notified when something was removed;
    /// a toast that was already replaced or dismissed is ignored.
    pub fn dismiss(&self, id: u64) -> bool {
        self.stack
            .try_maybe_update(|stack| {
                let removed = stack.dismiss(id);
                (removed, removed)
            })
            .unwrap_or(false)
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastManager {
    fn notify(&self, toast: Toast) {
        let duration_ms = toast.duration_ms;
        let Some(id) = self.stack.try_update(|stack| stack.push(toast)) else {
            return;
        };

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            let manager = *self;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                manager.dismiss(id);
            });
        }
        #[cfg(feature = "ssr")]
        let _ = (id, duration_ms);
    }
}

/// Create the toast manager and put it in context
pub fn provide_toast_context() -> ToastManager {
    let manager = ToastManager::new();
    provide_context(manager);
    manager
}

/// Get the toast manager from context
pub fn use_toast_context() -> ToastManager {
    expect_context::<ToastManager>()
}

/// Toast container. Place once, at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let manager = use_toast_context();
    let stack = manager.stack();

    view! {
        <div
            class="fixed top-4 left-1/2 -translate-x-1/2 z-50 flex flex-col items-center gap-2 pointer-events-none"
            aria-live="polite"
        >
            <For
                each={move || stack.get().items().cloned().collect::<Vec<_>>()}
                key={|item| item.id}
                children={move |item| view! { <ToastView item=item manager=manager /> }}
            />
        </div>
    }
}

#[component]
fn ToastView(item: ToastItem, manager: ToastManager) -> impl IntoView {
    let id = item.id;
    let kind = item.toast.kind;

    view! {
        <div
            class="toast-enter pointer-events-auto cursor-pointer px-5 py-3 shadow-lg w-max max-w-[90vw]"
            style=kind.style()
            role=kind.aria_role()
            on:click=move |_| {
                manager.dismiss(id);
            }
        >
            {item.toast.message}
        </div>
    }
}
