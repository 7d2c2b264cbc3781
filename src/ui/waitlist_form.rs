//! Waitlist form component
//!
//! Email input plus the "Join us" button. Submitting (button click or Enter in
//! the field) runs the shared [`SubmissionFlow`]; the button stays disabled and
//! shows a spinner while the request is in flight.

use leptos::html;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_client_config;
use crate::core::waitlist::{HttpWaitlistClient, SubmissionFlow, SubmissionStore, SubmitOutcome};
use crate::ui::toast::{ToastManager, use_toast_context};

/// Submission state held in signals owned by the form.
///
/// Once the form is unmounted the signals are disposed, reads report the store
/// as detached and writes are dropped.
#[derive(Clone, Copy)]
pub struct SignalStore {
    email: RwSignal<String>,
    submitting: RwSignal<bool>,
}

impl SignalStore {
    pub fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            submitting: RwSignal::new(false),
        }
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn submitting_signal(&self) -> RwSignal<bool> {
        self.submitting
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStore for SignalStore {
    fn email(&self) -> String {
        self.email.try_get_untracked().unwrap_or_default()
    }

    fn set_email(&self, email: String) {
        self.email.try_set(email);
    }

    fn is_submitting(&self) -> bool {
        self.submitting.try_get_untracked().unwrap_or(false)
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.try_set(submitting);
    }

    fn is_attached(&self) -> bool {
        self.email.try_get_untracked().is_some()
    }
}

type WaitlistFlow = SubmissionFlow<SignalStore, HttpWaitlistClient, ToastManager>;

#[component]
pub fn WaitlistForm(
    /// Ref to the form card, used by the entrance animation
    #[prop(optional)]
    node_ref: NodeRef<html::Div>,
    /// Inline style rendered before hydration
    #[prop(optional, into)]
    style: String,
) -> impl IntoView {
    let config = use_client_config();
    let store = SignalStore::new();
    let email = store.email_signal();
    let submitting = store.submitting_signal();

    let flow: StoredValue<WaitlistFlow> = StoredValue::new(SubmissionFlow::new(
        store,
        HttpWaitlistClient::new(config.waitlist_endpoint()),
        use_toast_context(),
    ));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(flow) = flow.try_get_value() else {
            return;
        };
        spawn_local(async move {
            match flow.submit().await {
                SubmitOutcome::Joined => log!("Joined the waitlist"),
                SubmitOutcome::Invalid(e) => log!("Email rejected: {}", e),
                SubmitOutcome::Detached => log!("Waitlist form closed before the response"),
                SubmitOutcome::Busy | SubmitOutcome::Failed(_) => {}
            }
        });
    };

    view! {
        <div
            node_ref=node_ref
            style=style
            class="px-4 py-6 w-full border-2 bg-white z-10 border-[#E9E9E9] flex flex-col gap-4 rounded-[1.875rem] shadow-lg"
        >
            <h2 class="font-semibold text-[1.125rem] leading-[1.75rem] text-[#211E1E]">
                "Join the waitlist"
            </h2>
            <p class="text-[#808080] leading-[0.625rem]">
                "Sign up to be the first to use KoLab"
            </p>

            <form
                on:submit=on_submit
                novalidate=true
                class="flex items-center bg-[#E6E4FF] rounded-full p-1 mt-2 gap-2 z-20"
            >
                <label for="waitlist-email" class="sr-only">"Email address"</label>
                <input
                    type="email"
                    id="waitlist-email"
                    name="email"
                    autocomplete="email"
                    placeholder="Enter your email address"
                    class="flex-1 min-w-0 bg-transparent px-4 py-2 border-0 outline-none
                           focus:ring-0 focus:outline-none shadow-none"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="bg-[#6366F1] text-white px-6 py-2 rounded-full font-medium
                           hover:bg-[#5855EB] transition-colors min-h-[3rem] min-w-[8rem]
                           flex items-center justify-center
                           disabled:opacity-70 disabled:cursor-not-allowed"
                    disabled=move || submitting.get()
                    aria-busy=move || submitting.get().to_string()
                >
                    <Show
                        when=move || submitting.get()
                        fallback=|| view! { "Join us →" }
                    >
                        <span
                            class="w-5 h-5 border-2 border-white/40 border-t-white rounded-full animate-spin"
                            aria-label="Submitting"
                        ></span>
                    </Show>
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_signal_store_reads_and_writes() {
        let owner = Owner::new();
        owner.with(|| {
            let store = SignalStore::new();
            assert!(store.is_attached());
            assert_eq!(store.email(), "");

            store.set_email("user@example.com".to_string());
            store.set_submitting(true);

            assert_eq!(store.email_signal().get_untracked(), "user@example.com");
            assert!(store.is_submitting());
        });
    }

    #[test]
    fn test_signal_store_detaches_with_owner() {
        let owner = Owner::new();
        let store = owner.with(SignalStore::new);

        owner.cleanup();

        assert!(!store.is_attached());
        assert!(!store.is_submitting());
        store.set_submitting(true);
        store.set_email("ignored@example.com".to_string());
        assert_eq!(store.email(), "");
    }
}
