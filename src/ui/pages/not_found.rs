//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let year = {
        use chrono::Datelike;
        chrono::Utc::now().year()
    };

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found | KoLab" />

        <div class="min-h-screen bg-white flex flex-col items-center justify-center p-4 font-sora">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-[#211E1E] mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-[#211E1E] mb-2">
                    "Page Not Found"
                </h2>

                <p class="text-[#808080] mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-[#6366F1] hover:bg-[#5855EB] text-white font-medium rounded-full transition-colors"
                >
                    "Join the waitlist"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-[#808080]">
                    {format!("© KoLabs {}", year)}
                </p>
            </div>
        </div>
    }
}
