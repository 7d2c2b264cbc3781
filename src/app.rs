use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::{BASE_URL_META, ClientConfig, MODE_META};
use crate::ui::pages::{NotFoundPage, WaitlistPage};
use crate::ui::{ToastHost, provide_toast_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let client = use_client_config();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                // read back by `hydrate()` before mounting
                <meta name=MODE_META content=client.mode.to_string()/>
                <meta name=BASE_URL_META content=client.waitlist_base_url/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_toast_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/kolab-waitlist.css"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=WaitlistPage/>
            </Routes>
        </Router>

        <ToastHost/>
    }
}

/// Configuration the page was rendered with. Falls back to defaults when
/// nothing was provided.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>().unwrap_or_default()
}
