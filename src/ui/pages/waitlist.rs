//! Waitlist page component
//!
//! The single marketing page:
//! - SEO meta tags
//! - Decorative grid and illustrations that slide in on load
//! - Hero copy, the waitlist form and social links, revealed in sequence
//! - Footer with the current year

use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::animation::EntranceTarget;
use crate::ui::animation::{EntranceRefs, use_entrance_animation};
use crate::ui::icon::{Icon, icons};
use crate::ui::waitlist_form::WaitlistForm;

const SITE_URL: &str = "https://kollabs-waitlist.vercel.app/";
const SHARE_IMAGE: &str = "https://kollabs-waitlist.vercel.app/images/logo.png";
const DESCRIPTION: &str = "Where Creative Ideas Find Their Team. Connect with writers, artists, \
     developers, and designers to bring your ideas to life — no funding, no barriers, just collaboration.";
const FAVICON_32: &str = "/favicon-32x32.png";
const FAVICON_16: &str = "/favicon-16x16.png";
const APPLE_TOUCH_ICON: &str = "/apple-touch-icon.png";
const MANIFEST: &str = "/site.webmanifest";
const SHORT_DESCRIPTION: &str = "Where Creative Ideas Find Their Team. Connect with writers, \
     artists, developers, and designers to bring your ideas to life.";

/// Waitlist landing page with the entrance sequence
#[component]
pub fn WaitlistPage() -> impl IntoView {
    let refs = EntranceRefs::new();
    use_entrance_animation(refs);

    let initial = |target: EntranceTarget| target.initial_css();
    let year = chrono::Utc::now().year();

    view! {
        <SeoMeta />

        <div
            node_ref=refs.root
            style=initial(EntranceTarget::Root)
            class="min-h-screen h-screen max-h-screen overflow-hidden bg-white flex items-center justify-center relative"
        >
            // Illustrations
            <div class="absolute inset-0 flex justify-center pointer-events-none" aria-hidden="true">
                <div class="relative w-full max-w-[90rem]">
                    <div
                        node_ref=refs.left
                        style=initial(EntranceTarget::LeftIllustration)
                        class="absolute left-0 top-18 w-[20rem] h-[20rem]"
                    >
                        <Icon name=icons::HAND class="w-full h-full" />
                    </div>
                    <div
                        node_ref=refs.right
                        style=initial(EntranceTarget::RightIllustration)
                        class="absolute right-0 top-18 w-[20rem] h-[20rem]"
                    >
                        <Icon name=icons::DESKTOP class="w-full h-full" />
                    </div>
                    <div
                        node_ref=refs.bottom
                        style=initial(EntranceTarget::BottomIllustration)
                        class="absolute right-0 bottom-0 w-[20rem] h-[20rem]"
                    >
                        <Icon name=icons::LAPTOP class="w-full h-full" />
                    </div>
                </div>
            </div>

            // Background grid
            <div class="absolute left-0 top-0 w-full h-screen pointer-events-none" aria-hidden="true">
                <Icon name=icons::GRID class="mx-auto h-10/12 w-full object-cover" />
            </div>

            <div class="w-full absolute top-2 flex items-center justify-center text-[#211E1E] font-semibold text-[0.875rem] font-sora">
                "Logo"
            </div>

            // Hero
            <main class="flex flex-col gap-6 w-max h-max items-center px-4">
                <div class="flex flex-col w-full items-center gap-2">
                    <h1
                        node_ref=refs.title
                        style=initial(EntranceTarget::Title)
                        class="font-sora font-bold text-[3rem] text-center"
                    >
                        "Where Creative Ideas"
                    </h1>
                    <p
                        node_ref=refs.subtitle
                        style=initial(EntranceTarget::Subtitle)
                        class="font-grand-hotel text-[3rem] text-[#FF8D28] leading-[1.25rem]"
                    >
                        "Find Their Team."
                    </p>
                </div>

                <p
                    node_ref=refs.description
                    style=initial(EntranceTarget::Description)
                    class="text-[#808080] max-w-[30rem] mx-auto text-center"
                >
                    "Connect with writers, artists, developers, and designers to bring your ideas to life — no funding, no barriers, just collaboration."
                </p>

                <WaitlistForm node_ref=refs.form style=initial(EntranceTarget::Form) />

                <div
                    node_ref=refs.social
                    style=initial(EntranceTarget::Social)
                    class="flex gap-4 items-center"
                >
                    <p class="font-sora font-light">"Follow us"</p>
                    <Icon name=icons::X alt="X" />
                    <Icon name=icons::LINKEDIN alt="LinkedIn" />
                </div>
            </main>

            <footer class="w-full absolute bottom-2 flex items-center justify-center text-[#211E1E] font-semibold text-[0.875rem] font-sora">
                {format!("© KoLabs {}", year)}
            </footer>
        </div>
    }
}

/// Title, description, social cards and icons
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Konecticus | Join the Waitlist" />

        <Meta name="description" content=DESCRIPTION />
        <Meta name="keywords" content="collaboration, creative, team, writers, artists, developers, designers, startup, ideas" />
        <Meta name="author" content="Koneticus" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=SITE_URL />
        <Meta property="og:site_name" content="Konecticus" />
        <Meta property="og:title" content="Kolabs | Join the Waitlist" />
        <Meta property="og:description" content=SHORT_DESCRIPTION />
        <Meta property="og:image" content=SHARE_IMAGE />
        <Meta property="og:image:width" content="1200" />
        <Meta property="og:image:height" content="630" />
        <Meta property="og:image:alt" content="Konecticus logo with the text 'Where Creative Ideas Find Their Team'" />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content="Konecticus | Join the Waitlist" />
        <Meta name="twitter:description" content=SHORT_DESCRIPTION />
        <Meta name="twitter:image" content=SHARE_IMAGE />

        // Icons
        <Link rel="icon" type_="image/png" sizes="32x32" href=FAVICON_32 />
        <Link rel="icon" type_="image/png" sizes="16x16" href=FAVICON_16 />
        <Link rel="apple-touch-icon" href=APPLE_TOUCH_ICON />
        <Link rel="manifest" href=MANIFEST />
        <Link rel="canonical" href=SITE_URL />
    }
}
