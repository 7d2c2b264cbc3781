use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Image name under `/images`, without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-4 h-4")]
    class: &'static str,
    /// Accessible label; empty marks the image as decorative
    #[prop(default = "")]
    alt: &'static str,
) -> impl IntoView {
    let icon_path = format!("/images/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=alt
            aria-hidden=alt.is_empty().then_some("true")
            draggable="false"
        />
    }
}

/// Images shipped in `public/images`
pub mod icons {
    pub const X: &str = "Xicon";
    pub const LINKEDIN: &str = "linkedin";
    pub const HAND: &str = "hand";
    pub const DESKTOP: &str = "desktop";
    pub const LAPTOP: &str = "laptop";
    pub const GRID: &str = "grid";
}

#[cfg(test)]
mod tests {
    use super::icons;
    use std::path::Path;

    #[test]
    fn test_icons_are_shipped() {
        let images = Path::new(env!("CARGO_MANIFEST_DIR")).join("public/images");
        for name in [
            icons::X,
            icons::LINKEDIN,
            icons::HAND,
            icons::DESKTOP,
            icons::LAPTOP,
            icons::GRID,
        ] {
            let file = images.join(format!("{}.svg", name));
            assert!(file.is_file(), "missing {}", file.display());
        }
    }
}
