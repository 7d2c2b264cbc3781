//! Browser side of the entrance animation
//!
//! Binds the hero's element refs to a [`Playback`] driven by
//! `requestAnimationFrame`. Server rendering only emits the hidden initial
//! styles; playback starts once the page hydrates.

use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::animation::{
    ElementStyle, EntranceTarget, FrameCallback, FrameId, FrameScheduler, Playback, StyleSink,
    WillChange, entrance_timeline,
};

/// Element refs for every entrance target
#[derive(Clone, Copy)]
pub struct EntranceRefs {
    pub root: NodeRef<html::Div>,
    pub left: NodeRef<html::Div>,
    pub right: NodeRef<html::Div>,
    pub bottom: NodeRef<html::Div>,
    pub title: NodeRef<html::H1>,
    pub subtitle: NodeRef<html::P>,
    pub description: NodeRef<html::P>,
    pub form: NodeRef<html::Div>,
    pub social: NodeRef<html::Div>,
}

impl EntranceRefs {
    pub fn new() -> Self {
        Self {
            root: NodeRef::new(),
            left: NodeRef::new(),
            right: NodeRef::new(),
            bottom: NodeRef::new(),
            title: NodeRef::new(),
            subtitle: NodeRef::new(),
            description: NodeRef::new(),
            form: NodeRef::new(),
            social: NodeRef::new(),
        }
    }
}

impl Default for EntranceRefs {
    fn default() -> Self {
        Self::new()
    }
}

/// `requestAnimationFrame` scheduler
#[cfg(not(feature = "ssr"))]
#[derive(Clone, Copy, Default)]
pub struct RafScheduler;

#[cfg(not(feature = "ssr"))]
impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Option<FrameId> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let window = web_sys::window()?;
        let closure = Closure::once_into_js(move |now: f64| callback(now));
        window
            .request_animation_frame(closure.unchecked_ref())
            .ok()
            .map(FrameId)
    }

    fn cancel_frame(&self, id: FrameId) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id.0);
        }
    }
}

/// Writes styles straight into the elements' inline style
#[cfg(not(feature = "ssr"))]
pub struct DomSink {
    elements: Vec<(EntranceTarget, web_sys::HtmlElement)>,
}

#[cfg(not(feature = "ssr"))]
impl DomSink {
    /// Collect the mounted elements. `None` until the root is mounted;
    /// other missing elements are skipped.
    fn resolve(refs: EntranceRefs) -> Option<Self> {
        use web_sys::HtmlElement;

        let root = refs.root.get()?;
        let elements = [
            (EntranceTarget::Root, Some(HtmlElement::from(root))),
            (EntranceTarget::LeftIllustration, refs.left.get().map(HtmlElement::from)),
            (EntranceTarget::RightIllustration, refs.right.get().map(HtmlElement::from)),
            (EntranceTarget::BottomIllustration, refs.bottom.get().map(HtmlElement::from)),
            (EntranceTarget::Title, refs.title.get().map(HtmlElement::from)),
            (EntranceTarget::Subtitle, refs.subtitle.get().map(HtmlElement::from)),
            (EntranceTarget::Description, refs.description.get().map(HtmlElement::from)),
            (EntranceTarget::Form, refs.form.get().map(HtmlElement::from)),
            (EntranceTarget::Social, refs.social.get().map(HtmlElement::from)),
        ]
        .into_iter()
        .filter_map(|(target, el)| el.map(|el| (target, el)))
        .collect();

        Some(Self { elements })
    }
}

#[cfg(not(feature = "ssr"))]
impl StyleSink<EntranceTarget> for DomSink {
    fn apply(&self, target: EntranceTarget, style: &ElementStyle, hint: WillChange) {
        let Some((_, element)) = self.elements.iter().find(|(t, _)| *t == target) else {
            return;
        };
        let css = element.style();
        let _ = css.set_property("opacity", &style.opacity_css());
        let _ = css.set_property("transform", &style.transform_css());
        let _ = css.set_property("will-change", hint.as_css());
    }
}

/// Play the entrance timeline once the refs are mounted.
///
/// Runs at most once per mount; unmounting cancels the pending frame.
pub fn use_entrance_animation(refs: EntranceRefs) {
    #[cfg(not(feature = "ssr"))]
    {
        let playback = StoredValue::new_local(
            None::<Playback<EntranceTarget, RafScheduler, DomSink>>,
        );

        Effect::new(move || {
            let Some(sink) = DomSink::resolve(refs) else {
                return;
            };
            if playback.with_value(|p| p.is_some()) {
                return;
            }

            let entrance = Playback::new(entrance_timeline(), RafScheduler, sink);
            if entrance.play() {
                leptos::logging::log!("Entrance animation started");
            }
            playback.set_value(Some(entrance));
        });

        on_cleanup(move || {
            playback.try_update_value(|p| {
                if let Some(entrance) = p.take() {
                    entrance.cancel();
                }
            });
        });
    }

    #[cfg(feature = "ssr")]
    let _ = refs;
}
