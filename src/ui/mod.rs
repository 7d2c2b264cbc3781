pub mod animation;
pub mod icon;
pub mod pages;
pub mod toast;
pub mod waitlist_form;

pub use animation::{EntranceRefs, use_entrance_animation};
pub use icon::{Icon, icons};
pub use toast::{ToastHost, ToastManager, provide_toast_context, use_toast_context};
pub use waitlist_form::WaitlistForm;
