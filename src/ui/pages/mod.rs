//! Application pages module
//!
//! - Waitlist page (home)
//! - Not found page

mod not_found;
mod waitlist;

pub use not_found::NotFoundPage;
pub use waitlist::WaitlistPage;
