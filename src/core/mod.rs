//! Core models and logic shared by the server and the hydrated page

pub mod animation;
pub mod config;
pub mod notify;
#[cfg(test)]
mod tests;
pub mod waitlist;
