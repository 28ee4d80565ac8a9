//! UI Components
//!
//! Leptos components for the roster page.

pub mod activity_list;
pub mod signup_form;
pub mod status_banner;

pub use activity_list::ActivityList;
pub use signup_form::SignupForm;
pub use status_banner::StatusBanner;
