//! State Management
//!
//! Catalog model, status message state and the reactive page state.

pub mod catalog;
pub mod global;
pub mod status;
