//! API Layer
//!
//! The roster's only dependency on the network is the [`RosterApi`] trait;
//! [`HttpRosterApi`] is the browser implementation.

pub mod client;
pub mod error;

pub use client::HttpRosterApi;
pub use error::ApiError;

use async_trait::async_trait;

use crate::state::catalog::Catalog;

/// Operations the activities API offers
#[async_trait(?Send)]
pub trait RosterApi {
    /// `GET /activities`
    async fn fetch_activities(&self) -> Result<Catalog, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`; returns the
    /// server's confirmation text
    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    /// `DELETE /activities/{activity}/unregister?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError>;
}
