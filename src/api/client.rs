//! HTTP API Client
//!
//! `RosterApi` over `gloo-net`, plus the endpoint paths it talks to.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use urlencoding::encode;

use super::{ApiError, RosterApi};
use crate::state::catalog::Catalog;

// ============ Endpoints ============

pub fn activities_url(api_base: &str) -> String {
    format!("{}/activities", api_base)
}

pub fn signup_url(api_base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        api_base,
        encode(activity),
        encode(email)
    )
}

pub fn unregister_url(api_base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/unregister?email={}",
        api_base,
        encode(activity),
        encode(email)
    )
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorDetail {
    /// The detail text, if the server sent a plain string
    pub fn text(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(text)) => Some(text),
            _ => None,
        }
    }
}

// ============ Client ============

/// Talks to the activities API at `api_base` (empty for same origin)
#[derive(Clone, Debug)]
pub struct HttpRosterApi {
    api_base: String,
}

impl HttpRosterApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    async fn mutate(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body: ErrorDetail = response
                .json()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))?;
            return Err(ApiError::Rejected { status, detail: body.text() });
        }

        let body: MessageResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(body.message)
    }
}

#[async_trait(?Send)]
impl RosterApi for HttpRosterApi {
    async fn fetch_activities(&self) -> Result<Catalog, ApiError> {
        let response = Request::get(&activities_url(&self.api_base))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let detail = match response.json::<ErrorDetail>().await {
                Ok(body) => body.text(),
                Err(_) => None,
            };
            return Err(ApiError::Rejected { status, detail });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.mutate(Request::post(&signup_url(&self.api_base, activity, email)))
            .await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        self.mutate(Request::delete(&unregister_url(&self.api_base, activity, email)))
            .await
    }
}
