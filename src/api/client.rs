//! Estimator backend client
//!
//! `BreachApi` is the seam between the controller and the network. The
//! production implementation is `HttpBreachApi`, a thin JSON-over-POST
//! client around a shared `reqwest::Client`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::types::{
    AssessmentResult, CalculateRequest, ChatRequest, ChatResponse, RecommendationRequest,
    RecommendationResponse,
};
use crate::error::{ClientError, ClientResult};

/// Path of the cost calculation endpoint
pub const CALCULATE_PATH: &str = "/calculate";
/// Path of the recommendation endpoint
pub const RECOMMENDATION_PATH: &str = "/get_recommendation";
/// Path of the chat endpoint
pub const CHAT_PATH: &str = "/chat";

/// Operations the estimator backend offers
#[async_trait]
pub trait BreachApi: Send + Sync {
    /// Compute a breach assessment for a company profile
    async fn calculate(&self, request: &CalculateRequest) -> ClientResult<AssessmentResult>;

    /// Fetch security recommendations for a profile and its total breach cost
    async fn get_recommendation(
        &self,
        request: &RecommendationRequest,
    ) -> ClientResult<RecommendationResponse>;

    /// Send one chat message and return the assistant's reply text
    async fn chat(&self, request: &ChatRequest) -> ClientResult<String>;
}

/// HTTP implementation of [`BreachApi`]
#[derive(Debug, Clone)]
pub struct HttpBreachApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBreachApi {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing connection pool
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: crate::config::normalize_base_url(&base_url.into()),
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `body` as JSON and return the status with the raw response text
    async fn post_raw<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<(reqwest::StatusCode, String)> {
        let url = self.url(path);
        tracing::debug!(url = %url, "Sending backend request");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            body_len = text.len(),
            "Backend response received"
        );

        Ok((status, text))
    }

    /// POST `body` and decode a successful JSON response into `T`
    async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (status, text) = self.post_raw(path, body).await?;

        if !status.is_success() {
            tracing::error!(
                path = path,
                status_code = status.as_u16(),
                error_body = %text,
                "Backend returned error status"
            );
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            ClientError::Decode(format!("{} - Response body: {}", e, text))
        })
    }
}

#[async_trait]
impl BreachApi for HttpBreachApi {
    async fn calculate(&self, request: &CalculateRequest) -> ClientResult<AssessmentResult> {
        self.post_json(CALCULATE_PATH, request).await
    }

    async fn get_recommendation(
        &self,
        request: &RecommendationRequest,
    ) -> ClientResult<RecommendationResponse> {
        self.post_json(RECOMMENDATION_PATH, request).await
    }

    async fn chat(&self, request: &ChatRequest) -> ClientResult<String> {
        // The chat endpoint reports failures as `{error}` with a non-success
        // status, so the body is inspected before the status.
        let (status, text) = self.post_raw(CHAT_PATH, request).await?;

        match serde_json::from_str::<ChatResponse>(&text) {
            Ok(ChatResponse {
                error: Some(error), ..
            }) => Err(ClientError::Backend(error)),
            Ok(ChatResponse {
                response: Some(reply),
                ..
            }) if status.is_success() => Ok(reply),
            _ if !status.is_success() => Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            }),
            Ok(_) => Err(ClientError::Decode(
                "chat response contains neither `response` nor `error`".to_string(),
            )),
            Err(e) => Err(ClientError::Decode(format!(
                "{} - Response body: {}",
                e, text
            ))),
        }
    }
}
