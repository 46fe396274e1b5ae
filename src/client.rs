//! HTTP transport client: one POST `/ask` exchange per question, plus a
//! fire-and-forget POST `/feedback`.

use crate::messages::{AskRequest, AskResponse, FeedbackRequest};

/// Feedback value for an answered query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Up,
    Down,
}

impl Feedback {
    pub fn as_str(self) -> &'static str {
        match self {
            Feedback::Up => "up",
            Feedback::Down => "down",
        }
    }
}

/// Transport failure: network error, non-2xx status, or non-JSON body.
#[derive(Debug)]
pub struct ClientError(pub String);

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError(e.to_string())
    }
}

/// HTTP client bound to a backend base URL (e.g. `http://localhost:5000`).
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a question and parse the answer. Any transport-level failure is
    /// returned as a recoverable error.
    pub async fn ask(&self, query: &str) -> Result<AskResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/ask", self.base_url))
            .json(&AskRequest::new(query))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError(format!(
                "server returned {}",
                response.status()
            )));
        }
        let body = response.text().await?;
        let parsed: AskResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }

    /// Post feedback for a previously answered query. The response body is
    /// ignored; only transport failures are reported.
    pub async fn send_feedback(
        &self,
        query_id: &str,
        feedback: Feedback,
    ) -> Result<(), ClientError> {
        self.http
            .post(format!("{}/feedback", self.base_url))
            .json(&FeedbackRequest::new(query_id, feedback.as_str()))
            .send()
            .await?;
        Ok(())
    }
}
