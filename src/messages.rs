//! JSON wire types for the backend's `/ask` and `/feedback` endpoints.

use serde::{Deserialize, Serialize};

/// Client → server: question body for POST `/ask`.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest<'a> {
    pub query: &'a str,
}

impl<'a> AskRequest<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }
}

/// Server → client: answer with supporting sources and safety flag.
///
/// The backend sends `warning: ""` when `isUnsafe` is false; absent and
/// empty both mean no warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub sources: Vec<String>,
    #[serde(rename = "isUnsafe")]
    pub is_unsafe: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl AskResponse {
    /// The warning text to display, if any. Empty strings count as absent.
    pub fn warning_text(&self) -> Option<&str> {
        if !self.is_unsafe {
            return None;
        }
        self.warning.as_deref().filter(|w| !w.is_empty())
    }
}

/// Client → server: feedback body for POST `/feedback`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest<'a> {
    #[serde(rename = "queryId")]
    pub query_id: &'a str,
    pub feedback: &'static str,
}

impl<'a> FeedbackRequest<'a> {
    pub fn new(query_id: &'a str, feedback: &'static str) -> Self {
        Self { query_id, feedback }
    }
}
