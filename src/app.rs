//! View-layer state machine: one pending exchange at a time, rendered as text.

use crate::messages::AskResponse;

/// Message shown for any transport failure; causes are not distinguished.
pub const FETCH_ERROR: &str = "Failed to fetch response from backend.";

/// Lifecycle of the single request/response exchange the view tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Loading,
    Success(AskResponse),
    Failure(String),
}

/// View state. Owns the current [`RequestState`]; mutated only by submit and
/// by the completion of the request it started.
#[derive(Debug, Clone)]
pub struct App {
    state: RequestState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    /// Accept a submit. Returns the trimmed query to send, or `None` when the
    /// input is empty/whitespace or a request is already pending (input is
    /// disabled while Loading). On acceptance the prior result or error is
    /// cleared and the state moves to Loading.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let query = input.trim();
        if query.is_empty() || self.is_loading() {
            return None;
        }
        self.state = RequestState::Loading;
        Some(query.to_string())
    }

    /// Complete the pending request with a successful response.
    pub fn resolve(&mut self, response: AskResponse) {
        self.state = RequestState::Success(response);
    }

    /// Complete the pending request with a transport failure.
    pub fn fail(&mut self) {
        self.state = RequestState::Failure(FETCH_ERROR.to_string());
    }

    /// Render the current state as display text. Idle renders nothing.
    pub fn render(&self) -> String {
        let mut out = String::new();
        match &self.state {
            RequestState::Idle => {}
            RequestState::Loading => out.push_str("Thinking...\n"),
            RequestState::Failure(message) => {
                out.push_str(message);
                out.push('\n');
            }
            RequestState::Success(response) => {
                if let Some(warning) = response.warning_text() {
                    out.push_str(&format!("⚠️ {}\n", warning));
                    out.push_str("Please consult a certified yoga therapist or doctor.\n\n");
                }
                out.push_str("AI Answer\n");
                out.push_str(&response.answer);
                out.push('\n');
                if !response.sources.is_empty() {
                    out.push_str("\nSources Used\n");
                    for source in &response.sources {
                        out.push_str(&format!("  - {}\n", source));
                    }
                }
            }
        }
        out
    }
}
