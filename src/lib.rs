//! Shared Yoga Q&A client library (config, HTTP wire types, view state).
//! Used by the `yoga-qa` terminal binary.

pub mod app;
pub mod client;
pub mod config;
pub mod messages;

pub use app::{App, RequestState, FETCH_ERROR};
pub use client::{Client, ClientError, Feedback};
pub use config::{default_config_path, ApiSection, Config, ConfigError};
pub use messages::{AskRequest, AskResponse, FeedbackRequest};
