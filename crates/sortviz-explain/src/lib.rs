#![forbid(unsafe_code)]

//! The explanation requester: one best-effort HTTP call per narrated step.
//!
//! Narration never gates the animation. When the switch is off the narrator
//! answers synchronously with a fixed message and performs no transport
//! call; when a request fails in any way (transport, non-2xx status,
//! malformed payload) the failure is swallowed and replaced with a fixed
//! user-visible message. No error from this crate ever reaches a driver.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use sortviz_core::session::NarrationToggle;
use sortviz_core::step::StepDescriptor;

/// Shown when narration is switched off.
pub const DISABLED_MESSAGE: &str = "Narration is off. Toggle it on to get step explanations.";

/// Shown when the explanation service could not produce an answer.
pub const FAILURE_MESSAGE: &str = "Could not fetch an explanation for this step.";

/// Request body of the explanation service.
#[derive(Debug, Serialize)]
struct ExplainRequest<'a> {
    prompt: &'a str,
}

/// Success body of the explanation service.
#[derive(Debug, Deserialize)]
struct ExplainResponse {
    explanation: String,
}

/// Errors internal to the narration path. They are logged and mapped to
/// [`FAILURE_MESSAGE`], never propagated.
#[derive(Debug)]
pub enum ExplainError {
    /// The request never completed (connection, timeout, body decode).
    Transport(reqwest::Error),
    /// The service answered with a non-success status.
    Status(u16),
}

impl std::fmt::Display for ExplainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "explanation transport error: {err}"),
            Self::Status(code) => write!(f, "explanation service returned status {code}"),
        }
    }
}

impl std::error::Error for ExplainError {}

/// One attempt to obtain explanation text for a prompt.
pub trait ExplainTransport {
    fn request(&self, prompt: String) -> impl Future<Output = Result<String, ExplainError>> + Send;
}

/// Production transport: JSON POST against the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ExplainTransport for HttpTransport {
    async fn request(&self, prompt: String) -> Result<String, ExplainError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ExplainRequest { prompt: &prompt })
            .send()
            .await
            .map_err(ExplainError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplainError::Status(status.as_u16()));
        }

        let body: ExplainResponse = response.json().await.map_err(ExplainError::Transport)?;
        Ok(body.explanation)
    }
}

/// Build the natural-language prompt for one step.
pub fn build_prompt(descriptor: &StepDescriptor) -> String {
    format!(
        "You are narrating a {} visualization for a beginner. \
         In one short sentence, explain this step. \
         Step kind: {}. Current array: {:?}. {}",
        descriptor.algorithm,
        descriptor.kind.name(),
        descriptor.snapshot,
        descriptor.context,
    )
}

/// Turns step descriptors into narration text, honoring the shared toggle.
#[derive(Debug)]
pub struct Narrator<T: ExplainTransport> {
    transport: T,
    toggle: NarrationToggle,
}

impl<T: ExplainTransport> Narrator<T> {
    pub fn new(transport: T, toggle: NarrationToggle) -> Self {
        Self { transport, toggle }
    }

    /// Produce narration text for one step.
    ///
    /// Infallible by design: every failure mode maps to a fixed message.
    pub async fn explain(&self, descriptor: &StepDescriptor) -> String {
        if !self.toggle.enabled() {
            return DISABLED_MESSAGE.to_string();
        }

        let prompt = build_prompt(descriptor);
        debug!(
            algorithm = descriptor.algorithm.name(),
            kind = descriptor.kind.name(),
            "requesting explanation"
        );
        match self.transport.request(prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "explanation request failed");
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}
