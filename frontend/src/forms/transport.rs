use gloo_net::http::Request;
use log::{info, warn};

use super::submission::{interpret, FormSubmission, SubmitError};

/// Status and body of a finished HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post(&self, submission: &FormSubmission) -> Result<RawResponse, SubmitError>;
}

/// JSON POST to the intake endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl FormTransport for HttpTransport {
    async fn post(&self, submission: &FormSubmission) -> Result<RawResponse, SubmitError> {
        let request = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(submission)
            .map_err(|e| SubmitError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        // The body only matters on failure and may legitimately be empty
        let body = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}

/// Sends one submission and interprets the reply. Never retries.
pub async fn deliver<T: FormTransport>(
    transport: &T,
    submission: &FormSubmission,
) -> Result<(), SubmitError> {
    info!("Submitting {} form", submission.form_type);
    let outcome = match transport.post(submission).await {
        Ok(RawResponse { status, body }) => {
            info!("{} form answered with status {}", submission.form_type, status);
            interpret(status, &body)
        }
        Err(e) => Err(e),
    };
    if let Err(e) = &outcome {
        warn!("{} form failed: {}", submission.form_type, e);
    }
    outcome
}
