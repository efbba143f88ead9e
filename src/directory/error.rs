//! Error handling for the directory module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Reqwest error, typically a connection failure or timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not a valid list of docentes.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub async fn from_response(response: reqwest::Response) -> FetchError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FetchError::Http { status, message }
    }
}
