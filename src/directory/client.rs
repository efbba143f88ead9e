//! Docente Directory Client
//!
//! Fetches the full docente list from the configured endpoint.

use crate::consts::cli_consts::HTTP_TIMEOUT_SECS;
use crate::directory::DocenteSource;
use crate::directory::error::FetchError;
use crate::docente::Docente;
use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;

// User-Agent string with panel version
const USER_AGENT: &str = concat!("docentes-panel/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    endpoint: String,
}

impl DirectoryClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn handle_response_status(response: Response) -> Result<Response, FetchError> {
        if !response.status().is_success() {
            return Err(FetchError::from_response(response).await);
        }
        Ok(response)
    }

    fn decode_response(bytes: &[u8]) -> Result<Vec<Docente>, FetchError> {
        serde_json::from_slice(bytes).map_err(FetchError::Parse)
    }
}

#[async_trait::async_trait]
impl DocenteSource for DirectoryClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_docentes(&self) -> Result<Vec<Docente>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        log::debug!(
            "Fetched {} bytes from {}",
            response_bytes.len(),
            self.endpoint
        );
        Self::decode_response(&response_bytes)
    }
}
