use crate::error::{FetchFailure, FolioError, Result};
use crate::github::types::RepositorySummary;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
    owner: String,
}

impl GitHubClient {
    pub fn new(api_url: &str, owner: &str, token: Option<&str>) -> Result<Self> {
        // Failures go straight to the caller; the user retries by hand
        let mut builder = Octocrab::builder()
            .add_retry_config(RetryConfig::None)
            .base_uri(api_url)
            .map_err(|e| FolioError::GitHub(e.to_string()))?;

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            builder = builder.personal_token(token.to_string());
        }

        let octo = builder
            .build()
            .map_err(|e| FolioError::GitHub(e.to_string()))?;

        Ok(Self {
            octo,
            owner: owner.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// `GET /repos/{owner}/{name}`. Status and body are checked here rather
    /// than by octocrab so a 404 surfaces as a status code, not a decode error.
    pub async fn fetch_repository(
        &self,
        name: &str,
    ) -> std::result::Result<RepositorySummary, FetchFailure> {
        let route = format!("/repos/{}/{}", self.owner, name);

        let response = self
            .octo
            ._get(route)
            .await
            .map_err(|e| FetchFailure::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::HttpStatus(status.as_u16()));
        }

        let body = self
            .octo
            .body_to_string(response)
            .await
            .map_err(|e| FetchFailure::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchFailure::Parse(e.to_string()))
    }
}
