pub mod backend;
pub mod github;

use async_trait::async_trait;
use reqwest::Response;

use crate::config::Config;
use crate::error::{AppError, FetchError};
use crate::model::{ContributorRecord, RepositorySummary};

pub use backend::BackendClient;
pub use github::GitHubClient;

const USER_AGENT_VALUE: &str = concat!("showcase/", env!("CARGO_PKG_VERSION"));

/// Where contributor records and their totals come from
#[async_trait]
pub trait ContributorSource: Send + Sync {
    async fn list_contributors(&self) -> Result<Vec<ContributorRecord>, FetchError>;

    async fn total_contribution(&self, id: i64) -> Result<u32, FetchError>;
}

/// Where a contributor's public repositories come from
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn list_repositories(&self, handle: &str) -> Result<Vec<RepositorySummary>, FetchError>;
}

/// Clients shared by the server functions through the Leptos context
#[derive(Clone)]
pub struct ApiClients {
    pub backend: BackendClient,
    pub github: GitHubClient,
}

impl ApiClients {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()
            .map_err(FetchError::from)?;

        Ok(Self {
            backend: BackendClient::new(http.clone(), &config.backend.url)?,
            github: GitHubClient::new(http, &config.github.api, config.github.token.clone())?,
        })
    }
}

/// Turn a 403 carrying `x-ratelimit-reset` into [`FetchError::RateLimited`]
fn check_rate_limit(response: &Response) -> Result<(), FetchError> {
    if response.status() != reqwest::StatusCode::FORBIDDEN {
        return Ok(());
    }

    let Some(reset) = response
        .headers()
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
    else {
        return Ok(());
    };

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    Err(FetchError::RateLimited(reset.saturating_sub(now)))
}

/// Parse a base URL so that relative joins append to its path
fn base_url(raw: &str) -> Result<url::Url, FetchError> {
    let mut url = url::Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
